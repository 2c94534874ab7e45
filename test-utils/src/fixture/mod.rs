//! Canned PUBG API payloads for tests.

pub mod match_payload;
