mod support;

mod subscription;
