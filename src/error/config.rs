use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// documentation or `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// The configured Discord webhook URL could not be parsed.
    #[error("Invalid webhook URL '{value}': {source}")]
    InvalidWebhookUrl {
        /// The URL value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: url::ParseError,
    },
}
