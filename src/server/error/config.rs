use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// documentation or `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// A configured URL failed to parse.
    ///
    /// Raised during startup when one of the OAuth endpoint or redirect URLs
    /// is malformed.
    #[error("Invalid URL in configuration '{0}': {1}")]
    InvalidUrl(String, url::ParseError),
}
