use std::fmt;

/// Result type for cloudghost-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// Credential store or path resolution error
    Core(cloudghost_core::Error),

    /// Provider layer error
    Provider(cloudghost_providers::Error),

    /// IO operation failed
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// Command input rejected before any request was sent
    Validation(String),

    /// Token is valid but sees no subscription
    NoSubscriptions,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Lower layers already carry the user-facing wording
            Error::Core(err) => write!(f, "{}", err),
            Error::Provider(err) => write!(f, "{}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::Validation(msg) => write!(f, "{}", msg),
            Error::NoSubscriptions => write!(f, "no subscriptions found"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Core(err) => Some(err),
            Error::Provider(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Config(_) | Error::Validation(_) | Error::NoSubscriptions => None,
        }
    }
}

impl From<cloudghost_core::Error> for Error {
    fn from(err: cloudghost_core::Error) -> Self {
        Error::Core(err)
    }
}

impl From<cloudghost_providers::Error> for Error {
    fn from(err: cloudghost_providers::Error) -> Self {
        Error::Provider(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}
