use reqwest::StatusCode;
use std::fmt;

/// Result type for cloudghost-providers operations
pub type Result<T> = std::result::Result<T, Error>;

/// Provider API call whose non-success status is reported with its own wording
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    AzureToken,
    AzureSubscriptions,
    AzureManagement,
    BlobList,
    BlobDownload,
    GcpCompute,
    GcpBuckets,
    GcpServiceAccounts,
}

/// Error types that can occur in the providers layer
#[derive(Debug)]
pub enum Error {
    /// HTTP transport failed (DNS, TLS, timeout, connection reset)
    Http(reqwest::Error),

    /// Provider answered with a non-success status
    Rejected {
        operation: Operation,
        status: StatusCode,
        body: String,
    },

    /// Response decoded but did not contain what the operation needs
    Response(String),

    /// JSON parsing failed
    Json(serde_json::Error),

    /// XML parsing failed
    Xml(String),

    /// Storage account key is not valid base64
    InvalidKey(String),

    /// IO operation failed
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Http(err) => write!(f, "request failed: {}", err),
            Error::Rejected {
                operation,
                status,
                body,
            } => match operation {
                Operation::AzureToken => write!(f, "token request failed: {}\n{}", status, body),
                Operation::AzureSubscriptions => {
                    write!(f, "subscription request failed: {}\n{}", status, body)
                }
                Operation::AzureManagement => write!(f, "non-OK HTTP status: {}", status),
                Operation::BlobList => write!(f, "failed to list blobs: {}\n{}", status, body),
                Operation::BlobDownload => {
                    write!(f, "failed to download blob: {}\n{}", status, body)
                }
                Operation::GcpCompute => write!(
                    f,
                    "Failed to retrieve compute resources. Status code: {}, token is invalid or expired",
                    status.as_u16()
                ),
                Operation::GcpBuckets => write!(
                    f,
                    "Failed to retrieve storage buckets. Status code: {}, token is invalid or expired",
                    status.as_u16()
                ),
                Operation::GcpServiceAccounts => write!(
                    f,
                    "Failed to list service accounts (status: {}). Token may be invalid.",
                    status.as_u16()
                ),
            },
            Error::Response(msg) => write!(f, "{}", msg),
            Error::Json(err) => write!(f, "failed to decode response: {}", err),
            Error::Xml(msg) => write!(f, "XML parse error: {}", msg),
            Error::InvalidKey(msg) => write!(f, "failed to create credential: {}", msg),
            Error::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Http(err) => Some(err),
            Error::Json(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Rejected { .. } | Error::Response(_) | Error::Xml(_) | Error::InvalidKey(_) => {
                None
            }
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl Error {
    pub(crate) fn rejected(operation: Operation, status: StatusCode, body: String) -> Self {
        Error::Rejected {
            operation,
            status,
            body,
        }
    }

    /// HTTP status carried by a rejected call
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}
