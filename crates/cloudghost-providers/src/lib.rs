// Error types
pub mod error;

// Shared HTTP plumbing
pub mod endpoints;
pub mod http;

// Provider implementations
pub mod azure;
pub mod gcp;

pub use endpoints::{AzureEndpoints, Endpoints, GcpEndpoints};
pub use error::{Error, Operation, Result};
pub use http::{HttpClient, HttpSettings};

pub use azure::{AzureClient, ClientCredentials, SharedKeyCredential, StorageClient};
pub use gcp::{GcpClient, Probe, permission_probes};
