//! GCP adapters.
//!
//! Every call is authorized by a caller-supplied OAuth2 bearer token; the tool never
//! mints GCP tokens itself (other than through `generateAccessToken` impersonation).

pub mod iam;
pub mod list;
pub mod probe;

use crate::{GcpEndpoints, HttpClient};

pub use iam::CLOUD_PLATFORM_SCOPE;
pub use probe::{Probe, permission_probes};

/// Client bound to one bearer token
#[derive(Clone)]
pub struct GcpClient {
    http: HttpClient,
    endpoints: GcpEndpoints,
    token: String,
}

impl std::fmt::Debug for GcpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GcpClient")
            .field("endpoints", &self.endpoints)
            .field("token", &"***")
            .finish()
    }
}

impl GcpClient {
    pub fn new(http: HttpClient, endpoints: GcpEndpoints, token: impl Into<String>) -> Self {
        Self {
            http,
            endpoints,
            token: token.into(),
        }
    }

    pub fn endpoints(&self) -> &GcpEndpoints {
        &self.endpoints
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}
