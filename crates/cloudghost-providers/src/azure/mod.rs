//! Azure adapters.
//!
//! - `identity`: client-credentials token grant and subscription listing
//! - `management`: resource-manager enumeration (groups, roles, storage, policies)
//! - `storage`: Blob service calls signed with an account SharedKey

pub mod identity;
pub mod management;
pub mod shared_key;
pub mod storage;

use crate::{AzureEndpoints, HttpClient};

pub use identity::{AzureToken, ClientCredentials, MANAGEMENT_SCOPE};
pub use management::{api_versions, extract_resource_group};
pub use shared_key::SharedKeyCredential;
pub use storage::{BlobPage, StorageClient};

/// Client for the Azure identity platform and resource manager
#[derive(Debug, Clone)]
pub struct AzureClient {
    http: HttpClient,
    endpoints: AzureEndpoints,
}

impl AzureClient {
    pub fn new(http: HttpClient, endpoints: AzureEndpoints) -> Self {
        Self { http, endpoints }
    }

    pub fn endpoints(&self) -> &AzureEndpoints {
        &self.endpoints
    }
}
