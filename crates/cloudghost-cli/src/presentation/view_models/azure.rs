use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Serialize)]
pub struct TokenStoredViewModel {
    pub tenant_id: String,
    pub env_file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<u64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubscriptionSelectedViewModel {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AuthViewModel {
    pub token: TokenStoredViewModel,
    pub subscription: SubscriptionSelectedViewModel,
}

#[derive(Debug, Clone, Serialize)]
pub struct BlobListViewModel {
    pub account: String,
    pub container: String,
    pub blobs: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BlobDownloadViewModel {
    pub blob: String,
    pub output: String,
    pub bytes: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SectionViewModel {
    pub section: String,
    #[serde(skip)]
    pub title: Option<&'static str>,
    #[serde(flatten)]
    pub content: SectionContentViewModel,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SectionContentViewModel {
    Document { body: Value },
    StorageAccounts { accounts: Vec<StorageAccountViewModel> },
}

#[derive(Debug, Clone, Serialize)]
pub struct StorageAccountViewModel {
    pub name: String,
    pub resource_group: String,
    pub keys: KeyStatusViewModel,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum KeyStatusViewModel {
    /// Raw `listKeys` response body
    Listed { body: String },
    Denied { code: u16, reason: String },
    RequestFailed { error: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct ManagementViewModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription: Option<String>,
    pub sections: Vec<SectionViewModel>,
}
