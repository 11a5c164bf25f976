use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbeVerdictViewModel {
    Granted,
    Unauthorized,
    Forbidden,
    Unexpected,
    RequestFailed,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProbeResultViewModel {
    pub name: String,
    /// Token info style probe: the body is shown whatever the status
    pub dump: bool,
    pub verdict: ProbeVerdictViewModel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PermissionSweepViewModel {
    pub project_id: String,
    pub granted: usize,
    pub probes: Vec<ProbeResultViewModel>,
}

/// A provider listing printed verbatim (compute instances, buckets)
#[derive(Debug, Clone, Serialize)]
pub struct ListingViewModel {
    pub project_id: String,
    pub resource: String,
    pub body: Value,
}

#[derive(Debug, Clone, Serialize)]
pub struct ServiceAccountsViewModel {
    pub emails: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ImpersonationStatusViewModel {
    Success { access_token: String },
    Failed { status: u16 },
    DecodeFailed { error: String },
    RequestFailed { error: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct ImpersonationAttemptViewModel {
    pub email: String,
    #[serde(flatten)]
    pub status: ImpersonationStatusViewModel,
}

#[derive(Debug, Clone, Serialize)]
pub struct ImpersonationViewModel {
    pub project_id: String,
    pub service_accounts: Vec<String>,
    pub succeeded: usize,
    pub attempts: Vec<ImpersonationAttemptViewModel>,
}
