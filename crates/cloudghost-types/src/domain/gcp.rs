use serde::{Deserialize, Serialize};
use std::fmt;

/// GCP project identifier (e.g. `my-project-123`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(String);

impl ProjectId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ProjectId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ProjectId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for ProjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceAccount {
    pub email: String,
    #[serde(rename = "displayName", default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ImpersonationOutcome {
    Success { access_token: String },
    Failed { status: u16 },
    /// 200 whose body carries no usable token
    DecodeFailed { error: String },
    RequestFailed { error: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImpersonationAttempt {
    pub email: String,
    #[serde(flatten)]
    pub outcome: ImpersonationOutcome,
}

impl ImpersonationAttempt {
    pub fn succeeded(&self) -> bool {
        matches!(self.outcome, ImpersonationOutcome::Success { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImpersonationReport {
    pub project_id: ProjectId,
    pub service_accounts: Vec<ServiceAccount>,
    pub attempts: Vec<ImpersonationAttempt>,
}

impl ImpersonationReport {
    pub fn success_count(&self) -> usize {
        self.attempts.iter().filter(|a| a.succeeded()).count()
    }
}
