use serde::Serialize;
use serde_json::Value;

/// How a probe's response is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbeKind {
    /// Classify by HTTP status only
    Status,
    /// Decode and report the body regardless of status
    Dump,
}

/// Classification of a single permission probe
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum AccessVerdict {
    /// 200
    Granted,
    /// 401: token lacks the permission or has expired
    Unauthorized,
    /// 403: typically the API is not enabled for the project
    Forbidden,
    Unexpected { status: u16 },
    RequestFailed { error: String },
}

impl AccessVerdict {
    pub fn from_status(status: u16) -> Self {
        match status {
            200 => AccessVerdict::Granted,
            401 => AccessVerdict::Unauthorized,
            403 => AccessVerdict::Forbidden,
            other => AccessVerdict::Unexpected { status: other },
        }
    }

    pub fn is_granted(&self) -> bool {
        matches!(self, AccessVerdict::Granted)
    }
}

/// Result of a `Dump` probe body decode
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "decode", rename_all = "snake_case")]
pub enum ProbeBody {
    Json { body: Value },
    /// `error` is the complete message shown to the user
    Invalid { error: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProbeReport {
    pub name: String,
    pub kind: ProbeKind,
    pub verdict: AccessVerdict,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<ProbeBody>,
}
