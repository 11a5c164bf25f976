use super::GcpClient;
use crate::http::body_text;
use crate::{Error, Operation, Result};
use cloudghost_types::{ImpersonationOutcome, ServiceAccount};
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::{Value, json};

/// Scope requested for impersonated tokens
pub const CLOUD_PLATFORM_SCOPE: &str = "https://www.googleapis.com/auth/cloud-platform";

#[derive(Deserialize)]
struct ServiceAccountList {
    #[serde(default)]
    accounts: Vec<Value>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeneratedToken {
    access_token: String,
}

impl GcpClient {
    /// Service accounts in `project`. Entries without an email are skipped.
    pub async fn list_service_accounts(&self, project: &str) -> Result<Vec<ServiceAccount>> {
        let url = self.endpoints.service_accounts_url(project);
        let response = self
            .http
            .send(self.http.get(&url).bearer_auth(&self.token))
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(Error::rejected(
                Operation::GcpServiceAccounts,
                status,
                body_text(response).await,
            ));
        }

        let list: ServiceAccountList = response.json().await?;
        let accounts: Vec<ServiceAccount> = list
            .accounts
            .into_iter()
            .filter_map(|raw| serde_json::from_value(raw).ok())
            .collect();

        if accounts.is_empty() {
            return Err(Error::Response(
                "No service accounts found or response format invalid".to_string(),
            ));
        }

        Ok(accounts)
    }

    /// Try to mint a token for `email` with the caller's token
    pub async fn generate_access_token(&self, email: &str) -> ImpersonationOutcome {
        let url = self.endpoints.generate_access_token_url(email);
        let request = self
            .http
            .post(&url)
            .bearer_auth(&self.token)
            .json(&json!({ "scope": [CLOUD_PLATFORM_SCOPE] }));

        let response = match self.http.send(request).await {
            Ok(response) => response,
            Err(err) => {
                return ImpersonationOutcome::RequestFailed {
                    error: err.to_string(),
                };
            }
        };

        let status = response.status();
        if status != StatusCode::OK {
            tracing::debug!(email, %status, "impersonation refused");
            return ImpersonationOutcome::Failed {
                status: status.as_u16(),
            };
        }

        match response.json::<GeneratedToken>().await {
            Ok(token) => {
                tracing::info!(email, "impersonation succeeded");
                ImpersonationOutcome::Success {
                    access_token: token.access_token,
                }
            }
            Err(err) => ImpersonationOutcome::DecodeFailed {
                error: err.to_string(),
            },
        }
    }
}
