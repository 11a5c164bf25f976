use super::AzureClient;
use crate::http::body_text;
use crate::{Error, Operation, Result};
use cloudghost_types::{KeyListing, StorageAccount};
use reqwest::StatusCode;
use reqwest::header::CONTENT_LENGTH;
use serde::Deserialize;
use serde_json::Value;

pub mod api_versions {
    pub const SUBSCRIPTIONS: &str = "2020-01-01";
    pub const RESOURCE_GROUPS: &str = "2021-04-01";
    pub const ROLE_ASSIGNMENTS: &str = "2022-04-01";
    pub const STORAGE: &str = "2022-09-01";
    pub const POLICY_DEFINITIONS: &str = "2021-06-01";
}

#[derive(Deserialize)]
struct StorageAccountList {
    #[serde(default)]
    value: Vec<RawStorageAccount>,
}

#[derive(Deserialize)]
struct RawStorageAccount {
    #[serde(default)]
    name: String,
    #[serde(default)]
    id: String,
}

impl AzureClient {
    pub async fn subscriptions_document(&self, token: &str) -> Result<Value> {
        let url = self
            .endpoints
            .management_url("/subscriptions", api_versions::SUBSCRIPTIONS);
        self.get_document(&url, token).await
    }

    pub async fn resource_groups(&self, token: &str, subscription_id: &str) -> Result<Value> {
        let url = self.endpoints.management_url(
            &format!("/subscriptions/{}/resourcegroups", subscription_id),
            api_versions::RESOURCE_GROUPS,
        );
        self.get_document(&url, token).await
    }

    pub async fn role_assignments(&self, token: &str, subscription_id: &str) -> Result<Value> {
        let url = self.endpoints.management_url(
            &format!(
                "/subscriptions/{}/providers/Microsoft.Authorization/roleAssignments",
                subscription_id
            ),
            api_versions::ROLE_ASSIGNMENTS,
        );
        self.get_document(&url, token).await
    }

    pub async fn policy_definitions(&self, token: &str) -> Result<Value> {
        let url = self.endpoints.management_url(
            "/providers/Microsoft.Authorization/policyDefinitions",
            api_versions::POLICY_DEFINITIONS,
        );
        self.get_document(&url, token).await
    }

    pub async fn storage_accounts(
        &self,
        token: &str,
        subscription_id: &str,
    ) -> Result<Vec<StorageAccount>> {
        let url = self.endpoints.management_url(
            &format!(
                "/subscriptions/{}/providers/Microsoft.Storage/storageAccounts",
                subscription_id
            ),
            api_versions::STORAGE,
        );

        let response = self.http.send(self.http.get(&url).bearer_auth(token)).await?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(Error::rejected(
                Operation::AzureManagement,
                status,
                body_text(response).await,
            ));
        }

        let list: StorageAccountList = response.json().await?;
        Ok(list
            .value
            .into_iter()
            .map(|raw| StorageAccount {
                resource_group: extract_resource_group(&raw.id).to_string(),
                name: raw.name,
                id: raw.id,
            })
            .collect())
    }

    /// POST `listKeys` for one account. Never fails; the outcome is part of the report.
    pub async fn list_storage_keys(
        &self,
        token: &str,
        subscription_id: &str,
        account: &StorageAccount,
    ) -> KeyListing {
        let url = self.endpoints.management_url(
            &format!(
                "/subscriptions/{}/resourceGroups/{}/providers/Microsoft.Storage/storageAccounts/{}/listKeys",
                subscription_id, account.resource_group, account.name
            ),
            api_versions::STORAGE,
        );

        let request = self
            .http
            .post(&url)
            .bearer_auth(token)
            .header(CONTENT_LENGTH, "0");

        let response = match self.http.send(request).await {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(account = %account.name, error = %err, "listKeys request failed");
                return KeyListing::RequestFailed {
                    error: err.to_string(),
                };
            }
        };

        let status = response.status();
        if status != StatusCode::OK {
            tracing::warn!(account = %account.name, %status, "listKeys denied");
            return KeyListing::Denied {
                status: status.as_u16(),
                reason: status.to_string(),
            };
        }

        KeyListing::Keys {
            body: body_text(response).await,
        }
    }

    async fn get_document(&self, url: &str, token: &str) -> Result<Value> {
        let response = self.http.send(self.http.get(url).bearer_auth(token)).await?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(Error::rejected(
                Operation::AzureManagement,
                status,
                body_text(response).await,
            ));
        }

        Ok(response.json().await?)
    }
}

/// Resource group segment of an ARM resource ID, or `""` when the ID has none
pub fn extract_resource_group(id: &str) -> &str {
    let mut parts = id.split('/');
    while let Some(part) = parts.next() {
        if part == "resourceGroups" {
            return parts.next().unwrap_or("");
        }
    }
    ""
}
