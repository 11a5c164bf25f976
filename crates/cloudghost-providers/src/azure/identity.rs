use super::AzureClient;
use super::management::api_versions;
use crate::http::body_text;
use crate::{Error, Operation, Result};
use cloudghost_types::Subscription;
use reqwest::StatusCode;
use serde::Deserialize;

/// Scope requested for resource-manager tokens
pub const MANAGEMENT_SCOPE: &str = "https://management.azure.com/.default";

/// Service principal secret used for the client-credentials grant
#[derive(Clone)]
pub struct ClientCredentials {
    pub client_id: String,
    pub client_secret: String,
    pub tenant_id: String,
}

impl std::fmt::Debug for ClientCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .field("tenant_id", &self.tenant_id)
            .finish()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AzureToken {
    #[serde(default)]
    pub access_token: String,
    #[serde(default)]
    pub expires_in: Option<u64>,
}

#[derive(Deserialize)]
struct SubscriptionList {
    #[serde(default)]
    value: Vec<Subscription>,
}

impl AzureClient {
    /// OAuth2 client-credentials grant against `{login}/{tenant}/oauth2/v2.0/token`
    pub async fn request_token(&self, credentials: &ClientCredentials) -> Result<AzureToken> {
        let url = self.endpoints.token_url(&credentials.tenant_id);
        let form = [
            ("client_id", credentials.client_id.as_str()),
            ("client_secret", credentials.client_secret.as_str()),
            ("grant_type", "client_credentials"),
            ("scope", MANAGEMENT_SCOPE),
        ];

        let response = self.http.send(self.http.post(&url).form(&form)).await?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(Error::rejected(
                Operation::AzureToken,
                status,
                body_text(response).await,
            ));
        }

        let token: AzureToken = response.json().await?;
        if token.access_token.is_empty() {
            return Err(Error::Response("no access_token in response".to_string()));
        }

        tracing::info!(
            tenant = %credentials.tenant_id,
            expires_in = ?token.expires_in,
            "access token acquired"
        );
        Ok(token)
    }

    /// Subscriptions visible to `token`, in the order the API returns them
    pub async fn list_subscriptions(&self, token: &str) -> Result<Vec<Subscription>> {
        let url = self
            .endpoints
            .management_url("/subscriptions", api_versions::SUBSCRIPTIONS);

        let response = self.http.send(self.http.get(&url).bearer_auth(token)).await?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(Error::rejected(
                Operation::AzureSubscriptions,
                status,
                body_text(response).await,
            ));
        }

        let list: SubscriptionList = response.json().await?;
        Ok(list.value)
    }
}
