use crate::workspace::Workspace;
use crate::{Error, Result};
use cloudghost_core::keys;
use cloudghost_providers::ClientCredentials;
use cloudghost_providers::azure::AzureToken;
use cloudghost_types::Subscription;

/// Client-credentials login followed by default subscription selection.
///
/// The two steps are separate so callers can report the stored token before the
/// subscription lookup runs. Each step is its own read-modify-write of the
/// credential store; keys a step does not touch are kept as they were.
pub struct AuthOps<'a> {
    workspace: &'a Workspace,
}

impl<'a> AuthOps<'a> {
    pub fn new(workspace: &'a Workspace) -> Self {
        Self { workspace }
    }

    /// Request a management token and persist `ACCESS_TOKEN` and `AZURE_TENANT_ID`
    pub async fn acquire_token(&self, credentials: &ClientCredentials) -> Result<AzureToken> {
        let mut store = self.workspace.credentials()?;
        let token = self.workspace.azure().request_token(credentials).await?;

        store.set(keys::ACCESS_TOKEN, token.access_token.clone());
        store.set(keys::AZURE_TENANT_ID, credentials.tenant_id.clone());
        store.save()?;

        tracing::info!(path = %store.path().display(), "access token stored");
        Ok(token)
    }

    /// Pick the first subscription visible to `token` and persist its id and name
    pub async fn select_subscription(&self, token: &str) -> Result<Subscription> {
        let mut store = self.workspace.credentials()?;
        let subscription = self
            .workspace
            .azure()
            .list_subscriptions(token)
            .await?
            .into_iter()
            .next()
            .ok_or(Error::NoSubscriptions)?;

        store.set(keys::AZURE_SUBSCRIPTION_ID, subscription.id.clone());
        store.set(keys::AZURE_SUBSCRIPTION_NAME, subscription.name.clone());
        store.save()?;

        tracing::info!(subscription = %subscription, "subscription selected");
        Ok(subscription)
    }
}
