use crate::{Error, Result};
use cloudghost_core::{CredentialStore, keys};
use cloudghost_providers::AzureClient;
use cloudghost_types::{ManagementSection, SectionPayload, SectionReport, StorageAccountReport};

pub const MISSING_TOKEN: &str = "--token is required";
pub const NO_SECTION: &str =
    "No enumeration option selected. Use --subscriptions, --groups, --roles, --policies, or --storage";
pub const MISSING_SUBSCRIPTION: &str =
    "--subscription is required for --groups, --roles and --storage";

/// Flags of `azure enum management` as given on the command line
#[derive(Debug, Clone, Default)]
pub struct ManagementRequest {
    pub token: Option<String>,
    pub subscription: Option<String>,
    pub subscriptions: bool,
    pub groups: bool,
    pub roles: bool,
    pub policies: bool,
    pub storage: bool,
}

/// A validated management run: every section it lists can be sent as-is
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagementPlan {
    token: String,
    subscription: Option<String>,
    sections: Vec<ManagementSection>,
}

impl ManagementPlan {
    /// Fill missing token/subscription from the credential store, then validate.
    ///
    /// `load_store` runs at most once, and only when a value the run needs was
    /// not given on the command line.
    pub fn resolve<F>(request: ManagementRequest, load_store: F) -> Result<Self>
    where
        F: FnOnce() -> Result<CredentialStore>,
    {
        let selected = [
            (request.subscriptions, ManagementSection::Subscriptions),
            (request.groups, ManagementSection::ResourceGroups),
            (request.roles, ManagementSection::RoleAssignments),
            (request.storage, ManagementSection::StorageAccounts),
            (request.policies, ManagementSection::PolicyDefinitions),
        ];
        let sections: Vec<ManagementSection> = selected
            .into_iter()
            .filter_map(|(on, section)| on.then_some(section))
            .collect();
        let needs_subscription = sections.iter().any(|s| s.requires_subscription());

        let mut token = non_empty(request.token);
        let mut subscription = non_empty(request.subscription);
        if token.is_none() || (subscription.is_none() && needs_subscription) {
            let store = load_store()?;
            token = token.or_else(|| store.get(keys::ACCESS_TOKEN).map(str::to_string));
            subscription =
                subscription.or_else(|| store.get(keys::AZURE_SUBSCRIPTION_ID).map(str::to_string));
        }
        let token = token.ok_or_else(|| Error::Validation(MISSING_TOKEN.to_string()))?;

        if sections.is_empty() {
            return Err(Error::Validation(NO_SECTION.to_string()));
        }

        if subscription.is_none() && needs_subscription {
            return Err(Error::Validation(MISSING_SUBSCRIPTION.to_string()));
        }

        Ok(Self {
            token,
            subscription,
            sections,
        })
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn subscription(&self) -> Option<&str> {
        self.subscription.as_deref()
    }

    /// Sections in execution order
    pub fn sections(&self) -> &[ManagementSection] {
        &self.sections
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Runs the sections of a validated plan against the resource manager
pub struct ManagementOps {
    client: AzureClient,
    plan: ManagementPlan,
}

impl ManagementOps {
    pub fn new(client: AzureClient, plan: ManagementPlan) -> Self {
        Self { client, plan }
    }

    pub fn plan(&self) -> &ManagementPlan {
        &self.plan
    }

    /// Run one section. A non-200 fails the section; per-account key failures do not.
    pub async fn run_section(&self, section: ManagementSection) -> Result<SectionReport> {
        let token = self.plan.token();
        let payload = match section {
            ManagementSection::Subscriptions => SectionPayload::Document {
                body: self.client.subscriptions_document(token).await?,
            },
            ManagementSection::ResourceGroups => SectionPayload::Document {
                body: self
                    .client
                    .resource_groups(token, self.subscription()?)
                    .await?,
            },
            ManagementSection::RoleAssignments => SectionPayload::Document {
                body: self
                    .client
                    .role_assignments(token, self.subscription()?)
                    .await?,
            },
            ManagementSection::StorageAccounts => SectionPayload::StorageAccounts {
                accounts: self.storage_accounts().await?,
            },
            ManagementSection::PolicyDefinitions => SectionPayload::Document {
                body: self.client.policy_definitions(token).await?,
            },
        };

        Ok(SectionReport { section, payload })
    }

    async fn storage_accounts(&self) -> Result<Vec<StorageAccountReport>> {
        let token = self.plan.token();
        let subscription = self.subscription()?;
        let accounts = self.client.storage_accounts(token, subscription).await?;
        tracing::debug!(count = accounts.len(), "storage accounts listed");

        let mut reports = Vec::with_capacity(accounts.len());
        for account in accounts {
            let keys = self
                .client
                .list_storage_keys(token, subscription, &account)
                .await;
            reports.push(StorageAccountReport { account, keys });
        }
        Ok(reports)
    }

    fn subscription(&self) -> Result<&str> {
        self.plan
            .subscription()
            .ok_or_else(|| Error::Validation(MISSING_SUBSCRIPTION.to_string()))
    }
}
