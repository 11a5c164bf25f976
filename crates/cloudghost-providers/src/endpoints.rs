use serde::{Deserialize, Serialize};

/// Base URLs for every provider API the tool talks to.
///
/// Overridable from `config.toml` so sovereign clouds and local mock servers
/// can be targeted without code changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub azure: AzureEndpoints,
    pub gcp: GcpEndpoints,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AzureEndpoints {
    pub login: String,
    pub management: String,
    /// Blob service URL template; `{account}` is replaced by the storage account name
    pub blob: String,
}

impl Default for AzureEndpoints {
    fn default() -> Self {
        Self {
            login: "https://login.microsoftonline.com".to_string(),
            management: "https://management.azure.com".to_string(),
            blob: "https://{account}.blob.core.windows.net".to_string(),
        }
    }
}

impl AzureEndpoints {
    pub fn token_url(&self, tenant_id: &str) -> String {
        format!("{}/{}/oauth2/v2.0/token", base(&self.login), tenant_id)
    }

    /// Resource-manager URL for `path` (must start with `/`)
    pub fn management_url(&self, path: &str, api_version: &str) -> String {
        format!(
            "{}{}?api-version={}",
            base(&self.management),
            path,
            api_version
        )
    }

    pub fn blob_service_url(&self, account: &str) -> String {
        base(&self.blob).replace("{account}", account)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GcpEndpoints {
    pub oauth2: String,
    pub compute: String,
    pub storage: String,
    pub cloudfunctions: String,
    pub run: String,
    pub bigquery: String,
    pub iam: String,
    pub iamcredentials: String,
}

impl Default for GcpEndpoints {
    fn default() -> Self {
        Self {
            oauth2: "https://oauth2.googleapis.com".to_string(),
            compute: "https://compute.googleapis.com".to_string(),
            storage: "https://storage.googleapis.com".to_string(),
            cloudfunctions: "https://cloudfunctions.googleapis.com".to_string(),
            run: "https://run.googleapis.com".to_string(),
            bigquery: "https://bigquery.googleapis.com".to_string(),
            iam: "https://iam.googleapis.com".to_string(),
            iamcredentials: "https://iamcredentials.googleapis.com".to_string(),
        }
    }
}

impl GcpEndpoints {
    pub fn token_info_url(&self, token: &str) -> String {
        format!("{}/tokeninfo?access_token={}", base(&self.oauth2), token)
    }

    pub fn aggregated_instances_url(&self, project: &str) -> String {
        format!(
            "{}/compute/v1/projects/{}/aggregated/instances",
            base(&self.compute),
            project
        )
    }

    pub fn buckets_url(&self, project: &str) -> String {
        format!("{}/storage/v1/b?project={}", base(&self.storage), project)
    }

    pub fn functions_url(&self, project: &str) -> String {
        format!(
            "{}/v1/projects/{}/locations/-/functions",
            base(&self.cloudfunctions),
            project
        )
    }

    pub fn run_services_url(&self, project: &str) -> String {
        format!(
            "{}/v1/projects/{}/locations/-/services",
            base(&self.run),
            project
        )
    }

    pub fn bigquery_datasets_url(&self, project: &str) -> String {
        format!(
            "{}/bigquery/v2/projects/{}/datasets",
            base(&self.bigquery),
            project
        )
    }

    pub fn service_accounts_url(&self, project: &str) -> String {
        format!("{}/v1/projects/{}/serviceAccounts", base(&self.iam), project)
    }

    pub fn generate_access_token_url(&self, email: &str) -> String {
        format!(
            "{}/v1/projects/-/serviceAccounts/{}:generateAccessToken",
            base(&self.iamcredentials),
            email
        )
    }
}

fn base(url: &str) -> &str {
    url.trim_end_matches('/')
}
