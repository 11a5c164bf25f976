use crate::config::Config;
use crate::ops::{
    AuthOps, BlobOps, ImpersonationOps, ManagementOps, ManagementPlan, PermissionSweep,
};
use crate::Result;
use cloudghost_core::{CredentialStore, resolve_env_file};
use cloudghost_providers::{AzureClient, GcpClient, HttpClient, SharedKeyCredential, StorageClient};
use std::path::{Path, PathBuf};

/// Everything a command needs: loaded config, a shared HTTP client and the
/// credential store location
pub struct Workspace {
    data_dir: PathBuf,
    config: Config,
    env_file: PathBuf,
    http: HttpClient,
}

impl Workspace {
    /// Load `config.toml` from `data_dir` (defaults when absent) and resolve the
    /// credential store path. Nothing is written to disk.
    pub fn open(data_dir: PathBuf, env_file: Option<&Path>) -> Result<Self> {
        let config = Config::load_from(&Config::path_in(&data_dir))?;
        let env_file = resolve_env_file(env_file, config.store.env_file.as_deref());
        let http = HttpClient::new(&config.http.settings())?;

        tracing::debug!(
            data_dir = %data_dir.display(),
            env_file = %env_file.display(),
            "workspace opened"
        );

        Ok(Self {
            data_dir,
            config,
            env_file,
            http,
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn env_file(&self) -> &Path {
        &self.env_file
    }

    /// Fresh read of the credential store
    pub fn credentials(&self) -> Result<CredentialStore> {
        Ok(CredentialStore::load_from(&self.env_file)?)
    }

    pub fn azure(&self) -> AzureClient {
        AzureClient::new(self.http.clone(), self.config.endpoints.azure.clone())
    }

    pub fn gcp(&self, token: &str) -> GcpClient {
        GcpClient::new(self.http.clone(), self.config.endpoints.gcp.clone(), token)
    }

    pub fn storage(&self, account: &str, key: &str) -> Result<StorageClient> {
        let credential = SharedKeyCredential::new(account, key)?;
        Ok(StorageClient::new(
            self.http.clone(),
            &self.config.endpoints.azure,
            credential,
        ))
    }

    pub fn auth(&self) -> AuthOps<'_> {
        AuthOps::new(self)
    }

    pub fn management(&self, plan: ManagementPlan) -> ManagementOps {
        ManagementOps::new(self.azure(), plan)
    }

    pub fn blobs(&self, account: &str, key: &str) -> Result<BlobOps> {
        Ok(BlobOps::new(self.storage(account, key)?))
    }

    pub fn permission_sweep(&self, token: &str, project_id: &str) -> PermissionSweep {
        PermissionSweep::new(self.gcp(token), project_id)
    }

    pub fn impersonation(&self, token: &str, project_id: &str) -> ImpersonationOps {
        ImpersonationOps::new(self.gcp(token), project_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_without_config_uses_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let env_file = temp_dir.path().join("creds.env");

        let workspace = Workspace::open(temp_dir.path().to_path_buf(), Some(&env_file))?;
        assert_eq!(workspace.env_file(), env_file.as_path());
        assert_eq!(workspace.config(), &Config::default());
        assert!(!Config::path_in(temp_dir.path()).exists());

        Ok(())
    }

    #[test]
    fn test_configured_env_file_is_used_without_flag() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let configured = temp_dir.path().join("configured.env");

        let mut config = Config::default();
        config.store.env_file = Some(configured.display().to_string());
        config.save_to(&Config::path_in(temp_dir.path()))?;

        let workspace = Workspace::open(temp_dir.path().to_path_buf(), None)?;
        assert_eq!(workspace.env_file(), configured.as_path());

        Ok(())
    }

    #[test]
    fn test_storage_rejects_bad_key() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let workspace = Workspace::open(temp_dir.path().to_path_buf(), None)?;

        let err = workspace.storage("acct", "not base64!").unwrap_err();
        assert!(err.to_string().starts_with("failed to create credential"));

        Ok(())
    }
}
