//! TestWorld pattern for declarative integration test setup.
//!
//! Each world owns a temp directory holding the data dir (`config.toml`) and the
//! credential store, so tests never touch the user's real `.env`.

use anyhow::Result;
use assert_cmd::Command;
use cloudghost_core::CredentialStore;
use cloudghost_runtime::Config;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use cloudghost_testing::TestWorld;
///
/// let world = TestWorld::new().with_mock_endpoints("http://127.0.0.1:9000");
///
/// let result = world.run(&["gcp", "enum", "--token", "t", "--project-id", "p"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    cwd: PathBuf,
    data_dir: PathBuf,
    env_file: PathBuf,
    format: &'static str,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let base_path = temp_dir.path().to_path_buf();
        let data_dir = base_path.join(".cloudghost");

        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            cwd: base_path.clone(),
            env_file: base_path.join(".env"),
            temp_dir,
            data_dir,
            format: "plain",
            env_vars: HashMap::new(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn env_file(&self) -> &Path {
        &self.env_file
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Point every provider endpoint at `uri` by writing `config.toml`.
    ///
    /// The blob endpoint becomes `{uri}/{account}` so the account name is the first path segment.
    pub fn with_mock_endpoints(self, uri: &str) -> Self {
        let mut config = Config::default();
        config.endpoints.azure.login = uri.to_string();
        config.endpoints.azure.management = uri.to_string();
        config.endpoints.azure.blob = format!("{}/{{account}}", uri);

        let gcp = &mut config.endpoints.gcp;
        for endpoint in [
            &mut gcp.oauth2,
            &mut gcp.compute,
            &mut gcp.storage,
            &mut gcp.cloudfunctions,
            &mut gcp.run,
            &mut gcp.bigquery,
            &mut gcp.iam,
            &mut gcp.iamcredentials,
        ] {
            *endpoint = uri.to_string();
        }
        config.http.timeout_secs = 5;

        config
            .save_to(&Config::path_in(&self.data_dir))
            .expect("Failed to write config.toml");
        self
    }

    /// Seed the credential store with `entries`.
    pub fn with_credentials(self, entries: &[(&str, &str)]) -> Self {
        let mut store =
            CredentialStore::load_from(&self.env_file).expect("Failed to read credential store");
        for (key, value) in entries {
            store.set(*key, *value);
        }
        store.save().expect("Failed to write credential store");
        self
    }

    /// Run commands with `--format json`.
    pub fn with_json(mut self) -> Self {
        self.format = "json";
        self
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Read one key back from the credential store.
    pub fn credential(&self, key: &str) -> Result<Option<String>> {
        let store = CredentialStore::load_from(&self.env_file)?;
        Ok(store.get(key).map(str::to_string))
    }

    /// Configure a CLI command with this test environment's settings.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--data-dir")
            .arg(&self.data_dir)
            .arg("--env-file")
            .arg(&self.env_file)
            .arg("--format")
            .arg(self.format);

        cmd.current_dir(&self.cwd);
        cmd.env_remove("RUST_LOG");
        cmd.env_remove("CLOUDGHOST_PATH");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Execute the `cloudghost` binary with `args` and capture its output.
    ///
    /// Uses `Command::cargo_bin()`, which relies on the `CARGO_BIN_EXE_` variable
    /// cargo sets for integration tests.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("cloudghost")
            .map_err(|e| anyhow::anyhow!("Failed to find cloudghost binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    pub fn code(&self) -> Option<i32> {
        self.status.code()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
