use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// Environment variable overriding the workspace directory
pub const WORKSPACE_ENV: &str = "CLOUDGHOST_PATH";

/// Default credential store, relative to the current directory
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Resolve the workspace data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. CLOUDGHOST_PATH environment variable (with tilde expansion)
/// 3. System data directory (recommended default)
/// 4. ~/.cloudghost (fallback for systems without standard data directory)
pub fn resolve_workspace_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var(WORKSPACE_ENV) {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("cloudghost"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".cloudghost"));
    }

    Err(Error::Config(
        "Could not determine workspace path: no HOME directory or system data directory found"
            .to_string(),
    ))
}

/// Resolve the credential store path: explicit flag, then configured path, then `./.env`.
///
/// Relative configured paths are taken relative to the current directory, matching
/// how the file is written after `auth`.
pub fn resolve_env_file(explicit: Option<&Path>, configured: Option<&str>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }

    if let Some(path) = configured.filter(|p| !p.trim().is_empty()) {
        return expand_tilde(path);
    }

    PathBuf::from(DEFAULT_ENV_FILE)
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}
