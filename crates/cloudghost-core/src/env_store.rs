//! Dotenv-backed credential store.
//!
//! Holds the most recently acquired Azure token and the selected subscription.
//! Every save rewrites the whole file from the in-memory map, so the last writer
//! wins and keys the caller never touched are carried through unchanged.

use crate::{Error, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Well-known keys written by `auth`
pub mod keys {
    pub const ACCESS_TOKEN: &str = "ACCESS_TOKEN";
    pub const AZURE_TENANT_ID: &str = "AZURE_TENANT_ID";
    pub const AZURE_SUBSCRIPTION_ID: &str = "AZURE_SUBSCRIPTION_ID";
    pub const AZURE_SUBSCRIPTION_NAME: &str = "AZURE_SUBSCRIPTION_NAME";
}

#[derive(Debug, Clone, Default)]
pub struct CredentialStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl CredentialStore {
    /// Load the store at `path`. A missing file yields an empty store.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "credential store not found, starting empty");
            return Ok(Self {
                path: path.to_path_buf(),
                entries: BTreeMap::new(),
            });
        }

        let content = std::fs::read_to_string(path)?;
        let entries = parse(&content).map_err(|(line, message)| Error::EnvParse {
            path: path.to_path_buf(),
            line,
            message,
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            entries,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn entries(&self) -> &BTreeMap<String, String> {
        &self.entries
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&self.path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, render(&self.entries))?;
        tracing::debug!(
            path = %path.display(),
            keys = self.entries.len(),
            "credential store saved"
        );
        Ok(())
    }
}

fn parse(content: &str) -> std::result::Result<BTreeMap<String, String>, (usize, String)> {
    let mut entries = BTreeMap::new();

    for (idx, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let line = line.strip_prefix("export ").unwrap_or(line);
        let Some((key, value)) = line.split_once('=') else {
            return Err((idx + 1, format!("expected KEY=value, got '{}'", line)));
        };

        let key = key.trim();
        if key.is_empty() {
            return Err((idx + 1, "empty key".to_string()));
        }

        entries.insert(key.to_string(), parse_value(value.trim()));
    }

    Ok(entries)
}

fn parse_value(value: &str) -> String {
    if let Some(inner) = value
        .strip_prefix('"')
        .and_then(|rest| rest.rfind('"').map(|end| &rest[..end]))
    {
        return unescape_double_quoted(inner);
    }

    if let Some(inner) = value
        .strip_prefix('\'')
        .and_then(|rest| rest.rfind('\'').map(|end| &rest[..end]))
    {
        return inner.to_string();
    }

    // Unquoted: an inline comment starts at " #"
    match value.find(" #") {
        Some(pos) => value[..pos].trim_end().to_string(),
        None => value.to_string(),
    }
}

fn unescape_double_quoted(inner: &str) -> String {
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

fn render(entries: &BTreeMap<String, String>) -> String {
    let mut out = String::new();
    for (key, value) in entries {
        out.push_str(key);
        out.push('=');
        if !value.is_empty() && value.parse::<i64>().is_ok() {
            out.push_str(value);
        } else {
            out.push('"');
            for c in value.chars() {
                match c {
                    '\\' => out.push_str("\\\\"),
                    '"' => out.push_str("\\\""),
                    '\n' => out.push_str("\\n"),
                    '\r' => out.push_str("\\r"),
                    other => out.push(other),
                }
            }
            out.push('"');
        }
        out.push('\n');
    }
    out
}
