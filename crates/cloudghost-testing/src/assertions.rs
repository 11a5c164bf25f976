//! Assertions on `--format json` output.
//!
//! Every command renders `{"command": ..., "content": ...}`; these helpers check
//! that envelope and the pieces tests care about.

use anyhow::{Context, Result};
use serde_json::Value;

/// Assert the envelope names `expected` as the command.
pub fn assert_command(json: &Value, expected: &str) -> Result<()> {
    let command = json["command"]
        .as_str()
        .context("Expected 'command' string in JSON")?;

    if command != expected {
        anyhow::bail!("Expected command {}, got {}", expected, command);
    }

    Ok(())
}

/// Assert the probe verdicts, in sweep order.
pub fn assert_verdicts(json: &Value, expected: &[&str]) -> Result<()> {
    let probes = json["content"]["probes"]
        .as_array()
        .context("Expected 'content.probes' array in JSON")?;

    let verdicts: Vec<&str> = probes
        .iter()
        .enumerate()
        .map(|(i, probe)| {
            probe["verdict"]
                .as_str()
                .with_context(|| format!("Probe {} missing verdict", i))
        })
        .collect::<Result<_>>()?;

    if verdicts != expected {
        anyhow::bail!("Expected verdicts {:?}, got {:?}", expected, verdicts);
    }

    Ok(())
}

/// Assert `content.<field>` is an array of `expected` elements.
pub fn assert_content_len(json: &Value, field: &str, expected: usize) -> Result<()> {
    let items = json["content"][field]
        .as_array()
        .with_context(|| format!("Expected 'content.{}' array in JSON", field))?;

    if items.len() != expected {
        anyhow::bail!(
            "Expected {} entries in content.{}, got {}",
            expected,
            field,
            items.len()
        );
    }

    Ok(())
}

/// Assert each of `lines` appears, in order, as a full line of `stdout`.
pub fn assert_lines_in_order(stdout: &str, lines: &[&str]) -> Result<()> {
    let mut remaining = stdout.lines();
    for expected in lines {
        if !remaining.any(|line| line == *expected) {
            anyhow::bail!(
                "Line {:?} not found (or out of order) in output:\n{}",
                expected,
                stdout
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_assert_verdicts() {
        let json = json!({
            "command": "gcp enum",
            "content": {"probes": [{"verdict": "granted"}, {"verdict": "forbidden"}]}
        });
        assert!(assert_command(&json, "gcp enum").is_ok());
        assert!(assert_verdicts(&json, &["granted", "forbidden"]).is_ok());
        assert!(assert_verdicts(&json, &["granted"]).is_err());
    }

    #[test]
    fn test_assert_lines_in_order() {
        let stdout = "a\nb\nc\n";
        assert!(assert_lines_in_order(stdout, &["a", "c"]).is_ok());
        assert!(assert_lines_in_order(stdout, &["c", "a"]).is_err());
    }
}
