//! Helpers shared by the mock-server integration tests.
//!
//! Clippy cannot track usage across integration test files, hence `allow(dead_code)`.
#![allow(dead_code)]

use cloudghost_testing::{CliResult, TestWorld};

/// Run the binary on a blocking thread so the mock server keeps answering.
pub async fn run_cli(
    world: TestWorld,
    args: Vec<String>,
) -> anyhow::Result<(TestWorld, CliResult)> {
    tokio::task::spawn_blocking(move || {
        let refs: Vec<&str> = args.iter().map(String::as_str).collect();
        let result = world.run(&refs)?;
        Ok((world, result))
    })
    .await?
}

pub fn args(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|s| s.to_string()).collect()
}
