//! Testing infrastructure for cloudghost integration tests.
//!
//! - `TestWorld`: isolated data dir and credential store, CLI execution
//! - `fixtures`: provider response bodies for mock servers
//! - `assertions`: checks on `--format json` output

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};
