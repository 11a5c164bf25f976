// NOTE: Command organization
//
// Commands are namespaced by provider (`azure`, `gcp`) and then by verb
// (`blob`, `enum`, `list`). `auth` stays at the top level because it is the usual
// first step; `azure auth` is the same command under the provider namespace.

mod commands;
mod common;
mod enums;

pub use commands::*;
pub use common::*;
pub use enums::*;

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cloudghost")]
#[command(
    about = "Authenticate against Azure and GCP and enumerate what a credential can reach",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Directory holding config.toml (default: $CLOUDGHOST_PATH, then the platform data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    /// Credential store file (default: [store] env_file from config.toml, then ./.env)
    #[arg(long, global = true)]
    pub env_file: Option<PathBuf>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}
