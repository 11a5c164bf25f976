use super::common::{AuthArgs, ContainerArgs, GcpTargetArgs};
use clap::Subcommand;
use clap::builder::NonEmptyStringValueParser;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Acquire an Azure management token and select a default subscription")]
    Auth {
        #[command(flatten)]
        args: AuthArgs,
    },

    #[command(about = "Azure commands")]
    Azure {
        #[command(subcommand)]
        command: AzureCommand,
    },

    #[command(about = "Google Cloud commands")]
    Gcp {
        #[command(subcommand)]
        command: GcpCommand,
    },
}

#[derive(Subcommand)]
pub enum AzureCommand {
    #[command(about = "Acquire an Azure management token (same as top-level 'auth')")]
    Auth {
        #[command(flatten)]
        args: AuthArgs,
    },

    #[command(about = "Azure Blob Storage operations")]
    Blob {
        #[command(subcommand)]
        command: BlobCommand,
    },

    #[command(about = "Enumerate Azure resources")]
    Enum {
        #[command(subcommand)]
        command: EnumCommand,
    },
}

#[derive(Subcommand)]
pub enum BlobCommand {
    #[command(about = "List every blob in a container")]
    List {
        #[command(flatten)]
        target: ContainerArgs,
    },

    #[command(about = "Download a blob to a local file")]
    Download {
        #[command(flatten)]
        target: ContainerArgs,

        #[arg(
            short = 'b',
            long,
            value_parser = NonEmptyStringValueParser::new(),
            help = "Name of the blob to download"
        )]
        blob: String,

        #[arg(short = 'o', long, help = "Path to save the downloaded file")]
        output: PathBuf,
    },
}

#[derive(Subcommand)]
pub enum EnumCommand {
    #[command(about = "Enumerate resources through the Azure Resource Manager API")]
    Management {
        #[arg(long, help = "Bearer token (default: ACCESS_TOKEN from the credential store)")]
        token: Option<String>,

        #[arg(
            long,
            help = "Subscription ID (default: AZURE_SUBSCRIPTION_ID from the credential store)"
        )]
        subscription: Option<String>,

        #[arg(long, help = "List subscriptions")]
        subscriptions: bool,

        #[arg(long, help = "List resource groups")]
        groups: bool,

        #[arg(long, help = "List role assignments")]
        roles: bool,

        #[arg(long, help = "List policy definitions")]
        policies: bool,

        #[arg(long, help = "List storage accounts and try to read their keys")]
        storage: bool,
    },
}

#[derive(Subcommand)]
pub enum GcpCommand {
    #[command(about = "Check which GCP services the token can reach")]
    Enum {
        #[command(flatten)]
        target: GcpTargetArgs,
    },

    #[command(about = "List GCP resources")]
    List {
        #[command(subcommand)]
        command: GcpListCommand,
    },
}

#[derive(Subcommand)]
pub enum GcpListCommand {
    #[command(about = "List Compute Engine instances across all zones")]
    Compute {
        #[command(flatten)]
        target: GcpTargetArgs,
    },

    #[command(about = "List Cloud Storage buckets")]
    Bucket {
        #[command(flatten)]
        target: GcpTargetArgs,
    },

    #[command(about = "List service accounts and try to impersonate each one")]
    Impersonate {
        #[command(flatten)]
        target: GcpTargetArgs,
    },
}
