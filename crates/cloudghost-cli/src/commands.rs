use super::args::{
    AzureCommand, BlobCommand, Cli, Commands, EnumCommand, GcpCommand, GcpListCommand,
};
use super::handlers::{self, HandlerContext};
use super::logging;
use anyhow::Result;
use cloudghost_core::resolve_workspace_path;
use cloudghost_runtime::{ManagementRequest, Workspace};

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);

    let data_dir = resolve_workspace_path(cli.data_dir.as_deref())?;
    let workspace = Workspace::open(data_dir, cli.env_file.as_deref())?;
    let ctx = HandlerContext::new(cli.format);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(dispatch(cli.command, &workspace, &ctx))
}

async fn dispatch(command: Commands, workspace: &Workspace, ctx: &HandlerContext) -> Result<()> {
    match command {
        Commands::Auth { args } => handlers::auth::handle(workspace, &args, "auth", ctx).await,

        Commands::Azure { command } => match command {
            AzureCommand::Auth { args } => {
                handlers::auth::handle(workspace, &args, "azure auth", ctx).await
            }

            AzureCommand::Blob { command } => match command {
                BlobCommand::List { target } => {
                    handlers::blob::handle_list(workspace, &target, ctx).await
                }
                BlobCommand::Download {
                    target,
                    blob,
                    output,
                } => handlers::blob::handle_download(workspace, &target, &blob, &output, ctx).await,
            },

            AzureCommand::Enum { command } => match command {
                EnumCommand::Management {
                    token,
                    subscription,
                    subscriptions,
                    groups,
                    roles,
                    policies,
                    storage,
                } => {
                    let request = ManagementRequest {
                        token,
                        subscription,
                        subscriptions,
                        groups,
                        roles,
                        policies,
                        storage,
                    };
                    handlers::management::handle(workspace, request, ctx).await
                }
            },
        },

        Commands::Gcp { command } => match command {
            GcpCommand::Enum { target } => {
                handlers::gcp_enum::handle(workspace, &target, ctx).await
            }

            GcpCommand::List { command } => match command {
                GcpListCommand::Compute { target } => {
                    handlers::gcp_list::handle_compute(workspace, &target, ctx).await
                }
                GcpListCommand::Bucket { target } => {
                    handlers::gcp_list::handle_bucket(workspace, &target, ctx).await
                }
                GcpListCommand::Impersonate { target } => {
                    handlers::impersonate::handle(workspace, &target, ctx).await
                }
            },
        },
    }
}
