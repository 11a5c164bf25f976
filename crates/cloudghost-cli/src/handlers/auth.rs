use crate::args::AuthArgs;
use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use anyhow::Result;
use cloudghost_runtime::Workspace;

/// Token first, then subscription; each is reported as soon as it is stored
pub async fn handle(
    workspace: &Workspace,
    args: &AuthArgs,
    command: &str,
    ctx: &HandlerContext,
) -> Result<()> {
    let credentials = args.credentials();
    let auth = workspace.auth();

    let token = auth.acquire_token(&credentials).await?;
    let token_vm =
        presenters::present_token_stored(&token, &credentials.tenant_id, workspace.env_file());
    ctx.step(&token_vm)?;

    let subscription = auth.select_subscription(&token.access_token).await?;
    let subscription_vm = presenters::present_subscription_selected(&subscription);
    ctx.step(&subscription_vm)?;

    ctx.finish(presenters::present_auth(command, token_vm, subscription_vm))
}
