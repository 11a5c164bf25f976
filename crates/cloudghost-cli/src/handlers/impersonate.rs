use crate::args::GcpTargetArgs;
use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use anyhow::Result;
use cloudghost_runtime::{ImpersonationProgress, Workspace};

pub async fn handle(
    workspace: &Workspace,
    target: &GcpTargetArgs,
    ctx: &HandlerContext,
) -> Result<()> {
    let ops = workspace.impersonation(&target.token, &target.project_id);

    let mut render_error = None;
    let report = ops
        .run(|progress| {
            if render_error.is_some() {
                return;
            }
            let rendered = match progress {
                ImpersonationProgress::AccountsListed(accounts) => {
                    ctx.step(&presenters::present_service_accounts(accounts))
                }
                ImpersonationProgress::Attempted(attempt) => {
                    ctx.step(&presenters::present_impersonation_attempt(attempt))
                }
            };
            if let Err(err) = rendered {
                render_error = Some(err);
            }
        })
        .await?;

    if let Some(err) = render_error {
        return Err(err);
    }

    ctx.finish(presenters::present_impersonation(&report))
}
