use crate::args::GcpTargetArgs;
use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use anyhow::Result;
use cloudghost_runtime::Workspace;

/// The sweep always completes; individual probe failures are part of its output
pub async fn handle(
    workspace: &Workspace,
    target: &GcpTargetArgs,
    ctx: &HandlerContext,
) -> Result<()> {
    let sweep = workspace.permission_sweep(&target.token, &target.project_id);

    let mut probes = Vec::with_capacity(sweep.probes().len());
    let mut render_error = None;
    sweep
        .run(|report| {
            let vm = presenters::present_probe(report);
            if render_error.is_none()
                && let Err(err) = ctx.step(&vm)
            {
                render_error = Some(err);
            }
            probes.push(vm);
        })
        .await;

    if let Some(err) = render_error {
        return Err(err);
    }

    ctx.finish(presenters::present_permission_sweep(
        &target.project_id,
        probes,
    ))
}
