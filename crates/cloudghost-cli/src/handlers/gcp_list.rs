use crate::args::GcpTargetArgs;
use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use anyhow::Result;
use cloudghost_runtime::Workspace;

pub async fn handle_compute(
    workspace: &Workspace,
    target: &GcpTargetArgs,
    ctx: &HandlerContext,
) -> Result<()> {
    let body = workspace
        .gcp(&target.token)
        .list_compute_instances(&target.project_id)
        .await?;

    ctx.render(presenters::present_listing(&target.project_id, "compute", body))
}

pub async fn handle_bucket(
    workspace: &Workspace,
    target: &GcpTargetArgs,
    ctx: &HandlerContext,
) -> Result<()> {
    let body = workspace
        .gcp(&target.token)
        .list_buckets(&target.project_id)
        .await?;

    ctx.render(presenters::present_listing(&target.project_id, "bucket", body))
}
