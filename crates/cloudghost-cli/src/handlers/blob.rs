use crate::args::ContainerArgs;
use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use anyhow::Result;
use cloudghost_runtime::Workspace;
use std::path::Path;

pub async fn handle_list(
    workspace: &Workspace,
    target: &ContainerArgs,
    ctx: &HandlerContext,
) -> Result<()> {
    let blobs = workspace.blobs(&target.account, &target.key)?;
    let items = blobs.list_all(&target.container).await?;

    ctx.render(presenters::present_blob_list(
        &target.account,
        &target.container,
        items,
    ))
}

pub async fn handle_download(
    workspace: &Workspace,
    target: &ContainerArgs,
    blob: &str,
    output: &Path,
    ctx: &HandlerContext,
) -> Result<()> {
    let blobs = workspace.blobs(&target.account, &target.key)?;
    let download = blobs.download(&target.container, blob, output).await?;

    ctx.render(presenters::present_blob_download(download))
}
