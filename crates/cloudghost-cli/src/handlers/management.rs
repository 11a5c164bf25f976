use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use anyhow::Result;
use cloudghost_runtime::{ManagementPlan, ManagementRequest, Workspace};

/// Runs the selected sections in fixed order. The first failing section ends the command;
/// output of earlier sections stays on screen.
pub async fn handle(
    workspace: &Workspace,
    request: ManagementRequest,
    ctx: &HandlerContext,
) -> Result<()> {
    let plan = ManagementPlan::resolve(request, || workspace.credentials())?;
    let ops = workspace.management(plan);

    let mut sections = Vec::with_capacity(ops.plan().sections().len());
    for section in ops.plan().sections() {
        ctx.step(&presenters::present_progress(section.progress_label()))?;

        let report = ops.run_section(*section).await?;
        let section_vm = presenters::present_section(report);
        ctx.step(&section_vm)?;
        sections.push(section_vm);
    }

    ctx.finish(presenters::present_management(
        ops.plan().subscription(),
        sections,
    ))
}
