use cloudghost_providers::{GcpClient, Probe, permission_probes};
use cloudghost_types::ProbeReport;

/// The fixed GCP permission sweep for one project.
///
/// Probes run one after another in declaration order. A failing probe never stops
/// the sweep, so `run` has no error path.
pub struct PermissionSweep {
    client: GcpClient,
    probes: Vec<Probe>,
}

impl PermissionSweep {
    pub fn new(client: GcpClient, project_id: &str) -> Self {
        let probes = permission_probes(client.endpoints(), project_id, client.token());
        Self { client, probes }
    }

    pub fn probes(&self) -> &[Probe] {
        &self.probes
    }

    /// Run every probe, handing each report to `on_report` as soon as it is classified
    pub async fn run<F>(&self, mut on_report: F) -> Vec<ProbeReport>
    where
        F: FnMut(&ProbeReport),
    {
        let mut reports = Vec::with_capacity(self.probes.len());
        for probe in &self.probes {
            let report = self.client.probe(probe).await;
            on_report(&report);
            reports.push(report);
        }

        let granted = reports.iter().filter(|r| r.verdict.is_granted()).count();
        tracing::info!(granted, total = reports.len(), "permission sweep finished");
        reports
    }
}
