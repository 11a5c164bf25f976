use crate::Result;
use cloudghost_providers::GcpClient;
use cloudghost_types::{ImpersonationAttempt, ImpersonationReport, ProjectId, ServiceAccount};

#[derive(Debug, Clone, Copy)]
pub enum ImpersonationProgress<'a> {
    /// Service accounts were listed; attempts follow in this order
    AccountsListed(&'a [ServiceAccount]),
    Attempted(&'a ImpersonationAttempt),
}

/// Lists a project's service accounts and tries `generateAccessToken` on each
pub struct ImpersonationOps {
    client: GcpClient,
    project_id: ProjectId,
}

impl ImpersonationOps {
    pub fn new(client: GcpClient, project_id: &str) -> Self {
        Self {
            client,
            project_id: ProjectId::new(project_id),
        }
    }

    /// Listing failures end the run; individual attempts never do.
    pub async fn run<F>(&self, mut progress_fn: F) -> Result<ImpersonationReport>
    where
        F: FnMut(ImpersonationProgress<'_>),
    {
        let service_accounts = self
            .client
            .list_service_accounts(self.project_id.as_str())
            .await?;
        progress_fn(ImpersonationProgress::AccountsListed(&service_accounts));

        let mut attempts = Vec::with_capacity(service_accounts.len());
        for account in &service_accounts {
            let outcome = self.client.generate_access_token(&account.email).await;
            let attempt = ImpersonationAttempt {
                email: account.email.clone(),
                outcome,
            };
            progress_fn(ImpersonationProgress::Attempted(&attempt));
            attempts.push(attempt);
        }

        let report = ImpersonationReport {
            project_id: self.project_id.clone(),
            service_accounts,
            attempts,
        };
        tracing::info!(
            project = %report.project_id,
            succeeded = report.success_count(),
            total = report.attempts.len(),
            "impersonation sweep finished"
        );
        Ok(report)
    }
}
