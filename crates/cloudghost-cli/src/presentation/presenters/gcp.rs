use crate::presentation::view_models::{
    CommandResultViewModel, ImpersonationAttemptViewModel, ImpersonationStatusViewModel,
    ImpersonationViewModel, ListingViewModel, PermissionSweepViewModel, ProbeResultViewModel,
    ProbeVerdictViewModel, ServiceAccountsViewModel,
};
use cloudghost_types::{
    AccessVerdict, ImpersonationAttempt, ImpersonationOutcome, ImpersonationReport, ProbeBody,
    ProbeKind, ProbeReport, ServiceAccount,
};
use serde_json::Value;

pub fn present_probe(report: &ProbeReport) -> ProbeResultViewModel {
    let (verdict, error) = match &report.verdict {
        AccessVerdict::Granted => (ProbeVerdictViewModel::Granted, None),
        AccessVerdict::Unauthorized => (ProbeVerdictViewModel::Unauthorized, None),
        AccessVerdict::Forbidden => (ProbeVerdictViewModel::Forbidden, None),
        AccessVerdict::Unexpected { .. } => (ProbeVerdictViewModel::Unexpected, None),
        AccessVerdict::RequestFailed { error } => {
            (ProbeVerdictViewModel::RequestFailed, Some(error.clone()))
        }
    };

    let (body, body_error) = match &report.body {
        Some(ProbeBody::Json { body }) => (Some(body.clone()), None),
        Some(ProbeBody::Invalid { error }) => (None, Some(error.clone())),
        None => (None, None),
    };

    ProbeResultViewModel {
        name: report.name.clone(),
        dump: report.kind == ProbeKind::Dump,
        verdict,
        status: report.status,
        error,
        body,
        body_error,
    }
}

pub fn present_permission_sweep(
    project_id: &str,
    probes: Vec<ProbeResultViewModel>,
) -> CommandResultViewModel<PermissionSweepViewModel> {
    let granted = probes
        .iter()
        .filter(|p| p.verdict == ProbeVerdictViewModel::Granted)
        .count();

    CommandResultViewModel::new(
        "gcp enum",
        PermissionSweepViewModel {
            project_id: project_id.to_string(),
            granted,
            probes,
        },
    )
}

/// `resource` is the last word of the command: `compute` or `bucket`
pub fn present_listing(
    project_id: &str,
    resource: &str,
    body: Value,
) -> CommandResultViewModel<ListingViewModel> {
    CommandResultViewModel::new(
        format!("gcp list {}", resource),
        ListingViewModel {
            project_id: project_id.to_string(),
            resource: resource.to_string(),
            body,
        },
    )
}

pub fn present_service_accounts(accounts: &[ServiceAccount]) -> ServiceAccountsViewModel {
    ServiceAccountsViewModel {
        emails: accounts.iter().map(|a| a.email.clone()).collect(),
    }
}

pub fn present_impersonation_attempt(
    attempt: &ImpersonationAttempt,
) -> ImpersonationAttemptViewModel {
    let status = match &attempt.outcome {
        ImpersonationOutcome::Success { access_token } => ImpersonationStatusViewModel::Success {
            access_token: access_token.clone(),
        },
        ImpersonationOutcome::Failed { status } => {
            ImpersonationStatusViewModel::Failed { status: *status }
        }
        ImpersonationOutcome::DecodeFailed { error } => {
            ImpersonationStatusViewModel::DecodeFailed {
                error: error.clone(),
            }
        }
        ImpersonationOutcome::RequestFailed { error } => {
            ImpersonationStatusViewModel::RequestFailed {
                error: error.clone(),
            }
        }
    };

    ImpersonationAttemptViewModel {
        email: attempt.email.clone(),
        status,
    }
}

pub fn present_impersonation(
    report: &ImpersonationReport,
) -> CommandResultViewModel<ImpersonationViewModel> {
    CommandResultViewModel::new(
        "gcp list impersonate",
        ImpersonationViewModel {
            project_id: report.project_id.to_string(),
            service_accounts: report
                .service_accounts
                .iter()
                .map(|a| a.email.clone())
                .collect(),
            succeeded: report.success_count(),
            attempts: report
                .attempts
                .iter()
                .map(present_impersonation_attempt)
                .collect(),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use cloudghost_types::ProjectId;

    #[test]
    fn test_sweep_counts_granted_probes() {
        let reports = [
            ProbeReport {
                name: "GCP OAuth2 Token Info".to_string(),
                kind: ProbeKind::Status,
                verdict: AccessVerdict::Granted,
                status: Some(200),
                body: None,
            },
            ProbeReport {
                name: "GCP Storage Buckets".to_string(),
                kind: ProbeKind::Status,
                verdict: AccessVerdict::RequestFailed {
                    error: "connection refused".to_string(),
                },
                status: None,
                body: None,
            },
        ];

        let result = present_permission_sweep("p1", reports.iter().map(present_probe).collect());
        assert_eq!(result.command, "gcp enum");
        assert_eq!(result.content.granted, 1);

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["content"]["probes"][1]["verdict"], "request_failed");
        assert_eq!(json["content"]["probes"][1]["error"], "connection refused");
        assert!(json["content"]["probes"][0].get("error").is_none());
    }

    #[test]
    fn test_impersonation_json_shape() {
        let report = ImpersonationReport {
            project_id: ProjectId::from("p1"),
            service_accounts: vec![ServiceAccount {
                email: "a@p1.iam.gserviceaccount.com".to_string(),
                display_name: None,
            }],
            attempts: vec![ImpersonationAttempt {
                email: "a@p1.iam.gserviceaccount.com".to_string(),
                outcome: ImpersonationOutcome::Failed { status: 403 },
            }],
        };

        let json = serde_json::to_value(present_impersonation(&report)).unwrap();
        insta::assert_json_snapshot!(json, @r#"
        {
          "command": "gcp list impersonate",
          "content": {
            "attempts": [
              {
                "email": "a@p1.iam.gserviceaccount.com",
                "outcome": "failed",
                "status": 403
              }
            ],
            "project_id": "p1",
            "service_accounts": [
              "a@p1.iam.gserviceaccount.com"
            ],
            "succeeded": 0
          }
        }
        "#);
    }
}
