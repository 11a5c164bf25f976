use super::GcpClient;
use crate::GcpEndpoints;
use cloudghost_types::{AccessVerdict, ProbeBody, ProbeKind, ProbeReport};
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;

/// A single GET whose response is classified into an access verdict
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Probe {
    pub name: String,
    pub url: String,
    pub kind: ProbeKind,
}

impl Probe {
    pub fn status(name: &str, url: String) -> Self {
        Self {
            name: name.to_string(),
            url,
            kind: ProbeKind::Status,
        }
    }

    pub fn dump(name: &str, url: String) -> Self {
        Self {
            name: name.to_string(),
            url,
            kind: ProbeKind::Dump,
        }
    }
}

/// The fixed, ordered probe sweep for `project`
pub fn permission_probes(endpoints: &GcpEndpoints, project: &str, token: &str) -> Vec<Probe> {
    vec![
        Probe::status("GCP OAuth2 Token Info", endpoints.token_info_url(token)),
        Probe::dump(
            "GCP Compute Instances",
            endpoints.aggregated_instances_url(project),
        ),
        Probe::status("GCP Storage Buckets", endpoints.buckets_url(project)),
        Probe::status("GCP Cloud Functions", endpoints.functions_url(project)),
        Probe::status("GCP Cloud Run Services", endpoints.run_services_url(project)),
        Probe::status(
            "GCP BigQuery Datasets",
            endpoints.bigquery_datasets_url(project),
        ),
    ]
}

impl GcpClient {
    /// Run one probe. Transport and decode failures become part of the report.
    pub async fn probe(&self, probe: &Probe) -> ProbeReport {
        let request = self
            .http
            .get(&probe.url)
            .bearer_auth(&self.token)
            .header(CONTENT_TYPE, "application/json");

        let response = match self.http.send(request).await {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(probe = %probe.name, error = %err, "probe request failed");
                return ProbeReport {
                    name: probe.name.clone(),
                    kind: probe.kind,
                    verdict: AccessVerdict::RequestFailed {
                        error: err.to_string(),
                    },
                    status: None,
                    body: None,
                };
            }
        };

        let status = response.status().as_u16();
        let verdict = AccessVerdict::from_status(status);
        tracing::debug!(probe = %probe.name, status, ?verdict, "probe classified");

        let body = match probe.kind {
            ProbeKind::Status => None,
            ProbeKind::Dump => Some(match response.text().await {
                Ok(text) => decode_body(&text),
                Err(err) => ProbeBody::Invalid {
                    error: format!("Error reading response body: {}", err),
                },
            }),
        };

        ProbeReport {
            name: probe.name.clone(),
            kind: probe.kind,
            verdict,
            status: Some(status),
            body,
        }
    }
}

fn decode_body(text: &str) -> ProbeBody {
    match serde_json::from_str::<Value>(text) {
        Ok(body) => ProbeBody::Json { body },
        Err(err) => ProbeBody::Invalid {
            error: format!("Error parsing JSON: {}", err),
        },
    }
}
