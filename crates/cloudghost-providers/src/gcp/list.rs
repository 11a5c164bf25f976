use super::GcpClient;
use crate::http::body_text;
use crate::{Error, Operation, Result};
use reqwest::StatusCode;
use serde_json::Value;

impl GcpClient {
    /// Aggregated Compute Engine instances across all zones
    pub async fn list_compute_instances(&self, project: &str) -> Result<Value> {
        let url = self.endpoints.aggregated_instances_url(project);
        self.get_listing(&url, Operation::GcpCompute).await
    }

    pub async fn list_buckets(&self, project: &str) -> Result<Value> {
        let url = self.endpoints.buckets_url(project);
        self.get_listing(&url, Operation::GcpBuckets).await
    }

    async fn get_listing(&self, url: &str, operation: Operation) -> Result<Value> {
        let response = self
            .http
            .send(self.http.get(url).bearer_auth(&self.token))
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(Error::rejected(operation, status, body_text(response).await));
        }

        Ok(response.json().await?)
    }
}
