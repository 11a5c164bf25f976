use crate::Result;
use reqwest::{Client, RequestBuilder, Response, Url};
use std::time::Duration;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpSettings {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: default_user_agent(),
        }
    }
}

pub fn default_user_agent() -> String {
    format!("cloudghost/{}", env!("CARGO_PKG_VERSION"))
}

/// Thin wrapper over `reqwest::Client` that logs every exchange with secrets redacted.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: Client,
}

impl HttpClient {
    pub fn new(settings: &HttpSettings) -> Result<Self> {
        let inner = Client::builder()
            .timeout(settings.timeout)
            .user_agent(settings.user_agent.clone())
            .build()?;
        Ok(Self { inner })
    }

    pub fn get(&self, url: &str) -> RequestBuilder {
        self.inner.get(url)
    }

    pub fn post(&self, url: &str) -> RequestBuilder {
        self.inner.post(url)
    }

    /// Send a prepared request. Only transport failures are errors; status is left to the caller.
    pub async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let request = request.build()?;
        let method = request.method().clone();
        let target = redact(request.url());

        tracing::debug!(%method, url = %target, "sending request");
        let response = self.inner.execute(request).await.inspect_err(|err| {
            tracing::debug!(%method, url = %target, error = %err, "request failed");
        })?;
        tracing::debug!(%method, url = %target, status = %response.status(), "received response");

        Ok(response)
    }
}

/// Render `url` for logs with credential-bearing query values masked
pub fn redact(url: &Url) -> String {
    if url.query().is_none() {
        return url.to_string();
    }

    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let masked = k.contains("token") || k == "sig" || k == "key";
            let value = if masked { "***".to_string() } else { v.into_owned() };
            (k.into_owned(), value)
        })
        .collect();

    let mut redacted = url.clone();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}

/// Read the body as text; a body that cannot be read is reported as empty.
pub(crate) async fn body_text(response: Response) -> String {
    response.text().await.unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact_masks_tokens() {
        let url =
            Url::parse("https://oauth2.googleapis.com/tokeninfo?access_token=ya29.secret").unwrap();
        assert_eq!(
            redact(&url),
            "https://oauth2.googleapis.com/tokeninfo?access_token=***"
        );
    }

    #[test]
    fn test_redact_keeps_other_params() {
        let url = Url::parse("https://storage.googleapis.com/storage/v1/b?project=p1").unwrap();
        assert_eq!(redact(&url), "https://storage.googleapis.com/storage/v1/b?project=p1");

        let url = Url::parse("https://management.azure.com/subscriptions").unwrap();
        assert_eq!(redact(&url), "https://management.azure.com/subscriptions");
    }

    #[test]
    fn test_default_settings() {
        let settings = HttpSettings::default();
        assert_eq!(settings.timeout, Duration::from_secs(30));
        assert!(settings.user_agent.starts_with("cloudghost/"));
        assert!(HttpClient::new(&settings).is_ok());
    }
}
