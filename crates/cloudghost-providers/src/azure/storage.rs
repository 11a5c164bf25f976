use super::shared_key::{STORAGE_API_VERSION, SharedKeyCredential};
use crate::http::body_text;
use crate::{AzureEndpoints, Error, HttpClient, Operation, Result};
use chrono::Utc;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use quick_xml::Reader;
use quick_xml::events::Event;
use reqwest::StatusCode;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use std::path::Path;
use tokio::io::AsyncWriteExt;

/// Blob names keep `/` as a path separator; everything else outside RFC 3986 unreserved is escaped
const BLOB_PATH: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'/');

/// One page of a List Blobs response
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlobPage {
    pub names: Vec<String>,
    pub next_marker: Option<String>,
}

/// Blob service client for a single storage account, authorized by account key
#[derive(Debug, Clone)]
pub struct StorageClient {
    http: HttpClient,
    service_url: String,
    credential: SharedKeyCredential,
}

impl StorageClient {
    pub fn new(
        http: HttpClient,
        endpoints: &AzureEndpoints,
        credential: SharedKeyCredential,
    ) -> Self {
        Self {
            service_url: endpoints.blob_service_url(credential.account()),
            http,
            credential,
        }
    }

    pub fn account(&self) -> &str {
        self.credential.account()
    }

    /// Fetch one page of `container`, starting at `marker` when given
    pub async fn list_blobs_page(&self, container: &str, marker: Option<&str>) -> Result<BlobPage> {
        let container_path = format!("/{}", encode_path(container));
        let mut query = vec![("restype", "container"), ("comp", "list")];
        if let Some(marker) = marker {
            query.push(("marker", marker));
        }

        let headers = self.signed_headers("GET", &container_path, &query)?;
        let url = format!("{}{}", self.service_url, container_path);
        let request = self.http.get(&url).query(&query).headers(headers);

        let response = self.http.send(request).await?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(Error::rejected(
                Operation::BlobList,
                status,
                body_text(response).await,
            ));
        }

        let xml = response.text().await?;
        parse_blob_page(&xml)
    }

    /// Stream `blob` into a new file at `output`, returning the number of bytes written
    pub async fn download_blob(&self, container: &str, blob: &str, output: &Path) -> Result<u64> {
        let blob_path = format!("/{}/{}", encode_path(container), encode_path(blob));
        let headers = self.signed_headers("GET", &blob_path, &[])?;
        let url = format!("{}{}", self.service_url, blob_path);

        let mut response = self.http.send(self.http.get(&url).headers(headers)).await?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(Error::rejected(
                Operation::BlobDownload,
                status,
                body_text(response).await,
            ));
        }

        let mut file = tokio::fs::File::create(output).await?;
        let mut written = 0u64;
        while let Some(chunk) = response.chunk().await? {
            file.write_all(&chunk).await?;
            written += chunk.len() as u64;
        }
        file.flush().await?;

        tracing::info!(blob, output = %output.display(), bytes = written, "blob downloaded");
        Ok(written)
    }

    fn signed_headers(
        &self,
        verb: &str,
        resource_path: &str,
        query: &[(&str, &str)],
    ) -> Result<HeaderMap> {
        let now = Utc::now().format("%a, %d %b %Y %H:%M:%S GMT").to_string();
        let authorization = self.credential.authorization(
            verb,
            &[("x-ms-date", &now), ("x-ms-version", STORAGE_API_VERSION)],
            resource_path,
            query,
        )?;

        let mut headers = HeaderMap::new();
        headers.insert("x-ms-date", header_value(&now)?);
        headers.insert("x-ms-version", HeaderValue::from_static(STORAGE_API_VERSION));
        headers.insert(AUTHORIZATION, header_value(&authorization)?);
        Ok(headers)
    }
}

fn header_value(value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value).map_err(|e| Error::InvalidKey(e.to_string()))
}

fn encode_path(segment: &str) -> String {
    utf8_percent_encode(segment, BLOB_PATH).to_string()
}

/// Parse an `EnumerationResults` document into blob names and the continuation marker
pub fn parse_blob_page(xml: &str) -> Result<BlobPage> {
    let mut reader = Reader::from_str(xml.trim_start_matches('\u{feff}'));
    reader.config_mut().trim_text(true);

    let mut page = BlobPage::default();
    let mut stack: Vec<Vec<u8>> = Vec::new();

    loop {
        match reader.read_event() {
            Ok(Event::Eof) => break,
            Ok(Event::Start(e)) => stack.push(e.name().as_ref().to_vec()),
            Ok(Event::End(_)) => {
                stack.pop();
            }
            Ok(Event::Text(e)) => {
                let text = e.unescape().map_err(|e| Error::Xml(e.to_string()))?;
                match stack.as_slice() {
                    [.., blob, name] if blob == b"Blob" && name == b"Name" => {
                        page.names.push(text.into_owned());
                    }
                    [.., marker] if marker == b"NextMarker" && !text.is_empty() => {
                        page.next_marker = Some(text.into_owned());
                    }
                    _ => {}
                }
            }
            Ok(_) => {}
            Err(e) => return Err(Error::Xml(e.to_string())),
        }
    }

    Ok(page)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = "\u{feff}<?xml version=\"1.0\" encoding=\"utf-8\"?>\
<EnumerationResults ServiceEndpoint=\"https://acct.blob.core.windows.net/\" ContainerName=\"images\">\
<Blobs>\
<Blob><Name>a.png</Name><Properties><Content-Length>10</Content-Length></Properties></Blob>\
<Blob><Name>dir/b &amp; c.txt</Name><Properties /></Blob>\
</Blobs>\
<NextMarker>2!88!MDAwMDE2</NextMarker>\
</EnumerationResults>";

    #[test]
    fn test_parse_blob_page() {
        let page = parse_blob_page(PAGE).unwrap();
        assert_eq!(page.names, vec!["a.png", "dir/b & c.txt"]);
        assert_eq!(page.next_marker.as_deref(), Some("2!88!MDAwMDE2"));
    }

    #[test]
    fn test_empty_next_marker_ends_listing() {
        let xml = "<EnumerationResults><Blobs /><NextMarker /></EnumerationResults>";
        let page = parse_blob_page(xml).unwrap();
        assert!(page.names.is_empty());
        assert_eq!(page.next_marker, None);
    }

    #[test]
    fn test_malformed_xml() {
        let err = parse_blob_page("<EnumerationResults><Blobs></Wrong>").unwrap_err();
        assert!(matches!(err, Error::Xml(_)));
    }

    #[test]
    fn test_encode_path_keeps_separators() {
        assert_eq!(encode_path("dir/b & c.txt"), "dir/b%20%26%20c.txt");
        assert_eq!(encode_path("plain-name_1.bin"), "plain-name_1.bin");
    }
}
