use crate::Result;
use cloudghost_providers::StorageClient;
use cloudghost_types::{BlobDownload, BlobItem};
use std::path::Path;

/// Container-level blob operations for one storage account
pub struct BlobOps {
    client: StorageClient,
}

impl BlobOps {
    pub fn new(client: StorageClient) -> Self {
        Self { client }
    }

    /// Every blob in `container`, following `NextMarker` until the listing is exhausted
    pub async fn list_all(&self, container: &str) -> Result<Vec<BlobItem>> {
        let mut items = Vec::new();
        let mut marker: Option<String> = None;
        let mut pages = 0usize;

        loop {
            let page = self
                .client
                .list_blobs_page(container, marker.as_deref())
                .await?;
            pages += 1;
            items.extend(page.names.into_iter().map(|name| BlobItem { name }));

            match page.next_marker {
                Some(next) if !next.is_empty() => marker = Some(next),
                _ => break,
            }
        }

        tracing::debug!(
            account = self.client.account(),
            container,
            pages,
            blobs = items.len(),
            "blob listing complete"
        );
        Ok(items)
    }

    pub async fn download(
        &self,
        container: &str,
        blob: &str,
        output: &Path,
    ) -> Result<BlobDownload> {
        let bytes = self.client.download_blob(container, blob, output).await?;
        Ok(BlobDownload {
            blob: blob.to_string(),
            output: output.display().to_string(),
            bytes,
        })
    }
}
