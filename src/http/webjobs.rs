//! Operations against the triggered-webjobs sub-API
//! (`/api/triggeredwebjobs/...`).

use reqwest::header::CONTENT_DISPOSITION;
use reqwest::Method;
use std::path::Path;
use tracing::{debug, info};

use super::client::{ApiResponse, KuduClient};
use crate::errors::ClientError;

impl KuduClient {
    /// Replace a triggered webjob's package.
    ///
    /// Clears any existing job of that name first, then streams the
    /// package as the new job. The clearing DELETE's HTTP status is
    /// irrelevant (the job may simply not exist yet); transport
    /// failures and rejected credentials still abort.
    pub async fn upload_webjob(
        &self,
        source: impl AsRef<Path>,
        name: &str,
    ) -> Result<ApiResponse, ClientError> {
        let source = source.as_ref();
        let file = self.open_source(source).await?;
        let url = self.webjob_url(name);

        info!("Uploading webjob {} as {}", source.display(), name);

        // Step 1: clear any existing job under this name
        let _ = self.dispatch(self.request(Method::DELETE, &url), &url).await?;

        // Step 2: stream the package as the replacement
        self.dispatch(
            self.request(Method::PUT, &url)
                .header(CONTENT_DISPOSITION, format!("attachment; filename={}", name))
                .body(file),
            &url,
        )
        .await
    }

    /// Fetch a triggered webjob's metadata. The resolved body carries
    /// the job's JSON description, including its history and log URLs.
    pub async fn get_webjob_info(&self, name: &str) -> Result<ApiResponse, ClientError> {
        let url = self.webjob_url(name);

        debug!("Fetching webjob info for {}", name);

        self.dispatch(self.request(Method::GET, &url), &url).await
    }

    /// Fetch a job log from the absolute URL carried in a prior
    /// job-info response. Resolves with the log body itself.
    pub async fn get_webjob_log(&self, url: &str) -> Result<String, ClientError> {
        debug!("Fetching webjob log from {}", url);

        let response = self.dispatch(self.request(Method::GET, url), url).await?;
        Ok(response.body)
    }

    /// Start a run of a triggered webjob.
    pub async fn trigger_webjob(&self, name: &str) -> Result<ApiResponse, ClientError> {
        let url = format!("{}/run", self.webjob_url(name));

        info!("Triggering webjob {}", name);

        self.dispatch(self.request(Method::POST, &url), &url).await
    }
}
