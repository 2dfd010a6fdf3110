//! Operations against the site's virtual file system (`/api/vfs/...`).
//!
//! Directory targets carry a trailing slash; that convention is the
//! only path handling the client performs.

use reqwest::Method;
use std::path::Path;
use tracing::debug;

use super::client::{ApiResponse, KuduClient};
use crate::errors::ClientError;

impl KuduClient {
    /// Create a remote directory.
    pub async fn mk_dir(&self, dir: &str) -> Result<ApiResponse, ClientError> {
        self.mk(dir, true).await
    }

    /// Create an empty remote file.
    pub async fn mk_file(&self, file: &str) -> Result<ApiResponse, ClientError> {
        self.mk(file, false).await
    }

    async fn mk(&self, target: &str, is_dir: bool) -> Result<ApiResponse, ClientError> {
        let url = if is_dir {
            self.vfs_url(&format!("{}/", target))
        } else {
            self.vfs_url(target)
        };

        debug!("Creating {}", url);

        self.dispatch(self.request(Method::PUT, &url), &url).await
    }

    /// Delete a remote directory and everything under it.
    pub async fn rm_dir(&self, dir: &str) -> Result<ApiResponse, ClientError> {
        self.rm(dir, true).await
    }

    /// Delete a remote file.
    pub async fn rm_file(&self, file: &str) -> Result<ApiResponse, ClientError> {
        self.rm(file, false).await
    }

    async fn rm(&self, target: &str, is_dir: bool) -> Result<ApiResponse, ClientError> {
        let url = if is_dir {
            format!("{}?recursive=true", self.vfs_url(&format!("{}/", target)))
        } else {
            self.vfs_url(target)
        };

        debug!("Deleting {}", url);

        self.dispatch(self.request(Method::DELETE, &url), &url).await
    }

    /// List a remote directory. The body of the resolved response is
    /// the site's JSON entry listing.
    pub async fn list(&self, target: &str) -> Result<ApiResponse, ClientError> {
        let url = self.vfs_url(&format!("{}/", target));

        debug!("Listing directory {}", url);

        self.dispatch(self.request(Method::GET, &url), &url).await
    }

    /// Upload a local file to a remote path, streaming its bytes as the
    /// request body. Rejects before any network call if `source` is
    /// missing or unreadable.
    pub async fn upload(
        &self,
        source: impl AsRef<Path>,
        target: &str,
    ) -> Result<ApiResponse, ClientError> {
        let source = source.as_ref();
        let file = self.open_source(source).await?;
        let url = self.vfs_url(target);

        debug!("Uploading {} to {}", source.display(), url);

        self.dispatch(self.request(Method::PUT, &url).body(file), &url)
            .await
    }
}
