//! Secrets loader for site deployment credentials.
//!
//! Credentials are stored in a separate TOML file (config/secrets.toml)
//! that should be excluded from version control. Site configs carry a
//! reference name (credentials_ref), and this module resolves them to
//! actual username/password pairs at load time.
//!
//! Example secrets.toml:
//! ```toml
//! [sites.staging]
//! username = "$staging"
//! password = "deploy-password-1"
//!
//! [sites.production]
//! username = "$production"
//! password = "deploy-password-2"
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::{info, warn};

use super::Credentials;

/// Structure matching the secrets.toml file format
#[derive(Debug, Deserialize, Default)]
pub struct SecretsFile {
    #[serde(default)]
    pub sites: HashMap<String, Credentials>,
}

/// Loader for credentials from the secrets.toml file
pub struct SecretsLoader {
    secrets: SecretsFile,
}

impl SecretsLoader {
    /// Load secrets from the specified file path.
    /// Returns an empty loader if the file doesn't exist.
    pub fn load(secrets_path: &Path) -> Result<Self> {
        if !secrets_path.exists() {
            warn!(
                "Secrets file not found at {:?}, site credentials will need to be configured",
                secrets_path
            );
            return Ok(Self {
                secrets: SecretsFile::default(),
            });
        }

        let content = std::fs::read_to_string(secrets_path)
            .with_context(|| format!("Failed to read secrets file: {:?}", secrets_path))?;

        let secrets: SecretsFile = toml::from_str(&content)
            .with_context(|| format!("Failed to parse secrets file: {:?}", secrets_path))?;

        info!(
            "Loaded credentials for {} sites from {:?}",
            secrets.sites.len(),
            secrets_path
        );

        Ok(Self { secrets })
    }

    /// Get the credentials for a site by its reference name.
    /// Returns None if no entry exists.
    pub fn credentials_for(&self, site_ref: &str) -> Option<&Credentials> {
        self.secrets.sites.get(site_ref)
    }
}
