pub mod manager;
pub mod secrets;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

pub use manager::ConfigManager;
pub use secrets::SecretsLoader;

/// Basic-auth credential pair for a deployed site
#[derive(Clone, Default, Deserialize, PartialEq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Base URL of the site's management endpoint, e.g.
    /// `https://mysite.scm.azurewebsites.net`
    pub site_url: String,
    /// Name of the credential entry in secrets.toml; defaults to the
    /// site's own name
    pub credentials_ref: Option<String>,
    // Resolved from secrets.toml at load time
    #[serde(skip)]
    pub credentials: Credentials,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeployConfig {
    pub sites: HashMap<String, SiteConfig>,
}
