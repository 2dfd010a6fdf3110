use super::secrets::SecretsLoader;
use super::{DeployConfig, SiteConfig};
use anyhow::{anyhow, Result};
use std::collections::HashMap;
use std::path::Path;
use tokio::fs;
use tracing::{debug, info, warn};

/// Loads site configuration from a config directory and resolves each
/// site's credentials from the secrets file.
pub struct ConfigManager {
    sites: HashMap<String, SiteConfig>,
}

impl ConfigManager {
    pub async fn load(config_dir: &str) -> Result<Self> {
        let sites_path = format!("{}/sites.toml", config_dir);
        let content = fs::read_to_string(&sites_path)
            .await
            .map_err(|e| anyhow!("Failed to read site config {}: {}", sites_path, e))?;

        let config: DeployConfig = toml::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse {}: {}", sites_path, e))?;

        let secrets_path = format!("{}/secrets.toml", config_dir);
        let secrets = SecretsLoader::load(Path::new(&secrets_path))?;

        let mut sites = config.sites;
        let mut resolved = 0usize;
        for (site_name, site) in sites.iter_mut() {
            let cred_ref = site.credentials_ref.as_deref().unwrap_or(site_name);
            debug!("Resolving credentials for site {} (ref {})", site_name, cred_ref);

            match secrets.credentials_for(cred_ref) {
                Some(credentials) => {
                    site.credentials = credentials.clone();
                    resolved += 1;
                }
                None => {
                    warn!(
                        "No credentials found for site {} (ref {}), requests will be unauthenticated",
                        site_name, cred_ref
                    );
                }
            }
        }

        info!("Loaded {} sites, {} with credentials", sites.len(), resolved);

        Ok(Self { sites })
    }

    pub fn site(&self, name: &str) -> Option<&SiteConfig> {
        self.sites.get(name)
    }

    pub fn sites(&self) -> &HashMap<String, SiteConfig> {
        &self.sites
    }
}
