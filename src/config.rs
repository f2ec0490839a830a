use serde::Deserialize;
use std::path::Path;
use tokio::fs;
use url::Url;

use crate::error::Result;

/// Parse the configuration from a given file
pub async fn parse<P: AsRef<Path>>(path: P) -> Result<Config> {
    let raw = fs::read(path).await?;
    let data = toml::from_slice(&raw)?;
    Ok(data)
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub project: String,
    pub api: Api,
}

#[derive(Debug, Deserialize)]
pub struct Api {
    #[serde(default = "default_endpoint")]
    pub endpoint: Url,
    pub token: String,
}

fn default_endpoint() -> Url {
    Url::parse("https://dns.googleapis.com/dns/v1").unwrap()
}
