use std::env;

use crate::error::{ClientError, Result};

pub const DEVELOPMENT_BASE_URL: &str = "http://localhost:5000";

/// How the client was built; decides where the API is looked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildMode {
    Development,
    Production,
}

impl BuildMode {
    pub fn current() -> Self {
        if cfg!(debug_assertions) {
            BuildMode::Development
        } else {
            BuildMode::Production
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
}

impl ClientConfig {
    /// Configuration for the running binary's build mode, honoring `API_BASE_URL`.
    pub fn for_build() -> Result<Self> {
        Self::resolve(BuildMode::current(), env::var("API_BASE_URL").ok())
    }

    pub fn resolve(mode: BuildMode, api_base_url: Option<String>) -> Result<Self> {
        let explicit = api_base_url.filter(|url| !url.trim().is_empty());

        let base_url = match (mode, explicit) {
            (_, Some(url)) => url.trim().to_string(),
            (BuildMode::Development, None) => DEVELOPMENT_BASE_URL.to_string(),
            (BuildMode::Production, None) => return Err(ClientError::MissingBaseUrl),
        };

        Ok(Self { base_url })
    }
}
