use anyhow::{Context, Result};
use animaqu_common::environment::{
    get_env_var, get_env_var_or,
    variables::{ANIME_API_URL, COMIC_API_URL, HTTP_TIMEOUT_SECS},
};
use std::time::Duration;
use tracing::info;
use url::Url;

const ANIME_API_DEFAULT: &str = "http://localhost:3000/v1";
const COMIC_API_DEFAULT: &str = "https://www.sankavollerei.com/comic/komikstation";
const HTTP_TIMEOUT_DEFAULT: u64 = 15;
pub(crate) const USER_AGENT: &str = concat!("animaqu/", env!("CARGO_PKG_VERSION"));

/// Settings to configure the content API clients.
#[derive(Debug, Clone)]
pub struct ContentApiSettings {
    pub anime_api_url: Url,
    pub comic_api_url: Url,
    pub timeout: Duration,
}

impl ContentApiSettings {
    pub fn from_environment() -> Result<Self> {
        Ok(ContentApiSettings {
            anime_api_url: get_url(ANIME_API_URL, ANIME_API_DEFAULT)?,
            comic_api_url: get_url(COMIC_API_URL, COMIC_API_DEFAULT)?,
            timeout: Duration::from_secs(get_env_var_or(HTTP_TIMEOUT_SECS, HTTP_TIMEOUT_DEFAULT)?),
        })
    }

    pub(crate) fn build_http_client(&self) -> Result<reqwest::Client> {
        reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to build the content API HTTP client.")
    }
}

fn get_url(name: &str, default: &str) -> Result<Url> {
    let raw = match get_env_var(name) {
        Ok(v) => v,
        Err(_) => {
            info!("No value found for {}, using the default value {}.", name, default);
            String::from(default)
        }
    };
    Url::parse(&raw).with_context(|| format!("Parsing of {} failed.", name))
}
