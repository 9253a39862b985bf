//! GitHub REST backend.
//!
//! Uses a blocking reqwest client. Endpoints are built from the configured
//! API base with the username pushed as an encoded path segment.

use crate::{CardConfig, Error, ProfileSource, Result};
use log::debug;
use reqwest::blocking::{Client, Response};
use reqwest::header::ACCEPT;
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;
use url::Url;

/// The subset of `GET /users/{username}` the card needs
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserProfile {
    pub login: String,
    /// Display name, `null` when the user never set one
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub public_repos: u64,
    #[serde(default)]
    pub followers: u64,
}

/// One entry of `GET /users/{username}/repos`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Repository {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub stargazers_count: u64,
}

pub struct GithubClient {
    client: Client,
    config: CardConfig,
    base: Url,
}

impl GithubClient {
    /// Build a client for `config.api_base`
    ///
    /// Fails with `ConfigError` when the base is not an absolute http(s) URL.
    pub fn new(config: CardConfig) -> Result<Self> {
        let base = Url::parse(&config.api_base)
            .map_err(|e| Error::ConfigError(format!("invalid API base {:?}: {}", config.api_base, e)))?;
        if base.cannot_be_a_base() || !matches!(base.scheme(), "http" | "https") {
            return Err(Error::ConfigError(format!(
                "API base must be an http(s) URL, got {:?}",
                config.api_base
            )));
        }

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| Error::InitializationError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            config,
            base,
        })
    }

    pub fn config(&self) -> &CardConfig {
        &self.config
    }

    /// `{base}/users/{username}` plus optional trailing segment
    ///
    /// Dot segments are refused: the URL parser would resolve them to a
    /// different endpoint instead of encoding them.
    pub fn user_url(&self, username: &str, tail: Option<&str>) -> Result<Url> {
        if crate::stats::is_dot_segment(username) {
            return Err(Error::UserNotFound(username.to_string()));
        }
        let mut url = self.base.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| Error::ConfigError(format!("API base {} cannot take a path", self.base)))?;
            segments.pop_if_empty().push("users").push(username);
            if let Some(tail) = tail {
                segments.push(tail);
            }
        }
        Ok(url)
    }

    fn get(&self, url: Url) -> Result<Response> {
        debug!("GET {}", url);
        let mut req = self
            .client
            .get(url)
            .header(ACCEPT, "application/vnd.github+json");
        for (name, value) in &self.config.headers {
            req = req.header(name.as_str(), value.as_str());
        }
        Ok(req.send()?)
    }
}

impl ProfileSource for GithubClient {
    fn fetch_user(&self, username: &str) -> Result<UserProfile> {
        let resp = self.get(self.user_url(username, None)?)?;
        let status = resp.status();
        if !status.is_success() {
            debug!("user lookup for {} answered {}", username, status);
            return Err(match status {
                StatusCode::NOT_FOUND => Error::UserNotFound(username.to_string()),
                StatusCode::FORBIDDEN => Error::RateLimited,
                other => Error::UserFetch {
                    status: other.as_u16(),
                },
            });
        }

        let body = resp.text()?;
        Ok(serde_json::from_str(&body)?)
    }

    fn fetch_repos(&self, username: &str) -> Result<Vec<Repository>> {
        let mut url = self.user_url(username, Some("repos"))?;
        url.query_pairs_mut()
            .append_pair("per_page", &self.config.per_page().to_string());

        let resp = self.get(url)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Other(format!(
                "repository listing answered HTTP {}",
                status.as_u16()
            )));
        }

        let body = resp.text()?;
        Ok(serde_json::from_str(&body)?)
    }
}
