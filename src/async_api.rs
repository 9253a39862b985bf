use crate::stats::{repos_or_empty, validate_username};
use crate::{render_card, CardConfig, Error, GithubClient, ProfileSource, Result, StatsCard, UserStats};
use futures::future;
use std::sync::Arc;
use tokio::task;

/// An async-friendly stats client.
///
/// The blocking HTTP client is built on tokio's blocking pool and every fetch
/// runs there too, so callers on a runtime thread never block it. The profile
/// and repository fetches are spawned as separate blocking tasks and joined.
#[derive(Clone)]
pub struct AsyncStatsClient {
    source: Arc<dyn ProfileSource + Send>,
    config: CardConfig,
}

impl AsyncStatsClient {
    /// Create a client backed by the GitHub REST API.
    pub async fn new(config: Option<CardConfig>) -> Result<Self> {
        let config = config.unwrap_or_default();
        let init_config = config.clone();
        let client = task::spawn_blocking(move || GithubClient::new(init_config))
            .await
            .map_err(|e| Error::Other(format!("Client init canceled: {}", e)))??;

        Ok(Self {
            source: Arc::new(client),
            config,
        })
    }

    /// Wrap an existing source (useful for alternate backends and tests).
    pub fn with_source(source: Arc<dyn ProfileSource + Send>, config: CardConfig) -> Self {
        Self { source, config }
    }

    pub fn config(&self) -> &CardConfig {
        &self.config
    }

    /// Fetch both resources concurrently and compute the counters.
    pub async fn collect_stats(&self, username: &str) -> Result<UserStats> {
        let username = validate_username(username)?.to_string();

        let user_job = {
            let source = Arc::clone(&self.source);
            let username = username.clone();
            task::spawn_blocking(move || source.fetch_user(&username))
        };
        let repos_job = {
            let source = Arc::clone(&self.source);
            let username = username.clone();
            task::spawn_blocking(move || source.fetch_repos(&username))
        };

        let (profile, repos) = future::join(user_job, repos_job).await;
        let profile = profile.map_err(|e| Error::Other(format!("Profile fetch aborted: {}", e)))??;
        let repos = repos.unwrap_or_else(|e| Err(Error::Other(format!("Repository fetch aborted: {}", e))));

        let repos = repos_or_empty(repos, &username);
        Ok(UserStats::from_parts(&profile, &repos))
    }

    /// Collect stats and render them with the configured locale.
    pub async fn generate_card(&self, username: &str) -> Result<StatsCard> {
        let stats = self.collect_stats(username).await?;
        Ok(render_card(&stats, self.config.locale))
    }
}
