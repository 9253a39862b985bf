//! ghstats
//!
//! Fetches a GitHub user's public profile and repository list and renders a
//! fixed-layout SVG card summarizing three counters: total stars, repository
//! count and follower count.
//!
//! # Pipeline
//!
//! - **Fetch**: the profile and the first page of repositories are requested
//!   in parallel through a [`ProfileSource`] (the GitHub REST API by default)
//! - **Compute**: stars are summed across the repository list
//! - **Render**: the counters are laid out on a 495x195 SVG card
//!
//! # Example
//!
//! ```no_run
//! use ghstats::{CardConfig, Locale};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = CardConfig {
//!     locale: Locale::En,
//!     timeout_ms: 10_000,
//!     ..Default::default()
//! };
//!
//! let card = ghstats::generate_card(&config, "octocat")?;
//! card.write_to(card.file_name())?;
//! # Ok(())
//! # }
//! ```

use std::collections::HashMap;

pub mod error;
pub use error::{Error, Result};

// GitHub REST backend (blocking reqwest client)
pub mod github;
pub use github::{GithubClient, Repository, UserProfile};

pub mod stats;
pub use stats::{collect_stats, total_stars, UserStats};

// SVG card layout and serialization
pub mod rendering;
pub use rendering::{render_card, Locale, StatsCard};

// Async facade for tokio callers
pub mod async_api;
pub use async_api::AsyncStatsClient;

/// Public GitHub REST endpoint
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// GitHub caps a single repository page at 100 entries
pub const MAX_PER_PAGE: u32 = 100;

/// Configuration for fetching and rendering a stats card
///
/// The defaults target the public GitHub API anonymously and render the card
/// with Japanese labels.
///
/// # Examples
///
/// ```
/// let cfg = ghstats::CardConfig::default();
/// assert_eq!(cfg.api_base, "https://api.github.com");
/// assert_eq!(cfg.per_page(), 100);
/// ```
#[derive(Debug, Clone)]
pub struct CardConfig {
    /// Base URL of the REST API (no trailing `/users`)
    pub api_base: String,
    /// User agent string sent with every request (GitHub rejects requests without one)
    pub user_agent: String,
    /// Timeout for each request in milliseconds
    pub timeout_ms: u64,
    /// Repositories requested in the single page that is summed
    pub per_page: u32,
    /// Extra HTTP headers sent with every request
    pub headers: HashMap<String, String>,
    /// Language used for the card's labels
    pub locale: Locale,
}

impl CardConfig {
    /// Page size clamped to what the API accepts (1..=100)
    pub fn per_page(&self) -> u32 {
        self.per_page.clamp(1, MAX_PER_PAGE)
    }
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            user_agent: concat!("ghstats/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout_ms: 30000,
            per_page: MAX_PER_PAGE,
            headers: HashMap::new(),
            locale: Locale::default(),
        }
    }
}

/// Source of profile and repository data
///
/// [`GithubClient`] is the production implementation. Both calls may run
/// concurrently from different threads, hence the `Sync` bound.
pub trait ProfileSource: Sync {
    /// Fetch the public profile of `username`
    fn fetch_user(&self, username: &str) -> Result<UserProfile>;

    /// Fetch the first page of `username`'s public repositories
    fn fetch_repos(&self, username: &str) -> Result<Vec<Repository>>;
}

impl<T: ProfileSource + ?Sized> ProfileSource for std::sync::Arc<T>
where
    T: Send,
{
    fn fetch_user(&self, username: &str) -> Result<UserProfile> {
        (**self).fetch_user(username)
    }

    fn fetch_repos(&self, username: &str) -> Result<Vec<Repository>> {
        (**self).fetch_repos(username)
    }
}

/// Fetch, compute and render the card for `username` in one call
///
/// The username is validated before any client is built, so a blank name never
/// reaches the network.
pub fn generate_card(config: &CardConfig, username: &str) -> Result<StatsCard> {
    let username = stats::validate_username(username)?;
    let client = GithubClient::new(config.clone())?;
    let stats = collect_stats(&client, username)?;
    Ok(render_card(&stats, config.locale))
}
