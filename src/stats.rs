//! Counter computation for the stats card

use crate::{Error, ProfileSource, Repository, Result, UserProfile};
use log::{debug, warn};

/// The three counters shown on the card plus the names it is labelled with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    /// Display name (profile name, falling back to the login)
    pub name: String,
    /// Login as returned by the API
    pub username: String,
    pub stars: u64,
    /// Public repository count from the profile, not the fetched page length
    pub repos: u64,
    pub followers: u64,
}

impl UserStats {
    pub fn from_parts(profile: &UserProfile, repos: &[Repository]) -> Self {
        let name = profile
            .name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&profile.login)
            .to_string();

        Self {
            name,
            username: profile.login.clone(),
            stars: total_stars(repos),
            repos: profile.public_repos,
            followers: profile.followers,
        }
    }
}

/// Sum of `stargazers_count` across `repos`
pub fn total_stars(repos: &[Repository]) -> u64 {
    repos
        .iter()
        .fold(0u64, |sum, repo| sum.saturating_add(repo.stargazers_count))
}

/// Trim `raw`, rejecting names that are empty afterwards
///
/// `.` and `..` are dot segments the URL parser would collapse into a different
/// endpoint; no account can have them as a login.
pub fn validate_username(raw: &str) -> Result<&str> {
    let username = raw.trim();
    if username.is_empty() {
        return Err(Error::InvalidUsername);
    }
    if is_dot_segment(username) {
        return Err(Error::UserNotFound(username.to_string()));
    }
    Ok(username)
}

pub(crate) fn is_dot_segment(segment: &str) -> bool {
    matches!(segment, "." | "..")
}

/// A failed repository listing degrades to an empty list instead of failing the card
pub(crate) fn repos_or_empty(res: Result<Vec<Repository>>, username: &str) -> Vec<Repository> {
    match res {
        Ok(repos) => {
            debug!("{} repositories fetched for {}", repos.len(), username);
            repos
        }
        Err(e) => {
            warn!("Failed to fetch repositories for {}: {}", username, e);
            Vec::new()
        }
    }
}

/// Fetch profile and repositories in parallel and compute the card counters
///
/// The repository listing runs on a scoped thread while the profile is fetched
/// on the caller's thread. Profile errors are returned as-is; repository errors
/// are logged and count as zero stars.
pub fn collect_stats<S>(source: &S, username: &str) -> Result<UserStats>
where
    S: ProfileSource + ?Sized,
{
    let username = validate_username(username)?;

    let (profile, repos) = std::thread::scope(|scope| {
        let repos_job = scope.spawn(|| source.fetch_repos(username));
        let profile = source.fetch_user(username);
        let repos = repos_job
            .join()
            .unwrap_or_else(|_| Err(Error::Other("repository fetch thread panicked".into())));
        (profile, repos)
    });

    let profile = profile?;
    let repos = repos_or_empty(repos, username);
    Ok(UserStats::from_parts(&profile, &repos))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Barrier;
    use std::time::Duration;

    /// In-memory source used by unit tests
    pub(crate) struct FakeSource {
        pub profile: Option<UserProfile>,
        pub repos: Option<Vec<Repository>>,
        pub calls: AtomicUsize,
    }

    impl FakeSource {
        pub(crate) fn new(profile: Option<UserProfile>, repos: Option<Vec<Repository>>) -> Self {
            Self {
                profile,
                repos,
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl ProfileSource for FakeSource {
        fn fetch_user(&self, username: &str) -> Result<UserProfile> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.profile
                .clone()
                .ok_or_else(|| Error::UserNotFound(username.to_string()))
        }

        fn fetch_repos(&self, _username: &str) -> Result<Vec<Repository>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.repos
                .clone()
                .ok_or_else(|| Error::Other("listing failed".into()))
        }
    }

    /// Both fetches block until the other one has started
    pub(crate) struct RendezvousSource {
        barrier: Barrier,
    }

    impl RendezvousSource {
        pub(crate) fn new() -> Self {
            Self {
                barrier: Barrier::new(2),
            }
        }
    }

    impl ProfileSource for RendezvousSource {
        fn fetch_user(&self, username: &str) -> Result<UserProfile> {
            self.barrier.wait();
            Ok(profile(username, None))
        }

        fn fetch_repos(&self, _username: &str) -> Result<Vec<Repository>> {
            self.barrier.wait();
            Ok(vec![repo(9)])
        }
    }

    pub(crate) fn profile(login: &str, name: Option<&str>) -> UserProfile {
        UserProfile {
            login: login.to_string(),
            name: name.map(str::to_string),
            public_repos: 42,
            followers: 1234,
        }
    }

    pub(crate) fn repo(stars: u64) -> Repository {
        Repository {
            name: format!("repo-{}", stars),
            stargazers_count: stars,
        }
    }

    #[test]
    fn sums_stars() {
        assert_eq!(total_stars(&[]), 0);
        assert_eq!(total_stars(&[repo(3), repo(0), repo(10)]), 13);
        assert_eq!(total_stars(&[repo(u64::MAX), repo(1)]), u64::MAX);
    }

    #[test]
    fn name_falls_back_to_login() {
        let stats = UserStats::from_parts(&profile("octocat", None), &[]);
        assert_eq!(stats.name, "octocat");

        let stats = UserStats::from_parts(&profile("octocat", Some("  ")), &[]);
        assert_eq!(stats.name, "octocat");

        let stats = UserStats::from_parts(&profile("octocat", Some("The Octocat")), &[]);
        assert_eq!(stats.name, "The Octocat");

        let stats = UserStats::from_parts(&profile("octocat", Some(" Octo ")), &[]);
        assert_eq!(stats.name, " Octo ");
        assert_eq!(stats.username, "octocat");
    }

    #[test]
    fn repo_count_comes_from_profile() {
        let stats = UserStats::from_parts(&profile("octocat", None), &[repo(1), repo(2)]);
        assert_eq!(stats.repos, 42);
        assert_eq!(stats.stars, 3);
        assert_eq!(stats.followers, 1234);
    }

    #[test]
    fn blank_username_skips_fetching() {
        let source = FakeSource::new(Some(profile("octocat", None)), Some(vec![]));
        let err = collect_stats(&source, " \t ").unwrap_err();
        assert!(matches!(err, Error::InvalidUsername));
        assert_eq!(source.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn dot_segments_are_not_users() {
        let source = FakeSource::new(Some(profile("octocat", None)), Some(vec![]));
        for name in [".", " .. "] {
            let err = collect_stats(&source, name).unwrap_err();
            assert!(matches!(err, Error::UserNotFound(_)), "got {:?}", err);
        }
        assert_eq!(source.calls.load(Ordering::SeqCst), 0);
        assert_eq!(validate_username("...").unwrap(), "...");
    }

    #[test]
    fn fetches_run_concurrently() {
        let (tx, rx) = std::sync::mpsc::channel();
        std::thread::spawn(move || {
            let source = RendezvousSource::new();
            let _ = tx.send(collect_stats(&source, "octocat"));
        });

        // Sequential fetching would leave the first barrier waiter stuck
        let stats = rx
            .recv_timeout(Duration::from_secs(5))
            .expect("fetches did not overlap")
            .unwrap();
        assert_eq!(stats.stars, 9);
    }

    #[test]
    fn collects_both_fetches() {
        let source = FakeSource::new(Some(profile("octocat", None)), Some(vec![repo(5), repo(7)]));
        let stats = collect_stats(&source, "  octocat ").unwrap();
        assert_eq!(stats.stars, 12);
        assert_eq!(source.calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn repo_failure_counts_as_zero_stars() {
        let source = FakeSource::new(Some(profile("octocat", None)), None);
        let stats = collect_stats(&source, "octocat").unwrap();
        assert_eq!(stats.stars, 0);
        assert_eq!(stats.repos, 42);
    }

    #[test]
    fn profile_failure_is_returned() {
        let source = FakeSource::new(None, Some(vec![repo(5)]));
        let err = collect_stats(&source, "ghost").unwrap_err();
        assert!(matches!(err, Error::UserNotFound(ref u) if u == "ghost"));
    }
}
