use std::time::Duration;

/// Identifies us to the upstream so it can tell callers apart.
pub const USER_AGENT: &str = "Mozilla/5.0 Mini-Trends-Dashboard/1.0";

pub const DEFAULT_BASE_URL: &str = "https://www.reddit.com";

pub const DEFAULT_SUBREDDIT: &str = "popular";

pub const DEFAULT_LIMIT: usize = 10;

pub const fn default_timeout() -> Duration {
  Duration::from_secs(10)
}
