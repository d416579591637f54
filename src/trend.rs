use serde::{Deserialize, Serialize};

use crate::util::{DEFAULT_LIMIT, DEFAULT_SUBREDDIT};

/// One hot post, reshaped from the upstream listing.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TrendItem {
  pub id: String,
  pub title: String,
  pub score: i64,
  pub comments: u64,
  pub url: String,
  /// Seconds since epoch, passed through as the upstream reports it.
  pub created: f64,
  pub subreddit: String,
}

/// Parameters of a single trends lookup.
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TrendQuery {
  #[serde(default = "default_subreddit")]
  pub subreddit: String,
  #[serde(default = "default_limit")]
  pub limit: usize,
}

impl TrendQuery {
  pub fn new(subreddit: impl Into<String>, limit: usize) -> Self {
    Self {
      subreddit: subreddit.into(),
      limit,
    }
  }
}

impl Default for TrendQuery {
  fn default() -> Self {
    Self::new(default_subreddit(), default_limit())
  }
}

/// Response envelope shared by the HTTP endpoint and the `fetch` command.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TrendsBody {
  pub trends: Vec<TrendItem>,
}

fn default_subreddit() -> String {
  DEFAULT_SUBREDDIT.to_owned()
}

fn default_limit() -> usize {
  DEFAULT_LIMIT
}
