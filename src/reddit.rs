//! Hot post listings from reddit.
//!
//! A lookup never fails from the caller's point of view: any problem
//! talking to the upstream becomes [`FetchOutcome::Failed`], which the
//! caller turns into an empty list after logging the cause.

use mime::Mime;
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;

use crate::client::Client;
use crate::error::FetchError;
use crate::trend::{TrendItem, TrendQuery};

/// Something that can produce hot posts for a subreddit.
#[async_trait::async_trait]
pub trait TrendSource: Send + Sync {
  async fn fetch(&self, query: &TrendQuery) -> FetchOutcome;
}

#[derive(Debug)]
pub enum FetchOutcome {
  Fetched(Vec<TrendItem>),
  Failed(FetchError),
}

impl FetchOutcome {
  /// Collapse the outcome into the caller-facing list. Failures are
  /// logged and yield no items.
  pub fn into_trends(self, query: &TrendQuery) -> Vec<TrendItem> {
    match self {
      FetchOutcome::Fetched(items) => items,
      FetchOutcome::Failed(err) => {
        warn!(
          subreddit = %query.subreddit,
          limit = query.limit,
          "error fetching reddit trends: {err}"
        );
        Vec::new()
      }
    }
  }
}

impl From<Result<Vec<TrendItem>, FetchError>> for FetchOutcome {
  fn from(result: Result<Vec<TrendItem>, FetchError>) -> Self {
    match result {
      Ok(items) => FetchOutcome::Fetched(items),
      Err(err) => FetchOutcome::Failed(err),
    }
  }
}

pub struct RedditSource {
  client: Client,
}

#[async_trait::async_trait]
impl TrendSource for RedditSource {
  async fn fetch(&self, query: &TrendQuery) -> FetchOutcome {
    self.fetch_listing(query).await.into()
  }
}

impl RedditSource {
  pub fn new(client: Client) -> Self {
    Self { client }
  }

  async fn fetch_listing(
    &self,
    query: &TrendQuery,
  ) -> Result<Vec<TrendItem>, FetchError> {
    let url = listing_url(self.client.base_url(), query);
    debug!("fetching {url}");

    let resp = self.client.get(&url).await.map_err(|source| {
      FetchError::Request {
        url: url.clone(),
        source,
      }
    })?;

    let status = resp.status();
    if !status.is_success() {
      return Err(FetchError::Status(status, url));
    }

    let content_type = resp
      .headers()
      .get(CONTENT_TYPE)
      .and_then(|x| x.to_str().ok())
      .and_then(|x| x.parse::<Mime>().ok());

    let body = resp.bytes().await.map_err(|source| FetchError::Request {
      url: url.clone(),
      source,
    })?;

    let listing: Listing =
      serde_json::from_slice(&body).map_err(|source| FetchError::Decode {
        url,
        content_type,
        source,
      })?;

    let items = listing.into_trends(query.limit);
    debug!("got {} posts from r/{}", items.len(), query.subreddit);
    Ok(items)
  }
}

/// `{base}/r/{subreddit}/hot.json?limit={limit}`
fn listing_url(base: &Url, query: &TrendQuery) -> Url {
  let mut url = base.clone();

  // base urls are checked to be hierarchical when the client is built
  if let Ok(mut segments) = url.path_segments_mut() {
    segments.pop_if_empty().extend([
      "r",
      query.subreddit.as_str(),
      "hot.json",
    ]);
  }

  url
    .query_pairs_mut()
    .clear()
    .append_pair("limit", &query.limit.to_string());
  url
}

#[derive(Deserialize)]
struct Listing {
  data: ListingData,
}

#[derive(Deserialize)]
struct ListingData {
  children: Vec<Thing>,
}

#[derive(Deserialize)]
struct Thing {
  data: Post,
}

#[derive(Deserialize)]
struct Post {
  id: String,
  title: String,
  score: i64,
  num_comments: u64,
  url: String,
  created_utc: f64,
  subreddit: String,
}

impl Listing {
  // The upstream is asked for `limit` posts but doesn't always honor it.
  fn into_trends(self, limit: usize) -> Vec<TrendItem> {
    self
      .data
      .children
      .into_iter()
      .take(limit)
      .map(|thing| thing.data.into())
      .collect()
  }
}

impl From<Post> for TrendItem {
  fn from(post: Post) -> Self {
    TrendItem {
      id: post.id,
      title: post.title,
      score: post.score,
      comments: post.num_comments,
      url: post.url,
      created: post.created_utc,
      subreddit: post.subreddit,
    }
  }
}
