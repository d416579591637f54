use mime::Mime;
use reqwest::StatusCode;
use url::Url;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  #[error("YAML parse error")]
  Yaml(#[from] serde_yaml::Error),

  #[error("Invalid base URL {0}")]
  InvalidUrl(#[from] url::ParseError),

  #[error("Base URL cannot carry path segments: {0}")]
  OpaqueBaseUrl(Url),
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("IO error")]
  Io(#[from] std::io::Error),

  #[error("Reqwest client error {0:?}")]
  Reqwest(#[from] reqwest::Error),

  #[error("Config error {0:?}")]
  Config(#[from] ConfigError),

  #[error("JSON serialization error")]
  Json(#[from] serde_json::Error),
}

/// Why a trends fetch came back empty. Only ever reported in logs.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
  #[error("request to {url} failed: {source}")]
  Request {
    url: Url,
    #[source]
    source: reqwest::Error,
  },

  #[error("HTTP status error {0} (url: {1})")]
  Status(StatusCode, Url),

  #[error(
    "malformed listing from {url} (content-type: {}): {source}",
    display_mime(.content_type)
  )]
  Decode {
    url: Url,
    content_type: Option<Mime>,
    #[source]
    source: serde_json::Error,
  },
}

fn display_mime(mime: &Option<Mime>) -> String {
  mime
    .as_ref()
    .map(|m| m.essence_str().to_owned())
    .unwrap_or_else(|| "unknown".into())
}
