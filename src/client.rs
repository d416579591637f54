use std::time::Duration;

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::Deserialize;
use url::Url;

use crate::error::{ConfigError, Result};
use crate::util::{DEFAULT_BASE_URL, USER_AGENT, default_timeout};

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ClientConfig {
  /// Where the listings are fetched from. Defaults to reddit.
  base_url: Option<Url>,
  user_agent: Option<String>,
  #[serde(deserialize_with = "duration_str::deserialize_duration")]
  timeout: Duration,
}

impl Default for ClientConfig {
  fn default() -> Self {
    Self {
      base_url: None,
      user_agent: None,
      timeout: default_timeout(),
    }
  }
}

impl ClientConfig {
  fn to_builder(&self) -> reqwest::ClientBuilder {
    let mut builder = reqwest::Client::builder();

    if let Some(user_agent) = &self.user_agent {
      builder = builder.user_agent(user_agent);
    } else {
      builder = builder.user_agent(USER_AGENT);
    }

    let mut header_map = HeaderMap::new();
    header_map.insert(ACCEPT, HeaderValue::from_static("application/json"));
    builder = builder.default_headers(header_map);

    builder.timeout(self.timeout)
  }

  pub fn build(&self) -> Result<Client> {
    let base_url = match &self.base_url {
      Some(url) => url.clone(),
      None => Url::parse(DEFAULT_BASE_URL).map_err(ConfigError::from)?,
    };

    if base_url.cannot_be_a_base() {
      return Err(ConfigError::OpaqueBaseUrl(base_url).into());
    }

    let client = self.to_builder().build()?;
    Ok(Client { base_url, client })
  }
}

/// Outbound HTTP client bound to the upstream's base address.
pub struct Client {
  base_url: Url,
  client: reqwest::Client,
}

impl Client {
  pub fn base_url(&self) -> &Url {
    &self.base_url
  }

  pub async fn get(&self, url: &Url) -> reqwest::Result<reqwest::Response> {
    self.client.get(url.clone()).send().await
  }
}
