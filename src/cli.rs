use std::path::{Path, PathBuf};

use clap::Parser;
use serde::Deserialize;

use crate::{
  client::ClientConfig,
  error::{ConfigError, Result},
  reddit::{RedditSource, TrendSource},
  server::ServerConfig,
  trend::{TrendQuery, TrendsBody},
  util::{DEFAULT_LIMIT, DEFAULT_SUBREDDIT},
};

#[derive(Parser)]
pub struct Cli {
  #[clap(subcommand)]
  subcmd: SubCommand,

  /// Optional YAML file with the upstream client settings
  #[clap(long, short)]
  config: Option<PathBuf>,
}

#[derive(Parser)]
enum SubCommand {
  /// Serve the trends API
  Server(ServerConfig),
  /// Fetch trends once and print them as JSON
  Fetch(FetchConfig),
}

#[derive(Parser)]
struct FetchConfig {
  /// The subreddit to read hot posts from
  #[clap(long, short, default_value = DEFAULT_SUBREDDIT)]
  subreddit: String,
  /// Maximum number of posts
  #[clap(long, short('n'), default_value_t = DEFAULT_LIMIT)]
  limit: usize,
  /// Print the JSON on a single line
  #[clap(long, short)]
  compact_output: bool,
}

impl FetchConfig {
  fn to_query(&self) -> TrendQuery {
    TrendQuery::new(self.subreddit.clone(), self.limit)
  }
}

#[derive(Deserialize, Default, Debug, Clone)]
#[serde(default)]
pub struct RootConfig {
  pub client: ClientConfig,
}

impl RootConfig {
  pub fn load_from_file(path: &Path) -> Result<Self> {
    let f = std::fs::File::open(path)?;
    let root_config = serde_yaml::from_reader(f).map_err(ConfigError::from)?;
    Ok(root_config)
  }

  fn load(path: Option<&Path>) -> Result<Self> {
    match path {
      Some(path) => Self::load_from_file(path),
      None => Ok(Self::default()),
    }
  }
}

impl Cli {
  pub async fn run(self) -> anyhow::Result<()> {
    let root_config = RootConfig::load(self.config.as_deref())?;

    match self.subcmd {
      SubCommand::Server(server_config) => {
        server_config.run(root_config).await?
      }
      SubCommand::Fetch(fetch_config) => {
        fetch_trends(root_config, &fetch_config).await?
      }
    }

    Ok(())
  }
}

async fn fetch_trends(
  root_config: RootConfig,
  fetch_config: &FetchConfig,
) -> Result<()> {
  let source = RedditSource::new(root_config.client.build()?);
  let query = fetch_config.to_query();
  let trends = source.fetch(&query).await.into_trends(&query);
  let body = TrendsBody { trends };

  let output = if fetch_config.compact_output {
    serde_json::to_string(&body)?
  } else {
    serde_json::to_string_pretty(&body)?
  };
  println!("{output}");
  Ok(())
}
