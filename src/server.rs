pub(crate) mod endpoint;

use std::sync::Arc;

use axum::{Extension, Json, Router, routing::get};
use clap::Parser;
use http::StatusCode;
use serde_json::{Value, json};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::cli::RootConfig;
use crate::error::Result;
use crate::reddit::{RedditSource, TrendSource};

#[derive(Parser)]
pub struct ServerConfig {
  #[clap(long, short, default_value = "0.0.0.0:8000")]
  bind: String,
}

impl ServerConfig {
  pub async fn run(self, root_config: RootConfig) -> Result<()> {
    serve(self, root_config).await
  }
}

pub async fn serve(
  server_config: ServerConfig,
  root_config: RootConfig,
) -> Result<()> {
  let client = root_config.client.build()?;
  info!("fetching trends from {}", client.base_url());
  let source: Arc<dyn TrendSource> = Arc::new(RedditSource::new(client));

  info!("listening on {}", server_config.bind);
  let listener = tokio::net::TcpListener::bind(&server_config.bind).await?;

  let app = router(source);

  info!("starting server");
  Ok(axum::serve(listener, app).await?)
}

pub fn router(source: Arc<dyn TrendSource>) -> Router {
  Router::new()
    .merge(endpoint::router())
    .route("/", get(handle_root))
    .route("/health", get(|| async { "ok" }))
    .fallback(|| async { (StatusCode::NOT_FOUND, "Endpoint not found") })
    .layer(Extension(source))
    .layer(CorsLayer::very_permissive())
    .layer(CompressionLayer::new().gzip(true))
}

async fn handle_root() -> Json<Value> {
  Json(json!({ "message": "Welcome to Mini Trends Dashboard API" }))
}

#[cfg(test)]
mod tests {
  use axum::body::Body;
  use http::Request;

  use super::*;
  use crate::reddit::FetchOutcome;
  use crate::test_utils::{get_json, send};
  use crate::trend::TrendQuery;

  struct EmptySource;

  #[async_trait::async_trait]
  impl TrendSource for EmptySource {
    async fn fetch(&self, _query: &TrendQuery) -> FetchOutcome {
      FetchOutcome::Fetched(Vec::new())
    }
  }

  fn app() -> Router {
    router(Arc::new(EmptySource))
  }

  #[tokio::test]
  async fn test_root_message() {
    let (status, body) = get_json(app(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
      body,
      json!({ "message": "Welcome to Mini Trends Dashboard API" })
    );
  }

  #[tokio::test]
  async fn test_health() {
    let req = Request::get("/health").body(Body::empty()).unwrap();
    let (status, body) = send(app(), req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
  }

  #[tokio::test]
  async fn test_unknown_path() {
    let req = Request::get("/api/nope").body(Body::empty()).unwrap();
    let (status, body) = send(app(), req).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "Endpoint not found");
  }

  #[tokio::test]
  async fn test_cors_any_origin() {
    let req = Request::get("/api/trends")
      .header("origin", "http://localhost:5173")
      .body(Body::empty())
      .unwrap();
    let resp = tower::ServiceExt::oneshot(app(), req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
      resp.headers()["access-control-allow-origin"],
      "http://localhost:5173"
    );
  }

  #[tokio::test]
  async fn test_cors_preflight() {
    let req = Request::builder()
      .method("OPTIONS")
      .uri("/api/trends")
      .header("origin", "http://localhost:5173")
      .header("access-control-request-method", "GET")
      .body(Body::empty())
      .unwrap();
    let resp = tower::ServiceExt::oneshot(app(), req).await.unwrap();
    assert!(resp.status().is_success());
    assert!(resp.headers().contains_key("access-control-allow-methods"));
  }
}
