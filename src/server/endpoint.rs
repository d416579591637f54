use std::sync::Arc;

use axum::{Extension, Json, Router, extract::Query, routing::get};

use crate::reddit::TrendSource;
use crate::trend::{TrendQuery, TrendsBody};

pub fn router() -> Router {
  Router::new().route("/api/trends", get(handle_trends))
}

/// `GET /api/trends?subreddit=..&limit=..`
///
/// Always answers 200; a failed upstream fetch shows up as an empty
/// `trends` array.
async fn handle_trends(
  Extension(source): Extension<Arc<dyn TrendSource>>,
  Query(query): Query<TrendQuery>,
) -> Json<TrendsBody> {
  let trends = source.fetch(&query).await.into_trends(&query);
  Json(TrendsBody { trends })
}
