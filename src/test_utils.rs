use axum::{Router, body::Body};
use http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;
use wiremock::MockServer;

use crate::client::ClientConfig;
use crate::reddit::RedditSource;

/// A reddit listing envelope around the given `t3` things.
pub fn listing_json(children: Vec<Value>) -> Value {
  json!({
    "kind": "Listing",
    "data": {
      "after": null,
      "dist": children.len(),
      "children": children,
    }
  })
}

pub fn post_json(id: &str, score: i64) -> Value {
  json!({
    "kind": "t3",
    "data": {
      "id": id,
      "title": format!("post {id}"),
      "score": score,
      "num_comments": 0,
      "url": format!("https://example.com/{id}"),
      "created_utc": 1700000000.0,
      "subreddit": "popular",
    }
  })
}

pub fn source_for(server: &MockServer) -> RedditSource {
  let config: ClientConfig =
    serde_yaml::from_str(&format!("base_url: {}\ntimeout: 2s", server.uri()))
      .expect("failed to parse client config");
  RedditSource::new(config.build().expect("failed to build client"))
}

pub async fn send(app: Router, req: Request<Body>) -> (StatusCode, String) {
  let resp = app.oneshot(req).await.expect("router is infallible");
  let status = resp.status();
  let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
    .await
    .expect("failed to read body");
  (status, String::from_utf8_lossy(&body).into_owned())
}

pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
  let req = Request::get(uri).body(Body::empty()).unwrap();
  let (status, body) = send(app, req).await;
  let value = serde_json::from_str(&body)
    .unwrap_or_else(|_| panic!("response is not JSON: {body}"));
  (status, value)
}
