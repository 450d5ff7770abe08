use aide::axum::{
	routing::{get_with, post_with},
	ApiRouter,
};
use axum::http::StatusCode;

use crate::{error, post::PostId, AppState};

pub mod model;
pub mod route;

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
	#[error("unknown post {0}")]
	UnknownPost(PostId),
}

pub type RouteError = error::RouteError<Error>;

pub fn routes() -> ApiRouter<AppState> {
	use route::*;

	ApiRouter::new()
		.api_route("/posts", get_with(get_posts, get_posts_docs))
		.api_route(
			"/posts/refresh",
			post_with(refresh_posts, refresh_posts_docs),
		)
		.api_route("/posts/:id", get_with(get_post, get_post_docs))
		.api_route("/status", get_with(get_status, get_status_docs))
}

impl error::ErrorShape for Error {
	fn status(&self) -> StatusCode {
		match self {
			Self::UnknownPost(..) => StatusCode::NOT_FOUND,
		}
	}

	fn into_errors(self) -> Vec<error::Message<'static>> {
		match self {
			Self::UnknownPost(id) => error::Message::new("unknown_post")
				.content("The post you requested does not exist.")
				.detail("post", id.to_string())
				.into_vec(),
		}
	}
}

#[cfg(test)]
mod test {
	use crate::test::*;

	#[tokio::test]
	async fn test_list_posts() {
		let app = app(vec![post(1, "Post 1"), post(2, "Post 2")]);

		let response = app.get("/api/posts").await;

		assert_eq!(response.status_code(), 200);
		let posts = response.json::<Vec<Post>>();
		assert_eq!(posts, [post(1, "Post 1"), post(2, "Post 2")]);
	}

	#[tokio::test]
	async fn test_search_posts() {
		let app = app(vec![post(1, "Post 1"), post(2, "Post 2")]);

		let response = app.get("/api/posts").add_query_param("q", "post 1").await;

		assert_eq!(response.json::<Vec<Post>>(), [post(1, "Post 1")]);
	}

	#[tokio::test]
	async fn test_search_query_too_long() {
		let app = app(Vec::new());

		let response = app
			.get("/api/posts")
			.add_query_param("q", "x".repeat(201))
			.await;

		assert_eq!(response.status_code(), 400);
		assert_eq!(response.json::<serde_json::Value>()["success"], false);
	}

	#[tokio::test]
	async fn test_get_post() {
		let app = app(vec![post(1, "Post 1"), post(2, "Post 2")]);

		let response = app.get("/api/posts/2").await;

		assert_eq!(response.status_code(), 200);
		assert_eq!(response.json::<Post>(), post(2, "Post 2"));
	}

	#[tokio::test]
	async fn test_unknown_post() {
		let app = app(vec![post(1, "Post 1")]);

		let response = app.get("/api/posts/99").await;

		assert_eq!(response.status_code(), 404);
		let body = response.json::<serde_json::Value>();
		assert_eq!(body["errors"][0]["code"], "unknown_post");
		assert_eq!(body["errors"][0]["details"]["post"], "99");
	}

	#[tokio::test]
	async fn test_refresh_replaces_posts() {
		let url = serve_posts(
			StatusCode::OK,
			json!([{ "id": 5, "title": "Fresh" }]).to_string(),
		)
		.await;
		let app = app_with_source(vec![post(1, "Stale")], url);

		let response = app.post("/api/posts/refresh").await;

		assert_eq!(response.status_code(), 200);
		let body = response.json::<serde_json::Value>();
		assert_eq!(body["outcome"]["outcome"], "loaded");
		assert_eq!(body["status"]["state"], "loaded");

		let posts = app.get("/api/posts").await.json::<Vec<Post>>();
		assert_eq!(posts.len(), 1);
		assert_eq!(posts[0].title, "Fresh");
	}

	#[tokio::test]
	async fn test_failed_refresh_keeps_posts() {
		let url = serve_posts(StatusCode::INTERNAL_SERVER_ERROR, String::new()).await;
		let app = app_with_source(vec![post(1, "Post 1")], url);

		let response = app.post("/api/posts/refresh").await;

		assert_eq!(response.status_code(), 200);
		assert_eq!(
			response.json::<serde_json::Value>()["outcome"]["outcome"],
			"failed"
		);
		assert_eq!(
			app.get("/api/posts").await.json::<Vec<Post>>(),
			[post(1, "Post 1")]
		);
	}

	#[tokio::test]
	async fn test_status() {
		let app = app(Vec::new());

		let body = app.get("/api/status").await.json::<serde_json::Value>();

		assert_eq!(body["status"]["state"], "pending");
		assert_eq!(body["posts"], 0);
	}
}
