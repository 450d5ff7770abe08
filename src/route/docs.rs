use std::sync::Arc;

use aide::{
	axum::{
		routing::{get, get_with},
		ApiRouter, IntoApiResponse,
	},
	openapi::OpenApi,
	scalar::Scalar,
};
use axum::{response::IntoResponse, Extension};

use crate::{extract::Json, AppState};

pub fn routes() -> ApiRouter<AppState> {
	ApiRouter::new()
		.api_route(
			"/",
			get_with(
				Scalar::new("/docs/private/api.json")
					.with_title("Blog Front")
					.axum_handler(),
				|op| op.description("This documentation page."),
			),
		)
		.route("/private/api.json", get(serve_docs))
}

async fn serve_docs(Extension(api): Extension<Arc<OpenApi>>) -> impl IntoApiResponse {
	Json(api.as_ref()).into_response()
}

#[cfg(test)]
mod test {
	use crate::test::*;

	#[tokio::test]
	async fn test_openapi_document_lists_routes() {
		let app = app(Vec::new());

		let response = app.get("/docs/private/api.json").await;

		assert_eq!(response.status_code(), 200);
		let api = response.json::<serde_json::Value>();
		assert_eq!(api["info"]["title"], "Blog Front");
		assert!(api["paths"]["/api/posts"]["get"].is_object());
		assert!(api["paths"]["/api/posts/refresh"]["post"].is_object());
		assert!(api["paths"]["/api/status"]["get"].is_object());

		let get_post = &api["paths"]["/api/posts/{id}"]["get"];
		assert_eq!(
			get_post["responses"]["404"]["description"],
			"No post has this id."
		);
	}
}
