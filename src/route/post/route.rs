use axum::extract::State;
use macros::route;

use crate::{
	error,
	extract::{Json, Path, Query},
	openapi::tag,
	post::{self, Loader, Post, PostId, PostStore},
};

use super::{model, Error, RouteError};

/// List posts
/// Returns the loaded posts in the order they were received, narrowed by the
/// optional search query `q`.
#[route(tag = tag::POST)]
pub async fn get_posts(
	State(store): State<PostStore>,
	Query(search): Query<model::SearchInput>,
) -> Json<Vec<Post>> {
	let posts = store.get_all();

	Json(post::filter(&search.q, &posts).into_iter().cloned().collect())
}

/// Get single post
/// Returns a single post by its id. Numeric ids match with or without leading zeros.
#[route(
	tag = tag::POST,
	response(
		status = 404,
		description = "No post has this id.",
		shape = "Json<error::ErrorResponse<'static>>"
	)
)]
pub async fn get_post(
	State(store): State<PostStore>,
	Path(path): Path<model::IdInput>,
) -> Result<Json<Post>, RouteError> {
	let posts = store.get_all();
	let post = post::resolve(&path.id, &posts)
		.cloned()
		.ok_or_else(|| Error::UnknownPost(PostId::new(&path.id)))?;

	Ok(Json(post))
}

/// Refresh posts
/// Reloads the posts from the posts endpoint. A refresh that is requested while a
/// load, including the one made at startup, is still running does nothing. A failed refresh keeps the current posts.
#[route(tag = tag::POST)]
pub async fn refresh_posts(State(loader): State<Loader>) -> Json<model::RefreshOutput> {
	let outcome = loader.refresh().await;

	Json(model::RefreshOutput {
		outcome,
		status: loader.store().status(),
	})
}

/// Get load status
/// Returns whether the posts have been loaded and how many there are.
#[route(tag = tag::POST)]
pub async fn get_status(State(store): State<PostStore>) -> Json<model::StatusOutput> {
	Json(model::StatusOutput {
		status: store.status(),
		posts: store.get_all().len(),
	})
}
