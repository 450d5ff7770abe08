use std::collections::HashMap;

use axum::{
	extract::{Path, Query, State},
	http::{StatusCode, Uri},
	response::{IntoResponse, Response},
	Form,
};
use maud::Markup;
use validator::{Validate, ValidationErrors};

use super::model::{ContactInput, SearchInput};
use crate::{
	post::{filter, resolve, LoadStatus, PostStore},
	view, PageConfig,
};

/// How many other posts a post page links to.
const RELATED_POSTS: usize = 2;

pub async fn home(State(store): State<PostStore>, State(pages): State<PageConfig>) -> Markup {
	let posts = store.get_all();

	view::home(&posts, &store.status(), pages.home_recent_posts)
}

/// Lists the posts matching `q`. A query that fails validation is reported on
/// the page and the whole collection is listed instead.
pub async fn blog(State(store): State<PostStore>, Query(search): Query<SearchInput>) -> Response {
	let posts = store.get_all();
	let status = store.status();

	if let Err(errors) = search.validate() {
		let notice = messages(&errors)
			.remove("q")
			.unwrap_or_else(|| "That search could not be used.".to_owned());
		let all = posts.iter().collect::<Vec<_>>();

		return (
			StatusCode::UNPROCESSABLE_ENTITY,
			view::blog(&search.q, &all, posts.len(), &status, Some(&notice)),
		)
			.into_response();
	}

	let matches = filter(&search.q, &posts);

	view::blog(&search.q, &matches, posts.len(), &status, None).into_response()
}

/// Shows one post. Until a collection has been loaded a miss renders the
/// loading or failure state rather than a 404.
pub async fn post(State(store): State<PostStore>, Path(id): Path<String>) -> Response {
	let posts = store.get_all();

	let Some(post) = resolve(&id, &posts) else {
		return match store.status() {
			status @ LoadStatus::Pending => view::post_unavailable(&status).into_response(),
			status @ LoadStatus::Failed { .. } => (
				StatusCode::SERVICE_UNAVAILABLE,
				view::post_unavailable(&status),
			)
				.into_response(),
			LoadStatus::Loaded { .. } => {
				(StatusCode::NOT_FOUND, view::post_not_found(&id)).into_response()
			}
		};
	};

	let related = posts
		.iter()
		.filter(|other| other.id != post.id)
		.take(RELATED_POSTS)
		.collect::<Vec<_>>();

	view::post(post, &related).into_response()
}

pub async fn about() -> Markup {
	view::about()
}

pub async fn contact() -> Markup {
	view::contact(&ContactInput::default(), &HashMap::new())
}

/// The first message of each invalid field, keyed by field name.
fn messages(errors: &ValidationErrors) -> HashMap<String, String> {
	errors
		.field_errors()
		.into_iter()
		.filter_map(|(field, errors)| {
			let message = errors.first()?.message.as_ref()?;

			Some((field.to_string(), message.to_string()))
		})
		.collect()
}

/// Accepts a contact message. Nothing is stored; the message is only logged.
pub async fn submit_contact(Form(input): Form<ContactInput>) -> Response {
	let input = input.trimmed();

	if let Err(errors) = input.validate() {
		return (
			StatusCode::UNPROCESSABLE_ENTITY,
			view::contact(&input, &messages(&errors)),
		)
			.into_response();
	}

	tracing::info!(
		name = %input.name,
		email = %input.email,
		subject = %input.subject,
		length = input.message.len(),
		"contact message received"
	);

	view::contact_sent(&input.name).into_response()
}

pub async fn not_found(uri: Uri) -> (StatusCode, Markup) {
	(StatusCode::NOT_FOUND, view::not_found(uri.path()))
}
