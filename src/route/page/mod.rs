use axum::{routing::get, Router};

use super::Route;
use crate::AppState;

pub mod model;
pub mod route;

pub use route::not_found;

pub fn routes() -> Router<AppState> {
	use route::*;

	Router::new()
		.route(Route::HOME, get(home))
		.route(Route::BLOG, get(blog))
		.route(Route::POST, get(post))
		.route(Route::ABOUT, get(about))
		.route(Route::CONTACT, get(contact).post(submit_contact))
}
