#![warn(clippy::pedantic)]

mod config;
mod error;
mod extract;
mod openapi;
mod post;
mod ratelimit;
mod route;
mod trace;
mod view;

use std::{net::SocketAddr, sync::Arc};

use aide::{axum::ApiRouter, openapi::OpenApi};
use axum::{
	extract::Request,
	http::{header, Method},
	Extension, Router, ServiceExt,
};
use tower::{Layer, ServiceBuilder};
use tower_governor::GovernorLayer;
use tower_http::{
	compression::CompressionLayer,
	cors::{Any, CorsLayer},
	normalize_path::NormalizePathLayer,
	request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
	trace::TraceLayer,
};

use crate::post::{Loader, PostStore};

pub type AppState = State;

/// Settings that shape what the pages show.
#[derive(Clone, Copy, Debug)]
pub struct PageConfig {
	/// How many posts the home page lists.
	pub home_recent_posts: usize,
}

/// The shared application state.
///
/// Handlers extract just the part they need: the [`PostStore`] to read posts,
/// the [`Loader`] to trigger a refresh.
#[derive(Clone, axum::extract::FromRef)]
pub struct State {
	pub store: PostStore,
	pub loader: Loader,
	pub pages: PageConfig,
}

impl State {
	pub fn new(loader: Loader, pages: PageConfig) -> Self {
		Self {
			store: loader.store().clone(),
			loader,
			pages,
		}
	}
}

/// Builds the full router: pages, the JSON API and its documentation.
pub fn app(state: State) -> Router {
	let mut api = OpenApi::default();

	let cors = CorsLayer::new()
		.allow_origin(Any)
		.allow_methods([Method::GET, Method::POST])
		.allow_headers([header::CONTENT_TYPE]);

	ApiRouter::new()
		.nest("/api", route::post::routes())
		.nest("/docs", route::docs::routes())
		.finish_api_with(&mut api, openapi::docs)
		.layer(cors)
		.layer(Extension(Arc::new(api)))
		.merge(route::page::routes())
		.fallback(route::page::not_found)
		.layer(
			ServiceBuilder::new()
				.layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
				.layer(TraceLayer::new_for_http())
				.layer(PropagateRequestIdLayer::x_request_id())
				.layer(CompressionLayer::new()),
		)
		.with_state(state)
}

#[tokio::main]
async fn main() {
	dotenvy::dotenv().ok();

	let config = match config::Config::from_env() {
		Ok(config) => config,
		Err(error) => {
			eprintln!("invalid configuration: {error}");
			std::process::exit(1);
		}
	};

	let _guard = trace::init_tracing_subscriber(config.log_level, config.otel_enabled)
		.expect("failed to initialize tracing");

	let loader = Loader::new(
		config.posts_url.clone(),
		config.posts_timeout,
		PostStore::new(),
	)
	.expect("failed to build posts client");

	let state = State::new(
		loader.clone(),
		PageConfig {
			home_recent_posts: config.home_recent_posts,
		},
	);

	// Pages render a loading state until this completes.
	tokio::spawn(async move { loader.load().await });

	let limits = ratelimit::default();
	ratelimit::cleanup_old_limits(&[&limits]);

	let app = NormalizePathLayer::trim_trailing_slash()
		.layer(app(state).layer(GovernorLayer { config: limits }));

	let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port))
		.await
		.expect("failed to bind to port");

	tracing::info!(
		host = %config.host,
		port = config.port,
		posts_url = %config.posts_url,
		"listening"
	);

	axum::serve(
		listener,
		ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
	)
	.await
	.expect("server error");
}
