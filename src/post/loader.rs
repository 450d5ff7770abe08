use std::{
	sync::{
		atomic::{AtomicBool, Ordering},
		Arc,
	},
	time::{Duration, Instant},
};

use reqwest::{StatusCode, Url};
use schemars::JsonSchema;
use serde::Serialize;

use super::{Post, PostStore};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
	#[error("failed to build http client: {0}")]
	Client(#[source] reqwest::Error),
	#[error("request failed: {0}")]
	Request(#[from] reqwest::Error),
	#[error("unexpected status {0}")]
	Status(StatusCode),
	#[error("response is not a json array: {0}")]
	Body(#[from] serde_json::Error),
}

/// What a single call to [`Loader::load`] or [`Loader::refresh`] did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum LoadOutcome {
	/// The store now holds the loaded posts.
	Loaded { count: usize, skipped: usize },
	/// The collection was replaced while the load ran, so its result was discarded.
	Stale,
	/// Another load was already in flight, so nothing was requested.
	Skipped,
	/// The request failed and the store was left as it was.
	Failed { reason: String },
}

/// The posts from one response, minus records that could not be read.
#[derive(Debug)]
pub struct Parsed {
	pub posts: Vec<Post>,
	pub skipped: usize,
}

/// Parses a response body into posts.
///
/// The body must be a JSON array. Elements that are not post-shaped are
/// skipped and counted rather than failing the whole load.
pub fn parse_posts(body: &[u8]) -> Result<Parsed, LoadError> {
	let records = serde_json::from_slice::<Vec<serde_json::Value>>(body)?;
	let mut posts = Vec::with_capacity(records.len());
	let mut skipped = 0;

	for (index, record) in records.into_iter().enumerate() {
		match serde_json::from_value::<Post>(record) {
			Ok(post) => posts.push(post),
			Err(error) => {
				skipped += 1;
				tracing::warn!(index, %error, "skipping malformed post record");
			}
		}
	}

	Ok(Parsed { posts, skipped })
}

/// Fills a [`PostStore`] from the posts endpoint.
///
/// At most one load runs at a time across every clone of the loader. Each
/// load is numbered by the store, so a result that completes after the
/// collection was replaced is discarded and never overwrites fresher posts.
#[derive(Clone)]
pub struct Loader {
	client: reqwest::Client,
	url: Url,
	store: PostStore,
	in_flight: Arc<AtomicBool>,
}

/// Clears the in-flight flag even if the load future is dropped early.
struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
	fn drop(&mut self) {
		self.0.store(false, Ordering::Release);
	}
}

impl Loader {
	pub fn new(url: Url, timeout: Duration, store: PostStore) -> Result<Self, LoadError> {
		let client = reqwest::Client::builder()
			.timeout(timeout)
			.build()
			.map_err(LoadError::Client)?;

		Ok(Self {
			client,
			url,
			store,
			in_flight: Arc::new(AtomicBool::new(false)),
		})
	}

	pub fn store(&self) -> &PostStore {
		&self.store
	}

	/// Requests the posts once and applies the result to the store. Does
	/// nothing while another load is still running.
	///
	/// Failures are logged and recorded on the store, never returned as an
	/// error.
	#[tracing::instrument(skip(self), fields(url = %self.url))]
	pub async fn load(&self) -> LoadOutcome {
		if self.in_flight.swap(true, Ordering::AcqRel) {
			tracing::debug!("load already in flight");
			return LoadOutcome::Skipped;
		}

		let _guard = InFlightGuard(&self.in_flight);
		let seq = self.store.begin();
		let started = Instant::now();
		let result = self.fetch().await;
		let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;

		match result {
			Ok(Parsed { posts, skipped }) => {
				let count = posts.len();

				if !self.store.apply(seq, posts) {
					tracing::debug!(seq, "discarding stale post load");
					return LoadOutcome::Stale;
				}

				tracing::info!(
					histogram.posts_load_ms = elapsed_ms,
					monotonic_counter.posts_loaded = count as u64,
					seq,
					count,
					skipped,
					"loaded posts"
				);

				LoadOutcome::Loaded { count, skipped }
			}
			Err(error) => {
				let reason = error.to_string();

				if self.store.fail(seq, reason.as_str()) {
					tracing::error!(seq, %error, "failed to load posts");
				} else {
					tracing::warn!(seq, %error, "failed to refresh posts, keeping previous collection");
				}

				LoadOutcome::Failed { reason }
			}
		}
	}

	/// A load requested by a client rather than by startup.
	pub async fn refresh(&self) -> LoadOutcome {
		tracing::info!("manual refresh requested");

		self.load().await
	}

	async fn fetch(&self) -> Result<Parsed, LoadError> {
		let response = self.client.get(self.url.clone()).send().await?;
		let status = response.status();

		if !status.is_success() {
			return Err(LoadError::Status(status));
		}

		let body = response.bytes().await?;

		parse_posts(&body)
	}
}
