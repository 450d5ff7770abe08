use std::sync::{
	atomic::{AtomicU64, Ordering},
	Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard,
};

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::Serialize;

use super::Post;

/// Where the store is in its load lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum LoadStatus {
	/// No load has completed yet.
	Pending,
	/// The collection holds the result of a successful load.
	Loaded { count: usize, at: DateTime<Utc> },
	/// Every load so far has failed, so the collection is still empty.
	Failed { reason: String, at: DateTime<Utc> },
}

struct Inner {
	posts: Arc<[Post]>,
	/// Sequence number of the load whose result is currently held.
	seq: u64,
	status: LoadStatus,
}

/// The single owner of the loaded posts.
///
/// Cloning the store is cheap and every clone shares the same collection.
/// Readers get an immutable snapshot that stays valid even if the collection
/// is replaced while they hold it.
///
/// Every write is numbered through [`PostStore::begin`], and a write numbered
/// lower than the one already applied is discarded.
#[derive(Clone)]
pub struct PostStore {
	inner: Arc<RwLock<Inner>>,
	issued: Arc<AtomicU64>,
}

impl Default for PostStore {
	fn default() -> Self {
		Self::new()
	}
}

impl PostStore {
	pub fn new() -> Self {
		Self {
			inner: Arc::new(RwLock::new(Inner {
				posts: Arc::from(Vec::new()),
				seq: 0,
				status: LoadStatus::Pending,
			})),
			issued: Arc::new(AtomicU64::new(0)),
		}
	}

	fn read(&self) -> RwLockReadGuard<'_, Inner> {
		self.inner.read().unwrap_or_else(PoisonError::into_inner)
	}

	fn write(&self) -> RwLockWriteGuard<'_, Inner> {
		self.inner.write().unwrap_or_else(PoisonError::into_inner)
	}

	/// Returns the current posts in the order they were received.
	pub fn get_all(&self) -> Arc<[Post]> {
		Arc::clone(&self.read().posts)
	}

	pub fn status(&self) -> LoadStatus {
		self.read().status.clone()
	}

	/// Hands out the sequence number for a new write. Numbers only grow.
	pub fn begin(&self) -> u64 {
		self.issued.fetch_add(1, Ordering::AcqRel) + 1
	}

	/// Replaces the whole collection.
	///
	/// Any load that began before this call is superseded and will be
	/// discarded when it completes.
	pub fn replace_all(&self, posts: Vec<Post>) {
		let seq = self.begin();

		self.apply(seq, posts);
	}

	/// Replaces the collection with the result of load `seq`, unless a newer
	/// load has already been applied.
	///
	/// Returns `true` if the collection was replaced.
	pub fn apply(&self, seq: u64, posts: Vec<Post>) -> bool {
		let mut inner = self.write();

		if seq <= inner.seq {
			return false;
		}

		inner.seq = seq;
		inner.status = LoadStatus::Loaded {
			count: posts.len(),
			at: Utc::now(),
		};
		inner.posts = Arc::from(posts);

		true
	}

	/// Records that load `seq` failed. The collection is never touched.
	///
	/// The status only moves to [`LoadStatus::Failed`] while nothing has been
	/// loaded; a failed refresh leaves the last good collection and its status
	/// in place. Returns `true` if the status changed.
	pub fn fail(&self, seq: u64, reason: impl Into<String>) -> bool {
		let mut inner = self.write();

		if seq <= inner.seq || matches!(inner.status, LoadStatus::Loaded { .. }) {
			return false;
		}

		inner.status = LoadStatus::Failed {
			reason: reason.into(),
			at: Utc::now(),
		};

		true
	}
}
