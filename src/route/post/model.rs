pub use crate::route::model::SearchInput;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::post::{LoadOutcome, LoadStatus};

#[derive(Deserialize, Validate, JsonSchema)]
pub struct IdInput {
	/// The id of the post, as assigned by the posts endpoint.
	#[validate(length(min = 1, max = 128))]
	pub id: String,
}

#[derive(Serialize, JsonSchema)]
pub struct StatusOutput {
	/// Where the post collection is in its load lifecycle.
	pub status: LoadStatus,
	/// The number of posts currently held.
	pub posts: usize,
}

#[derive(Serialize, JsonSchema)]
pub struct RefreshOutput {
	/// What the refresh did.
	pub outcome: LoadOutcome,
	/// The load status after the refresh.
	pub status: LoadStatus,
}
