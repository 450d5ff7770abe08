//! The post data flow: the record shape, the in-memory store that owns the
//! loaded collection, the loader that fills it from the posts endpoint, and the
//! two pure lookups pages apply to it.

pub mod filter;
pub mod loader;
pub mod model;
pub mod resolve;
pub mod store;

pub use filter::filter;
pub use loader::{LoadOutcome, Loader};
pub use model::{Post, PostId};
pub use resolve::resolve;
pub use store::{LoadStatus, PostStore};
