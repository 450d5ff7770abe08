//! The named routes of the site and the handlers behind them.

pub mod docs;
pub mod model;
pub mod page;
pub mod post;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::post::PostId;

/// Bytes escaped in a single path segment: everything but the unreserved set.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
	.remove(b'-')
	.remove(b'.')
	.remove(b'_')
	.remove(b'~');

/// Every page the site serves.
///
/// Links are always built from these, so a page can never link to a path the
/// router does not know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
	/// `/`: needs the loaded posts, in load order.
	Home,
	/// `/blog`: needs the search query and the loaded posts.
	Blog,
	/// `/post/{id}`: needs the id segment and the loaded posts.
	Post(PostId),
	/// `/about`: static.
	About,
	/// `/contact`: static, plus the form submission.
	Contact,
}

impl Route {
	pub const HOME: &'static str = "/";
	pub const BLOG: &'static str = "/blog";
	pub const POST: &'static str = "/post/:id";
	pub const ABOUT: &'static str = "/about";
	pub const CONTACT: &'static str = "/contact";

	pub fn href(&self) -> String {
		match self {
			Self::Home => Self::HOME.into(),
			Self::Blog => Self::BLOG.into(),
			Self::Post(id) => format!("/post/{}", utf8_percent_encode(id.as_str(), SEGMENT)),
			Self::About => Self::ABOUT.into(),
			Self::Contact => Self::CONTACT.into(),
		}
	}

	/// The nav link this route belongs under. A single post counts as part of the blog.
	pub fn nav_section(&self) -> &'static str {
		match self {
			Self::Home => "home",
			Self::Blog | Self::Post(..) => "blog",
			Self::About => "about",
			Self::Contact => "contact",
		}
	}
}
