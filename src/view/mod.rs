//! Server-rendered HTML for the blog pages.
//!
//! Every function here is pure: it takes the data a page needs and returns the
//! finished document. Pages are `maud` templates, so text coming from posts or
//! from the client is escaped wherever it is spliced in.

mod page;

pub use page::*;

use maud::{html, Markup, DOCTYPE};

use crate::route::Route;

pub const SITE_TITLE: &str = "My Blog";

const NAV: [(Route, &str); 4] = [
	(Route::Home, "Home"),
	(Route::Blog, "Blog"),
	(Route::About, "About"),
	(Route::Contact, "Contact"),
];

/// Returns `text`, or `placeholder` if the text is blank.
fn or_placeholder<'a>(text: &'a str, placeholder: &'a str) -> &'a str {
	if text.trim().is_empty() {
		placeholder
	} else {
		text
	}
}

/// Wraps page content in the navigation shell.
///
/// `active` decides which nav link is highlighted, and `query` pre-fills the
/// search box.
fn layout(title: &str, active: Option<&Route>, query: &str, content: Markup) -> Markup {
	let section = active.map(Route::nav_section);

	html! {
		(DOCTYPE)
		html lang="en" {
			head {
				meta charset="utf-8";
				meta name="viewport" content="width=device-width, initial-scale=1";
				title { (title) " | " (SITE_TITLE) }
			}
			body {
				header {
					a.site-title href=(Route::Home.href()) { (SITE_TITLE) }
					nav {
						@for (route, label) in &NAV {
							@let current = (section == Some(route.nav_section())).then_some("page");
							a href=(route.href()) aria-current=[current] { (label) }
						}
					}
					form action=(Route::Blog.href()) method="get" role="search" {
						input type="search" name="q" placeholder="Search" value=(query);
						button type="submit" { "Search" }
					}
				}
				main { (content) }
			}
		}
	}
}
