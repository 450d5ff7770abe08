use std::collections::HashMap;

use maud::{html, Markup};

use super::{layout, or_placeholder};
use crate::{
	post::{LoadStatus, Post},
	route::{page::model::ContactInput, Route},
};

/// Topics listed under the recent posts on the home page.
const CATEGORIES: [&str; 3] = ["Category 1", "Category 2", "Category 3"];

const TEAM: [&str; 3] = ["Member 1", "Member 2", "Member 3"];

/// What to show in place of a post listing that has nothing to list.
fn empty_state(status: &LoadStatus, loaded: &str) -> Markup {
	let message = match status {
		LoadStatus::Pending => "Loading posts...",
		LoadStatus::Failed { .. } => "Unable to load posts.",
		LoadStatus::Loaded { .. } => loaded,
	};

	html! { p.empty { (message) } }
}

fn byline(post: &Post) -> Markup {
	html! {
		p.byline {
			(or_placeholder(&post.author, "Unknown author"))
			@if !post.date.trim().is_empty() {
				" · " time { (post.date) }
			}
		}
	}
}

fn card(post: &Post) -> Markup {
	html! {
		article.post-card {
			h3 { (or_placeholder(&post.title, "Untitled")) }
			(byline(post))
			p { (post.summary) }
			a href=(Route::Post(post.id.clone()).href()) { "Read more" }
		}
	}
}

fn cards<'a>(posts: impl IntoIterator<Item = &'a Post>) -> Markup {
	html! {
		@for post in posts {
			(card(post))
		}
	}
}

/// The home page: a hero with a call to action, the first `limit` posts
/// in the order they were loaded, and the category list.
pub fn home(posts: &[Post], status: &LoadStatus, limit: usize) -> Markup {
	let content = html! {
		section.hero {
			h1 { "Welcome to " (super::SITE_TITLE) }
			a.cta href=(Route::Contact.href()) { "Get in touch" }
		}
		section {
			h2 { "Recent posts" }
			@if posts.is_empty() {
				(empty_state(status, "No posts yet."))
			} @else {
				(cards(posts.iter().take(limit)))
			}
			p { a href=(Route::Blog.href()) { "All posts" } }
		}
		section.categories {
			h2 { "Categories" }
			ul {
				@for category in CATEGORIES {
					li { (category) }
				}
			}
		}
	};

	layout("Home", Some(&Route::Home), "", content)
}

/// The post list, narrowed to `matches` by the search `query`.
///
/// `total` is the size of the whole collection, so an empty result can tell
/// "nothing loaded" apart from "nothing matched". `notice` is shown above the
/// list when the query itself could not be used.
pub fn blog(
	query: &str,
	matches: &[&Post],
	total: usize,
	status: &LoadStatus,
	notice: Option<&str>,
) -> Markup {
	let content = html! {
		h2 {
			@if query.is_empty() || notice.is_some() {
				"Blog posts"
			} @else {
				"Results for “" (query) "”"
			}
		}
		@if let Some(notice) = notice {
			p.error { (notice) }
		}
		@if !matches.is_empty() {
			(cards(matches.iter().copied()))
		} @else if total == 0 {
			(empty_state(status, "No posts yet."))
		} @else {
			p.empty { "No posts match your search." }
		}
	};

	layout("Blog", Some(&Route::Blog), query, content)
}

/// A single post, its comments and a short list of other posts under it.
pub fn post(post: &Post, related: &[&Post]) -> Markup {
	let title = or_placeholder(&post.title, "Untitled");

	let content = html! {
		article {
			h2 { (title) }
			(byline(post))
			div.description { (post.description) }
		}
		section.comments {
			h3 { "Comments" }
			div.comment {
				p { strong { "Commenter Name" } }
				p { "Comment text..." }
			}
		}
		@if !related.is_empty() {
			section.related {
				h3 { "Related posts" }
				ul {
					@for other in related {
						li {
							a href=(Route::Post(other.id.clone()).href()) {
								(or_placeholder(&other.title, "Untitled"))
							}
						}
					}
				}
			}
		}
	};

	layout(title, Some(&Route::Post(post.id.clone())), "", content)
}

pub fn post_not_found(id: &str) -> Markup {
	let content = html! {
		h2 { "Post not found" }
		p { "There is no post with id “" (id) "”." }
		p { a href=(Route::Blog.href()) { "Back to all posts" } }
	};

	layout("Post not found", Some(&Route::Blog), "", content)
}

/// Shown in place of a post while no collection has been loaded yet, so a
/// post is never reported missing before there was a chance to find it.
pub fn post_unavailable(status: &LoadStatus) -> Markup {
	let content = html! {
		h2 { "Post" }
		(empty_state(status, "No posts yet."))
		p { a href=(Route::Blog.href()) { "Back to all posts" } }
	};

	layout("Post", Some(&Route::Blog), "", content)
}

pub fn about() -> Markup {
	let content = html! {
		h2 { "About us" }
		ul.team {
			@for member in TEAM {
				li.member {
					h3 { (member) }
					p { "Short bio..." }
				}
			}
		}
		section.mission {
			h3 { "Mission statement" }
			p { "Our mission is to write clearly about the things we build." }
		}
	};

	layout("About", Some(&Route::About), "", content)
}

fn field(name: &str, label: &str, value: &str, errors: &HashMap<String, String>) -> Markup {
	html! {
		p {
			label for=(name) { (label) }
			@if name == "message" {
				textarea id=(name) name=(name) rows="4" { (value) }
			} @else {
				input
					id=(name)
					name=(name)
					type=(if name == "email" { "email" } else { "text" })
					value=(value);
			}
			@if let Some(error) = errors.get(name) {
				span.error { (error) }
			}
		}
	}
}

/// The contact form, pre-filled with `form` and annotated with `errors`
/// (field name to message).
pub fn contact(form: &ContactInput, errors: &HashMap<String, String>) -> Markup {
	let content = html! {
		h2 { "Contact us" }
		form action=(Route::Contact.href()) method="post" {
			(field("name", "Name", &form.name, errors))
			(field("email", "Email", &form.email, errors))
			(field("subject", "Subject", &form.subject, errors))
			(field("message", "Message", &form.message, errors))
			button type="submit" { "Send message" }
		}
		section.contact-info {
			h3 { "Contact information" }
			p { "Email: contact@myblog.com" }
			p { "Phone: +1234567890" }
			div.social-media {
				p { "Follow us on social media:" }
			}
		}
	};

	layout("Contact", Some(&Route::Contact), "", content)
}

pub fn contact_sent(name: &str) -> Markup {
	let content = html! {
		h2 { "Thank you, " (name) "!" }
		p { "Your message has been received." }
		p { a href=(Route::Home.href()) { "Back to the home page" } }
	};

	layout("Contact", Some(&Route::Contact), "", content)
}

pub fn not_found(path: &str) -> Markup {
	let content = html! {
		h2 { "Page not found" }
		p { "Nothing lives at " code { (path) } "." }
		p { a href=(Route::Home.href()) { "Back to the home page" } }
	};

	layout("Page not found", None, "", content)
}

#[cfg(test)]
mod test {
	use chrono::Utc;

	use super::*;
	use crate::test::post as make_post;

	fn loaded(count: usize) -> LoadStatus {
		LoadStatus::Loaded {
			count,
			at: Utc::now(),
		}
	}

	fn failed() -> LoadStatus {
		LoadStatus::Failed {
			reason: "unexpected status 500".into(),
			at: Utc::now(),
		}
	}

	#[test]
	fn test_home_lists_recent_posts_in_order() {
		let posts = vec![
			make_post(1, "Post 1"),
			make_post(2, "Post 2"),
			make_post(3, "Post 3"),
		];

		let html = home(&posts, &loaded(3), 2).into_string();

		let first = html.find("Post 1").unwrap();
		let second = html.find("Post 2").unwrap();
		assert!(first < second);
		assert!(!html.contains("Post 3"));
		assert!(html.contains(r#"href="/post/1""#));
	}

	#[test]
	fn test_home_lists_categories() {
		let html = home(&[], &LoadStatus::Pending, 6).into_string();

		assert!(html.contains("<h2>Categories</h2>"));
		assert!(html.contains("<li>Category 1</li>"));
		assert!(html.contains("<li>Category 3</li>"));
	}

	#[test]
	fn test_empty_states() {
		assert!(home(&[], &LoadStatus::Pending, 6)
			.into_string()
			.contains("Loading posts..."));

		let html = blog("", &[], 0, &failed(), None).into_string();
		assert!(html.contains("Unable to load posts."));
		assert!(!html.contains("unexpected status"));

		assert!(blog("zzz", &[], 3, &loaded(3), None)
			.into_string()
			.contains("No posts match your search."));
	}

	#[test]
	fn test_blog_shows_notice() {
		let posts = [make_post(1, "Post 1")];
		let matches = posts.iter().collect::<Vec<_>>();

		let html = blog("xx", &matches, 1, &loaded(1), Some("Search is too long.")).into_string();

		assert!(html.contains(r#"<p class="error">Search is too long.</p>"#));
		assert!(html.contains("<h2>Blog posts</h2>"));
		assert!(html.contains("Post 1"));
	}

	#[test]
	fn test_missing_fields_get_placeholders() {
		let mut bare = make_post(5, "");
		bare.author = String::new();
		bare.date = String::new();

		let html = post(&bare, &[]).into_string();

		assert!(html.contains("Untitled"));
		assert!(html.contains("Unknown author"));
		assert!(!html.contains("<time>"));
		assert!(!html.contains("Related posts"));
	}

	#[test]
	fn test_post_shows_comments() {
		let html = post(&make_post(1, "Post 1"), &[]).into_string();

		assert!(html.contains("<h3>Comments</h3>"));
		assert!(html.contains("<strong>Commenter Name</strong>"));
	}

	#[test]
	fn test_post_content_is_escaped() {
		let mut evil = make_post(1, "<script>alert(1)</script>");
		evil.description = "a & b".into();
		evil.author = r#"<img src=x onerror="y">"#.into();

		let html = post(&evil, &[]).into_string();

		assert!(!html.contains("<script>"));
		assert!(!html.contains("<img"));
		assert!(html.contains("&lt;script&gt;"));
		assert!(html.contains("a &amp; b"));
	}

	#[test]
	fn test_post_unavailable_follows_status() {
		assert!(post_unavailable(&LoadStatus::Pending)
			.into_string()
			.contains("Loading posts..."));
		assert!(post_unavailable(&failed())
			.into_string()
			.contains("Unable to load posts."));
	}

	#[test]
	fn test_contact_shows_errors_and_keeps_input() {
		let form = ContactInput {
			name: "Ada".into(),
			email: "not-an-email".into(),
			subject: String::new(),
			message: "Hello".into(),
		};
		let errors = HashMap::from([("email".to_owned(), "Please enter a valid email.".to_owned())]);

		let html = contact(&form, &errors).into_string();

		assert!(html.contains(r#"value="Ada""#));
		assert!(html.contains("Please enter a valid email."));
		assert!(html.contains(">Hello</textarea>"));
		assert!(html.contains("Follow us on social media:"));
	}

	#[test]
	fn test_contact_sent_escapes_name() {
		let html = contact_sent("<b>Ada</b>").into_string();

		assert!(html.contains("Thank you, &lt;b&gt;Ada&lt;/b&gt;!"));
	}
}
