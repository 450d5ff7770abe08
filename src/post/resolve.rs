use super::{Post, PostId};

/// Finds the post with the given identifier.
///
/// The identifier is normalized the same way ids from the posts endpoint are,
/// so `"2"`, `" 2 "` and `"02"` all find the post sent as `"id": 2`. If the
/// collection holds the same id more than once, the first one wins.
pub fn resolve<'a>(identifier: &str, posts: &'a [Post]) -> Option<&'a Post> {
	let id = PostId::new(identifier);

	posts.iter().find(|post| post.id == id)
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::test::post;

	#[test]
	fn test_resolves_existing_id() {
		let posts = vec![post(1, "Post 1"), post(2, "Post 2")];

		let found = resolve("2", &posts).unwrap();

		assert_eq!(found.id, PostId::new("2"));
		assert_eq!(found.title, "Post 2");
	}

	#[test]
	fn test_missing_id_is_absent() {
		let posts = vec![post(1, "Post 1"), post(2, "Post 2")];

		assert!(resolve("99", &posts).is_none());
		assert!(resolve("", &posts).is_none());
		assert!(resolve("two", &posts).is_none());
	}

	#[test]
	fn test_normalizes_route_identifier() {
		let posts = vec![post(1, "Post 1"), post(2, "Post 2")];

		assert_eq!(resolve("02", &posts).unwrap().title, "Post 2");
		assert_eq!(resolve(" 1 ", &posts).unwrap().title, "Post 1");
	}

	#[test]
	fn test_duplicate_ids_resolve_to_first() {
		let posts = vec![post(1, "First"), post(1, "Second")];

		assert_eq!(resolve("1", &posts).unwrap().title, "First");
		assert_eq!(resolve("1", &posts), resolve("1", &posts));
	}
}
