use super::Post;

/// Returns the posts whose title, summary or description contains `query`,
/// ignoring case, in their original order.
///
/// An empty query matches every post.
pub fn filter<'a>(query: &str, posts: &'a [Post]) -> Vec<&'a Post> {
	if query.is_empty() {
		return posts.iter().collect();
	}

	let query = query.to_lowercase();

	posts
		.iter()
		.filter(|post| {
			[&post.title, &post.summary, &post.description]
				.into_iter()
				.any(|field| field.to_lowercase().contains(&query))
		})
		.collect()
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::test::post;

	fn titles<'a>(posts: &[&'a Post]) -> Vec<&'a str> {
		posts.iter().map(|post| post.title.as_str()).collect()
	}

	#[test]
	fn test_empty_query_is_identity() {
		let posts = vec![post(1, "Post 1"), post(2, "Post 2"), post(3, "Post 3")];

		let filtered = filter("", &posts);

		assert_eq!(filtered.into_iter().cloned().collect::<Vec<_>>(), posts);
	}

	#[test]
	fn test_matches_title_case_insensitively() {
		let posts = vec![post(1, "Post 1"), post(2, "Post 2")];

		assert_eq!(titles(&filter("post 1", &posts)), ["Post 1"]);
		assert_eq!(titles(&filter("POST", &posts)), ["Post 1", "Post 2"]);
	}

	#[test]
	fn test_matches_summary_and_description() {
		let mut first = post(1, "First");
		first.summary = "All about Rust".into();
		let mut second = post(2, "Second");
		second.description = "A long look at ownership".into();
		let posts = vec![first, second, post(3, "Third")];

		assert_eq!(titles(&filter("rust", &posts)), ["First"]);
		assert_eq!(titles(&filter("OWNERSHIP", &posts)), ["Second"]);
	}

	#[test]
	fn test_no_match_is_empty() {
		let posts = vec![post(1, "Post 1")];

		assert!(filter("nothing like this", &posts).is_empty());
	}

	#[test]
	fn test_result_is_ordered_subsequence() {
		let posts = (1..=10)
			.map(|i| post(i, &format!("{} post", if i % 3 == 0 { "rust" } else { "go" })))
			.collect::<Vec<_>>();

		let filtered = filter("rust", &posts);
		let ids = filtered
			.iter()
			.map(|post| post.id.as_str().parse::<u32>().unwrap())
			.collect::<Vec<_>>();

		assert_eq!(ids, [3, 6, 9]);
		assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
	}
}
