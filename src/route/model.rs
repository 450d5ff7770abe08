use schemars::JsonSchema;
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Default, Deserialize, Validate, JsonSchema)]
pub struct SearchInput {
	/// Free text matched against the title, summary and description of each
	/// post, ignoring case. Empty or missing matches every post.
	#[serde(default)]
	#[validate(length(max = 200, message = "Search is limited to 200 characters."))]
	pub q: String,
}

#[cfg(test)]
mod test {
	use validator::Validate;

	#[test]
	fn test_search_input_length() {
		let input = super::SearchInput { q: "rust".into() };
		assert!(input.validate().is_ok());

		let input = super::SearchInput { q: "x".repeat(201) };
		assert!(input.validate().is_err());
	}
}
