use std::fmt;

use schemars::{gen::SchemaGenerator, schema::Schema, JsonSchema};
use serde::{Deserialize, Deserializer, Serialize};

/// The identifier of a post, assigned by the posts endpoint.
///
/// The endpoint may send either a JSON number or a string. Both are kept in a
/// canonical text form so that an id taken from a URL compares equal to the one
/// in the loaded record: surrounding whitespace is dropped and integers lose
/// their leading zeros (`"02"` and `2` are the same id).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PostId(String);

impl PostId {
	pub fn new(raw: impl AsRef<str>) -> Self {
		Self(canonical(raw.as_ref()))
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

fn canonical(raw: &str) -> String {
	let raw = raw.trim();
	let (sign, digits) = match raw.strip_prefix('-') {
		Some(digits) => ("-", digits),
		None => ("", raw),
	};

	if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
		return raw.to_owned();
	}

	match digits.trim_start_matches('0') {
		"" => "0".to_owned(),
		digits => format!("{sign}{digits}"),
	}
}

impl fmt::Display for PostId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl<'de> Deserialize<'de> for PostId {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		#[derive(Deserialize)]
		#[serde(untagged)]
		enum Raw {
			Number(serde_json::Number),
			Text(String),
		}

		Ok(match Raw::deserialize(deserializer)? {
			Raw::Number(number) => Self::new(number.to_string()),
			Raw::Text(text) => Self::new(text),
		})
	}
}

impl JsonSchema for PostId {
	fn schema_name() -> String {
		"PostId".into()
	}

	fn json_schema(gen: &mut SchemaGenerator) -> Schema {
		String::json_schema(gen)
	}
}

/// A missing or `null` text field becomes an empty string.
fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
	D: Deserializer<'de>,
{
	Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// A single blog entry, as served by the posts endpoint.
///
/// Fields the endpoint sends beyond these are ignored. The text fields
/// tolerate being absent; pages decide how an empty field is shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Post {
	/// The unique identifier of the post.
	pub id: PostId,
	/// The title of the post.
	#[serde(default, deserialize_with = "text")]
	pub title: String,
	/// The display name of the author.
	#[serde(default, deserialize_with = "text")]
	pub author: String,
	/// The publication date, as a display string.
	#[serde(default, deserialize_with = "text")]
	pub date: String,
	/// A short summary shown in listings.
	#[serde(default, deserialize_with = "text")]
	pub summary: String,
	/// The full body of the post.
	#[serde(default, deserialize_with = "text")]
	pub description: String,
}

#[cfg(test)]
mod test {
	use serde_json::json;

	use super::*;

	#[test]
	fn test_id_canonical_form() {
		assert_eq!(PostId::new("2").as_str(), "2");
		assert_eq!(PostId::new(" 02 ").as_str(), "2");
		assert_eq!(PostId::new("000").as_str(), "0");
		assert_eq!(PostId::new("-007").as_str(), "-7");
		assert_eq!(PostId::new("hello-world").as_str(), "hello-world");
		assert_eq!(PostId::new("-").as_str(), "-");
	}

	#[test]
	fn test_id_from_number_or_string() {
		let from_number: PostId = serde_json::from_value(json!(2)).unwrap();
		let from_string: PostId = serde_json::from_value(json!("2")).unwrap();

		assert_eq!(from_number, from_string);
		assert_eq!(serde_json::to_value(&from_number).unwrap(), json!("2"));
	}

	#[test]
	fn test_post_tolerates_missing_and_extra_fields() {
		let post: Post = serde_json::from_value(json!({
			"id": 7,
			"title": "Post 7",
			"author": null,
			"tags": ["ignored"],
		}))
		.unwrap();

		assert_eq!(post.id, PostId::new("7"));
		assert_eq!(post.title, "Post 7");
		assert_eq!(post.author, "");
		assert_eq!(post.summary, "");
		assert_eq!(post.description, "");
	}

	#[test]
	fn test_post_requires_id() {
		let post = serde_json::from_value::<Post>(json!({ "title": "No id" }));

		assert!(post.is_err());
	}
}
