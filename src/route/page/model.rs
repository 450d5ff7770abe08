pub use crate::route::model::SearchInput;

use serde::Deserialize;
use validator::Validate;

/// A message sent through the contact form.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ContactInput {
	#[serde(default)]
	#[validate(length(min = 1, max = 100, message = "Please enter your name."))]
	pub name: String,
	#[serde(default)]
	#[validate(email(message = "Please enter a valid email address."))]
	pub email: String,
	#[serde(default)]
	#[validate(length(min = 1, max = 150, message = "Please enter a subject."))]
	pub subject: String,
	#[serde(default)]
	#[validate(length(
		min = 1,
		max = 5000,
		message = "Please enter a message of at most 5000 characters."
	))]
	pub message: String,
}

impl ContactInput {
	/// Drops surrounding whitespace so a blank field fails validation.
	pub fn trimmed(self) -> Self {
		Self {
			name: self.name.trim().to_owned(),
			email: self.email.trim().to_owned(),
			subject: self.subject.trim().to_owned(),
			message: self.message.trim().to_owned(),
		}
	}
}
