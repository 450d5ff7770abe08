use std::{fmt::Display, str::FromStr, time::Duration};

use reqwest::Url;
use tracing::Level;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("{0} must be set")]
	Missing(&'static str),
	#[error("{name} is invalid: {reason}")]
	Invalid { name: &'static str, reason: String },
}

/// Runtime configuration, read from the environment.
#[derive(Debug, Clone)]
pub struct Config {
	pub host: String,
	pub port: u16,
	/// The full url of the posts collection, `{POSTS_BASE_URL}/posts`.
	pub posts_url: Url,
	pub posts_timeout: Duration,
	/// How many posts the home page lists.
	pub home_recent_posts: usize,
	pub log_level: Level,
	pub otel_enabled: bool,
}

impl Config {
	/// Reads the configuration from the process environment.
	pub fn from_env() -> Result<Self, Error> {
		Self::from_lookup(|name| std::env::var(name).ok())
	}

	/// Reads the configuration through `lookup`, which maps a variable name to its value.
	pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
		let base = lookup("POSTS_BASE_URL")
			.filter(|value| !value.trim().is_empty())
			.ok_or(Error::Missing("POSTS_BASE_URL"))?;

		Ok(Self {
			host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".into()),
			port: parse(&lookup, "PORT", 3000)?,
			posts_url: posts_url(&base)?,
			posts_timeout: Duration::from_secs(parse(&lookup, "POSTS_TIMEOUT_SECS", 10)?),
			home_recent_posts: parse(&lookup, "HOME_RECENT_POSTS", 6)?,
			log_level: parse(&lookup, "LOG_LEVEL", Level::INFO)?,
			otel_enabled: flag(&lookup, "OTEL_ENABLED")?,
		})
	}
}

fn parse<T>(
	lookup: &impl Fn(&str) -> Option<String>,
	name: &'static str,
	default: T,
) -> Result<T, Error>
where
	T: FromStr,
	T::Err: Display,
{
	lookup(name).map_or(Ok(default), |value| {
		value.trim().parse().map_err(|e: T::Err| Error::Invalid {
			name,
			reason: e.to_string(),
		})
	})
}

fn flag(lookup: &impl Fn(&str) -> Option<String>, name: &'static str) -> Result<bool, Error> {
	let Some(value) = lookup(name) else {
		return Ok(false);
	};

	match value.trim().to_ascii_lowercase().as_str() {
		"1" | "true" | "yes" | "on" => Ok(true),
		"" | "0" | "false" | "no" | "off" => Ok(false),
		other => Err(Error::Invalid {
			name,
			reason: format!("expected a boolean, got `{other}`"),
		}),
	}
}

/// Appends `/posts` to the base url, keeping any path the base already has.
fn posts_url(base: &str) -> Result<Url, Error> {
	let invalid = |reason: String| Error::Invalid {
		name: "POSTS_BASE_URL",
		reason,
	};

	let url = Url::parse(&format!("{}/posts", base.trim().trim_end_matches('/')))
		.map_err(|e| invalid(e.to_string()))?;

	match url.scheme() {
		"http" | "https" => Ok(url),
		scheme => Err(invalid(format!("unsupported scheme `{scheme}`"))),
	}
}
