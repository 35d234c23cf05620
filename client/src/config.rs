use std::time::Duration;
use web_sys::Document;

/// Attribute on the list container that overrides the API root
pub const API_ROOT_ATTRIBUTE: &str = "data-api-root";

/// Ids of the elements the host page provides
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ElementIds {
	pub list: &'static str,
	pub select: &'static str,
	pub form: &'static str,
	pub email: &'static str,
	pub banner: &'static str,
}

impl Default for ElementIds {
	fn default() -> Self {
		Self {
			list: "activities-list",
			select: "activity",
			form: "signup-form",
			email: "email",
			banner: "message",
		}
	}
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BoardConfig {
	/// Prefix for every request target. Empty means same-origin absolute paths.
	pub api_root: String,
	/// How long a banner message stays visible
	pub banner_duration: Duration,
	pub element_ids: ElementIds,
}

impl Default for BoardConfig {
	fn default() -> Self {
		Self {
			api_root: String::new(),
			banner_duration: Duration::from_secs(5),
			element_ids: ElementIds::default(),
		}
	}
}

impl BoardConfig {
	/// Builds the configuration for the current page. The only page-provided setting is the API root, read from the
	/// list container's `data-api-root` attribute.
	pub fn from_page(document: &Document) -> Self {
		let mut config = Self::default();
		let api_root = document
			.get_element_by_id(config.element_ids.list)
			.and_then(|list| list.get_attribute(API_ROOT_ATTRIBUTE));
		if let Some(api_root) = api_root {
			config = config.with_api_root(&api_root);
		}
		config
	}

	pub fn with_api_root(mut self, api_root: &str) -> Self {
		self.api_root = api_root.trim().trim_end_matches('/').to_string();
		self
	}

	pub fn banner_millis(&self) -> u32 {
		u32::try_from(self.banner_duration.as_millis()).unwrap_or(u32::MAX)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_match_page_contract() {
		let config = BoardConfig::default();
		assert_eq!(config.api_root, "");
		assert_eq!(config.banner_millis(), 5000);
		assert_eq!(config.element_ids.list, "activities-list");
		assert_eq!(config.element_ids.select, "activity");
		assert_eq!(config.element_ids.form, "signup-form");
		assert_eq!(config.element_ids.email, "email");
		assert_eq!(config.element_ids.banner, "message");
	}

	#[test]
	fn api_root_is_normalized() {
		let config = BoardConfig::default().with_api_root(" /signup/ ");
		assert_eq!(config.api_root, "/signup");
	}

	#[test]
	fn oversized_duration_saturates() {
		let config = BoardConfig {
			banner_duration: Duration::from_secs(u64::MAX),
			..BoardConfig::default()
		};
		assert_eq!(config.banner_millis(), u32::MAX);
	}
}
