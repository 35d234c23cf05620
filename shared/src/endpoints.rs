// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Request targets for the activity endpoints.
//!
//! Every builder takes the API root the application is served under. An empty root produces same-origin absolute
//! paths (`/activities`). Activity names are encoded as path segments and emails as query values; both use
//! percent-encoding over everything outside the RFC 3986 unreserved set.

use urlencoding::encode;

pub const ACTIVITIES_PATH: &str = "/activities";

fn activities_base(api_root: &str) -> String {
	format!("{}{}", api_root.trim_end_matches('/'), ACTIVITIES_PATH)
}

/// `GET` target for the full catalog
pub fn catalog_endpoint(api_root: &str) -> String {
	activities_base(api_root)
}

/// `POST` target that signs `email` up for `activity_name`
pub fn signup_endpoint(api_root: &str, activity_name: &str, email: &str) -> String {
	format!(
		"{}/{}/signup?email={}",
		activities_base(api_root),
		encode(activity_name),
		encode(email)
	)
}

/// `DELETE` target that removes `email` from `activity_name`
pub fn unregister_endpoint(api_root: &str, activity_name: &str, email: &str) -> String {
	format!(
		"{}/{}/participants?email={}",
		activities_base(api_root),
		encode(activity_name),
		encode(email)
	)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn catalog_target() {
		assert_eq!(catalog_endpoint(""), "/activities");
		assert_eq!(catalog_endpoint("/school/"), "/school/activities");
		assert_eq!(catalog_endpoint("https://example.org/api"), "https://example.org/api/activities");
	}

	#[test]
	fn signup_target_is_percent_encoded() {
		assert_eq!(
			signup_endpoint("", "Chess Club", "a@x.com"),
			"/activities/Chess%20Club/signup?email=a%40x.com"
		);
		assert_eq!(
			signup_endpoint("", "Art/Design", "first+last@x.com"),
			"/activities/Art%2FDesign/signup?email=first%2Blast%40x.com"
		);
	}

	#[test]
	fn unregister_target_is_percent_encoded() {
		assert_eq!(
			unregister_endpoint("", "Math Olympiad", "a&b@x.com"),
			"/activities/Math%20Olympiad/participants?email=a%26b%40x.com"
		);
		assert_eq!(
			unregister_endpoint("", "Café Club", "z@x.com"),
			"/activities/Caf%C3%A9%20Club/participants?email=z%40x.com"
		);
	}

	#[test]
	fn unreserved_characters_pass_through() {
		assert_eq!(
			signup_endpoint("", "Robotics-1_a.b~c", "x@y.z"),
			"/activities/Robotics-1_a.b~c/signup?email=x%40y.z"
		);
	}
}
