use serde::Deserialize;

/// The JSON body of a signup or unregister response.
///
/// Accepted mutations carry `message`; rejected ones carry `detail`. Both are optional so that a body with
/// neither (or with other fields) still decodes.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
pub struct MutationResponse {
	#[serde(default)]
	pub message: Option<String>,
	#[serde(default)]
	pub detail: Option<String>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn decodes_success_body() {
		let body: MutationResponse =
			serde_json::from_str(r#"{"message": "Signed up a@x.com for Chess Club"}"#).unwrap();
		assert_eq!(body.message.as_deref(), Some("Signed up a@x.com for Chess Club"));
		assert_eq!(body.detail, None);
	}

	#[test]
	fn decodes_rejection_body_with_extra_fields() {
		let body: MutationResponse =
			serde_json::from_str(r#"{"detail": "Activity not found", "code": 404}"#).unwrap();
		assert_eq!(body.detail.as_deref(), Some("Activity not found"));
		assert_eq!(body.message, None);
	}

	#[test]
	fn decodes_empty_object() {
		let body: MutationResponse = serde_json::from_str("{}").unwrap();
		assert_eq!(body, MutationResponse::default());
	}
}
