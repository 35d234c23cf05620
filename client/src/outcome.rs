use crate::api::MutationReply;
use crate::banner::{MessageKind, UiMessage};
use crate::error::ClientError;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MutationKind {
	Signup,
	Unregister,
}

impl MutationKind {
	/// Shown when the server accepts the mutation without saying anything
	fn accepted_fallback(&self) -> &'static str {
		match self {
			Self::Signup => "Signed up successfully",
			Self::Unregister => "Unregistered successfully",
		}
	}

	/// Shown when the server rejects the mutation without a detail
	fn rejected_fallback(&self) -> &'static str {
		match self {
			Self::Signup => "An error occurred",
			Self::Unregister => "Failed to unregister",
		}
	}

	/// Shown when no usable response came back at all
	fn failed_message(&self) -> &'static str {
		match self {
			Self::Signup => "Failed to sign up. Please try again.",
			Self::Unregister => "Failed to unregister. Please try again.",
		}
	}

	fn description(&self) -> &'static str {
		match self {
			Self::Signup => "signing up",
			Self::Unregister => "unregistering",
		}
	}
}

/// What a finished mutation means for the page
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MutationOutcome {
	/// The server applied the mutation
	Accepted(String),
	/// The server answered with a failure status
	Rejected(String),
	/// No decodable response was obtained
	Failed(&'static str),
}

impl MutationOutcome {
	pub fn classify(kind: MutationKind, result: Result<MutationReply, ClientError>) -> Self {
		match result {
			Ok(reply) if reply.ok => {
				let message = reply.body.message.unwrap_or_else(|| String::from(kind.accepted_fallback()));
				Self::Accepted(message)
			}
			Ok(reply) => {
				log::warn!("The server rejected {} with status {}", kind.description(), reply.status);
				let detail = reply.body.detail.unwrap_or_else(|| String::from(kind.rejected_fallback()));
				Self::Rejected(detail)
			}
			Err(error) => {
				log::error!("Error {}: {}", kind.description(), error);
				Self::Failed(kind.failed_message())
			}
		}
	}

	/// Only an accepted mutation is followed by a catalog reload; the form is reset at the same point.
	pub fn refreshes_view(&self) -> bool {
		matches!(self, Self::Accepted(_))
	}

	pub fn banner_message(&self) -> UiMessage {
		match self {
			Self::Accepted(text) => UiMessage::new(text.clone(), MessageKind::Success),
			Self::Rejected(text) => UiMessage::new(text.clone(), MessageKind::Error),
			Self::Failed(text) => UiMessage::new(String::from(*text), MessageKind::Error),
		}
	}
}
