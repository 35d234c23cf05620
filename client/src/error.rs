// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt;

/// Errors that can occur while talking to the activity server or attaching to the page
#[derive(Debug)]
pub enum ClientError {
	/// The request failed before a response was obtained, or the response body couldn't be read
	Transport(gloo_net::Error),
	/// The server answered a read with a non-success status
	Status(u16),
	/// The response body wasn't the JSON we expected
	Decode(serde_json::Error),
	/// The browser document isn't accessible
	NoDocument,
	/// An element the page is required to provide is missing
	MissingElement(&'static str),
	/// An element the page provides isn't the kind of element required
	ElementType(&'static str),
}

impl From<gloo_net::Error> for ClientError {
	fn from(error: gloo_net::Error) -> Self {
		match error {
			gloo_net::Error::SerdeError(error) => Self::Decode(error),
			error => Self::Transport(error),
		}
	}
}

impl From<serde_json::Error> for ClientError {
	fn from(error: serde_json::Error) -> Self {
		Self::Decode(error)
	}
}

impl fmt::Display for ClientError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Transport(error) => write!(f, "The request could not be completed: {}", error),
			Self::Status(status) => write!(f, "The server responded with status {}", status),
			Self::Decode(error) => write!(f, "An invalid response was received: {}", error),
			Self::NoDocument => write!(f, "The browser document is not accessible"),
			Self::MissingElement(id) => write!(f, "The page has no element with id \"{}\"", id),
			Self::ElementType(id) => write!(f, "The element with id \"{}\" is not of the expected type", id),
		}
	}
}
