// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::error::ClientError;
use activity_board_shared::endpoints::{catalog_endpoint, signup_endpoint, unregister_endpoint};
use activity_board_shared::messages::activities::ActivityCatalog;
use activity_board_shared::messages::mutation::MutationResponse;
use gloo_net::http::{Request, RequestBuilder};

/// A mutation response that was received and decoded, whatever its status
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MutationReply {
	pub ok: bool,
	pub status: u16,
	pub body: MutationResponse,
}

/// Reads the full activity catalog.
///
/// # Errors
///
/// Fails when the request can't be made, when the server answers with a non-success status, and when the body
/// isn't a catalog object.
pub async fn fetch_catalog(api_root: &str) -> Result<ActivityCatalog, ClientError> {
	let url = catalog_endpoint(api_root);
	log::debug!("GET {}", url);
	let response = Request::get(&url).send().await?;
	if !response.ok() {
		return Err(ClientError::Status(response.status()));
	}
	Ok(response.json::<ActivityCatalog>().await?)
}

/// Signs `email` up for `activity_name`.
///
/// # Errors
///
/// Fails only when no decodable response was obtained. A rejection by the server is a successful
/// [`MutationReply`] with `ok` unset.
pub async fn sign_up(api_root: &str, activity_name: &str, email: &str) -> Result<MutationReply, ClientError> {
	let url = signup_endpoint(api_root, activity_name, email);
	log::debug!("POST {}", url);
	send_mutation(Request::post(&url)).await
}

/// Removes `email` from `activity_name`. Errors are as for [`sign_up`].
pub async fn unregister(api_root: &str, activity_name: &str, email: &str) -> Result<MutationReply, ClientError> {
	let url = unregister_endpoint(api_root, activity_name, email);
	log::debug!("DELETE {}", url);
	send_mutation(Request::delete(&url)).await
}

async fn send_mutation(request: RequestBuilder) -> Result<MutationReply, ClientError> {
	let response = request.send().await?;
	let ok = response.ok();
	let status = response.status();
	let body: MutationResponse = response.json().await?;
	Ok(MutationReply { ok, status, body })
}
