// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::board::LoadState;
use activity_board_shared::messages::activities::{Activity, ActivityCatalog};
use std::rc::Rc;
use sycamore::prelude::*;
use web_sys::Event as WebEvent;

pub const LOADING_MESSAGE: &str = "Loading activities...";
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load activities. Please try again later.";
pub const SELECT_PLACEHOLDER: &str = "-- Select an activity --";

/// The participant a rendered unregister control refers to
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParticipantKey {
	pub activity_name: String,
	pub email: String,
}

pub type UnregisterHandler = Rc<dyn Fn(ParticipantKey)>;

/// Activity list that re-renders whenever `state` changes. Each change drops the previous cards and their handlers.
pub fn live_activity_list_view<G: Html>(
	ctx: Scope<'_>,
	state: RcSignal<LoadState>,
	on_unregister: UnregisterHandler,
) -> View<G> {
	View::new_dyn_scoped(ctx, move |ctx| {
		let state = state.get();
		activity_list_view(ctx, &state, &on_unregister)
	})
}

/// Select options that follow `state`, rebuilt from scratch on every change
pub fn live_activity_options_view<G: Html>(ctx: Scope<'_>, state: RcSignal<LoadState>) -> View<G> {
	View::new_dyn_scoped(ctx, move |ctx| {
		let state = state.get();
		activity_options_view(ctx, state.catalog())
	})
}

/// Contents of the activity list container for the given load state
pub fn activity_list_view<G: Html>(ctx: Scope<'_>, state: &LoadState, on_unregister: &UnregisterHandler) -> View<G> {
	match state {
		LoadState::Loading => view! { ctx, p { (LOADING_MESSAGE) } },
		LoadState::Loaded(catalog) => activity_cards_view(ctx, catalog, on_unregister),
		LoadState::Failed => view! { ctx, p { (LOAD_FAILED_MESSAGE) } },
	}
}

/// One card per activity, in catalog order
pub fn activity_cards_view<G: Html>(
	ctx: Scope<'_>,
	catalog: &ActivityCatalog,
	on_unregister: &UnregisterHandler,
) -> View<G> {
	View::new_fragment(
		catalog
			.iter()
			.map(|activity| activity_card_view(ctx, activity, on_unregister))
			.collect(),
	)
}

fn activity_card_view<G: Html>(ctx: Scope<'_>, activity: &Activity, on_unregister: &UnregisterHandler) -> View<G> {
	let name = activity.name.clone();
	let description = activity.description.clone();
	let schedule = format!(" {}", activity.schedule);
	let availability = format!(" {} spots left", activity.spots_left());
	let participants_header = format!(
		"Participants ({}/{}):",
		activity.participant_count(),
		activity.max_participants
	);

	let participant_rows = if activity.participants.is_empty() {
		view! { ctx, li { em { "No participants yet" } } }
	} else {
		View::new_fragment(
			activity
				.participants
				.iter()
				.map(|email| {
					let key = ParticipantKey {
						activity_name: activity.name.clone(),
						email: email.clone(),
					};
					participant_row_view(ctx, key, on_unregister)
				})
				.collect(),
		)
	};

	view! {
		ctx,
		div(class="activity-card") {
			h4 { (name) }
			p { (description) }
			p {
				strong { "Schedule:" }
				(schedule)
			}
			p {
				strong { "Availability:" }
				(availability)
			}
			div(class="participants-section") {
				strong { (participants_header) }
				ul(class="participants-list") {
					(participant_rows)
				}
			}
		}
	}
}

fn participant_row_view<G: Html>(ctx: Scope<'_>, key: ParticipantKey, on_unregister: &UnregisterHandler) -> View<G> {
	let email = key.email.clone();
	let on_unregister = Rc::clone(on_unregister);
	let click_handler = move |_event: WebEvent| on_unregister(key.clone());

	view! {
		ctx,
		li {
			span(class="participant-email") { (email) }
			button(class="unregister-btn", aria-label="Unregister", on:click=click_handler) { "🗑️" }
		}
	}
}

/// Options for the activity select: the placeholder followed by one option per activity in the catalog, if any
pub fn activity_options_view<G: Html>(ctx: Scope<'_>, catalog: Option<&ActivityCatalog>) -> View<G> {
	let activity_options = match catalog {
		Some(catalog) => View::new_fragment(
			catalog
				.names()
				.map(|name| {
					let value = name.to_string();
					let label = name.to_string();
					view! { ctx, option(value=value) { (label) } }
				})
				.collect(),
		),
		None => view! { ctx, },
	};

	view! {
		ctx,
		option(value="") { (SELECT_PLACEHOLDER) }
		(activity_options)
	}
}
