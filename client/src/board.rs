// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::api;
use crate::banner::{Banner, UiMessage};
use crate::config::BoardConfig;
use crate::dom::{self, clear_children, PageElements};
use crate::error::ClientError;
use crate::outcome::{MutationKind, MutationOutcome};
use crate::views::{live_activity_list_view, live_activity_options_view, ParticipantKey, UnregisterHandler};
use activity_board_shared::messages::activities::ActivityCatalog;
use gloo_events::{EventListener, EventListenerOptions};
use std::cell::RefCell;
use std::rc::Rc;
use sycamore::futures::spawn_local;
use sycamore::prelude::*;

const NO_ACTIVITY_SELECTED: &str = "Please select an activity.";

/// The message to show instead of submitting a signup for the selected activity, if any
fn selection_error(activity_name: &str) -> Option<UiMessage> {
	if activity_name.is_empty() {
		Some(UiMessage::error(NO_ACTIVITY_SELECTED))
	} else {
		None
	}
}

/// What the activity list currently shows. The list and the select are both rendered from this one value.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LoadState {
	Loading,
	Loaded(Rc<ActivityCatalog>),
	Failed,
}

impl LoadState {
	pub fn catalog(&self) -> Option<&ActivityCatalog> {
		match self {
			Self::Loaded(catalog) => Some(catalog),
			_ => None,
		}
	}
}

/// Numbers catalog fetches so that a fetch finishing after a newer one has been rendered is dropped
#[derive(Debug, Default)]
pub struct FetchSequencer {
	issued: u64,
	applied: u64,
}

impl FetchSequencer {
	/// Starts a fetch and returns its generation
	pub fn begin(&mut self) -> u64 {
		self.issued += 1;
		self.issued
	}

	/// Returns whether the result of `generation` may be rendered, recording it as the newest rendered one if so
	pub fn try_apply(&mut self, generation: u64) -> bool {
		if generation <= self.applied {
			return false;
		}
		self.applied = generation;
		true
	}
}

/// Keeps the page's activity list, activity select, and message banner in line with the server.
///
/// The board never edits the catalog it shows. Every accepted mutation is followed by a fresh read, and every read
/// replaces the list and the select together.
pub struct ActivityBoard {
	config: BoardConfig,
	elements: PageElements,
	banner: Rc<Banner>,
	load_state: RcSignal<LoadState>,
	sequencer: RefCell<FetchSequencer>,
}

impl ActivityBoard {
	/// Builds a board for the current page.
	///
	/// # Errors
	///
	/// Fails when the document or one of the required elements isn't available.
	pub fn attach() -> Result<Rc<Self>, ClientError> {
		let document = dom::document()?;
		let config = BoardConfig::from_page(&document);
		let elements = PageElements::locate(&document, &config.element_ids)?;
		Ok(Self::new(config, elements))
	}

	pub fn new(config: BoardConfig, elements: PageElements) -> Rc<Self> {
		let banner = Banner::new(elements.banner.clone(), config.banner_millis());
		Rc::new(Self {
			config,
			elements,
			banner,
			load_state: create_rc_signal(LoadState::Loading),
			sequencer: RefCell::new(FetchSequencer::default()),
		})
	}

	/// Takes over the list container and the select, and starts handling form submissions
	pub fn mount(self: &Rc<Self>) {
		clear_children(&self.elements.list);
		clear_children(&self.elements.select);

		let list_state = self.load_state.clone();
		let on_unregister = self.unregister_handler();
		sycamore::render_to(
			move |ctx| live_activity_list_view(ctx, list_state, on_unregister),
			&self.elements.list,
		);

		let options_state = self.load_state.clone();
		sycamore::render_to(
			move |ctx| live_activity_options_view(ctx, options_state),
			&self.elements.select,
		);

		let board = Rc::clone(self);
		EventListener::new_with_options(
			&self.elements.form,
			"submit",
			EventListenerOptions::enable_prevent_default(),
			move |event| {
				event.prevent_default();
				let activity_name = board.elements.select.value();
				let email = board.elements.email.value();
				let board = Rc::clone(&board);
				spawn_local(async move {
					board.submit_signup(activity_name, email).await;
				});
			},
		)
		.forget();
	}

	/// Reads the catalog and re-renders the list and the select from it
	pub async fn load_and_render(&self) {
		let generation = self.sequencer.borrow_mut().begin();
		let result = api::fetch_catalog(&self.config.api_root).await;

		if !self.sequencer.borrow_mut().try_apply(generation) {
			log::debug!("Dropping catalog fetch {} in favor of a newer one", generation);
			return;
		}

		match result {
			Ok(catalog) => {
				log::debug!("Rendering {} activities from fetch {}", catalog.len(), generation);
				self.load_state.set(LoadState::Loaded(Rc::new(catalog)));
			}
			Err(error) => {
				log::error!("Error fetching activities: {}", error);
				self.load_state.set(LoadState::Failed);
			}
		}
	}

	pub async fn submit_signup(&self, activity_name: String, email: String) {
		if let Some(message) = selection_error(&activity_name) {
			self.banner.show(message);
			return;
		}

		let result = api::sign_up(&self.config.api_root, &activity_name, &email).await;
		let outcome = MutationOutcome::classify(MutationKind::Signup, result);
		self.banner.show(outcome.banner_message());

		if outcome.refreshes_view() {
			self.elements.form.reset();
			self.load_and_render().await;
		}
	}

	pub async fn unregister(&self, key: ParticipantKey) {
		let result = api::unregister(&self.config.api_root, &key.activity_name, &key.email).await;
		let outcome = MutationOutcome::classify(MutationKind::Unregister, result);
		self.banner.show(outcome.banner_message());

		if outcome.refreshes_view() {
			self.load_and_render().await;
		}
	}

	fn unregister_handler(self: &Rc<Self>) -> UnregisterHandler {
		let board = Rc::clone(self);
		Rc::new(move |key| {
			let board = Rc::clone(&board);
			spawn_local(async move {
				board.unregister(key).await;
			});
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::banner::MessageKind;
	use activity_board_shared::messages::activities::Activity;

	#[test]
	fn empty_selection_is_refused() {
		let message = selection_error("").unwrap();
		assert_eq!(message.text, NO_ACTIVITY_SELECTED);
		assert_eq!(message.kind, MessageKind::Error);
	}

	#[test]
	fn listed_activity_may_be_submitted() {
		assert_eq!(selection_error("Chess Club"), None);
	}

	#[test]
	fn fetches_apply_in_order() {
		let mut sequencer = FetchSequencer::default();
		let first = sequencer.begin();
		assert!(sequencer.try_apply(first));
		let second = sequencer.begin();
		assert!(sequencer.try_apply(second));
	}

	#[test]
	fn stale_fetch_is_dropped() {
		let mut sequencer = FetchSequencer::default();
		let older = sequencer.begin();
		let newer = sequencer.begin();

		assert!(sequencer.try_apply(newer));
		assert!(!sequencer.try_apply(older));
	}

	#[test]
	fn older_fetch_may_render_until_newer_finishes() {
		let mut sequencer = FetchSequencer::default();
		let older = sequencer.begin();
		let newer = sequencer.begin();

		assert!(sequencer.try_apply(older));
		assert!(sequencer.try_apply(newer));
		assert!(!sequencer.try_apply(newer));
	}

	#[test]
	fn only_loaded_state_has_catalog() {
		assert_eq!(LoadState::Loading.catalog(), None);
		assert_eq!(LoadState::Failed.catalog(), None);

		let catalog: ActivityCatalog = [Activity {
			name: String::from("Chess Club"),
			description: String::new(),
			schedule: String::new(),
			max_participants: 10,
			participants: Vec::new(),
		}]
		.into_iter()
		.collect();
		let state = LoadState::Loaded(Rc::new(catalog.clone()));
		assert_eq!(state.catalog(), Some(&catalog));
	}
}
