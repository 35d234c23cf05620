// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use gloo_timers::future::TimeoutFuture;
use std::cell::RefCell;
use std::rc::Rc;
use sycamore::futures::spawn_local;
use web_sys::HtmlElement;

const HIDDEN_CLASS: &str = "hidden";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MessageKind {
	Success,
	Error,
}

impl MessageKind {
	pub fn class_name(&self) -> &'static str {
		match self {
			Self::Success => "success",
			Self::Error => "error",
		}
	}
}

/// A message to show in the banner
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UiMessage {
	pub text: String,
	pub kind: MessageKind,
}

impl UiMessage {
	pub fn new(text: String, kind: MessageKind) -> Self {
		Self { text, kind }
	}

	pub fn error(text: &str) -> Self {
		Self::new(String::from(text), MessageKind::Error)
	}
}

/// Tracks which message the banner is showing so that an expiring timer only hides its own message
#[derive(Debug, Default)]
pub struct BannerState {
	current: u64,
	visible: bool,
}

impl BannerState {
	/// Records a newly shown message and returns the ticket its timer must present to hide it
	pub fn show(&mut self) -> u64 {
		self.current += 1;
		self.visible = true;
		self.current
	}

	/// Returns whether the banner should be hidden for this ticket
	pub fn expire(&mut self, ticket: u64) -> bool {
		if self.visible && ticket == self.current {
			self.visible = false;
			true
		} else {
			false
		}
	}

	#[cfg(test)]
	fn is_visible(&self) -> bool {
		self.visible
	}
}

/// The page's single message banner
pub struct Banner {
	element: HtmlElement,
	state: RefCell<BannerState>,
	display_millis: u32,
}

impl Banner {
	pub fn new(element: HtmlElement, display_millis: u32) -> Rc<Self> {
		Rc::new(Self {
			element,
			state: RefCell::new(BannerState::default()),
			display_millis,
		})
	}

	/// Replaces whatever the banner shows with `message` and arms a timer to hide it again
	pub fn show(self: &Rc<Self>, message: UiMessage) {
		self.element.set_text_content(Some(&message.text));
		// Setting the class name drops the hidden class along with the previous kind
		self.element.set_class_name(message.kind.class_name());

		let ticket = self.state.borrow_mut().show();
		let banner = Rc::clone(self);
		spawn_local(async move {
			TimeoutFuture::new(banner.display_millis).await;
			banner.expire(ticket);
		});
	}

	fn expire(&self, ticket: u64) {
		if !self.state.borrow_mut().expire(ticket) {
			return;
		}
		if let Err(error) = self.element.class_list().add_1(HIDDEN_CLASS) {
			log::warn!("Failed to hide the message banner: {:?}", error);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn message_expires_after_its_own_timer() {
		let mut state = BannerState::default();
		assert!(!state.is_visible());

		let ticket = state.show();
		assert!(state.is_visible());
		assert!(state.expire(ticket));
		assert!(!state.is_visible());
		assert!(!state.expire(ticket));
	}

	#[test]
	fn superseded_timer_does_not_hide_newer_message() {
		let mut state = BannerState::default();
		let first = state.show();
		let second = state.show();

		assert!(!state.expire(first));
		assert!(state.is_visible());
		assert!(state.expire(second));
		assert!(!state.is_visible());
	}

	#[test]
	fn kinds_map_to_classes() {
		assert_eq!(MessageKind::Success.class_name(), "success");
		assert_eq!(UiMessage::error("Please select an activity.").kind.class_name(), "error");
	}
}
