// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;

/// A single activity participants can sign up for. The name is the activity's identifier.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Activity {
	pub name: String,
	pub description: String,
	pub schedule: String,
	pub max_participants: u32,
	/// Participant emails in the order the server lists them. Duplicates are kept as sent.
	pub participants: Vec<String>,
}

impl Activity {
	/// Remaining capacity. Negative when the server has accepted more participants than the maximum.
	pub fn spots_left(&self) -> i64 {
		i64::from(self.max_participants) - self.participant_count() as i64
	}

	pub fn participant_count(&self) -> usize {
		self.participants.len()
	}
}

/// The per-activity body as it appears on the wire, keyed by activity name in the catalog object
#[derive(Deserialize)]
struct ActivityRecord {
	description: String,
	schedule: String,
	max_participants: u32,
	participants: Vec<String>,
}

impl ActivityRecord {
	fn into_activity(self, name: String) -> Activity {
		Activity {
			name,
			description: self.description,
			schedule: self.schedule,
			max_participants: self.max_participants,
			participants: self.participants,
		}
	}
}

/// The complete set of activities returned by one catalog read.
///
/// Entries keep the order of the server's JSON object. A catalog is never merged with another one; each read
/// produces a new catalog that replaces the previous one entirely.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ActivityCatalog {
	activities: Vec<Activity>,
}

impl ActivityCatalog {
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds an activity to the end of the catalog. An activity with the same name is replaced where it stands.
	pub fn insert(&mut self, activity: Activity) {
		match self.activities.iter_mut().find(|existing| existing.name == activity.name) {
			Some(existing) => *existing = activity,
			None => self.activities.push(activity),
		}
	}

	#[cfg(test)]
	fn get(&self, name: &str) -> Option<&Activity> {
		self.activities.iter().find(|activity| activity.name == name)
	}

	pub fn iter(&self) -> impl Iterator<Item = &Activity> {
		self.activities.iter()
	}

	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.activities.iter().map(|activity| activity.name.as_str())
	}

	pub fn len(&self) -> usize {
		self.activities.len()
	}

	pub fn is_empty(&self) -> bool {
		self.activities.is_empty()
	}
}

impl FromIterator<Activity> for ActivityCatalog {
	fn from_iter<I: IntoIterator<Item = Activity>>(iter: I) -> Self {
		let mut catalog = Self::new();
		for activity in iter {
			catalog.insert(activity);
		}
		catalog
	}
}

struct CatalogVisitor;

impl<'de> Visitor<'de> for CatalogVisitor {
	type Value = ActivityCatalog;

	fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
		formatter.write_str("an object mapping activity names to activity details")
	}

	fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
		let mut catalog = ActivityCatalog {
			activities: Vec::with_capacity(access.size_hint().unwrap_or(0)),
		};
		while let Some((name, record)) = access.next_entry::<String, ActivityRecord>()? {
			catalog.insert(record.into_activity(name));
		}
		Ok(catalog)
	}
}

impl<'de> Deserialize<'de> for ActivityCatalog {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		deserializer.deserialize_map(CatalogVisitor)
	}
}
