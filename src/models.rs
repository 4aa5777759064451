use serde::{Deserialize, Serialize};

use crate::classify::{self, Category};

/// One normalized cultural event, serialized in this field order.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Event {
    pub title: String,
    pub venue: String,
    pub url: String,
    pub source: String, // provenance only, never part of the dedup key
    pub category: Category,
    pub date: Option<String>,
    pub city: String,
}

impl Event {
    pub fn sort_key(&self) -> &str {
        self.date.as_deref().unwrap_or(UNDATED_SORT_KEY)
    }

    pub fn dedup_key(&self) -> (&str, &str) {
        (&self.title, &self.url)
    }
}

/// Sorts after every real ISO date.
pub const UNDATED_SORT_KEY: &str = "9999-99-99";

/// Candidate produced by a source adapter before it becomes an [`Event`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawItem {
    pub title: String,
    pub venue: String,
    pub url: String,
    pub date: Option<String>,
}

impl RawItem {
    pub fn new(
        title: impl Into<String>,
        venue: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            venue: venue.into(),
            url: url.into(),
            date: None,
        }
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }
}

/// Append-only event collection. `add` is the only way an [`Event`] is created.
#[derive(Debug)]
pub struct EventCollector {
    city: String,
    events: Vec<Event>,
}

impl EventCollector {
    pub fn new(city: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            events: Vec::new(),
        }
    }

    /// Trims the title, assigns the category and attaches the city.
    /// Items whose title is empty after trimming are dropped.
    pub fn add(&mut self, item: RawItem, source: &str) -> bool {
        let title = item.title.trim();
        if title.is_empty() {
            return false;
        }
        let category = classify::categorize(&item.title, &item.venue);
        self.events.push(Event {
            title: title.to_string(),
            venue: item.venue,
            url: item.url,
            source: source.to_string(),
            category,
            date: item.date,
            city: self.city.clone(),
        });
        true
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn into_events(self) -> Vec<Event> {
        self.events
    }
}
