use std::collections::HashSet;

use crate::models::{Event, EventCollector, RawItem};

pub const FALLBACK_TITLE: &str = "Fallback kulturni događaj";
pub const FALLBACK_VENUE: &str = "zagreb";
pub const FALLBACK_URL: &str = "#";
pub const FALLBACK_SOURCE: &str = "fallback";

/// Stable: equal keys keep source order, undated events go last.
pub fn sort_events(events: &mut [Event]) {
    events.sort_by(|a, b| a.sort_key().cmp(b.sort_key()));
}

/// Keeps the first event for every `(title, url)` pair.
pub fn dedupe_events(events: Vec<Event>) -> Vec<Event> {
    let first = {
        let mut seen = HashSet::new();
        events
            .iter()
            .map(|event| seen.insert(event.dedup_key()))
            .collect::<Vec<_>>()
    };
    events
        .into_iter()
        .zip(first)
        .filter_map(|(event, first)| first.then_some(event))
        .collect()
}

pub fn ensure_non_empty(events: Vec<Event>, city: &str) -> Vec<Event> {
    if !events.is_empty() {
        return events;
    }
    let mut collector = EventCollector::new(city);
    collector.add(
        RawItem::new(FALLBACK_TITLE, FALLBACK_VENUE, FALLBACK_URL),
        FALLBACK_SOURCE,
    );
    collector.into_events()
}

pub fn finalize(mut events: Vec<Event>, city: &str) -> Vec<Event> {
    sort_events(&mut events);
    ensure_non_empty(dedupe_events(events), city)
}
