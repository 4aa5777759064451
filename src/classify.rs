//! Title filtering and keyword categorization.
//!
//! Keywords are matched as lowercase substrings of the Croatian source text
//! and must stay in the source language.

use std::fmt;

use serde::{Deserialize, Serialize};

const MIN_TITLE_CHARS: usize = 6;

/// Administrative and boilerplate fragments that never name an event.
const DENYLIST: [&str; 11] = [
    "tel",
    "telefon",
    "kontakt",
    "cjenik",
    "odjel",
    "radno vrijeme",
    "o nama",
    "pravila",
    "uvjeti",
    "cookies",
    "privacy",
];

const CONTENT_GROUPS: [(Category, &[&str]); 3] = [
    (Category::Film, &["film", "kino", "projekcija"]),
    (Category::Koncert, &["koncert", "live", "band", "tour"]),
    (Category::Kazaliste, &["kazali", "predstava", "opera", "balet"]),
];

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    #[serde(rename = "film")]
    Film,
    #[serde(rename = "koncert")]
    Koncert,
    #[serde(rename = "kazalište")]
    Kazaliste,
    #[serde(rename = "muzej")]
    Muzej,
    #[serde(rename = "portal")]
    Portal,
    #[serde(rename = "ostalo")]
    Ostalo,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Film => "film",
            Category::Koncert => "koncert",
            Category::Kazaliste => "kazalište",
            Category::Muzej => "muzej",
            Category::Portal => "portal",
            Category::Ostalo => "ostalo",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn is_valid_title(text: &str) -> bool {
    let lower = text.to_lowercase();
    lower.chars().count() > MIN_TITLE_CHARS && !DENYLIST.iter().any(|bad| lower.contains(bad))
}

/// Content keywords win over venue identity; the first matching group is used.
/// Venue labels are lowercase identifiers and are matched as given.
pub fn categorize(title: &str, venue: &str) -> Category {
    let text = format!("{title} {venue}").to_lowercase();

    for (category, keywords) in CONTENT_GROUPS.iter() {
        if keywords.iter().any(|keyword| text.contains(keyword)) {
            return *category;
        }
    }

    if venue.contains("muzej") {
        return Category::Muzej;
    }
    if venue.contains("event") || venue.contains("portal") {
        return Category::Portal;
    }

    Category::Ostalo
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_boilerplate_and_short_titles() {
        assert!(!is_valid_title("Radno vrijeme: pon-pet 9-17"));
        assert!(!is_valid_title("KONTAKT i lokacija"));
        assert!(!is_valid_title("Cookies policy settings"));
        assert!(!is_valid_title("Drama"));
        assert!(!is_valid_title("Opera!"));
        assert!(is_valid_title("Otvorenje izložbe"));
        assert!(is_valid_title("Labuđe jezero"));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // 6 characters, 12 bytes
        assert!(!is_valid_title("Čćžšđa"));
        assert!(is_valid_title("Čćžšđab"));
    }

    #[test]
    fn content_keywords_take_priority_over_venue() {
        assert_eq!(categorize("Live koncert: Bend X Tour", "mochvara"), Category::Koncert);
        assert_eq!(categorize("Projekcija: Casablanca", "muzej"), Category::Film);
        assert_eq!(categorize("Nova predstava", "portal"), Category::Kazaliste);
    }

    #[test]
    fn venue_checks_apply_after_content() {
        assert_eq!(categorize("Muzejska izložba mjeseca", "muzej"), Category::Muzej);
        assert_eq!(categorize("Dan otvorenih vrata", "portal"), Category::Portal);
        assert_eq!(categorize("Dan otvorenih vrata", "eventim"), Category::Portal);
        assert_eq!(categorize("Festival suvremene umjetnosti", "festival"), Category::Ostalo);
    }

    #[test]
    fn venue_checks_are_case_sensitive() {
        assert_eq!(categorize("Dan otvorenih vrata", "Muzej"), Category::Ostalo);
        assert_eq!(categorize("Dan otvorenih vrata", "PORTAL"), Category::Ostalo);
        assert_eq!(categorize("Dan otvorenih vrata", "muzej"), Category::Muzej);
    }

    #[test]
    fn categorize_is_deterministic() {
        let inputs = [
            ("Koncertni ciklus – gradski program", "koncert"),
            ("Kazališna premijera – nova sezona", "kazalište"),
            ("Nova godina", "javna-dogadjanja"),
        ];
        for (title, venue) in inputs {
            let first = categorize(title, venue);
            for _ in 0..3 {
                assert_eq!(categorize(title, venue), first);
            }
        }
        assert_eq!(categorize("Nova godina", "javna-dogadjanja"), Category::Ostalo);
    }

    #[test]
    fn serializes_croatian_labels() {
        let json = serde_json::to_string(&Category::Kazaliste).expect("serialize");
        assert_eq!(json, "\"kazalište\"");
        assert_eq!(Category::Kazaliste.to_string(), "kazalište");
    }
}
