use chrono::NaiveDate;
use reqwest::blocking::Client;
use serde::Deserialize;

use super::base;
use super::{FetchError, SourceAdapter};
use crate::classify;
use crate::models::RawItem;

const SOURCE_ID: &str = "public api";
const PROVENANCE: &str = "api";
const VENUE: &str = "javna-dogadjanja";

#[derive(Debug, Deserialize)]
struct Holiday {
    date: String,
    #[serde(rename = "localName")]
    local_name: String,
}

/// Public holidays from date.nager.at; the only source that carries dates.
pub struct PublicHolidays {
    client: Client,
    url: String,
}

impl PublicHolidays {
    pub fn new(client: Client, year: i32, country: &str) -> Self {
        Self {
            client,
            url: endpoint(year, country),
        }
    }

    pub(crate) fn parse_holidays(&self, body: &str) -> Result<Vec<RawItem>, FetchError> {
        let holidays: Vec<Holiday> =
            serde_json::from_str(body).map_err(|source| FetchError::Json {
                url: self.url.clone(),
                source,
            })?;

        let mut items = Vec::new();
        for holiday in holidays {
            let date = NaiveDate::parse_from_str(&holiday.date, "%Y-%m-%d").map_err(|_| {
                FetchError::InvalidDate {
                    url: self.url.clone(),
                    value: holiday.date.clone(),
                }
            })?;
            if !classify::is_valid_title(&holiday.local_name) {
                continue;
            }
            items.push(
                RawItem::new(holiday.local_name, VENUE, self.url.as_str())
                    .with_date(date.format("%Y-%m-%d").to_string()),
            );
        }
        Ok(items)
    }
}

impl SourceAdapter for PublicHolidays {
    fn id(&self) -> &str {
        SOURCE_ID
    }

    fn source(&self) -> &str {
        PROVENANCE
    }

    fn fetch(&self) -> Result<Vec<RawItem>, FetchError> {
        let body = base::fetch_text(&self.client, &self.url)?;
        self.parse_holidays(&body)
    }
}

pub fn endpoint(year: i32, country: &str) -> String {
    format!("https://date.nager.at/api/v3/PublicHolidays/{year}/{country}")
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_JSON: &str = r#"[
        {"date": "2026-01-01", "localName": "Nova godina", "name": "New Year's Day", "countryCode": "HR"},
        {"date": "2026-01-06", "localName": "Bogojavljenje ili Sveta tri kralja", "name": "Epiphany", "countryCode": "HR"},
        {"date": "2026-04-05", "localName": "Uskrs", "name": "Easter Sunday", "countryCode": "HR"},
        {"date": "2026-05-30", "localName": "Dan državnosti", "name": "Statehood Day", "countryCode": "HR"}
    ]"#;

    fn adapter() -> PublicHolidays {
        PublicHolidays::new(Client::new(), 2026, "HR")
    }

    #[test]
    fn builds_endpoint_from_year_and_country() {
        assert_eq!(
            endpoint(2026, "HR"),
            "https://date.nager.at/api/v3/PublicHolidays/2026/HR"
        );
    }

    #[test]
    fn parses_dated_holidays() {
        let items = adapter().parse_holidays(SAMPLE_JSON).expect("parse holidays");
        assert_eq!(items.len(), 3);

        assert_eq!(items[0].title, "Nova godina");
        assert_eq!(items[0].date.as_deref(), Some("2026-01-01"));
        assert_eq!(items[0].venue, VENUE);
        assert_eq!(items[0].url, endpoint(2026, "HR"));

        assert_eq!(items[2].title, "Dan državnosti");
        assert_eq!(items[2].date.as_deref(), Some("2026-05-30"));
        assert!(items.iter().all(|item| item.date.is_some()));
    }

    #[test]
    fn missing_local_name_is_a_parse_error() {
        let err = adapter()
            .parse_holidays(r#"[{"date": "2026-01-01", "name": "New Year's Day"}]"#)
            .expect_err("missing field");
        assert!(matches!(err, FetchError::Json { .. }));
    }

    #[test]
    fn malformed_date_is_rejected() {
        let err = adapter()
            .parse_holidays(r#"[{"date": "01.01.2026.", "localName": "Nova godina"}]"#)
            .expect_err("bad date");
        assert!(matches!(err, FetchError::InvalidDate { .. }));
    }
}
