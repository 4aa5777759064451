pub mod base;
pub mod curated;
pub mod eventim_html;
pub mod hnk_html;
pub mod kinoteka_html;
pub mod mgz_html;
pub mod mochvara_html;
pub mod nager_api;
pub mod rss_feed;

use reqwest::blocking::Client;
use reqwest::StatusCode;

use crate::config::AppConfig;
use crate::models::RawItem;

/// One external origin of event candidates.
pub trait SourceAdapter: Send + Sync {
    /// Name used in logs and run reports.
    fn id(&self) -> &str;
    /// Provenance recorded on every event this source produces.
    fn source(&self) -> &str;
    fn fetch(&self) -> Result<Vec<RawItem>, FetchError>;
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed for {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("non-success status {status} for {url}")]
    Status { url: String, status: StatusCode },
    #[error("unable to read response body for {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("malformed xml in {url}: {source}")]
    Xml {
        url: String,
        #[source]
        source: quick_xml::Error,
    },
    #[error("malformed feed {url}: {source}")]
    Feed {
        url: String,
        #[source]
        source: quick_xml::de::DeError,
    },
    #[error("unsupported feed format in {url}")]
    UnknownFeed { url: String },
    #[error("malformed json from {url}: {source}")]
    Json {
        url: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid date {value:?} from {url}")]
    InvalidDate { url: String, value: String },
    #[error("entry without {field} in {url}")]
    MissingField { url: String, field: &'static str },
}

/// Registered sources in their fixed execution order.
pub fn active_sources(config: &AppConfig, client: &Client) -> Vec<Box<dyn SourceAdapter>> {
    let mut sources: Vec<Box<dyn SourceAdapter>> = vec![
        Box::new(kinoteka_html::Kinoteka::new(client.clone())),
        Box::new(mochvara_html::Mochvara::new(client.clone())),
        Box::new(mgz_html::Mgz::new(client.clone())),
        Box::new(eventim_html::Eventim::new(client.clone())),
        Box::new(hnk_html::Hnk::new(client.clone())),
    ];
    for feed in &config.feeds {
        sources.push(Box::new(rss_feed::RssFeed::new(
            client.clone(),
            &feed.name,
            &feed.url,
            &feed.venue,
        )));
    }
    sources.push(Box::new(nager_api::PublicHolidays::new(
        client.clone(),
        config.holiday_year,
        &config.holiday_country,
    )));
    sources.push(Box::new(curated::Curated));
    sources
}
