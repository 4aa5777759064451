use once_cell::sync::Lazy;
use reqwest::blocking::Client;
use scraper::Selector;

use super::base::{self, HrefRule, Listing};
use super::{FetchError, SourceAdapter};
use crate::models::RawItem;

const URL: &str = "https://www.mgz.hr/hr/dogadanja/";
const SOURCE_ID: &str = "muzeji";

static ITEM_ANCHOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".item a").expect("mgz item anchors"));

static LISTING: Listing = Listing {
    page_url: URL,
    link_base: URL,
    venue: "muzej",
    anchors: &ITEM_ANCHOR,
    href: HrefRule::Required,
    title_keywords: &[],
};

/// Museum of the City of Zagreb events page.
pub struct Mgz {
    client: Client,
}

impl Mgz {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub(crate) fn parse_document(&self, html: &str) -> Vec<RawItem> {
        LISTING.extract(html)
    }
}

impl SourceAdapter for Mgz {
    fn id(&self) -> &str {
        SOURCE_ID
    }

    fn source(&self) -> &str {
        URL
    }

    fn fetch(&self) -> Result<Vec<RawItem>, FetchError> {
        let html = base::fetch_text(&self.client, URL)?;
        Ok(self.parse_document(&html))
    }
}
