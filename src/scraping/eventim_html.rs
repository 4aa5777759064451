use reqwest::blocking::Client;

use super::base::{self, HrefRule, Listing};
use super::{FetchError, SourceAdapter};
use crate::models::RawItem;

const URL: &str = "https://www.eventim.hr/hr/";
const LINK_BASE: &str = "https://eventim.hr";
const SOURCE_ID: &str = "portal";

static LISTING: Listing = Listing {
    page_url: URL,
    link_base: LINK_BASE,
    venue: "portal",
    anchors: &base::ANY_ANCHOR,
    href: HrefRule::Contains("/artist/"),
    title_keywords: &[],
};

/// Ticketing portal front page; only artist pages are events.
pub struct Eventim {
    client: Client,
}

impl Eventim {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub(crate) fn parse_document(&self, html: &str) -> Vec<RawItem> {
        LISTING.extract(html)
    }
}

impl SourceAdapter for Eventim {
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
