use reqwest::blocking::Client;

use super::base::{self, HrefRule, Listing};
use super::{FetchError, SourceAdapter};
use crate::models::RawItem;

const URL: &str = "https://kinokinoteka.hr/program/";
const SOURCE_ID: &str = "kino";

static LISTING: Listing = Listing {
    page_url: URL,
    link_base: URL,
    venue: "kino",
    anchors: &base::ANY_ANCHOR,
    href: HrefRule::Contains("program"),
    title_keywords: &[],
};

pub struct Kinoteka {
    client: Client,
}

impl Kinoteka {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub(crate) fn parse_document(&self, html: &str) -> Vec<RawItem> {
        LISTING.extract(html)
    }
}

impl SourceAdapter for Kinoteka {
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
