use once_cell::sync::Lazy;
use reqwest::blocking::Client;
use scraper::Selector;

use super::base::{self, HrefRule, Listing};
use super::{FetchError, SourceAdapter};
use crate::models::RawItem;

const URL: &str = "https://mochvara.hr/program/";
const SOURCE_ID: &str = "mochvara";

static ARTICLE_ANCHOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("article a").expect("mochvara article anchors"));

static LISTING: Listing = Listing {
    page_url: URL,
    link_base: URL,
    venue: "koncert",
    anchors: &ARTICLE_ANCHOR,
    href: HrefRule::Required,
    title_keywords: &[],
};

pub struct Mochvara {
    client: Client,
}

impl Mochvara {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub(crate) fn parse_document(&self, html: &str) -> Vec<RawItem> {
        LISTING.extract(html)
    }
}

impl SourceAdapter for Mochvara {
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

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_HTML: &str = r##"
    <header><a href="/program/">Svi nadolazeći događaji</a></header>
    <article class="event">
        <a href="https://mochvara.hr/event/kries-live/">
            <h2>Kries live</h2>
            <span>Koncert</span>
        </a>
        <a>Bez poveznice na događaj</a>
    </article>
    <article class="event">
        <a href="/event/jazz-utorak/">Jazz utorak: Kvartet</a>
        <a href="/event/jazz-utorak/#ulaz">Cjenik ulaznica</a>
        <a href="#">Rezervacija stola za koncert</a>
    </article>
    "##;

    #[test]
    fn parses_article_links_only() {
        let scraper = Mochvara::new(Client::new());
        let items = scraper.parse_document(SAMPLE_HTML);
        assert_eq!(items.len(), 3);

        assert_eq!(items[0].title, "Kries liveKoncert");
        assert_eq!(items[0].url, "https://mochvara.hr/event/kries-live/");
        assert_eq!(items[0].venue, "koncert");

        assert_eq!(items[1].title, "Jazz utorak: Kvartet");
        assert_eq!(items[1].url, "https://mochvara.hr/event/jazz-utorak/");

        assert_eq!(items[2].title, "Rezervacija stola za koncert");
        assert_eq!(items[2].url, "#");
    }
}
