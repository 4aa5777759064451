use reqwest::blocking::Client;

use super::base::{self, HrefRule, Listing};
use super::{FetchError, SourceAdapter};
use crate::models::RawItem;

const URL: &str = "https://www.hnk.hr/hr/";
const SOURCE_ID: &str = "kazaliste";

static LISTING: Listing = Listing {
    page_url: URL,
    link_base: URL,
    venue: "kazalište",
    anchors: &base::ANY_ANCHOR,
    href: HrefRule::OrPage,
    title_keywords: &["opera", "balet", "drama", "predstava"],
};

/// Croatian National Theatre front page, filtered by performance keywords.
pub struct Hnk {
    client: Client,
}

impl Hnk {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub(crate) fn parse_document(&self, html: &str) -> Vec<RawItem> {
        LISTING.extract(html)
    }
}

impl SourceAdapter for Hnk {
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
    <nav>
        <a href="/hr/opera/">Opera</a>
        <a href="/hr/balet/">Balet</a>
        <a href="/hr/kontakt/">Kontakt opera i balet</a>
    </nav>
    <section>
        <a href="/hr/opera/predstave/tosca/">Opera: Tosca, G. Puccini</a>
        <a>Baletna predstava Labuđe jezero</a>
        <a href="/hr/koncerti/simfonijski/">Simfonijski koncert</a>
        <a href="/hr/drama/">DRAMA: Glembajevi</a>
        <a href="#">Predstava za djecu: Pinokio</a>
    </section>
    "##;

    #[test]
    fn keyword_filter_and_page_fallback() {
        let scraper = Hnk::new(Client::new());
        let items = scraper.parse_document(SAMPLE_HTML);
        assert_eq!(items.len(), 4);

        assert_eq!(items[0].title, "Opera: Tosca, G. Puccini");
        assert_eq!(items[0].url, "https://www.hnk.hr/hr/opera/predstave/tosca/");
        assert_eq!(items[0].venue, "kazalište");

        assert_eq!(items[1].title, "Baletna predstava Labuđe jezero");
        assert_eq!(items[1].url, URL);

        assert_eq!(items[2].title, "DRAMA: Glembajevi");
        assert_eq!(items[2].url, "https://www.hnk.hr/hr/drama/");

        assert_eq!(items[3].title, "Predstava za djecu: Pinokio");
        assert_eq!(items[3].url, "#");
    }
}
