use anyhow::Context;
use once_cell::sync::Lazy;
use reqwest::blocking::Client;
use scraper::{ElementRef, Html, Selector};

use super::FetchError;
use crate::classify;
use crate::config::AppConfig;
use crate::models::RawItem;

/// Matches every anchor in a document.
pub static ANY_ANCHOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a").expect("anchor selector"));

pub fn clean_text(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Text nodes are trimmed and concatenated without a separator, so
/// `<h2>Kries live</h2><span>Koncert</span>` reads `Kries liveKoncert`.
pub fn inner_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .collect()
}

/// Resolves `href` against `base`. Only a missing or blank link counts as missing;
/// fragment links such as `#` are kept verbatim.
pub fn absolute_url(base: &str, href: Option<&str>) -> Option<String> {
    let href = href.map(str::trim).filter(|h| !h.is_empty())?;
    if href.starts_with('#') || href.starts_with("http://") || href.starts_with("https://") {
        return Some(href.to_string());
    }
    let base_url = reqwest::Url::parse(base).ok()?;
    base_url.join(href).ok().map(|u| u.to_string())
}

pub fn http_client(config: &AppConfig) -> anyhow::Result<Client> {
    Client::builder()
        .timeout(config.timeout())
        .user_agent(config.user_agent.clone())
        .build()
        .context("unable to build http client")
}

pub fn fetch_text(client: &Client, url: &str) -> Result<String, FetchError> {
    let response = client.get(url).send().map_err(|source| FetchError::Http {
        url: url.to_string(),
        source,
    })?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status,
        });
    }
    response.text().map_err(|source| FetchError::Body {
        url: url.to_string(),
        source,
    })
}

/// How an anchor's `href` gates and shapes the extracted url.
#[derive(Clone, Copy, Debug)]
pub enum HrefRule {
    /// The anchor must carry a link.
    Required,
    /// The link must contain the given fragment.
    Contains(&'static str),
    /// A missing link falls back to the listing page itself.
    OrPage,
}

/// Anchor-based extraction shared by the HTML listing sources.
pub struct Listing {
    pub page_url: &'static str,
    pub link_base: &'static str,
    pub venue: &'static str,
    pub anchors: &'static Lazy<Selector>,
    pub href: HrefRule,
    pub title_keywords: &'static [&'static str],
}

impl Listing {
    pub fn extract(&self, html: &str) -> Vec<RawItem> {
        let document = Html::parse_document(html);
        let mut items = Vec::new();

        for anchor in document.select(self.anchors) {
            let title = inner_text(anchor);
            let raw_href = anchor.value().attr("href");

            let url = match self.href {
                HrefRule::Required => absolute_url(self.link_base, raw_href),
                HrefRule::Contains(fragment) => raw_href
                    .filter(|href| href.contains(fragment))
                    .and_then(|href| absolute_url(self.link_base, Some(href))),
                HrefRule::OrPage => absolute_url(self.link_base, raw_href)
                    .or_else(|| Some(self.page_url.to_string())),
            };
            let url = match url {
                Some(url) => url,
                None => continue,
            };

            if !classify::is_valid_title(&title) {
                continue;
            }
            if !self.title_keywords.is_empty() {
                let lower = title.to_lowercase();
                if !self.title_keywords.iter().any(|kw| lower.contains(kw)) {
                    continue;
                }
            }

            items.push(RawItem::new(title, self.venue, url));
        }

        items
    }
}
