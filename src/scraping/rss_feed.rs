use quick_xml::events::Event as XmlEvent;
use quick_xml::Reader;
use reqwest::blocking::Client;
use serde::Deserialize;

use super::base;
use super::{FetchError, SourceAdapter};
use crate::classify;
use crate::models::RawItem;

#[derive(Debug, Deserialize)]
struct RssDocument {
    channel: RssChannel,
}

#[derive(Debug, Deserialize)]
struct RssChannel {
    #[serde(rename = "item", default)]
    items: Vec<RssItem>,
}

#[derive(Debug, Deserialize)]
struct RssItem {
    title: Option<String>,
    link: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AtomFeed {
    #[serde(rename = "entry", default)]
    entries: Vec<AtomEntry>,
}

#[derive(Debug, Deserialize)]
struct AtomEntry {
    title: Option<AtomText>,
    #[serde(rename = "link", default)]
    links: Vec<AtomLink>,
}

#[derive(Debug, Deserialize)]
struct AtomText {
    #[serde(rename = "$text", default)]
    value: String,
}

#[derive(Debug, Deserialize)]
struct AtomLink {
    #[serde(rename = "@href")]
    href: Option<String>,
    #[serde(rename = "@rel")]
    rel: Option<String>,
}

impl AtomEntry {
    fn link(&self) -> Option<&str> {
        self.links
            .iter()
            .find(|link| matches!(link.rel.as_deref(), None | Some("alternate")))
            .or_else(|| self.links.first())
            .and_then(|link| link.href.as_deref())
    }
}

/// Syndication feed (RSS 2.0 or Atom) with a fixed venue label.
pub struct RssFeed {
    client: Client,
    name: String,
    url: String,
    venue: String,
}

impl RssFeed {
    pub fn new(client: Client, name: &str, url: &str, venue: &str) -> Self {
        Self {
            client,
            name: name.to_string(),
            url: url.to_string(),
            venue: venue.to_string(),
        }
    }

    /// Every entry must carry a title and a link; one broken entry rejects the feed.
    pub(crate) fn parse_feed(&self, xml: &str) -> Result<Vec<RawItem>, FetchError> {
        let entries = match root_element(xml, &self.url)?.as_str() {
            "rss" => {
                let doc: RssDocument = quick_xml::de::from_str(xml).map_err(|source| {
                    FetchError::Feed {
                        url: self.url.clone(),
                        source,
                    }
                })?;
                doc.channel
                    .items
                    .into_iter()
                    .map(|item| (item.title, item.link))
                    .collect::<Vec<_>>()
            }
            "feed" => {
                let feed: AtomFeed = quick_xml::de::from_str(xml).map_err(|source| {
                    FetchError::Feed {
                        url: self.url.clone(),
                        source,
                    }
                })?;
                feed.entries
                    .iter()
                    .map(|entry| {
                        (
                            entry.title.as_ref().map(|t| t.value.clone()),
                            entry.link().map(str::to_string),
                        )
                    })
                    .collect::<Vec<_>>()
            }
            _ => {
                return Err(FetchError::UnknownFeed {
                    url: self.url.clone(),
                })
            }
        };

        let mut items = Vec::new();
        for (title, link) in entries {
            let title = title.ok_or_else(|| self.missing("title"))?;
            let link = link.ok_or_else(|| self.missing("link"))?;
            let title = base::clean_text(&title);
            if classify::is_valid_title(&title) {
                items.push(RawItem::new(title, self.venue.as_str(), link.trim()));
            }
        }
        Ok(items)
    }

    fn missing(&self, field: &'static str) -> FetchError {
        FetchError::MissingField {
            url: self.url.clone(),
            field,
        }
    }
}

impl SourceAdapter for RssFeed {
    fn id(&self) -> &str {
        &self.name
    }

    fn source(&self) -> &str {
        &self.url
    }

    fn fetch(&self) -> Result<Vec<RawItem>, FetchError> {
        let xml = base::fetch_text(&self.client, &self.url)?;
        self.parse_feed(&xml)
    }
}

fn root_element(xml: &str, url: &str) -> Result<String, FetchError> {
    let mut reader = Reader::from_str(xml);
    loop {
        match reader.read_event() {
            Ok(XmlEvent::Start(tag)) | Ok(XmlEvent::Empty(tag)) => {
                return Ok(String::from_utf8_lossy(tag.local_name().as_ref()).into_owned())
            }
            Ok(XmlEvent::Eof) => {
                return Err(FetchError::UnknownFeed {
                    url: url.to_string(),
                })
            }
            Ok(_) => {}
            Err(source) => {
                return Err(FetchError::Xml {
                    url: url.to_string(),
                    source,
                })
            }
        }
    }
}
