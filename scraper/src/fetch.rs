use log::{debug, warn};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use scraper::{Html, Selector};

use crate::title::{extract_title, PageTitle};

/// Anything that can look up the title of an archive page by URL.
pub trait TitleSource {
    /// `None` covers every way a page can fail to yield a title.
    fn lookup(&mut self, url: &str) -> Option<PageTitle>;
}

/// Fetches pages over HTTP, one attempt each.
pub struct HttpTitleSource {
    client: Client,
}

impl HttpTitleSource {
    pub fn new() -> Self {
        HttpTitleSource {
            client: Client::new(),
        }
    }

    /// Downloads the page body, logging and swallowing any failure.
    pub fn fetch_html(&self, url: &str) -> Option<String> {
        let response = match self.client.get(url).send() {
            Ok(response) => response,
            Err(e) => {
                warn!("Request error for {}: {}", url, e);
                return None;
            }
        };

        if response.status() != StatusCode::OK {
            warn!(
                "Failed to retrieve {}: Status code {}",
                url,
                response.status().as_u16()
            );
            return None;
        }

        match response.text() {
            Ok(html) => Some(html),
            Err(e) => {
                warn!("Failed to read body of {}: {}", url, e);
                None
            }
        }
    }
}

impl Default for HttpTitleSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TitleSource for HttpTitleSource {
    fn lookup(&mut self, url: &str) -> Option<PageTitle> {
        let html = self.fetch_html(url)?;
        let raw = parse_page_title(&html);
        if raw.is_none() {
            debug!("No <title> on {}", url);
        }
        extract_title(raw.as_deref())
    }
}

/// Text of the document's first `<title>` element.
pub fn parse_page_title(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let title_selector = Selector::parse("title").ok()?;
    document
        .select(&title_selector)
        .next()
        .map(|element| element.text().collect::<String>())
}
