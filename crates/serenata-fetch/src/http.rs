use crate::FetchMetadata;
use anyhow::{Context, Result};
use scraper::{Html, Selector};
use serenata_model::SongMeta;
use std::time::Duration;

const FETCH_TIMEOUT: Duration = Duration::from_millis(5000);

/// Title lives in the primary heading of the playback-info panel.
const TITLE_SELECTOR: &str = ".info-top-play h1.txt-primary";
/// Artist is the link inside the panel's secondary heading.
const ARTIST_SELECTOR: &str = ".info-top-play h2 a";

/// Fetches song metadata from a song page over HTTP.
///
/// Every failure mode (connection error, timeout, non-success status,
/// missing page elements) is soft: it logs a warning and yields `None`,
/// and the caller falls back to the song's hard-coded metadata.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("serenata/0.1 (terminal lyrics player)")
            .timeout(FETCH_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client })
    }

    async fn try_fetch(&self, url: &str) -> Result<SongMeta> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .context("Failed to fetch song page")?;

        let status = response.status();
        anyhow::ensure!(status.is_success(), "HTTP {status} for {url}");

        let html = response.text().await.context("Failed to read response body")?;
        tracing::debug!(bytes = html.len(), url, "Received song page HTML");

        parse_song_page(&html).context("Song page is missing the title or artist element")
    }
}

impl FetchMetadata for HttpFetcher {
    async fn fetch(&self, url: &str) -> Option<SongMeta> {
        match self.try_fetch(url).await {
            Ok(meta) => {
                tracing::info!(url, title = %meta.title, artist = %meta.artist, "Fetched song metadata");
                Some(meta)
            }
            Err(e) => {
                tracing::warn!(url, error = %e, "Failed to fetch song metadata, using fallback values");
                None
            }
        }
    }
}

/// Extract title and artist from a song page.
///
/// Returns `None` when either element is absent or has no text.
pub fn parse_song_page(html: &str) -> Option<SongMeta> {
    let document = Html::parse_document(html);

    let title_sel = Selector::parse(TITLE_SELECTOR).expect("valid selector");
    let artist_sel = Selector::parse(ARTIST_SELECTOR).expect("valid selector");

    let title = selected_text(&document, &title_sel)?;
    let artist = selected_text(&document, &artist_sel)?;

    Some(SongMeta::new(title, artist))
}

fn selected_text(document: &Html, selector: &Selector) -> Option<String> {
    let text: String = document.select(selector).next()?.text().collect();
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}
