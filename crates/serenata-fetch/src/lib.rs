pub mod cache;
pub mod http;
pub mod resolve;

pub use cache::{MetadataCache, DEFAULT_CACHE_FILE};
pub use http::{parse_song_page, HttpFetcher};
pub use resolve::resolve;

use serenata_model::SongMeta;
use std::future::Future;

/// Seam for metadata retrieval, so resolution can be exercised without a
/// network. Implementations report every failure as `None`; nothing
/// propagates past this boundary.
pub trait FetchMetadata {
    fn fetch(&self, url: &str) -> impl Future<Output = Option<SongMeta>>;
}
