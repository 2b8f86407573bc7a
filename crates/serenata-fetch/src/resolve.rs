use crate::cache::MetadataCache;
use crate::FetchMetadata;
use serenata_model::{SongInfo, SongMeta};

/// Resolve song metadata: cache, then fetch, then hard-coded fallback.
///
/// Infallible by contract: every failure path still produces a
/// [`SongInfo`]. A cache hit returns without touching the network; a miss
/// fetches (or falls back) and rewrites the cache record.
pub async fn resolve<F: FetchMetadata>(
    cache: &MetadataCache,
    url: &str,
    line_count: usize,
    fallback: &SongMeta,
    fetcher: &F,
) -> SongInfo {
    if let Some(meta) = cache.load(url) {
        tracing::debug!(url, title = %meta.title, "Song metadata served from cache");
        return SongInfo::new(line_count, meta);
    }

    let meta = fetcher.fetch(url).await.unwrap_or_else(|| fallback.clone());
    cache.store(url, &meta);
    SongInfo::new(line_count, meta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::DEFAULT_CACHE_FILE;
    use std::cell::Cell;
    use tempfile::TempDir;

    const URL: &str = "https://zingmp3.vn/album/ANH-VUI-Single-Pham-Ky/6BDIEE7A.html";

    /// Fetcher that returns a scripted result and counts invocations.
    struct ScriptedFetcher {
        result: Option<SongMeta>,
        calls: Cell<usize>,
    }

    impl ScriptedFetcher {
        fn returning(result: Option<SongMeta>) -> Self {
            Self {
                result,
                calls: Cell::new(0),
            }
        }
    }

    impl FetchMetadata for ScriptedFetcher {
        async fn fetch(&self, _url: &str) -> Option<SongMeta> {
            self.calls.set(self.calls.get() + 1);
            self.result.clone()
        }
    }

    fn temp_cache() -> (MetadataCache, TempDir) {
        let dir = TempDir::new().expect("temp dir");
        let cache = MetadataCache::with_path(dir.path().join(DEFAULT_CACHE_FILE));
        (cache, dir)
    }

    fn fallback() -> SongMeta {
        SongMeta::new("Cảm ơn vì em ngỏ lời mời", "Phạm Kỳ")
    }

    #[tokio::test]
    async fn test_cache_hit_skips_fetcher() {
        let (cache, _dir) = temp_cache();
        let cached = SongMeta::new("cached title", "cached artist");
        cache.store(URL, &cached);

        let fetcher = ScriptedFetcher::returning(Some(SongMeta::new("fresh", "fresh")));
        let info = resolve(&cache, URL, 7, &fallback(), &fetcher).await;

        assert_eq!(fetcher.calls.get(), 0);
        assert_eq!(info.title, "cached title");
        assert_eq!(info.artist, "cached artist");
        assert_eq!(info.total_lines, 7);
    }

    #[tokio::test]
    async fn test_url_change_invokes_fetcher_and_overwrites() {
        let (cache, _dir) = temp_cache();
        cache.store("https://zingmp3.vn/album/old.html", &SongMeta::new("old", "old"));

        let fresh = SongMeta::new("fresh title", "fresh artist");
        let fetcher = ScriptedFetcher::returning(Some(fresh.clone()));
        let info = resolve(&cache, URL, 10, &fallback(), &fetcher).await;

        assert_eq!(fetcher.calls.get(), 1);
        assert_eq!(info.title, "fresh title");
        // The record was rewritten for the new URL
        assert_eq!(cache.load(URL), Some(fresh));
    }

    #[tokio::test]
    async fn test_fetch_failure_falls_back() {
        let (cache, _dir) = temp_cache();

        let fetcher = ScriptedFetcher::returning(None);
        let info = resolve(&cache, URL, 7, &fallback(), &fetcher).await;

        assert_eq!(fetcher.calls.get(), 1);
        assert_eq!(info.title, "Cảm ơn vì em ngỏ lời mời");
        assert_eq!(info.artist, "Phạm Kỳ");
        // Fallback values are cached too, so the next run stays offline
        assert_eq!(cache.load(URL), Some(fallback()));
    }

    #[tokio::test]
    async fn test_second_resolve_is_served_from_cache() {
        let (cache, _dir) = temp_cache();
        let fresh = SongMeta::new("title", "artist");

        let fetcher = ScriptedFetcher::returning(Some(fresh));
        resolve(&cache, URL, 7, &fallback(), &fetcher).await;
        let info = resolve(&cache, URL, 7, &fallback(), &fetcher).await;

        assert_eq!(fetcher.calls.get(), 1, "second resolve must not re-fetch");
        assert_eq!(info.title, "title");
    }
}
