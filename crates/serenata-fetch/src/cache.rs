//! Single-slot metadata cache.
//!
//! One plain-text file holds the last resolved record as three
//! newline-separated fields: source URL, title, artist. A new resolution
//! rewrites the whole file. Values containing newlines are not supported.

use serenata_model::SongMeta;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Default cache file name, resolved against the working directory.
pub const DEFAULT_CACHE_FILE: &str = "song_info_cache.txt";

/// Reads and writes the single-record song metadata cache.
///
/// All I/O failures are logged and swallowed: a broken cache degrades to a
/// cache miss, never to a program error.
#[derive(Debug, Clone)]
pub struct MetadataCache {
    path: PathBuf,
}

impl Default for MetadataCache {
    fn default() -> Self {
        Self::with_path(DEFAULT_CACHE_FILE)
    }
}

impl MetadataCache {
    /// Cache at the default location (`song_info_cache.txt` in the working
    /// directory).
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache at a specific path. Useful for tests or a `--cache-file`
    /// override.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Return the cached metadata if the stored record is for `url`.
    ///
    /// Missing file, unreadable file, URL mismatch, or a record with
    /// missing/blank title or artist all count as a miss.
    pub fn load(&self, url: &str) -> Option<SongMeta> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Failed to read cache file");
                return None;
            }
        };

        let mut lines = contents.lines();
        if lines.next() != Some(url) {
            return None;
        }

        let title = lines.next().map(str::trim).unwrap_or_default();
        let artist = lines.next().map(str::trim).unwrap_or_default();
        if title.is_empty() || artist.is_empty() {
            // Truncated or hand-edited record: treat as a miss so the
            // caller re-fetches and rewrites it.
            tracing::warn!(path = %self.path.display(), "Cache record is malformed, ignoring it");
            return None;
        }

        Some(SongMeta::new(title, artist))
    }

    /// Overwrite the cache with a record for `url`.
    pub fn store(&self, url: &str, meta: &SongMeta) {
        let record = format!("{}\n{}\n{}\n", url, meta.title, meta.artist);
        if let Err(e) = fs::write(&self.path, record) {
            tracing::warn!(path = %self.path.display(), url, error = %e, "Failed to write cache file");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const URL: &str = "https://zingmp3.vn/album/ANH-VUI-Single-Pham-Ky/6BDIEE7A.html";

    fn temp_cache() -> (MetadataCache, TempDir) {
        let dir = TempDir::new().expect("temp dir");
        let cache = MetadataCache::with_path(dir.path().join(DEFAULT_CACHE_FILE));
        (cache, dir)
    }

    #[test]
    fn test_roundtrip() {
        let (cache, _dir) = temp_cache();
        let meta = SongMeta::new("Cảm ơn vì em ngỏ lời mời", "Phạm Kỳ");

        cache.store(URL, &meta);

        assert_eq!(cache.load(URL), Some(meta));
    }

    #[test]
    fn test_missing_file_is_a_miss() {
        let (cache, _dir) = temp_cache();
        assert_eq!(cache.load(URL), None);
    }

    #[test]
    fn test_url_mismatch_is_a_miss() {
        let (cache, _dir) = temp_cache();
        cache.store(URL, &SongMeta::new("title", "artist"));

        assert_eq!(cache.load("https://zingmp3.vn/album/other.html"), None);
    }

    #[test]
    fn test_truncated_record_is_a_miss() {
        let (cache, dir) = temp_cache();
        // URL matches but the artist line is gone
        fs::write(dir.path().join(DEFAULT_CACHE_FILE), format!("{URL}\ntitle\n")).unwrap();

        assert_eq!(cache.load(URL), None);
    }

    #[test]
    fn test_blank_fields_are_a_miss() {
        let (cache, dir) = temp_cache();
        fs::write(dir.path().join(DEFAULT_CACHE_FILE), format!("{URL}\n   \nartist\n")).unwrap();

        assert_eq!(cache.load(URL), None);
    }

    #[test]
    fn test_store_overwrites_previous_record() {
        let (cache, _dir) = temp_cache();
        cache.store(URL, &SongMeta::new("old", "old artist"));

        let new_url = "https://zingmp3.vn/album/new.html";
        let new_meta = SongMeta::new("new", "new artist");
        cache.store(new_url, &new_meta);

        assert_eq!(cache.load(URL), None);
        assert_eq!(cache.load(new_url), Some(new_meta));
    }

    #[test]
    fn test_store_failure_is_swallowed() {
        // Path points into a directory that does not exist
        let dir = TempDir::new().unwrap();
        let cache = MetadataCache::with_path(dir.path().join("missing").join("cache.txt"));

        cache.store(URL, &SongMeta::new("title", "artist"));

        assert_eq!(cache.load(URL), None);
    }
}
