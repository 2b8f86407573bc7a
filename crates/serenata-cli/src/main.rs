use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serenata_fetch::{resolve, FetchMetadata, HttpFetcher, MetadataCache, DEFAULT_CACHE_FILE};
use serenata_model::{presets, Color, Song, SongInfo, SongMeta};
use serenata_render::Renderer;
use tokio_util::sync::CancellationToken;

#[derive(Parser)]
#[command(name = "serenata")]
#[command(about = "Timed terminal lyrics player with web-fetched song metadata")]
#[command(version)]
struct Cli {
    /// Log level: error, warn, info, debug, trace
    #[arg(long, global = true, default_value = "warn", value_enum)]
    log_level: LogLevel,

    /// Use UTC timestamps instead of local time
    #[arg(long, global = true)]
    utc: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a song's lyrics with timed word-by-word reveal
    Play {
        /// Built-in song ID (see `serenata list`)
        #[arg(short, long, default_value = "anh-vui")]
        song: String,

        /// Load the song from a JSON file instead of a built-in
        #[arg(short, long)]
        file: Option<String>,

        /// Metadata cache file
        #[arg(long, default_value = DEFAULT_CACHE_FILE)]
        cache_file: String,

        /// Skip the network fetch; use cached or fallback metadata only
        #[arg(long)]
        no_fetch: bool,
    },

    /// Resolve and print song metadata without rendering
    Info {
        /// Built-in song ID (see `serenata list`)
        #[arg(short, long, default_value = "anh-vui")]
        song: String,

        /// Load the song from a JSON file instead of a built-in
        #[arg(short, long)]
        file: Option<String>,

        /// Metadata cache file
        #[arg(long, default_value = DEFAULT_CACHE_FILE)]
        cache_file: String,

        /// Skip the network fetch; use cached or fallback metadata only
        #[arg(long)]
        no_fetch: bool,
    },

    /// List the built-in songs
    List,
}

/// Fetcher used under `--no-fetch`: always reports a miss so resolution
/// goes straight to the song's fallback metadata.
struct OfflineFetcher;

impl FetchMetadata for OfflineFetcher {
    async fn fetch(&self, url: &str) -> Option<SongMeta> {
        tracing::debug!(url, "Network fetch disabled, using fallback metadata");
        None
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Map log level, suppressing noisy HTML-parsing crates at debug/trace
    let level = match cli.log_level {
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug,selectors=warn,html5ever=warn",
        LogLevel::Trace => "trace,selectors=warn,html5ever=warn",
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    let time_format = "%Y-%m-%d %H:%M:%S%.3f %:z";

    if cli.utc {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_timer(tracing_subscriber::fmt::time::ChronoUtc::new(time_format.to_string()))
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_timer(tracing_subscriber::fmt::time::ChronoLocal::new(time_format.to_string()))
            .init();
    }

    match cli.command {
        Commands::Play {
            song,
            file,
            cache_file,
            no_fetch,
        } => {
            let song = load_song(&song, file.as_deref())?;
            play(&song, &cache_file, no_fetch).await?;
        }
        Commands::Info {
            song,
            file,
            cache_file,
            no_fetch,
        } => {
            let song = load_song(&song, file.as_deref())?;
            let info = resolve_info(&song, &cache_file, no_fetch).await?;
            println!("Title:  {}", info.title);
            println!("Artist: {}", info.artist);
            println!("Lines:  {}", info.total_lines);
        }
        Commands::List => {
            for id in presets::builtin_ids() {
                if let Some(song) = presets::builtin(id) {
                    println!("{id:<22} {} ({})", song.title, song.artist);
                }
            }
        }
    }

    Ok(())
}

/// Load a built-in song by ID, or a `Song` JSON document from `file`.
fn load_song(id: &str, file: Option<&str>) -> Result<Song> {
    if let Some(path) = file {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read song file {path}"))?;
        return serde_json::from_str(&contents)
            .with_context(|| format!("Song file {path} is not a valid song definition"));
    }
    presets::builtin(id).with_context(|| {
        format!(
            "Unknown song '{id}' (built-in songs: {})",
            presets::builtin_ids().join(", ")
        )
    })
}

async fn resolve_info(song: &Song, cache_file: &str, no_fetch: bool) -> Result<SongInfo> {
    let cache = MetadataCache::with_path(cache_file);
    let fallback = song.fallback_meta();

    let info = if no_fetch {
        resolve(&cache, &song.url, song.lines.len(), &fallback, &OfflineFetcher).await
    } else {
        let fetcher = HttpFetcher::new()?;
        resolve(&cache, &song.url, song.lines.len(), &fallback, &fetcher).await
    };
    Ok(info)
}

async fn play(song: &Song, cache_file: &str, no_fetch: bool) -> Result<()> {
    // Validate the lyrics before any network or terminal work
    let renderer = match Renderer::new(song) {
        Ok(renderer) => renderer,
        Err(e) => {
            tracing::error!(error = %e, "Cannot play song");
            println!("{}", Color::Red.paint(&format!("Error: {e}")));
            std::process::exit(1);
        }
    };

    let info = resolve_info(song, cache_file, no_fetch).await?;

    println!("{}", Color::Green.paint(&format!("=== Song Lyrics: {} ===", info.title)));
    println!("{}", Color::Cyan.paint(&format!("Artist: {}", info.artist)));
    println!("{}", Color::Cyan.paint(&format!("Total Lines: {}", info.total_lines)));
    println!();
    println!("{}", Color::Yellow.paint("Starting lyrics display (press Ctrl+C to exit)..."));

    let cancel = CancellationToken::new();
    let watcher = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            watcher.cancel();
        }
    });

    let mut stdout = std::io::stdout();
    renderer.render(&mut stdout, &cancel).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_play_defaults() {
        let cli = Cli::parse_from(["serenata", "play"]);
        match cli.command {
            Commands::Play {
                song,
                file,
                cache_file,
                no_fetch,
            } => {
                assert_eq!(song, "anh-vui");
                assert!(file.is_none());
                assert_eq!(cache_file, DEFAULT_CACHE_FILE);
                assert!(!no_fetch);
            }
            _ => panic!("expected play subcommand"),
        }
    }

    #[test]
    fn test_load_song_unknown_id() {
        let err = load_song("khong-ton-tai", None).unwrap_err();
        assert!(err.to_string().contains("anh-vui"));
    }

    #[test]
    fn test_load_song_builtin() {
        let song = load_song("nhu-anh-da-thay-em", None).unwrap();
        assert_eq!(song.lines.len(), 10);
    }
}
