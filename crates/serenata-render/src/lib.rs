//! Timed lyric rendering.
//!
//! Each line is revealed word by word: the line's display duration is
//! divided evenly across its words, every word is flushed before its delay
//! starts, and the whole line shares one color decided by the song's color
//! policy. Sleeps race against a cancellation token so Ctrl-C interrupts a
//! render mid-word instead of waiting the delay out.

pub mod screen;

use serenata_model::{Color, Song, SongError};
use std::io::Write;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// How a render run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// All lines were printed.
    Completed,
    /// Cancellation fired during a delay; rendering stopped early.
    Interrupted,
}

/// Plays a song's lyrics to a terminal-like writer.
pub struct Renderer {
    song: Song,
}

impl Renderer {
    /// Build a renderer for `song`. Fails if the song has no lyrics,
    /// the one fatal construction error in the system.
    pub fn new(song: &Song) -> Result<Self, SongError> {
        song.validate()?;
        Ok(Self { song: song.clone() })
    }

    /// Render every line in order, clearing the screen first.
    ///
    /// Interruption is a normal outcome, not an error: it stops the loop,
    /// prints one red `Interrupted!` line, and returns
    /// [`RenderOutcome::Interrupted`]. Only writer failures propagate.
    pub async fn render<W: Write>(
        &self,
        out: &mut W,
        cancel: &CancellationToken,
    ) -> std::io::Result<RenderOutcome> {
        screen::clear(out).await;

        for (index, line) in self.song.lines.iter().enumerate() {
            if self.render_line(out, index, line, cancel).await? == RenderOutcome::Interrupted {
                tracing::error!(line = index, "Lyrics rendering interrupted");
                writeln!(out, "\n{}", Color::Red.paint("Interrupted!"))?;
                out.flush()?;
                return Ok(RenderOutcome::Interrupted);
            }
            writeln!(out)?;
        }

        Ok(RenderOutcome::Completed)
    }

    async fn render_line<W: Write>(
        &self,
        out: &mut W,
        index: usize,
        line: &str,
        cancel: &CancellationToken,
    ) -> std::io::Result<RenderOutcome> {
        let words = split_words(line);
        let line_delay = self.song.delays.delay_ms(index);
        let per_word = Duration::from_millis(line_delay / words.len().max(1) as u64);
        let color = self.song.color_policy.line_color(index, line);

        for word in words {
            match color {
                Some(c) => write!(out, "{} ", c.paint(word))?,
                None => write!(out, "{word} ")?,
            }
            out.flush()?;

            tokio::select! {
                biased;
                _ = cancel.cancelled() => return Ok(RenderOutcome::Interrupted),
                _ = tokio::time::sleep(per_word) => {}
            }
        }

        Ok(RenderOutcome::Completed)
    }
}

/// Split a line on whitespace runs. A blank line yields one empty word, so
/// it still occupies its full display duration as a single beat.
fn split_words(line: &str) -> Vec<&str> {
    let words: Vec<&str> = line.split_whitespace().collect();
    if words.is_empty() {
        vec![""]
    } else {
        words
    }
}
