//! Terminal screen clearing.
//!
//! Failures never abort a render: they are logged and the lyrics print
//! onto whatever is already on screen.

use std::io::Write;

/// Clear the screen with the ANSI home + erase-display sequence.
#[cfg(not(windows))]
pub async fn clear<W: Write>(out: &mut W) {
    if let Err(e) = write!(out, "\u{1b}[H\u{1b}[2J").and_then(|()| out.flush()) {
        tracing::warn!(error = %e, "Failed to clear screen");
    }
}

/// Clear the console by running `cmd /c cls`, awaiting its exit.
///
/// The child inherits the console, so the writer is untouched here.
#[cfg(windows)]
pub async fn clear<W: Write>(_out: &mut W) {
    match tokio::process::Command::new("cmd")
        .args(["/c", "cls"])
        .status()
        .await
    {
        Ok(status) if status.success() => {}
        Ok(status) => tracing::warn!(%status, "Screen clear command failed"),
        Err(e) => tracing::warn!(error = %e, "Failed to run screen clear command"),
    }
}

#[cfg(all(test, not(windows)))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_clear_emits_ansi_sequence() {
        let mut out = Vec::new();
        clear(&mut out).await;
        assert_eq!(out, "\u{1b}[H\u{1b}[2J".as_bytes());
    }
}
