use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Default display duration for lines without an explicit override.
pub const DEFAULT_LINE_DELAY_MS: u64 = 3500;

/// Per-line display durations, keyed by zero-based line index.
///
/// Lines without an entry fall back to `default_ms`. The table is an
/// immutable value carried by the [`Song`](crate::Song), not process-wide
/// state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DelayTable {
    #[serde(default)]
    pub overrides: HashMap<usize, u64>,
    #[serde(default = "default_line_delay")]
    pub default_ms: u64,
}

fn default_line_delay() -> u64 {
    DEFAULT_LINE_DELAY_MS
}

impl Default for DelayTable {
    fn default() -> Self {
        Self {
            overrides: HashMap::new(),
            default_ms: DEFAULT_LINE_DELAY_MS,
        }
    }
}

impl DelayTable {
    /// Build a table from `(index, milliseconds)` pairs with the standard
    /// default for unlisted indices.
    pub fn from_pairs(pairs: &[(usize, u64)]) -> Self {
        Self {
            overrides: pairs.iter().copied().collect(),
            default_ms: DEFAULT_LINE_DELAY_MS,
        }
    }

    /// Display duration in milliseconds for line `index`.
    pub fn delay_ms(&self, index: usize) -> u64 {
        self.overrides.get(&index).copied().unwrap_or(self.default_ms)
    }
}
