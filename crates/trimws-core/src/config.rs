// crates/trimws-core/src/config.rs

use crate::error::{Result, TrimError};
use crate::separator::{self, Separator, SeparatorMode};

/// Characters held per line before a write-ahead flush.
pub const DEFAULT_FLUSH_THRESHOLD: usize = 0x10000;

/// Run options. Built once by the caller; the engine only reads it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Remove trailing whitespace. When false it is still counted but copied.
    pub trim: bool,
    /// Drop DEL/NUL filler and other stray control codes.
    pub clean: bool,
    pub separator: Separator,
    pub flush_threshold: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            trim: true,
            clean: false,
            separator: Separator::Preserve,
            flush_threshold: DEFAULT_FLUSH_THRESHOLD,
        }
    }
}

impl Config {
    pub fn new(mode: SeparatorMode, local_default: &str) -> Self {
        Self {
            separator: separator::terminator(mode, local_default),
            ..Self::default()
        }
    }

    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    pub fn with_clean(mut self, clean: bool) -> Self {
        self.clean = clean;
        self
    }

    pub fn with_flush_threshold(mut self, chars: usize) -> Self {
        self.flush_threshold = chars;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.flush_threshold == 0 {
            return Err(TrimError::Config("flush_threshold must be non-zero".into()));
        }
        if let Separator::Fixed(s) = &self.separator {
            if s.is_empty() {
                return Err(TrimError::Config("line separator must not be empty".into()));
            }
        }
        Ok(())
    }
}
