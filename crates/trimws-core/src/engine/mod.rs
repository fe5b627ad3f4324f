// crates/trimws-core/src/engine/mod.rs
//
// Character endpoints the trim engine runs between. Decoding and encoding
// happen outside (see `stream`); the engine only ever sees `char`s.

pub mod accum;
pub mod state;
pub mod trim;

use crate::error::Result;

pub use self::state::{Counters, LineState};
pub use self::trim::Engine;

/// Sequential character reader. `Ok(None)` is end of stream.
pub trait CharSource {
    fn next_char(&mut self) -> Result<Option<char>>;
}

/// Sequential character writer accepting contiguous runs.
pub trait CharSink {
    fn write_chars(&mut self, chars: &str) -> Result<()>;

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

/// In-memory source over a string slice.
pub struct StrSource<'a> {
    chars: std::str::Chars<'a>,
}

impl<'a> StrSource<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { chars: text.chars() }
    }
}

impl CharSource for StrSource<'_> {
    fn next_char(&mut self) -> Result<Option<char>> {
        Ok(self.chars.next())
    }
}

impl CharSink for String {
    fn write_chars(&mut self, chars: &str) -> Result<()> {
        self.push_str(chars);
        Ok(())
    }
}

impl<S: CharSource + ?Sized> CharSource for &mut S {
    fn next_char(&mut self) -> Result<Option<char>> {
        (**self).next_char()
    }
}

impl<W: CharSink + ?Sized> CharSink for &mut W {
    fn write_chars(&mut self, chars: &str) -> Result<()> {
        (**self).write_chars(chars)
    }

    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }
}
