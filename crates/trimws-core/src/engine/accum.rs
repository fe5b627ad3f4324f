// crates/trimws-core/src/engine/accum.rs
//
// Characters collected since the last emitted line boundary.
//
// The line is split in two: `content` ends at the last non-blank character,
// and `blanks` is the open blank run after it, stored run-length encoded as
// `(char, count)` pairs. The run only becomes content once something
// non-blank follows it; until then it is trailing and trimmable. Both halves
// drop to empty on every flush.

#[derive(Debug, Default)]
pub struct LineAccumulator {
    content: String,
    content_chars: usize,
    blanks: Vec<(char, usize)>,
    blank_chars: usize,
}

impl LineAccumulator {
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            content: String::with_capacity(bytes),
            ..Self::default()
        }
    }

    /// Append a blank. It stays trimmable until content follows it.
    pub fn push_blank(&mut self, c: char) {
        match self.blanks.last_mut() {
            Some((last, n)) if *last == c => *n += 1,
            _ => self.blanks.push((c, 1)),
        }
        self.blank_chars += 1;
    }

    /// Append content. Any open blank run is folded in ahead of it.
    pub fn push_content(&mut self, c: char) {
        self.settle_blanks();
        self.content.push(c);
        self.content_chars += 1;
    }

    /// Fold the open blank run into the content: it is no longer trailing.
    pub fn settle_blanks(&mut self) {
        for (c, n) in self.blanks.drain(..) {
            self.content.extend(std::iter::repeat(c).take(n));
        }
        self.content_chars += self.blank_chars;
        self.blank_chars = 0;
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn content_chars(&self) -> usize {
        self.content_chars
    }

    /// Length of the open blank run after the last content character.
    pub fn blank_chars(&self) -> usize {
        self.blank_chars
    }

    pub fn blank_runs(&self) -> &[(char, usize)] {
        &self.blanks
    }

    /// Working storage in use: content characters plus one slot per run.
    pub fn held(&self) -> usize {
        self.content_chars + self.blanks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content_chars == 0 && self.blank_chars == 0
    }

    /// Append a line terminator to the content and return the finished line.
    pub fn terminate(&mut self, terminator: &str) -> &str {
        self.content.push_str(terminator);
        &self.content
    }

    pub fn clear_content(&mut self) {
        self.content.clear();
        self.content_chars = 0;
    }

    pub fn clear_blanks(&mut self) {
        self.blanks.clear();
        self.blank_chars = 0;
    }

    pub fn clear(&mut self) {
        self.clear_content();
        self.clear_blanks();
    }
}
