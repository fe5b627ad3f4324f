// crates/trimws-core/src/engine/trim.rs

use crate::config::Config;
use crate::engine::accum::LineAccumulator;
use crate::engine::state::{is_blank, is_filler, Counters, LineState};
use crate::engine::{CharSink, CharSource, StrSource};
use crate::error::Result;
use crate::separator::{CR, CRLF, LF};

// Blank characters expanded per write when a long run has to go out.
const BLANK_CHUNK: usize = 4096;

pub struct Engine {
    config: Config,
    line: LineAccumulator,
}

impl Engine {
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let line = LineAccumulator::with_capacity(config.flush_threshold.min(4096) + 8);
        Ok(Self { config, line })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Stream `source` to `sink` one line at a time, stripping trailing
    /// blanks and rewriting line terminators.
    ///
    /// Every finished line reaches the sink before the next character is
    /// read. Lines longer than `flush_threshold` are written ahead in pieces.
    pub fn run<S, W>(&mut self, source: &mut S, sink: &mut W) -> Result<Counters>
    where
        S: CharSource + ?Sized,
        W: CharSink + ?Sized,
    {
        tracing::debug!(
            trim = self.config.trim,
            clean = self.config.clean,
            separator = ?self.config.separator,
            "trim run start"
        );

        let mut counters = Counters::default();
        let mut state = LineState::Normal;
        // Character that resolved a pending CR and still needs classifying.
        let mut reinject: Option<char> = None;
        self.line.clear();

        loop {
            let ch = match reinject.take() {
                Some(c) => Some(c),
                None => source.next_char()?,
            };

            match (state, ch) {
                (_, Some(c)) if self.config.clean && is_filler(c) => {
                    counters.control += 1;
                }
                (LineState::SawCr, next) if next != Some('\n') => {
                    self.end_line(CR, sink, &mut counters)?;
                    state = LineState::Normal;
                    match next {
                        Some(c) => reinject = Some(c),
                        None => break,
                    }
                }
                (_, None) => break,
                (_, Some('\r')) => state = LineState::SawCr,
                (_, Some('\n')) => {
                    let observed = if state == LineState::SawCr { CRLF } else { LF };
                    self.end_line(observed, sink, &mut counters)?;
                    state = LineState::Normal;
                }
                (_, Some(c)) if is_blank(c) => self.line.push_blank(c),
                (_, Some(c)) if c.is_control() => {
                    counters.control += 1;
                    if !self.config.clean {
                        self.push_content(c, sink)?;
                    }
                }
                (_, Some(c)) => self.push_content(c, sink)?,
            }

            if self.line.held() >= self.config.flush_threshold {
                self.spill(sink)?;
            }
        }

        counters.trimmed += self.line.blank_chars() as u64;
        if self.config.trim {
            self.line.clear_blanks();
        } else {
            self.release_blanks(sink)?;
        }
        if !self.line.is_empty() {
            sink.write_chars(self.line.content())?;
        }
        self.line.clear();
        sink.flush()?;

        tracing::debug!(
            trimmed = counters.trimmed,
            control = counters.control,
            "trim run done"
        );
        Ok(counters)
    }

    /// Convenience wrapper for in-memory text.
    pub fn run_str(&mut self, input: &str) -> Result<(String, Counters)> {
        let mut out = String::with_capacity(input.len());
        let counters = self.run(&mut StrSource::new(input), &mut out)?;
        Ok((out, counters))
    }

    fn push_content<W>(&mut self, c: char, sink: &mut W) -> Result<()>
    where
        W: CharSink + ?Sized,
    {
        self.release_blanks(sink)?;
        self.line.push_content(c);
        Ok(())
    }

    fn end_line<W>(&mut self, observed: &str, sink: &mut W, counters: &mut Counters) -> Result<()>
    where
        W: CharSink + ?Sized,
    {
        counters.trimmed += self.line.blank_chars() as u64;
        if self.config.trim {
            self.line.clear_blanks();
        } else {
            self.release_blanks(sink)?;
        }
        let terminator = self.config.separator.for_line(observed);
        sink.write_chars(self.line.terminate(terminator))?;
        self.line.clear();
        Ok(())
    }

    // The open blank run is not trailing. Fold it into the content, or, if
    // that would overrun the threshold, write content and run out now.
    fn release_blanks<W>(&mut self, sink: &mut W) -> Result<()>
    where
        W: CharSink + ?Sized,
    {
        if self.line.blank_chars() == 0 {
            return Ok(());
        }
        if self.line.content_chars() + self.line.blank_chars() <= self.config.flush_threshold {
            self.line.settle_blanks();
            return Ok(());
        }
        tracing::trace!(blanks = self.line.blank_chars(), "write long blank run");
        if self.line.content_chars() > 0 {
            sink.write_chars(self.line.content())?;
            self.line.clear_content();
        }
        write_blank_runs(self.line.blank_runs(), sink)?;
        self.line.clear_blanks();
        Ok(())
    }

    // Write-ahead flush for an unfinished line. Content goes out and the
    // open blank run stays, since it may still turn out to be trailing. Only
    // a line holding `flush_threshold` distinct runs and no content writes
    // its blanks as-is.
    fn spill<W>(&mut self, sink: &mut W) -> Result<()>
    where
        W: CharSink + ?Sized,
    {
        if self.line.content_chars() > 0 {
            tracing::trace!(chars = self.line.content_chars(), "spill line content");
            sink.write_chars(self.line.content())?;
            self.line.clear_content();
        } else {
            tracing::trace!(runs = self.line.blank_runs().len(), "spill blank runs");
            write_blank_runs(self.line.blank_runs(), sink)?;
            self.line.clear_blanks();
        }
        Ok(())
    }
}

fn write_blank_runs<W>(runs: &[(char, usize)], sink: &mut W) -> Result<()>
where
    W: CharSink + ?Sized,
{
    let mut chunk = String::with_capacity(BLANK_CHUNK);
    for &(c, n) in runs {
        for _ in 0..n {
            chunk.push(c);
            if chunk.len() >= BLANK_CHUNK {
                sink.write_chars(&chunk)?;
                chunk.clear();
            }
        }
    }
    if !chunk.is_empty() {
        sink.write_chars(&chunk)?;
    }
    Ok(())
}
