// crates/trimws-core/src/stream/encode.rs

use std::io::Write;

use encoding_rs::{Encoder, EncoderResult, UTF_16BE, UTF_16LE, UTF_8};

use crate::engine::CharSink;
use crate::error::Result;
use crate::stream::Charset;

const SUBSTITUTE: &str = "?";

enum Target {
    Utf8,
    Utf16 { big_endian: bool },
    // WHATWG encoders only produce ASCII-compatible encodings, so UTF-16 is
    // handled above and everything else goes through encoding_rs.
    Legacy(Encoder),
}

/// Encodes runs of characters onto a byte writer.
///
/// Characters the target charset cannot represent are written as `?`
/// without raising an error. No BOM is ever added.
pub struct EncodingWriter<W: Write> {
    inner: W,
    target: Target,
    bytes: Vec<u8>,
    substituted: u64,
}

impl<W: Write> EncodingWriter<W> {
    pub fn new(inner: W, charset: Charset) -> Self {
        let enc = charset.encoding();
        let target = if enc == UTF_8 {
            Target::Utf8
        } else if enc == UTF_16LE {
            Target::Utf16 { big_endian: false }
        } else if enc == UTF_16BE {
            Target::Utf16 { big_endian: true }
        } else {
            Target::Legacy(enc.new_encoder())
        };
        Self {
            inner,
            target,
            bytes: Vec::new(),
            substituted: 0,
        }
    }

    /// Characters replaced with `?` so far.
    pub fn substituted(&self) -> u64 {
        self.substituted
    }

    /// Flush any encoder state (e.g. a trailing ISO-2022-JP escape) and the
    /// underlying writer, handing the writer back.
    pub fn finish(mut self) -> Result<W> {
        if let Target::Legacy(encoder) = &mut self.target {
            self.bytes.clear();
            self.substituted += encode_legacy(encoder, "", &mut self.bytes, true);
            self.inner.write_all(&self.bytes)?;
        }
        self.inner.flush()?;
        Ok(self.inner)
    }
}

impl<W: Write> CharSink for EncodingWriter<W> {
    fn write_chars(&mut self, chars: &str) -> Result<()> {
        match &mut self.target {
            Target::Utf8 => self.inner.write_all(chars.as_bytes())?,
            Target::Utf16 { big_endian } => {
                self.bytes.clear();
                for unit in chars.encode_utf16() {
                    let pair = if *big_endian {
                        unit.to_be_bytes()
                    } else {
                        unit.to_le_bytes()
                    };
                    self.bytes.extend_from_slice(&pair);
                }
                self.inner.write_all(&self.bytes)?;
            }
            Target::Legacy(encoder) => {
                self.bytes.clear();
                self.substituted += encode_legacy(encoder, chars, &mut self.bytes, false);
                self.inner.write_all(&self.bytes)?;
            }
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }
}

// Returns how many unmappable characters were substituted.
fn encode_legacy(encoder: &mut Encoder, mut src: &str, out: &mut Vec<u8>, last: bool) -> u64 {
    let mut buf = [0u8; 1024];
    let mut substituted = 0;
    loop {
        let (result, read, written) =
            encoder.encode_from_utf8_without_replacement(src, &mut buf, last);
        out.extend_from_slice(&buf[..written]);
        src = &src[read..];
        match result {
            EncoderResult::InputEmpty => break,
            EncoderResult::OutputFull => {}
            EncoderResult::Unmappable(c) => {
                tracing::trace!(?c, "unmappable character substituted");
                substituted += 1;
                let (_, _, written) =
                    encoder.encode_from_utf8_without_replacement(SUBSTITUTE, &mut buf, false);
                out.extend_from_slice(&buf[..written]);
            }
        }
    }
    substituted
}
