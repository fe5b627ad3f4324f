// crates/trimws-core/src/stream/decode.rs

use std::io::{ErrorKind, Read};

use encoding_rs::{CoderResult, Decoder};

use crate::engine::CharSource;
use crate::error::Result;
use crate::stream::Charset;

const CHUNK: usize = 8 * 1024;

/// Incrementally decodes a byte stream into `char`s.
///
/// Malformed sequences come out as U+FFFD. A leading BOM is not sniffed or
/// removed; it reaches the engine as U+FEFF like any other text.
pub struct DecodingReader<R> {
    inner: R,
    decoder: Decoder,
    bytes: Box<[u8]>,
    text: String,
    pos: usize,
    done: bool,
}

impl<R: Read> DecodingReader<R> {
    pub fn new(inner: R, charset: Charset) -> Self {
        Self {
            inner,
            decoder: charset.encoding().new_decoder_without_bom_handling(),
            bytes: vec![0u8; CHUNK].into_boxed_slice(),
            text: String::with_capacity(CHUNK),
            pos: 0,
            done: false,
        }
    }

    fn fill(&mut self) -> Result<()> {
        self.text.clear();
        self.pos = 0;

        let n = loop {
            match self.inner.read(&mut self.bytes) {
                Ok(n) => break n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        };
        let last = n == 0;

        let mut input = &self.bytes[..n];
        loop {
            let need = self
                .decoder
                .max_utf8_buffer_length(input.len())
                .unwrap_or(input.len() * 3 + 16);
            self.text.reserve(need);
            let (result, read, _replaced) = self.decoder.decode_to_string(input, &mut self.text, last);
            input = &input[read..];
            match result {
                CoderResult::InputEmpty => break,
                CoderResult::OutputFull => continue,
            }
        }

        if last {
            self.done = true;
        }
        Ok(())
    }
}

impl<R: Read> CharSource for DecodingReader<R> {
    fn next_char(&mut self) -> Result<Option<char>> {
        loop {
            if let Some(c) = self.text[self.pos..].chars().next() {
                self.pos += c.len_utf8();
                return Ok(Some(c));
            }
            if self.done {
                return Ok(None);
            }
            self.fill()?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn decode_all(bytes: &[u8], label: &str) -> String {
        let cs = Charset::for_label(label).unwrap();
        let mut r = DecodingReader::new(Cursor::new(bytes.to_vec()), cs);
        let mut out = String::new();
        while let Some(c) = r.next_char().unwrap() {
            out.push(c);
        }
        out
    }

    #[test]
    fn decodes_utf16le_ideographic_space() {
        assert_eq!(decode_all(&[0x61, 0x00, 0x00, 0x30], "utf-16le"), "a\u{3000}");
    }

    #[test]
    fn keeps_bom_as_text() {
        assert_eq!(decode_all(b"\xEF\xBB\xBFx", "utf-8"), "\u{feff}x");
    }

    #[test]
    fn malformed_input_becomes_replacement_char() {
        assert_eq!(decode_all(b"a\xFFb", "utf-8"), "a\u{fffd}b");
    }

    #[test]
    fn decodes_across_chunk_boundaries() {
        let mut bytes = vec![b'x'; CHUNK - 1];
        bytes.extend_from_slice("é".as_bytes());
        let out = decode_all(&bytes, "utf-8");
        assert_eq!(out.chars().count(), CHUNK);
        assert!(out.ends_with('é'));
    }

    #[test]
    fn decodes_single_byte_charset() {
        assert_eq!(decode_all(b"caf\xE9", "windows-1252"), "café");
    }
}
