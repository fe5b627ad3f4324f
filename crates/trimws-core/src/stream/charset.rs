// crates/trimws-core/src/stream/charset.rs

use encoding_rs::{Encoding, REPLACEMENT, UTF_8};

use crate::error::{Result, TrimError};

/// A named text encoding. Labels follow the WHATWG Encoding Standard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Charset {
    encoding: &'static Encoding,
}

impl Default for Charset {
    fn default() -> Self {
        Self { encoding: UTF_8 }
    }
}

impl Charset {
    pub fn for_label(label: &str) -> Result<Self> {
        match Encoding::for_label(label.trim().as_bytes()) {
            // "replacement" decodes everything to U+FFFD; not a real charset.
            Some(enc) if enc != REPLACEMENT => Ok(Self { encoding: enc }),
            _ => Err(TrimError::UnsupportedCharset(label.to_string())),
        }
    }

    /// Resolve an optional label, falling back to the default charset.
    pub fn resolve(label: Option<&str>) -> Result<Self> {
        label.map_or_else(|| Ok(Self::default()), Self::for_label)
    }

    pub fn name(&self) -> &'static str {
        self.encoding.name()
    }

    pub fn encoding(&self) -> &'static Encoding {
        self.encoding
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_case_insensitive() {
        assert_eq!(Charset::for_label("utf-8").unwrap().name(), "UTF-8");
        assert_eq!(Charset::for_label("UTF-16LE").unwrap().name(), "UTF-16LE");
        assert_eq!(Charset::for_label(" latin1 ").unwrap().name(), "windows-1252");
    }

    #[test]
    fn unknown_label_is_unsupported() {
        let err = Charset::for_label("klingon").unwrap_err();
        assert!(matches!(err, TrimError::UnsupportedCharset(ref n) if n == "klingon"));
    }

    #[test]
    fn replacement_label_is_rejected() {
        assert!(Charset::for_label("iso-2022-kr").is_err());
    }

    #[test]
    fn missing_label_defaults_to_utf8() {
        assert_eq!(Charset::resolve(None).unwrap(), Charset::default());
    }
}
