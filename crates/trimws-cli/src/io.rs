// crates/trimws-cli/src/io.rs

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};

use anyhow::Context;
use trimws_core::{Charset, DecodingReader, EncodingWriter};

use crate::plan::Endpoint;

pub type Source = DecodingReader<Box<dyn Read>>;
pub type Sink = EncodingWriter<Box<dyn Write>>;

pub fn open_source(endpoint: &Endpoint, charset: Charset) -> anyhow::Result<Source> {
    let inner: Box<dyn Read> = match endpoint {
        Endpoint::Std => Box::new(std::io::stdin().lock()),
        Endpoint::File(path) => {
            let f = File::open(path).with_context(|| format!("open input: {}", path.display()))?;
            Box::new(BufReader::new(f))
        }
    };
    Ok(DecodingReader::new(inner, charset))
}

pub fn open_sink(endpoint: &Endpoint, charset: Charset) -> anyhow::Result<Sink> {
    let inner: Box<dyn Write> = match endpoint {
        Endpoint::Std => Box::new(BufWriter::new(std::io::stdout().lock())),
        Endpoint::File(path) => {
            let f =
                File::create(path).with_context(|| format!("create output: {}", path.display()))?;
            Box::new(BufWriter::new(f))
        }
    };
    Ok(EncodingWriter::new(inner, charset))
}

/// True when both endpoints name the same existing file. Trimming a file
/// onto itself would truncate it before it is read.
pub fn same_file(a: &Endpoint, b: &Endpoint) -> bool {
    match (a, b) {
        (Endpoint::File(pa), Endpoint::File(pb)) => {
            match (std::fs::canonicalize(pa), std::fs::canonicalize(pb)) {
                (Ok(ca), Ok(cb)) => ca == cb,
                _ => false,
            }
        }
        _ => false,
    }
}
