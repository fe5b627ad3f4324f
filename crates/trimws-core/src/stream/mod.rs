// crates/trimws-core/src/stream/mod.rs
//
// Byte <-> char adapters that put a concrete text encoding behind the
// engine's `CharSource` / `CharSink` endpoints.

pub mod charset;
pub mod decode;
pub mod encode;

pub use self::charset::Charset;
pub use self::decode::DecodingReader;
pub use self::encode::EncodingWriter;
