pub mod error;

pub mod config;
pub mod engine;
pub mod separator;
pub mod stream;

pub use crate::config::Config;
pub use crate::engine::{CharSink, CharSource, Counters, Engine, StrSource};
pub use crate::error::{Result, TrimError};
pub use crate::separator::{Separator, SeparatorMode};
pub use crate::stream::{Charset, DecodingReader, EncodingWriter};
