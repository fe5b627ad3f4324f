use thiserror::Error;

pub type Result<T> = std::result::Result<T, TrimError>;

#[derive(Debug, Error)]
pub enum TrimError {
    #[error("unsupported character set: {0}")]
    UnsupportedCharset(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
