use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to read efuse dump: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
