use std::num::ParseFloatError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid vector component {token:?}: {source}")]
    ParseFloat {
        token: String,
        #[source]
        source: ParseFloatError,
    },
    #[error("expected 3 vector components, found {0}")]
    ComponentCount(usize),
    #[error("input ended before a full vector was read")]
    UnexpectedEof,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
