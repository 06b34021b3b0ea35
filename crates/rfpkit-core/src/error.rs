use thiserror::Error;

use crate::extract::ExtractionError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid currency code: {0}")]
    InvalidCurrency(String),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractionError),
}

pub type Result<T> = std::result::Result<T, Error>;
