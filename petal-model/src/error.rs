use std::fmt::{self, Display};

/// Errors produced by model constructors and validation routines.
#[derive(Debug)]
pub enum ModelError {
    /// A slide deck failed structural validation.
    InvalidDeck(String),
    /// A catalog failed structural validation.
    InvalidCatalog(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::InvalidDeck(msg) => write!(f, "invalid slide deck: {msg}"),
            ModelError::InvalidCatalog(msg) => {
                write!(f, "invalid catalog: {msg}")
            }
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;
