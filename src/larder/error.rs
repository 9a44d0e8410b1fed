use thiserror::Error;

#[derive(Error, Debug)]
pub enum LarderError {
    #[error("Ingredient not found: {0}")]
    IngredientNotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Product lookup failed: {0}")]
    Lookup(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, LarderError>;
