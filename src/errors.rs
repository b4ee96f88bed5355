// errors.rs
use crate::loader::LoadError;
use thiserror::Error;

/// Errors surfaced at the HTTP boundary, either from routing
/// or from loading the two source documents.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Failed to load data: {0}")]
    Load(#[from] LoadError),

    #[error("Internal Server Error")]
    InternalError,
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::Load(_) => 502,
            ServerError::InternalError => 500,
        }
    }
}
