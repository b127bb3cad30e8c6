//! Errors that can happen when interacting with `hitomi.la`.

use thiserror::Error;

pub use crate::stdx::error::MissingMarker;

#[allow(missing_docs)]
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    ClientError(#[from] ClientError),
    #[error(transparent)]
    GalleryError(#[from] GalleryError),
}

#[allow(missing_docs)]
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Unexpected status code `{0}` when fetching `{1}`")]
    UnexpectedStatus(u16, String),
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl From<reqwest::Error> for ClientError {
    fn from(error: reqwest::Error) -> Self {
        Self::Unexpected(anyhow::Error::from(error))
    }
}

#[allow(missing_docs)]
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum GalleryError {
    #[error(transparent)]
    ClientError(#[from] ClientError),
    #[error("{0}")]
    InvalidUrl(&'static str),
    /// A marker the page is expected to contain was not found.
    #[error(transparent)]
    StructuralMismatch(#[from] MissingMarker),
}

impl From<reqwest::Error> for GalleryError {
    fn from(error: reqwest::Error) -> Self {
        Self::ClientError(ClientError::Unexpected(anyhow::Error::from(error)))
    }
}
