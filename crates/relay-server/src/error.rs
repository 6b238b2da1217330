use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid Request Body: {0}")]
    InvalidRequestBody(#[from] serde_json::Error),

    #[error("{0}")]
    Proxy(#[from] common::error::Error),

    #[error("failed to build client")]
    FailedToBuildClient,
}

pub type Result<T> = std::result::Result<T, Error>;
