use faststr::FastStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    MsgError(FastStr),

    #[error("Reqwest error: {0}")]
    ReqwestError(#[from] reqwest::Error),

    #[error("Invalid response data: {0} status: {1}")]
    InvalidResponseData(FastStr, u16),

    #[error("{0} is not set in the environment")]
    MissingApiKey(FastStr),
}

pub type Result<T> = std::result::Result<T, Error>;
