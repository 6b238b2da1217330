use crate::error::{Error, Result};
use reqwest::Client as ReqwestClient;
use std::time::Duration;

// Connect timeout only. The overall request keeps the transport
// defaults, so slow upstream completions are not cut off.
#[inline]
pub fn build_http_client() -> Result<ReqwestClient> {
    let builder = ReqwestClient::builder();
    let timeout = 10;
    let client = builder
        .connect_timeout(Duration::from_secs(timeout))
        .build()
        .map_err(|_| Error::FailedToBuildClient)?;
    Ok(client)
}
