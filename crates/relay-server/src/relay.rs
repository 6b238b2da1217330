use crate::error::{Error, Result};
use bytes::Bytes;
use common::data::UpstreamReply;
use common::proxy::Forward;
use common::secret::SecretStore;
use faststr::FastStr;
use reqwest::{Method, StatusCode};
use serde_json::{Value, json};
use tracing::error;

/// One inbound invocation as handed over by the hosting layer.
#[derive(Debug)]
pub struct RelayRequest {
    pub method: Method,
    pub body:   Bytes,
}

impl RelayRequest {
    pub fn new(method: Method, body: Bytes) -> Self {
        Self { method, body }
    }
}

/// What goes back to the caller: a status and an already serialized
/// body.
#[derive(Debug)]
pub struct RelayResponse {
    pub status: StatusCode,
    pub body:   FastStr,
}

/// The relay contract. Non-POST methods are rejected up front; every
/// failure past that point funnels through one boundary and surfaces
/// as a 500 with a `{"error":{"message":..}}` body. Upstream-reported
/// failures are not errors: their status and body pass through as-is.
pub async fn handle<S, F>(req: RelayRequest, secrets: &S, upstream: &F) -> RelayResponse
where
    S: SecretStore,
    F: Forward,
{
    if req.method != Method::POST {
        return RelayResponse {
            status: StatusCode::METHOD_NOT_ALLOWED,
            body:   "Method Not Allowed".into(),
        };
    }

    match forward_chat(&req.body, secrets, upstream).await {
        Ok(reply) if reply.status.is_success() => RelayResponse {
            status: StatusCode::OK,
            body:   reply.body.to_string().into(),
        },
        Ok(reply) => {
            error!(status = %reply.status, body = %reply.body, "upstream reported failure");
            RelayResponse {
                status: reply.status,
                body:   reply.body.to_string().into(),
            }
        }
        Err(err) => {
            error!("relay error: {err}");
            RelayResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                body:   error_body(&err),
            }
        }
    }
}

async fn forward_chat<S, F>(raw: &[u8], secrets: &S, upstream: &F) -> Result<UpstreamReply>
where
    S: SecretStore,
    F: Forward,
{
    // The body stays opaque: parsed to prove it is JSON, reserialized
    // by the transport, never inspected.
    let body: Value = serde_json::from_slice(raw)?;
    let api_key = secrets.api_key()?;
    let reply = upstream.forward(&api_key, body).await?;
    Ok(reply)
}

fn error_body(err: &Error) -> FastStr {
    json!({ "error": { "message": err.to_string() } })
        .to_string()
        .into()
}
