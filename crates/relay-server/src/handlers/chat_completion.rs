use crate::RelayState;
use crate::relay::{self, RelayRequest};
use bytes::Bytes;
use reqwest::Method;
use tracing::debug;
use volo_http::{
    response::Response,
    server::{
        IntoResponse,
        route::{Router, post},
    },
    utils::Extension,
};

async fn chat_completion_handler(
    Extension(state): Extension<RelayState>,
    body: Bytes,
) -> Response {
    debug!(len = body.len(), "inbound relay request");
    // The route only matches POST; the method router answers the rest
    // with 405 before this handler runs.
    let req = RelayRequest::new(Method::POST, body);
    let res = relay::handle(req, &state.secrets, &state.upstream).await;
    (res.status, res.body).into_response()
}

pub fn chat_completion_router() -> Router {
    Router::new().route("/v1/chat/completions", post(chat_completion_handler))
}
