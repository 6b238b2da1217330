pub use common::logging_stdout;
use common::proxy::chat_openai::{OPENAI_API_BASE, OpenAiForward};
use common::secret::EnvSecrets;
use std::net::SocketAddr;
use volo_http::Address;
use volo_http::server::{Router, Server};
use volo_http::utils::Extension;

pub mod error;
pub mod handlers;
pub mod relay;
pub mod tools;

/// Per-request collaborators, shared across invocations.
#[derive(Clone)]
pub struct RelayState {
    pub secrets:  EnvSecrets,
    pub upstream: OpenAiForward,
}

impl RelayState {
    pub fn new() -> error::Result<Self> {
        let http = tools::build_http_client()?;
        Ok(Self {
            secrets:  EnvSecrets::default(),
            upstream: OpenAiForward::new(OPENAI_API_BASE, http),
        })
    }
}

pub async fn run_relay_server(addr: SocketAddr, state: RelayState) {
    let app = Router::new()
        .merge(handlers::chat_completion_router())
        .layer(Extension(state));
    let addr = Address::from(addr);
    Server::new(app).run(addr).await.unwrap();
}
