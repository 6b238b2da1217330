use anyhow::Result;
use dotenvy::dotenv;
use relay_server::{RelayState, run_relay_server};
use std::net::SocketAddr;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let _guard = relay_server::logging_stdout();
    dotenv().ok();

    // OPENAI_API_KEY is read per request, so startup does not check it.
    let state = RelayState::new()?;

    let relay_addr: SocketAddr = "0.0.0.0:8788".parse()?;
    info!("relay listening on {relay_addr}");

    run_relay_server(relay_addr, state).await;

    Ok(())
}
