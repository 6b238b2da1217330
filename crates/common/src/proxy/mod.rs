pub mod chat_openai;

use crate::data::UpstreamReply;
use crate::error::Result;
use serde_json::Value;

/// Seam between the relay and the upstream transport, so tests can
/// stand in for the network.
pub trait Forward: Send + Sync {
    fn forward(
        &self,
        api_key: &str,
        body: Value,
    ) -> impl Future<Output = Result<UpstreamReply>> + Send;
}
