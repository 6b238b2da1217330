use crate::RequestBuilder;
use crate::data::{RequestData, UpstreamReply};
use crate::error::{Error, Result};
use crate::proxy::Forward;
use faststr::FastStr;
use serde_json::Value;
use tracing::debug;

pub const OPENAI_API_BASE: &str = "https://api.openai.com/v1";

#[derive(Debug)]
pub struct OpenAiConfig<'a> {
    pub api_key:  Option<&'a str>,
    pub api_base: &'a str,
}

pub struct OpenAiClient<'a> {
    pub config: OpenAiConfig<'a>,
}

impl<'a> OpenAiClient<'a> {
    pub fn new(config: OpenAiConfig<'a>) -> Self {
        Self { config }
    }

    /// One buffered POST to the chat-completions endpoint. Any HTTP
    /// status comes back as an `UpstreamReply`; only transport failures
    /// and non-JSON reply bodies are errors.
    pub async fn chat_completions(
        &self,
        client: &reqwest::Client,
        body: Value,
    ) -> Result<UpstreamReply> {
        let request_data = prepare_chat_completions(self, body);
        let builder = request_builder(request_data, client);
        let res = builder.send().await?;
        let status = res.status();
        debug!(status = %status, "upstream replied");
        let text = res.text().await?;
        let body: Value = serde_json::from_str(&text)
            .map_err(|_| Error::InvalidResponseData(text.into(), status.as_u16()))?;
        Ok(UpstreamReply { status, body })
    }
}

fn prepare_chat_completions(client: &OpenAiClient, body: Value) -> RequestData {
    let url = client.config.api_base;
    let url = format!("{url}/chat/completions");

    let mut request_data = RequestData::new(url, body);
    if let Some(key) = client.config.api_key {
        request_data.bearer_auth(key.to_owned());
    }
    request_data
}

fn request_builder(request_data: RequestData, client: &reqwest::Client) -> RequestBuilder {
    let RequestData { url, body, headers } = request_data;
    let mut builder = client.post(url.as_str());
    for (k, v) in headers {
        builder = builder.header(k.as_str(), v.as_str());
    }
    builder.json(&body)
}

/// Production [`Forward`] implementation over a shared reqwest client.
#[derive(Debug, Clone)]
pub struct OpenAiForward {
    api_base: FastStr,
    http:     reqwest::Client,
}

impl OpenAiForward {
    pub fn new<T>(api_base: T, http: reqwest::Client) -> Self
    where
        T: Into<FastStr>,
    {
        Self {
            api_base: api_base.into(),
            http,
        }
    }
}

impl Forward for OpenAiForward {
    fn forward(
        &self,
        api_key: &str,
        body: Value,
    ) -> impl Future<Output = Result<UpstreamReply>> + Send {
        async move {
            let config = OpenAiConfig {
                api_key:  Some(api_key),
                api_base: &self.api_base,
            };
            OpenAiClient::new(config)
                .chat_completions(&self.http, body)
                .await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn prepares_the_chat_completions_request() {
        let body = json!({
            "model": "gpt-4o-mini",
            "messages": [{ "role": "user", "content": "Hi" }]
        });
        let client = OpenAiClient::new(OpenAiConfig {
            api_key:  Some("sk-test"),
            api_base: OPENAI_API_BASE,
        });

        let data = prepare_chat_completions(&client, body.clone());
        assert_eq!(
            data.url.as_str(),
            "https://api.openai.com/v1/chat/completions"
        );
        assert_eq!(
            data.headers.get("authorization").map(FastStr::as_str),
            Some("Bearer sk-test")
        );
        assert_eq!(data.body, body);
    }

    #[test]
    fn omits_the_auth_header_without_a_key() {
        let client = OpenAiClient::new(OpenAiConfig {
            api_key:  None,
            api_base: OPENAI_API_BASE,
        });
        let data = prepare_chat_completions(&client, json!({}));
        assert!(data.headers.is_empty());
    }
}
