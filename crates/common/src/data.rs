use faststr::FastStr;
use reqwest::StatusCode;
use serde_json::Value;
use std::collections::HashMap;

/// An outbound request before it reaches the transport: target url,
/// header map, JSON body.
pub struct RequestData {
    pub url:     FastStr,
    pub headers: HashMap<FastStr, FastStr>,
    pub body:    Value,
}

impl RequestData {
    pub fn new<T>(url: T, body: Value) -> Self
    where
        T: Into<FastStr>,
    {
        Self {
            url: url.into(),
            headers: Default::default(),
            body,
        }
    }

    pub fn bearer_auth<T>(&mut self, auth: T)
    where
        T: Into<FastStr>,
    {
        self.headers.insert(
            "authorization".into(),
            format!("Bearer {}", auth.into()).into(),
        );
    }
}

/// A buffered upstream response: the status plus the JSON payload the
/// upstream sent, success or not.
#[derive(Debug, Clone)]
pub struct UpstreamReply {
    pub status: StatusCode,
    pub body:   Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_auth_sets_the_authorization_header() {
        let mut data = RequestData::new("https://api.openai.com/v1/chat/completions", Value::Null);
        data.bearer_auth("sk-test");
        assert_eq!(
            data.headers.get("authorization").map(FastStr::as_str),
            Some("Bearer sk-test")
        );
    }
}
