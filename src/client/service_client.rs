use crate::models::RequestExample;
use anyhow::Result;

/// Runnable form of the documented call.
///
/// Sends exactly one request and awaits it. Status codes are not inspected
/// and nothing is retried; production code must add its own failure handling.
pub struct ServiceClient {
    api_key: String,
    client: reqwest::Client,
}

impl ServiceClient {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            client: reqwest::Client::new(),
        }
    }

    /// Sends `example` as written, with the configured key in place of its
    /// `Authorization` header.
    pub async fn call(&self, example: &RequestExample) -> Result<serde_json::Value> {
        let example = example.clone().with_api_key(&self.api_key);
        tracing::debug!(
            method = %example.method,
            endpoint = %example.endpoint,
            input = %example.body.input,
            "calling service"
        );

        let mut request = self
            .client
            .request(example.method.into(), &example.endpoint);
        for (name, value) in &example.headers {
            request = request.header(name.as_str(), value.as_str());
        }
        let response = request.json(&example.body).send().await?;

        tracing::debug!(status = %response.status(), "service responded");

        let result: serde_json::Value = response.json().await?;

        Ok(result)
    }
}
