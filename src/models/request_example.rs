use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_ENDPOINT: &str = "https://api.example.com/v1/service";
pub const PLACEHOLDER_API_KEY: &str = "YOUR_API_KEY";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Method::Get),
            "POST" => Ok(Method::Post),
            "PUT" => Ok(Method::Put),
            "PATCH" => Ok(Method::Patch),
            "DELETE" => Ok(Method::Delete),
            other => Err(anyhow::anyhow!("unsupported HTTP method: {}", other)),
        }
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Body sent to the service: free-form input text plus named options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServicePayload {
    pub input: String,
    pub parameters: BTreeMap<String, serde_json::Value>,
}

impl ServicePayload {
    pub fn placeholder() -> Self {
        let mut parameters = BTreeMap::new();
        parameters.insert("option1".to_string(), "value1".into());
        parameters.insert("option2".to_string(), "value2".into());

        Self {
            input: "example input data".to_string(),
            parameters,
        }
    }
}

/// Everything a snippet needs to show one call to the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestExample {
    pub endpoint: String,
    pub method: Method,
    pub headers: BTreeMap<String, String>,
    pub body: ServicePayload,
    pub response_handling: String,
}

impl RequestExample {
    pub fn placeholder() -> Self {
        let mut headers = BTreeMap::new();
        headers.insert(
            "Authorization".to_string(),
            format!("Bearer {}", PLACEHOLDER_API_KEY),
        );
        headers.insert("Content-Type".to_string(), "application/json".to_string());

        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            method: Method::Post,
            headers,
            body: ServicePayload::placeholder(),
            response_handling: "Parse the JSON response and print it.".to_string(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_api_key(mut self, api_key: &str) -> Self {
        self.headers
            .insert("Authorization".to_string(), format!("Bearer {}", api_key));
        self
    }

    pub fn with_body(mut self, body: ServicePayload) -> Self {
        self.body = body;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_matches_documented_call() {
        let example = RequestExample::placeholder();

        assert_eq!(example.method, Method::Post);
        assert_eq!(example.endpoint, "https://api.example.com/v1/service");
        assert_eq!(example.headers["Content-Type"], "application/json");
        assert_eq!(example.headers["Authorization"], "Bearer YOUR_API_KEY");
        assert_eq!(example.body.input, "example input data");
        assert_eq!(example.body.parameters.len(), 2);
    }

    #[test]
    fn method_parses_case_insensitively() {
        assert_eq!("post".parse::<Method>().unwrap(), Method::Post);
        assert_eq!("Delete".parse::<Method>().unwrap(), Method::Delete);
        assert!("TRACE".parse::<Method>().is_err());
        assert_eq!(reqwest::Method::from(Method::Patch), reqwest::Method::PATCH);
    }

    #[test]
    fn api_key_override_replaces_header() {
        let example = RequestExample::placeholder().with_api_key("YOUR_OTHER_KEY");
        assert_eq!(example.headers["Authorization"], "Bearer YOUR_OTHER_KEY");
        assert_eq!(example.headers.len(), 2);
    }

    #[test]
    fn payload_serializes_with_expected_field_names() {
        let value = serde_json::to_value(ServicePayload::placeholder()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "input": "example input data",
                "parameters": { "option1": "value1", "option2": "value2" }
            })
        );
    }
}
