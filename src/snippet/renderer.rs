use super::Language;
use super::literal::{self, LiteralStyle};
use crate::models::RequestExample;
use anyhow::Result;
use serde_json::Value;

const REPLACE_LINE: &str = "Replace with actual code examples for your service.";
const NOTE_LINES: [&str; 2] = [
    "Error handling is omitted to keep the example short;",
    "production code must add failure handling before reuse.",
];

pub fn file_name(language: Language) -> String {
    format!("code-example.{}", language.extension())
}

/// Renders the straight-line call for `example` in `language`.
pub fn render(example: &RequestExample, language: Language) -> Result<String> {
    let body = serde_json::to_value(&example.body)?;
    Ok(match language {
        Language::JavaScript => render_javascript(example, &body),
        Language::Python => render_python(example, &body),
        Language::Curl => render_curl(example, &body),
        Language::Rust => render_rust(example, &body),
    })
}

fn header_lines(language: Language) -> Vec<String> {
    let mut lines = vec![
        format!("Example {} code for using this service.", language.label()),
        REPLACE_LINE.to_string(),
    ];
    lines.extend(NOTE_LINES.iter().map(|line| line.to_string()));
    lines
}

fn render_javascript(example: &RequestExample, body: &Value) -> String {
    let q = |s: &str| literal::quote(s, LiteralStyle::JavaScript);
    let mut out = String::from("/**\n");
    for line in header_lines(Language::JavaScript) {
        out.push_str(&format!(" * {}\n", line));
    }
    out.push_str(" */\n\n");

    out.push_str("async function callService() {\n");
    out.push_str(&format!(
        "  const response = await fetch({}, {{\n",
        q(&example.endpoint)
    ));
    out.push_str(&format!("    method: {},\n", q(example.method.as_str())));
    out.push_str("    headers: {\n");
    let headers: Vec<String> = example
        .headers
        .iter()
        .map(|(name, value)| format!("      {}: {}", q(name), q(value)))
        .collect();
    out.push_str(&headers.join(",\n"));
    out.push_str("\n    },\n");
    out.push_str(&format!(
        "    body: JSON.stringify({})\n",
        literal::render_value(body, LiteralStyle::JavaScript, "    ", "  ")
    ));
    out.push_str("  });\n\n");
    out.push_str(&format!("  // {}\n", example.response_handling));
    out.push_str("  const result = await response.json();\n");
    out.push_str("  console.log(result);\n");
    out.push_str("}\n\n");
    out.push_str("callService();\n");
    out
}

fn render_python(example: &RequestExample, body: &Value) -> String {
    let q = |s: &str| literal::quote(s, LiteralStyle::Python);
    let mut out = String::from("\"\"\"\n");
    for line in header_lines(Language::Python) {
        out.push_str(&line);
        out.push('\n');
    }
    out.push_str("\"\"\"\n\n");

    out.push_str("import requests\n\n");
    out.push_str("# Example API call\n");
    out.push_str(&format!(
        "response = requests.{}(\n",
        example.method.as_str().to_ascii_lowercase()
    ));
    out.push_str(&format!("    {},\n", q(&example.endpoint)));
    out.push_str("    headers={\n");
    let headers: Vec<String> = example
        .headers
        .iter()
        .map(|(name, value)| format!("        {}: {}", q(name), q(value)))
        .collect();
    out.push_str(&headers.join(",\n"));
    out.push_str("\n    },\n");
    out.push_str(&format!(
        "    json={}\n",
        literal::render_value(body, LiteralStyle::Python, "    ", "    ")
    ));
    out.push_str(")\n\n");
    out.push_str(&format!("# {}\n", example.response_handling));
    out.push_str("result = response.json()\n");
    out.push_str("print(result)\n");
    out
}

fn render_curl(example: &RequestExample, body: &Value) -> String {
    let mut out = String::from("#!/bin/sh\n");
    for line in header_lines(Language::Curl) {
        out.push_str(&format!("# {}\n", line));
    }
    out.push_str(&format!(
        "# {} curl writes the response body to stdout.\n\n",
        example.response_handling
    ));

    out.push_str(&format!(
        "curl -X {} {} \\\n",
        example.method.as_str(),
        literal::shell_single_quoted(&example.endpoint)
    ));
    for (name, value) in &example.headers {
        out.push_str(&format!(
            "  -H {} \\\n",
            literal::shell_single_quoted(&format!("{}: {}", name, value))
        ));
    }
    let body = literal::render_value(body, LiteralStyle::Json, "  ", "  ");
    out.push_str(&format!("  -d {}\n", literal::shell_single_quoted(&body)));
    out
}

fn render_rust(example: &RequestExample, body: &Value) -> String {
    let q = |s: &str| literal::quote(s, LiteralStyle::RustJson);
    let mut out = String::new();
    for line in header_lines(Language::Rust) {
        out.push_str(&format!("//! {}\n", line));
    }
    out.push('\n');

    out.push_str("use serde_json::json;\n\n");
    out.push_str("#[tokio::main]\n");
    out.push_str("async fn main() -> Result<(), reqwest::Error> {\n");
    out.push_str("    let response = reqwest::Client::new()\n");
    out.push_str(&format!(
        "        .{}({})\n",
        example.method.as_str().to_ascii_lowercase(),
        q(&example.endpoint)
    ));
    for (name, value) in &example.headers {
        out.push_str(&format!("        .header({}, {})\n", q(name), q(value)));
    }
    out.push_str(&format!(
        "        .json(&json!({}))\n",
        literal::render_value(body, LiteralStyle::RustJson, "        ", "    ")
    ));
    out.push_str("        .send()\n");
    out.push_str("        .await?;\n\n");
    out.push_str(&format!("    // {}\n", example.response_handling));
    out.push_str("    let result: serde_json::Value = response.json().await?;\n");
    out.push_str("    println!(\"{result}\");\n");
    out.push_str("    Ok(())\n");
    out.push_str("}\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn javascript_matches_published_example() {
        let rendered = render(&RequestExample::placeholder(), Language::JavaScript).unwrap();
        let expected = "\
/**
 * Example JavaScript code for using this service.
 * Replace with actual code examples for your service.
 * Error handling is omitted to keep the example short;
 * production code must add failure handling before reuse.
 */

async function callService() {
  const response = await fetch('https://api.example.com/v1/service', {
    method: 'POST',
    headers: {
      'Authorization': 'Bearer YOUR_API_KEY',
      'Content-Type': 'application/json'
    },
    body: JSON.stringify({
      input: 'example input data',
      parameters: {
        option1: 'value1',
        option2: 'value2'
      }
    })
  });

  // Parse the JSON response and print it.
  const result = await response.json();
  console.log(result);
}

callService();
";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn python_matches_published_example() {
        let rendered = render(&RequestExample::placeholder(), Language::Python).unwrap();
        let expected = "\
\"\"\"
Example Python code for using this service.
Replace with actual code examples for your service.
Error handling is omitted to keep the example short;
production code must add failure handling before reuse.
\"\"\"

import requests

# Example API call
response = requests.post(
    \"https://api.example.com/v1/service\",
    headers={
        \"Authorization\": \"Bearer YOUR_API_KEY\",
        \"Content-Type\": \"application/json\"
    },
    json={
        \"input\": \"example input data\",
        \"parameters\": {
            \"option1\": \"value1\",
            \"option2\": \"value2\"
        }
    }
)

# Parse the JSON response and print it.
result = response.json()
print(result)
";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn curl_body_is_valid_json() {
        let rendered = render(&RequestExample::placeholder(), Language::Curl).unwrap();
        assert!(rendered.contains("curl -X POST 'https://api.example.com/v1/service' \\\n"));
        assert!(rendered.contains("  -H 'Authorization: Bearer YOUR_API_KEY' \\\n"));

        let start = rendered.find("-d '").unwrap() + 4;
        let end = rendered.rfind('\'').unwrap();
        let body: serde_json::Value = serde_json::from_str(&rendered[start..end]).unwrap();
        assert_eq!(body, serde_json::to_value(RequestExample::placeholder().body).unwrap());
    }

    #[test]
    fn rust_uses_method_and_headers() {
        let example = RequestExample::placeholder().with_endpoint("http://localhost:8080/run");
        let rendered = render(&example, Language::Rust).unwrap();
        assert!(rendered.contains("        .post(\"http://localhost:8080/run\")\n"));
        assert!(rendered.contains("        .header(\"Content-Type\", \"application/json\")\n"));
        assert!(rendered.contains("            \"input\": \"example input data\",\n"));
        assert!(rendered.ends_with("    Ok(())\n}\n"));
    }

    #[test]
    fn every_language_labels_the_missing_error_handling() {
        for lang in Language::all() {
            let rendered = render(&RequestExample::placeholder(), lang).unwrap();
            assert!(rendered.contains("failure handling"), "{}", lang);
        }
    }

    #[test]
    fn file_names_follow_extension() {
        assert_eq!(file_name(Language::Python), "code-example.py");
        assert_eq!(file_name(Language::Curl), "code-example.sh");
    }
}
