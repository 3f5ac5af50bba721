//! Example Rust code for using this service.
//! Replace with actual code examples for your service.
//! Error handling is omitted to keep the example short;
//! production code must add failure handling before reuse.

use serde_json::json;

#[tokio::main]
async fn main() -> Result<(), reqwest::Error> {
    let response = reqwest::Client::new()
        .post("https://api.example.com/v1/service")
        .header("Authorization", "Bearer YOUR_API_KEY")
        .header("Content-Type", "application/json")
        .json(&json!({
            "input": "example input data",
            "parameters": {
                "option1": "value1",
                "option2": "value2"
            }
        }))
        .send()
        .await?;

    // Parse the JSON response and print it.
    let result: serde_json::Value = response.json().await?;
    println!("{result}");
    Ok(())
}
