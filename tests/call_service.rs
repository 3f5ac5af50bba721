use serde_json::json;
use service_example::client::ServiceClient;
use service_example::models::{Method, RequestExample};
use std::net::SocketAddr;
use warp::Filter;
use warp::http::StatusCode;

fn spawn_echo_service() -> SocketAddr {
    let echo = warp::path!("v1" / "service")
        .and(warp::method())
        .and(warp::header::<String>("authorization"))
        .and(warp::header::<String>("content-type"))
        .and(warp::body::json())
        .map(
            |method: warp::http::Method, auth: String, content_type: String, body: serde_json::Value| {
                warp::reply::json(&json!({
                    "method": method.as_str(),
                    "authorization": auth,
                    "content_type": content_type,
                    "echo": body,
                }))
            },
        );
    let failing = warp::path!("v1" / "failing").and(warp::post()).map(|| {
        warp::reply::with_status(
            warp::reply::json(&json!({ "error": "boom" })),
            StatusCode::INTERNAL_SERVER_ERROR,
        )
    });
    let plain = warp::path!("v1" / "plain")
        .and(warp::post())
        .map(|| "not json");

    let (addr, server) =
        warp::serve(echo.or(failing).or(plain)).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);
    addr
}

fn example_for(addr: SocketAddr, path: &str) -> RequestExample {
    RequestExample::placeholder().with_endpoint(format!("http://{}/v1/{}", addr, path))
}

fn client() -> ServiceClient {
    ServiceClient::new("YOUR_TEST_KEY".to_string())
}

#[tokio::test]
async fn sends_documented_request_and_parses_response() {
    let addr = spawn_echo_service();
    let result = client()
        .call(&example_for(addr, "service"))
        .await
        .unwrap();

    assert_eq!(result["method"], "POST");
    assert_eq!(result["authorization"], "Bearer YOUR_TEST_KEY");
    assert_eq!(result["content_type"], "application/json");
    assert_eq!(
        result["echo"],
        json!({
            "input": "example input data",
            "parameters": { "option1": "value1", "option2": "value2" }
        })
    );
}

#[tokio::test]
async fn method_and_body_come_from_the_example() {
    let addr = spawn_echo_service();
    let mut body = RequestExample::placeholder().body;
    body.input = "updated".to_string();
    let mut example = example_for(addr, "service").with_body(body);
    example.method = Method::Put;

    let result = client().call(&example).await.unwrap();

    assert_eq!(result["method"], "PUT");
    assert_eq!(result["echo"]["input"], "updated");
}

#[tokio::test]
async fn non_success_status_is_not_inspected() {
    let addr = spawn_echo_service();
    let result = client()
        .call(&example_for(addr, "failing"))
        .await
        .unwrap();

    assert_eq!(result, json!({ "error": "boom" }));
}

#[tokio::test]
async fn malformed_body_surfaces_as_error() {
    let addr = spawn_echo_service();
    let result = client().call(&example_for(addr, "plain")).await;

    assert!(result.is_err());
}

#[tokio::test]
async fn unreachable_endpoint_surfaces_as_error() {
    let example = RequestExample::placeholder().with_endpoint("http://127.0.0.1:9/v1/service");
    assert!(client().call(&example).await.is_err());
}
