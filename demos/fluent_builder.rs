//! Example usage of the fluent request builder against httpbin.org

use serde::{Deserialize, Serialize};
use zing::{ContentType, Http, RequestBuilder};

#[derive(Serialize, Deserialize, Debug)]
struct Order {
    product_id: String,
    quantity: i32,
}

fn main() {
    env_logger::init();

    // Plain GET with a custom header and query parameters.
    Http::get("https://httpbin.org/get")
        .header("x-api-key", "abc123")
        .append_query("page", "2")
        .append_queries([("limit", "10"), ("sort", "desc")])
        .debug()
        .send_with(|result| match result {
            Ok(response) => {
                println!("GET status: {}", response.status());
                println!("{}", response.text().unwrap_or_default());
            }
            Err(err) => eprintln!("GET failed: {err}"),
        });

    // POST with a JSON-serialized body.
    let order = Order {
        product_id: "LAPTOP_001".to_string(),
        quantity: 3,
    };
    let mut builder = Http::post("https://httpbin.org/post")
        .content_type(ContentType::ApplicationJson)
        .body(&order);
    println!("{}", builder.debug_string());
    match builder.send() {
        Ok(response) => println!("POST status: {}", response.status()),
        Err(err) => eprintln!("POST failed: {err}"),
    }

    // One builder, several requests: re-targeting keeps the timeout
    // and TLS configuration but resets the per-request state.
    let mut api = RequestBuilder::new()
        .timeout(std::time::Duration::from_secs(10))
        .insecure_skip_verify(false)
        .get("https://httpbin.org/status/202");
    if let Ok(response) = api.send() {
        println!("first: {}", response.status());
    }
    api = api.delete("https://httpbin.org/delete");
    if let Ok(response) = api.send() {
        println!("second: {}", response.status());
    }
}
