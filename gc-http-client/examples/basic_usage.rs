//! Basic usage example for the grading-criteria client
//!
//! This example demonstrates how to:
//! - Create a client with default settings
//! - Create a client with a bearer token and a request timeout
//! - Fetch the grading criteria of a course
//! - Tell validation, transport and unexpected failures apart
//!
//! Note: This example requires a running grading API. Set GC_BASE_URL to its base URL
//! and optionally GC_API_TOKEN.

use gc_http_client::{ApiError, GradingClient};
use std::time::Duration;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = std::env::var("GC_BASE_URL")?;

    // Example 1: Default client
    println!("=== Example 1: Default Client ===");
    let client = GradingClient::new(base_url.as_str())?;
    println!("✓ Client created for {}", client.transport().base_url());

    // Example 2: Token and timeout
    println!("\n=== Example 2: Custom Configuration ===");
    let mut builder = GradingClient::builder()
        .base_url(base_url.as_str())?
        .client_builder(reqwest::Client::builder().timeout(Duration::from_secs(10)));
    if let Ok(token) = std::env::var("GC_API_TOKEN") {
        builder = builder.bearer_token(&token)?;
    }
    let client = builder.build()?;
    println!("✓ Client created with 10s timeout");

    // Example 3: Validation happens before any request
    println!("\n=== Example 3: Missing Course ID ===");
    match client.fetch_grading_criteria("").await {
        Err(ApiError::Validation { message }) => println!("✓ Rejected locally: {}", message),
        other => println!("✗ Unexpected: {:?}", other),
    }

    // Example 4: Fetch
    println!("\n=== Example 4: Fetch Grading Criteria ===");
    match client.fetch_grading_criteria(42u64).await {
        Ok(items) => {
            println!("✓ {} item(s)", items.len());
            for (i, item) in items.iter().enumerate() {
                println!("  #{}: {} criteria", i + 1, item.criteria_heads.len());
            }
        }
        Err(ApiError::Transport { message, status }) => {
            println!("✗ Request failed ({:?}): {}", status, message);
        }
        Err(e) => println!("✗ {}", e),
    }

    Ok(())
}
