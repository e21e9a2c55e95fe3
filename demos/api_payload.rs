//! Normalizing an API payload between snake_case and camelCase.
//!
//! Run with: cargo run --example api_payload

use serde_recase::{camel_case_keys, snake_case_keys, Value};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // A response from a snake_case backend
    let body = r#"{
        "user_id": 42,
        "display_name": "ada_lovelace",
        "contact_info": {
            "email_address": "ada@example.com",
            "phone_numbers": ["555-1234", "555-5678"]
        },
        "recent_orders": [
            { "order_id": 1, "total_amount": 9.99 },
            { "order_id": 2, "total_amount": 14.5 }
        ]
    }"#;

    let payload: Value = serde_json::from_str(body)?;

    // Keys change, values such as "ada_lovelace" do not
    let camel = camel_case_keys(payload);
    println!("For the frontend:\n{}\n", serde_json::to_string_pretty(&camel)?);

    let snake = snake_case_keys(camel);
    println!("Back to the backend:\n{}", serde_json::to_string_pretty(&snake)?);

    Ok(())
}
