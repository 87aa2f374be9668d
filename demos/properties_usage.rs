// SPDX-License-Identifier: MIT OR Apache-2.0

//! Usage example for the flat properties format.
//!
//! This example demonstrates:
//! - Loading a flat document from a string
//! - Array and map value decoding
//! - Mutating the document and writing it back out
//!
//! To run this example:
//! ```bash
//! cargo run --example properties_usage
//! ```

use textcfg::prelude::*;

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    println!("=== textcfg: Properties Usage ===\n");

    let mut config = PropertiesConfig::new();
    config.load_str(
        "name = demo\n\
         retries = 3\n\
         hosts = [\"alpha\",\"beta\",\"gamma\"]\n\
         limits = {cpu:4,memory:2048}\n",
    )?;

    println!("--- Example 1: Plain Values ---");
    println!("name: {}", config.get("name").map(Value::canonical).unwrap_or_default());
    println!("retries: {:?}", config.get("retries").and_then(Value::as_i64));

    println!("\n--- Example 2: Array Values ---");
    match config.get_array("hosts") {
        Some(hosts) => {
            for host in hosts {
                println!("  host: {}", host);
            }
        }
        None => println!("✗ hosts is not an array"),
    }

    println!("\n--- Example 3: Map Values ---");
    if let Some(limits) = config.get_map("limits") {
        for (key, value) in &limits {
            println!("  {}: {}", key, value);
        }
    }

    println!("\n--- Example 4: Mutation and Write-Back ---");
    config.add("created", "2024-01-01");
    config.replace("retries", 5i64);
    config.remove("name");

    let mut out = Vec::new();
    config.write(&mut out, Some(" regenerated by properties_usage"))?;
    println!("{}", String::from_utf8_lossy(&out));

    println!("=== Example Complete ===");
    Ok(())
}
