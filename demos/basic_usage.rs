// SPDX-License-Identifier: MIT OR Apache-2.0

//! Basic usage example for the sectioned configuration format.
//!
//! This example demonstrates:
//! - Loading a sectioned document from a string
//! - Retrieving values by section and key
//! - Type conversions (string, int, bool, float)
//! - Variable substitution against the environment
//!
//! To run this example:
//! ```bash
//! cargo run --example basic_usage
//! ```

use textcfg::prelude::*;

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    println!("=== textcfg: Basic Usage ===\n");

    // The substitution environment is snapshotted here, at creation time.
    let mut config = IniConfig::from_env();
    config.load_str(
        "[server]\n\
         host = localhost\n\
         port = 8080\n\
         debug = true\n\
         timeout = 30.5\n\
         \n\
         [paths]\n\
         data = ${HOME}/data\n",
    )?;

    println!("--- Example 1: String Values ---");
    match config.get("server", "host") {
        Some(value) => println!("✓ host found: {}", value.canonical()),
        None => println!("✗ host not found"),
    }

    println!("\n--- Example 2: Integer Values ---");
    match config.get("server", "port").and_then(|v| v.as_i32()) {
        Some(port) => println!("✓ port found: {} (as i32)", port),
        None => println!("✗ port missing or not numeric, using default: 3000"),
    }

    println!("\n--- Example 3: Boolean Values ---");
    let debug = config
        .get("server", "debug")
        .map(|v| v.as_bool())
        .unwrap_or(false);
    println!("✓ debug: {} (as bool)", debug);

    println!("\n--- Example 4: Float Values ---");
    match config.get("server", "timeout").and_then(|v| v.as_f64()) {
        Some(timeout) => println!("✓ timeout found: {} seconds (as f64)", timeout),
        None => println!("✗ timeout not found, using default: 10.0 seconds"),
    }

    println!("\n--- Example 5: Variable Substitution ---");
    match config.get("paths", "data") {
        Some(value) => println!("✓ data path resolved to: {}", value.canonical()),
        None => println!("✗ data path not found"),
    }

    println!("\n--- Example 6: Checking Key Existence ---");
    if config.has_key_in("server", "host") {
        println!("✓ Key 'host' exists in [server]");
    }
    if !config.has_key("some_random_key") {
        println!("✗ Key 'some_random_key' does not exist anywhere");
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
