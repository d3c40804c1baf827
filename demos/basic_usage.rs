//! Basic logger usage example
//!
//! Demonstrates severity routing, a `metric` alias, and muting.
//!
//! Run with: cargo run --example basic_usage

use leveled_sink_logger::prelude::*;
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== Leveled Sink Logger - Basic Usage Example ===\n");

    let console: Arc<dyn Sink> = Arc::new(ConsoleSink::default());
    let bindings = vec![
        SinkBinding::new(Severity::Debug, console.clone()),
        SinkBinding::new(Severity::Info, console.clone()),
        SinkBinding::new(Severity::Error, console.clone()),
        SinkBinding::new(Severity::Info, console.clone())
            .alias("metric")
            .with_field("isMetric", true),
    ];

    println!("1. Threshold debug - every method writes:");
    let logger = make_logger(bindings.clone(), "debug")?;
    logger.debug("This is a debug message")?;
    logger.info_with_context(
        "Request served",
        &LogContext::new().with_field("status", 200),
    )?;
    logger.error("This is an error message")?;
    logger.log_with_context(
        "metric",
        "request.duration",
        &LogContext::new().with_field("ms", 42),
    )?;

    println!("\n2. Threshold info - debug is filtered:");
    let logger = make_logger(bindings.clone(), "info")?;
    logger.debug("Debug message (hidden)")?;
    logger.info("Info message (visible)")?;

    println!("\n3. Threshold mute - nothing is written:");
    let logger = make_logger(bindings.clone(), "mute")?;
    logger.error("Error message (hidden)")?;

    println!("\n4. Invalid threshold:");
    if let Err(e) = make_logger(bindings, "blah") {
        println!("   {}", e);
    }

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
