//! Basic logger usage example
//!
//! Demonstrates a console printer and an OS printer sharing one formatter
//! chain, set-based filtering and runtime filter updates.
//!
//! Run with: cargo run --example basic_usage

use severity_log::formatters::{PrefixLogFormatter, TimestampLogFormatter};
use severity_log::prelude::*;
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== Severity Log - Basic Usage Example ===\n");

    let chain = FormatterChain::empty()
        .with(TimestampLogFormatter::new("dd/MM/yyyy HH:mm:ss"))
        .with(PrefixLogFormatter::new("BasicUsage"));

    let logger = Logger::builder()
        .log_level(LogLevel::ALL)
        .printer(ConsolePrinter::new(chain.clone()))
        .printer(OsPrinter::new("com.example.basic", "demo", chain))
        .build();

    println!("1. Logging at every level:");
    logger.debug(|| "This is a debug message");
    logger.info(|| "This is an info message");
    logger.error(|| "This is an error message");
    logger.fault(|| "This is a fault message");

    println!("\n2. Filtering with a set of levels (debug|error):");
    logger.set_log_level(LogLevel::DEBUG | LogLevel::ERROR);
    logger.debug(|| "Debug message (visible)");
    logger.info(|| "Info message (hidden)");
    logger.error(|| "Error message (visible)");
    logger.fault(|| "Fault message (hidden)");

    println!("\n3. Adding a level at runtime:");
    logger.update_log_level(|level| level | LogLevel::INFO);
    logger.info(|| format!("Info is back, filter is now '{}'", logger.log_level()));

    let shared = Arc::new(logger);
    let workers: Vec<_> = (0..3)
        .map(|id| {
            let logger = Arc::clone(&shared);
            std::thread::spawn(move || logger.info(|| format!("Hello from worker {}", id)))
        })
        .collect();
    for worker in workers {
        worker.join().expect("worker panicked");
    }

    let metrics = shared.metrics();
    println!(
        "\nDispatched: {}, filtered: {}, failed writes: {}",
        metrics.dispatched_count(),
        metrics.filtered_count(),
        metrics.failed_write_count()
    );

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
