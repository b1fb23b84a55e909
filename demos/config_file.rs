//! Build a logger from a JSON configuration file
//!
//! Run with: cargo run --example config_file -- path/to/logger.json
//! Without an argument a built-in configuration is used.

use severity_log::prelude::*;
use severity_log::{error, info};

const DEFAULT_CONFIG: &str = r#"{
    "log_level": "info|error|fault",
    "printers": [
        {
            "type": "console",
            "formatters": [
                { "type": "timestamp", "date_format": "yyyy-MM-dd HH:mm:ss.SSS" },
                { "type": "prefix", "name": "ConfigDemo" },
                { "type": "color" }
            ]
        }
    ]
}"#;

fn main() -> Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => LoggerConfig::from_json_file(path)?,
        None => LoggerConfig::from_json_str(DEFAULT_CONFIG)?,
    };

    println!("Effective configuration:\n{}\n", config.to_json_string()?);

    let logger = Logger::from_config(&config)?;

    info!(logger, "Loaded {} printer(s)", logger.printers().len());
    logger.debug(|| "not shown with the default configuration");
    error!(logger, "Something went wrong: {}", "example error");

    Ok(())
}
