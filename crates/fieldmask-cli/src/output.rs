use anyhow::Result;
use colored::Colorize;

use crate::cli::OutputFormat;

pub fn print_list(values: &[String], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(values)?);
        }
        OutputFormat::Lines => {
            for value in values {
                println!("{value}");
            }
        }
    }
    Ok(())
}

pub fn print_error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}
