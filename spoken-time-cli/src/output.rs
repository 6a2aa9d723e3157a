use colored::Colorize;
use serde::Serialize;
use spoken_time_core::SpokenTimeError;
use spoken_time_rules::{Conversion, ConversionError, RuleError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] SpokenTimeError),
    #[error(transparent)]
    Rules(#[from] RuleError),
    #[error(transparent)]
    Conversion(#[from] ConversionError),
    #[error("failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("{failed} of {total} times could not be converted")]
    Failed { failed: usize, total: usize },
}

pub fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string(value)?);
    Ok(())
}

pub fn print_failure(input: &str, err: &ConversionError) {
    eprintln!("{} {:?}: {}", "error:".red().bold(), input, err);
}

pub fn explanation_line(conversion: &Conversion) -> String {
    format!(
        "{}  {}  (rule {}, priority {})",
        conversion.time,
        conversion.spoken_form.bold(),
        conversion.rule_id.cyan(),
        conversion.priority
    )
}

pub fn table_line(conversion: &Conversion) -> String {
    format!("{}  {}", conversion.time, conversion.spoken_form)
}
