//! Spoken Time: converts 24-hour clock times into British spoken English.
//!
//! `"7:30"` becomes `"half past seven"`, `"6:32"` becomes `"six thirty two"`
//! and `"00:00"` becomes `"midnight"`.
//!
//! # Architecture
//!
//! The workspace is split into several crates:
//!
//! * `spoken-time-protocol`: the [`Time`] value and the request/response records
//! * `spoken-time-rules`: word tables, the rule table and the dispatching engine
//! * `spoken-time-core`: errors, configuration and tracing setup
//! * `spoken-time-cli`: the `spoken-time` command-line front end
//!
//! ```
//! use spoken_time::{BritishTimeConverter, TimeConverter};
//!
//! let converter = BritishTimeConverter::new();
//! assert_eq!(converter.parse_and_convert("9:45").unwrap(), "quarter to ten");
//! ```

pub use spoken_time_core::{config, logging, SpokenTimeConfig, SpokenTimeError};
pub use spoken_time_protocol::{ErrorResponse, Time, TimeRequest, TimeResponse};
pub use spoken_time_rules::{
    british_rules, error_response, load_rules, parse_time, render_rules, words,
    BritishTimeConverter, Conversion, ConversionError, Phrase, Rule, RuleCondition, RuleEngine,
    RuleError, RuleFormat, TimeConverter, TimeService,
};

/// Parses and renders `text` with the built-in British rule table.
pub fn speak(text: &str) -> Result<String, ConversionError> {
    BritishTimeConverter::new().parse_and_convert(text)
}
