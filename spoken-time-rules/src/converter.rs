use std::sync::Arc;

use spoken_time_protocol::Time;

use crate::engine::RuleEngine;
use crate::error::ConversionError;
use crate::outcome::Conversion;
use crate::parser::parse_time;

/// Turns clock input into its spoken form.
pub trait TimeConverter: Send + Sync {
    /// Parses a `HH:mm` string into a valid time.
    fn parse(&self, text: &str) -> Result<Time, ConversionError>;

    /// Renders a time, rejecting values outside the clock.
    fn convert(&self, time: &Time) -> Result<String, ConversionError>;

    fn parse_and_convert(&self, text: &str) -> Result<String, ConversionError> {
        let time = self.parse(text)?;
        self.convert(&time)
    }
}

/// British English converter backed by a [`RuleEngine`].
#[derive(Debug, Clone)]
pub struct BritishTimeConverter {
    engine: Arc<RuleEngine>,
}

impl BritishTimeConverter {
    /// Converter over the built-in rule table.
    pub fn new() -> Self {
        Self {
            engine: RuleEngine::british(),
        }
    }

    /// Converter over a custom table, e.g. one loaded with [`RuleEngine::from_path`].
    pub fn with_engine(engine: RuleEngine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }

    pub fn engine(&self) -> &RuleEngine {
        &self.engine
    }

    /// Like [`TimeConverter::convert`], but also reports which rule produced the phrase.
    pub fn explain(&self, time: &Time) -> Result<Conversion, ConversionError> {
        self.engine.render(time)
    }
}

impl Default for BritishTimeConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeConverter for BritishTimeConverter {
    fn parse(&self, text: &str) -> Result<Time, ConversionError> {
        parse_time(text)
    }

    fn convert(&self, time: &Time) -> Result<String, ConversionError> {
        self.engine
            .render(time)
            .map(|conversion| conversion.spoken_form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("1:00", "one o'clock")]
    #[test_case("2:05", "five past two")]
    #[test_case("3:10", "ten past three")]
    #[test_case("4:15", "quarter past four")]
    #[test_case("5:20", "twenty past five")]
    #[test_case("6:25", "twenty five past six")]
    #[test_case("6:32", "six thirty two")]
    #[test_case("7:30", "half past seven")]
    #[test_case("7:35", "twenty five to eight")]
    #[test_case("8:40", "twenty to nine")]
    #[test_case("9:45", "quarter to ten")]
    #[test_case("10:50", "ten to eleven")]
    #[test_case("11:55", "five to twelve")]
    #[test_case("00:00", "midnight")]
    #[test_case("12:00", "noon")]
    fn converts_reference_times(input: &str, expected: &str) {
        let converter = BritishTimeConverter::new();
        assert_eq!(converter.parse_and_convert(input).as_deref(), Ok(expected));
    }

    #[test]
    fn rejects_times_that_skipped_parsing() {
        let converter = BritishTimeConverter::default();
        assert_eq!(
            converter.convert(&Time::new(25, 0)),
            Err(ConversionError::InvalidTime(Time::new(25, 0)))
        );
    }

    #[test]
    fn explains_the_matching_rule() {
        let conversion = BritishTimeConverter::new()
            .explain(&Time::new(6, 38))
            .expect("explain");
        assert_eq!(conversion.rule_id, "hour_then_minutes");
        assert_eq!(conversion.priority, 8);
        assert_eq!(conversion.spoken_form, "six thirty eight");
    }
}
