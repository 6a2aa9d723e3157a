//! Rule engine rendering 24-hour clock times as British spoken English.
//!
//! A time is classified by a priority-ordered table of rules. Each rule
//! pairs a [`RuleCondition`] with the [`Phrase`] it renders; the first
//! enabled rule whose condition holds wins. The built-in table covers
//! every minute of the day, and tables loaded from YAML/JSON files are
//! checked for the same coverage before use.

mod catalog;
mod condition;
mod converter;
mod engine;
mod error;
mod loader;
mod outcome;
mod parser;
mod phrase;
mod rule;
mod service;
pub mod words;

pub use catalog::british_rules;
pub use condition::RuleCondition;
pub use converter::{BritishTimeConverter, TimeConverter};
pub use engine::RuleEngine;
pub use error::{ConversionError, RuleError};
pub use loader::{load_rules, render_rules, RuleFormat};
pub use outcome::Conversion;
pub use parser::{parse_time, TIME_SEPARATOR};
pub use phrase::Phrase;
pub use rule::Rule;
pub use service::{error_response, TimeService};

#[cfg(test)]
mod tests {
    use super::*;
    use spoken_time_protocol::Time;

    #[test]
    fn custom_rule_table_drives_conversion() {
        let mut rules = british_rules();
        for rule in rules.iter_mut().filter(|rule| rule.id == "noon") {
            rule.phrase = Phrase::fixed("midday");
        }

        let engine = RuleEngine::new(rules);
        engine.verify_total().expect("still total");

        let converter = BritishTimeConverter::with_engine(engine);
        assert_eq!(converter.convert(&Time::new(12, 0)).as_deref(), Ok("midday"));
        assert_eq!(
            converter.convert(&Time::new(12, 1)).as_deref(),
            Ok("one past twelve")
        );
    }
}
