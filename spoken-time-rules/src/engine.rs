use std::sync::{Arc, LazyLock};

use spoken_time_protocol::Time;
use tracing::debug;

use crate::catalog::british_rules;
use crate::error::{ConversionError, RuleError};
use crate::loader::load_rules;
use crate::outcome::Conversion;
use crate::rule::Rule;

static BRITISH: LazyLock<Arc<RuleEngine>> =
    LazyLock::new(|| Arc::new(RuleEngine::new(british_rules())));

/// Dispatcher that picks the first matching rule in priority order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RuleEngine {
    rules: Vec<Rule>,
}

impl RuleEngine {
    /// Construct an engine from the provided rules, sorting them by priority.
    pub fn new(mut rules: Vec<Rule>) -> Self {
        rules.sort_by(|a, b| a.priority.cmp(&b.priority).then(a.id.cmp(&b.id)));
        Self { rules }
    }

    /// Shared engine over the built-in British table, built on first use.
    pub fn british() -> Arc<RuleEngine> {
        Arc::clone(&BRITISH)
    }

    /// Loads rules from the given path (file or directory) and checks they cover the whole day.
    pub fn from_path(path: impl AsRef<std::path::Path>) -> Result<Self, RuleError> {
        let engine = Self::new(load_rules(path)?);
        engine.verify_total()?;
        Ok(engine)
    }

    /// Borrow the underlying rule set.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Whether the engine contains no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// The first enabled rule whose condition holds for `time`.
    pub fn classify(&self, time: &Time) -> Result<&Rule, ConversionError> {
        self.rules
            .iter()
            .filter(|rule| rule.is_enabled())
            .find(|rule| rule.condition.evaluate(time))
            .ok_or(ConversionError::NoRule(*time))
    }

    /// Classify and render a valid time.
    pub fn render(&self, time: &Time) -> Result<Conversion, ConversionError> {
        if !time.is_valid() {
            return Err(ConversionError::InvalidTime(*time));
        }

        let rule = self.classify(time)?;
        let spoken_form = rule.phrase.render(time)?;
        debug!(rule_id = %rule.id, %time, spoken = %spoken_form, "rule matched time");

        Ok(Conversion {
            time: *time,
            rule_id: rule.id.clone(),
            priority: rule.priority,
            spoken_form,
        })
    }

    /// Render every minute of the day, failing on the first time the table cannot handle.
    pub fn verify_total(&self) -> Result<(), RuleError> {
        for time in Time::all_day() {
            self.render(&time)
                .map_err(|source| RuleError::Incomplete { time, source })?;
        }
        Ok(())
    }
}
