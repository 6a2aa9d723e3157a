use crate::condition::RuleCondition;
use crate::phrase::Phrase;
use serde::{Deserialize, Serialize};

/// One phrasing pattern: a condition, the phrase it renders, and its rank.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Rule {
    /// Unique identifier for the rule. Used for reporting and deduplication.
    pub id: String,
    /// Optional human readable description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Ordering priority. Lower numbers are evaluated first.
    #[serde(default = "Rule::default_priority")]
    pub priority: u32,
    /// Whether the rule takes part in dispatch.
    #[serde(default = "Rule::default_enabled")]
    pub enabled: bool,
    /// Matching condition for the rule.
    #[serde(default = "RuleCondition::always")]
    pub condition: RuleCondition,
    /// Phrase rendered when the condition matches.
    pub phrase: Phrase,
}

impl Rule {
    pub fn new(
        id: impl Into<String>,
        priority: u32,
        condition: RuleCondition,
        phrase: Phrase,
    ) -> Self {
        Self {
            id: id.into(),
            description: None,
            priority,
            enabled: true,
            condition,
            phrase,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn default_priority() -> u32 {
        100
    }

    pub fn default_enabled() -> bool {
        true
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}
