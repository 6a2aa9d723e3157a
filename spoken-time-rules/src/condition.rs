use serde::{Deserialize, Serialize};
use spoken_time_protocol::Time;

/// Predicate half of a rule: decides whether the rule claims a time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RuleCondition {
    /// Matches every time.
    Always,
    /// All nested conditions must return true.
    All { conditions: Vec<RuleCondition> },
    /// Any of the nested conditions must return true.
    Any { conditions: Vec<RuleCondition> },
    /// Negate the outcome of the nested condition.
    Not { condition: Box<RuleCondition> },
    /// `00:00`.
    Midnight,
    /// `12:00`.
    Noon,
    /// Minute is zero, whatever the hour.
    OnTheHour,
    /// The 24-hour value equals `hour`.
    HourEquals { hour: u32 },
    /// The minute equals `minute`.
    MinuteEquals { minute: u32 },
    /// The minute lies in `from..=to`.
    MinuteBetween { from: u32, to: u32 },
    /// The minute is strictly greater than `minute`.
    MinuteAbove { minute: u32 },
}

impl RuleCondition {
    pub fn always() -> Self {
        RuleCondition::Always
    }

    pub fn evaluate(&self, time: &Time) -> bool {
        match self {
            RuleCondition::Always => true,
            RuleCondition::All { conditions } => {
                conditions.iter().all(|condition| condition.evaluate(time))
            }
            RuleCondition::Any { conditions } => {
                conditions.iter().any(|condition| condition.evaluate(time))
            }
            RuleCondition::Not { condition } => !condition.evaluate(time),
            RuleCondition::Midnight => time.is_midnight(),
            RuleCondition::Noon => time.is_noon(),
            RuleCondition::OnTheHour => time.is_on_the_hour(),
            RuleCondition::HourEquals { hour } => time.hour() == *hour,
            RuleCondition::MinuteEquals { minute } => time.minute() == *minute,
            RuleCondition::MinuteBetween { from, to } => (*from..=*to).contains(&time.minute()),
            RuleCondition::MinuteAbove { minute } => time.minute() > *minute,
        }
    }
}
