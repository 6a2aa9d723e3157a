//! The built-in British English rule table.

use crate::condition::RuleCondition;
use crate::phrase::Phrase;
use crate::rule::Rule;

pub const QUARTER_PAST: u32 = 15;
pub const HALF_PAST: u32 = 30;
pub const QUARTER_TO: u32 = 45;

/// Last minute that is phrased as "past" the current hour.
pub const PAST_THRESHOLD: u32 = 30;

/// Minutes read as "<hour> <minutes>" instead of counting down to the next hour.
pub const HOUR_THEN_MINUTES_BANDS: [(u32, u32); 2] = [(32, 34), (37, 39)];

/// The nine rules, in priority order. Narrow exact matches come first so they
/// win over the ranged "past", "hour then minutes" and "to" rules.
pub fn british_rules() -> Vec<Rule> {
    vec![
        Rule::new("midnight", 1, RuleCondition::Midnight, Phrase::fixed("midnight")),
        Rule::new("noon", 2, RuleCondition::Noon, Phrase::fixed("noon")),
        Rule::new("o_clock", 3, RuleCondition::OnTheHour, Phrase::OClock),
        Rule::new(
            "quarter_past",
            4,
            RuleCondition::MinuteEquals {
                minute: QUARTER_PAST,
            },
            Phrase::past("quarter"),
        ),
        Rule::new(
            "half_past",
            5,
            RuleCondition::MinuteEquals { minute: HALF_PAST },
            Phrase::past("half"),
        ),
        Rule::new(
            "quarter_to",
            6,
            RuleCondition::MinuteEquals { minute: QUARTER_TO },
            Phrase::to("quarter"),
        ),
        Rule::new(
            "minutes_past",
            7,
            RuleCondition::MinuteBetween {
                from: 1,
                to: PAST_THRESHOLD,
            },
            Phrase::Past { lead: None },
        )
        .with_description("1-30 minutes, after quarter and half past have been claimed"),
        Rule::new(
            "hour_then_minutes",
            8,
            RuleCondition::Any {
                conditions: HOUR_THEN_MINUTES_BANDS
                    .iter()
                    .map(|&(from, to)| RuleCondition::MinuteBetween { from, to })
                    .collect(),
            },
            Phrase::HourThenMinutes,
        )
        .with_description("32-34 and 37-39 are read as the hour followed by the minutes"),
        Rule::new(
            "minutes_to",
            9,
            RuleCondition::MinuteAbove {
                minute: PAST_THRESHOLD,
            },
            Phrase::To { lead: None },
        )
        .with_description("every remaining minute counts down to the next hour"),
    ]
}
