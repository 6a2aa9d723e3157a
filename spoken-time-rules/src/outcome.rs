use serde::{Deserialize, Serialize};
use spoken_time_protocol::Time;

/// Result of dispatching one time through the rule table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversion {
    pub time: Time,
    pub rule_id: String,
    pub priority: u32,
    pub spoken_form: String,
}
