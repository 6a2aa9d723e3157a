use serde::{Deserialize, Serialize};
use spoken_time_protocol::time::MINUTES_IN_HOUR;
use spoken_time_protocol::Time;

use crate::error::ConversionError;
use crate::words::{compound_number, hour_word, minute_word};

/// Renderer half of a rule: the phrase pattern produced once a rule matches.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Phrase {
    /// Literal text, independent of the time ("midnight").
    Fixed { text: String },
    /// "<hour> o'clock".
    OClock,
    /// "<lead> past <hour>". Without a lead the minutes are spelled out.
    Past {
        #[serde(default)]
        lead: Option<String>,
    },
    /// "<lead> to <next hour>". Without a lead the minutes remaining are spelled out.
    To {
        #[serde(default)]
        lead: Option<String>,
    },
    /// "<hour> <minutes>", e.g. "six thirty two".
    HourThenMinutes,
}

impl Phrase {
    pub fn fixed(text: impl Into<String>) -> Self {
        Phrase::Fixed { text: text.into() }
    }

    pub fn past(lead: impl Into<String>) -> Self {
        Phrase::Past {
            lead: Some(lead.into()),
        }
    }

    pub fn to(lead: impl Into<String>) -> Self {
        Phrase::To {
            lead: Some(lead.into()),
        }
    }

    pub fn render(&self, time: &Time) -> Result<String, ConversionError> {
        match self {
            Phrase::Fixed { text } => Ok(text.clone()),
            Phrase::OClock => Ok(format!("{} o'clock", hour_word(time.twelve_hour_form())?)),
            Phrase::Past { lead } => {
                let lead = match lead {
                    Some(lead) => lead.as_str(),
                    None => minute_word(time.minute())?,
                };
                Ok(format!("{} past {}", lead, hour_word(time.twelve_hour_form())?))
            }
            Phrase::To { lead } => {
                let lead = match lead {
                    Some(lead) => lead.as_str(),
                    None => minute_word(MINUTES_IN_HOUR.saturating_sub(time.minute()))?,
                };
                Ok(format!(
                    "{} to {}",
                    lead,
                    hour_word(time.next_hour_twelve_hour_form())?
                ))
            }
            Phrase::HourThenMinutes => Ok(format!(
                "{} {}",
                hour_word(time.twelve_hour_form())?,
                compound_number(time.minute())?
            )),
        }
    }
}
