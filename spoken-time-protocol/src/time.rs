use std::fmt;

use serde::{Deserialize, Serialize};

pub const MIN_HOUR: u32 = 0;
pub const MAX_HOUR: u32 = 23;
pub const MIN_MINUTE: u32 = 0;
pub const MAX_MINUTE: u32 = 59;

pub const MIDNIGHT_HOUR: u32 = 0;
pub const NOON_HOUR: u32 = 12;
pub const HOURS_IN_DAY: u32 = 24;
pub const HOURS_IN_HALF_DAY: u32 = 12;
pub const MINUTES_IN_HOUR: u32 = 60;

/// A wall-clock time of day on the 24-hour clock.
///
/// Construction never validates: a `Time` may hold out-of-range components
/// and callers that render it are expected to check [`Time::is_valid`] first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Time {
    hour: u32,
    minute: u32,
}

impl Time {
    pub const fn new(hour: u32, minute: u32) -> Self {
        Self { hour, minute }
    }

    pub const fn hour(&self) -> u32 {
        self.hour
    }

    pub const fn minute(&self) -> u32 {
        self.minute
    }

    /// Whether both components are within `[0, 23]` and `[0, 59]`.
    pub fn is_valid(&self) -> bool {
        (MIN_HOUR..=MAX_HOUR).contains(&self.hour) && (MIN_MINUTE..=MAX_MINUTE).contains(&self.minute)
    }

    pub fn is_midnight(&self) -> bool {
        self.hour == MIDNIGHT_HOUR && self.minute == MIN_MINUTE
    }

    pub fn is_noon(&self) -> bool {
        self.hour == NOON_HOUR && self.minute == MIN_MINUTE
    }

    pub fn is_on_the_hour(&self) -> bool {
        self.minute == MIN_MINUTE
    }

    /// Hour folded into `1..=12`, with midnight reading as twelve.
    pub fn twelve_hour_form(&self) -> u32 {
        fold_to_twelve(self.hour)
    }

    /// Twelve-hour form of the hour that follows this one, wrapping 23 to 0.
    ///
    /// Used by phrasing that counts down to the upcoming hour ("quarter to ten").
    pub fn next_hour_twelve_hour_form(&self) -> u32 {
        fold_to_twelve((self.hour % HOURS_IN_DAY + 1) % HOURS_IN_DAY)
    }

    /// Minutes elapsed since midnight. Only meaningful for valid times; saturates otherwise.
    pub fn minute_of_day(&self) -> u32 {
        self.hour
            .saturating_mul(MINUTES_IN_HOUR)
            .saturating_add(self.minute)
    }

    /// Every valid time of the day in chronological order, `00:00` through `23:59`.
    pub fn all_day() -> impl Iterator<Item = Time> {
        (MIN_HOUR..=MAX_HOUR).flat_map(Time::all_in_hour)
    }

    /// Every minute of the given hour.
    pub fn all_in_hour(hour: u32) -> impl Iterator<Item = Time> {
        (MIN_MINUTE..=MAX_MINUTE).map(move |minute| Time::new(hour, minute))
    }
}

fn fold_to_twelve(hour: u32) -> u32 {
    match hour {
        MIDNIGHT_HOUR => HOURS_IN_HALF_DAY,
        1..=HOURS_IN_HALF_DAY => hour,
        _ => hour - HOURS_IN_HALF_DAY,
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}
