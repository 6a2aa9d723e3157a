use spoken_time_protocol::Time;

use crate::error::ConversionError;

pub const TIME_SEPARATOR: char = ':';

/// Parses `H:mm` / `HH:mm` into a valid [`Time`].
///
/// Each segment is a decimal integer with an optional sign. Blank input, a
/// separator count other than one and segments that do not parse as an
/// `i32` are format errors; negative values and values outside the clock
/// are range errors.
pub fn parse_time(text: &str) -> Result<Time, ConversionError> {
    if text.trim().is_empty() {
        return Err(ConversionError::format(text, "time string cannot be empty"));
    }

    let mut parts = text.split(TIME_SEPARATOR);
    let (Some(hour), Some(minute), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(ConversionError::format(text, "time must be in HH:mm format"));
    };

    let hour = parse_segment(text, hour)?;
    let minute = parse_segment(text, minute)?;
    let (Ok(hour), Ok(minute)) = (u32::try_from(hour), u32::try_from(minute)) else {
        return Err(ConversionError::range(text));
    };

    let time = Time::new(hour, minute);
    if !time.is_valid() {
        return Err(ConversionError::range(text));
    }

    Ok(time)
}

fn parse_segment(text: &str, segment: &str) -> Result<i32, ConversionError> {
    segment
        .parse::<i32>()
        .map_err(|_| ConversionError::format(text, "hour and minute must be integers"))
}
