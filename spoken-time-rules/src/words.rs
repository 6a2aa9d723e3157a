//! Numeral tables used by the phrase renderers.

use crate::error::ConversionError;

const HOUR_WORDS: [&str; 13] = [
    "", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven",
    "twelve",
];

const MINUTE_WORDS: [&str; 30] = [
    "",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
    "twenty",
    "twenty one",
    "twenty two",
    "twenty three",
    "twenty four",
    "twenty five",
    "twenty six",
    "twenty seven",
    "twenty eight",
    "twenty nine",
];

const TENS_WORDS: [&str; 3] = ["thirty", "forty", "fifty"];

const COMPOUND_MIN: u32 = 30;
const COMPOUND_MAX: u32 = 59;

/// Word for a twelve-hour-form hour, `1..=12`.
pub fn hour_word(hour: u32) -> Result<&'static str, ConversionError> {
    lookup(&HOUR_WORDS, "hour", hour)
}

/// Word for a minute count, `1..=29`.
pub fn minute_word(minute: u32) -> Result<&'static str, ConversionError> {
    lookup(&MINUTE_WORDS, "minute", minute)
}

/// Spells `30..=59` as a tens word followed by the units word, if any.
pub fn compound_number(minute: u32) -> Result<String, ConversionError> {
    if !(COMPOUND_MIN..=COMPOUND_MAX).contains(&minute) {
        return Err(ConversionError::OutOfRange {
            table: "compound minute",
            value: minute,
            min: COMPOUND_MIN,
            max: COMPOUND_MAX,
        });
    }

    let tens = TENS_WORDS[((minute - COMPOUND_MIN) / 10) as usize];
    match minute % 10 {
        0 => Ok(tens.to_string()),
        units => Ok(format!("{} {}", tens, MINUTE_WORDS[units as usize])),
    }
}

fn lookup(
    table: &[&'static str],
    name: &'static str,
    value: u32,
) -> Result<&'static str, ConversionError> {
    let max = (table.len() - 1) as u32;
    if value == 0 || value > max {
        return Err(ConversionError::OutOfRange {
            table: name,
            value,
            min: 1,
            max,
        });
    }
    Ok(table[value as usize])
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(1, "one")]
    #[test_case(6, "six")]
    #[test_case(11, "eleven")]
    #[test_case(12, "twelve")]
    fn hour_words(hour: u32, expected: &str) {
        assert_eq!(hour_word(hour), Ok(expected));
    }

    #[test_case(0)]
    #[test_case(13)]
    #[test_case(24)]
    #[test_case(100)]
    fn hour_words_reject_outside_twelve_hour_form(hour: u32) {
        let err = hour_word(hour).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("hour must be between 1 and 12: {}", hour)
        );
    }

    #[test_case(1, "one")]
    #[test_case(13, "thirteen")]
    #[test_case(20, "twenty")]
    #[test_case(21, "twenty one")]
    #[test_case(29, "twenty nine")]
    fn minute_words(minute: u32, expected: &str) {
        assert_eq!(minute_word(minute), Ok(expected));
    }

    #[test_case(0)]
    #[test_case(30)]
    #[test_case(59)]
    fn minute_words_reject_outside_table(minute: u32) {
        assert!(matches!(
            minute_word(minute),
            Err(ConversionError::OutOfRange { min: 1, max: 29, .. })
        ));
    }

    #[test_case(30, "thirty")]
    #[test_case(32, "thirty two")]
    #[test_case(39, "thirty nine")]
    #[test_case(40, "forty")]
    #[test_case(47, "forty seven")]
    #[test_case(50, "fifty")]
    #[test_case(59, "fifty nine")]
    fn compound_numbers(minute: u32, expected: &str) {
        assert_eq!(compound_number(minute).as_deref(), Ok(expected));
    }

    #[test_case(0)]
    #[test_case(29)]
    #[test_case(60)]
    fn compound_numbers_reject_outside_upper_half(minute: u32) {
        assert!(compound_number(minute).is_err());
    }
}
