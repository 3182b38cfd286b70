//! Calendar-date grammar shared by exercise creation and log filtering.
//!
//! Two forms are accepted:
//! - ISO `yyyy-mm-dd` (what clients send)
//! - the display form `Www Mmm dd yyyy`, e.g. `Mon Jan 01 2024` (what is stored)
//!
//! Anything else is [`CalendarDate::Invalid`]. The weekday of the display form
//! must agree with the date.

use chrono::NaiveDate;

const ISO_FORMAT: &str = "%Y-%m-%d";
const DISPLAY_FORMAT: &str = "%a %b %d %Y";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarDate {
    Parsed(NaiveDate),
    Invalid,
}

impl CalendarDate {
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        let parsed = if has_iso_shape(input) {
            NaiveDate::parse_from_str(input, ISO_FORMAT)
        } else {
            NaiveDate::parse_from_str(input, DISPLAY_FORMAT)
        };
        parsed
            .map(CalendarDate::Parsed)
            .unwrap_or(CalendarDate::Invalid)
    }

    pub fn date(self) -> Option<NaiveDate> {
        match self {
            CalendarDate::Parsed(date) => Some(date),
            CalendarDate::Invalid => None,
        }
    }
}

/// Exactly `dddd-dd-dd`. chrono alone would also take `2024-1-2` or `+2024-01-02`.
fn has_iso_shape(input: &str) -> bool {
    let bytes = input.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Render a date the way exercise entries store it.
pub fn to_display(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parses_iso() {
        assert_eq!(CalendarDate::parse("2024-01-02"), CalendarDate::Parsed(ymd(2024, 1, 2)));
    }

    #[test]
    fn test_parses_display_form() {
        assert_eq!(
            CalendarDate::parse("Wed Jan 03 2024"),
            CalendarDate::Parsed(ymd(2024, 1, 3))
        );
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        assert_eq!(CalendarDate::parse(" 2024-01-02 "), CalendarDate::Parsed(ymd(2024, 1, 2)));
    }

    #[test]
    fn test_rejects_garbage() {
        assert_eq!(CalendarDate::parse("yesterday"), CalendarDate::Invalid);
        assert_eq!(CalendarDate::parse(""), CalendarDate::Invalid);
        assert_eq!(CalendarDate::parse("2024-13-01"), CalendarDate::Invalid);
        assert_eq!(CalendarDate::parse("2024-02-30"), CalendarDate::Invalid);
    }

    #[test]
    fn test_iso_requires_padded_four_digit_year() {
        assert_eq!(CalendarDate::parse("2024-1-2"), CalendarDate::Invalid);
        assert_eq!(CalendarDate::parse("2024-01-2"), CalendarDate::Invalid);
        assert_eq!(CalendarDate::parse("+2024-01-02"), CalendarDate::Invalid);
        assert_eq!(CalendarDate::parse("-2024-01-02"), CalendarDate::Invalid);
        assert_eq!(CalendarDate::parse("02024-01-02"), CalendarDate::Invalid);
    }

    #[test]
    fn test_rejects_wrong_weekday() {
        // Jan 1st 2024 was a Monday
        assert_eq!(CalendarDate::parse("Fri Jan 01 2024"), CalendarDate::Invalid);
    }

    #[test]
    fn test_date_accessor() {
        assert_eq!(CalendarDate::parse("2024-01-02").date(), Some(ymd(2024, 1, 2)));
        assert_eq!(CalendarDate::Invalid.date(), None);
    }

    #[test]
    fn test_to_display() {
        assert_eq!(to_display(ymd(2024, 1, 1)), "Mon Jan 01 2024");
        assert_eq!(to_display(ymd(2023, 12, 25)), "Mon Dec 25 2023");
    }

    #[test]
    fn test_display_form_parses_back() {
        let date = ymd(2024, 2, 29);
        assert_eq!(CalendarDate::parse(&to_display(date)).date(), Some(date));
    }
}
