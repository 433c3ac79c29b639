use anyhow::{Result, bail};
use serde::{Serialize, Serializer};
use std::fmt;

/// Calendar date in `YYYY-MM-DD` form.
///
/// Field order gives the derived `Ord` chronological meaning, which is what
/// the date-descending collection sort relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PubDate {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

impl PubDate {
    pub const fn from_ymd(year: u16, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Parse from strict "YYYY-MM-DD" format.
    ///
    /// Rejects any other length or separator, and any string that is not a
    /// real calendar date (e.g. `2024-02-30`).
    pub fn parse(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();

        // Exactly "YYYY-MM-DD" (10 chars)
        if bytes.len() != 10 {
            return None;
        }

        let year = parse_u16(&bytes[0..4])?;
        if bytes[4] != b'-' {
            return None;
        }
        let month = parse_u8(&bytes[5..7])?;
        if bytes[7] != b'-' {
            return None;
        }
        let day = parse_u8(&bytes[8..10])?;

        let date = Self { year, month, day };
        date.validate().ok()?;
        Some(date)
    }

    pub fn validate(&self) -> Result<()> {
        let Self { year, month, day } = *self;

        if !(1..=12).contains(&month) {
            bail!("month is invalid: {month}");
        }

        let max_days = Self::days_in_month(year, month);
        if day == 0 || day > max_days {
            bail!("day is invalid: {day}");
        }

        Ok(())
    }

    #[inline]
    fn is_leap_year(year: u16) -> bool {
        year.is_multiple_of(4) && (!year.is_multiple_of(100) || year.is_multiple_of(400))
    }

    #[inline]
    fn days_in_month(year: u16, month: u8) -> u8 {
        match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 if Self::is_leap_year(year) => 29,
            2 => 28,
            _ => 0,
        }
    }
}

impl fmt::Display for PubDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl Serialize for PubDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Parse 2-digit ASCII number
#[inline]
fn parse_u8(bytes: &[u8]) -> Option<u8> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = bytes[0].wrapping_sub(b'0');
    let d2 = bytes[1].wrapping_sub(b'0');
    if d1 > 9 || d2 > 9 {
        return None;
    }
    Some(d1 * 10 + d2)
}

/// Parse 4-digit ASCII number
#[inline]
fn parse_u16(bytes: &[u8]) -> Option<u16> {
    if bytes.len() != 4 {
        return None;
    }
    let mut result = 0u16;
    for &b in bytes {
        let d = b.wrapping_sub(b'0');
        if d > 9 {
            return None;
        }
        result = result * 10 + d as u16;
    }
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let date = PubDate::parse("2024-01-15").unwrap();
        assert_eq!(date.year, 2024);
        assert_eq!(date.month, 1);
        assert_eq!(date.day, 15);
    }

    #[test]
    fn test_parse_invalid_month() {
        assert!(PubDate::parse("2024-13-01").is_none());
        assert!(PubDate::parse("2024-00-01").is_none());
    }

    #[test]
    fn test_parse_invalid_day() {
        // Day 30 in February (leap year)
        assert!(PubDate::parse("2024-02-30").is_none());

        // Day 0
        assert!(PubDate::parse("2024-06-00").is_none());

        // Day 32 in a 31-day month
        assert!(PubDate::parse("2024-01-32").is_none());

        // Day 31 in a 30-day month
        assert!(PubDate::parse("2024-04-31").is_none());
    }

    #[test]
    fn test_parse_wrong_separator() {
        assert!(PubDate::parse("2024/01/15").is_none());
        assert!(PubDate::parse("2024.01.15").is_none());
    }

    #[test]
    fn test_parse_wrong_length() {
        assert!(PubDate::parse("2024-1-15").is_none());
        assert!(PubDate::parse("2024-01-15T00:00:00Z").is_none());
        assert!(PubDate::parse("").is_none());
    }

    #[test]
    fn test_parse_non_digit() {
        assert!(PubDate::parse("20x4-01-15").is_none());
        assert!(PubDate::parse("2024-ab-15").is_none());
    }

    #[test]
    fn test_validate_leap_year() {
        // Leap year - Feb 29 is valid
        assert!(PubDate::parse("2024-02-29").is_some());
        assert!(PubDate::parse("2000-02-29").is_some()); // divisible by 400

        // Non-leap year - Feb 29 is invalid
        assert!(PubDate::parse("2023-02-29").is_none());
        assert!(PubDate::parse("1900-02-29").is_none()); // divisible by 100 but not 400
    }

    #[test]
    fn test_ordering() {
        let a = PubDate::from_ymd(2024, 1, 1);
        let b = PubDate::from_ymd(2024, 1, 2);
        let c = PubDate::from_ymd(2024, 2, 1);
        let d = PubDate::from_ymd(2025, 1, 1);

        assert!(a < b);
        assert!(b < c);
        assert!(c < d);
    }

    #[test]
    fn test_display() {
        let date = PubDate::from_ymd(2024, 3, 7);
        assert_eq!(date.to_string(), "2024-03-07");
    }

    #[test]
    fn test_serialize_as_iso_string() {
        let date = PubDate::from_ymd(2024, 12, 25);
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2024-12-25\"");
    }
}
