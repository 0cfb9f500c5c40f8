//! Date and time display utilities.

use std::fmt;

use jiff::{civil::Date, tz::TimeZone, Timestamp};

/// A wrapper around `Timestamp` that formats it in the system time zone.
///
/// The display format follows the pattern: `YYYY-MM-DD HH:MM:SS TZ`
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

/// An inclusive date range, shown as `start → end`.
pub struct DateSpan(pub Date, pub Date);

impl fmt::Display for DateSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.0, self.1)
    }
}

/// A calendar date with its short weekday name, e.g. `Wed 2025-02-05`.
pub struct DayLabel(pub Date);

impl fmt::Display for DayLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.0.strftime("%a"), self.0)
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn test_date_span_and_day_label() {
        let span = DateSpan(date(2025, 1, 6), date(2025, 3, 31));
        assert_eq!(span.to_string(), "2025-01-06 → 2025-03-31");
        assert_eq!(DayLabel(date(2025, 2, 5)).to_string(), "Wed 2025-02-05");
    }
}
