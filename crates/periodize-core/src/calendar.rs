//! Calendar arithmetic on civil dates.
//!
//! Weekday indices follow the ISO convention everywhere in the crate:
//! Monday = 1 through Sunday = 7. Indices are always derived from the actual
//! calendar date, never from an iteration slot, so the default training-day
//! tables line up with real weekdays whatever day a plan starts on.

use jiff::{civil::Date, ToSpan};

pub const MONDAY: u8 = 1;
pub const TUESDAY: u8 = 2;
pub const WEDNESDAY: u8 = 3;
pub const THURSDAY: u8 = 4;
pub const FRIDAY: u8 = 5;
pub const SATURDAY: u8 = 6;
pub const SUNDAY: u8 = 7;

/// Default training weekdays keyed by weekly frequency.
pub fn default_training_days(days_per_week: u8) -> &'static [u8] {
    match days_per_week {
        1 => &[MONDAY],
        2 => &[MONDAY, THURSDAY],
        3 => &[MONDAY, WEDNESDAY, FRIDAY],
        4 => &[MONDAY, TUESDAY, THURSDAY, FRIDAY],
        5 => &[MONDAY, TUESDAY, WEDNESDAY, THURSDAY, FRIDAY],
        6 => &[MONDAY, TUESDAY, WEDNESDAY, THURSDAY, FRIDAY, SATURDAY],
        7 => &[
            MONDAY, TUESDAY, WEDNESDAY, THURSDAY, FRIDAY, SATURDAY, SUNDAY,
        ],
        _ => &[MONDAY, WEDNESDAY, FRIDAY],
    }
}

/// ISO weekday index of `date`.
pub fn weekday_index(date: Date) -> u8 {
    date.weekday().to_monday_one_offset() as u8
}

/// Short English name for an ISO weekday index.
pub fn weekday_name(index: u8) -> &'static str {
    match index {
        MONDAY => "Mon",
        TUESDAY => "Tue",
        WEDNESDAY => "Wed",
        THURSDAY => "Thu",
        FRIDAY => "Fri",
        SATURDAY => "Sat",
        SUNDAY => "Sun",
        _ => "?",
    }
}

/// `date` shifted by `days`, or `None` when the result leaves the supported
/// calendar range.
pub fn add_days(date: Date, days: i64) -> Option<Date> {
    date.checked_add(days.days()).ok()
}

/// `date` shifted by whole weeks.
pub fn add_weeks(date: Date, weeks: i64) -> Option<Date> {
    add_days(date, weeks.checked_mul(7)?)
}

/// Last day of `weeks` whole weeks starting on `start`.
///
/// With `weeks == 0` this is the day before `start`, an empty interval.
pub fn last_day_of_weeks(start: Date, weeks: i64) -> Option<Date> {
    add_days(start, weeks.checked_mul(7)?.checked_sub(1)?)
}

/// Number of days from `start` to `end` (negative when `end` is earlier).
pub fn days_between(start: Date, end: Date) -> Option<i64> {
    start.until(end).ok().map(|span| i64::from(span.get_days()))
}

/// Weeks needed to cover `days` days, rounded up; 0 for empty intervals.
pub fn weeks_covering(days: i64) -> u32 {
    if days <= 0 {
        0
    } else {
        u32::try_from((days + 6) / 7).unwrap_or(u32::MAX)
    }
}

/// Parse a comma-separated list of weekday indices or names ("1,3,5",
/// "mon,wed,fri").
pub fn parse_weekdays(input: &str) -> Result<Vec<u8>, String> {
    let mut days = Vec::new();
    for token in input.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        let index = match token.to_lowercase().as_str() {
            "mon" | "monday" => MONDAY,
            "tue" | "tuesday" => TUESDAY,
            "wed" | "wednesday" => WEDNESDAY,
            "thu" | "thursday" => THURSDAY,
            "fri" | "friday" => FRIDAY,
            "sat" | "saturday" => SATURDAY,
            "sun" | "sunday" => SUNDAY,
            other => other
                .parse::<u8>()
                .ok()
                .filter(|n| (MONDAY..=SUNDAY).contains(n))
                .ok_or_else(|| format!("Invalid weekday: {token}"))?,
        };
        if !days.contains(&index) {
            days.push(index);
        }
    }
    days.sort_unstable();
    Ok(days)
}
