//! Training day model.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// One calendar date inside a week.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Day {
    /// Unique identifier (0 until persisted)
    pub id: u64,

    pub date: Date,

    /// ISO weekday index, Monday = 1 through Sunday = 7
    pub weekday: u8,

    pub is_rest_day: bool,

    /// Workout definition assigned to this day, if any
    pub workout_id: Option<u64>,

    pub is_completed: bool,

    pub notes: Option<String>,
}
