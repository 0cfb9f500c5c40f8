//! Week (microcycle) model.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::{Day, LoadLevel};

/// One calendar week inside a phase, carrying load and volume modulation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Week {
    /// Unique identifier (0 until persisted)
    pub id: u64,

    /// 1-based position within the phase
    pub order_in_phase: u32,

    /// 1-based position within the whole plan
    pub week_number: u32,

    /// First day of the week
    pub start_date: Date,

    /// Boundary date shared with the next week's start
    pub end_date: Date,

    pub load_level: LoadLevel,

    /// Multiplier applied to prescribed load
    pub intensity_factor: f64,

    /// Multiplier applied to prescribed sets and reps
    pub volume_factor: f64,

    /// Additive load increment per week of the phase
    pub load_progression_percentage: f64,

    /// Recovery week flag; implies `LoadLevel::Low`
    pub is_deload: bool,

    /// Generated days, in date order
    #[serde(default)]
    pub days: Vec<Day>,
}

impl Week {
    /// Whether `date` falls within the week (inclusive both ends).
    pub fn contains(&self, date: Date) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// A deload week must carry the low load level.
    pub fn is_consistent(&self) -> bool {
        !self.is_deload || self.load_level == LoadLevel::Low
    }

    /// Days that are scheduled for training.
    pub fn training_days(&self) -> impl Iterator<Item = &Day> {
        self.days.iter().filter(|day| !day.is_rest_day)
    }
}
