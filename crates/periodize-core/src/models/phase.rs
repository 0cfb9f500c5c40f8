//! Phase (mesocycle) model.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::{FocusProfile, PhaseType, Week};

/// A multi-week block with one phase type and one dominant focus.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Phase {
    /// Unique identifier (0 until persisted)
    pub id: u64,

    /// 1-based position within the plan
    pub order: u32,

    /// Display name, e.g. "Phase 2: Intensification"
    pub name: String,

    /// First day of the phase
    pub start_date: Date,

    /// Boundary date shared with the next phase's start
    pub end_date: Date,

    pub phase_type: PhaseType,

    pub focus: FocusProfile,

    /// Number of loading weeks
    pub load_weeks: u32,

    /// Number of deload weeks (at least one)
    pub deload_weeks: u32,

    /// Generated weeks, in order
    #[serde(default)]
    pub weeks: Vec<Week>,
}

impl Phase {
    /// Declared length of the phase in weeks.
    pub fn total_weeks(&self) -> u32 {
        self.load_weeks + self.deload_weeks
    }

    /// Whether `date` falls within the phase (inclusive both ends).
    pub fn contains(&self, date: Date) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// Check the structural invariants of a generated phase.
    ///
    /// Returns a description of the first violation found.
    pub fn check_invariants(&self) -> Result<(), String> {
        if self.deload_weeks < 1 {
            return Err(format!("phase {} has no deload week", self.order));
        }
        if self.weeks.len() as u32 != self.total_weeks() {
            return Err(format!(
                "phase {} declares {} load + {} deload weeks but holds {}",
                self.order,
                self.load_weeks,
                self.deload_weeks,
                self.weeks.len()
            ));
        }
        if let Some(week) = self.weeks.iter().find(|w| !w.is_consistent()) {
            return Err(format!(
                "week {} of phase {} is a deload week with load level {}",
                week.order_in_phase,
                self.order,
                week.load_level.as_str()
            ));
        }
        Ok(())
    }
}
