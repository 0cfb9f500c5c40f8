//! Resolved "you are here" snapshot for a date.

use jiff::civil::Date;
use serde::Serialize;

use super::{Day, FocusProfile, LoadLevel, Phase, Plan, Week};

/// The plan, phase, week and optional day containing a date, together with
/// the modulation factors in force on that date.
///
/// Built fresh by every resolution call and never mutated afterwards. The
/// plan is held as an owned snapshot; the phase, week and day are addressed
/// by position inside it.
#[derive(Debug, Clone, Serialize)]
pub struct TrainingContext {
    /// Date the context was resolved for
    pub date: Date,
    plan: Plan,
    phase_index: usize,
    week_index: usize,
    day_index: Option<usize>,
    /// Focus of the resolved phase
    pub focus: FocusProfile,
    /// Load level of the resolved week
    pub load_level: LoadLevel,
    /// Intensity factor of the resolved week
    pub intensity_factor: f64,
    /// Volume factor of the resolved week
    pub volume_factor: f64,
}

impl TrainingContext {
    /// Assemble a context from positions inside `plan`.
    ///
    /// Returns `None` when the phase or week position does not exist.
    pub fn new(
        date: Date,
        plan: Plan,
        phase_index: usize,
        week_index: usize,
        day_index: Option<usize>,
    ) -> Option<Self> {
        let phase = plan.phases.get(phase_index)?;
        let week = phase.weeks.get(week_index)?;
        let day_index = day_index.filter(|&i| i < week.days.len());

        let focus = phase.focus;
        let load_level = week.load_level;
        let intensity_factor = week.intensity_factor;
        let volume_factor = week.volume_factor;

        Some(Self {
            date,
            plan,
            phase_index,
            week_index,
            day_index,
            focus,
            load_level,
            intensity_factor,
            volume_factor,
        })
    }

    pub fn plan(&self) -> &Plan {
        &self.plan
    }

    pub fn phase(&self) -> &Phase {
        &self.plan.phases[self.phase_index]
    }

    pub fn week(&self) -> &Week {
        &self.phase().weeks[self.week_index]
    }

    /// The scheduled day for the date, if the week has one.
    pub fn day(&self) -> Option<&Day> {
        self.day_index.map(|i| &self.week().days[i])
    }

    /// Whether the resolved day is a scheduled training session.
    pub fn is_training_day(&self) -> bool {
        self.day().is_some_and(|day| !day.is_rest_day)
    }
}
