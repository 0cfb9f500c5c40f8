//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use serde::Serialize;

use super::datetime::DayLabel;
use crate::{
    generator::GeneratedPlan,
    models::{Day, Plan, TrainingContext},
    progression::{LoadPrescription, DEFAULT_MAX_INCREMENT},
};

fn write_skipped(f: &mut fmt::Formatter<'_>, generated: &GeneratedPlan) -> fmt::Result {
    if generated.is_complete() {
        return Ok(());
    }
    writeln!(f)?;
    writeln!(
        f,
        "Warning: {} units fell outside the supported calendar range and were skipped:",
        generated.skipped.len()
    )?;
    for unit in &generated.skipped {
        writeln!(f, "- {unit}")?;
    }
    Ok(())
}

/// Wrapper type for displaying the result of create operations.
///
/// # Examples
///
/// ```rust
/// use periodize_core::{
///     display::CreateResult,
///     generator::StructureGenerator,
///     models::{FocusProfile, PeriodizationStrategy, Plan},
/// };
/// use jiff::{civil::date, Timestamp};
///
/// let plan = Plan {
///     id: 1,
///     name: "Base block".to_string(),
///     user_id: None,
///     client_id: None,
///     start_date: date(2025, 1, 6),
///     end_date: date(2025, 2, 2),
///     strategy: PeriodizationStrategy::Linear,
///     primary_focus: FocusProfile::Strength,
///     secondary_focus: None,
///     days_per_week: 3,
///     training_days: vec![],
///     is_active: true,
///     created_at: Timestamp::now(),
///     updated_at: Timestamp::now(),
///     phases: vec![],
/// };
/// let generated = StructureGenerator::default().generate(plan)?;
///
/// let output = CreateResult::new(generated).to_string();
/// assert!(output.contains("Created plan with ID: 1"));
/// # Ok::<(), periodize_core::EngineError>(())
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<GeneratedPlan> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created plan with ID: {}", self.resource.plan.id)?;
        write_skipped(f, &self.resource)?;
        writeln!(f)?;
        write!(f, "{}", self.resource.plan)
    }
}

/// Wrapper type for displaying structure regenerated for an existing plan.
pub struct GenerateResult(pub GeneratedPlan);

impl fmt::Display for GenerateResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Generated {} phases for plan with ID: {}",
            self.0.plan.phases.len(),
            self.0.plan.id
        )?;
        write_skipped(f, &self.0)?;
        writeln!(f)?;
        write!(f, "{}", self.0.plan)
    }
}

/// Wrapper type for displaying the result of update operations, with the
/// list of changes applied.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    /// Create a new UpdateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    /// Create an UpdateResult with a list of changes made.
    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl fmt::Display for UpdateResult<Day> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated day with ID: {}", self.resource.id)?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        writeln!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of delete operations.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    /// Create a new DeleteResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<Plan> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted plan '{}' (ID: {}) with {} phases",
            self.resource.name,
            self.resource.id,
            self.resource.phases.len()
        )
    }
}

/// A load prescription together with the context it was computed in.
#[derive(Debug, Clone, Serialize)]
pub struct LoadResult {
    /// The requested base percentage of 1RM
    pub base_percentage: f64,
    pub prescription: LoadPrescription,
    /// Sets scaled to the week's volume, when base sets were given
    pub sets: Option<u32>,
    /// Reps scaled to the week's volume, when base reps were given
    pub reps: Option<u32>,
    /// Whether the prescription stays within the safe weekly increase
    pub within_safe_increment: bool,
    /// Estimated 1RM once the current phase is completed
    pub predicted_one_rep_max: Option<f64>,
    pub context: TrainingContext,
}

impl fmt::Display for LoadResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let week = self.context.week();

        writeln!(f, "# Load for {}", DayLabel(self.context.date))?;
        writeln!(f)?;
        writeln!(f, "- Base: {:.1}% of 1RM", self.base_percentage)?;
        writeln!(
            f,
            "- Prescribed: {:.1}% of 1RM",
            self.prescription.percentage
        )?;
        if let Some(kg) = self.prescription.kg {
            writeln!(f, "- Load: {kg:.1} kg")?;
        }
        match (self.sets, self.reps) {
            (Some(sets), Some(reps)) => writeln!(f, "- Volume: {sets} sets x {reps} reps")?,
            (Some(sets), None) => writeln!(f, "- Volume: {sets} sets")?,
            (None, Some(reps)) => writeln!(f, "- Volume: {reps} reps per set")?,
            (None, None) => {}
        }
        if !self.within_safe_increment {
            writeln!(
                f,
                "- Warning: more than {:.0}% above the base load",
                DEFAULT_MAX_INCREMENT * 100.0
            )?;
        }
        writeln!(
            f,
            "- Week {} of plan '{}', {}{}",
            week.week_number,
            self.context.plan().name,
            week.load_level.with_icon(),
            if week.is_deload { " (deload)" } else { "" }
        )?;
        writeln!(f, "- Intensity factor: {:.2}", week.intensity_factor)?;
        if let Some(max) = self.predicted_one_rep_max {
            writeln!(
                f,
                "- Estimated 1RM after {}: {max:.1} kg",
                self.context.phase().name
            )?;
        }
        Ok(())
    }
}

/// Describe the fields an update request changed, for [`UpdateResult`].
pub fn describe_day_changes(request: &crate::models::UpdateDayRequest) -> Vec<String> {
    let mut changes = Vec::new();
    match request.is_completed {
        Some(true) => changes.push("Marked completed".to_string()),
        Some(false) => changes.push("Marked not completed".to_string()),
        None => {}
    }
    if request.notes.is_some() {
        changes.push("Updated notes".to_string());
    }
    if let Some(workout) = request.workout_id {
        changes.push(format!("Assigned workout {workout}"));
    }
    changes
}
