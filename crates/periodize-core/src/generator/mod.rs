//! Periodization structure generator.
//!
//! Expands a plan definition into its Phase → Week → Day tree. Generation is
//! a best-effort build: a unit whose dates fall outside the supported
//! calendar range is skipped and recorded in [`GeneratedPlan::skipped`]
//! rather than failing the whole plan. Callers that need a complete
//! structure check [`GeneratedPlan::is_complete`].
//!
//! ```text
//! Plan definition ──▶ PhaseStrategy::build_phases ──▶ PhaseBlueprint[]
//!                                                        │
//!                          dates, weeks, days ◀──────────┘
//! ```
//!
//! # Examples
//!
//! ```rust
//! use periodize_core::{
//!     generator::StructureGenerator,
//!     models::{FocusProfile, PeriodizationStrategy, PhaseType, Plan},
//! };
//! use jiff::{civil::date, Timestamp};
//!
//! let plan = Plan {
//!     id: 0,
//!     name: "Base".to_string(),
//!     user_id: None,
//!     client_id: None,
//!     start_date: date(2025, 1, 6),
//!     end_date: date(2025, 3, 30),
//!     strategy: PeriodizationStrategy::Linear,
//!     primary_focus: FocusProfile::Strength,
//!     secondary_focus: None,
//!     days_per_week: 3,
//!     training_days: vec![],
//!     is_active: true,
//!     created_at: Timestamp::now(),
//!     updated_at: Timestamp::now(),
//!     phases: vec![],
//! };
//!
//! let generated = StructureGenerator::default().generate(plan)?;
//! assert!(generated.is_complete());
//! assert_eq!(generated.plan.phases.len(), 3);
//! assert_eq!(generated.plan.phases[1].phase_type, PhaseType::Intensification);
//! # Ok::<(), periodize_core::EngineError>(())
//! ```

use std::fmt;

use log::{debug, error, warn};

use crate::{
    calendar,
    error::{EngineError, Result},
    models::{Phase, Plan},
};

pub mod strategy;
pub mod weeks;

#[cfg(test)]
mod tests;

pub use strategy::{strategy_for, Block, Linear, PhaseBlueprint, PhaseStrategy, Undulating};

/// Default phase length in weeks.
pub const DEFAULT_PHASE_WEEKS: u32 = 4;

/// A unit the generator could not build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkippedUnit {
    Phase { order: u32 },
    Week { phase_order: u32, order_in_phase: u32 },
    Day { week_number: u32, slot: u8 },
}

impl fmt::Display for SkippedUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkippedUnit::Phase { order } => write!(f, "phase {order}"),
            SkippedUnit::Week {
                phase_order,
                order_in_phase,
            } => write!(f, "week {order_in_phase} of phase {phase_order}"),
            SkippedUnit::Day { week_number, slot } => {
                write!(f, "day {} of week {week_number}", slot + 1)
            }
        }
    }
}

/// A plan with its generated structure and the units that were skipped.
#[derive(Debug, Clone)]
pub struct GeneratedPlan {
    pub plan: Plan,
    pub skipped: Vec<SkippedUnit>,
}

impl GeneratedPlan {
    /// True when every phase, week and day was built.
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Builds Phase → Week → Day trees from plan definitions.
#[derive(Debug, Clone, Copy)]
pub struct StructureGenerator {
    phase_duration_weeks: u32,
}

impl Default for StructureGenerator {
    fn default() -> Self {
        Self {
            phase_duration_weeks: DEFAULT_PHASE_WEEKS,
        }
    }
}

impl StructureGenerator {
    /// Creates a generator producing phases of `phase_duration_weeks`.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidInput` when `phase_duration_weeks` is 0.
    pub fn new(phase_duration_weeks: u32) -> Result<Self> {
        if phase_duration_weeks == 0 {
            return Err(EngineError::invalid_input("phase_duration_weeks")
                .with_reason("must be at least 1"));
        }
        Ok(Self {
            phase_duration_weeks,
        })
    }

    pub fn phase_duration_weeks(&self) -> u32 {
        self.phase_duration_weeks
    }

    /// Generates the full structure of `plan`.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::StructureExists` when the plan already carries
    /// phases; regenerating requires clearing the existing structure first.
    /// Calendar failures never error, they are reported in
    /// [`GeneratedPlan::skipped`].
    pub fn generate(&self, mut plan: Plan) -> Result<GeneratedPlan> {
        if plan.has_structure() {
            return Err(EngineError::StructureExists { plan_id: plan.id });
        }

        let strategy = strategy_for(plan.strategy);
        let blueprints = strategy.build_phases(&plan, self.phase_duration_weeks);
        let training_days = plan.effective_training_days();
        debug!(
            "Generating {} phases for plan '{}' ({} weeks, {})",
            blueprints.len(),
            plan.name,
            plan.duration_weeks(),
            plan.strategy.as_str()
        );

        let mut phases = Vec::with_capacity(blueprints.len());
        let mut skipped = Vec::new();
        let mut weeks_before = 0u32;
        let mut week_number = 0u32;

        for blueprint in &blueprints {
            let offset = weeks_before;
            weeks_before += blueprint.week_count;

            let dates = calendar::add_weeks(plan.start_date, i64::from(offset)).and_then(|start| {
                calendar::add_weeks(start, i64::from(blueprint.week_count)).map(|end| (start, end))
            });
            let Some((start_date, end_date)) = dates else {
                warn!("Skipping phase {}: date out of range", blueprint.order);
                skipped.push(SkippedUnit::Phase {
                    order: blueprint.order,
                });
                week_number += blueprint.week_count;
                continue;
            };

            let skipped_before = skipped.len();
            let weeks = weeks::build_weeks(
                blueprint,
                start_date,
                &training_days,
                &mut week_number,
                &mut skipped,
            );

            let phase = Phase {
                id: 0,
                order: blueprint.order,
                name: format!("Phase {}: {}", blueprint.order, blueprint.phase_type.label()),
                start_date,
                end_date,
                phase_type: blueprint.phase_type,
                focus: blueprint.focus,
                load_weeks: blueprint.load_weeks,
                deload_weeks: blueprint.deload_weeks,
                weeks,
            };

            if skipped.len() == skipped_before {
                verify_phase(&phase);
            }
            phases.push(phase);
        }

        plan.phases = phases;
        Ok(GeneratedPlan { plan, skipped })
    }
}

/// Structural invariants are guaranteed by construction; a violation is an
/// internal logic error.
fn verify_phase(phase: &Phase) {
    let result = phase.check_invariants();
    debug_assert!(result.is_ok(), "invariant violated: {result:?}");
    if let Err(violation) = result {
        error!("Generated structure violates an invariant: {violation}");
    }
}
