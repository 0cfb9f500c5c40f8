//! Phase layout strategies.
//!
//! Each [`PeriodizationStrategy`] maps to one [`PhaseStrategy`]
//! implementation deciding the type and focus of the phase at a given
//! index. Week counts and load/deload splits are shared by all strategies.

use crate::models::{FocusProfile, PeriodizationStrategy, PhaseType, Plan};

/// Shape of a phase before dates, weeks and days are attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseBlueprint {
    /// 1-based position in the plan
    pub order: u32,
    pub phase_type: PhaseType,
    pub focus: FocusProfile,
    /// Weeks in this phase after clipping to the plan's remainder
    pub week_count: u32,
    pub load_weeks: u32,
    pub deload_weeks: u32,
}

/// Splits a phase into loading and deload weeks.
///
/// Every phase ends with exactly one deload week, so a one-week phase is a
/// single deload week.
pub fn split_load_weeks(week_count: u32) -> (u32, u32) {
    (week_count.saturating_sub(1), 1)
}

/// A phase layout strategy.
pub trait PhaseStrategy {
    /// Phase type and focus of the zero-based phase `index`.
    fn phase_profile(&self, index: usize, plan: &Plan) -> (PhaseType, FocusProfile);

    /// Lay out phases of `phase_duration_weeks` over the plan duration,
    /// clipping the last phase to the remaining weeks.
    fn build_phases(&self, plan: &Plan, phase_duration_weeks: u32) -> Vec<PhaseBlueprint> {
        let total_weeks = plan.duration_weeks();
        let phase_weeks = phase_duration_weeks.max(1);
        let phase_count = total_weeks.div_ceil(phase_weeks) as usize;

        let mut blueprints = Vec::with_capacity(phase_count);
        let mut generated = 0u32;
        for index in 0..phase_count {
            let remaining = total_weeks.saturating_sub(generated);
            if remaining == 0 {
                continue;
            }
            let week_count = phase_weeks.min(remaining);
            let (phase_type, focus) = self.phase_profile(index, plan);
            let (load_weeks, deload_weeks) = split_load_weeks(week_count);
            blueprints.push(PhaseBlueprint {
                order: index as u32 + 1,
                phase_type,
                focus,
                week_count,
                load_weeks,
                deload_weeks,
            });
            generated += week_count;
        }
        blueprints
    }
}

/// Accumulation, intensification, transformation, repeated; primary focus
/// throughout.
#[derive(Debug, Clone, Copy, Default)]
pub struct Linear;

impl PhaseStrategy for Linear {
    fn phase_profile(&self, index: usize, plan: &Plan) -> (PhaseType, FocusProfile) {
        const CYCLE: [PhaseType; 3] = [
            PhaseType::Accumulation,
            PhaseType::Intensification,
            PhaseType::Transformation,
        ];
        (CYCLE[index % 3], plan.primary_focus)
    }
}

/// Blocks alternating primary and secondary focus; hypertrophy blocks
/// accumulate, every other block intensifies.
#[derive(Debug, Clone, Copy, Default)]
pub struct Block;

impl PhaseStrategy for Block {
    fn phase_profile(&self, index: usize, plan: &Plan) -> (PhaseType, FocusProfile) {
        let focus = if index % 2 == 0 {
            plan.primary_focus
        } else {
            plan.secondary_focus.unwrap_or(plan.primary_focus)
        };
        let phase_type = if focus.is_hypertrophy_oriented() {
            PhaseType::Accumulation
        } else {
            PhaseType::Intensification
        };
        (phase_type, focus)
    }
}

/// Alternating accumulation and intensification; primary focus throughout.
#[derive(Debug, Clone, Copy, Default)]
pub struct Undulating;

impl PhaseStrategy for Undulating {
    fn phase_profile(&self, index: usize, plan: &Plan) -> (PhaseType, FocusProfile) {
        let phase_type = if index % 2 == 0 {
            PhaseType::Accumulation
        } else {
            PhaseType::Intensification
        };
        (phase_type, plan.primary_focus)
    }
}

/// The strategy implementation for a plan's configured strategy.
pub fn strategy_for(strategy: PeriodizationStrategy) -> &'static dyn PhaseStrategy {
    match strategy {
        PeriodizationStrategy::Linear => &Linear,
        PeriodizationStrategy::Block => &Block,
        PeriodizationStrategy::Undulating => &Undulating,
    }
}
