//! Load progression calculator.
//!
//! Pure numeric transforms from a base load, volume or 1RM plus a week's
//! modulation factors to the value prescribed for that week. Nothing here
//! performs I/O or mutates its inputs.
//!
//! - Deload weeks scale the base load by the week's intensity factor only.
//! - Loading weeks add `load_progression_percentage` per week already spent
//!   in the phase, then apply the intensity factor.
//! - Percentage-of-1RM prescriptions are capped at 100.

use serde::Serialize;

use crate::{
    error::{EngineError, Result},
    models::{LoadLevel, Phase, Week},
};

/// Largest relative week-over-week load increase considered safe.
pub const DEFAULT_MAX_INCREMENT: f64 = 0.10;

/// A trainee is never prescribed more than their 1RM.
pub const MAX_PERCENTAGE_OF_1RM: f64 = 100.0;

/// Load prescribed for a week, relative to 1RM and optionally absolute.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LoadPrescription {
    /// Percentage of 1RM, at most 100
    pub percentage: f64,
    /// Absolute load when a 1RM was supplied
    pub kg: Option<f64>,
}

/// One row of a phase's progression report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekProgression {
    /// 1-based position of the week in the phase
    pub week_number: u32,
    pub load_level: LoadLevel,
    pub intensity_factor: f64,
    pub volume_factor: f64,
    pub progression_percentage: f64,
    pub is_deload: bool,
}

/// Load for `week` derived from `base_load`.
pub fn progressive_load(base_load: f64, week: &Week) -> f64 {
    if week.is_deload {
        return base_load * week.intensity_factor;
    }

    let weeks_elapsed = f64::from(week.order_in_phase.saturating_sub(1));
    let increment = week.load_progression_percentage * weeks_elapsed;
    let progressed = base_load * (1.0 + increment);
    progressed * week.intensity_factor
}

/// Percentage-of-1RM prescription for `week`, capped at 100, with the
/// absolute weight when `one_rep_max` is known.
pub fn progressive_load_as_percentage_of_1rm(
    base_percentage: f64,
    week: &Week,
    one_rep_max: Option<f64>,
) -> LoadPrescription {
    let percentage = progressive_load(base_percentage, week).min(MAX_PERCENTAGE_OF_1RM);
    LoadPrescription {
        percentage,
        kg: one_rep_max.map(|max| percentage / 100.0 * max),
    }
}

/// Sets for `week`: `round(base * volume_factor)`, at least 1.
pub fn modulated_sets(base_sets: u32, week: &Week) -> u32 {
    modulate_volume(base_sets, week.volume_factor)
}

/// Reps for `week`: `round(base * volume_factor)`, at least 1.
pub fn modulated_reps(base_reps: u32, week: &Week) -> u32 {
    modulate_volume(base_reps, week.volume_factor)
}

fn modulate_volume(base: u32, volume_factor: f64) -> u32 {
    let scaled = (f64::from(base) * volume_factor).round();
    if scaled.is_finite() && scaled >= 1.0 {
        scaled.min(f64::from(u32::MAX)) as u32
    } else {
        1
    }
}

/// Week-by-week view over a phase, numbered by position.
pub fn progression_pattern(phase: &Phase) -> Vec<WeekProgression> {
    phase
        .weeks
        .iter()
        .zip(1..)
        .map(|(week, week_number)| WeekProgression {
            week_number,
            load_level: week.load_level,
            intensity_factor: week.intensity_factor,
            volume_factor: week.volume_factor,
            progression_percentage: week.load_progression_percentage,
            is_deload: week.is_deload,
        })
        .collect()
}

/// Estimated 1RM after completing `phase`.
///
/// The gain per phase type is a coaching heuristic
/// ([`crate::models::PhaseType::estimated_strength_gain`]), not a
/// measurement; present it to trainees as an estimate.
pub fn predicted_new_1rm(current_1rm: f64, phase: &Phase) -> f64 {
    current_1rm * (1.0 + phase.phase_type.estimated_strength_gain())
}

/// Whether going from `base_load` to `progressed_load` stays within
/// `max_increment_percentage` (e.g. 0.10 for 10%).
///
/// # Errors
///
/// Returns `EngineError::InvalidInput` when `base_load` is not a positive
/// finite number, since the relative increase is undefined.
pub fn is_progression_safe(
    base_load: f64,
    progressed_load: f64,
    max_increment_percentage: f64,
) -> Result<bool> {
    if !base_load.is_finite() || base_load <= 0.0 {
        return Err(EngineError::invalid_input("base_load")
            .with_reason(format!("must be a positive number, got {base_load}")));
    }
    Ok((progressed_load - base_load) / base_load <= max_increment_percentage)
}

/// Round an absolute weight to the nearest loadable increment (e.g. 2.5 kg
/// plates). Non-positive increments leave the weight unchanged.
pub fn round_to_increment(kg: f64, increment: f64) -> f64 {
    if increment > 0.0 {
        (kg / increment).round() * increment
    } else {
        kg
    }
}
