//! Week and day construction for a single phase.

use jiff::civil::Date;
use log::warn;

use super::{strategy::PhaseBlueprint, SkippedUnit};
use crate::{
    calendar,
    models::{Day, LoadLevel, PhaseType, Week},
};

/// Factors outside this range are clamped.
const FACTOR_RANGE: (f64, f64) = (0.5, 1.2);

/// Load level of the zero-based week `index` in a phase with `load_weeks`
/// loading weeks.
pub fn load_level_for(index: u32, load_weeks: u32) -> LoadLevel {
    if index >= load_weeks {
        LoadLevel::Low
    } else if index % 2 == 0 {
        LoadLevel::High
    } else {
        LoadLevel::Medium
    }
}

/// `(intensity, volume)` factors for a week of `level` inside a phase of
/// `phase_type`.
pub fn week_factors(phase_type: PhaseType, level: LoadLevel) -> (f64, f64) {
    let (base_intensity, base_volume) = level.base_factors();
    let (intensity_bias, volume_bias) = phase_type.factor_bias();
    (
        (base_intensity * intensity_bias).clamp(FACTOR_RANGE.0, FACTOR_RANGE.1),
        (base_volume * volume_bias).clamp(FACTOR_RANGE.0, FACTOR_RANGE.1),
    )
}

/// Builds the weeks of one phase starting at `phase_start`.
///
/// `week_number` is the plan-wide counter and advances once per week slot,
/// built or skipped, so numbering stays aligned with the calendar.
pub(super) fn build_weeks(
    blueprint: &PhaseBlueprint,
    phase_start: Date,
    training_days: &[u8],
    week_number: &mut u32,
    skipped: &mut Vec<SkippedUnit>,
) -> Vec<Week> {
    let mut weeks = Vec::with_capacity(blueprint.week_count as usize);

    for index in 0..blueprint.week_count {
        *week_number += 1;
        let order_in_phase = index + 1;

        let dates = calendar::add_weeks(phase_start, i64::from(index)).and_then(|start| {
            calendar::add_weeks(start, 1).map(|end| (start, end))
        });
        let Some((start_date, end_date)) = dates else {
            warn!(
                "Skipping week {order_in_phase} of phase {}: date out of range",
                blueprint.order
            );
            skipped.push(SkippedUnit::Week {
                phase_order: blueprint.order,
                order_in_phase,
            });
            continue;
        };

        let is_deload = index >= blueprint.load_weeks;
        let load_level = load_level_for(index, blueprint.load_weeks);
        let (intensity_factor, volume_factor) = week_factors(blueprint.phase_type, load_level);
        let load_progression_percentage = if is_deload {
            0.0
        } else {
            blueprint.phase_type.weekly_progression()
        };

        let days = build_days(start_date, *week_number, training_days, skipped);

        weeks.push(Week {
            id: 0,
            order_in_phase,
            week_number: *week_number,
            start_date,
            end_date,
            load_level,
            intensity_factor,
            volume_factor,
            load_progression_percentage,
            is_deload,
            days,
        });
    }

    weeks
}

/// Builds the seven days of a week; a day is a training day when its ISO
/// weekday is in `training_days`.
pub(super) fn build_days(
    week_start: Date,
    week_number: u32,
    training_days: &[u8],
    skipped: &mut Vec<SkippedUnit>,
) -> Vec<Day> {
    let mut days = Vec::with_capacity(7);

    for slot in 0..7u8 {
        let Some(date) = calendar::add_days(week_start, i64::from(slot)) else {
            warn!("Skipping day {slot} of week {week_number}: date out of range");
            skipped.push(SkippedUnit::Day { week_number, slot });
            continue;
        };

        let weekday = calendar::weekday_index(date);
        days.push(Day {
            id: 0,
            date,
            weekday,
            is_rest_day: !training_days.contains(&weekday),
            workout_id: None,
            is_completed: false,
            notes: None,
        });
    }

    days
}
