//! Tests for the structure generator.

use jiff::{civil::date, Timestamp};

use super::*;
use crate::{
    calendar::{FRIDAY, MONDAY, SATURDAY, SUNDAY, THURSDAY, WEDNESDAY},
    models::{FocusProfile, LoadLevel, PeriodizationStrategy, PhaseType},
};

fn create_test_plan(strategy: PeriodizationStrategy, weeks: i64) -> Plan {
    let start = date(2025, 1, 6); // Monday
    Plan {
        id: 0,
        name: "Test Plan".to_string(),
        user_id: Some("athlete-1".to_string()),
        client_id: None,
        start_date: start,
        end_date: calendar::last_day_of_weeks(start, weeks).expect("valid end date"),
        strategy,
        primary_focus: FocusProfile::Strength,
        secondary_focus: None,
        days_per_week: 3,
        training_days: vec![],
        is_active: true,
        created_at: Timestamp::from_second(1735689600).unwrap(),
        updated_at: Timestamp::from_second(1735689600).unwrap(),
        phases: vec![],
    }
}

fn phase_types(plan: &Plan) -> Vec<PhaseType> {
    plan.phases.iter().map(|p| p.phase_type).collect()
}

#[test]
fn test_linear_twelve_week_plan() {
    let plan = create_test_plan(PeriodizationStrategy::Linear, 12);
    let generated = StructureGenerator::default()
        .generate(plan)
        .expect("generation should succeed");

    assert!(generated.is_complete());
    let plan = generated.plan;
    assert_eq!(
        phase_types(&plan),
        vec![
            PhaseType::Accumulation,
            PhaseType::Intensification,
            PhaseType::Transformation
        ]
    );
    for phase in &plan.phases {
        assert_eq!(phase.load_weeks, 3);
        assert_eq!(phase.deload_weeks, 1);
        assert_eq!(phase.weeks.len(), 4);
        assert_eq!(phase.focus, FocusProfile::Strength);
    }
    assert_eq!(plan.generated_weeks(), 12);

    let day_count: usize = plan
        .phases
        .iter()
        .flat_map(|p| &p.weeks)
        .map(|w| w.days.len())
        .sum();
    assert_eq!(day_count, 84);
}

#[test]
fn test_phases_are_contiguous() {
    let plan = create_test_plan(PeriodizationStrategy::Linear, 12);
    let plan = StructureGenerator::default().generate(plan).unwrap().plan;

    assert_eq!(plan.phases[0].start_date, plan.start_date);
    for pair in plan.phases.windows(2) {
        assert_eq!(pair[0].end_date, pair[1].start_date);
    }
    assert_eq!(
        Some(plan.phases[2].end_date),
        calendar::add_days(plan.end_date, 1)
    );
    assert_eq!(plan.phases[0].name, "Phase 1: Accumulation");
}

#[test]
fn test_week_numbers_continue_across_phases() {
    let plan = create_test_plan(PeriodizationStrategy::Undulating, 10);
    let plan = StructureGenerator::default().generate(plan).unwrap().plan;

    let numbers: Vec<u32> = plan
        .phases
        .iter()
        .flat_map(|p| &p.weeks)
        .map(|w| w.week_number)
        .collect();
    assert_eq!(numbers, (1..=10).collect::<Vec<_>>());

    let orders: Vec<u32> = plan.phases[1].weeks.iter().map(|w| w.order_in_phase).collect();
    assert_eq!(orders, vec![1, 2, 3, 4]);
}

#[test]
fn test_load_levels_alternate_and_end_in_deload() {
    let plan = create_test_plan(PeriodizationStrategy::Linear, 6);
    let generator = StructureGenerator::new(6).unwrap();
    let plan = generator.generate(plan).unwrap().plan;

    let levels: Vec<LoadLevel> = plan.phases[0].weeks.iter().map(|w| w.load_level).collect();
    assert_eq!(
        levels,
        vec![
            LoadLevel::High,
            LoadLevel::Medium,
            LoadLevel::High,
            LoadLevel::Medium,
            LoadLevel::High,
            LoadLevel::Low
        ]
    );
    let deloads: Vec<bool> = plan.phases[0].weeks.iter().map(|w| w.is_deload).collect();
    assert_eq!(deloads, vec![false, false, false, false, false, true]);
}

#[test]
fn test_last_phase_is_clipped() {
    let plan = create_test_plan(PeriodizationStrategy::Linear, 10);
    let plan = StructureGenerator::default().generate(plan).unwrap().plan;

    let lengths: Vec<usize> = plan.phases.iter().map(|p| p.weeks.len()).collect();
    assert_eq!(lengths, vec![4, 4, 2]);
    let last = &plan.phases[2];
    assert_eq!(last.load_weeks, 1);
    assert_eq!(last.deload_weeks, 1);
    assert_eq!(plan.generated_weeks() as u32, plan.duration_weeks());
}

#[test]
fn test_single_week_remainder_is_deload() {
    let plan = create_test_plan(PeriodizationStrategy::Linear, 5);
    let plan = StructureGenerator::default().generate(plan).unwrap().plan;

    let last = plan.phases.last().unwrap();
    assert_eq!(last.weeks.len(), 1);
    assert_eq!(last.load_weeks, 0);
    assert_eq!(last.deload_weeks, 1);
    assert!(last.weeks[0].is_deload);
    assert_eq!(last.weeks[0].load_level, LoadLevel::Low);
}

#[test]
fn test_invariants_hold_for_all_strategies_and_lengths() {
    for strategy in [
        PeriodizationStrategy::Linear,
        PeriodizationStrategy::Block,
        PeriodizationStrategy::Undulating,
    ] {
        for weeks in 1..=20 {
            for phase_weeks in 1..=6 {
                let plan = create_test_plan(strategy, weeks);
                let generator = StructureGenerator::new(phase_weeks).unwrap();
                let generated = generator.generate(plan).unwrap();
                assert!(generated.is_complete());

                let plan = generated.plan;
                assert_eq!(plan.generated_weeks() as u32, plan.duration_weeks());
                for phase in &plan.phases {
                    assert!(phase.deload_weeks >= 1);
                    assert_eq!(phase.check_invariants(), Ok(()));
                    for week in &phase.weeks {
                        if week.is_deload {
                            assert_eq!(week.load_level, LoadLevel::Low);
                        }
                        assert!((0.5..=1.2).contains(&week.intensity_factor));
                        assert!((0.5..=1.2).contains(&week.volume_factor));
                    }
                }
            }
        }
    }
}

#[test]
fn test_block_alternates_focus() {
    let mut plan = create_test_plan(PeriodizationStrategy::Block, 16);
    plan.primary_focus = FocusProfile::Hypertrophy;
    plan.secondary_focus = Some(FocusProfile::Strength);
    let plan = StructureGenerator::default().generate(plan).unwrap().plan;

    let focuses: Vec<FocusProfile> = plan.phases.iter().map(|p| p.focus).collect();
    assert_eq!(
        focuses,
        vec![
            FocusProfile::Hypertrophy,
            FocusProfile::Strength,
            FocusProfile::Hypertrophy,
            FocusProfile::Strength
        ]
    );
    assert_eq!(
        phase_types(&plan),
        vec![
            PhaseType::Accumulation,
            PhaseType::Intensification,
            PhaseType::Accumulation,
            PhaseType::Intensification
        ]
    );
}

#[test]
fn test_block_without_secondary_repeats_primary() {
    let plan = create_test_plan(PeriodizationStrategy::Block, 8);
    let plan = StructureGenerator::default().generate(plan).unwrap().plan;

    assert!(plan.phases.iter().all(|p| p.focus == FocusProfile::Strength));
    assert!(plan
        .phases
        .iter()
        .all(|p| p.phase_type == PhaseType::Intensification));
}

#[test]
fn test_undulating_alternates_types() {
    let plan = create_test_plan(PeriodizationStrategy::Undulating, 12);
    let plan = StructureGenerator::default().generate(plan).unwrap().plan;

    assert_eq!(
        phase_types(&plan),
        vec![
            PhaseType::Accumulation,
            PhaseType::Intensification,
            PhaseType::Accumulation
        ]
    );
}

#[test]
fn test_default_training_days_on_monday_start() {
    let plan = create_test_plan(PeriodizationStrategy::Linear, 4);
    let plan = StructureGenerator::default().generate(plan).unwrap().plan;

    let week = &plan.phases[0].weeks[0];
    let training: Vec<u8> = week.training_days().map(|d| d.weekday).collect();
    assert_eq!(training, vec![MONDAY, WEDNESDAY, FRIDAY]);
    assert_eq!(week.days[0].date, date(2025, 1, 6));
    assert_eq!(week.days[6].weekday, SUNDAY);
}

#[test]
fn test_weekday_follows_calendar_on_midweek_start() {
    let mut plan = create_test_plan(PeriodizationStrategy::Linear, 4);
    plan.start_date = date(2025, 1, 9); // Thursday
    plan.end_date = date(2025, 2, 5);
    plan.training_days = vec![THURSDAY, SATURDAY];
    let plan = StructureGenerator::default().generate(plan).unwrap().plan;

    let week = &plan.phases[0].weeks[0];
    assert_eq!(week.days[0].weekday, THURSDAY);
    assert!(!week.days[0].is_rest_day);
    assert!(week.days[1].is_rest_day);
    assert!(!week.days[2].is_rest_day);
    assert_eq!(week.training_days().count(), 2);
}

#[test]
fn test_empty_plan_generates_nothing() {
    let plan = create_test_plan(PeriodizationStrategy::Linear, 0);
    let generated = StructureGenerator::default().generate(plan).unwrap();
    assert!(generated.plan.phases.is_empty());
    assert!(generated.is_complete());
}

#[test]
fn test_one_day_plan_gets_a_deload_phase() {
    let mut plan = create_test_plan(PeriodizationStrategy::Linear, 1);
    plan.end_date = plan.start_date;
    let generated = StructureGenerator::default().generate(plan).unwrap();
    assert!(generated.is_complete());

    let plan = generated.plan;
    assert_eq!(plan.phases.len(), 1);
    let phase = &plan.phases[0];
    assert_eq!(phase.weeks.len(), 1);
    assert_eq!(phase.load_weeks, 0);
    assert_eq!(phase.deload_weeks, 1);
    assert!(phase.contains(plan.start_date));
    assert!(phase.weeks[0].is_deload);
    assert_eq!(phase.weeks[0].days[0].date, plan.start_date);
}

#[test]
fn test_regeneration_is_rejected() {
    let plan = create_test_plan(PeriodizationStrategy::Linear, 8);
    let generated = StructureGenerator::default().generate(plan).unwrap();

    let err = StructureGenerator::default()
        .generate(generated.plan)
        .unwrap_err();
    assert!(matches!(err, EngineError::StructureExists { .. }));
}

#[test]
fn test_generation_from_fresh_definition_is_deterministic() {
    let plan = create_test_plan(PeriodizationStrategy::Block, 12);
    let first = StructureGenerator::default().generate(plan.clone()).unwrap();
    let second = StructureGenerator::default().generate(plan).unwrap();
    assert_eq!(first.plan, second.plan);
}

#[test]
fn test_cleared_plan_can_be_regenerated() {
    let plan = create_test_plan(PeriodizationStrategy::Linear, 8);
    let mut plan = StructureGenerator::default().generate(plan).unwrap().plan;
    plan.phases.clear();
    let again = StructureGenerator::default().generate(plan).unwrap();
    assert_eq!(again.plan.phases.len(), 2);
}

#[test]
fn test_zero_phase_duration_is_invalid() {
    let err = StructureGenerator::new(0).unwrap_err();
    assert!(matches!(err, EngineError::InvalidInput { .. }));
}

#[test]
fn test_out_of_range_dates_are_skipped() {
    let mut plan = create_test_plan(PeriodizationStrategy::Linear, 4);
    plan.start_date = date(9999, 12, 6);
    plan.end_date = date(9999, 12, 31);
    let generated = StructureGenerator::default().generate(plan).unwrap();

    // 26 days cover 4 weeks, but the phase end lands past year 9999.
    assert!(!generated.is_complete());
    assert_eq!(generated.skipped, vec![SkippedUnit::Phase { order: 1 }]);
    assert!(generated.plan.phases.is_empty());
}

#[test]
fn test_week_factors_deload_is_lightest() {
    let (high_i, high_v) = weeks::week_factors(PhaseType::Accumulation, LoadLevel::High);
    let (low_i, low_v) = weeks::week_factors(PhaseType::Accumulation, LoadLevel::Low);
    assert!(low_i < high_i);
    assert!(low_v < high_v);
    assert_eq!(weeks::load_level_for(0, 3), LoadLevel::High);
    assert_eq!(weeks::load_level_for(1, 3), LoadLevel::Medium);
    assert_eq!(weeks::load_level_for(3, 3), LoadLevel::Low);
}
