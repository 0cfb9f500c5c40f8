use jiff::{civil::Date, Timestamp};
use periodize_core::{FocusProfile, PeriodizationStrategy, Plan, PlannerBuilder};
use tempfile::TempDir;

/// Helper function to create a test planner
#[allow(dead_code)]
pub async fn create_test_planner() -> (TempDir, periodize_core::Planner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let planner = PlannerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create planner");
    (temp_dir, planner)
}

/// An unsaved, unstructured plan running `weeks` weeks from `start`.
#[allow(dead_code)]
pub fn plan_definition(name: &str, start: Date, weeks: i64) -> Plan {
    Plan {
        id: 0,
        name: name.to_string(),
        user_id: None,
        client_id: None,
        start_date: start,
        end_date: periodize_core::calendar::last_day_of_weeks(start, weeks).expect("date in range"),
        strategy: PeriodizationStrategy::Linear,
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
