use jiff::civil::date;
use periodize_core::{
    models::{PlanFilter, UpdateDayRequest},
    ContextResolver, Database, EngineError, OwnerFilter, PlanRepository, StructureGenerator,
};
use tempfile::NamedTempFile;

mod common;
use common::plan_definition;

/// Helper function to create a temporary database for testing
fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

fn generated(name: &str, start: jiff::civil::Date, weeks: i64) -> periodize_core::Plan {
    StructureGenerator::default()
        .generate(plan_definition(name, start, weeks))
        .expect("generation should succeed")
        .plan
}

#[test]
fn test_database_initialization() {
    let (temp_file, db) = create_test_db();
    assert!(temp_file.path().exists());
    assert_eq!(db.schema_version().unwrap(), 1);

    // Reopening an initialized database is a no-op
    let reopened = Database::new(temp_file.path()).expect("Failed to reopen database");
    assert_eq!(reopened.schema_version().unwrap(), 1);
}

#[test]
fn test_insert_plan_assigns_ids() {
    let (_temp_file, mut db) = create_test_db();

    let stored = db
        .insert_plan(&generated("Spring", date(2025, 1, 6), 12))
        .expect("Failed to insert plan");

    assert!(stored.id > 0);
    for phase in &stored.phases {
        assert!(phase.id > 0);
        for week in &phase.weeks {
            assert!(week.id > 0);
            assert!(week.days.iter().all(|d| d.id > 0));
        }
    }
}

#[test]
fn test_get_plan_round_trips_structure() {
    let (_temp_file, mut db) = create_test_db();

    let mut definition = generated("Round trip", date(2025, 1, 9), 10);
    definition.user_id = Some("ana".to_string());
    definition.training_days = vec![2, 4, 6];
    let stored = db.insert_plan(&definition).unwrap();

    let loaded = db
        .get_plan(stored.id)
        .expect("Failed to get plan")
        .expect("Plan should exist");

    assert_eq!(loaded, stored);
    assert_eq!(loaded.training_days, vec![2, 4, 6]);
    assert_eq!(loaded.user_id.as_deref(), Some("ana"));
}

#[test]
fn test_get_plan_not_found() {
    let (_temp_file, db) = create_test_db();
    assert!(db.get_plan(999).unwrap().is_none());
}

#[test]
fn test_insert_plan_rejects_reversed_dates() {
    let (_temp_file, mut db) = create_test_db();
    let mut plan = plan_definition("Reversed", date(2025, 1, 6), 4);
    plan.end_date = date(2025, 1, 1);

    let err = db.insert_plan(&plan).unwrap_err();
    assert!(matches!(err, EngineError::InvalidInput { .. }));
}

#[test]
fn test_list_plans_summaries_and_filters() {
    let (_temp_file, mut db) = create_test_db();

    let mut older = generated("Older", date(2025, 1, 6), 8);
    older.client_id = Some("club".to_string());
    let older = db.insert_plan(&older).unwrap();
    let newer = db
        .insert_plan(&generated("Newer", date(2025, 3, 3), 4))
        .unwrap();

    let all = db.list_plans(None).unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, newer.id);
    assert_eq!(all[1].phase_count, 2);
    assert_eq!(all[1].week_count, 8);
    assert_eq!(all[1].training_day_count, 24);
    assert_eq!(all[1].completed_day_count, 0);

    let by_client = PlanFilter {
        owner: OwnerFilter::client("club"),
        ..Default::default()
    };
    let summaries = db.list_plans(Some(&by_client)).unwrap();
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].id, older.id);

    let mut mine = generated("Mine", date(2025, 5, 5), 4);
    mine.user_id = Some("ana".to_string());
    let mine = db.insert_plan(&mine).unwrap();
    let either = OwnerFilter {
        user_id: Some("ana".to_string()),
        client_id: Some("club".to_string()),
    };
    let by_either = PlanFilter {
        owner: either.clone(),
        ..Default::default()
    };
    let ids: Vec<u64> = db
        .list_plans(Some(&by_either))
        .unwrap()
        .iter()
        .map(|s| s.id)
        .collect();
    assert_eq!(ids, vec![mine.id, older.id]);
    let stored_mine = db.get_plan(mine.id).unwrap().unwrap();
    let stored_older = db.get_plan(older.id).unwrap().unwrap();
    assert!(stored_mine.is_owned_by(&either));
    assert!(stored_older.is_owned_by(&either));
    db.delete_plan(mine.id).unwrap();

    let by_name = PlanFilter {
        name_contains: Some("ew".to_string()),
        ..Default::default()
    };
    assert_eq!(db.list_plans(Some(&by_name)).unwrap()[0].name, "Newer");

    db.set_plan_active(older.id, false).unwrap();
    assert_eq!(db.list_plans(None).unwrap().len(), 1);
    let with_inactive = PlanFilter {
        include_inactive: true,
        ..Default::default()
    };
    let summaries = db.list_plans(Some(&with_inactive)).unwrap();
    assert_eq!(summaries.len(), 2);
    assert!(!summaries[1].is_active);
}

#[test]
fn test_active_plans_on_range_and_order() {
    let (_temp_file, mut db) = create_test_db();

    let first = db
        .insert_plan(&generated("First", date(2025, 1, 6), 12))
        .unwrap();
    let second = db
        .insert_plan(&generated("Second", date(2025, 2, 3), 12))
        .unwrap();

    let plans = db.active_plans_on(date(2025, 2, 10)).unwrap();
    let ids: Vec<u64> = plans.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);
    assert!(plans.iter().all(|p| !p.phases.is_empty()));

    // Inclusive bounds
    assert_eq!(db.active_plans_on(date(2025, 1, 6)).unwrap().len(), 1);
    assert_eq!(db.active_plans_on(first.end_date).unwrap().len(), 2);
    assert!(db.active_plans_on(date(2025, 1, 5)).unwrap().is_empty());

    db.set_plan_active(second.id, false).unwrap();
    let plans = db.active_plans_on(date(2025, 2, 10)).unwrap();
    assert_eq!(plans.len(), 1);
    assert_eq!(plans[0].id, first.id);
}

#[test]
fn test_resolver_reads_through_database() {
    let (_temp_file, mut db) = create_test_db();
    db.insert_plan(&generated("Resolve", date(2025, 1, 6), 12))
        .unwrap();

    let resolver = ContextResolver::new(&db);
    let context = resolver
        .current_context(date(2025, 3, 5), &OwnerFilter::default())
        .unwrap()
        .expect("Context should resolve");

    assert_eq!(context.phase().order, 3);
    assert_eq!(context.week().week_number, 9);
    assert!(context.day().unwrap().id > 0);
}

#[test]
fn test_set_plan_active_and_delete_unknown() {
    let (_temp_file, mut db) = create_test_db();
    assert!(matches!(
        db.set_plan_active(5, true),
        Err(EngineError::PlanNotFound { id: 5 })
    ));
    assert!(matches!(
        db.delete_plan(5),
        Err(EngineError::PlanNotFound { id: 5 })
    ));
}

#[test]
fn test_delete_plan_cascades() {
    let (_temp_file, mut db) = create_test_db();
    let stored = db
        .insert_plan(&generated("Cascade", date(2025, 1, 6), 4))
        .unwrap();
    let day_id = stored.phases[0].weeks[0].days[0].id;

    db.delete_plan(stored.id).unwrap();

    assert!(db.get_plan(stored.id).unwrap().is_none());
    assert!(db.get_day(day_id).unwrap().is_none());
    assert_eq!(db.phase_count(stored.id).unwrap(), 0);
}

#[test]
fn test_clear_and_insert_structure() {
    let (_temp_file, mut db) = create_test_db();
    let stored = db
        .insert_plan(&generated("Rebuild", date(2025, 1, 6), 8))
        .unwrap();

    let mut phases = stored.phases.clone();
    let err = db.insert_structure(stored.id, &mut phases).unwrap_err();
    assert!(matches!(err, EngineError::StructureExists { .. }));

    assert_eq!(db.clear_structure(stored.id).unwrap(), 2);
    let cleared = db.get_plan(stored.id).unwrap().unwrap();
    assert!(cleared.phases.is_empty());

    let mut regenerated = StructureGenerator::new(8)
        .unwrap()
        .generate(cleared)
        .unwrap()
        .plan;
    db.insert_structure(stored.id, &mut regenerated.phases)
        .unwrap();
    assert!(regenerated.phases[0].id > 0);

    let loaded = db.get_plan(stored.id).unwrap().unwrap();
    assert_eq!(loaded.phases.len(), 1);
    assert_eq!(loaded.phases, regenerated.phases);

    assert!(matches!(
        db.clear_structure(999),
        Err(EngineError::PlanNotFound { id: 999 })
    ));
}

#[test]
fn test_update_day_partial_changes() {
    let (_temp_file, mut db) = create_test_db();
    let stored = db
        .insert_plan(&generated("Days", date(2025, 1, 6), 4))
        .unwrap();
    let day_id = stored.phases[0].weeks[1].days[2].id;

    let day = db
        .update_day(
            day_id,
            &UpdateDayRequest {
                notes: Some("Deadlift PR".to_string()),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(day.notes.as_deref(), Some("Deadlift PR"));
    assert!(!day.is_completed);

    let day = db
        .update_day(
            day_id,
            &UpdateDayRequest {
                is_completed: Some(true),
                workout_id: Some(4),
                ..Default::default()
            },
        )
        .unwrap();
    assert!(day.is_completed);
    assert_eq!(day.workout_id, Some(4));
    // Untouched fields survive
    assert_eq!(day.notes.as_deref(), Some("Deadlift PR"));

    let err = db
        .update_day(
            123_456,
            &UpdateDayRequest {
                is_completed: Some(true),
                ..Default::default()
            },
        )
        .unwrap_err();
    assert!(matches!(err, EngineError::DayNotFound { id: 123_456 }));
}

#[test]
fn test_in_memory_database() {
    let mut db = Database::in_memory().unwrap();
    let stored = db
        .insert_plan(&generated("Memory", date(2025, 1, 6), 4))
        .unwrap();
    assert_eq!(
        PlanRepository::active_plans_on(&db, date(2025, 1, 8))
            .unwrap()
            .len(),
        1
    );
    assert!(db.get_plan(stored.id).unwrap().is_some());
}
