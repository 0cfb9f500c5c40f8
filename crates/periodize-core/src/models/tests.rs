#[cfg(test)]
mod model_tests {
    use jiff::{civil::date, Timestamp};

    use crate::models::{
        Day, FocusProfile, LoadLevel, OwnerFilter, PeriodizationStrategy, Phase, PhaseType, Plan,
        PlanFilter, PlanSummary, TrainingContext, UpdateDayRequest, Week,
    };

    fn create_test_day(id: u64, offset: i8, is_rest_day: bool) -> Day {
        let day = date(2025, 1, 6 + offset);
        Day {
            id,
            date: day,
            weekday: crate::calendar::weekday_index(day),
            is_rest_day,
            workout_id: None,
            is_completed: false,
            notes: None,
        }
    }

    fn create_test_week(is_deload: bool) -> Week {
        Week {
            id: 10,
            order_in_phase: 1,
            week_number: 1,
            start_date: date(2025, 1, 6),
            end_date: date(2025, 1, 13),
            load_level: if is_deload {
                LoadLevel::Low
            } else {
                LoadLevel::High
            },
            intensity_factor: 0.95,
            volume_factor: 1.1,
            load_progression_percentage: 0.025,
            is_deload,
            days: (0..7)
                .map(|i| create_test_day(100 + i as u64, i, i % 2 == 1))
                .collect(),
        }
    }

    fn create_test_phase() -> Phase {
        Phase {
            id: 5,
            order: 1,
            name: "Phase 1: Accumulation".to_string(),
            start_date: date(2025, 1, 6),
            end_date: date(2025, 1, 13),
            phase_type: PhaseType::Accumulation,
            focus: FocusProfile::Hypertrophy,
            load_weeks: 0,
            deload_weeks: 1,
            weeks: vec![create_test_week(true)],
        }
    }

    fn create_test_plan() -> Plan {
        Plan {
            id: 789,
            name: "Test Plan".to_string(),
            user_id: Some("ana".to_string()),
            client_id: Some("club-7".to_string()),
            start_date: date(2025, 1, 6),
            end_date: date(2025, 1, 12),
            strategy: PeriodizationStrategy::Linear,
            primary_focus: FocusProfile::Hypertrophy,
            secondary_focus: None,
            days_per_week: 4,
            training_days: vec![],
            is_active: true,
            created_at: Timestamp::from_second(1640995200).unwrap(), // 2022-01-01 00:00:00 UTC
            updated_at: Timestamp::from_second(1641081600).unwrap(), // 2022-01-02 00:00:00 UTC
            phases: vec![create_test_phase()],
        }
    }

    #[test]
    fn test_enum_string_round_trip() {
        for strategy in ["linear", "block", "undulating"] {
            let parsed: PeriodizationStrategy = strategy.parse().unwrap();
            assert_eq!(parsed.as_str(), strategy);
        }
        assert_eq!(
            "DUP".parse::<PeriodizationStrategy>().unwrap(),
            PeriodizationStrategy::Undulating
        );
        for phase_type in ["accumulation", "intensification", "transformation", "deload"] {
            assert_eq!(phase_type.parse::<PhaseType>().unwrap().as_str(), phase_type);
        }
        assert!("recovery".parse::<PhaseType>().is_err());
        assert!("extreme".parse::<LoadLevel>().is_err());
        assert!("speed".parse::<FocusProfile>().is_err());
    }

    #[test]
    fn test_enum_serde_is_lowercase() {
        let json = serde_json::to_string(&PeriodizationStrategy::Undulating).unwrap();
        assert_eq!(json, "\"undulating\"");
        let level: LoadLevel = serde_json::from_str("\"medium\"").unwrap();
        assert_eq!(level, LoadLevel::Medium);
    }

    #[test]
    fn test_only_hypertrophy_is_hypertrophy_oriented() {
        assert!(FocusProfile::Hypertrophy.is_hypertrophy_oriented());
        for focus in [
            FocusProfile::Strength,
            FocusProfile::Power,
            FocusProfile::Endurance,
            FocusProfile::General,
        ] {
            assert!(!focus.is_hypertrophy_oriented());
        }
    }

    #[test]
    fn test_plan_duration_and_days() {
        let mut plan = create_test_plan();
        assert_eq!(plan.duration_weeks(), 1);
        assert_eq!(plan.effective_training_days(), vec![1, 2, 4, 5]);

        plan.training_days = vec![2, 6];
        assert_eq!(plan.effective_training_days(), vec![2, 6]);

        plan.end_date = date(2025, 1, 14);
        assert_eq!(plan.duration_weeks(), 2);

        plan.end_date = date(2025, 1, 13);
        assert_eq!(plan.duration_weeks(), 2);

        plan.end_date = plan.start_date;
        assert_eq!(plan.duration_weeks(), 1);

        plan.end_date = date(2025, 1, 5);
        assert_eq!(plan.duration_weeks(), 0);
    }

    #[test]
    fn test_plan_ownership() {
        let plan = create_test_plan();
        assert!(plan.is_owned_by(&OwnerFilter::default()));
        assert!(plan.is_owned_by(&OwnerFilter::user("ana")));
        assert!(plan.is_owned_by(&OwnerFilter::client("club-7")));
        assert!(!plan.is_owned_by(&OwnerFilter::user("club-7")));

        // Either identity matching is enough
        let mixed = OwnerFilter {
            user_id: Some("ben".to_string()),
            client_id: Some("club-7".to_string()),
        };
        assert!(plan.is_owned_by(&mixed));
    }

    #[test]
    fn test_phase_invariants() {
        let mut phase = create_test_phase();
        assert_eq!(phase.total_weeks(), 1);
        assert_eq!(phase.check_invariants(), Ok(()));

        phase.deload_weeks = 0;
        assert!(phase.check_invariants().is_err());

        let mut phase = create_test_phase();
        phase.weeks[0].load_level = LoadLevel::High;
        assert!(phase.check_invariants().is_err());
    }

    #[test]
    fn test_week_helpers() {
        let week = create_test_week(false);
        assert!(week.contains(date(2025, 1, 6)));
        assert!(week.contains(date(2025, 1, 13)));
        assert!(!week.contains(date(2025, 1, 14)));
        assert!(week.is_consistent());
        assert_eq!(week.training_days().count(), 4);

        let mut deload = create_test_week(true);
        assert!(deload.is_consistent());
        deload.load_level = LoadLevel::Medium;
        assert!(!deload.is_consistent());
    }

    #[test]
    fn test_plan_summary_from_plan() {
        let mut plan = create_test_plan();
        plan.phases[0].weeks[0].days[0].is_completed = true;

        let summary = PlanSummary::from(&plan);
        assert_eq!(summary.id, 789);
        assert_eq!(summary.phase_count, 1);
        assert_eq!(summary.week_count, 1);
        assert_eq!(summary.training_day_count, 4);
        assert_eq!(summary.completed_day_count, 1);
    }

    #[test]
    fn test_plan_filter_from_list_params() {
        let params = crate::params::ListPlans {
            include_inactive: true,
            user_id: Some("ana".to_string()),
            client_id: None,
        };
        let filter = PlanFilter::from(&params);
        assert!(filter.include_inactive);
        assert_eq!(filter.owner, OwnerFilter::user("ana"));
        assert_eq!(filter.name_contains, None);
    }

    #[test]
    fn test_training_context_positions() {
        let plan = create_test_plan();
        let context = TrainingContext::new(date(2025, 1, 7), plan.clone(), 0, 0, Some(1))
            .expect("positions exist");
        assert_eq!(context.focus, FocusProfile::Hypertrophy);
        assert_eq!(context.load_level, LoadLevel::Low);
        assert_eq!(context.day().unwrap().id, 101);
        assert!(!context.is_training_day());

        assert!(TrainingContext::new(date(2025, 1, 7), plan.clone(), 1, 0, None).is_none());
        assert!(TrainingContext::new(date(2025, 1, 7), plan.clone(), 0, 3, None).is_none());

        let no_day = TrainingContext::new(date(2025, 1, 7), plan, 0, 0, Some(9)).unwrap();
        assert!(no_day.day().is_none());
    }

    #[test]
    fn test_update_day_request_is_empty() {
        assert!(UpdateDayRequest::default().is_empty());
        let request = UpdateDayRequest {
            notes: Some("tired".to_string()),
            ..Default::default()
        };
        assert!(!request.is_empty());
    }
}
