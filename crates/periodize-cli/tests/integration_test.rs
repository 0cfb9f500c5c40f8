//! Integration tests comparing CLI output with the core `Display`
//! implementations that the MCP server returns.

use std::process::Command;

use periodize_core::{
    display::{CreateResult, LoadResult},
    params::{CreatePlan, ListPlans, ModulatedLoad, ResolveContext},
    Planner, PlannerBuilder,
};
use tempfile::TempDir;

/// Helper function to create a test planner with temporary database
async fn create_test_planner() -> (Planner, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let db_path = temp_dir.path().join("test.db");

    let planner = PlannerBuilder::new()
        .with_database_path(Some(db_path))
        .build()
        .await
        .expect("Failed to create planner");

    (planner, temp_dir)
}

/// Run a CLI command and capture its output
fn run_cli_command(db_path: &str, args: &[&str]) -> String {
    let output = Command::new(env!("CARGO_BIN_EXE_pz"))
        .arg("--no-color")
        .arg("--database-file")
        .arg(db_path)
        .args(args)
        .output()
        .expect("Failed to run CLI command");
    String::from_utf8(output.stdout).expect("Invalid UTF-8 in CLI output")
}

fn spring_plan() -> CreatePlan {
    CreatePlan {
        name: "Spring".to_string(),
        start_date: "2025-01-06".to_string(),
        weeks: Some(12),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_create_output_matches_display() {
    let (planner, temp_dir) = create_test_planner().await;
    let db_path = temp_dir.path().join("test.db");
    let db_str = db_path.to_str().unwrap();

    let cli_output = run_cli_command(
        db_str,
        &[
            "plan", "create", "Spring", "--start", "2025-01-06", "--weeks", "12",
        ],
    );

    let generated = planner.create_plan(&spring_plan()).await.unwrap();
    assert_eq!(generated.plan.id, 2);
    let direct_output = CreateResult::new(generated).to_string();

    // Day ids and timestamps differ between the two plans; the headings
    // don't.
    let headings = |output: &str| -> Vec<String> {
        output
            .lines()
            .filter(|line| line.starts_with("## "))
            .map(str::to_string)
            .collect()
    };
    assert!(cli_output.starts_with("Created plan with ID: 1"));
    assert!(direct_output.starts_with("Created plan with ID: 2"));
    assert_eq!(headings(&cli_output), headings(&direct_output));
    assert_eq!(headings(&cli_output).len(), 3);
}

#[tokio::test]
async fn test_list_output_matches_display() {
    let (planner, temp_dir) = create_test_planner().await;
    let db_path = temp_dir.path().join("test.db");
    let db_str = db_path.to_str().unwrap();

    planner.create_plan(&spring_plan()).await.unwrap();

    let cli_output = run_cli_command(db_str, &["plan", "list"]);
    let summaries = planner.list_plans(&ListPlans::default()).await.unwrap();

    assert_eq!(cli_output, format!("# Active Plans\n\n{summaries}"));
}

#[tokio::test]
async fn test_context_output_matches_display() {
    let (planner, temp_dir) = create_test_planner().await;
    let db_path = temp_dir.path().join("test.db");
    let db_str = db_path.to_str().unwrap();

    planner.create_plan(&spring_plan()).await.unwrap();

    let cli_output = run_cli_command(db_str, &["context", "--date", "2025-02-19"]);
    let context = planner
        .current_context(&ResolveContext {
            date: Some("2025-02-19".to_string()),
            ..Default::default()
        })
        .await
        .unwrap()
        .expect("date is inside the plan");

    assert_eq!(cli_output, context.to_string());
    assert!(cli_output.contains("Phase 2: Intensification"));
}

#[tokio::test]
async fn test_load_output_matches_display() {
    let (planner, temp_dir) = create_test_planner().await;
    let db_path = temp_dir.path().join("test.db");
    let db_str = db_path.to_str().unwrap();

    planner.create_plan(&spring_plan()).await.unwrap();

    let cli_output = run_cli_command(
        db_str,
        &["load", "75", "--one-rep-max", "200", "--date", "2025-01-27"],
    );
    let load: LoadResult = planner
        .modulated_load(&ModulatedLoad {
            base_percentage: 75.0,
            one_rep_max: Some(200.0),
            context: ResolveContext {
                date: Some("2025-01-27".to_string()),
                ..Default::default()
            },
            ..Default::default()
        })
        .await
        .unwrap()
        .expect("date is inside the plan");

    assert_eq!(cli_output, load.to_string());
    assert!(load.context.week().is_deload);
}
