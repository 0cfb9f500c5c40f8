//! Command-line argument definitions using clap's derive API.
//!
//! Every argument struct converts into the matching core parameter type
//! with a `From` impl, so clap attributes stay out of `periodize-core`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Planner
//! ```

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use periodize_core::{
    calendar,
    params::{
        CreatePlan, DeletePlan, Id, ListPlans, ModulatedLoad, PlanPosition, RegeneratePlan,
        ResolveContext, UpdateDay,
    },
    FocusProfile, PeriodizationStrategy,
};

/// Periodize: plan and follow periodized strength-training programs
///
/// Generates phase, week and day structure for a training plan, and
/// answers which phase, week and load apply on any date. Runs either as a
/// command-line tool or as an MCP server (`pz serve`) for AI assistants.
#[derive(Parser)]
#[command(version, about, name = "pz")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/periodize/periodize.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage training plans
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Show the training context for a date
    #[command(alias = "ctx")]
    Context(ContextArgs),
    /// Compute a load adjusted to the current training week
    #[command(alias = "l")]
    Load(LoadArgs),
    /// Track individual training days
    #[command(alias = "d")]
    Day {
        #[command(subcommand)]
        command: DayCommands,
    },
    /// Start the MCP server
    Serve,
}

/// Weekday indices parsed from a list such as "mon,wed,fri" or "1,3,5".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Weekdays(pub Vec<u8>);

fn parse_weekdays(input: &str) -> Result<Weekdays, String> {
    calendar::parse_weekdays(input).map(Weekdays)
}

/// Create a plan and generate its phases, weeks and days
#[derive(ClapArgs)]
pub struct CreatePlanArgs {
    /// Name of the plan
    pub name: String,
    /// First day of the plan (YYYY-MM-DD)
    #[arg(short, long)]
    pub start: String,
    /// Last day of the plan (YYYY-MM-DD)
    #[arg(short, long, conflicts_with = "weeks")]
    pub end: Option<String>,
    /// Plan length in weeks, as an alternative to --end
    #[arg(short, long)]
    pub weeks: Option<u32>,
    /// Periodization strategy (linear, block, undulating)
    #[arg(long, default_value_t = PeriodizationStrategy::Linear)]
    pub strategy: PeriodizationStrategy,
    /// Primary training focus (strength, hypertrophy, power, endurance,
    /// general)
    #[arg(short, long, default_value_t = FocusProfile::Strength)]
    pub focus: FocusProfile,
    /// Secondary focus, alternated with the primary one by block plans
    #[arg(long)]
    pub secondary_focus: Option<FocusProfile>,
    /// Number of training days per week, placed on default weekdays
    #[arg(long, default_value_t = 3)]
    pub days_per_week: u8,
    /// Explicit training weekdays, e.g. "mon,wed,fri" or "1,3,5"
    #[arg(long, value_parser = parse_weekdays)]
    pub days: Option<Weekdays>,
    /// Weeks per phase (defaults to the planner's configured length)
    #[arg(long)]
    pub phase_weeks: Option<u32>,
    /// Athlete the plan belongs to
    #[arg(long)]
    pub user: Option<String>,
    /// Client or team the plan belongs to
    #[arg(long)]
    pub client: Option<String>,
}

impl From<CreatePlanArgs> for CreatePlan {
    fn from(val: CreatePlanArgs) -> Self {
        CreatePlan {
            name: val.name,
            user_id: val.user,
            client_id: val.client,
            start_date: val.start,
            end_date: val.end,
            weeks: val.weeks,
            strategy: val.strategy,
            primary_focus: val.focus,
            secondary_focus: val.secondary_focus,
            days_per_week: val.days_per_week,
            training_days: val.days.map(|d| d.0).unwrap_or_default(),
            phase_weeks: val.phase_weeks,
        }
    }
}

/// List plans
///
/// Shows active plans by default; use --all to include deactivated ones.
#[derive(ClapArgs)]
pub struct ListPlansArgs {
    /// Include inactive plans
    #[arg(short, long)]
    pub all: bool,
    /// Only plans belonging to this athlete
    #[arg(long)]
    pub user: Option<String>,
    /// Only plans belonging to this client
    #[arg(long)]
    pub client: Option<String>,
}

impl From<ListPlansArgs> for ListPlans {
    fn from(val: ListPlansArgs) -> Self {
        ListPlans {
            include_inactive: val.all,
            user_id: val.user,
            client_id: val.client,
        }
    }
}

#[derive(ClapArgs)]
pub struct PlanIdArgs {
    /// ID of the plan
    pub id: u64,
}

impl From<PlanIdArgs> for Id {
    fn from(val: PlanIdArgs) -> Self {
        Id { id: val.id }
    }
}

/// Show where a date falls inside one plan, active or not
#[derive(ClapArgs)]
pub struct PlanPositionArgs {
    /// ID of the plan
    pub id: u64,
    /// Date to look up (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    pub date: Option<String>,
}

impl From<PlanPositionArgs> for PlanPosition {
    fn from(val: PlanPositionArgs) -> Self {
        PlanPosition {
            id: val.id,
            date: val.date,
        }
    }
}

/// Generate structure for a plan whose structure was cleared
#[derive(ClapArgs)]
pub struct GeneratePlanArgs {
    /// ID of the plan
    pub id: u64,
    /// Weeks per phase for the new structure
    #[arg(long)]
    pub phase_weeks: Option<u32>,
}

impl From<GeneratePlanArgs> for RegeneratePlan {
    fn from(val: GeneratePlanArgs) -> Self {
        RegeneratePlan {
            id: val.id,
            phase_weeks: val.phase_weeks,
        }
    }
}

/// Delete a plan permanently
#[derive(ClapArgs)]
pub struct DeletePlanArgs {
    /// ID of the plan to delete
    pub id: u64,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

impl From<DeletePlanArgs> for DeletePlan {
    fn from(val: DeletePlanArgs) -> Self {
        DeletePlan {
            id: val.id,
            confirmed: val.confirm,
        }
    }
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// Create a plan and generate its structure
    #[command(alias = "c")]
    Create(CreatePlanArgs),
    /// List plans
    #[command(aliases = ["l", "ls"])]
    List(ListPlansArgs),
    /// Show a plan with all its phases and weeks
    #[command(alias = "s")]
    Show(PlanIdArgs),
    /// Show where a date falls inside a plan
    #[command(alias = "pos")]
    Position(PlanPositionArgs),
    /// Include a plan in context resolution
    Activate(PlanIdArgs),
    /// Exclude a plan from context resolution
    Deactivate(PlanIdArgs),
    /// Remove a plan's phases, weeks and days
    Clear(PlanIdArgs),
    /// Generate structure for a cleared plan
    #[command(alias = "g")]
    Generate(GeneratePlanArgs),
    /// Delete a plan permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeletePlanArgs),
}

/// Resolve the phase, week and day that apply on a date
#[derive(ClapArgs, Default)]
pub struct ContextArgs {
    /// Date to resolve (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    pub date: Option<String>,
    /// Only consider plans belonging to this athlete
    #[arg(long)]
    pub user: Option<String>,
    /// Only consider plans belonging to this client
    #[arg(long)]
    pub client: Option<String>,
}

impl From<ContextArgs> for ResolveContext {
    fn from(val: ContextArgs) -> Self {
        ResolveContext {
            date: val.date,
            user_id: val.user,
            client_id: val.client,
        }
    }
}

/// Adjust a base percentage of 1RM to the week's progression and intensity
#[derive(ClapArgs)]
pub struct LoadArgs {
    /// Base load as a percentage of 1RM (0-100]
    pub percentage: f64,
    /// One-repetition maximum in kg, to get an absolute load
    #[arg(long)]
    pub one_rep_max: Option<f64>,
    /// Round the absolute load to this increment in kg (e.g. 2.5)
    #[arg(long)]
    pub round: Option<f64>,
    /// Base number of sets, scaled to the week's volume
    #[arg(long)]
    pub sets: Option<u32>,
    /// Base number of reps per set, scaled to the week's volume
    #[arg(long)]
    pub reps: Option<u32>,
    #[command(flatten)]
    pub context: ContextArgs,
}

impl From<LoadArgs> for ModulatedLoad {
    fn from(val: LoadArgs) -> Self {
        ModulatedLoad {
            base_percentage: val.percentage,
            one_rep_max: val.one_rep_max,
            round_to: val.round,
            sets: val.sets,
            reps: val.reps,
            context: val.context.into(),
        }
    }
}

/// Record completion, notes or the assigned workout of a day
#[derive(ClapArgs)]
pub struct UpdateDayArgs {
    /// ID of the day
    pub id: u64,
    /// Mark the day completed
    #[arg(long, conflicts_with = "undone")]
    pub done: bool,
    /// Mark the day not completed
    #[arg(long)]
    pub undone: bool,
    /// Notes about the session
    #[arg(short, long)]
    pub notes: Option<String>,
    /// ID of the workout assigned to this day
    #[arg(short, long)]
    pub workout: Option<u64>,
}

impl From<UpdateDayArgs> for UpdateDay {
    fn from(val: UpdateDayArgs) -> Self {
        let completed = match (val.done, val.undone) {
            (true, _) => Some(true),
            (false, true) => Some(false),
            (false, false) => None,
        };
        UpdateDay {
            id: val.id,
            completed,
            notes: val.notes,
            workout_id: val.workout,
        }
    }
}

#[derive(Subcommand)]
pub enum DayCommands {
    /// Update a training day
    #[command(alias = "u")]
    Update(UpdateDayArgs),
}
