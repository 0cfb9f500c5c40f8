//! Display implementations for domain models.
//!
//! All output is markdown so that the CLI renderer and MCP clients show the
//! same structure: a heading, a metadata list, then the nested units.

use std::fmt;

use super::datetime::{DateSpan, DayLabel, LocalDateTime};
use crate::{
    calendar,
    models::{
        Day, FocusProfile, LoadLevel, PeriodizationStrategy, Phase, PhaseType, Plan, PlanSummary,
        TrainingContext, Week,
    },
    progression,
};

impl fmt::Display for PeriodizationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for PhaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for FocusProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for LoadLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

fn owner_line(user_id: Option<&str>, client_id: Option<&str>) -> Option<String> {
    match (user_id, client_id) {
        (Some(user), Some(client)) => Some(format!("user {user}, client {client}")),
        (Some(user), None) => Some(format!("user {user}")),
        (None, Some(client)) => Some(format!("client {client}")),
        (None, None) => None,
    }
}

fn percent(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.name)?;
        writeln!(f)?;

        writeln!(f, "- Strategy: {}", self.strategy)?;
        match self.secondary_focus {
            Some(secondary) => writeln!(f, "- Focus: {} / {secondary}", self.primary_focus)?,
            None => writeln!(f, "- Focus: {}", self.primary_focus)?,
        }
        writeln!(
            f,
            "- Dates: {} ({} weeks)",
            DateSpan(self.start_date, self.end_date),
            self.duration_weeks()
        )?;
        let days: Vec<&str> = self
            .effective_training_days()
            .into_iter()
            .map(calendar::weekday_name)
            .collect();
        writeln!(f, "- Training days: {}", days.join(", "))?;
        if let Some(owner) = owner_line(self.user_id.as_deref(), self.client_id.as_deref()) {
            writeln!(f, "- Owner: {owner}")?;
        }
        writeln!(
            f,
            "- Status: {}",
            if self.is_active { "active" } else { "inactive" }
        )?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        if self.phases.is_empty() {
            writeln!(f, "\nNo structure generated for this plan.")?;
        } else {
            for phase in &self.phases {
                writeln!(f)?;
                write!(f, "{phase}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}", self.name)?;
        writeln!(f)?;
        writeln!(f, "- Dates: {}", DateSpan(self.start_date, self.end_date))?;
        writeln!(f, "- Focus: {}", self.focus)?;
        writeln!(
            f,
            "- Weeks: {} load + {} deload",
            self.load_weeks, self.deload_weeks
        )?;

        if self.weeks.is_empty() {
            writeln!(f)?;
            return writeln!(f, "No weeks generated.");
        }

        let pattern: Vec<&str> = progression::progression_pattern(self)
            .iter()
            .map(|week| week.load_level.with_icon())
            .collect();
        writeln!(f, "- Pattern: {}", pattern.join(" → "))?;
        writeln!(f)?;

        writeln!(
            f,
            "| Week | Starts | Load | Intensity | Volume | Progression | Days |"
        )?;
        writeln!(f, "|---|---|---|---|---|---|---|")?;
        for week in &self.weeks {
            write!(f, "{week}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Week {
    /// One markdown table row; training days are listed with their IDs.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let days: Vec<String> = self
            .training_days()
            .map(|day| {
                let mark = if day.is_completed { " ✓" } else { "" };
                format!("{} #{}{mark}", calendar::weekday_name(day.weekday), day.id)
            })
            .collect();
        let level = if self.is_deload {
            format!("{} (deload)", self.load_level.with_icon())
        } else {
            self.load_level.with_icon().to_string()
        };

        writeln!(
            f,
            "| {} | {} | {level} | {:.2} | {:.2} | {} | {} |",
            self.week_number,
            self.start_date,
            self.intensity_factor,
            self.volume_factor,
            percent(self.load_progression_percentage),
            days.join(", ")
        )
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.is_rest_day {
            "rest day"
        } else {
            "training day"
        };
        write!(f, "{} (ID: {}), {kind}", DayLabel(self.date), self.id)?;
        if self.is_completed {
            write!(f, ", completed")?;
        }
        if let Some(workout) = self.workout_id {
            write!(f, ", workout {workout}")?;
        }
        if let Some(notes) = &self.notes {
            write!(f, "\n  Notes: {notes}")?;
        }
        Ok(())
    }
}

impl fmt::Display for PlanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let progress = if self.training_day_count > 0 {
            format!(" ({}/{})", self.completed_day_count, self.training_day_count)
        } else {
            String::new()
        };

        writeln!(f, "## {} (ID: {}){progress}", self.name, self.id)?;
        writeln!(f)?;
        writeln!(f, "- **Strategy**: {}", self.strategy)?;
        writeln!(
            f,
            "- **Dates**: {}",
            DateSpan(self.start_date, self.end_date)
        )?;
        writeln!(
            f,
            "- **Structure**: {} phases, {} weeks",
            self.phase_count, self.week_count
        )?;
        if let Some(owner) = owner_line(self.user_id.as_deref(), self.client_id.as_deref()) {
            writeln!(f, "- **Owner**: {owner}")?;
        }
        if !self.is_active {
            writeln!(f, "- **Status**: inactive")?;
        }
        writeln!(f, "- **Created**: {}", LocalDateTime(&self.created_at))?;
        writeln!(f)?;

        Ok(())
    }
}

impl fmt::Display for TrainingContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plan = self.plan();
        let phase = self.phase();
        let week = self.week();

        writeln!(f, "# Training context for {}", DayLabel(self.date))?;
        writeln!(f)?;
        writeln!(f, "- Plan: {} (ID: {})", plan.name, plan.id)?;
        writeln!(f, "- Phase: {} ({} focus)", phase.name, self.focus)?;
        writeln!(
            f,
            "- Week: {} (week {} of {} in phase), {}",
            week.week_number,
            week.order_in_phase,
            phase.weeks.len(),
            self.load_level.with_icon()
        )?;
        writeln!(f, "- Intensity factor: {:.2}", self.intensity_factor)?;
        writeln!(f, "- Volume factor: {:.2}", self.volume_factor)?;
        writeln!(
            f,
            "- Progression: {} per week",
            percent(week.load_progression_percentage)
        )?;
        if week.is_deload {
            writeln!(f, "- Deload week")?;
        }
        match self.day() {
            Some(day) => writeln!(f, "- Day: {day}")?,
            None => writeln!(f, "- Day: none scheduled")?,
        }

        Ok(())
    }
}
