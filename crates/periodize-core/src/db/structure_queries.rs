//! Phase, week and day persistence for generated plan structure.

use std::collections::HashMap;

use log::debug;
use rusqlite::{params, Connection};

use super::utils::{id_column, parse_text};
use crate::{
    error::{DatabaseResultExt, EngineError, Result},
    models::{Day, Phase, Week},
};

const INSERT_PHASE_SQL: &str = "INSERT INTO phases (plan_id, phase_order, name, start_date, end_date, phase_type, focus, load_weeks, deload_weeks) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)";
const INSERT_WEEK_SQL: &str = "INSERT INTO weeks (phase_id, week_order, week_number, start_date, end_date, load_level, intensity_factor, volume_factor, progression_percentage, is_deload) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)";
const INSERT_DAY_SQL: &str = "INSERT INTO days (week_id, day_date, weekday, is_rest_day, workout_id, is_completed, notes) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";

const SELECT_PHASES_SQL: &str = "SELECT id, phase_order, name, start_date, end_date, phase_type, focus, load_weeks, deload_weeks FROM phases WHERE plan_id = ?1 ORDER BY phase_order";
const SELECT_WEEKS_SQL: &str = "SELECT w.id, w.phase_id, w.week_order, w.week_number, w.start_date, w.end_date, w.load_level, w.intensity_factor, w.volume_factor, w.progression_percentage, w.is_deload FROM weeks w JOIN phases ph ON ph.id = w.phase_id WHERE ph.plan_id = ?1 ORDER BY ph.phase_order, w.week_order";
const SELECT_DAYS_SQL: &str = "SELECT d.id, d.week_id, d.day_date, d.weekday, d.is_rest_day, d.workout_id, d.is_completed, d.notes FROM days d JOIN weeks w ON w.id = d.week_id JOIN phases ph ON ph.id = w.phase_id WHERE ph.plan_id = ?1 ORDER BY d.day_date, d.id";

const COUNT_PHASES_SQL: &str = "SELECT COUNT(*) FROM phases WHERE plan_id = ?1";
const DELETE_PHASES_SQL: &str = "DELETE FROM phases WHERE plan_id = ?1";
const TOUCH_PLAN_SQL: &str = "UPDATE plans SET updated_at = ?1 WHERE id = ?2";

impl super::Database {
    /// Inserts `phases` below `plan_id` and writes the new row ids back into
    /// the tree. Runs on the caller's connection or transaction.
    pub(crate) fn write_structure(
        conn: &Connection,
        plan_id: u64,
        phases: &mut [Phase],
    ) -> Result<()> {
        let mut phase_stmt = conn
            .prepare_cached(INSERT_PHASE_SQL)
            .db_context("Failed to prepare phase insert")?;
        let mut week_stmt = conn
            .prepare_cached(INSERT_WEEK_SQL)
            .db_context("Failed to prepare week insert")?;
        let mut day_stmt = conn
            .prepare_cached(INSERT_DAY_SQL)
            .db_context("Failed to prepare day insert")?;

        for phase in phases.iter_mut() {
            phase.id = phase_stmt
                .insert(params![
                    plan_id as i64,
                    phase.order,
                    phase.name,
                    phase.start_date.to_string(),
                    phase.end_date.to_string(),
                    phase.phase_type.as_str(),
                    phase.focus.as_str(),
                    phase.load_weeks,
                    phase.deload_weeks,
                ])
                .db_context("Failed to insert phase")? as u64;

            for week in &mut phase.weeks {
                week.id = week_stmt
                    .insert(params![
                        phase.id as i64,
                        week.order_in_phase,
                        week.week_number,
                        week.start_date.to_string(),
                        week.end_date.to_string(),
                        week.load_level.as_str(),
                        week.intensity_factor,
                        week.volume_factor,
                        week.load_progression_percentage,
                        week.is_deload,
                    ])
                    .db_context("Failed to insert week")? as u64;

                for day in &mut week.days {
                    day.id = day_stmt
                        .insert(params![
                            week.id as i64,
                            day.date.to_string(),
                            day.weekday,
                            day.is_rest_day,
                            day.workout_id.map(|id| id as i64),
                            day.is_completed,
                            day.notes,
                        ])
                        .db_context("Failed to insert day")? as u64;
                }
            }
        }

        Ok(())
    }

    /// Loads the phase → week → day tree of a plan, in order.
    pub fn load_structure(&self, plan_id: u64) -> Result<Vec<Phase>> {
        let mut stmt = self
            .connection
            .prepare_cached(SELECT_PHASES_SQL)
            .db_context("Failed to prepare phase query")?;
        let mut phases = stmt
            .query_map(params![plan_id as i64], |row| {
                Ok(Phase {
                    id: id_column(row, 0)?,
                    order: row.get(1)?,
                    name: row.get(2)?,
                    start_date: parse_text(row, 3)?,
                    end_date: parse_text(row, 4)?,
                    phase_type: parse_text(row, 5)?,
                    focus: parse_text(row, 6)?,
                    load_weeks: row.get(7)?,
                    deload_weeks: row.get(8)?,
                    weeks: Vec::new(),
                })
            })
            .db_context("Failed to query phases")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to collect phases")?;

        if phases.is_empty() {
            return Ok(phases);
        }

        let phase_slots: HashMap<u64, usize> = phases
            .iter()
            .enumerate()
            .map(|(index, phase)| (phase.id, index))
            .collect();

        let mut stmt = self
            .connection
            .prepare_cached(SELECT_WEEKS_SQL)
            .db_context("Failed to prepare week query")?;
        let weeks = stmt
            .query_map(params![plan_id as i64], |row| {
                let phase_id = id_column(row, 1)?;
                let week = Week {
                    id: id_column(row, 0)?,
                    order_in_phase: row.get(2)?,
                    week_number: row.get(3)?,
                    start_date: parse_text(row, 4)?,
                    end_date: parse_text(row, 5)?,
                    load_level: parse_text(row, 6)?,
                    intensity_factor: row.get(7)?,
                    volume_factor: row.get(8)?,
                    load_progression_percentage: row.get(9)?,
                    is_deload: row.get(10)?,
                    days: Vec::new(),
                };
                Ok((phase_id, week))
            })
            .db_context("Failed to query weeks")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to collect weeks")?;

        let mut week_slots: HashMap<u64, (usize, usize)> = HashMap::new();
        for (phase_id, week) in weeks {
            if let Some(&phase_index) = phase_slots.get(&phase_id) {
                let weeks = &mut phases[phase_index].weeks;
                week_slots.insert(week.id, (phase_index, weeks.len()));
                weeks.push(week);
            }
        }

        let mut stmt = self
            .connection
            .prepare_cached(SELECT_DAYS_SQL)
            .db_context("Failed to prepare day query")?;
        let days = stmt
            .query_map(params![plan_id as i64], |row| {
                let week_id = id_column(row, 1)?;
                let day = Day {
                    id: id_column(row, 0)?,
                    date: parse_text(row, 2)?,
                    weekday: row.get(3)?,
                    is_rest_day: row.get(4)?,
                    workout_id: row.get::<_, Option<i64>>(5)?.map(|id| id as u64),
                    is_completed: row.get(6)?,
                    notes: row.get(7)?,
                };
                Ok((week_id, day))
            })
            .db_context("Failed to query days")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to collect days")?;

        for (week_id, day) in days {
            if let Some(&(phase_index, week_index)) = week_slots.get(&week_id) {
                phases[phase_index].weeks[week_index].days.push(day);
            }
        }

        Ok(phases)
    }

    /// Stores freshly generated structure for an existing plan.
    ///
    /// # Errors
    ///
    /// `PlanNotFound` when the plan does not exist and `StructureExists`
    /// when it already has phases.
    pub fn insert_structure(&mut self, plan_id: u64, phases: &mut [Phase]) -> Result<()> {
        if !self.plan_exists(plan_id)? {
            return Err(EngineError::PlanNotFound { id: plan_id });
        }
        if self.phase_count(plan_id)? > 0 {
            return Err(EngineError::StructureExists { plan_id });
        }

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;
        Self::write_structure(&tx, plan_id, phases)?;
        tx.execute(
            TOUCH_PLAN_SQL,
            params![jiff::Timestamp::now().to_string(), plan_id as i64],
        )
        .db_context("Failed to update plan timestamp")?;
        tx.commit().db_context("Failed to commit transaction")?;

        debug!("Stored {} phases for plan {plan_id}", phases.len());
        Ok(())
    }

    /// Removes all phases, weeks and days of a plan, keeping the plan row.
    /// Returns the number of phases removed.
    pub fn clear_structure(&mut self, plan_id: u64) -> Result<usize> {
        if !self.plan_exists(plan_id)? {
            return Err(EngineError::PlanNotFound { id: plan_id });
        }

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;
        let removed = tx
            .execute(DELETE_PHASES_SQL, params![plan_id as i64])
            .db_context("Failed to delete phases")?;
        tx.execute(
            TOUCH_PLAN_SQL,
            params![jiff::Timestamp::now().to_string(), plan_id as i64],
        )
        .db_context("Failed to update plan timestamp")?;
        tx.commit().db_context("Failed to commit transaction")?;

        debug!("Cleared {removed} phases from plan {plan_id}");
        Ok(removed)
    }

    /// Number of phases stored for a plan.
    pub fn phase_count(&self, plan_id: u64) -> Result<u32> {
        self.connection
            .query_row(COUNT_PHASES_SQL, params![plan_id as i64], |row| row.get(0))
            .db_context("Failed to count phases")
    }
}
