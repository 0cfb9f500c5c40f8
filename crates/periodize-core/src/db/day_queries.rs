//! Day tracking operations.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension};

use super::utils::{id_column, parse_text};
use crate::{
    error::{DatabaseResultExt, EngineError, Result},
    models::{Day, UpdateDayRequest},
};

const SELECT_DAY_SQL: &str = "SELECT id, day_date, weekday, is_rest_day, workout_id, is_completed, notes FROM days WHERE id = ?1";
const UPDATE_DAY_SQL: &str = "UPDATE days SET is_completed = COALESCE(?1, is_completed), notes = COALESCE(?2, notes), workout_id = COALESCE(?3, workout_id) WHERE id = ?4";
const TOUCH_PLAN_OF_DAY_SQL: &str = "UPDATE plans SET updated_at = ?1 WHERE id = (SELECT ph.plan_id FROM days d JOIN weeks w ON w.id = d.week_id JOIN phases ph ON ph.id = w.phase_id WHERE d.id = ?2)";

impl super::Database {
    /// Retrieves a single day by its ID.
    pub fn get_day(&self, id: u64) -> Result<Option<Day>> {
        self.connection
            .query_row(SELECT_DAY_SQL, params![id as i64], |row| {
                Ok(Day {
                    id: id_column(row, 0)?,
                    date: parse_text(row, 1)?,
                    weekday: row.get(2)?,
                    is_rest_day: row.get(3)?,
                    workout_id: row.get::<_, Option<i64>>(4)?.map(|id| id as u64),
                    is_completed: row.get(5)?,
                    notes: row.get(6)?,
                })
            })
            .optional()
            .db_context("Failed to query day")
    }

    /// Applies the set fields of `request` to a day and returns the result.
    pub fn update_day(&mut self, id: u64, request: &UpdateDayRequest) -> Result<Day> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let updated = tx
            .execute(
                UPDATE_DAY_SQL,
                params![
                    request.is_completed,
                    request.notes,
                    request.workout_id.map(|id| id as i64),
                    id as i64,
                ],
            )
            .db_context("Failed to update day")?;

        if updated == 0 {
            return Err(EngineError::DayNotFound { id });
        }

        tx.execute(
            TOUCH_PLAN_OF_DAY_SQL,
            params![Timestamp::now().to_string(), id as i64],
        )
        .db_context("Failed to update plan timestamp")?;

        tx.commit().db_context("Failed to commit transaction")?;

        self.get_day(id)?.ok_or(EngineError::DayNotFound { id })
    }
}
