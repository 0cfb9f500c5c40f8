//! Column conversion helpers shared by the query modules.

use std::{fmt::Display, str::FromStr};

use rusqlite::{types::Type, Row};

/// Conversion failure for a text column holding an unexpected value.
pub(crate) fn conversion_error(index: usize, message: String) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(
        index,
        Type::Text,
        Box::new(std::io::Error::new(std::io::ErrorKind::InvalidData, message)),
    )
}

/// Reads a text column and parses it with `FromStr`.
///
/// Covers dates, timestamps and the string-backed enums.
pub(crate) fn parse_text<T>(row: &Row<'_>, index: usize) -> rusqlite::Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    let raw: String = row.get(index)?;
    raw.parse::<T>()
        .map_err(|e| conversion_error(index, format!("Invalid value '{raw}': {e}")))
}

/// Reads an optional text column and parses it with `FromStr`.
pub(crate) fn parse_optional_text<T>(row: &Row<'_>, index: usize) -> rusqlite::Result<Option<T>>
where
    T: FromStr,
    T::Err: Display,
{
    let raw: Option<String> = row.get(index)?;
    raw.map(|value| {
        value
            .parse::<T>()
            .map_err(|e| conversion_error(index, format!("Invalid value '{value}': {e}")))
    })
    .transpose()
}

/// Reads a non-negative integer id column.
pub(crate) fn id_column(row: &Row<'_>, index: usize) -> rusqlite::Result<u64> {
    Ok(row.get::<_, i64>(index)? as u64)
}
