//! Training load tracking
//!
//! Scalar load = minutes played × fatigue, appended to a rolling history
//! and compared week over week. A rise of more than 20% over the previous
//! entry is flagged as overload, a soft injury-risk signal.

use chrono::NaiveDate;
use sqlx::{Row, SqlitePool};

use crate::error::TrainerError;
use crate::models::load::{LoadEntry, LoadEvaluation};
use crate::models::plan::PlayerContext;

/// Week-over-week increase beyond this percentage flags an overload.
/// Strictly greater: exactly 20% is not an overload.
const OVERLOAD_THRESHOLD_PCT: f64 = 20.0;

/// Weekly training load
pub fn compute_load(minutes: u32, fatigue: u8) -> i64 {
    i64::from(minutes) * i64::from(fatigue)
}

/// Percent change against the previous load. None without a comparable
/// baseline: no previous entry, or a previous load of zero.
pub fn variation_percent(current: i64, previous: Option<i64>) -> Option<f64> {
    match previous {
        Some(prev) if prev > 0 => Some((current - prev) as f64 / prev as f64 * 100.0),
        _ => None,
    }
}

pub fn is_overload(variation: Option<f64>) -> bool {
    variation.is_some_and(|v| v > OVERLOAD_THRESHOLD_PCT)
}

/// ---------------------------------------------------------------------------
/// History persistence
/// ---------------------------------------------------------------------------

/// Load the full history, oldest first. Missing or corrupt storage
/// degrades to an empty history: a cold start, never an error.
pub async fn fetch_history(pool: &SqlitePool) -> Vec<LoadEntry> {
    match read_history(pool).await {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("Load history unreadable, starting empty: {}", e);
            Vec::new()
        }
    }
}

async fn read_history(pool: &SqlitePool) -> Result<Vec<LoadEntry>, String> {
    let rows = sqlx::query(
        r#"
        SELECT date, load, has_match, match_day, fatigue, minutes_played, objective
        FROM load_history
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await
    .map_err(|e| format!("Failed to read load history: {}", e))?;

    let mut entries = Vec::new();
    for row in rows {
        let date_str: String = row.get("date");
        let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
            .map_err(|e| format!("Bad date {:?}: {}", date_str, e))?;

        let match_day = match row.get::<Option<String>, _>("match_day") {
            Some(s) => Some(s.parse().map_err(|e| format!("Bad match day: {}", e))?),
            None => None,
        };

        let objective = row
            .get::<String, _>("objective")
            .parse()
            .map_err(|e| format!("Bad objective: {}", e))?;

        entries.push(LoadEntry {
            date,
            load: row.get("load"),
            inputs: PlayerContext {
                has_match: row.get("has_match"),
                match_day,
                fatigue: row.get::<i64, _>("fatigue") as u8,
                minutes_played: row.get::<i64, _>("minutes_played") as u32,
                objective,
            },
        });
    }

    Ok(entries)
}

/// Append one entry at the end of the history. Prior rows are never
/// touched or reordered; a failed insert surfaces as a storage error.
pub async fn append_entry(pool: &SqlitePool, entry: &LoadEntry) -> Result<(), TrainerError> {
    sqlx::query(
        r#"
        INSERT INTO load_history
            (date, load, has_match, match_day, fatigue, minutes_played, objective)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
        "#,
    )
    .bind(entry.date.format("%Y-%m-%d").to_string())
    .bind(entry.load)
    .bind(entry.inputs.has_match)
    .bind(entry.inputs.match_day.map(|d| d.to_string()))
    .bind(i64::from(entry.inputs.fatigue))
    .bind(i64::from(entry.inputs.minutes_played))
    .bind(entry.inputs.objective.to_string())
    .execute(pool)
    .await
    .map_err(|e| TrainerError::Storage(format!("Failed to append load entry: {}", e)))?;

    Ok(())
}

/// Record this week's context against the history and evaluate the trend.
///
/// A failed persist does not fail the request: the evaluation is returned
/// with `storage_error` set so the caller can tell the user the number is
/// valid but was not saved.
pub async fn record_and_evaluate(
    pool: &SqlitePool,
    ctx: &PlayerContext,
    today: NaiveDate,
) -> Result<LoadEvaluation, TrainerError> {
    ctx.validate()?;

    let load = compute_load(ctx.minutes_played, ctx.fatigue);
    let mut history = fetch_history(pool).await;

    let previous_load = history.last().map(|e| e.load);
    let variation_pct = variation_percent(load, previous_load);
    let overload = is_overload(variation_pct);

    let entry = LoadEntry {
        date: today,
        load,
        inputs: ctx.snapshot(),
    };

    let storage_error = match append_entry(pool, &entry).await {
        Ok(()) => None,
        Err(e) => {
            eprintln!("Failed to persist load entry: {}", e);
            Some(e.to_string())
        }
    };

    history.push(entry);

    Ok(LoadEvaluation {
        load,
        previous_load,
        variation_pct,
        overload,
        history,
        storage_error,
    })
}
