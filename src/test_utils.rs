//! Test utilities and helpers for integration and unit testing
//!
//! This module provides common test infrastructure including:
//! - Database setup/teardown
//! - History seeding
//! - Mock data factories
//! - Helper assertions

use chrono::NaiveDate;
use sqlx::SqlitePool;

use crate::calendar::WeekDay;
use crate::models::plan::{Objective, PlayerContext};

/// ---------------------------------------------------------------------------
/// Database Test Utilities
/// ---------------------------------------------------------------------------

/// Create an in-memory SQLite database for testing
/// Runs all migrations and returns a ready-to-use pool
///
/// Uses max_connections(1) to prevent multiple pool connections from creating
/// isolated in-memory databases, which would cause intermittent test failures
pub async fn setup_test_db() -> SqlitePool {
  let pool = sqlx::sqlite::SqlitePoolOptions::new()
    .max_connections(1)
    .connect("sqlite::memory:")
    .await
    .expect("Failed to create in-memory database");

  // Run migrations
  sqlx::migrate!("./migrations")
    .run(&pool)
    .await
    .expect("Failed to run migrations");

  pool
}

/// Close a test database pool
pub async fn teardown_test_db(pool: SqlitePool) {
  pool.close().await;
}

/// Seed the history with `count` weekly entries, one week apart, oldest
/// first. Loads alternate between a light and a heavier week.
/// Returns the seeded loads in insertion order.
pub async fn seed_test_history(pool: &SqlitePool, count: usize) -> Vec<i64> {
  let mut loads = Vec::new();

  for i in 0..count {
    let minutes: i64 = if i % 2 == 0 { 60 } else { 85 };
    let fatigue: i64 = 2;
    let load = minutes * fatigue;
    let date = test_date((i * 7) as i64);

    sqlx::query(
      r#"
      INSERT INTO load_history
        (date, load, has_match, match_day, fatigue, minutes_played, objective)
      VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
      "#,
    )
    .bind(date.format("%Y-%m-%d").to_string())
    .bind(load)
    .bind(true)
    .bind(WeekDay::Saturday.to_string())
    .bind(fatigue)
    .bind(minutes)
    .bind(Objective::Maintain.to_string())
    .execute(pool)
    .await
    .expect("Failed to seed load entry");

    loads.push(load);
  }

  loads
}

/// ---------------------------------------------------------------------------
/// Mock Data Factories
/// ---------------------------------------------------------------------------

/// Create a mock match-week context for testing
pub fn mock_match_context() -> PlayerContext {
  PlayerContext {
    has_match: true,
    match_day: Some(WeekDay::Saturday),
    fatigue: 2,
    minutes_played: 90,
    objective: Objective::Maintain,
  }
}

/// Create a mock match-free context for testing
pub fn mock_no_match_context() -> PlayerContext {
  PlayerContext {
    has_match: false,
    match_day: None,
    fatigue: 2,
    minutes_played: 60,
    objective: Objective::Speed,
  }
}

/// ---------------------------------------------------------------------------
/// Time Helpers
/// ---------------------------------------------------------------------------

/// Fixed base date plus `days`; keeps test data deterministic
pub fn test_date(days: i64) -> NaiveDate {
  NaiveDate::from_ymd_opt(2026, 1, 5).expect("valid base date") + chrono::Duration::days(days)
}

/// ---------------------------------------------------------------------------
/// Test Macros
/// ---------------------------------------------------------------------------

/// Assert two floats are approximately equal within a tolerance
#[macro_export]
macro_rules! assert_approx_eq {
  ($left:expr, $right:expr, $tolerance:expr) => {
    let diff = ($left - $right).abs();
    assert!(
      diff < $tolerance,
      "Values not approximately equal: {} vs {} (diff: {}, tolerance: {})",
      $left,
      $right,
      diff,
      $tolerance
    );
  };
}

/// ---------------------------------------------------------------------------
/// Tests for Test Utilities
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn test_setup_db_creates_schema() {
    let pool = setup_test_db().await;

    let tables: Vec<(String,)> = sqlx::query_as(
      "SELECT name FROM sqlite_master WHERE type='table' AND name = 'load_history'",
    )
    .fetch_all(&pool)
    .await
    .expect("Failed to query tables");

    assert_eq!(tables.len(), 1);

    teardown_test_db(pool).await;
  }

  #[tokio::test]
  async fn test_seed_history_returns_loads_in_order() {
    let pool = setup_test_db().await;

    let loads = seed_test_history(&pool, 4).await;
    assert_eq!(loads, vec![120, 170, 120, 170]);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM load_history")
      .fetch_one(&pool)
      .await
      .expect("Failed to count entries");

    assert_eq!(count, 4);

    teardown_test_db(pool).await;
  }

  #[test]
  fn test_mock_factories_create_valid_data() {
    assert!(mock_match_context().validate().is_ok());
    assert!(mock_no_match_context().validate().is_ok());
  }

  #[test]
  fn test_test_date_is_stable() {
    assert_eq!(test_date(0).to_string(), "2026-01-05");
    assert_eq!(test_date(7).to_string(), "2026-01-12");
  }
}
