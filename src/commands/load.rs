//! Tauri commands for training load tracking

use chrono::NaiveDate;
use std::sync::Arc;
use tauri::State;

use crate::db::AppState;
use crate::load;
use crate::models::load::{LoadEntry, LoadEvaluation};
use crate::models::plan::PlayerContext;

/// Record this week's load and evaluate it against the history
#[tauri::command]
pub async fn record_and_evaluate_load(
  state: State<'_, Arc<AppState>>,
  context: PlayerContext,
  today: NaiveDate,
) -> Result<LoadEvaluation, String> {
  // One writer at a time across concurrent requests
  let _guard = state.history_write_lock.lock().await;
  load::record_and_evaluate(&state.db, &context, today)
    .await
    .map_err(|e| e.to_string())
}

/// Fetch the load history oldest-first, optionally truncated to the most
/// recent `limit` entries (the dashboard shows the last five)
#[tauri::command]
pub async fn get_load_history(
  state: State<'_, Arc<AppState>>,
  limit: Option<u32>,
) -> Result<Vec<LoadEntry>, String> {
  let mut history = load::fetch_history(&state.db).await;

  if let Some(limit) = limit {
    let limit = limit as usize;
    if history.len() > limit {
      history.drain(..history.len() - limit);
    }
  }

  Ok(history)
}
