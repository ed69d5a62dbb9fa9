//! Tauri commands for weekly plan generation

use crate::models::plan::{PlayerContext, WeekPlan};
use crate::planner;

/// Generate the weekly training plan for the given context.
/// Pure computation, no state touched.
#[tauri::command]
pub fn generate_week_plan(context: PlayerContext) -> Result<WeekPlan, String> {
  planner::generate_plan(&context).map_err(|e| e.to_string())
}
