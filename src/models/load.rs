use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::plan::PlayerContext;

/// One persisted history record. Immutable once written; the history is
/// append-only and kept in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadEntry {
  pub date: NaiveDate,
  /// minutes_played * fatigue
  pub load: i64,
  pub inputs: PlayerContext,
}

/// Result of recording this week's load against the history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadEvaluation {
  pub load: i64,
  /// Load of the last entry before this one; None on the first ever run
  pub previous_load: Option<i64>,
  /// Week-over-week change in percent; None without a comparable baseline
  pub variation_pct: Option<f64>,
  /// Load rose more than 20% over the previous week
  pub overload: bool,
  /// Full history including the entry recorded by this request
  pub history: Vec<LoadEntry>,
  /// Set when the entry could not be persisted; the computation above is
  /// still valid for this request
  pub storage_error: Option<String>,
}
