//! Error taxonomy for the trainer core
//!
//! Two failure classes cross the core boundary: caller contract violations
//! and persistence write failures. Read-path corruption never surfaces as
//! an error (see `load::fetch_history`).

use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Serialize)]
pub enum TrainerError {
  /// Context fields outside their declared domain. Surfaced before any
  /// plan generation or persistence work happens.
  #[error("Invalid input: {0}")]
  InvalidInput(String),

  /// History persistence failure. The current request's computation is
  /// still returned to the caller (degraded mode).
  #[error("Storage error: {0}")]
  Storage(String),
}
