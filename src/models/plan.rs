use serde::{Deserialize, Serialize};

use crate::calendar::WeekDay;
use crate::error::TrainerError;

/// Training focus for the week. Serialized with the Spanish labels the
/// stored history format uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Objective {
  #[serde(rename = "Velocidad")]
  Speed,
  #[serde(rename = "Resistencia")]
  Endurance,
  #[serde(rename = "Mantener")]
  Maintain,
}

impl std::fmt::Display for Objective {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Objective::Speed => write!(f, "Velocidad"),
      Objective::Endurance => write!(f, "Resistencia"),
      Objective::Maintain => write!(f, "Mantener"),
    }
  }
}

impl std::str::FromStr for Objective {
  type Err = String;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "Velocidad" => Ok(Objective::Speed),
      "Resistencia" => Ok(Objective::Endurance),
      "Mantener" => Ok(Objective::Maintain),
      _ => Err(format!("Unknown objective: {}", s)),
    }
  }
}

/// One training session. Intensity is graded 0-5 where 0 means rest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
  #[serde(rename = "type")]
  pub kind: String,
  pub detail: String,
  pub intensity: u8,
}

/// A week day paired with its assigned session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedDay {
  pub day: WeekDay,
  pub session: Session,
}

/// Full seven-day plan, always Monday through Sunday
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekPlan {
  pub days: Vec<PlannedDay>,
}

impl WeekPlan {
  /// Build a plan from one session per canonical week slot
  pub fn from_sessions(sessions: [Session; 7]) -> Self {
    let days = WeekDay::WEEK
      .into_iter()
      .zip(sessions)
      .map(|(day, session)| PlannedDay { day, session })
      .collect();
    Self { days }
  }

  /// Session assigned to a given day
  pub fn session_for(&self, day: WeekDay) -> &Session {
    &self.days[day.index()].session
  }
}

/// Weekly context supplied by the player, one per plan request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerContext {
  #[serde(rename = "match")]
  pub has_match: bool,
  /// Only meaningful when `has_match` is true
  pub match_day: Option<WeekDay>,
  /// 1 = fresh, 5 = exhausted
  pub fatigue: u8,
  pub minutes_played: u32,
  pub objective: Objective,
}

impl PlayerContext {
  /// Caller contract check. Runs before plan generation and before any
  /// history write; nothing proceeds on failure.
  pub fn validate(&self) -> Result<(), TrainerError> {
    if !(1..=5).contains(&self.fatigue) {
      return Err(TrainerError::InvalidInput(format!(
        "fatigue must be between 1 and 5, got {}",
        self.fatigue
      )));
    }
    if self.has_match && self.match_day.is_none() {
      return Err(TrainerError::InvalidInput(
        "match scheduled but no match day given".to_string(),
      ));
    }
    Ok(())
  }

  /// The shape echoed into history entries: match day is cleared when no
  /// match is scheduled, matching the stored record format.
  pub fn snapshot(&self) -> PlayerContext {
    PlayerContext {
      match_day: if self.has_match { self.match_day } else { None },
      ..self.clone()
    }
  }
}
