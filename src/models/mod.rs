pub mod load;
pub mod plan;

pub use load::{LoadEntry, LoadEvaluation};
pub use plan::{Objective, PlannedDay, PlayerContext, Session, WeekPlan};
