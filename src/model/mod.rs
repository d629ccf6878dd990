//! Data models for sprout.
//!
//! This module defines the core data structures:
//!
//! - [`GoalRecord`]: A reviewed goal as fed to the epic generator
//! - [`GoalAnalysis`] / [`ValidationReport`]: SMART scoring output
//! - [`Epic`] / [`Feature`] / [`GenerationResult`]: generated work breakdown
//! - [`Priority`], [`WorkStatus`], [`EffortSize`], [`Team`], [`Dimension`]:
//!   the shared enums

mod goal;
mod types;
mod work;

pub use goal::{GoalAnalysis, GoalRecord, QualityLevel, SmartAssessment, ValidationReport};
pub use types::{Dimension, EffortSize, Priority, Team, WorkStatus};
pub use work::{Epic, Feature, GenerationResult, GenerationSummary};
