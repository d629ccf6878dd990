use super::types::{EffortSize, Priority, Team, WorkStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A unit of work under an epic, instantiated from a fixed template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub id: String,
    pub epic_id: String,
    pub title: String,
    pub description: String,
    pub acceptance_criteria: Vec<String>,
    pub priority: Priority,
    pub effort_size: EffortSize,
    pub effort_points: u32,
    pub assigned_team: Team,
    pub status: WorkStatus,
}

/// One epic per source goal, owning its features.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Epic {
    pub id: String,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub category: String,
    pub acceptance_criteria: Vec<String>,
    pub status: WorkStatus,
    pub features: Vec<Feature>,
    pub feature_count: usize,
    pub total_effort: u32,
}

impl Epic {
    /// Recomputes the derived fields from the owned features. Must be
    /// called after features are (re)generated; the rollups are never
    /// mutated independently.
    pub fn recompute_rollups(&mut self) {
        self.feature_count = self.features.len();
        self.total_effort = self.features.iter().map(|f| f.effort_points).sum();
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationSummary {
    pub total_epics: usize,
    pub total_features: usize,
    pub total_effort_points: u32,
    /// `max(1, total_effort_points / 20)` at a 20-point weekly velocity.
    pub estimated_weeks: u32,
    pub teams_involved: usize,
}

/// Full output of [`crate::generator::EpicGenerator::generate_epics_and_features`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResult {
    pub epics: Vec<Epic>,
    /// All features across all epics, flattened in generation order.
    pub features: Vec<Feature>,
    /// Feature titles grouped by team; holds titles only, not the features.
    pub team_assignments: BTreeMap<Team, Vec<String>>,
    pub summary: GenerationSummary,
    pub generated_at: DateTime<Utc>,
}
