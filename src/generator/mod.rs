//! Epic and feature generation engine.
//!
//! [`EpicGenerator`] turns reviewed goal records into a two-level work
//! breakdown: one [`Epic`] per goal, each carrying the fixed feature
//! template sequence with effort points and team assignments, plus a
//! cross-epic summary.

pub mod teams;
pub mod templates;

pub use teams::assign_team;

use crate::ids::{IdGenerator, RandomIds};
use crate::model::{
    Epic, Feature, GenerationResult, GenerationSummary, GoalRecord, Team, WorkStatus,
};
use crate::text::{capitalize, truncate_chars, truncate_with_ellipsis};
use chrono::Utc;
use regex::Regex;
use std::collections::BTreeMap;
use templates::{
    DEFAULT_GOAL_TITLE, EPIC_ACCEPTANCE_CRITERIA, FEATURE_TEMPLATES, GENERIC_EPIC_TITLE,
    MAX_DESCRIPTION_LENGTH, MAX_EPIC_TITLE_LENGTH, MAX_FEATURES_PER_EPIC, MAX_OBJECTIVE_LENGTH,
};
use tracing::debug;

/// Assumed delivery velocity when estimating weeks from effort points.
const POINTS_PER_WEEK: u32 = 20;

pub struct EpicGenerator {
    ids: Box<dyn IdGenerator>,
    title_patterns: Vec<Regex>,
}

impl EpicGenerator {
    /// Production generator with random ids.
    pub fn new() -> Self {
        Self::with_ids(Box::new(RandomIds))
    }

    /// Generator with an injected id source, for reproducible output.
    pub fn with_ids(ids: Box<dyn IdGenerator>) -> Self {
        let title_patterns = [
            r"(?i)(implement|develop|create|build|establish|design)\s+([^.]+)",
            r"(?i)(improve|enhance|optimize)\s+([^.]+)",
        ]
        .iter()
        .map(|p| Regex::new(p).expect("built-in title pattern is valid"))
        .collect();
        Self { ids, title_patterns }
    }

    /// Produces the full work breakdown for the given goals, in input
    /// order. An empty slice yields an empty result, not an error.
    pub fn generate_epics_and_features(&mut self, goals: &[GoalRecord]) -> GenerationResult {
        let mut epics = Vec::with_capacity(goals.len());
        let mut all_features = Vec::new();

        for goal in goals {
            let mut epic = self.epic_from_goal(goal);
            let features = self.features_for_epic(&epic);
            all_features.extend(features.iter().cloned());
            epic.features = features;
            epic.recompute_rollups();
            epics.push(epic);
        }

        let mut team_assignments: BTreeMap<Team, Vec<String>> = BTreeMap::new();
        for feature in &all_features {
            team_assignments
                .entry(feature.assigned_team)
                .or_default()
                .push(feature.title.clone());
        }

        let total_effort: u32 = epics.iter().map(|e| e.total_effort).sum();
        let summary = GenerationSummary {
            total_epics: epics.len(),
            total_features: all_features.len(),
            total_effort_points: total_effort,
            estimated_weeks: (total_effort / POINTS_PER_WEEK).max(1),
            teams_involved: team_assignments.len(),
        };
        debug!(
            epics = summary.total_epics,
            features = summary.total_features,
            effort = summary.total_effort_points,
            "epic generation complete"
        );

        GenerationResult {
            epics,
            features: all_features,
            team_assignments,
            summary,
            generated_at: Utc::now(),
        }
    }

    fn epic_from_goal(&mut self, goal: &GoalRecord) -> Epic {
        Epic {
            id: self.ids.next("EPIC"),
            title: self.epic_title(goal),
            description: truncate_with_ellipsis(&goal.text, MAX_DESCRIPTION_LENGTH),
            priority: goal.priority,
            category: goal.category.clone(),
            acceptance_criteria: EPIC_ACCEPTANCE_CRITERIA
                .iter()
                .map(|c| c.to_string())
                .collect(),
            status: WorkStatus::default(),
            features: Vec::new(),
            feature_count: 0,
            total_effort: 0,
        }
    }

    /// Supplied non-default title, else "Verb Object" from the first
    /// action-verb phrase, else the generic fallback.
    fn epic_title(&self, goal: &GoalRecord) -> String {
        if let Some(title) = &goal.title {
            if !title.is_empty() && title != DEFAULT_GOAL_TITLE {
                return truncate_chars(title, MAX_EPIC_TITLE_LENGTH);
            }
        }

        for pattern in &self.title_patterns {
            if let Some(captures) = pattern.captures(&goal.text) {
                let action = capitalize(&captures[1]);
                let objective = truncate_chars(captures[2].trim(), MAX_OBJECTIVE_LENGTH);
                return format!("{} {}", action, objective);
            }
        }

        GENERIC_EPIC_TITLE.to_string()
    }

    fn features_for_epic(&mut self, epic: &Epic) -> Vec<Feature> {
        FEATURE_TEMPLATES
            .iter()
            .take(MAX_FEATURES_PER_EPIC)
            .map(|template| Feature {
                id: self.ids.next("FEAT"),
                epic_id: epic.id.clone(),
                title: template.title.to_string(),
                description: template.description.to_string(),
                acceptance_criteria: template
                    .acceptance_criteria
                    .iter()
                    .map(|c| c.to_string())
                    .collect(),
                priority: epic.priority,
                effort_size: template.effort_size,
                effort_points: template.effort_size.points(),
                assigned_team: assign_team(template.title),
                status: WorkStatus::default(),
            })
            .collect()
    }
}

impl Default for EpicGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::SequentialIds;
    use crate::model::Priority;

    fn generator() -> EpicGenerator {
        EpicGenerator::with_ids(Box::new(SequentialIds::new()))
    }

    #[test]
    fn test_one_epic_with_five_features_per_goal() {
        let mut generator = generator();
        let goals = vec![
            GoalRecord::new("Build reporting dashboard")
                .with_title("Dashboard")
                .with_priority(Priority::High)
                .with_category("Data"),
        ];
        let result = generator.generate_epics_and_features(&goals);

        assert_eq!(result.summary.total_epics, 1);
        assert_eq!(result.summary.total_features, 5);
        // M + L + M + M + S on the fixed scale.
        assert_eq!(result.summary.total_effort_points, 16);
        assert_eq!(result.summary.estimated_weeks, 1);

        let epic = &result.epics[0];
        assert_eq!(epic.title, "Dashboard");
        assert_eq!(epic.priority, Priority::High);
        assert_eq!(epic.category, "Data");
        assert_eq!(epic.feature_count, 5);
        assert_eq!(epic.total_effort, 16);
    }

    #[test]
    fn test_empty_goal_list_yields_empty_result() {
        let mut generator = generator();
        let result = generator.generate_epics_and_features(&[]);
        assert_eq!(result.summary.total_epics, 0);
        assert_eq!(result.summary.total_features, 0);
        assert_eq!(result.summary.total_effort_points, 0);
        assert_eq!(result.summary.estimated_weeks, 1);
        assert_eq!(result.summary.teams_involved, 0);
        assert!(result.epics.is_empty());
        assert!(result.features.is_empty());
        assert!(result.team_assignments.is_empty());
    }

    #[test]
    fn test_title_derived_from_action_verb() {
        let mut generator = generator();
        let goals = vec![GoalRecord::new(
            "We will implement a unified billing service. It replaces three legacy systems.",
        )];
        let result = generator.generate_epics_and_features(&goals);
        assert_eq!(result.epics[0].title, "Implement a unified billing service");
    }

    #[test]
    fn test_vague_verbs_are_second_choice() {
        let mut generator = generator();
        let goals = vec![GoalRecord::new("Optimize the search ranking pipeline. More detail.")];
        let result = generator.generate_epics_and_features(&goals);
        assert_eq!(result.epics[0].title, "Optimize the search ranking pipeline");
    }

    #[test]
    fn test_title_falls_back_to_generic() {
        let mut generator = generator();
        let goals = vec![GoalRecord::new("Everything should simply be nicer for all of us.")];
        let result = generator.generate_epics_and_features(&goals);
        assert_eq!(result.epics[0].title, GENERIC_EPIC_TITLE);
    }

    #[test]
    fn test_default_goal_title_is_ignored() {
        let mut generator = generator();
        let goals =
            vec![GoalRecord::new("Create a customer feedback portal.").with_title(DEFAULT_GOAL_TITLE)];
        let result = generator.generate_epics_and_features(&goals);
        assert_eq!(result.epics[0].title, "Create a customer feedback portal");
    }

    #[test]
    fn test_long_description_is_truncated_with_ellipsis() {
        let mut generator = generator();
        let text = "Build ".to_string() + &"x".repeat(300);
        let goals = vec![GoalRecord::new(text)];
        let result = generator.generate_epics_and_features(&goals);
        let description = &result.epics[0].description;
        assert!(description.ends_with("..."));
        assert_eq!(description.chars().count(), 203);
    }

    #[test]
    fn test_features_inherit_epic_priority() {
        let mut generator = generator();
        let goals = vec![GoalRecord::new("Build the audit log").with_priority(Priority::Low)];
        let result = generator.generate_epics_and_features(&goals);
        assert!(result.features.iter().all(|f| f.priority == Priority::Low));
    }

    #[test]
    fn test_feature_points_come_from_the_size_table() {
        let mut generator = generator();
        let goals = vec![GoalRecord::new("Build the audit log pipeline")];
        let result = generator.generate_epics_and_features(&goals);
        for feature in &result.features {
            assert_eq!(feature.effort_points, feature.effort_size.points());
        }
    }

    #[test]
    fn test_sequential_ids_and_back_references() {
        let mut generator = generator();
        let goals = vec![
            GoalRecord::new("Build the ingestion service"),
            GoalRecord::new("Create the admin console"),
        ];
        let result = generator.generate_epics_and_features(&goals);
        assert_eq!(result.epics[0].id, "EPIC-1001");
        assert_eq!(result.epics[1].id, "EPIC-1002");
        assert_eq!(result.features[0].id, "FEAT-1001");
        assert_eq!(result.features[9].id, "FEAT-1010");
        for epic in &result.epics {
            assert!(epic.features.iter().all(|f| f.epic_id == epic.id));
        }
    }

    #[test]
    fn test_team_assignments_group_titles() {
        let mut generator = generator();
        let goals = vec![GoalRecord::new("Build the ingestion service")];
        let result = generator.generate_epics_and_features(&goals);

        assert_eq!(result.summary.teams_involved, 3);
        assert_eq!(
            result.team_assignments[&Team::Frontend],
            vec!["User Interface Development"]
        );
        assert_eq!(
            result.team_assignments[&Team::DevOps],
            vec!["Documentation and Deployment"]
        );
        assert_eq!(result.team_assignments[&Team::Backend].len(), 3);
    }

    #[test]
    fn test_estimated_weeks_scales_with_effort() {
        let mut generator = generator();
        // 3 goals x 16 points = 48 points -> 2 weeks at 20 points/week.
        let goals = vec![
            GoalRecord::new("Build service one"),
            GoalRecord::new("Build service two"),
            GoalRecord::new("Build service three"),
        ];
        let result = generator.generate_epics_and_features(&goals);
        assert_eq!(result.summary.total_effort_points, 48);
        assert_eq!(result.summary.estimated_weeks, 2);
    }
}
