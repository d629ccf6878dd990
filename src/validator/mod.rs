//! SMART goal validation engine.
//!
//! [`GoalValidator`] segments raw document text into candidate goal
//! statements, scores each against the five SMART dimensions with the
//! keyword/pattern rules in [`rules::SmartRules`], and assembles a
//! [`ValidationReport`] with per-goal rewrites and overall
//! recommendations. Stateless and deterministic: identical text yields
//! identical scores and issue lists.

mod improve;
pub mod rules;
mod segment;

pub use segment::{MAX_GOALS, MIN_GOAL_LENGTH, Segmenter};

use crate::model::{Dimension, GoalAnalysis, QualityLevel, SmartAssessment, ValidationReport};
use chrono::Utc;
use rules::SmartRules;
use tracing::debug;

/// Overall recommendations are capped at this many entries.
const MAX_RECOMMENDATIONS: usize = 6;

/// Appended after any targeted recommendations, in this order.
const GENERAL_RECOMMENDATIONS: [&str; 4] = [
    "Consider breaking down large goals into smaller, manageable objectives",
    "Ensure goals align with overall PI objectives and business strategy",
    "Review and validate goals with key stakeholders",
    "Establish regular check-ins and progress reviews",
];

/// Targeted recommendation per dimension, issued when more than half of
/// all goals fail that dimension. Checked in this fixed order.
const TARGETED_RECOMMENDATIONS: [(Dimension, &str); 4] = [
    (
        Dimension::Specific,
        "Focus on making goals more specific and actionable",
    ),
    (
        Dimension::Measurable,
        "Add quantifiable metrics and KPIs to all goals",
    ),
    (
        Dimension::TimeBound,
        "Establish clear deadlines and milestones for all goals",
    ),
    (
        Dimension::Relevant,
        "Clearly articulate business value and impact for each goal",
    ),
];

#[derive(Debug, Default)]
pub struct GoalValidator {
    rules: SmartRules,
    segmenter: Segmenter,
}

impl GoalValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a validator over an alternate rule table.
    pub fn with_rules(rules: SmartRules) -> Self {
        Self {
            rules,
            segmenter: Segmenter::new(),
        }
    }

    /// Scores every goal found in `text` against the SMART rubric.
    ///
    /// Total over its input: empty or unparseable text yields an empty
    /// report with a score of 0, never an error.
    pub fn validate_goals(&self, text: &str) -> ValidationReport {
        let candidates = self.segmenter.extract(text);
        debug!(count = candidates.len(), "extracted goal candidates");

        let goals: Vec<GoalAnalysis> = candidates
            .iter()
            .enumerate()
            .map(|(i, candidate)| self.analyze_goal(candidate, i + 1))
            .collect();

        let total: u32 = goals.iter().map(|g| u32::from(g.smart_score)).sum();
        let smart_score = if goals.is_empty() {
            0
        } else {
            (total / goals.len() as u32) as u8
        };
        let quality_level = if goals.is_empty() {
            QualityLevel::NoGoalsFound
        } else {
            QualityLevel::from_score(smart_score)
        };

        let recommendations = overall_recommendations(&goals);
        debug!(
            goals = goals.len(),
            smart_score, "goal validation complete"
        );

        ValidationReport {
            goals_count: goals.len(),
            goals,
            smart_score,
            quality_level,
            recommendations,
            processed_at: Utc::now(),
        }
    }

    fn analyze_goal(&self, text: &str, number: usize) -> GoalAnalysis {
        let title = self
            .segmenter
            .core_objective(text)
            .map(str::to_string)
            .unwrap_or_else(|| format!("Goal {}", number));

        let mut assessment = SmartAssessment::default();
        let mut issues = Vec::new();
        let mut recommendations = Vec::new();
        let mut raw_total = 0.0;

        for rule in self.rules.iter() {
            let score = rule.score(text);
            let passed = rule.passes(score);
            assessment.set(rule.dimension, passed);
            if !passed {
                issues.push(rule.issue.to_string());
                recommendations.push(rule.recommendation.to_string());
            }
            raw_total += score;
        }

        let smart_score = (raw_total * 20.0).round() as u8;
        let improved_version =
            improve::improved_version(self.segmenter.core_objective(text), &assessment);

        GoalAnalysis {
            title,
            original_text: text.to_string(),
            improved_version,
            smart_assessment: assessment,
            smart_score,
            issues,
            recommendations,
        }
    }
}

fn overall_recommendations(goals: &[GoalAnalysis]) -> Vec<String> {
    let mut recommendations = Vec::new();
    let half = goals.len() as f64 * 0.5;

    for (dimension, text) in TARGETED_RECOMMENDATIONS {
        let failures = goals
            .iter()
            .filter(|g| !g.smart_assessment.get(dimension))
            .count();
        if failures as f64 > half {
            recommendations.push(text.to_string());
        }
    }

    recommendations.extend(GENERAL_RECOMMENDATIONS.iter().map(|s| s.to_string()));
    recommendations.truncate(MAX_RECOMMENDATIONS);
    recommendations
}
