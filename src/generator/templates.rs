//! Fixed epic and feature templates.

use crate::model::EffortSize;

/// Title given to a goal record that was never edited after validation.
/// A title equal to this is treated as absent when naming the epic.
pub const DEFAULT_GOAL_TITLE: &str = "Untitled Goal";

/// Fallback when no title is supplied and no action verb is found.
pub const GENERIC_EPIC_TITLE: &str = "Epic: Business Objective Implementation";

pub const MAX_EPIC_TITLE_LENGTH: usize = 60;
pub const MAX_OBJECTIVE_LENGTH: usize = 50;
pub const MAX_DESCRIPTION_LENGTH: usize = 200;

/// Identical for every epic.
pub const EPIC_ACCEPTANCE_CRITERIA: [&str; 3] = [
    "All features are implemented and tested",
    "Business requirements are met",
    "Performance targets are achieved",
];

/// At most this many features are instantiated per epic.
pub const MAX_FEATURES_PER_EPIC: usize = 5;

#[derive(Debug, Clone, Copy)]
pub struct FeatureTemplate {
    pub title: &'static str,
    pub description: &'static str,
    pub acceptance_criteria: [&'static str; 2],
    pub effort_size: EffortSize,
}

/// The fixed delivery sequence instantiated for every epic, regardless
/// of goal content.
pub const FEATURE_TEMPLATES: [FeatureTemplate; 5] = [
    FeatureTemplate {
        title: "Requirements Analysis and Design",
        description: "Analyze requirements and create technical design",
        acceptance_criteria: ["Requirements documented", "Design approved"],
        effort_size: EffortSize::M,
    },
    FeatureTemplate {
        title: "Core Implementation",
        description: "Implement core functionality",
        acceptance_criteria: ["Core features working", "Unit tests passing"],
        effort_size: EffortSize::L,
    },
    FeatureTemplate {
        title: "User Interface Development",
        description: "Create user interface components",
        acceptance_criteria: ["UI components created", "Responsive design"],
        effort_size: EffortSize::M,
    },
    FeatureTemplate {
        title: "Integration and Testing",
        description: "Integrate components and perform testing",
        acceptance_criteria: ["Integration complete", "All tests passing"],
        effort_size: EffortSize::M,
    },
    FeatureTemplate {
        title: "Documentation and Deployment",
        description: "Create documentation and deploy to production",
        acceptance_criteria: ["Documentation complete", "Successfully deployed"],
        effort_size: EffortSize::S,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_effort_totals_sixteen_points() {
        let total: u32 = FEATURE_TEMPLATES.iter().map(|t| t.effort_size.points()).sum();
        assert_eq!(total, 16);
    }

    #[test]
    fn test_template_order_is_the_delivery_sequence() {
        let titles: Vec<_> = FEATURE_TEMPLATES.iter().map(|t| t.title).collect();
        assert_eq!(
            titles,
            vec![
                "Requirements Analysis and Design",
                "Core Implementation",
                "User Interface Development",
                "Integration and Testing",
                "Documentation and Deployment",
            ]
        );
    }
}
