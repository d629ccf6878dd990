//! Keyword-based team assignment.

use crate::model::Team;

/// Keyword sets per team, in assignment precedence order. The first team
/// with any keyword appearing in the lowercased feature title wins; no
/// scoring or ranking among multiple matches.
pub const TEAM_KEYWORDS: [(Team, &[&str]); 6] = [
    (
        Team::Frontend,
        &["ui", "ux", "react", "angular", "vue", "mobile", "web", "interface"],
    ),
    (
        Team::Backend,
        &["api", "service", "database", "server", "microservice", "integration"],
    ),
    (
        Team::DevOps,
        &["deployment", "infrastructure", "ci/cd", "monitoring", "security"],
    ),
    (
        Team::Qa,
        &["testing", "quality", "automation", "validation", "verification"],
    ),
    (
        Team::Data,
        &["analytics", "reporting", "data", "metrics", "dashboard"],
    ),
    (
        Team::Security,
        &["security", "authentication", "authorization", "compliance"],
    ),
];

/// Suggests a team for a feature title; Backend when nothing matches.
pub fn assign_team(feature_title: &str) -> Team {
    let title = feature_title.to_lowercase();
    for (team, keywords) in TEAM_KEYWORDS {
        if keywords.iter().any(|keyword| title.contains(keyword)) {
            return team;
        }
    }
    Team::Backend
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_titles_route_to_expected_teams() {
        assert_eq!(assign_team("Requirements Analysis and Design"), Team::Backend);
        assert_eq!(assign_team("Core Implementation"), Team::Backend);
        assert_eq!(assign_team("User Interface Development"), Team::Frontend);
        assert_eq!(assign_team("Integration and Testing"), Team::Backend);
        assert_eq!(assign_team("Documentation and Deployment"), Team::DevOps);
    }

    #[test]
    fn test_first_matching_team_wins() {
        // "web" (Frontend) and "api" (Backend) both match; Frontend is
        // declared first.
        assert_eq!(assign_team("Web API Gateway"), Team::Frontend);
        // "integration" (Backend) beats "testing" (QA).
        assert_eq!(assign_team("Integration Testing Suite"), Team::Backend);
    }

    #[test]
    fn test_assignment_is_case_insensitive() {
        assert_eq!(assign_team("MOBILE checkout screen"), Team::Frontend);
    }

    #[test]
    fn test_unmatched_title_defaults_to_backend() {
        assert_eq!(assign_team("Stakeholder Workshop"), Team::Backend);
    }

    #[test]
    fn test_security_keyword_is_claimed_by_devops_first() {
        // DevOps lists "security" and precedes the Security team.
        assert_eq!(assign_team("Security Hardening"), Team::DevOps);
    }
}
