//! Goal segmentation: carving candidate goal statements out of raw
//! document text.

use regex::Regex;

/// Candidates shorter than this after normalization are discarded.
pub const MIN_GOAL_LENGTH: usize = 20;

/// Fallback fragments must exceed this length to count as a goal.
const MIN_FRAGMENT_LENGTH: usize = 50;

/// Upper bound on candidates per document.
pub const MAX_GOALS: usize = 10;

/// Marker families tried in order; all matches from every family are
/// accumulated. Blocks run until the next marker of the same family.
const MARKER_FAMILIES: [&str; 4] = [r"GOAL\s+\d+:", r"OBJECTIVE\s+\d+:", r"Goal:", r"Objective:"];

#[derive(Debug)]
pub struct Segmenter {
    families: Vec<Regex>,
    fallback_split: Regex,
    whitespace: Regex,
    marker_prefix: Regex,
}

impl Segmenter {
    pub fn new() -> Self {
        let families = MARKER_FAMILIES
            .iter()
            .map(|f| compile(&format!("(?i){}", f)))
            .collect();
        Self {
            families,
            fallback_split: compile(r"\n\s*\n|\d+\.\s+"),
            whitespace: compile(r"\s+"),
            marker_prefix: compile(r"(?i)^(?:GOAL\s+\d+:|OBJECTIVE\s+\d+:|Goal:|Objective:)\s*"),
        }
    }

    /// Extracts up to [`MAX_GOALS`] normalized goal candidates, in
    /// document order per marker family.
    pub fn extract(&self, text: &str) -> Vec<String> {
        let mut raw = Vec::new();

        for family in &self.families {
            let starts: Vec<usize> = family.find_iter(text).map(|m| m.start()).collect();
            for (i, &start) in starts.iter().enumerate() {
                let end = starts.get(i + 1).copied().unwrap_or(text.len());
                raw.push(&text[start..end]);
            }
        }

        if raw.is_empty() {
            raw = self
                .fallback_split
                .split(text)
                .map(str::trim)
                .filter(|fragment| fragment.len() > MIN_FRAGMENT_LENGTH)
                .collect();
        }

        let mut goals: Vec<String> = raw
            .into_iter()
            .map(|candidate| self.normalize(candidate))
            .filter(|candidate| candidate.len() >= MIN_GOAL_LENGTH)
            .collect();
        goals.truncate(MAX_GOALS);
        goals
    }

    /// Collapses whitespace runs to single spaces and trims.
    fn normalize(&self, candidate: &str) -> String {
        self.whitespace
            .replace_all(candidate.trim(), " ")
            .into_owned()
    }

    /// The goal text with any leading marker stripped; `None` when
    /// nothing remains.
    pub fn core_objective<'a>(&self, goal: &'a str) -> Option<&'a str> {
        let stripped = match self.marker_prefix.find(goal) {
            Some(m) => &goal[m.end()..],
            None => goal,
        };
        let stripped = stripped.trim();
        if stripped.is_empty() { None } else { Some(stripped) }
    }
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new()
    }
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in segmentation pattern is valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_numbered_goal_markers() {
        let segmenter = Segmenter::new();
        let text = "GOAL 1: Implement checkout flow.\n\nGOAL 2: Reduce load time by 30% by Q3.";
        let goals = segmenter.extract(text);
        assert_eq!(goals.len(), 2);
        assert_eq!(goals[0], "GOAL 1: Implement checkout flow.");
        assert_eq!(goals[1], "GOAL 2: Reduce load time by 30% by Q3.");
    }

    #[test]
    fn test_markers_are_case_insensitive() {
        let segmenter = Segmenter::new();
        let goals = segmenter.extract("goal 1: Ship the new billing integration soon.");
        assert_eq!(goals.len(), 1);
    }

    #[test]
    fn test_objective_marker_family() {
        let segmenter = Segmenter::new();
        let text = "Objective: Establish the data retention policy for all customer records.";
        let goals = segmenter.extract(text);
        assert_eq!(goals.len(), 1);
    }

    #[test]
    fn test_fallback_splits_on_blank_lines() {
        let segmenter = Segmenter::new();
        let text = "Deliver the new onboarding experience to all enterprise customers.\n\n\
                    Migrate the legacy reporting pipeline onto the managed warehouse.";
        let goals = segmenter.extract(text);
        assert_eq!(goals.len(), 2);
    }

    #[test]
    fn test_fallback_discards_short_fragments() {
        let segmenter = Segmenter::new();
        let text = "Short note.\n\nAnother short one.";
        assert!(segmenter.extract(text).is_empty());
    }

    #[test]
    fn test_normalization_collapses_whitespace() {
        let segmenter = Segmenter::new();
        let text = "Goal:  Implement   the\n\tnew payment   gateway service.";
        let goals = segmenter.extract(text);
        assert_eq!(goals, vec!["Goal: Implement the new payment gateway service."]);
    }

    #[test]
    fn test_twenty_char_boundary() {
        let segmenter = Segmenter::new();
        // Exactly 20 characters after normalization: kept.
        assert_eq!(segmenter.extract("Goal: Build API now!").len(), 1);
        // 19 characters: discarded.
        assert!(segmenter.extract("Goal: Build API now").is_empty());
    }

    #[test]
    fn test_caps_at_ten_goals() {
        let segmenter = Segmenter::new();
        let text: String = (1..=15)
            .map(|i| format!("GOAL {}: Deliver milestone number {} this cycle.\n", i, i))
            .collect();
        assert_eq!(segmenter.extract(&text).len(), MAX_GOALS);
    }

    #[test]
    fn test_empty_text_yields_no_goals() {
        let segmenter = Segmenter::new();
        assert!(segmenter.extract("").is_empty());
    }

    #[test]
    fn test_core_objective_strips_marker() {
        let segmenter = Segmenter::new();
        assert_eq!(
            segmenter.core_objective("GOAL 1: Implement checkout flow."),
            Some("Implement checkout flow.")
        );
        assert_eq!(
            segmenter.core_objective("Plain statement"),
            Some("Plain statement")
        );
        assert_eq!(segmenter.core_objective("Goal: "), None);
    }
}
