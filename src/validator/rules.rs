//! SMART rule tables, held as data rather than branching code.
//!
//! Each dimension is scored by the same additive engine walking its
//! [`DimensionRule`]; swapping in an alternate table changes the rubric
//! without touching the scoring logic.

use crate::model::Dimension;
use regex::Regex;

/// Keywords with an additive (or, if negative, subtractive) weight per
/// matching term.
#[derive(Debug, Clone)]
pub struct KeywordSet {
    pub terms: &'static [&'static str],
    pub weight: f64,
}

/// A one-shot bonus applied when any of the phrases appears.
#[derive(Debug, Clone)]
pub struct PhraseBonus {
    pub phrases: &'static [&'static str],
    pub weight: f64,
}

/// Scoring rule for a single SMART dimension.
///
/// The raw score starts at `base`, accumulates keyword/pattern/bonus
/// contributions, and is clamped to `[0.0, 1.0]`. The dimension passes
/// when the clamped score exceeds `pass_threshold`.
#[derive(Debug, Clone)]
pub struct DimensionRule {
    pub dimension: Dimension,
    pub base: f64,
    pub keyword_sets: Vec<KeywordSet>,
    pub patterns: Vec<(Regex, f64)>,
    pub phrase_bonus: Option<PhraseBonus>,
    /// `(min_words, weight)`: bonus when the goal has more than
    /// `min_words` words.
    pub word_count_bonus: Option<(usize, f64)>,
    pub pass_threshold: f64,
    pub issue: &'static str,
    pub recommendation: &'static str,
}

impl DimensionRule {
    /// Raw score for a goal text, clamped to `[0.0, 1.0]`.
    ///
    /// Keywords and phrases match case-insensitively; regex patterns run
    /// against the original text and carry their own flags.
    pub fn score(&self, text: &str) -> f64 {
        let lower = text.to_lowercase();
        let mut score = self.base;

        for set in &self.keyword_sets {
            for term in set.terms {
                if lower.contains(term) {
                    score += set.weight;
                }
            }
        }

        for (pattern, weight) in &self.patterns {
            if pattern.is_match(text) {
                score += weight;
            }
        }

        if let Some(bonus) = &self.phrase_bonus {
            if bonus.phrases.iter().any(|p| lower.contains(p)) {
                score += bonus.weight;
            }
        }

        if let Some((min_words, weight)) = self.word_count_bonus {
            if text.split_whitespace().count() > min_words {
                score += weight;
            }
        }

        score.clamp(0.0, 1.0)
    }

    pub fn passes(&self, score: f64) -> bool {
        score > self.pass_threshold
    }
}

/// The full five-dimension rule table, in fixed dimension order.
#[derive(Debug, Clone)]
pub struct SmartRules {
    rules: Vec<DimensionRule>,
}

impl SmartRules {
    /// The standard SMART rubric.
    pub fn standard() -> Self {
        Self {
            rules: vec![
                DimensionRule {
                    dimension: Dimension::Specific,
                    base: 0.0,
                    keyword_sets: vec![
                        KeywordSet {
                            terms: &["implement", "develop", "create", "build", "establish", "achieve"],
                            weight: 0.2,
                        },
                        KeywordSet {
                            terms: &["improve", "enhance", "better", "optimize", "increase"],
                            weight: -0.1,
                        },
                    ],
                    patterns: vec![],
                    phrase_bonus: None,
                    word_count_bonus: Some((20, 0.2)),
                    pass_threshold: 0.4,
                    issue: "Goal lacks specificity - too vague or general",
                    recommendation: "Be more specific about what exactly will be accomplished",
                },
                DimensionRule {
                    dimension: Dimension::Measurable,
                    base: 0.0,
                    keyword_sets: vec![KeywordSet {
                        terms: &["%", "percent", "number", "count", "metric", "kpi", "score", "rating"],
                        weight: 0.2,
                    }],
                    patterns: vec![
                        (compile(r"\d+%"), 0.3),
                        (compile(r"\d+\.\d+"), 0.3),
                        (compile(r"\$\d+"), 0.3),
                        (compile(r"\d+\s*(seconds?|minutes?|hours?|days?|weeks?)"), 0.3),
                    ],
                    phrase_bonus: Some(PhraseBonus {
                        phrases: &["success criteria", "metrics"],
                        weight: 0.3,
                    }),
                    word_count_bonus: None,
                    pass_threshold: 0.3,
                    issue: "Goal lacks measurable success criteria",
                    recommendation: "Add specific metrics, numbers, or quantifiable outcomes",
                },
                DimensionRule {
                    dimension: Dimension::Achievable,
                    // Optimistic prior: achievable unless red flags appear.
                    base: 0.7,
                    keyword_sets: vec![
                        KeywordSet {
                            terms: &["revolutionary", "groundbreaking", "100%", "perfect", "eliminate all"],
                            weight: -0.2,
                        },
                        KeywordSet {
                            terms: &["realistic", "feasible", "attainable", "possible"],
                            weight: 0.1,
                        },
                    ],
                    patterns: vec![],
                    phrase_bonus: None,
                    word_count_bonus: None,
                    pass_threshold: 0.3,
                    issue: "Goal may be unrealistic or overly ambitious",
                    recommendation: "Ensure the goal is realistic given available resources and time",
                },
                DimensionRule {
                    dimension: Dimension::Relevant,
                    base: 0.0,
                    keyword_sets: vec![
                        KeywordSet {
                            terms: &["business value", "revenue", "customer", "user", "efficiency", "cost"],
                            weight: 0.2,
                        },
                        KeywordSet {
                            terms: &["business", "customer", "user experience", "performance", "security"],
                            weight: 0.1,
                        },
                    ],
                    patterns: vec![],
                    phrase_bonus: Some(PhraseBonus {
                        phrases: &["business value", "impact"],
                        weight: 0.3,
                    }),
                    word_count_bonus: None,
                    pass_threshold: 0.3,
                    issue: "Goal lacks clear business relevance or value",
                    recommendation: "Clearly state the business value and impact",
                },
                DimensionRule {
                    dimension: Dimension::TimeBound,
                    base: 0.0,
                    keyword_sets: vec![KeywordSet {
                        terms: &["by", "within", "deadline", "timeline", "end of", "complete by"],
                        weight: 0.2,
                    }],
                    patterns: vec![
                        (compile(r"(?i)by\s+\w+\s+\d{4}"), 0.4),
                        (compile(r"(?i)within\s+\d+\s+\w+"), 0.4),
                        (compile(r"(?i)end\s+of\s+\w+"), 0.4),
                    ],
                    phrase_bonus: Some(PhraseBonus {
                        phrases: &["pi", "program increment"],
                        weight: 0.3,
                    }),
                    word_count_bonus: None,
                    pass_threshold: 0.3,
                    issue: "Goal lacks clear timeline or deadline",
                    recommendation: "Add specific deadlines and milestones",
                },
            ],
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &DimensionRule> {
        self.rules.iter()
    }

    pub fn rule(&self, dimension: Dimension) -> Option<&DimensionRule> {
        self.rules.iter().find(|r| r.dimension == dimension)
    }
}

impl Default for SmartRules {
    fn default() -> Self {
        Self::standard()
    }
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in rule pattern is valid")
}
