use super::types::{Dimension, Priority};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A goal as handed to the epic generator, after review and editing.
///
/// Only `text` is required; everything else falls back to safe defaults.
/// Accepts either `text` or `original_text` in serialized form so that a
/// validation report entry can be fed back in unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalRecord {
    #[serde(default, alias = "original_text")]
    pub text: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default)]
    pub priority: Priority,

    #[serde(default = "default_category")]
    pub category: String,
}

fn default_category() -> String {
    "Business".to_string()
}

impl GoalRecord {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            title: None,
            priority: Priority::default(),
            category: default_category(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }
}

/// Pass/fail verdict per SMART dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SmartAssessment {
    pub specific: bool,
    pub measurable: bool,
    pub achievable: bool,
    pub relevant: bool,
    pub time_bound: bool,
}

impl SmartAssessment {
    pub fn get(&self, dimension: Dimension) -> bool {
        match dimension {
            Dimension::Specific => self.specific,
            Dimension::Measurable => self.measurable,
            Dimension::Achievable => self.achievable,
            Dimension::Relevant => self.relevant,
            Dimension::TimeBound => self.time_bound,
        }
    }

    pub fn set(&mut self, dimension: Dimension, passed: bool) {
        match dimension {
            Dimension::Specific => self.specific = passed,
            Dimension::Measurable => self.measurable = passed,
            Dimension::Achievable => self.achievable = passed,
            Dimension::Relevant => self.relevant = passed,
            Dimension::TimeBound => self.time_bound = passed,
        }
    }

    /// Failing dimensions, in the fixed dimension order.
    pub fn failing(&self) -> Vec<Dimension> {
        Dimension::ALL
            .into_iter()
            .filter(|d| !self.get(*d))
            .collect()
    }
}

/// Scored analysis of a single goal, including the templated rewrite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalAnalysis {
    pub title: String,
    pub original_text: String,
    pub improved_version: String,
    pub smart_assessment: SmartAssessment,
    /// 0-100; each dimension contributes up to 20 points.
    pub smart_score: u8,
    pub issues: Vec<String>,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QualityLevel {
    Excellent,
    Good,
    Fair,
    Poor,
    #[serde(rename = "Very Poor")]
    VeryPoor,
    /// Sentinel for reports where segmentation found nothing to score.
    #[serde(rename = "No Goals Found")]
    NoGoalsFound,
}

impl QualityLevel {
    /// Maps an aggregate score onto the quality ladder. Zero-goal reports
    /// use [`QualityLevel::NoGoalsFound`] instead of falling through to
    /// `VeryPoor`.
    pub fn from_score(score: u8) -> Self {
        match score {
            90..=u8::MAX => QualityLevel::Excellent,
            75..=89 => QualityLevel::Good,
            60..=74 => QualityLevel::Fair,
            40..=59 => QualityLevel::Poor,
            _ => QualityLevel::VeryPoor,
        }
    }
}

impl fmt::Display for QualityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QualityLevel::Excellent => write!(f, "Excellent"),
            QualityLevel::Good => write!(f, "Good"),
            QualityLevel::Fair => write!(f, "Fair"),
            QualityLevel::Poor => write!(f, "Poor"),
            QualityLevel::VeryPoor => write!(f, "Very Poor"),
            QualityLevel::NoGoalsFound => write!(f, "No Goals Found"),
        }
    }
}

/// Full output of [`crate::validator::GoalValidator::validate_goals`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    pub goals_count: usize,
    pub goals: Vec<GoalAnalysis>,
    /// Truncating integer average of the per-goal scores; 0 with no goals.
    pub smart_score: u8,
    pub quality_level: QualityLevel,
    pub recommendations: Vec<String>,
    pub processed_at: DateTime<Utc>,
}
