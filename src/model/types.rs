use crate::error::{Result, SproutError};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[serde(alias = "High")]
    High,
    #[default]
    #[serde(alias = "Medium")]
    Medium,
    #[serde(alias = "Low")]
    Low,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::High => write!(f, "high"),
            Priority::Medium => write!(f, "medium"),
            Priority::Low => write!(f, "low"),
        }
    }
}

impl FromStr for Priority {
    type Err = SproutError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "high" | "p1" => Ok(Priority::High),
            "medium" | "p2" => Ok(Priority::Medium),
            "low" | "p3" => Ok(Priority::Low),
            _ => Err(SproutError::Parse(format!("Invalid priority: {}", s))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WorkStatus {
    #[default]
    Todo,
    #[serde(rename = "in-progress")]
    InProgress,
    Completed,
}

impl fmt::Display for WorkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkStatus::Todo => write!(f, "todo"),
            WorkStatus::InProgress => write!(f, "in-progress"),
            WorkStatus::Completed => write!(f, "completed"),
        }
    }
}

impl FromStr for WorkStatus {
    type Err = SproutError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "todo" | "to do" | "to-do" => Ok(WorkStatus::Todo),
            "in-progress" | "inprogress" | "in_progress" => Ok(WorkStatus::InProgress),
            "completed" | "done" => Ok(WorkStatus::Completed),
            _ => Err(SproutError::Parse(format!("Invalid status: {}", s))),
        }
    }
}

/// T-shirt sizing on the story-point scale used for feature estimates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum EffortSize {
    Xs,
    S,
    #[default]
    M,
    L,
    Xl,
    Xxl,
}

impl EffortSize {
    pub const ALL: [EffortSize; 6] = [
        EffortSize::Xs,
        EffortSize::S,
        EffortSize::M,
        EffortSize::L,
        EffortSize::Xl,
        EffortSize::Xxl,
    ];

    /// Story points for this size. The scale is fixed; points are never
    /// computed independently of it.
    pub fn points(&self) -> u32 {
        match self {
            EffortSize::Xs => 1,
            EffortSize::S => 2,
            EffortSize::M => 3,
            EffortSize::L => 5,
            EffortSize::Xl => 8,
            EffortSize::Xxl => 13,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            EffortSize::Xs => "Simple configuration or minor UI change",
            EffortSize::S => "Small feature or bug fix",
            EffortSize::M => "Medium complexity feature",
            EffortSize::L => "Large feature requiring multiple components",
            EffortSize::Xl => "Complex feature with significant integration",
            EffortSize::Xxl => "Epic-level work requiring breakdown",
        }
    }
}

impl fmt::Display for EffortSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EffortSize::Xs => write!(f, "XS"),
            EffortSize::S => write!(f, "S"),
            EffortSize::M => write!(f, "M"),
            EffortSize::L => write!(f, "L"),
            EffortSize::Xl => write!(f, "XL"),
            EffortSize::Xxl => write!(f, "XXL"),
        }
    }
}

impl FromStr for EffortSize {
    type Err = SproutError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "xs" => Ok(EffortSize::Xs),
            "s" => Ok(EffortSize::S),
            "m" => Ok(EffortSize::M),
            "l" => Ok(EffortSize::L),
            "xl" => Ok(EffortSize::Xl),
            "xxl" => Ok(EffortSize::Xxl),
            _ => Err(SproutError::Parse(format!("Invalid effort size: {}", s))),
        }
    }
}

/// Delivery teams, in assignment precedence order. When a feature title
/// matches keywords of several teams, the earlier variant wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Team {
    Frontend,
    Backend,
    DevOps,
    #[serde(rename = "QA")]
    Qa,
    Data,
    Security,
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Team::Frontend => write!(f, "Frontend"),
            Team::Backend => write!(f, "Backend"),
            Team::DevOps => write!(f, "DevOps"),
            Team::Qa => write!(f, "QA"),
            Team::Data => write!(f, "Data"),
            Team::Security => write!(f, "Security"),
        }
    }
}

impl FromStr for Team {
    type Err = SproutError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "frontend" => Ok(Team::Frontend),
            "backend" => Ok(Team::Backend),
            "devops" => Ok(Team::DevOps),
            "qa" => Ok(Team::Qa),
            "data" => Ok(Team::Data),
            "security" => Ok(Team::Security),
            _ => Err(SproutError::Parse(format!("Invalid team: {}", s))),
        }
    }
}

/// The five SMART dimensions, in fixed scoring and reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Specific,
    Measurable,
    Achievable,
    Relevant,
    TimeBound,
}

impl Dimension {
    pub const ALL: [Dimension; 5] = [
        Dimension::Specific,
        Dimension::Measurable,
        Dimension::Achievable,
        Dimension::Relevant,
        Dimension::TimeBound,
    ];
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Specific => write!(f, "specific"),
            Dimension::Measurable => write!(f, "measurable"),
            Dimension::Achievable => write!(f, "achievable"),
            Dimension::Relevant => write!(f, "relevant"),
            Dimension::TimeBound => write!(f, "time_bound"),
        }
    }
}
