//! Templated goal rewriting: canned clauses for failing dimensions plus a
//! fixed success-criteria tail. Pure substitution, no text generation.

use crate::model::SmartAssessment;

const FALLBACK_OBJECTIVE: &str = "Achieve objective";

const MEASURABLE_CLAUSE: &str =
    "with measurable success criteria including specific KPIs and performance targets";
const RELEVANT_CLAUSE: &str =
    "to deliver clear business value and improve operational efficiency";
const TIME_BOUND_CLAUSE: &str = "by the end of the current Program Increment (PI)";

const SUCCESS_CRITERIA_TEMPLATE: &str = "\n\nSuccess Criteria:\n\
- Define specific, quantifiable metrics\n\
- Establish baseline and target values\n\
- Identify key stakeholders and beneficiaries\n\
- Set clear acceptance criteria\n\
- Define timeline with key milestones";

/// Assembles the improved rewrite of a goal from its core objective and
/// the dimensions it failed. Clauses are appended in the fixed order
/// specific, measurable, relevant, time-bound; achievability is never
/// rewritten.
pub fn improved_version(core_objective: Option<&str>, assessment: &SmartAssessment) -> String {
    let core = core_objective.unwrap_or(FALLBACK_OBJECTIVE);

    let mut parts = Vec::new();
    if assessment.specific {
        parts.push(core.to_string());
    } else {
        parts.push(format!("Implement and deliver {}", core.to_lowercase()));
    }
    if !assessment.measurable {
        parts.push(MEASURABLE_CLAUSE.to_string());
    }
    if !assessment.relevant {
        parts.push(RELEVANT_CLAUSE.to_string());
    }
    if !assessment.time_bound {
        parts.push(TIME_BOUND_CLAUSE.to_string());
    }

    let mut improved = parts.join(" ");
    improved.push_str(SUCCESS_CRITERIA_TEMPLATE);
    improved
}
