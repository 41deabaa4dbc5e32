use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Bloom-style cognitive level attached to a year learning outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CognitiveLevel {
    Understanding,
    Applying,
    Evaluating,
    Creating,
}

impl CognitiveLevel {
    /// Multiplier applied to PLO contributions when rolling up into a YLO.
    pub fn multiplier(self) -> f64 {
        match self {
            CognitiveLevel::Understanding => 1.0,
            CognitiveLevel::Applying => 1.1,
            CognitiveLevel::Evaluating => 1.2,
            CognitiveLevel::Creating => 1.3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CognitiveLevel::Understanding => "Understanding",
            CognitiveLevel::Applying => "Applying",
            CognitiveLevel::Evaluating => "Evaluating",
            CognitiveLevel::Creating => "Creating",
        }
    }
}

#[derive(Debug, Clone)]
pub struct CourseLearningOutcome {
    pub code: &'static str,
    pub text: &'static str,
    pub keywords: &'static [&'static str],
}

/// Immutable reference data for one course, loaded from the static table.
#[derive(Debug, Clone)]
pub struct CourseDescriptor {
    pub code: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub clos: &'static [CourseLearningOutcome],
    pub plo_mappings: &'static [&'static str],
    pub ylo_mappings: &'static [&'static str],
}

#[derive(Debug, Clone)]
pub struct ProgramLearningOutcome {
    pub code: &'static str,
    pub description: &'static str,
    /// Share of the weighted overall PLO score, in percent.
    pub weight: f64,
    /// Topic terms used to decide which CLOs feed this PLO.
    pub topics: &'static [&'static str],
}

#[derive(Debug, Clone)]
pub struct YearLearningOutcome {
    pub code: &'static str,
    pub description: &'static str,
    pub year: &'static str,
    pub level: CognitiveLevel,
    pub related_plos: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CloResult {
    pub score: f64,
    pub found_keywords: Vec<String>,
    pub total_keywords: usize,
    pub coverage: f64,
    pub confidence: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PloResult {
    pub score: f64,
    pub related_clos: Vec<String>,
    pub confidence: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YloResult {
    pub score: f64,
    pub cognitive_level: String,
    pub year: String,
    pub related_plos: Vec<String>,
    pub confidence: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverallScores {
    pub clo_average: f64,
    pub plo_average: f64,
    pub ylo_average: f64,
}

/// Unique assessment id: creation timestamp plus a short random suffix.
pub fn new_assessment_id(now: DateTime<Utc>) -> String {
    let suffix = uuid::Uuid::new_v4().simple().to_string();
    format!("ASSESS-{}-{}", now.format("%Y%m%d%H%M%S"), &suffix[..6])
}

/// One completed analysis run. Appended to the store, never updated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub assessment_id: String,
    pub course_code: String,
    pub content_hash: String,
    pub content_length: usize,
    pub content_preview: String,
    pub clo_results: BTreeMap<String, CloResult>,
    pub plo_results: BTreeMap<String, PloResult>,
    pub ylo_results: BTreeMap<String, YloResult>,
    pub overall_scores: OverallScores,
    pub recommendations: Vec<String>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assessment_ids_carry_timestamp_and_differ() {
        let now = Utc::now();
        let first = new_assessment_id(now);
        let second = new_assessment_id(now);
        assert!(first.starts_with("ASSESS-"));
        assert_eq!(first.len(), "ASSESS-".len() + 14 + 1 + 6);
        assert_ne!(first, second);
    }

    #[test]
    fn cognitive_levels_serialize_by_name() {
        let json = serde_json::to_string(&CognitiveLevel::Creating).unwrap();
        assert_eq!(json, "\"Creating\"");
    }
}
