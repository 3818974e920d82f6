//! Common type definitions used across the codebase

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Answer formats a question can ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    /// Yes/no, full weight or nothing
    Boolean,
    /// Self-rated 1-5, linear credit
    Scale,
    /// One of an ordered option list
    Multiple,
    /// Free text, never scored
    Text,
}

impl QuestionKind {
    /// Get the display name for this kind
    pub fn display_name(&self) -> &str {
        match self {
            QuestionKind::Boolean => "Yes/No",
            QuestionKind::Scale => "Scale (1-5)",
            QuestionKind::Multiple => "Multiple Choice",
            QuestionKind::Text => "Free Text",
        }
    }
}

/// Which end of a multiple-choice option list earns full credit.
///
/// Cadence questions ("how often do you...") list the most frequent
/// option first, so they score `Reversed`; everything else lists the
/// weakest option first and scores `Forward`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringDirection {
    #[default]
    Forward,
    Reversed,
}

/// A single catalog entry. Catalog questions are load-time constants,
/// never mutated at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub category: String,
    pub prompt: String,
    pub kind: QuestionKind,
    /// Maximum score contribution of this question
    pub weight: f64,
    /// Ordered option list; only meaningful for `Multiple`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    #[serde(default)]
    pub direction: ScoringDirection,
    /// Frameworks this question counts toward (membership, not weighting)
    #[serde(default)]
    pub frameworks: Vec<Framework>,
}

/// The value a user gave for one question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Bool(bool),
    Scale(u8),
    /// Selected option for `Multiple` questions, or free text for `Text`
    Choice(String),
}

/// One answered question, at most one per question id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub question_id: String,
    pub value: AnswerValue,
}

impl Answer {
    pub fn new(question_id: impl Into<String>, value: AnswerValue) -> Self {
        Self {
            question_id: question_id.into(),
            value,
        }
    }
}

/// Compliance frameworks questions can count toward.
///
/// The variant order is the fixed display order of every per-framework
/// summary sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Framework {
    #[serde(rename = "ISO27001")]
    Iso27001,
    #[serde(rename = "NIST")]
    Nist,
    #[serde(rename = "SOC2")]
    Soc2,
}

impl Framework {
    /// All frameworks in display order
    pub const ALL: [Framework; 3] = [Framework::Iso27001, Framework::Nist, Framework::Soc2];

    /// Stable identifier used in catalogs and serialized output
    pub fn id(&self) -> &'static str {
        match self {
            Framework::Iso27001 => "ISO27001",
            Framework::Nist => "NIST",
            Framework::Soc2 => "SOC2",
        }
    }

    /// Full standard name shown in reports
    pub fn full_name(&self) -> &'static str {
        match self {
            Framework::Iso27001 => "ISO/IEC 27001:2022",
            Framework::Nist => "NIST Cybersecurity Framework",
            Framework::Soc2 => "SOC 2 Type II",
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Compliance standing against one framework
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComplianceStatus {
    Compliant,
    Partial,
    NonCompliant,
}

impl ComplianceStatus {
    /// Classify a rounded coverage percentage. Bands are inclusive on
    /// their lower bound: >= 80 compliant, >= 60 partial.
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            80.. => ComplianceStatus::Compliant,
            60..=79 => ComplianceStatus::Partial,
            _ => ComplianceStatus::NonCompliant,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            ComplianceStatus::Compliant => "Compliant",
            ComplianceStatus::Partial => "Partial",
            ComplianceStatus::NonCompliant => "Non-Compliant",
        }
    }
}

/// Derived compliance standing for one framework, an immutable snapshot
/// produced by one scoring run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceSummary {
    pub framework: Framework,
    pub full_name: String,
    /// Sum of answer contributions from tagged questions, 2 decimals
    pub score: f64,
    /// Sum of tagged question weights
    pub max_score: f64,
    /// Rounded coverage, 0-100
    pub percentage: u32,
    pub status: ComplianceStatus,
}

/// Qualitative risk band derived from the overall percentage score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    /// Classify an overall score. Bands are inclusive on their lower
    /// bound: >= 80 Low, >= 60 Medium, >= 40 High, below that Critical.
    pub fn from_score(score: u32) -> Self {
        match score {
            80.. => RiskLevel::Low,
            60..=79 => RiskLevel::Medium,
            40..=59 => RiskLevel::High,
            _ => RiskLevel::Critical,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
            RiskLevel::Critical => "Critical",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Lifecycle state of an assessment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssessmentStatus {
    Draft,
    InProgress,
    Completed,
}

/// Organization metadata carried through to reports, opaque to scoring
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub name: String,
    pub industry: String,
    pub employee_count: u32,
    pub annual_revenue: f64,
}

/// A completed questionnaire, scored. Created exactly once when the
/// questionnaire finishes; retaking produces a new snapshot, never a
/// mutation of this one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub id: String,
    pub company: CompanyProfile,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub status: AssessmentStatus,
    /// Weighted overall score, 0-100
    pub overall_score: u32,
    pub risk_level: RiskLevel,
}

impl RiskAssessment {
    /// Snapshot a finished questionnaire with a fresh identity.
    pub fn new(company: CompanyProfile, overall_score: u32) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            company,
            created_at: now,
            updated_at: now,
            status: AssessmentStatus::Completed,
            overall_score,
            risk_level: RiskLevel::from_score(overall_score),
        }
    }
}
