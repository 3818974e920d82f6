pub mod types;

pub use types::{
    Answer, AnswerValue, AssessmentStatus, CompanyProfile, ComplianceStatus, ComplianceSummary,
    Framework, Question, QuestionKind, RiskAssessment, RiskLevel, ScoringDirection,
};
