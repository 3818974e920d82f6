// Export modules for library usage
pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod intel;
pub mod io;
pub mod report;
pub mod scoring;
pub mod storage;

// Re-export commonly used types
pub use crate::catalog::{builtin_catalog, Catalog};
pub use crate::core::{
    Answer, AnswerValue, AssessmentStatus, CompanyProfile, ComplianceStatus, ComplianceSummary,
    Framework, Question, QuestionKind, RiskAssessment, RiskLevel, ScoringDirection,
};
pub use crate::errors::{RiskmapError, RiskmapResult};
pub use crate::intel::{DemoThreatFeed, ThreatFeed, ThreatIntelligence, VulnerabilitySummary};
pub use crate::report::writer::{create_writer, OutputFormat, ReportWriter};
pub use crate::report::{build_report, report_for, AssessmentReport};
pub use crate::scoring::{compliance_scores, overall_score, recommendations, score_answer};
pub use crate::storage::{AssessmentStore, StoredAssessment};
