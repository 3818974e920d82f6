//! Assembly of the final assessment report.

pub mod writer;

use crate::catalog::Catalog;
use crate::core::{Answer, CompanyProfile, ComplianceSummary, RiskAssessment};
use crate::intel::{ThreatFeed, ThreatIntelligence, VulnerabilitySummary};
use crate::scoring::{compliance_scores, overall_score, recommendations};
use im::Vector;
use serde::{Deserialize, Serialize};

/// Everything a rendered report needs: the scored assessment plus the
/// derived and display-only sections. Immutable once assembled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentReport {
    pub assessment: RiskAssessment,
    pub compliance: Vector<ComplianceSummary>,
    pub vulnerabilities: Vector<VulnerabilitySummary>,
    pub recommendations: Vector<String>,
    pub threat_intel: ThreatIntelligence,
}

/// Score a completed questionnaire and assemble its report.
///
/// This is the single entry point the questionnaire front end calls at
/// submit time: one invocation, one immutable snapshot.
pub fn build_report(
    catalog: &Catalog,
    answers: &[Answer],
    company: CompanyProfile,
    feed: &mut dyn ThreatFeed,
) -> AssessmentReport {
    let score = overall_score(catalog, answers);
    let assessment = RiskAssessment::new(company, score);
    report_for(catalog, answers, assessment, feed)
}

/// Re-render a report for an existing assessment snapshot, recomputing
/// the derived sections from the stored answers. The snapshot itself is
/// not mutated; retaking the questionnaire goes through [`build_report`].
pub fn report_for(
    catalog: &Catalog,
    answers: &[Answer],
    assessment: RiskAssessment,
    feed: &mut dyn ThreatFeed,
) -> AssessmentReport {
    let recs = recommendations(assessment.overall_score, assessment.risk_level);
    AssessmentReport {
        compliance: compliance_scores(catalog, answers).into(),
        vulnerabilities: feed.vulnerabilities().into(),
        recommendations: recs.into(),
        threat_intel: feed.intelligence(),
        assessment,
    }
}
