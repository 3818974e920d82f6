//! The scoring engine: pure functions from a catalog and an answer set
//! to scores, risk levels, compliance standings, and recommendations.
//!
//! Nothing in this module performs I/O or holds state; every operation
//! is a deterministic function of its inputs, and every path returns a
//! value. Malformed input degrades to a zero contribution instead of an
//! error: the questionnaire UI is the only producer of answers, and a
//! stray answer should never sink a whole assessment.

use crate::catalog::Catalog;
use crate::core::{
    Answer, AnswerValue, ComplianceStatus, ComplianceSummary, Framework, Question, QuestionKind,
    RiskLevel, ScoringDirection,
};

/// Round to two decimal places, half away from zero.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Score one answer against its question.
///
/// The result is always within `[0, question.weight]`, rounded to two
/// decimals. An answer value whose type does not match the question
/// kind contributes nothing.
pub fn score_answer(question: &Question, value: &AnswerValue) -> f64 {
    let score = match (question.kind, value) {
        (QuestionKind::Boolean, AnswerValue::Bool(true)) => question.weight,
        (QuestionKind::Boolean, _) => 0.0,
        (QuestionKind::Scale, AnswerValue::Scale(rating)) => {
            // A rating of 1 still earns weight/5; the nonzero floor is
            // intentional scale behavior.
            let rating = (*rating).min(5);
            (f64::from(rating) / 5.0) * question.weight
        }
        (QuestionKind::Scale, _) => 0.0,
        (QuestionKind::Multiple, AnswerValue::Choice(selected)) => score_choice(question, selected),
        (QuestionKind::Multiple, _) => 0.0,
        // Free-text answers carry no score.
        (QuestionKind::Text, _) => 0.0,
    };
    round2(score)
}

fn score_choice(question: &Question, selected: &str) -> f64 {
    let count = question.options.len();
    if count < 2 {
        // Catalog validation rejects these; a lone option is worth full
        // weight rather than a division by zero.
        return question.weight;
    }
    // Unknown selections fall back to the first option.
    let index = question
        .options
        .iter()
        .position(|option| option == selected)
        .unwrap_or(0);
    let position = match question.direction {
        ScoringDirection::Forward => index,
        ScoringDirection::Reversed => count - 1 - index,
    };
    (position as f64 / (count - 1) as f64) * question.weight
}

/// Weighted overall score in `[0, 100]`.
///
/// The denominator is the whole catalog, not just answered questions:
/// an incomplete answer set scores proportionally lower rather than
/// erroring. Answers referencing unknown question ids contribute 0.
pub fn overall_score(catalog: &Catalog, answers: &[Answer]) -> u32 {
    let total_possible = catalog.total_weight();
    if total_possible <= 0.0 {
        return 0;
    }
    let actual: f64 = answers
        .iter()
        .filter_map(|answer| {
            catalog
                .get(&answer.question_id)
                .map(|question| score_answer(question, &answer.value))
        })
        .sum();
    ((actual / total_possible) * 100.0).round() as u32
}

/// Per-framework compliance standings, one per known framework, in the
/// fixed display order ISO27001, NIST, SOC2.
pub fn compliance_scores(catalog: &Catalog, answers: &[Answer]) -> Vec<ComplianceSummary> {
    Framework::ALL
        .iter()
        .map(|&framework| framework_summary(catalog, answers, framework))
        .collect()
}

fn framework_summary(
    catalog: &Catalog,
    answers: &[Answer],
    framework: Framework,
) -> ComplianceSummary {
    let max_score: f64 = catalog
        .iter()
        .filter(|q| q.frameworks.contains(&framework))
        .map(|q| q.weight)
        .sum();
    let actual: f64 = answers
        .iter()
        .filter_map(|answer| {
            catalog
                .get(&answer.question_id)
                .filter(|q| q.frameworks.contains(&framework))
                .map(|q| score_answer(q, &answer.value))
        })
        .sum();
    // A framework with no tagged questions reads as 0%, not NaN.
    let percentage = if max_score > 0.0 {
        ((actual / max_score) * 100.0).round() as u32
    } else {
        0
    };
    ComplianceSummary {
        framework,
        full_name: framework.full_name().to_string(),
        score: round2(actual),
        max_score,
        percentage,
        status: ComplianceStatus::from_percentage(percentage),
    }
}

/// Canned remediation guidance, gated by score band.
///
/// Bands are cumulative: every entry from a higher band precedes the
/// entries its band adds, so a score below 40 yields all nine in fixed
/// order and a score of 80 or above yields none. The risk level is part
/// of the call contract but does not currently select guidance.
pub fn recommendations(score: u32, _risk_level: RiskLevel) -> Vec<String> {
    let mut recs: Vec<String> = Vec::new();

    if score < 80 {
        recs.push("Implement multi-factor authentication across all systems".to_string());
        recs.push("Establish a comprehensive incident response plan".to_string());
        recs.push("Conduct regular security awareness training".to_string());
    }

    if score < 60 {
        recs.push("Deploy endpoint detection and response (EDR) solutions".to_string());
        recs.push("Implement network segmentation and zero-trust architecture".to_string());
        recs.push("Establish 24/7 security monitoring and alerting".to_string());
    }

    if score < 40 {
        recs.push("Engage a third-party security firm for comprehensive assessment".to_string());
        recs.push("Implement privileged access management (PAM) solution".to_string());
        recs.push("Establish a Security Operations Center (SOC)".to_string());
    }

    recs
}
