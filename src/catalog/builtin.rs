//! The built-in posture questionnaire: seven categories, eighteen
//! weighted questions.

use super::Catalog;
use crate::core::{Framework, Question, QuestionKind, ScoringDirection};
use once_cell::sync::Lazy;

use crate::core::Framework::{Iso27001, Nist, Soc2};

static BUILTIN: Lazy<Catalog> = Lazy::new(|| {
    Catalog::new(questions()).expect("built-in catalog must satisfy catalog invariants")
});

/// The fixed built-in catalog.
pub fn builtin_catalog() -> &'static Catalog {
    &BUILTIN
}

fn boolean(id: &str, category: &str, prompt: &str, weight: f64, frameworks: &[Framework]) -> Question {
    Question {
        id: id.to_string(),
        category: category.to_string(),
        prompt: prompt.to_string(),
        kind: QuestionKind::Boolean,
        weight,
        options: Vec::new(),
        direction: ScoringDirection::Forward,
        frameworks: frameworks.to_vec(),
    }
}

fn scale(id: &str, category: &str, prompt: &str, weight: f64, frameworks: &[Framework]) -> Question {
    Question {
        kind: QuestionKind::Scale,
        ..boolean(id, category, prompt, weight, frameworks)
    }
}

fn multiple(
    id: &str,
    category: &str,
    prompt: &str,
    weight: f64,
    options: &[&str],
    direction: ScoringDirection,
    frameworks: &[Framework],
) -> Question {
    Question {
        kind: QuestionKind::Multiple,
        options: options.iter().map(|s| s.to_string()).collect(),
        direction,
        ..boolean(id, category, prompt, weight, frameworks)
    }
}

fn questions() -> Vec<Question> {
    // Cadence questions list the most frequent option first and score
    // reversed; option order is semantically significant everywhere.
    vec![
        // Network Security
        boolean(
            "net-001",
            "Network Security",
            "Do you have a next-generation firewall with intrusion prevention?",
            8.0,
            &[Iso27001, Nist, Soc2],
        ),
        scale(
            "net-002",
            "Network Security",
            "Rate your network segmentation implementation (1-5)",
            7.0,
            &[Iso27001, Nist],
        ),
        boolean(
            "net-003",
            "Network Security",
            "Do you monitor network traffic 24/7?",
            6.0,
            &[Soc2, Nist],
        ),
        // Endpoint Security
        multiple(
            "end-001",
            "Endpoint Security",
            "What type of endpoint protection do you use?",
            8.0,
            &[
                "Traditional Antivirus",
                "Next-Gen Antivirus",
                "EDR Solution",
                "XDR Solution",
                "None",
            ],
            ScoringDirection::Forward,
            &[Iso27001, Nist, Soc2],
        ),
        boolean(
            "end-002",
            "Endpoint Security",
            "Are all endpoints encrypted?",
            9.0,
            &[Iso27001, Nist, Soc2],
        ),
        boolean(
            "end-003",
            "Endpoint Security",
            "Do you have mobile device management (MDM)?",
            6.0,
            &[Iso27001, Soc2],
        ),
        // Access Control
        boolean(
            "acc-001",
            "Access Control",
            "Do you enforce multi-factor authentication (MFA)?",
            10.0,
            &[Iso27001, Nist, Soc2],
        ),
        multiple(
            "acc-002",
            "Access Control",
            "How often do you review user access rights?",
            7.0,
            &["Weekly", "Monthly", "Quarterly", "Annually", "Never"],
            ScoringDirection::Reversed,
            &[Iso27001, Soc2],
        ),
        boolean(
            "acc-003",
            "Access Control",
            "Do you have privileged access management (PAM)?",
            8.0,
            &[Iso27001, Nist, Soc2],
        ),
        // Data Protection
        boolean(
            "data-001",
            "Data Protection",
            "Is sensitive data encrypted at rest and in transit?",
            10.0,
            &[Iso27001, Nist, Soc2],
        ),
        boolean(
            "data-002",
            "Data Protection",
            "Do you have a data loss prevention (DLP) solution?",
            7.0,
            &[Iso27001, Soc2],
        ),
        multiple(
            "data-003",
            "Data Protection",
            "How frequently do you backup critical data?",
            8.0,
            &["Real-time", "Daily", "Weekly", "Monthly", "Irregularly"],
            ScoringDirection::Forward,
            &[Iso27001, Nist, Soc2],
        ),
        // Incident Response
        boolean(
            "inc-001",
            "Incident Response",
            "Do you have a documented incident response plan?",
            9.0,
            &[Iso27001, Nist, Soc2],
        ),
        multiple(
            "inc-002",
            "Incident Response",
            "How often do you test your incident response procedures?",
            7.0,
            &["Monthly", "Quarterly", "Semi-annually", "Annually", "Never"],
            ScoringDirection::Reversed,
            &[Iso27001, Nist],
        ),
        boolean(
            "inc-003",
            "Incident Response",
            "Do you have a Security Operations Center (SOC)?",
            6.0,
            &[Nist, Soc2],
        ),
        // Employee Training
        multiple(
            "emp-001",
            "Employee Training",
            "How often do you conduct security awareness training?",
            6.0,
            &["Monthly", "Quarterly", "Semi-annually", "Annually", "Never"],
            ScoringDirection::Reversed,
            &[Iso27001, Nist, Soc2],
        ),
        boolean(
            "emp-002",
            "Employee Training",
            "Do you conduct phishing simulation exercises?",
            5.0,
            &[Iso27001, Nist],
        ),
        // Compliance & Governance
        boolean(
            "comp-001",
            "Compliance & Governance",
            "Do you have a formal information security policy?",
            8.0,
            &[Iso27001, Soc2],
        ),
        multiple(
            "comp-002",
            "Compliance & Governance",
            "How often do you conduct security risk assessments?",
            7.0,
            &["Monthly", "Quarterly", "Semi-annually", "Annually", "Never"],
            ScoringDirection::Reversed,
            &[Iso27001, Nist, Soc2],
        ),
    ]
}
