//! The question catalog consumed by the scoring engine.
//!
//! A catalog is an ordered, validated, id-addressed set of questions.
//! The built-in catalog covers seven posture categories; a custom one
//! can be loaded from a TOML file with the same shape.

pub mod builtin;

use crate::core::{Question, QuestionKind};
use crate::errors::{RiskmapError, RiskmapResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

pub use builtin::builtin_catalog;

/// Ordered question set with id lookup. Immutable once constructed.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    questions: Vec<Question>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

/// On-disk catalog file shape: a list of `[[questions]]` tables.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    questions: Vec<Question>,
}

impl Catalog {
    /// Build a catalog from an ordered question list, validating the
    /// catalog invariants up front so scoring never has to.
    pub fn new(questions: Vec<Question>) -> RiskmapResult<Self> {
        validate_questions(&questions)?;
        let index = questions
            .iter()
            .enumerate()
            .map(|(i, q)| (q.id.clone(), i))
            .collect();
        Ok(Self { questions, index })
    }

    /// Parse a catalog from TOML text.
    pub fn from_toml_str(contents: &str) -> RiskmapResult<Self> {
        let file: CatalogFile = toml::from_str(contents)
            .map_err(|e| RiskmapError::Catalog(format!("failed to parse catalog: {e}")))?;
        Self::new(file.questions)
    }

    /// Load and validate a catalog file.
    pub fn load(path: &Path) -> RiskmapResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let catalog = Self::from_toml_str(&contents)?;
        log::debug!(
            "Loaded catalog with {} questions from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    pub fn get(&self, id: &str) -> Option<&Question> {
        self.index.get(id).map(|&i| &self.questions[i])
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Catalog-wide maximum score, the denominator of the overall score
    pub fn total_weight(&self) -> f64 {
        self.questions.iter().map(|q| q.weight).sum()
    }

    /// Category labels in first-appearance order; these partition the
    /// questionnaire into steps.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for q in &self.questions {
            if !seen.contains(&q.category.as_str()) {
                seen.push(q.category.as_str());
            }
        }
        seen
    }

    pub fn questions_in_category<'a>(&'a self, category: &str) -> Vec<&'a Question> {
        self.questions
            .iter()
            .filter(|q| q.category == category)
            .collect()
    }
}

fn validate_questions(questions: &[Question]) -> RiskmapResult<()> {
    let mut seen = std::collections::HashSet::new();
    for q in questions {
        if q.id.trim().is_empty() {
            return Err(RiskmapError::Catalog(
                "question with empty id".to_string(),
            ));
        }
        if !seen.insert(q.id.as_str()) {
            return Err(RiskmapError::Catalog(format!(
                "duplicate question id '{}'",
                q.id
            )));
        }
        if q.category.trim().is_empty() {
            return Err(RiskmapError::Catalog(format!(
                "question '{}' has an empty category",
                q.id
            )));
        }
        if !(q.weight > 0.0 && q.weight.is_finite()) {
            return Err(RiskmapError::Catalog(format!(
                "question '{}' must have a positive weight, got {}",
                q.id, q.weight
            )));
        }
        match q.kind {
            QuestionKind::Multiple => {
                if q.options.len() < 2 {
                    return Err(RiskmapError::Catalog(format!(
                        "multiple-choice question '{}' needs at least 2 options",
                        q.id
                    )));
                }
            }
            _ => {
                if !q.options.is_empty() {
                    return Err(RiskmapError::Catalog(format!(
                        "question '{}' is not multiple-choice but lists options",
                        q.id
                    )));
                }
            }
        }
    }
    Ok(())
}
