//! Small file helpers and the answers-file boundary.

use crate::core::Answer;
use crate::errors::{RiskmapError, RiskmapResult};
use anyhow::Result;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}

/// Read an answers file: a JSON array of `{question_id, value}` records
/// as produced by the questionnaire front end.
pub fn read_answers(path: &Path) -> RiskmapResult<Vec<Answer>> {
    let raw = fs::read_to_string(path)?;
    let answers: Vec<Answer> = serde_json::from_str(&raw)
        .map_err(|e| RiskmapError::Answers(format!("{}: {}", path.display(), e)))?;
    Ok(dedupe_answers(answers))
}

/// Collapse repeated answers to one per question id: a later entry
/// replaces the earlier one in place, keeping first-answer order.
pub fn dedupe_answers(answers: Vec<Answer>) -> Vec<Answer> {
    let mut slots: HashMap<String, usize> = HashMap::new();
    let mut out: Vec<Answer> = Vec::with_capacity(answers.len());
    for answer in answers {
        match slots.get(&answer.question_id) {
            Some(&i) => out[i] = answer,
            None => {
                slots.insert(answer.question_id.clone(), out.len());
                out.push(answer);
            }
        }
    }
    out
}
