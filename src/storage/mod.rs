//! On-device persistence of the latest completed assessment.
//!
//! One JSON document under a fixed file name, holding the assessment
//! snapshot together with the answers that produced it. Only the most
//! recent assessment is kept; saving replaces the previous one.

use crate::core::{Answer, RiskAssessment};
use crate::errors::{RiskmapError, RiskmapResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const ASSESSMENT_FILE: &str = "latest_assessment.json";

/// The persisted document: snapshot plus the answers behind it, so
/// reports can be re-rendered without retaking the questionnaire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredAssessment {
    pub assessment: RiskAssessment,
    pub answers: Vec<Answer>,
}

/// Store rooted at a single directory.
#[derive(Debug, Clone)]
pub struct AssessmentStore {
    root: PathBuf,
}

impl AssessmentStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Per-user data directory, `<data_dir>/riskmap`.
    pub fn default_location() -> RiskmapResult<Self> {
        dirs::data_dir()
            .map(|dir| Self::new(dir.join("riskmap")))
            .ok_or_else(|| RiskmapError::Storage("no user data directory available".to_string()))
    }

    pub fn root(&self) -> &PathBuf {
        &self.root
    }

    fn document_path(&self) -> PathBuf {
        self.root.join(ASSESSMENT_FILE)
    }

    pub fn save(&self, stored: &StoredAssessment) -> RiskmapResult<()> {
        fs::create_dir_all(&self.root)?;
        let json = serde_json::to_string_pretty(stored)
            .map_err(|e| RiskmapError::Storage(format!("failed to serialize assessment: {e}")))?;
        let path = self.document_path();
        fs::write(&path, json)?;
        log::debug!("Saved assessment {} to {}", stored.assessment.id, path.display());
        Ok(())
    }

    /// Load the latest assessment, if any. A corrupt document is
    /// ignored with a warning; the caller sees it as no saved
    /// assessment.
    pub fn load(&self) -> RiskmapResult<Option<StoredAssessment>> {
        let path = self.document_path();
        if !path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&path)?;
        match serde_json::from_str(&raw) {
            Ok(stored) => Ok(Some(stored)),
            Err(err) => {
                log::warn!(
                    "Ignoring corrupt assessment document at {}: {}",
                    path.display(),
                    err
                );
                Ok(None)
            }
        }
    }

    pub fn clear(&self) -> RiskmapResult<()> {
        let path = self.document_path();
        if path.exists() {
            fs::remove_file(&path)?;
        }
        Ok(())
    }
}
