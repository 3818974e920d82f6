//! CLI command implementations.
//!
//! Available commands:
//! - **assess**: score an answers file and render the assessment report
//! - **report**: re-render the most recently saved assessment
//! - **questions**: list the question catalog
//! - **init**: initialize a `.riskmap.toml` configuration file
//!
//! Each command owns a plain config struct built by `main` from the
//! parsed CLI; the shared resolution helpers below turn runtime
//! configuration into collaborators.

pub mod assess;
pub mod init;
pub mod questions;
pub mod report;

pub use assess::{run_assessment, AssessConfig};
pub use init::init_config;
pub use questions::{list_questions, QuestionsConfig};
pub use report::{render_saved_report, ReportConfig};

use crate::catalog::{builtin_catalog, Catalog};
use crate::cli;
use crate::config::RiskmapConfig;
use crate::intel::DemoThreatFeed;
use crate::report::writer::OutputFormat;
use crate::storage::AssessmentStore;
use anyhow::Result;

/// Custom catalog from configuration, or the built-in one.
fn resolve_catalog(config: &RiskmapConfig) -> Result<Catalog> {
    match &config.catalog.path {
        Some(path) => Ok(Catalog::load(path)?),
        None => Ok(builtin_catalog().clone()),
    }
}

/// Store in the configured directory, or the per-user default.
fn resolve_store(config: &RiskmapConfig) -> Result<AssessmentStore> {
    match &config.storage.dir {
        Some(dir) => Ok(AssessmentStore::new(dir.clone())),
        None => Ok(AssessmentStore::default_location()?),
    }
}

/// The --format flag wins; otherwise the configured default applies.
fn resolve_format(flag: Option<cli::OutputFormat>, config: &RiskmapConfig) -> Result<OutputFormat> {
    if let Some(format) = flag {
        return Ok(format.into());
    }
    match config.output.default_format.as_str() {
        "json" => Ok(OutputFormat::Json),
        "markdown" => Ok(OutputFormat::Markdown),
        "terminal" => Ok(OutputFormat::Terminal),
        other => anyhow::bail!("unknown configured default_format '{other}'"),
    }
}

/// Seeded feed when requested, entropy otherwise.
fn make_feed(seed: Option<u64>) -> DemoThreatFeed {
    match seed {
        Some(seed) => DemoThreatFeed::seeded(seed),
        None => DemoThreatFeed::new(),
    }
}
