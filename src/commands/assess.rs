use super::{make_feed, resolve_catalog, resolve_format, resolve_store};
use crate::cli;
use crate::config::RiskmapConfig;
use crate::core::CompanyProfile;
use crate::io;
use crate::report::build_report;
use crate::report::writer::create_writer;
use crate::storage::StoredAssessment;
use anyhow::Result;
use std::path::PathBuf;

pub struct AssessConfig {
    pub answers: PathBuf,
    pub company: Option<String>,
    pub industry: Option<String>,
    pub employees: Option<u32>,
    pub revenue: Option<f64>,
    pub format: Option<cli::OutputFormat>,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub no_save: bool,
    pub seed: Option<u64>,
}

/// Score an answers file once and render the resulting report.
pub fn run_assessment(cfg: AssessConfig) -> Result<()> {
    let config = RiskmapConfig::load(cfg.config.as_deref())?;
    let catalog = resolve_catalog(&config)?;
    let answers = io::read_answers(&cfg.answers)?;

    let answered = answers
        .iter()
        .filter(|a| catalog.get(&a.question_id).is_some())
        .count();
    if answered < catalog.len() {
        log::warn!(
            "{} of {} questions answered; unanswered questions score 0",
            answered,
            catalog.len()
        );
    }

    let company = company_profile(&cfg, &config);
    let mut feed = make_feed(cfg.seed);
    let report = build_report(&catalog, &answers, company, &mut feed);

    if !cfg.no_save {
        let store = resolve_store(&config)?;
        store.save(&StoredAssessment {
            assessment: report.assessment.clone(),
            answers,
        })?;
    }

    let format = resolve_format(cfg.format, &config)?;
    let mut writer = create_writer(format, cfg.output.as_deref())?;
    writer.write_report(&report)
}

/// Flags win over configured defaults; anything still unset is blank.
fn company_profile(cfg: &AssessConfig, config: &RiskmapConfig) -> CompanyProfile {
    let defaults = &config.company;
    CompanyProfile {
        name: cfg
            .company
            .clone()
            .or_else(|| defaults.name.clone())
            .unwrap_or_default(),
        industry: cfg
            .industry
            .clone()
            .or_else(|| defaults.industry.clone())
            .unwrap_or_default(),
        employee_count: cfg.employees.or(defaults.employee_count).unwrap_or(0),
        annual_revenue: cfg.revenue.or(defaults.annual_revenue).unwrap_or(0.0),
    }
}
