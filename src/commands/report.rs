use super::{make_feed, resolve_catalog, resolve_format, resolve_store};
use crate::cli;
use crate::config::RiskmapConfig;
use crate::report::report_for;
use crate::report::writer::create_writer;
use anyhow::Result;
use std::path::PathBuf;

pub struct ReportConfig {
    pub format: Option<cli::OutputFormat>,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub seed: Option<u64>,
}

/// Re-render the stored latest assessment. The snapshot is reused as
/// is; only the derived report sections are recomputed from its
/// answers.
pub fn render_saved_report(cfg: ReportConfig) -> Result<()> {
    let config = RiskmapConfig::load(cfg.config.as_deref())?;
    let store = resolve_store(&config)?;
    let Some(stored) = store.load()? else {
        anyhow::bail!("no saved assessment found; run `riskmap assess` first");
    };

    let catalog = resolve_catalog(&config)?;
    let mut feed = make_feed(cfg.seed);
    let report = report_for(&catalog, &stored.answers, stored.assessment, &mut feed);

    let format = resolve_format(cfg.format, &config)?;
    let mut writer = create_writer(format, cfg.output.as_deref())?;
    writer.write_report(&report)
}
