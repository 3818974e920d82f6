//! Report rendering in the three supported output formats.

use super::AssessmentReport;
use crate::core::{ComplianceStatus, RiskLevel};
use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait ReportWriter {
    fn write_report(&mut self, report: &AssessmentReport) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &AssessmentReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &AssessmentReport) -> anyhow::Result<()> {
        self.write_header(report)?;
        self.write_summary(report)?;
        self.write_compliance(report)?;
        self.write_vulnerabilities(report)?;
        self.write_threat_intel(report)?;
        self.write_recommendations(report)?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self, report: &AssessmentReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# Cyber Risk Assessment Report")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            report
                .assessment
                .created_at
                .format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(
            self.writer,
            "Company: {} ({})",
            report.assessment.company.name, report.assessment.company.industry
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary(&mut self, report: &AssessmentReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Executive Summary")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        writeln!(
            self.writer,
            "| Overall Score | {}/100 |",
            report.assessment.overall_score
        )?;
        writeln!(
            self.writer,
            "| Risk Level | {} |",
            report.assessment.risk_level
        )?;
        writeln!(
            self.writer,
            "| Employees | {} |",
            report.assessment.company.employee_count
        )?;
        writeln!(
            self.writer,
            "| Annual Revenue | ${:.0} |",
            report.assessment.company.annual_revenue
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_compliance(&mut self, report: &AssessmentReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Compliance Posture")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "| Framework | Score | Max | Coverage | Status |"
        )?;
        writeln!(
            self.writer,
            "|-----------|-------|-----|----------|--------|"
        )?;
        for summary in &report.compliance {
            writeln!(
                self.writer,
                "| {} | {:.2} | {:.0} | {}% | {} |",
                summary.full_name,
                summary.score,
                summary.max_score,
                summary.percentage,
                summary.status.display_name()
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_vulnerabilities(&mut self, report: &AssessmentReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Vulnerability Overview")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Category | Open Findings | Severity | Trend |")?;
        writeln!(self.writer, "|----------|---------------|----------|-------|")?;
        for vuln in &report.vulnerabilities {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} |",
                vuln.category,
                vuln.count,
                vuln.severity.display_name(),
                vuln.trend.display_name()
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_threat_intel(&mut self, report: &AssessmentReport) -> anyhow::Result<()> {
        let intel = &report.threat_intel;
        writeln!(self.writer, "## Threat Intelligence")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "- Threat level: {}", intel.threat_level)?;
        writeln!(self.writer, "- Active threats: {}", intel.active_threats)?;
        writeln!(
            self.writer,
            "- Recent incidents: {}",
            intel.recent_incidents
        )?;
        writeln!(self.writer, "- Industry risk: {}", intel.industry_risk)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_recommendations(&mut self, report: &AssessmentReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Recommendations")?;
        writeln!(self.writer)?;
        if report.recommendations.is_empty() {
            writeln!(
                self.writer,
                "No remediation required; posture meets the target band."
            )?;
            return Ok(());
        }
        for (i, rec) in report.recommendations.iter().enumerate() {
            writeln!(self.writer, "{}. {}", i + 1, rec)?;
        }
        Ok(())
    }
}

pub struct TerminalWriter;

impl Default for TerminalWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalWriter {
    pub fn new() -> Self {
        Self
    }
}

impl ReportWriter for TerminalWriter {
    fn write_report(&mut self, report: &AssessmentReport) -> anyhow::Result<()> {
        print_header(report);
        print_score(report);
        print_compliance(report);
        print_vulnerabilities(report);
        print_threat_intel(report);
        print_recommendations(report);
        Ok(())
    }
}

fn print_header(report: &AssessmentReport) {
    println!("{}", "Cyber Risk Assessment Report".bold().blue());
    println!("{}", "============================".blue());
    println!(
        "Company: {} ({})",
        report.assessment.company.name, report.assessment.company.industry
    );
    println!();
}

fn risk_colored(level: RiskLevel, text: &str) -> ColoredString {
    match level {
        RiskLevel::Low => text.green(),
        RiskLevel::Medium => text.yellow(),
        RiskLevel::High => text.red(),
        RiskLevel::Critical => text.red().bold(),
    }
}

fn print_score(report: &AssessmentReport) {
    let level = report.assessment.risk_level;
    println!(
        "Overall score: {}  Risk level: {}",
        risk_colored(level, &format!("{}/100", report.assessment.overall_score)),
        risk_colored(level, level.display_name())
    );
    println!();
}

fn print_compliance(report: &AssessmentReport) {
    println!("{}", "Compliance Posture".bold());
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Framework", "Score", "Max", "Coverage", "Status"]);
    for summary in &report.compliance {
        table.add_row(vec![
            summary.full_name.clone(),
            format!("{:.2}", summary.score),
            format!("{:.0}", summary.max_score),
            format!("{}%", summary.percentage),
            status_colored(summary.status).to_string(),
        ]);
    }
    println!("{table}");
    println!();
}

fn status_colored(status: ComplianceStatus) -> ColoredString {
    match status {
        ComplianceStatus::Compliant => status.display_name().green(),
        ComplianceStatus::Partial => status.display_name().yellow(),
        ComplianceStatus::NonCompliant => status.display_name().red(),
    }
}

fn print_vulnerabilities(report: &AssessmentReport) {
    println!("{}", "Vulnerability Overview".bold());
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Category", "Open Findings", "Severity", "Trend"]);
    for vuln in &report.vulnerabilities {
        table.add_row(vec![
            vuln.category.clone(),
            vuln.count.to_string(),
            vuln.severity.display_name().to_string(),
            vuln.trend.display_name().to_string(),
        ]);
    }
    println!("{table}");
    println!();
}

fn print_threat_intel(report: &AssessmentReport) {
    let intel = &report.threat_intel;
    println!("{}", "Threat Intelligence".bold());
    println!(
        "  Threat level: {}",
        risk_colored(intel.threat_level, intel.threat_level.display_name())
    );
    println!("  Active threats: {}", intel.active_threats);
    println!("  Recent incidents: {}", intel.recent_incidents);
    println!("  Industry risk: {}", intel.industry_risk);
    println!();
}

fn print_recommendations(report: &AssessmentReport) {
    if report.recommendations.is_empty() {
        println!(
            "{} No remediation required; posture meets the target band.",
            "✓".green()
        );
        return;
    }
    println!("{}", "Recommendations".bold());
    for (i, rec) in report.recommendations.iter().enumerate() {
        println!("  {}. {}", i + 1, rec);
    }
}

/// Build a writer for the requested format, targeting a file when
/// `output` is given. Terminal output always goes to stdout.
pub fn create_writer(
    format: OutputFormat,
    output: Option<&Path>,
) -> anyhow::Result<Box<dyn ReportWriter>> {
    match (format, output) {
        (OutputFormat::Terminal, None) => Ok(Box::new(TerminalWriter::new())),
        (OutputFormat::Terminal, Some(_)) => {
            anyhow::bail!("terminal format cannot be written to a file; use json or markdown")
        }
        (OutputFormat::Json, None) => Ok(Box::new(JsonWriter::new(std::io::stdout()))),
        (OutputFormat::Json, Some(path)) => {
            Ok(Box::new(JsonWriter::new(std::fs::File::create(path)?)))
        }
        (OutputFormat::Markdown, None) => Ok(Box::new(MarkdownWriter::new(std::io::stdout()))),
        (OutputFormat::Markdown, Some(path)) => {
            Ok(Box::new(MarkdownWriter::new(std::fs::File::create(path)?)))
        }
    }
}
