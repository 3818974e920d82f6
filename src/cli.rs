use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "riskmap")]
#[command(about = "Cybersecurity posture assessment and risk scoring", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score an answers file and produce an assessment report
    Assess {
        /// Answers file: a JSON array of {question_id, value} records
        answers: PathBuf,

        /// Company name for the report header
        #[arg(long)]
        company: Option<String>,

        /// Industry label
        #[arg(long)]
        industry: Option<String>,

        /// Employee count
        #[arg(long)]
        employees: Option<u32>,

        /// Annual revenue in USD
        #[arg(long)]
        revenue: Option<f64>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout; json/markdown only)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file
        #[arg(short, long, env = "RISKMAP_CONFIG")]
        config: Option<PathBuf>,

        /// Skip persisting the assessment snapshot
        #[arg(long = "no-save")]
        no_save: bool,

        /// Seed for the demo vulnerability/threat widgets
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Re-render the most recently saved assessment
    Report {
        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout; json/markdown only)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file
        #[arg(short, long, env = "RISKMAP_CONFIG")]
        config: Option<PathBuf>,

        /// Seed for the demo vulnerability/threat widgets
        #[arg(long)]
        seed: Option<u64>,
    },

    /// List the question catalog
    Questions {
        /// Show only one category
        #[arg(long)]
        category: Option<String>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Configuration file
        #[arg(short, long, env = "RISKMAP_CONFIG")]
        config: Option<PathBuf>,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

impl From<OutputFormat> for crate::report::writer::OutputFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Json => crate::report::writer::OutputFormat::Json,
            OutputFormat::Markdown => crate::report::writer::OutputFormat::Markdown,
            OutputFormat::Terminal => crate::report::writer::OutputFormat::Terminal,
        }
    }
}
