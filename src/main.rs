use anyhow::Result;
use clap::Parser;
use riskmap::cli::{Cli, Commands};
use riskmap::commands::{self, AssessConfig, QuestionsConfig, ReportConfig};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Assess {
            answers,
            company,
            industry,
            employees,
            revenue,
            format,
            output,
            config,
            no_save,
            seed,
        } => commands::run_assessment(AssessConfig {
            answers,
            company,
            industry,
            employees,
            revenue,
            format,
            output,
            config,
            no_save,
            seed,
        }),
        Commands::Report {
            format,
            output,
            config,
            seed,
        } => commands::render_saved_report(ReportConfig {
            format,
            output,
            config,
            seed,
        }),
        Commands::Questions {
            category,
            format,
            config,
        } => commands::list_questions(QuestionsConfig {
            category,
            format,
            config,
        }),
        Commands::Init { force } => commands::init_config(force),
    }
}
