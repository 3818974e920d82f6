use super::{resolve_catalog, resolve_format};
use crate::cli;
use crate::config::RiskmapConfig;
use crate::core::Question;
use crate::report::writer::OutputFormat;
use anyhow::Result;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use std::path::PathBuf;

pub struct QuestionsConfig {
    pub category: Option<String>,
    pub format: Option<cli::OutputFormat>,
    pub config: Option<PathBuf>,
}

/// Print the question catalog. The json output doubles as the
/// reference for authoring answer files.
pub fn list_questions(cfg: QuestionsConfig) -> Result<()> {
    let config = RiskmapConfig::load(cfg.config.as_deref())?;
    let catalog = resolve_catalog(&config)?;

    let questions: Vec<&Question> = match &cfg.category {
        Some(category) => {
            let selected = catalog.questions_in_category(category);
            if selected.is_empty() {
                anyhow::bail!(
                    "unknown category '{}'; known categories: {}",
                    category,
                    catalog.categories().join(", ")
                );
            }
            selected
        }
        None => catalog.iter().collect(),
    };

    match resolve_format(cfg.format, &config)? {
        OutputFormat::Json => print_json(&questions),
        OutputFormat::Markdown => {
            print_markdown(&questions);
            Ok(())
        }
        OutputFormat::Terminal => {
            print_table(&questions);
            Ok(())
        }
    }
}

fn print_json(questions: &[&Question]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(questions)?);
    Ok(())
}

fn print_markdown(questions: &[&Question]) {
    println!("| ID | Category | Question | Kind | Weight | Frameworks |");
    println!("|----|----------|----------|------|--------|------------|");
    for q in questions {
        println!(
            "| {} | {} | {} | {} | {} | {} |",
            q.id,
            q.category,
            q.prompt,
            q.kind.display_name(),
            q.weight,
            framework_list(q)
        );
    }
}

fn print_table(questions: &[&Question]) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "ID",
            "Category",
            "Question",
            "Kind",
            "Weight",
            "Frameworks",
        ]);
    for q in questions {
        table.add_row(vec![
            q.id.clone(),
            q.category.clone(),
            q.prompt.clone(),
            q.kind.display_name().to_string(),
            q.weight.to_string(),
            framework_list(q),
        ]);
    }
    println!("{table}");
}

fn framework_list(question: &Question) -> String {
    question
        .frameworks
        .iter()
        .map(|f| f.id())
        .collect::<Vec<_>>()
        .join(", ")
}
