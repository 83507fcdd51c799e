// Batch Q&A CLI
//
// Purpose: Answer questions from the command line or a file, in parallel
// Usage: cargo run --bin ask -- "Compare rice in Rajasthan and Punjab"
//        cargo run --bin ask -- --file questions.txt --json

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use samarth_qa::reports::formatters::MarkdownFormatter;
use samarth_qa::{Dataset, QaService};

#[derive(Parser, Debug)]
#[command(name = "ask", about = "Answer questions about Indian agriculture and climate data")]
struct Cli {
    /// Questions to answer
    questions: Vec<String>,

    /// Read questions from a file, one per line
    #[arg(long)]
    file: Option<PathBuf>,

    /// Print the full answer result as JSON
    #[arg(long)]
    json: bool,

    /// Dataset JSON to load instead of the built-in data
    #[arg(long)]
    dataset: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("samarth_qa=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut questions = cli.questions;
    if let Some(path) = &cli.file {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read questions from {}", path.display()))?;
        questions.extend(
            contents
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string),
        );
    }

    if questions.is_empty() {
        bail!("No questions given (pass them as arguments or with --file)");
    }

    let dataset = match &cli.dataset {
        Some(path) => Dataset::from_json_file(path)?,
        None => Dataset::builtin(),
    };
    let service = QaService::new(dataset)?;

    let start = std::time::Instant::now();
    let results = service.answer_batch(&questions);
    tracing::info!("Answered {} questions in {:?}", questions.len(), start.elapsed());

    if cli.json {
        let mut out = Vec::with_capacity(results.len());
        for (question, result) in questions.iter().zip(results) {
            let result = result.with_context(|| format!("Error processing question: {}", question))?;
            out.push(serde_json::json!({
                "question": question,
                "answer": result.answer,
                "sources": result.sources,
                "data_points": result.data_points,
            }));
        }
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    for (i, (question, result)) in questions.iter().zip(results).enumerate() {
        let result = result.with_context(|| format!("Error processing question: {}", question))?;
        if i > 0 {
            println!();
        }
        println!("# Q: {}\n", question);
        println!("{}", MarkdownFormatter::format(&result));
    }

    Ok(())
}
