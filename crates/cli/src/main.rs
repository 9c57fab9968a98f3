mod config;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use codegen_core::PipelineResult;
use colored::Colorize;
use llm::{ChatClient, LlmError};
use orchestrator::{FileManager, Pipeline, ResultPaths};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::AppConfig;

const RULE_WIDTH: usize = 50;

#[derive(Parser, Debug)]
#[command(name = "codegen-agents")]
#[command(about = "Plan, write, review and test code with a hosted LLM", long_about = None)]
#[command(version, arg_required_else_help = true)]
#[command(after_help = "Examples:\n  codegen-agents 'create a function to hash passwords'\n  codegen-agents 'build a user class' --save user_class --show-code")]
struct Cli {
    /// What code to generate
    prompt: String,

    /// Save code, tests and metadata under this base name
    #[arg(long, value_name = "BASENAME")]
    save: Option<String>,

    /// Display generated code
    #[arg(long)]
    show_code: bool,

    /// Display generated tests
    #[arg(long)]
    show_tests: bool,

    /// Print the full result as JSON instead of the summary
    #[arg(long)]
    json: bool,

    /// Config file (default: .codegen-agents/config.toml, then the user config dir)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the configured model
    #[arg(long)]
    model: Option<String>,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing();

    let mut config = AppConfig::load(cli.config.as_deref()).await?;
    if let Some(model) = cli.model.clone() {
        config.llm.model = model;
    }

    let client = match ChatClient::from_env(config.llm.clone()) {
        Ok(client) => client,
        Err(LlmError::MissingApiKey { var }) => {
            eprintln!("{} Set the {} environment variable", "Error:".red().bold(), var);
            eprintln!("   export {}=your_api_key", var);
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => return Err(e.into()),
    };

    tracing::info!(model = %config.llm.model, base_url = %config.llm.base_url, "Using inference endpoint");

    let pipeline = Pipeline::new(Arc::new(client));
    let run = pipeline
        .execute(&cli.prompt)
        .await
        .context("Pipeline run failed")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&run.result)?);
    } else {
        print_report(&run.result, &cli);
    }

    if let Some(base_name) = cli.save.as_deref() {
        let manager = FileManager::new(std::env::current_dir()?);
        let paths = manager
            .save_result(&run.result, Some(base_name))
            .await
            .context("Failed to save result")?;
        print_saved(&paths);
    }

    Ok(ExitCode::SUCCESS)
}

fn print_report(result: &PipelineResult, cli: &Cli) {
    let rule = "=".repeat(RULE_WIDTH);

    println!();
    println!("{}", rule);
    println!("{}", "GENERATION COMPLETE".bold());
    println!("{}", rule);
    println!("Language:      {}", result.language);
    println!("Quality Score: {}/10", result.quality_score);
    println!(
        "Approved:      {}",
        if result.approved {
            "yes".green()
        } else {
            "no".red()
        }
    );
    println!("Issues:        {}", result.review.issue_count());

    if cli.show_code {
        println!();
        println!("{}", "Generated Code:".bold());
        println!("{}", "-".repeat(30));
        println!("{}", result.code);
    }

    if cli.show_tests {
        println!();
        println!("{}", "Generated Tests:".bold());
        println!("{}", "-".repeat(30));
        println!("{}", result.tests);
    }

    if !result.review.issues.is_empty() {
        println!();
        println!("{}", "Issues Found:".yellow().bold());
        for issue in &result.review.issues {
            println!("  - {}", issue);
        }
    }

    if !result.review.suggestions.is_empty() {
        println!();
        println!("{}", "Suggestions:".cyan().bold());
        for suggestion in &result.review.suggestions {
            println!("  - {}", suggestion);
        }
    }
}

fn print_saved(paths: &ResultPaths) {
    println!();
    println!(
        "Saved: {}, {}, {}",
        paths.code.display(),
        paths.tests.display(),
        paths.info.display()
    );
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "codegen_agents=info,orchestrator=info,llm=info".into()),
        )
        .init();
}
