mod catalog;
mod cli;
mod config;
mod error;
mod questions;
mod report;
mod scorer;
mod telemetry;
mod types;
mod validate;

use crate::error::WorkstyleError;
use crate::report::OutputFormat;
use crate::types::answers::AnswerSet;
use crate::types::config::{AnswerPolicy, WorkstyleConfig};
use crate::types::profile::ProductivityType;
use clap::Parser;
use std::path::Path;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const BLOCKING: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn output_format(flag: Option<cli::ReportFormat>, config: &WorkstyleConfig) -> OutputFormat {
    match flag {
        Some(cli::ReportFormat::Json) => OutputFormat::Json,
        Some(cli::ReportFormat::Md) => OutputFormat::Md,
        None => config
            .report_format()
            .and_then(OutputFormat::from_config)
            .unwrap_or(OutputFormat::Md),
    }
}

fn load_answers(path: &Path, overrides: &[(String, i64)]) -> Result<AnswerSet, WorkstyleError> {
    let mut answers = AnswerSet::load(path)?;
    for (question, value) in overrides {
        answers.insert(question.clone(), *value);
    }
    tracing::info!(answered = answers.len(), overrides = overrides.len(), "answers loaded");
    Ok(answers)
}

fn run() -> Result<i32, WorkstyleError> {
    let cli = cli::Cli::parse();
    let cwd = std::env::current_dir()?;
    let loaded = config::load_config(&cwd, cli.config.as_deref())?;
    let missing_config = loaded.is_none();
    let cfg = loaded.unwrap_or_default();

    telemetry::init(&telemetry::level_for(cli.verbose, cli.quiet, cfg.log_level()))?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "workstyle starting");
    if missing_config {
        tracing::debug!("no {} found, using defaults", config::DEFAULT_CONFIG_FILE);
    }

    match cli.command {
        cli::Commands::Score(cmd) => {
            let answers = load_answers(&cmd.answers, &cmd.overrides)?;

            let findings = validate::answer_findings(&answers, cfg.allow_unknown_keys());
            let policy = if cmd.lenient {
                AnswerPolicy::Lenient
            } else {
                cfg.answer_policy()
            };
            if policy == AnswerPolicy::Strict {
                validate::ensure_valid(&findings)?;
            }
            for finding in &findings {
                tracing::warn!(id = %finding.id, "{}", finding.title);
            }

            let result = scorer::compute_result(&answers);
            let rendered = report::render(&result, output_format(cmd.format, &cfg))?;
            println!("{rendered}");

            if findings.is_empty() {
                Ok(exit_code::SUCCESS)
            } else {
                Ok(exit_code::WARNINGS)
            }
        }
        cli::Commands::Check(cmd) => {
            let answers = load_answers(&cmd.answers, &cmd.overrides)?;
            let findings = validate::answer_findings(&answers, cfg.allow_unknown_keys());

            if findings.is_empty() {
                println!("check: no findings");
                return Ok(exit_code::SUCCESS);
            }

            for finding in &findings {
                let level = if finding.blocking { "BLOCKING" } else { "WARN" };
                println!("[{}] {}: {}", level, finding.id, finding.title);
                println!("  {}", finding.body);
            }

            if findings.iter().any(|finding| finding.blocking) {
                Ok(exit_code::BLOCKING)
            } else {
                Ok(exit_code::WARNINGS)
            }
        }
        cli::Commands::Questions(cmd) => {
            let rendered =
                report::render_questions(questions::questions(), output_format(cmd.format, &cfg))?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Profile(cmd) => {
            let kind: ProductivityType = cmd.kind.parse()?;
            let rendered = report::render_profile(kind, output_format(cmd.format, &cfg))?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
