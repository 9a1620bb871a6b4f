use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "workstyle",
    version,
    about = "Productivity style quiz scoring CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Config file to use instead of ./workstyle.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score an answers file and print the result
    Score(ScoreCommand),
    /// Validate an answers file without scoring it
    Check(CheckCommand),
    /// Print the question bank
    Questions(QuestionsCommand),
    /// Print the recommendations for one productivity type
    Profile(ProfileCommand),
}

#[derive(Args)]
pub struct ScoreCommand {
    /// Answers file (.toml or .json), or `-` for JSON on stdin
    pub answers: PathBuf,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
    /// Score incomplete or out-of-range answers instead of rejecting them
    #[arg(long)]
    pub lenient: bool,
    /// Override a single answer, e.g. `--set q4=5`
    #[arg(long = "set", value_name = "QUESTION=VALUE", value_parser = parse_answer)]
    pub overrides: Vec<(String, i64)>,
}

#[derive(Args)]
pub struct CheckCommand {
    pub answers: PathBuf,
    #[arg(long = "set", value_name = "QUESTION=VALUE", value_parser = parse_answer)]
    pub overrides: Vec<(String, i64)>,
}

#[derive(Args)]
pub struct QuestionsCommand {
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Args)]
pub struct ProfileCommand {
    /// Type name, e.g. `deep-work-beast` or "Flow Surfer"
    pub kind: String,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

fn parse_answer(raw: &str) -> Result<(String, i64), String> {
    let (question, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected QUESTION=VALUE, got '{raw}'"))?;
    let question = question.trim();
    if question.is_empty() {
        return Err(format!("missing question id in '{raw}'"));
    }
    let value = value
        .trim()
        .parse::<i64>()
        .map_err(|e| format!("invalid value in '{raw}': {e}"))?;
    Ok((question.to_string(), value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_answer_splits_pair() {
        assert_eq!(parse_answer("q4=5"), Ok(("q4".to_string(), 5)));
        assert_eq!(parse_answer(" q1 = 0 "), Ok(("q1".to_string(), 0)));
    }

    #[test]
    fn parse_answer_rejects_malformed_pairs() {
        assert!(parse_answer("q4").is_err());
        assert!(parse_answer("=3").is_err());
        assert!(parse_answer("q4=high").is_err());
    }
}
