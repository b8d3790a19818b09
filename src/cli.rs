use star_sim::error::{Result, SimError};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "star-sim",
    version,
    about = "Medicare STAR rating simulator for KPI what-if analysis"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Directory containing star-sim.toml
    #[arg(short = 'C', long, global = true, default_value = ".")]
    pub config_dir: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List domains, subgroups and metrics with descriptions
    Catalog,
    /// Print the default value of every metric
    Baseline,
    /// Print the projected STAR rating
    Score(ScoreCommand),
    /// Print the prioritized recommendation list
    Recommend(RecommendCommand),
    /// Render the full simulation report
    Report(ReportCommand),
}

#[derive(Args, Clone, Debug, Default)]
pub struct EditArgs {
    /// Override one metric, e.g. --set "Customer Service Rating=4"
    #[arg(long = "set", value_name = "NAME=VALUE")]
    pub sets: Vec<String>,
}

impl EditArgs {
    pub fn assignments(&self) -> Result<Vec<(String, f64)>> {
        self.sets.iter().map(|raw| parse_assignment(raw)).collect()
    }
}

#[derive(Args)]
pub struct ScoreCommand {
    #[command(flatten)]
    pub edits: EditArgs,
}

#[derive(Args)]
pub struct RecommendCommand {
    #[command(flatten)]
    pub edits: EditArgs,
    /// Exit with code 1 when at least one recommendation is produced
    #[arg(long)]
    pub fail_on_recommendations: bool,
}

#[derive(Args)]
pub struct ReportCommand {
    #[command(flatten)]
    pub edits: EditArgs,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    /// Restore the baseline after applying edits
    #[arg(long)]
    pub reset: bool,
    /// Exit with code 1 when at least one recommendation is produced
    #[arg(long)]
    pub fail_on_recommendations: bool,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

/// Splits `NAME=VALUE` at the last `=`, so names may contain `=`.
pub fn parse_assignment(raw: &str) -> Result<(String, f64)> {
    let (name, value) = raw
        .rsplit_once('=')
        .ok_or_else(|| SimError::InvalidAssignment(raw.to_string()))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(SimError::InvalidAssignment(raw.to_string()));
    }
    let value = value
        .trim()
        .parse::<f64>()
        .map_err(|_| SimError::InvalidAssignment(raw.to_string()))?;
    Ok((name.to_string(), value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_assignment_accepts_name_and_value() {
        let (name, value) =
            parse_assignment("Customer Service Rating=4").expect("assignment should parse");
        assert_eq!(name, "Customer Service Rating");
        assert_eq!(value, 4.0);
    }

    #[test]
    fn parse_assignment_splits_at_last_equals() {
        let (name, value) = parse_assignment("a=b = 2.5").expect("assignment should parse");
        assert_eq!(name, "a=b");
        assert_eq!(value, 2.5);
    }

    #[test]
    fn parse_assignment_rejects_malformed_input() {
        for raw in ["no separator", "=3", "Getting Needed Care=high"] {
            let err = parse_assignment(raw).expect_err("assignment should fail");
            assert!(matches!(err, SimError::InvalidAssignment(_)), "{raw}");
        }
    }

    #[test]
    fn cli_parses_repeated_set_flags() {
        let cli = Cli::try_parse_from([
            "star-sim",
            "report",
            "--set",
            "Getting Needed Care=4",
            "--set",
            "Customer Service Rating=1",
            "--format",
            "json",
            "--reset",
        ])
        .expect("arguments should parse");
        match cli.command {
            Commands::Report(cmd) => {
                assert_eq!(cmd.edits.sets.len(), 2);
                assert!(cmd.reset);
                assert!(matches!(cmd.format, ReportFormat::Json));
            }
            _ => panic!("expected report command"),
        }
    }
}
