mod cli;

use clap::Parser;
use star_sim::advisory::AdvisoryTable;
use star_sim::error::SimError;
use star_sim::session::Session;
use star_sim::types::config::SimConfig;
use star_sim::types::report::SimReport;
use star_sim::{baseline, catalog, config, report, telemetry};

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const RECOMMENDATIONS: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn build_session(cfg: &SimConfig) -> Result<Session, SimError> {
    let advisory = AdvisoryTable::builtin().with_overrides(cfg.advisory.clone());
    let mut session = Session::new(catalog::init_catalog(), advisory, cfg.engine_policy());
    for (metric, value) in &cfg.values {
        session.on_edit(metric, *value)?;
    }
    Ok(session)
}

fn simulate(cfg: &SimConfig, edits: &cli::EditArgs, reset: bool) -> Result<SimReport, SimError> {
    let mut session = build_session(cfg)?;
    let mut report = session.snapshot()?;
    for (metric, value) in edits.assignments()? {
        report = session.on_edit(&metric, value)?;
    }
    if reset {
        report = session.on_reset()?;
    }
    Ok(report)
}

fn recommendation_exit(report: &SimReport, fail_on_recommendations: bool) -> i32 {
    if fail_on_recommendations && !report.recommendations.is_empty() {
        exit_code::RECOMMENDATIONS
    } else {
        exit_code::SUCCESS
    }
}

fn run() -> Result<i32, SimError> {
    let cli = cli::Cli::parse();

    let loaded = config::load_config(&cli.config_dir)?;
    let cfg = loaded.clone().unwrap_or_default();
    telemetry::init(cli.verbose, cli.quiet, cfg.log_level())?;
    if loaded.is_some() {
        tracing::info!(dir = %cli.config_dir.display(), "config loaded");
    } else {
        tracing::debug!(dir = %cli.config_dir.display(), "no star-sim.toml found, using defaults");
    }

    let catalog = catalog::init_catalog();
    cfg.validate(&catalog)?;

    match cli.command {
        cli::Commands::Catalog => {
            for domain in catalog.domains() {
                println!("{}", domain.name);
                for subgroup in &domain.subgroups {
                    println!("  {}", subgroup.name);
                    for metric in &subgroup.metrics {
                        println!("    - {}: {}", metric.name, metric.description);
                    }
                }
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Baseline => {
            for (metric, value) in baseline(&catalog).iter() {
                println!("{metric}: {value:.1}");
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Score(cmd) => {
            let report = simulate(&cfg, &cmd.edits, false)?;
            println!("Projected STAR Rating: {:.2}", report.score);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Recommend(cmd) => {
            let report = simulate(&cfg, &cmd.edits, false)?;
            if report.recommendations.is_empty() {
                println!("recommend: none");
            }
            for recommendation in &report.recommendations {
                println!("{}", recommendation.line());
            }
            Ok(recommendation_exit(&report, cmd.fail_on_recommendations))
        }
        cli::Commands::Report(cmd) => {
            let report = simulate(&cfg, &cmd.edits, cmd.reset)?;
            let output_format = match cmd.format {
                cli::ReportFormat::Json => report::OutputFormat::Json,
                cli::ReportFormat::Md => report::OutputFormat::Md,
            };
            let rendered = report::render(&report, output_format)?;
            println!("{rendered}");
            Ok(recommendation_exit(&report, cmd.fail_on_recommendations))
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
