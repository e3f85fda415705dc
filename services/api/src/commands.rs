use crate::infra::{build_engine, parse_bank, parse_environment, read_json_file};
use chrono::Utc;
use clap::Args;
use epq_engine::assessment::{
    append_to_path, validate_responses, ApplicantReport, AssessmentEngine, AssessmentScope,
    BankId, EmployerAnswers, EnvironmentClass, Presentation, RawAnswer, SummaryRow,
};
use epq_engine::config::AppConfig;
use epq_engine::error::AppError;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Args, Debug)]
pub(crate) struct ItemsArgs {
    /// Item bank to list: employer or applicant
    #[arg(long, value_parser = parse_bank, default_value = "applicant")]
    pub(crate) bank: BankId,
    /// Only list items whose id is at most this value
    #[arg(long)]
    pub(crate) max_items: Option<u32>,
    /// Present options in shuffled order with fresh labels
    #[arg(long)]
    pub(crate) shuffle: bool,
    /// Print JSON instead of a text listing
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// JSON object mapping item keys ("12", "Q12") to chosen text or {chosen_text, latency_seconds}
    #[arg(long)]
    pub(crate) responses: PathBuf,
    /// Role environment class bounding the scored items: low, moderate or high
    #[arg(long, value_parser = parse_environment, default_value = "high")]
    pub(crate) environment: EnvironmentClass,
    /// Append a summary row to this CSV file
    #[arg(long)]
    pub(crate) export: Option<PathBuf>,
    /// Print the full report as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ScopeArgs {
    /// JSON object mapping employer item keys ("E3", "3") to an answer from 1 to 4
    #[arg(long)]
    pub(crate) answers: PathBuf,
}

pub(crate) fn run_items(config: &AppConfig, args: ItemsArgs) -> Result<(), AppError> {
    let engine = build_engine(&config.engine)?;
    let presentations = if args.shuffle {
        engine.present_items(args.bank, args.max_items)
    } else {
        engine
            .list_items(args.bank, args.max_items)
            .iter()
            .map(Presentation::unshuffled)
            .collect()
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&presentations)?);
        return Ok(());
    }

    println!("{} bank: {} items", args.bank.label(), presentations.len());
    for presentation in &presentations {
        println!("\n[{}] {}", presentation.item_id, presentation.prompt);
        for presented in &presentation.options {
            println!("  {}. {}", presented.label, presented.option.text);
        }
    }
    Ok(())
}

pub(crate) fn run_score(config: &AppConfig, args: ScoreArgs) -> Result<(), AppError> {
    let engine = build_engine(&config.engine)?;
    let responses: BTreeMap<String, RawAnswer> = read_json_file(&args.responses)?;
    let report = engine.evaluate_applicant(args.environment, validate_responses(responses));

    if let Some(path) = &args.export {
        export_summary(path, &report)?;
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        render_report(&report);
    }
    Ok(())
}

pub(crate) fn run_scope(config: &AppConfig, args: ScopeArgs) -> Result<(), AppError> {
    let engine = build_engine(&config.engine)?;
    let raw: BTreeMap<String, Value> = read_json_file(&args.answers)?;
    let (answers, rejected) = EmployerAnswers::validate(raw);
    if !rejected.is_empty() {
        warn!(rejected = rejected.len(), "some employer answers were rejected");
    }

    let scope = engine.employer_scope(&answers);
    render_scope(&engine, &scope);
    Ok(())
}

pub(crate) fn export_summary(path: &Path, report: &ApplicantReport) -> Result<(), AppError> {
    let row = SummaryRow::new(
        Utc::now(),
        BankId::Applicant,
        &report.aggregate,
        Some(&report.analytics),
    )?;
    append_to_path(path, &row)?;
    info!(path = %path.display(), "session summary appended");
    Ok(())
}

pub(crate) fn render_scope(engine: &AssessmentEngine, scope: &AssessmentScope) {
    let total = engine.bank(BankId::Employer).len();
    println!("Employer scope from {}/{} answers", scope.answered, total);
    println!(
        "- Overall average {:.2} -> {} ({})",
        scope.overall_average,
        scope.band.label(),
        scope.band.description()
    );
    println!(
        "- Environment {} -> applicant assessment of {} items",
        scope.environment.label(),
        scope.max_items
    );
}

pub(crate) fn render_report(report: &ApplicantReport) {
    println!(
        "Applicant session ({} environment, {} items in scope)",
        report.environment.label(),
        report.max_items
    );
    println!(
        "- Overall average {:.2} ({})",
        report.summary.overall_average,
        report.summary.overall_band.label()
    );
    if report.degenerate {
        println!("- No answer resolved to a scored option; every construct is at the midpoint");
    }

    println!("Construct scores:");
    for (construct, feedback) in &report.feedback {
        let count = report.aggregate.counts.get(construct).copied().unwrap_or(0);
        let consistency = report
            .analytics
            .consistency
            .get(construct)
            .copied()
            .flatten()
            .map(|value| format!("{value:.2}"))
            .unwrap_or_else(|| "n/a".to_string());
        println!(
            "  - {} {}: {:.2} {} (answers {}, consistency {})",
            construct,
            feedback.name.as_deref().unwrap_or("Unknown construct"),
            feedback.score,
            feedback.band.label(),
            count,
            consistency
        );
        println!("      {}", feedback.feedback);
    }

    println!("Environment profile:");
    for (dimension, percent) in report.profile.dimensions() {
        println!("  - {dimension}: {percent}%");
    }

    if let Some(median) = report.analytics.median_latency_seconds {
        println!(
            "Response timing: median {:.1}s | {} very fast | {} very slow",
            median, report.analytics.very_fast_count, report.analytics.very_slow_count
        );
    }

    if !report.unresolved_items.is_empty() {
        println!("Unscoreable answers on items {:?}", report.unresolved_items);
    }
    if !report.ignored_items.is_empty() {
        println!("Ignored out-of-scope items {:?}", report.ignored_items);
    }
    for rejected in &report.rejected {
        println!("Rejected entry '{}': {}", rejected.key, rejected.reason);
    }
}
