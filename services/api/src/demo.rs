use crate::commands::{export_summary, render_report, render_scope};
use crate::infra::build_engine;
use chrono::{Duration, Utc};
use clap::Args;
use epq_engine::assessment::{
    validate_responses, BankId, EmployerAnswers, ItemId, Presentation, RawAnswer,
};
use epq_engine::config::{AppConfig, AppEnvironment, EngineConfig};
use epq_engine::error::AppError;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::info;

const DEFAULT_DEMO_SEED: u64 = 7;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Shuffle seed for the simulated session (ignored in production, which never seeds)
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Answer every employer item with this option (1-4) instead of the mixed default
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=4))]
    pub(crate) employer_answer: Option<u8>,
    /// Append the session summary to this CSV file
    #[arg(long)]
    pub(crate) export: Option<PathBuf>,
}

pub(crate) fn run_demo(config: &AppConfig, args: DemoArgs) -> Result<(), AppError> {
    let shuffle_seed = if config.environment == AppEnvironment::Production {
        None
    } else {
        args.seed
            .or(config.engine.shuffle_seed)
            .or(Some(DEFAULT_DEMO_SEED))
    };
    let engine = build_engine(&EngineConfig {
        shuffle_seed,
        ..config.engine.clone()
    })?;

    println!("EPQ assessment demo");

    let employer_items: Vec<ItemId> = engine
        .bank(BankId::Employer)
        .items(None)
        .iter()
        .map(|item| item.id)
        .collect();
    let answers: EmployerAnswers = employer_items
        .iter()
        .map(|item_id| (*item_id, demo_employer_ordinal(*item_id, args.employer_answer)))
        .collect();
    let scope = engine.employer_scope(&answers);
    println!();
    render_scope(&engine, &scope);

    let presentations = engine.present_items(BankId::Applicant, Some(scope.max_items));
    println!(
        "\nSimulated applicant answering {} shuffled items",
        presentations.len()
    );
    let started = Utc::now();
    let responses: BTreeMap<String, RawAnswer> = presentations
        .iter()
        .enumerate()
        .filter_map(|(position, presentation)| {
            simulated_answer(presentation, started + Duration::seconds(position as i64 * 9))
        })
        .collect();
    info!(responses = responses.len(), "simulated applicant session built");

    let report = engine.evaluate_applicant(scope.environment, validate_responses(responses));
    println!();
    render_report(&report);

    if let Some(path) = &args.export {
        export_summary(path, &report)?;
        println!("\nSummary appended to {}", path.display());
    }

    Ok(())
}

fn demo_employer_ordinal(item_id: ItemId, uniform: Option<u8>) -> u8 {
    uniform.unwrap_or_else(|| match item_id % 4 {
        0 => 4,
        1 | 2 => 2,
        _ => 3,
    })
}

/// Pick an option by label the way a respondent would, and submit its text like a form does.
/// Every eleventh item is a slow deliberation, every seventh a snap answer.
fn simulated_answer(
    presentation: &Presentation,
    answered_at: chrono::DateTime<Utc>,
) -> Option<(String, RawAnswer)> {
    let count = presentation.options.len();
    if count == 0 {
        return None;
    }
    let position = (presentation.item_id as usize * 5 + 1) % count;
    let chosen = &presentation.options[position];

    let latency_seconds = match presentation.item_id {
        id if id % 11 == 0 => 24.0,
        id if id % 7 == 0 => 1.5,
        id => 6.0 + f64::from(id % 5),
    };

    Some((
        format!("Q{}", presentation.item_id),
        RawAnswer::Detailed {
            chosen_text: chosen.option.text.clone(),
            latency_seconds: Some(latency_seconds),
            answered_at: Some(answered_at),
        },
    ))
}
