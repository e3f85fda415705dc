use epq_engine::assessment::{
    AssessmentEngine, BankId, EnvironmentClass, ItemBanks, JsonContentSource, Shuffler,
};
use epq_engine::config::EngineConfig;
use epq_engine::error::AppError;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Engine over the configured content: the JSON file when one is set, the built-in banks otherwise.
pub(crate) fn build_engine(config: &EngineConfig) -> Result<AssessmentEngine, AppError> {
    let shuffler = Shuffler::from_seed(config.shuffle_seed);
    match &config.content_path {
        Some(path) => {
            info!(path = %path.display(), "loading item content from file");
            let source = JsonContentSource::from_path(path)?;
            Ok(AssessmentEngine::from_source(&source, shuffler)?)
        }
        None => Ok(AssessmentEngine::new(ItemBanks::builtin(), shuffler)),
    }
}

pub(crate) fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

pub(crate) fn parse_bank(raw: &str) -> Result<BankId, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "employer" => Ok(BankId::Employer),
        "applicant" => Ok(BankId::Applicant),
        other => Err(format!("unknown bank '{other}' (expected employer or applicant)")),
    }
}

pub(crate) fn parse_environment(raw: &str) -> Result<EnvironmentClass, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "low" => Ok(EnvironmentClass::Low),
        "moderate" => Ok(EnvironmentClass::Moderate),
        "high" => Ok(EnvironmentClass::High),
        other => Err(format!(
            "unknown environment '{other}' (expected low, moderate or high)"
        )),
    }
}
