use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{info, warn};

use super::aggregate::{Band, SessionAccumulator, SessionAggregate};
use super::analytics::{analyze, SessionAnalytics};
use super::bank::{ContentError, ContentSource, ItemBank, ItemBanks};
use super::domain::{BankId, ConstructCode, Item, ItemId, ItemResponse, MatchKind, ResolvedAnswer};
use super::environment::{AssessmentScope, EnvironmentClass, EnvironmentProfile};
use super::feedback::{build_feedback, ConstructFeedback};
use super::intake::{EmployerAnswers, RejectedResponse, ResponseBatch};
use super::resolver::AnswerResolver;
use super::shuffle::{Presentation, Shuffler};

/// Scoring engine over immutable item banks. Holds no per-session state, so one instance can
/// serve concurrent sessions behind an `Arc`.
#[derive(Debug, Clone)]
pub struct AssessmentEngine {
    banks: ItemBanks,
    shuffler: Shuffler,
}

impl AssessmentEngine {
    pub fn new(banks: ItemBanks, shuffler: Shuffler) -> Self {
        Self { banks, shuffler }
    }

    /// Built-in content with unseeded shuffling.
    pub fn builtin() -> Self {
        Self::new(ItemBanks::builtin(), Shuffler::random())
    }

    pub fn from_source(
        source: &dyn ContentSource,
        shuffler: Shuffler,
    ) -> Result<Self, ContentError> {
        Ok(Self::new(ItemBanks::load(source)?, shuffler))
    }

    pub fn with_shuffler(mut self, shuffler: Shuffler) -> Self {
        self.shuffler = shuffler;
        self
    }

    pub fn bank(&self, bank_id: BankId) -> &ItemBank {
        self.banks.bank(bank_id)
    }

    pub fn shuffler(&self) -> Shuffler {
        self.shuffler
    }

    /// Items sorted by id with `id <= max_count`.
    pub fn list_items(&self, bank_id: BankId, max_count: Option<u32>) -> Vec<Item> {
        self.bank(bank_id)
            .items(max_count)
            .into_iter()
            .cloned()
            .collect()
    }

    /// One freshly shuffled presentation per in-scope item.
    pub fn present_items(&self, bank_id: BankId, max_count: Option<u32>) -> Vec<Presentation> {
        self.bank(bank_id)
            .items(max_count)
            .into_iter()
            .map(|item| self.shuffler.shuffle(item))
            .collect()
    }

    /// Resolve in-scope responses; also returns the ids that were ignored as out of scope.
    pub fn resolve(
        &self,
        bank_id: BankId,
        responses: &[ItemResponse],
        max_count: Option<u32>,
    ) -> (Vec<ResolvedAnswer>, Vec<ItemId>) {
        let (resolved, ignored) =
            AnswerResolver::new(self.bank(bank_id), max_count).resolve_all(responses);
        if !ignored.is_empty() {
            info!(
                bank = bank_id.label(),
                ignored = ?ignored,
                "ignoring responses outside the scored bank"
            );
        }
        (resolved, ignored)
    }

    pub fn aggregate(
        &self,
        bank_id: BankId,
        answers: &[ResolvedAnswer],
        max_count: Option<u32>,
    ) -> SessionAggregate {
        let universe = self.bank(bank_id).constructs(max_count);
        SessionAggregate::from_answers(answers, &universe)
    }

    /// Primary scoring entry point: responses in, construct averages and band out.
    pub fn score(
        &self,
        bank_id: BankId,
        responses: &[ItemResponse],
        max_count: Option<u32>,
    ) -> ScoreSummary {
        let (answers, _) = self.resolve(bank_id, responses, max_count);
        ScoreSummary::from(&self.aggregate(bank_id, &answers, max_count))
    }

    /// Map employer ordinals (option `n` in authored order) to an applicant scope.
    pub fn employer_scope(&self, answers: &EmployerAnswers) -> AssessmentScope {
        let bank = self.bank(BankId::Employer);
        let mut accumulator = SessionAccumulator::new();
        let mut answered = 0;

        for (item_id, ordinal) in answers.iter() {
            let option = bank
                .get(item_id)
                .and_then(|item| item.options.get(usize::from(ordinal).saturating_sub(1)));
            match option {
                Some(option) => {
                    accumulator.accumulate_scores(&option.scores);
                    answered += 1;
                }
                None => warn!(item_id, ordinal, "employer answer does not match an item option"),
            }
        }

        let aggregate = accumulator.finalize(&bank.constructs(None));
        if aggregate.is_degenerate() {
            warn!("employer scope computed from no scoreable answers; using the midpoint");
        }

        let scope = AssessmentScope::from_average(aggregate.overall_average, answered);
        info!(
            environment = scope.environment.label(),
            max_items = scope.max_items,
            overall_average = scope.overall_average,
            "employer scope computed"
        );
        scope
    }

    /// Environment class and applicant item cap, without the averages behind them.
    pub fn environment_and_scope(&self, answers: &EmployerAnswers) -> (EnvironmentClass, u32) {
        let scope = self.employer_scope(answers);
        (scope.environment, scope.max_items)
    }

    pub fn map_to_environment_dimensions(
        &self,
        construct_scores: &BTreeMap<ConstructCode, f64>,
    ) -> EnvironmentProfile {
        EnvironmentProfile::from_construct_scores(construct_scores)
    }

    /// Score one applicant session end to end, capped by the role's environment class.
    pub fn evaluate_applicant(
        &self,
        environment: EnvironmentClass,
        batch: ResponseBatch,
    ) -> ApplicantReport {
        let cap = Some(environment.max_items());
        let (answers, ignored_items) = self.resolve(BankId::Applicant, &batch.accepted, cap);
        let aggregate = self.aggregate(BankId::Applicant, &answers, cap);
        let analytics = analyze(&answers);
        let profile = EnvironmentProfile::from_construct_scores(&aggregate.averages);
        let feedback = build_feedback(&aggregate, environment);

        let unresolved_items: Vec<ItemId> = answers
            .iter()
            .filter(|answer| answer.match_kind == MatchKind::Unresolved)
            .map(|answer| answer.item_id)
            .collect();
        let substring_matches = answers
            .iter()
            .filter(|answer| answer.match_kind == MatchKind::Substring)
            .count();

        let degenerate = aggregate.is_degenerate();
        info!(
            environment = environment.label(),
            resolved = answers.len() - unresolved_items.len(),
            unresolved = unresolved_items.len(),
            substring_matches,
            rejected = batch.rejected.len(),
            degenerate,
            "applicant session evaluated"
        );

        ApplicantReport {
            environment,
            max_items: environment.max_items(),
            summary: ScoreSummary::from(&aggregate),
            aggregate,
            analytics,
            profile,
            feedback,
            answers,
            unresolved_items,
            ignored_items,
            rejected: batch.rejected,
            degenerate,
        }
    }
}

/// Caller-facing score: per-construct averages, overall average (2 dp) and band.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreSummary {
    pub construct_scores: BTreeMap<ConstructCode, f64>,
    pub overall_average: f64,
    pub overall_band: Band,
    pub degenerate: bool,
}

impl From<&SessionAggregate> for ScoreSummary {
    fn from(aggregate: &SessionAggregate) -> Self {
        Self {
            construct_scores: aggregate.averages.clone(),
            overall_average: (aggregate.overall_average * 100.0).round() / 100.0,
            overall_band: aggregate.band,
            degenerate: aggregate.is_degenerate(),
        }
    }
}

/// Everything one applicant session produces, handed to external persistence and rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApplicantReport {
    pub environment: EnvironmentClass,
    pub max_items: u32,
    pub summary: ScoreSummary,
    pub aggregate: SessionAggregate,
    pub analytics: SessionAnalytics,
    pub profile: EnvironmentProfile,
    pub feedback: BTreeMap<ConstructCode, ConstructFeedback>,
    pub answers: Vec<ResolvedAnswer>,
    pub unresolved_items: Vec<ItemId>,
    pub ignored_items: Vec<ItemId>,
    pub rejected: Vec<RejectedResponse>,
    pub degenerate: bool,
}
