//! Construct scoring: item banks, presentation shuffling, text-indexed answer resolution,
//! per-construct aggregation, session analytics and environment mapping.
//!
//! Every operation is a pure function of the loaded banks and the submitted answers. Nothing
//! here performs I/O except content loading and summary export, which callers invoke explicitly.

pub mod aggregate;
pub mod analytics;
pub mod bank;
pub mod constructs;
pub mod domain;
pub mod environment;
pub mod export;
pub mod feedback;
pub mod intake;
pub mod normalizer;
pub mod resolver;
pub mod router;
pub mod service;
pub mod shuffle;

#[cfg(test)]
mod tests;

pub use aggregate::{Band, SessionAccumulator, SessionAggregate, MIDPOINT};
pub use analytics::{analyze, LatencyFlag, LatencyObservation, SessionAnalytics};
pub use bank::{
    BuiltinCatalog, ContentDocument, ContentError, ContentSource, ItemBank, ItemBanks,
    JsonContentSource, RawItem, RawOption,
};
pub use domain::{
    BankId, ConstructCode, Item, ItemId, ItemOption, ItemResponse, MatchKind, ResolvedAnswer,
    ScoreVector,
};
pub use environment::{
    scale_to_percent, AssessmentScope, EmployerBand, EnvironmentClass, EnvironmentProfile,
};
pub use export::{append_to_path, ExportError, SummaryRow, SummaryWriter};
pub use feedback::{build_feedback, feedback_for, ConstructFeedback};
pub use intake::{
    parse_item_key, validate_responses, EmployerAnswers, RawAnswer, RejectedResponse,
    ResponseBatch, ResponseRejection,
};
pub use normalizer::normalize_choice_text;
pub use resolver::{resolve_label, AnswerResolver, ChoiceIndex, IndexedItem};
pub use router::assessment_router;
pub use service::{ApplicantReport, AssessmentEngine, ScoreSummary};
pub use shuffle::{Presentation, PresentedOption, Shuffler};
