//! End-to-end scenarios through the public engine facade: employer scoping, a capped applicant
//! session over shuffled presentations, content loaded from JSON, and summary export.

mod common {
    use epq_engine::assessment::{
        AssessmentEngine, BankId, EmployerAnswers, Presentation, RawAnswer, Shuffler,
    };

    pub(super) fn engine() -> AssessmentEngine {
        AssessmentEngine::builtin().with_shuffler(Shuffler::seeded(2024))
    }

    pub(super) fn uniform_employer_answers(ordinal: u8) -> EmployerAnswers {
        (1..=20u32).map(|item_id| (item_id, ordinal)).collect()
    }

    /// Answer every presented item with the text of the option rendered under `label`,
    /// the way a UI posts back only the chosen text.
    pub(super) fn answer_by_label(
        presentations: &[Presentation],
        label: &str,
    ) -> Vec<(String, RawAnswer)> {
        presentations
            .iter()
            .filter_map(|presentation| {
                presentation.option_for_label(label).map(|option| {
                    (
                        BankId::Applicant.item_key(presentation.item_id),
                        RawAnswer::from(option.text.as_str()),
                    )
                })
            })
            .collect()
    }
}

use common::*;
use epq_engine::assessment::{
    append_to_path, validate_responses, AssessmentEngine, BankId, ContentDocument,
    EmployerAnswers, EnvironmentClass, JsonContentSource, MatchKind, RawAnswer, RawItem,
    RawOption, SessionAccumulator, Shuffler, SummaryRow,
};

#[test]
fn employer_scope_drives_applicant_item_count() {
    let engine = engine();

    let scope = engine.employer_scope(&uniform_employer_answers(1));
    assert_eq!(scope.environment, EnvironmentClass::Low);

    let presentations = engine.present_items(BankId::Applicant, Some(scope.max_items));
    assert_eq!(presentations.len(), 25);
    assert!(presentations.iter().all(|presentation| presentation.item_id <= 25));
}

#[test]
fn text_answers_score_the_presented_option() {
    let engine = engine();
    let presentations = engine.present_items(BankId::Applicant, Some(50));

    let mut expected = SessionAccumulator::new();
    for presentation in &presentations {
        let option = presentation.option_for_label("A").expect("every item has an A");
        expected.accumulate_scores(&option.scores);
    }
    let expected = expected.finalize(&engine.bank(BankId::Applicant).constructs(Some(50)));

    let raw = answer_by_label(&presentations, "A");
    let report = engine.evaluate_applicant(EnvironmentClass::High, validate_responses(raw));

    assert_eq!(report.aggregate, expected);
    assert!(report.unresolved_items.is_empty());
}

#[test]
fn label_answers_resolve_without_the_presentation() {
    let engine = engine();
    let presentations = engine.present_items(BankId::Applicant, Some(32));
    let raw = answer_by_label(&presentations, "B");

    let report = engine.evaluate_applicant(EnvironmentClass::Moderate, validate_responses(raw));
    assert_eq!(report.answers.len(), 32);
    assert!(report
        .answers
        .iter()
        .all(|answer| answer.match_kind == MatchKind::Exact));
    assert!(report
        .profile
        .dimensions()
        .iter()
        .all(|(_, value)| *value <= 100));
}

#[test]
fn json_content_replaces_builtin_banks() {
    let document = ContentDocument {
        employer: vec![RawItem {
            id: 1,
            prompt: "Pace".into(),
            options: vec![
                RawOption {
                    text: "Calm".into(),
                    scores: [("ENV".to_string(), 1)].into_iter().collect(),
                },
                RawOption {
                    text: "Hectic".into(),
                    scores: [("ENV".to_string(), 4)].into_iter().collect(),
                },
            ],
        }],
        applicant: vec![RawItem {
            id: 1,
            prompt: "   ".into(),
            options: Vec::new(),
        }],
    };
    let payload = serde_json::to_string(&document).expect("encode");
    let source = JsonContentSource::from_reader(payload.as_bytes()).expect("decode");
    let engine = AssessmentEngine::from_source(&source, Shuffler::seeded(5)).expect("load");

    assert_eq!(engine.bank(BankId::Employer).len(), 1);
    assert!(engine.bank(BankId::Applicant).is_empty());

    let answers: EmployerAnswers = [(1u32, 2u8)].into_iter().collect();
    let scope = engine.employer_scope(&answers);
    assert_eq!(scope.environment, EnvironmentClass::High);
    assert_eq!(scope.max_items, 50);
}

#[test]
fn session_summary_is_appended_as_csv() {
    let engine = engine();
    let report = engine.evaluate_applicant(
        EnvironmentClass::Moderate,
        validate_responses(vec![(
            "Q1",
            RawAnswer::from("Clear expectations with little flexibility"),
        )]),
    );

    let path = std::env::temp_dir().join(format!("epq-flow-{}.csv", std::process::id()));
    let _ = std::fs::remove_file(&path);
    let row = SummaryRow::new(
        chrono::Utc::now(),
        BankId::Applicant,
        &report.aggregate,
        Some(&report.analytics),
    )
    .expect("row");
    append_to_path(&path, &row).expect("append");

    let contents = std::fs::read_to_string(&path).expect("read");
    assert!(contents.starts_with("timestamp,bank,overall_average"));
    assert!(contents.contains("\"\"SCL\"\":3.0"));
    let _ = std::fs::remove_file(&path);
}
