//! Universal properties of normalization, shuffling, resolution, aggregation and scaling.

use std::collections::BTreeSet;

use epq_engine::assessment::{
    normalize_choice_text, scale_to_percent, ConstructCode, IndexedItem, Item, ItemOption,
    ItemResponse, ScoreVector, SessionAccumulator, Shuffler,
};
use proptest::prelude::*;

fn score_vector() -> impl Strategy<Value = ScoreVector> {
    prop::collection::btree_map(
        prop::sample::select(vec!["SCL", "CCD", "CIL", "CVL", "ERL", "MSD", "ICI", "AJL"])
            .prop_map(ConstructCode::from),
        1u32..=4,
        0..3,
    )
}

fn item() -> impl Strategy<Value = Item> {
    prop::collection::vec(("[A-Za-z ]{1,24}", score_vector()), 2..7).prop_map(|options| Item {
        id: 1,
        prompt: "Generated".to_string(),
        options: options
            .into_iter()
            .map(|(text, scores)| ItemOption { text, scores })
            .collect(),
    })
}

fn sorted(options: impl IntoIterator<Item = ItemOption>) -> Vec<(String, Vec<(ConstructCode, u32)>)> {
    let mut pairs: Vec<_> = options
        .into_iter()
        .map(|option| (option.text, option.scores.into_iter().collect::<Vec<_>>()))
        .collect();
    pairs.sort();
    pairs
}

proptest! {
    #[test]
    fn normalization_is_idempotent(text in "\\PC{0,40}") {
        let once = normalize_choice_text(&text);
        prop_assert_eq!(normalize_choice_text(&once), once);
    }

    #[test]
    fn normalization_is_idempotent_on_punctuation_mixes(
        text in "[a-zA-Z \u{2018}\u{2019}\u{201c}\u{201d}\u{2013}\u{2014}\u{e2}\u{20ac}\u{2122}\u{c3}\u{a9}]{0,30}"
    ) {
        let once = normalize_choice_text(&text);
        prop_assert_eq!(normalize_choice_text(&once), once);
    }

    #[test]
    fn shuffle_preserves_the_option_multiset(item in item(), seed in any::<u64>()) {
        let presentation = Shuffler::seeded(seed).shuffle(&item);
        let shuffled = presentation.options.into_iter().map(|presented| presented.option);
        prop_assert_eq!(sorted(shuffled), sorted(item.options.clone()));
    }

    #[test]
    fn resolution_is_deterministic(item in item(), pick in any::<prop::sample::Index>()) {
        let indexed = IndexedItem::new(item);
        let chosen = pick.get(&indexed.item.options).text.to_uppercase();
        let response = ItemResponse::new(1, chosen);
        let first = indexed.resolve_text(&response);
        let second = indexed.resolve_text(&response);
        prop_assert_eq!(first.contribution, second.contribution);
        prop_assert_eq!(first.match_kind, second.match_kind);
    }

    #[test]
    fn aggregation_ignores_answer_order(
        answers in prop::collection::vec(score_vector(), 0..12),
        rotate in any::<prop::sample::Index>(),
    ) {
        let universe: BTreeSet<ConstructCode> =
            ["SCL", "MSD"].into_iter().map(ConstructCode::from).collect();

        let mut forward = SessionAccumulator::new();
        answers.iter().for_each(|scores| forward.accumulate_scores(scores));

        let mut reordered = answers.clone();
        if !reordered.is_empty() {
            let by = rotate.index(reordered.len());
            reordered.rotate_left(by);
        }
        reordered.reverse();
        let mut backward = SessionAccumulator::new();
        reordered.iter().for_each(|scores| backward.accumulate_scores(scores));

        prop_assert_eq!(forward.finalize(&universe), backward.finalize(&universe));
    }

    #[test]
    fn scaling_stays_within_percent_bounds(value in 1.0f64..=4.0) {
        let scaled = scale_to_percent(value);
        prop_assert!(scaled <= 100);
    }
}

#[test]
fn scaling_endpoints() {
    assert_eq!(scale_to_percent(1.0), 0);
    assert_eq!(scale_to_percent(4.0), 100);
}
