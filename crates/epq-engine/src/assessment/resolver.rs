//! Recover the originating option (and its score vector) for a submitted answer.

use std::cmp::Reverse;
use std::collections::HashMap;

use tracing::warn;

use super::bank::{within_cap, ItemBank};
use super::domain::{Item, ItemId, ItemResponse, MatchKind, ResolvedAnswer, ScoreVector};
use super::normalizer::normalize_choice_text;
use super::shuffle::Presentation;

/// Two options of one item whose text normalizes to the same string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateChoice {
    pub normalized: String,
    pub kept: usize,
    pub shadowed: usize,
}

/// Per-item lookup from normalized option text to option position, built once at load.
#[derive(Debug, Clone, Default)]
pub struct ChoiceIndex {
    exact: HashMap<String, usize>,
    normalized: Vec<String>,
    by_length: Vec<usize>,
    duplicates: Vec<DuplicateChoice>,
}

impl ChoiceIndex {
    pub fn build(item: &Item) -> Self {
        let normalized: Vec<String> = item
            .options
            .iter()
            .map(|option| normalize_choice_text(&option.text))
            .collect();

        let mut exact = HashMap::with_capacity(normalized.len());
        let mut duplicates = Vec::new();
        for (position, text) in normalized.iter().enumerate() {
            match exact.get(text) {
                Some(&kept) => duplicates.push(DuplicateChoice {
                    normalized: text.clone(),
                    kept,
                    shadowed: position,
                }),
                None => {
                    exact.insert(text.clone(), position);
                }
            }
        }

        // longest candidate first; the stable sort keeps authored order among equal lengths
        let mut by_length: Vec<usize> = (0..normalized.len()).collect();
        by_length.sort_by_key(|&position| Reverse(normalized[position].chars().count()));

        Self {
            exact,
            normalized,
            by_length,
            duplicates,
        }
    }

    pub fn duplicates(&self) -> &[DuplicateChoice] {
        &self.duplicates
    }

    /// Find the option for already-normalized submitted text.
    pub fn lookup(&self, submitted: &str) -> Option<(usize, MatchKind)> {
        if let Some(&position) = self.exact.get(submitted) {
            return Some((position, MatchKind::Exact));
        }
        if submitted.is_empty() {
            return None;
        }

        self.by_length
            .iter()
            .copied()
            .find(|&position| {
                let candidate = self.normalized[position].as_str();
                !candidate.is_empty()
                    && (candidate.contains(submitted) || submitted.contains(candidate))
            })
            .map(|position| (position, MatchKind::Substring))
    }
}

/// An item together with its choice index.
#[derive(Debug, Clone)]
pub struct IndexedItem {
    pub item: Item,
    pub index: ChoiceIndex,
}

impl IndexedItem {
    pub fn new(item: Item) -> Self {
        let index = ChoiceIndex::build(&item);
        Self { item, index }
    }

    /// Text-indexed resolution. Never fails: unscoreable answers carry an empty contribution.
    pub fn resolve_text(&self, response: &ItemResponse) -> ResolvedAnswer {
        let submitted = normalize_choice_text(&response.chosen_text);
        let found = self.index.lookup(&submitted);

        let (matched_option, match_kind) = match found {
            Some((position, kind)) => {
                let option = self.item.options[position].clone();
                if kind == MatchKind::Substring {
                    warn!(
                        item_id = self.item.id,
                        submitted = %response.chosen_text,
                        matched = %option.text,
                        "answer resolved by substring fallback"
                    );
                }
                (Some(option), kind)
            }
            None => {
                warn!(
                    item_id = self.item.id,
                    submitted = %response.chosen_text,
                    "answer matched no option; recording empty contribution"
                );
                (None, MatchKind::Unresolved)
            }
        };

        let contribution = matched_option
            .as_ref()
            .map(|option| option.scores.clone())
            .unwrap_or_default();

        ResolvedAnswer {
            item_id: self.item.id,
            chosen_text: response.chosen_text.clone(),
            matched_option,
            match_kind,
            contribution,
            latency_seconds: response.latency_seconds,
            answered_at: response.answered_at,
        }
    }
}

/// Label-indexed resolution against the presentation the label was chosen from.
pub fn resolve_label(presentation: &Presentation, label: &str) -> ResolvedAnswer {
    let matched_option = presentation.option_for_label(label).cloned();
    let match_kind = if matched_option.is_some() {
        MatchKind::Label
    } else {
        warn!(
            item_id = presentation.item_id,
            label, "label not present in presentation"
        );
        MatchKind::Unresolved
    };

    ResolvedAnswer {
        item_id: presentation.item_id,
        chosen_text: matched_option
            .as_ref()
            .map(|option| option.text.clone())
            .unwrap_or_else(|| label.to_string()),
        contribution: matched_option
            .as_ref()
            .map(|option| option.scores.clone())
            .unwrap_or_else(ScoreVector::new),
        matched_option,
        match_kind,
        latency_seconds: None,
        answered_at: None,
    }
}

/// Resolves responses against one bank, restricted to items within an optional id cap.
#[derive(Debug, Clone, Copy)]
pub struct AnswerResolver<'a> {
    bank: &'a ItemBank,
    cap: Option<u32>,
}

impl<'a> AnswerResolver<'a> {
    pub fn new(bank: &'a ItemBank, cap: Option<u32>) -> Self {
        Self { bank, cap }
    }

    /// `None` when the item is not part of the bank being scored.
    pub fn resolve(&self, response: &ItemResponse) -> Option<ResolvedAnswer> {
        if !within_cap(response.item_id, self.cap) {
            return None;
        }
        self.bank
            .indexed(response.item_id)
            .map(|indexed| indexed.resolve_text(response))
    }

    /// Resolve every in-scope response; returns the resolved answers and the ignored item ids.
    pub fn resolve_all<'r>(
        &self,
        responses: impl IntoIterator<Item = &'r ItemResponse>,
    ) -> (Vec<ResolvedAnswer>, Vec<ItemId>) {
        let mut resolved = Vec::new();
        let mut ignored = Vec::new();
        for response in responses {
            match self.resolve(response) {
                Some(answer) => resolved.push(answer),
                None => ignored.push(response.item_id),
            }
        }
        (resolved, ignored)
    }
}
