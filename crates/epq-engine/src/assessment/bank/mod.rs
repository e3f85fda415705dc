//! Load-time-immutable item banks.
//!
//! Raw content is validated once here. Malformed items are dropped with a warning instead of
//! failing the load, so a partially broken content file still serves every usable item.

pub mod catalog;
pub mod source;

use std::collections::{BTreeSet, HashSet};

use tracing::{debug, warn};

use super::domain::{BankId, ConstructCode, Item, ItemId, ItemOption, ScoreVector};
use super::resolver::IndexedItem;

pub use source::{
    BuiltinCatalog, ContentDocument, ContentError, ContentSource, JsonContentSource, RawItem,
    RawOption,
};

/// Minimum number of usable options for an item to be served.
pub const MIN_OPTIONS: usize = 2;

/// `true` when `item_id` falls inside an optional id cap (`id <= cap`).
pub fn within_cap(item_id: ItemId, cap: Option<u32>) -> bool {
    cap.map_or(true, |cap| item_id <= cap)
}

/// Immutable catalog of one bank's items, sorted by id.
#[derive(Debug, Clone)]
pub struct ItemBank {
    bank_id: BankId,
    items: Vec<IndexedItem>,
}

impl ItemBank {
    pub fn load(source: &dyn ContentSource, bank_id: BankId) -> Result<Self, ContentError> {
        let raw = source.raw_items(bank_id)?;
        Ok(Self::from_raw(bank_id, raw))
    }

    pub fn from_raw(bank_id: BankId, raw: Vec<RawItem>) -> Self {
        let mut seen = HashSet::new();
        let mut items = Vec::with_capacity(raw.len());

        for raw_item in raw {
            if !seen.insert(raw_item.id) {
                warn!(
                    bank = bank_id.label(),
                    item_id = raw_item.id,
                    "duplicate item id; keeping the first definition"
                );
                continue;
            }
            if let Some(item) = validate_item(bank_id, raw_item) {
                items.push(IndexedItem::new(item));
            }
        }

        items.sort_by_key(|indexed| indexed.item.id);

        for indexed in &items {
            for duplicate in indexed.index.duplicates() {
                warn!(
                    bank = bank_id.label(),
                    item_id = indexed.item.id,
                    normalized = %duplicate.normalized,
                    kept = duplicate.kept,
                    shadowed = duplicate.shadowed,
                    "options normalize to the same text; the first option wins"
                );
            }
        }

        debug!(bank = bank_id.label(), items = items.len(), "item bank loaded");
        Self { bank_id, items }
    }

    pub fn bank_id(&self) -> BankId {
        self.bank_id
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items sorted by id, keeping only ids within `max_count`.
    pub fn items(&self, max_count: Option<u32>) -> Vec<&Item> {
        self.indexed_items(max_count)
            .map(|indexed| &indexed.item)
            .collect()
    }

    pub fn indexed_items(&self, max_count: Option<u32>) -> impl Iterator<Item = &IndexedItem> {
        self.items
            .iter()
            .filter(move |indexed| within_cap(indexed.item.id, max_count))
    }

    pub fn indexed(&self, item_id: ItemId) -> Option<&IndexedItem> {
        self.items
            .binary_search_by_key(&item_id, |indexed| indexed.item.id)
            .ok()
            .map(|position| &self.items[position])
    }

    pub fn get(&self, item_id: ItemId) -> Option<&Item> {
        self.indexed(item_id).map(|indexed| &indexed.item)
    }

    /// Every construct scored by at least one option of an in-scope item.
    pub fn constructs(&self, max_count: Option<u32>) -> BTreeSet<ConstructCode> {
        self.indexed_items(max_count)
            .flat_map(|indexed| indexed.item.options.iter())
            .flat_map(|option| option.scores.keys().cloned())
            .collect()
    }
}

fn validate_item(bank_id: BankId, raw: RawItem) -> Option<Item> {
    let prompt = raw.prompt.trim();
    if prompt.is_empty() {
        warn!(
            bank = bank_id.label(),
            item_id = raw.id,
            "dropping item with empty prompt"
        );
        return None;
    }

    let options: Vec<ItemOption> = raw
        .options
        .into_iter()
        .filter_map(|option| validate_option(bank_id, raw.id, option))
        .collect();

    if options.len() < MIN_OPTIONS {
        warn!(
            bank = bank_id.label(),
            item_id = raw.id,
            usable = options.len(),
            "dropping item with fewer than {MIN_OPTIONS} usable options"
        );
        return None;
    }

    Some(Item {
        id: raw.id,
        prompt: prompt.to_string(),
        options,
    })
}

fn validate_option(bank_id: BankId, item_id: ItemId, raw: RawOption) -> Option<ItemOption> {
    let text = raw.text.trim();
    if text.is_empty() {
        warn!(
            bank = bank_id.label(),
            item_id, "dropping option with empty text"
        );
        return None;
    }

    let mut scores = ScoreVector::new();
    for (code, value) in raw.scores {
        let code = code.trim();
        match u32::try_from(value) {
            Ok(value) if value > 0 && !code.is_empty() => {
                *scores.entry(ConstructCode::new(code)).or_insert(0) += value;
            }
            _ => warn!(
                bank = bank_id.label(),
                item_id,
                option = text,
                construct = code,
                value,
                "dropping non-positive or unnamed score entry"
            ),
        }
    }

    Some(ItemOption {
        text: text.to_string(),
        scores,
    })
}

/// The employer and applicant banks, loaded once at startup.
#[derive(Debug, Clone)]
pub struct ItemBanks {
    employer: ItemBank,
    applicant: ItemBank,
}

impl ItemBanks {
    pub fn new(employer: ItemBank, applicant: ItemBank) -> Self {
        Self {
            employer,
            applicant,
        }
    }

    pub fn load(source: &dyn ContentSource) -> Result<Self, ContentError> {
        Ok(Self {
            employer: ItemBank::load(source, BankId::Employer)?,
            applicant: ItemBank::load(source, BankId::Applicant)?,
        })
    }

    pub fn builtin() -> Self {
        Self {
            employer: ItemBank::from_raw(BankId::Employer, catalog::employer_items()),
            applicant: ItemBank::from_raw(BankId::Applicant, catalog::applicant_items()),
        }
    }

    pub fn bank(&self, bank_id: BankId) -> &ItemBank {
        match bank_id {
            BankId::Employer => &self.employer,
            BankId::Applicant => &self.applicant,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn raw_option(text: &str, scores: &[(&str, i64)]) -> RawOption {
        RawOption {
            text: text.to_string(),
            scores: scores
                .iter()
                .map(|(code, value)| (code.to_string(), *value))
                .collect::<BTreeMap<_, _>>(),
        }
    }

    fn raw_item(id: ItemId, prompt: &str, options: Vec<RawOption>) -> RawItem {
        RawItem {
            id,
            prompt: prompt.to_string(),
            options,
        }
    }

    #[test]
    fn malformed_items_are_filtered_at_load() {
        let bank = ItemBank::from_raw(
            BankId::Applicant,
            vec![
                raw_item(4, "  ", vec![raw_option("a", &[]), raw_option("b", &[])]),
                raw_item(2, "One usable", vec![raw_option("a", &[]), raw_option(" ", &[])]),
                raw_item(3, "Fine", vec![raw_option("a", &[]), raw_option("b", &[])]),
                raw_item(1, "Also fine", vec![raw_option("x", &[]), raw_option("y", &[])]),
                raw_item(3, "Shadowed", vec![raw_option("c", &[]), raw_option("d", &[])]),
            ],
        );

        let ids: Vec<ItemId> = bank.items(None).iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(bank.get(3).map(|item| item.prompt.as_str()), Some("Fine"));
    }

    #[test]
    fn truncation_is_by_id_value() {
        let bank = ItemBank::from_raw(
            BankId::Applicant,
            vec![
                raw_item(1, "a", vec![raw_option("x", &[]), raw_option("y", &[])]),
                raw_item(5, "b", vec![raw_option("x", &[]), raw_option("y", &[])]),
                raw_item(30, "c", vec![raw_option("x", &[]), raw_option("y", &[])]),
            ],
        );
        let ids: Vec<ItemId> = bank.items(Some(25)).iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![1, 5]);
        assert!(bank.items(Some(0)).is_empty());
    }

    #[test]
    fn invalid_score_entries_are_dropped() {
        let bank = ItemBank::from_raw(
            BankId::Applicant,
            vec![raw_item(
                1,
                "Scores",
                vec![
                    raw_option("x", &[("SCL", 2), ("CVL", 0), ("", 3)]),
                    raw_option("y", &[("ERL", -1)]),
                ],
            )],
        );
        let item = bank.get(1).expect("item kept");
        assert_eq!(item.options[0].scores.len(), 1);
        assert!(item.options[1].scores.is_empty());
        assert_eq!(
            bank.constructs(None).into_iter().collect::<Vec<_>>(),
            vec![ConstructCode::from("SCL")]
        );
    }

    #[test]
    fn builtin_banks_load_completely() {
        let banks = ItemBanks::builtin();
        assert_eq!(banks.bank(BankId::Employer).len(), 20);
        assert_eq!(banks.bank(BankId::Applicant).len(), 50);
        assert_eq!(banks.bank(BankId::Applicant).constructs(None).len(), 8);
    }
}
