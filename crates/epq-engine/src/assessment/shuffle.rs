//! Per-render option shuffling.
//!
//! A presentation only changes the visual order and labels of an item's options. The options
//! themselves (text and score vector) are cloned untouched, and nothing downstream relies on the
//! label-to-option mapping surviving the render: answers are resolved by text.
//!
//! Seeds exist for reproducible tests and debugging. Production shufflers should be unseeded so
//! presentation order never correlates across sessions.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use super::domain::{Item, ItemId, ItemOption};

/// An option as rendered: its display label plus the untouched option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresentedOption {
    pub label: String,
    pub option: ItemOption,
}

/// Ephemeral label-to-option mapping for one item render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Presentation {
    pub item_id: ItemId,
    pub prompt: String,
    pub options: Vec<PresentedOption>,
}

impl Presentation {
    /// Authored order, labelled `A`, `B`, ...
    pub fn unshuffled(item: &Item) -> Self {
        Self::labelled(item, item.options.clone())
    }

    fn labelled(item: &Item, options: Vec<ItemOption>) -> Self {
        let options = options
            .into_iter()
            .enumerate()
            .map(|(position, option)| PresentedOption {
                label: option_label(position),
                option,
            })
            .collect();

        Self {
            item_id: item.id,
            prompt: item.prompt.clone(),
            options,
        }
    }

    pub fn option_for_label(&self, label: &str) -> Option<&ItemOption> {
        let wanted = label.trim();
        self.options
            .iter()
            .find(|presented| presented.label.eq_ignore_ascii_case(wanted))
            .map(|presented| &presented.option)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Shuffler {
    seed: Option<u64>,
}

impl Shuffler {
    pub fn random() -> Self {
        Self { seed: None }
    }

    pub fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    pub fn from_seed(seed: Option<u64>) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn shuffle(&self, item: &Item) -> Presentation {
        let mut options = item.options.clone();
        match self.seed {
            Some(seed) => {
                let mut rng = StdRng::seed_from_u64(item_seed(seed, item));
                options.shuffle(&mut rng);
            }
            None => options.shuffle(&mut rand::thread_rng()),
        }
        Presentation::labelled(item, options)
    }
}

/// Mix the caller's seed with the item's content so identical option sets on different items
/// do not shuffle in lockstep.
fn item_seed(seed: u64, item: &Item) -> u64 {
    let mut hasher = blake3::Hasher::new();
    hasher.update(&seed.to_le_bytes());
    hasher.update(&item.id.to_le_bytes());
    hasher.update(item.prompt.as_bytes());
    for option in &item.options {
        hasher.update(&[0]);
        hasher.update(option.text.as_bytes());
    }

    let digest = hasher.finalize();
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest.as_bytes()[..8]);
    u64::from_le_bytes(prefix)
}

/// `A`, `B`, ... `Z`, then `AA`, `AB`, ... for very wide items.
pub fn option_label(position: usize) -> String {
    let mut remaining = position + 1;
    let mut letters = Vec::new();
    while remaining > 0 {
        let offset = (remaining - 1) % 26;
        letters.push(char::from(b'A' + offset as u8));
        remaining = (remaining - 1) / 26;
    }
    letters.iter().rev().collect()
}
