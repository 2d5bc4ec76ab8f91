//! # Price Book and Fuzzy Matching
//!
//! Annotates material lines with supplier prices. This is an enrichment
//! step over an already-assembled quote; the quantity calculators never
//! consult prices and never depend on this module.
//!
//! Matching is fuzzy because calculator descriptions ("90x45 joists")
//! rarely equal supplier catalog names ("MGP10 Treated Pine 90x45 H2").
//! A line that matches nothing above the caller's threshold is returned
//! unpriced rather than priced by the nearest guess.
//!
//! ## Example
//!
//! ```rust
//! use takeoff_core::pricing::{PriceBook, DEFAULT_MATCH_THRESHOLD};
//!
//! let book = PriceBook::builtin();
//! let entry = book
//!     .best_match("Merbau Decking 90x19", DEFAULT_MATCH_THRESHOLD)
//!     .unwrap();
//! assert_eq!(entry.supplier, "Bowens");
//! assert_eq!(entry.price_per_unit, 6.95);
//! ```

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::quote::MaterialLine;

/// Minimum similarity score for a price match unless the caller says otherwise
pub const DEFAULT_MATCH_THRESHOLD: f64 = 0.6;

static BUILTIN: Lazy<PriceBook> = Lazy::new(|| {
    let seed: SeedList = serde_json::from_str(include_str!("data/materials.json"))
        .expect("embedded price list parses");
    PriceBook::new(seed.materials)
});

#[derive(Deserialize)]
struct SeedList {
    materials: Vec<PriceEntry>,
}

/// One supplier catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceEntry {
    /// Supplier catalog name, e.g. "Merbau Decking 90x19"
    pub name: String,

    /// Supplier the price was sourced from
    pub supplier: String,

    /// Supplier category, e.g. "Decking"
    pub category: String,

    /// Price per `unit` in dollars
    pub price_per_unit: f64,

    /// Pricing unit code, e.g. "LM" or "EA"
    pub unit: String,
}

/// A material line after price annotation. Unmatched lines keep their
/// description and carry `None` for every price field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricedLine {
    /// Description from the quoted material line
    pub material_description: String,

    /// Catalog name the line matched, when one cleared the threshold
    pub matched_name: Option<String>,

    /// Unit price of the matched entry
    pub price_per_unit: Option<f64>,

    /// Pricing unit of the matched entry
    pub price_unit: Option<String>,
}

/// A searchable list of price entries.
#[derive(Debug, Clone)]
pub struct PriceBook {
    entries: Vec<PriceEntry>,
}

impl PriceBook {
    /// Build a price book from caller-supplied entries.
    pub fn new(entries: Vec<PriceEntry>) -> Self {
        PriceBook { entries }
    }

    /// The embedded supplier seed list.
    pub fn builtin() -> &'static PriceBook {
        &BUILTIN
    }

    /// All entries in the book.
    pub fn entries(&self) -> &[PriceEntry] {
        &self.entries
    }

    /// Find the highest-scoring entry for a description, if any entry
    /// scores at or above `threshold`. Earlier entries win ties.
    pub fn best_match(&self, description: &str, threshold: f64) -> Option<&PriceEntry> {
        let mut best: Option<(f64, &PriceEntry)> = None;
        for entry in &self.entries {
            let score = similarity(description, &entry.name);
            let beats = match best {
                Some((best_score, _)) => score > best_score,
                None => true,
            };
            if beats {
                best = Some((score, entry));
            }
        }
        best.filter(|(score, _)| *score >= threshold)
            .map(|(_, entry)| entry)
    }

    /// Annotate quoted lines with the best matching price per line.
    pub fn annotate(&self, lines: &[MaterialLine], threshold: f64) -> Vec<PricedLine> {
        lines
            .iter()
            .map(|line| match self.best_match(&line.material_description, threshold) {
                Some(entry) => PricedLine {
                    material_description: line.material_description.clone(),
                    matched_name: Some(entry.name.clone()),
                    price_per_unit: Some(entry.price_per_unit),
                    price_unit: Some(entry.unit.clone()),
                },
                None => PricedLine {
                    material_description: line.material_description.clone(),
                    matched_name: None,
                    price_per_unit: None,
                    price_unit: None,
                },
            })
            .collect()
    }
}

/// Score how alike two material descriptions are, in [0, 1].
///
/// Case-insensitive. Equal strings score 1.0; substring containment
/// scores 0.8 plus a share for the length ratio, so "Merbau Decking"
/// against "Merbau Decking 90x19" outranks loose edit-distance matches;
/// everything else falls back to normalized Levenshtein distance.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a = a.trim().to_lowercase();
    let b = b.trim().to_lowercase();
    if a == b {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let a_len = a.chars().count();
    let b_len = b.chars().count();
    let (shorter, longer) = if a_len <= b_len { (&a, &b) } else { (&b, &a) };
    let (short_len, long_len) = (a_len.min(b_len), a_len.max(b_len));

    if longer.contains(shorter.as_str()) {
        return 0.8 + 0.2 * (short_len as f64 / long_len as f64);
    }

    1.0 - levenshtein(&a, &b) as f64 / long_len as f64
}

/// Edit distance over characters, two-row dynamic programming.
fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut previous: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0usize; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        current[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let substitution = previous[j] + usize::from(ca != cb);
            current[j + 1] = substitution
                .min(previous[j + 1] + 1)
                .min(current[j] + 1);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[b.len()]
}
