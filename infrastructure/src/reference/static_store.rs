//! Static reference store: vetted classifications keyed by query fragment.
//!
//! Built once before any execution and read-only afterward, so lookups take
//! no lock. Keys are kept in a `BTreeMap` so substring matching walks them in
//! sorted order and the first match is reproducible across runs.

use degrade_application::ports::reference_store::ReferenceLookup;
use degrade_domain::{Classification, ReferenceEntry};
use std::collections::BTreeMap;
use tracing::warn;

#[derive(Debug, Clone, Default)]
pub struct StaticReferenceStore {
    entries: BTreeMap<String, ReferenceEntry>,
}

impl StaticReferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from entries. A later entry replaces an earlier one with the same key.
    pub fn from_entries(entries: impl IntoIterator<Item = ReferenceEntry>) -> Self {
        let mut store = Self::new();
        store.extend(entries);
        store
    }

    /// Store pre-populated with a small set of common business types.
    pub fn with_defaults() -> Self {
        Self::from_entries(default_entries())
    }

    /// Add entries under their normalized key. Blank keys are skipped since
    /// they would be contained in every query.
    pub fn extend(&mut self, entries: impl IntoIterator<Item = ReferenceEntry>) {
        for mut entry in entries {
            let key = normalize(&entry.key);
            if key.is_empty() {
                warn!("Skipping reference entry with blank key ({})", entry.classification.code);
                continue;
            }
            entry.key = key.clone();
            self.entries.insert(key, entry);
        }
    }
}

fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

impl ReferenceLookup for StaticReferenceStore {
    fn exact(&self, query: &str) -> Option<&ReferenceEntry> {
        self.entries.get(&normalize(query))
    }

    fn containing(&self, query: &str) -> Option<&ReferenceEntry> {
        let query = normalize(query);
        if query.is_empty() {
            return None;
        }
        self.entries
            .values()
            .find(|e| query.contains(e.key.as_str()) || e.key.contains(query.as_str()))
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

fn naics(id: &str, code: &str, category: &str, description: &str) -> Classification {
    Classification::new(id, code, description)
        .with_code_type("NAICS")
        .with_category(category)
}

fn default_entries() -> Vec<ReferenceEntry> {
    vec![
        ReferenceEntry::new(
            "restaurant",
            naics("ref-722511", "722511", "Food Service", "Full-Service Restaurants"),
            0.85,
        ),
        ReferenceEntry::new(
            "coffee shop",
            naics("ref-722515", "722515", "Food Service", "Snack and Nonalcoholic Beverage Bars"),
            0.8,
        ),
        ReferenceEntry::new(
            "retail",
            naics("ref-44-45", "44-45", "Retail", "Retail Trade"),
            0.7,
        ),
        ReferenceEntry::new(
            "grocery",
            naics("ref-445110", "445110", "Retail", "Supermarkets and Grocery Stores"),
            0.8,
        ),
        ReferenceEntry::new(
            "software",
            naics("ref-541511", "541511", "Technology", "Custom Computer Programming Services"),
            0.8,
        ),
        ReferenceEntry::new(
            "law firm",
            naics("ref-541110", "541110", "Professional Services", "Offices of Lawyers"),
            0.85,
        ),
        ReferenceEntry::new(
            "dental",
            naics("ref-621210", "621210", "Healthcare", "Offices of Dentists"),
            0.85,
        ),
        ReferenceEntry::new(
            "construction",
            naics("ref-236220", "236220", "Construction", "Commercial and Institutional Building Construction"),
            0.75,
        ),
    ]
}
