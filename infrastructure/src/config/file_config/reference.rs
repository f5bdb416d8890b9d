//! Reference data configuration from TOML (`[reference]` section)

use degrade_domain::{Classification, ReferenceEntry};
use serde::{Deserialize, Serialize};

/// Raw reference data configuration from TOML.
///
/// # Example
///
/// ```toml
/// [reference]
/// use_defaults = true
///
/// [[reference.entries]]
/// key = "bakery"
/// code = "311811"
/// description = "Retail Bakeries"
/// category = "Food Service"
/// confidence = 0.8
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReferenceConfig {
    /// Start from the built-in entries
    pub use_defaults: bool,
    /// Additional entries; a key already present is replaced
    pub entries: Vec<FileReferenceEntry>,
}

impl Default for FileReferenceConfig {
    fn default() -> Self {
        Self {
            use_defaults: true,
            entries: Vec::new(),
        }
    }
}

/// One `[[reference.entries]]` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileReferenceEntry {
    pub key: String,
    pub code: String,
    pub description: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default = "default_code_type")]
    pub code_type: String,
    pub confidence: f64,
}

pub(super) fn default_code_type() -> String {
    "NAICS".to_string()
}

impl FileReferenceEntry {
    pub fn to_entry(&self) -> ReferenceEntry {
        let id = self
            .id
            .clone()
            .unwrap_or_else(|| format!("ref-{}", self.code));
        let mut classification = Classification::new(id, &self.code, &self.description)
            .with_code_type(&self.code_type);
        if let Some(category) = &self.category {
            classification = classification.with_category(category);
        }
        ReferenceEntry::new(&self.key, classification, self.confidence)
    }
}

impl FileReferenceConfig {
    /// Entries with a non-blank key.
    pub fn to_entries(&self) -> Vec<ReferenceEntry> {
        self.entries
            .iter()
            .filter(|e| !e.key.trim().is_empty())
            .map(FileReferenceEntry::to_entry)
            .collect()
    }
}
