//! Alternative scoring rules from TOML (`[[rules]]` array)

use super::reference::default_code_type;
use degrade_domain::{Classification, ConfigIssue, ConfigIssueCode, SimpleRule};
use serde::{Deserialize, Serialize};

/// One `[[rules]]` table. Custom rules are evaluated after the built-in ones.
///
/// # Example
///
/// ```toml
/// [[rules]]
/// keywords = ["bakery", "patisserie"]
/// code = "311811"
/// description = "Retail Bakeries"
/// confidence = 0.55
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileRuleConfig {
    pub keywords: Vec<String>,
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

impl FileRuleConfig {
    pub fn to_rule(&self) -> SimpleRule {
        let id = self
            .id
            .clone()
            .unwrap_or_else(|| format!("alt-{}", self.code));
        let mut template = Classification::new(id, &self.code, &self.description)
            .with_code_type(&self.code_type);
        if let Some(category) = &self.category {
            template = template.with_category(category);
        }
        SimpleRule::new(&self.keywords, template, self.confidence)
    }
}

/// Convert rules, dropping (with a warning) any rule without a usable keyword.
pub fn parse_rules(rules: &[FileRuleConfig]) -> (Vec<SimpleRule>, Vec<ConfigIssue>) {
    let mut parsed = Vec::with_capacity(rules.len());
    let mut issues = Vec::new();
    for (index, config) in rules.iter().enumerate() {
        let rule = config.to_rule();
        if rule.keywords.is_empty() {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::InvalidRule {
                    index,
                },
                format!("rules[{index}] ({}): no non-blank keywords, ignored", config.code),
            ));
            continue;
        }
        parsed.push(rule);
    }
    (parsed, issues)
}
