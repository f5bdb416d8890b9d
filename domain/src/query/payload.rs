//! Query payload variants and query extraction

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Field names checked, in order, on a [`QueryPayload::Fields`] payload.
pub const QUERY_FIELDS: [&str; 3] = ["query", "name", "business_name"];

/// Structured business data supplied by a caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessRecord {
    pub company_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
}

impl BusinessRecord {
    pub fn new(company_name: impl Into<String>) -> Self {
        Self {
            company_name: company_name.into(),
            ..Default::default()
        }
    }
}

/// The caller's query context.
///
/// # Example
///
/// ```
/// use degrade_domain::QueryPayload;
///
/// let payload = QueryPayload::from_fields([("name", "Acme Bakery")]);
/// assert_eq!(payload.query(), "Acme Bakery");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum QueryPayload {
    /// A raw query string
    Text(String),
    /// Generic string-keyed fields
    Fields(BTreeMap<String, String>),
    /// Structured business data
    Business(BusinessRecord),
}

impl QueryPayload {
    pub fn text(query: impl Into<String>) -> Self {
        QueryPayload::Text(query.into())
    }

    pub fn from_fields<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        QueryPayload::Fields(
            fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Extract the query string used by query-dependent strategies.
    ///
    /// Returns an empty string when the payload carries no usable query.
    pub fn query(&self) -> &str {
        match self {
            QueryPayload::Text(text) => text.trim(),
            QueryPayload::Fields(fields) => QUERY_FIELDS
                .iter()
                .filter_map(|key| fields.get(*key))
                .map(|v| v.trim())
                .find(|v| !v.is_empty())
                .unwrap_or(""),
            QueryPayload::Business(record) => record.company_name.trim(),
        }
    }

    pub fn has_query(&self) -> bool {
        !self.query().is_empty()
    }
}

impl From<&str> for QueryPayload {
    fn from(value: &str) -> Self {
        QueryPayload::Text(value.to_string())
    }
}

impl From<String> for QueryPayload {
    fn from(value: String) -> Self {
        QueryPayload::Text(value)
    }
}

impl From<BusinessRecord> for QueryPayload {
    fn from(value: BusinessRecord) -> Self {
        QueryPayload::Business(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_query_trimmed() {
        assert_eq!(QueryPayload::text("  retail shop ").query(), "retail shop");
    }

    #[test]
    fn test_fields_checked_in_order() {
        let payload = QueryPayload::from_fields([
            ("business_name", "Third"),
            ("name", "Second"),
            ("query", "First"),
        ]);
        assert_eq!(payload.query(), "First");

        let payload = QueryPayload::from_fields([("business_name", "Third"), ("name", "Second")]);
        assert_eq!(payload.query(), "Second");
    }

    #[test]
    fn test_fields_skip_blank_values() {
        let payload = QueryPayload::from_fields([("query", "   "), ("business_name", "Acme")]);
        assert_eq!(payload.query(), "Acme");
    }

    #[test]
    fn test_unrecognized_fields_yield_empty_query() {
        let payload = QueryPayload::from_fields([("city", "Austin")]);
        assert_eq!(payload.query(), "");
        assert!(!payload.has_query());
    }

    #[test]
    fn test_business_record_uses_company_name() {
        let payload = QueryPayload::from(BusinessRecord::new("Green Leaf Consulting"));
        assert_eq!(payload.query(), "Green Leaf Consulting");
    }

    #[test]
    fn test_serde_tagged() {
        let json = serde_json::to_string(&QueryPayload::text("bakery")).unwrap();
        assert_eq!(json, r#"{"kind":"text","value":"bakery"}"#);
    }
}
