use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Conventional key for free-text search across every list endpoint.
pub const SEARCH_KEY: &str = "search";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Text(String),
    Number(i64),
    Flag(bool),
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterValue::Text(value) => f.write_str(value),
            FilterValue::Number(value) => write!(f, "{}", value),
            FilterValue::Flag(value) => write!(f, "{}", value),
        }
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::Text(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        FilterValue::Text(value)
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        FilterValue::Number(value)
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        FilterValue::Flag(value)
    }
}

/// Named query parameters scoping a list request. The page number is kept
/// in the pagination cursor, never here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterState(BTreeMap<String, FilterValue>);

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(text: &str) -> Self {
        let mut filters = Self::new();
        filters.set(SEARCH_KEY, text);
        filters
    }

    pub fn set(&mut self, key: &str, value: impl Into<FilterValue>) -> &mut Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&FilterValue> {
        self.0.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<FilterValue> {
        self.0.remove(key)
    }

    /// Overlays `partial` onto the existing state, keeping untouched keys.
    pub fn merge(&mut self, partial: FilterState) {
        self.0.extend(partial.0);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FilterValue)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Flat `key=value` pairs for a query string.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        self.0
            .iter()
            .map(|(key, value)| (key.clone(), value.to_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_keeps_untouched_keys() {
        let mut filters = FilterState::with_search("clio");
        filters.set("brand_id", 7);

        let mut partial = FilterState::new();
        partial.set("brand_id", 9);
        filters.merge(partial);

        assert_eq!(filters.get("brand_id"), Some(&FilterValue::Number(9)));
        assert_eq!(
            filters.get(SEARCH_KEY),
            Some(&FilterValue::Text("clio".to_string()))
        );
    }

    #[test]
    fn query_pairs_are_flat_strings() {
        let mut filters = FilterState::new();
        filters.set("archived", false);
        filters.set("brand_id", 7);

        let pairs = filters.to_query_pairs();
        assert!(pairs.contains(&("archived".to_string(), "false".to_string())));
        assert!(pairs.contains(&("brand_id".to_string(), "7".to_string())));
    }
}
