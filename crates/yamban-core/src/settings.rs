use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Board-level configuration: column definitions, title, theme, feature
/// flags. Kept as an open mapping so the front-end can store keys the
/// backend does not interpret.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Settings(BTreeMap<String, Value>);

impl Settings {
    /// Empty settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shallow-merge `partial` into `self`; keys in `partial` win,
    /// everything else is kept as-is.
    pub fn merge(&mut self, partial: Self) {
        self.0.extend(partial.0);
    }

    /// Look up a single key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Set a single key.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.0.insert(key.into(), value);
    }

    /// Number of keys present.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no keys are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, Value)> for Settings {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn settings(pairs: &[(&str, Value)]) -> Settings {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), v.clone()))
            .collect()
    }

    #[test]
    fn merge_keeps_unrelated_keys() {
        let mut base = settings(&[("theme", json!("light"))]);
        base.merge(settings(&[("auto_save", json!(true))]));

        assert_eq!(base.get("theme"), Some(&json!("light")));
        assert_eq!(base.get("auto_save"), Some(&json!(true)));
        assert_eq!(base.len(), 2);
    }

    #[test]
    fn merge_overwrites_existing_keys() {
        let mut base = settings(&[("theme", json!("light"))]);
        base.merge(settings(&[("theme", json!("dark"))]));

        assert_eq!(base.get("theme"), Some(&json!("dark")));
        assert_eq!(base.len(), 1);
    }

    #[test]
    fn merge_with_empty_is_identity() {
        let mut base = settings(&[("title", json!("Backlog"))]);
        base.merge(Settings::new());
        assert_eq!(base.get("title"), Some(&json!("Backlog")));
    }
}
