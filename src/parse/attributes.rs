//! Attribute map passed with each start-element event

/// Attributes of one element, in document order.
///
/// OSIS elements carry a handful of attributes at most, so lookups are a
/// linear scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, String)>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder used by tests and hand-driven event streams
    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push((name.into(), value.into()));
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Value of an attribute, treating an empty value as absent
    pub fn non_empty(&self, name: &str) -> Option<&str> {
        self.get(name).filter(|v| !v.trim().is_empty())
    }

    pub fn is_present(&self, name: &str) -> bool {
        self.non_empty(name).is_some()
    }

    /// Case-insensitive substring test, e.g. for `subType` values that vary in case
    pub fn contains_ignore_case(&self, name: &str, needle: &str) -> bool {
        self.get(name)
            .map(|v| v.to_lowercase().contains(&needle.to_lowercase()))
            .unwrap_or(false)
    }

    pub fn is_true(&self, name: &str) -> bool {
        self.get(name).map(|v| v.eq_ignore_ascii_case("true")).unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
