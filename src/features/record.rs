//! The ordered feature record.
//!
//! Downstream classifiers are sensitive to column order: the record is a
//! vector of `(name, value)` pairs, never a hash map, and serializes in
//! insertion order.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// A single feature value.
///
/// Binary indicator features use `Int(0)`/`Int(1)`; the URL identifier is the
/// only `Text` entry.
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureValue {
    /// Integer count, indicator, or day-duration sentinel.
    Int(i64),
    /// Ratio or average.
    Float(f64),
    /// The URL identifier (excluded from numeric matrices downstream).
    Text(String),
}

impl Serialize for FeatureValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FeatureValue::Int(v) => serializer.serialize_i64(*v),
            FeatureValue::Float(v) => serializer.serialize_f64(*v),
            FeatureValue::Text(v) => serializer.serialize_str(v),
        }
    }
}

impl FeatureValue {
    /// The value rendered for CSV output.
    pub fn to_csv_field(&self) -> String {
        match self {
            FeatureValue::Int(v) => v.to_string(),
            FeatureValue::Float(v) => v.to_string(),
            FeatureValue::Text(v) => v.clone(),
        }
    }
}

/// One ordered, named feature vector for one URL.
///
/// The set and order of names is fixed and identical for every URL processed
/// in a run; see [`crate::FEATURE_NAMES`] for the canonical schema.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRecord {
    entries: Vec<(&'static str, FeatureValue)>,
}

impl FeatureRecord {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, name: &'static str, value: FeatureValue) {
        self.entries.push((name, value));
    }

    /// Feature names in schema order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }

    /// Iterates `(name, value)` pairs in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &FeatureValue)> + '_ {
        self.entries.iter().map(|(name, value)| (*name, value))
    }

    /// Looks a feature up by name.
    pub fn get(&self, name: &str) -> Option<&FeatureValue> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v)
    }

    /// Looks an integer feature up by name.
    pub fn get_int(&self, name: &str) -> Option<i64> {
        match self.get(name)? {
            FeatureValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Looks a float feature up by name.
    pub fn get_float(&self, name: &str) -> Option<f64> {
        match self.get(name)? {
            FeatureValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// The URL identifier field.
    pub fn url(&self) -> &str {
        match self.entries.first() {
            Some((_, FeatureValue::Text(url))) => url,
            _ => "",
        }
    }

    /// The numeric row the downstream classifier consumes: every feature in
    /// schema order with the identifier field excluded.
    pub fn numeric_row(&self) -> Vec<f64> {
        self.entries
            .iter()
            .filter_map(|(_, value)| match value {
                FeatureValue::Int(v) => Some(*v as f64),
                FeatureValue::Float(v) => Some(*v),
                FeatureValue::Text(_) => None,
            })
            .collect()
    }

    /// All values rendered for one CSV row, identifier included.
    pub fn csv_row(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|(_, value)| value.to_csv_field())
            .collect()
    }

    /// Number of entries, identifier included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the record is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for FeatureRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FeatureRecord {
        let mut record = FeatureRecord::with_capacity(3);
        record.push("url", FeatureValue::Text("http://example.com".into()));
        record.push("length_of_url", FeatureValue::Int(18));
        record.push("digit_ratio_url", FeatureValue::Float(0.0));
        record
    }

    #[test]
    fn test_record_preserves_insertion_order() {
        let record = sample();
        let names: Vec<_> = record.names().collect();
        assert_eq!(names, vec!["url", "length_of_url", "digit_ratio_url"]);
    }

    #[test]
    fn test_numeric_row_excludes_identifier() {
        let record = sample();
        assert_eq!(record.numeric_row(), vec![18.0, 0.0]);
    }

    #[test]
    fn test_record_serializes_as_ordered_map() {
        let record = sample();
        let json = serde_json::to_string(&record).expect("serialize");
        assert_eq!(
            json,
            r#"{"url":"http://example.com","length_of_url":18,"digit_ratio_url":0.0}"#
        );
    }

    #[test]
    fn test_get_by_name() {
        let record = sample();
        assert_eq!(record.get_int("length_of_url"), Some(18));
        assert_eq!(record.get_float("digit_ratio_url"), Some(0.0));
        assert_eq!(record.get("missing"), None);
        assert_eq!(record.url(), "http://example.com");
    }
}
