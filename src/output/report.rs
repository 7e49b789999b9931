use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

/// Labels left out of a report, compared case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelSet(HashSet<String>);

impl LabelSet {
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            labels
                .into_iter()
                .map(|label| label.as_ref().to_lowercase())
                .collect(),
        )
    }

    pub fn contains(&self, label: &str) -> bool {
        self.0.contains(&label.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Label to fraction of counted files, in `[0, 1]`. Keys iterate (and
/// serialize) in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PercentageReport(BTreeMap<String, f64>);

impl PercentageReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, label: String, fraction: f64) {
        self.0.insert(label, fraction);
    }

    pub fn get(&self, label: &str) -> Option<f64> {
        self.0.get(label).copied()
    }

    pub fn sum(&self) -> f64 {
        self.0.values().sum()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_set_is_case_insensitive() {
        let set = LabelSet::new(["Markdown", "text"]);

        assert_eq!(set.len(), 2);
        assert!(set.contains("markdown"));
        assert!(set.contains("MARKDOWN"));
        assert!(set.contains("Text"));
        assert!(!set.contains("Go"));
        assert!(LabelSet::default().is_empty());
    }

    #[test]
    fn test_report_iterates_in_label_order() {
        let mut report = PercentageReport::new();
        report.insert("Rust".to_string(), 0.25);
        report.insert("Go".to_string(), 0.5);
        report.insert("C".to_string(), 0.25);

        let labels: Vec<&str> = report.0.keys().map(String::as_str).collect();
        assert_eq!(labels, vec!["C", "Go", "Rust"]);
        assert_eq!(report.sum(), 1.0);
    }
}
