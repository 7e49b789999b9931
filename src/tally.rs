use std::collections::HashMap;

use crate::output::{LabelSet, PercentageReport};

/// Per-run language counts.
///
/// Every recorded file bumps exactly one label and the total in the same
/// call, so the counts always sum to `total`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    counts: HashMap<String, u64>,
    total: u64,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one file for `label`. Empty labels are dropped and leave the
    /// tally untouched.
    pub fn record(&mut self, label: &str) -> bool {
        if label.is_empty() {
            return false;
        }
        *self.counts.entry(label.to_string()).or_insert(0) += 1;
        self.total += 1;
        true
    }

    pub fn count(&self, label: &str) -> u64 {
        self.counts.get(label).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Share of each label in the total, skipping unwanted labels. Unwanted
    /// labels still weigh on the denominator.
    pub fn report(&self, unwanted: &LabelSet) -> PercentageReport {
        let mut report = PercentageReport::new();
        if self.total == 0 {
            return report;
        }

        let total = self.total as f64;
        for (label, count) in &self.counts {
            if unwanted.contains(label) {
                continue;
            }
            report.insert(label.clone(), *count as f64 / total);
        }
        report
    }
}
