//! Report registry, dispatch and rendering.
//!
//! A report is a named aggregator from the merged record set to an
//! ordered list of result rows. The registry is built once and handed
//! to whoever dispatches reports.

pub mod generator;
pub mod performance;

pub use generator::*;

use crate::error::ReportError;
use crate::models::{EmployeeRecord, ReportRow};

/// Aggregator signature shared by all reports.
pub type Aggregator = fn(&[EmployeeRecord]) -> Vec<ReportRow>;

/// Built-in reports, in registration order. New reports are added here.
const BUILTIN_REPORTS: &[(&str, Aggregator)] =
    &[("performance", performance::performance_report)];

/// Immutable name → aggregator table.
#[derive(Debug, Clone)]
pub struct ReportRegistry {
    entries: Vec<(&'static str, Aggregator)>,
}

impl ReportRegistry {
    /// Registry holding the built-in reports.
    pub fn builtin() -> Self {
        Self::from_entries(BUILTIN_REPORTS)
    }

    /// Registry over an explicit table. Later duplicates of a name are ignored.
    pub fn from_entries(entries: &[(&'static str, Aggregator)]) -> Self {
        let mut unique: Vec<(&'static str, Aggregator)> = Vec::with_capacity(entries.len());
        for &(name, aggregator) in entries {
            if !unique.iter().any(|(existing, _)| *existing == name) {
                unique.push((name, aggregator));
            }
        }
        Self { entries: unique }
    }

    /// Names of all registered reports, in registration order.
    pub fn available_reports(&self) -> Vec<String> {
        self.entries.iter().map(|(name, _)| name.to_string()).collect()
    }

    /// Look up an aggregator by report name.
    pub fn get(&self, name: &str) -> Option<Aggregator> {
        self.entries
            .iter()
            .find(|(registered, _)| *registered == name)
            .map(|&(_, aggregator)| aggregator)
    }

    /// Run the named report over `records`.
    pub fn generate(
        &self,
        name: &str,
        records: &[EmployeeRecord],
    ) -> Result<Vec<ReportRow>, ReportError> {
        let aggregator = self.get(name).ok_or_else(|| ReportError::UnknownReport {
            name: name.to_string(),
            available: self.available_reports(),
        })?;

        Ok(aggregator(records))
    }
}

impl Default for ReportRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PositionPerformance;

    fn records() -> Vec<EmployeeRecord> {
        vec![
            EmployeeRecord::sample("Developer", 4.5),
            EmployeeRecord::sample("Developer", 4.7),
        ]
    }

    fn row_count_report(records: &[EmployeeRecord]) -> Vec<ReportRow> {
        vec![ReportRow::Performance(PositionPerformance {
            position: "count".to_string(),
            performance: records.len() as f64,
        })]
    }

    #[test]
    fn test_available_reports_contains_performance() {
        let names = ReportRegistry::builtin().available_reports();
        assert!(!names.is_empty());
        assert_eq!(names[0], "performance");
    }

    #[test]
    fn test_generate_performance_report() {
        let rows = ReportRegistry::builtin()
            .generate("performance", &records())
            .unwrap();

        assert_eq!(
            rows,
            vec![ReportRow::Performance(PositionPerformance {
                position: "Developer".to_string(),
                performance: 4.6,
            })]
        );
    }

    #[test]
    fn test_generate_empty_data() {
        let rows = ReportRegistry::builtin().generate("performance", &[]).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_generate_unknown_report() {
        let err = ReportRegistry::builtin()
            .generate("nonexistent", &records())
            .unwrap_err();

        let ReportError::UnknownReport { name, available } = &err;
        assert_eq!(name, "nonexistent");
        assert!(available.contains(&"performance".to_string()));
        assert!(err.to_string().contains("'nonexistent' not found"));
        assert!(err.to_string().contains("Available reports"));
    }

    #[test]
    fn test_report_names_are_case_sensitive() {
        assert!(ReportRegistry::builtin().get("Performance").is_none());
    }

    #[test]
    fn test_extra_entries_dispatch_without_changes() {
        let registry = ReportRegistry::from_entries(&[
            ("performance", performance::performance_report as Aggregator),
            ("count", row_count_report as Aggregator),
            ("count", performance::performance_report as Aggregator),
        ]);

        assert_eq!(registry.available_reports(), vec!["performance", "count"]);

        let rows = registry.generate("count", &records()).unwrap();
        assert_eq!(rows[0].values(), vec!["count", "2.00"]);
    }
}
