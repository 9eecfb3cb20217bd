//! Data models for the performance reporter.
//!
//! This module contains the typed input record and the result rows
//! produced by reports.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row of employee input data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// Employee name (carried through, not interpreted).
    pub name: String,
    /// Job position; the grouping key for reports.
    pub position: String,
    /// Number of completed tasks.
    pub completed_tasks: i64,
    /// Performance score.
    pub performance: f64,
    /// Free-form skills description.
    pub skills: String,
    /// Team name.
    pub team: String,
    /// Years of experience.
    pub experience_years: i64,
}

impl EmployeeRecord {
    /// Creates a record with only the fields reports look at.
    #[cfg(test)]
    pub fn sample(position: &str, performance: f64) -> Self {
        Self {
            name: String::new(),
            position: position.to_string(),
            completed_tasks: 0,
            performance,
            skills: String::new(),
            team: String::new(),
            experience_years: 0,
        }
    }
}

/// Mean performance for one position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionPerformance {
    pub position: String,
    /// Mean performance rounded to 2 decimal places.
    pub performance: f64,
}

/// A single result row of any report.
///
/// Each report contributes its own variant; renderers only use
/// [`ReportRow::columns`] and [`ReportRow::values`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReportRow {
    Performance(PositionPerformance),
}

impl ReportRow {
    /// Column headers for this row type.
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            ReportRow::Performance(_) => &["position", "performance"],
        }
    }

    /// Display values, in the same order as [`ReportRow::columns`].
    pub fn values(&self) -> Vec<String> {
        match self {
            ReportRow::Performance(row) => {
                vec![row.position.clone(), format!("{:.2}", row.performance)]
            }
        }
    }
}

impl From<PositionPerformance> for ReportRow {
    fn from(row: PositionPerformance) -> Self {
        ReportRow::Performance(row)
    }
}

/// A generated report together with its provenance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportDocument {
    /// Name of the report that produced the rows.
    pub report: String,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// Input paths as given on the command line.
    pub sources: Vec<String>,
    /// Number of records the report was computed from.
    pub record_count: usize,
    /// Result rows, in report order.
    pub rows: Vec<ReportRow>,
}

impl ReportDocument {
    pub fn new(
        report: &str,
        sources: Vec<String>,
        record_count: usize,
        rows: Vec<ReportRow>,
    ) -> Self {
        Self {
            report: report.to_string(),
            generated_at: Utc::now(),
            sources,
            record_count,
            rows,
        }
    }

    /// Column headers of the rows, if there are any rows.
    pub fn columns(&self) -> &'static [&'static str] {
        self.rows.first().map(ReportRow::columns).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_performance_row_values() {
        let row = ReportRow::from(PositionPerformance {
            position: "Developer".to_string(),
            performance: 4.5,
        });
        assert_eq!(row.columns(), &["position", "performance"]);
        assert_eq!(row.values(), vec!["Developer", "4.50"]);
    }

    #[test]
    fn test_report_row_serializes_flat() {
        let row = ReportRow::from(PositionPerformance {
            position: "QA".to_string(),
            performance: 4.2,
        });
        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(json, r#"{"position":"QA","performance":4.2}"#);
    }
}
