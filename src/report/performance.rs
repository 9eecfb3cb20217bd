//! Mean performance by position.

use crate::analysis::{group_by_position, mean, round_to};
use crate::models::{EmployeeRecord, PositionPerformance, ReportRow};

/// Decimal places kept in the mean.
const PRECISION: i32 = 2;

/// Average performance per position, best first.
///
/// Positions with equal means keep the order in which they first appear
/// in `records`.
pub fn performance_report(records: &[EmployeeRecord]) -> Vec<ReportRow> {
    position_performance(records)
        .into_iter()
        .map(ReportRow::from)
        .collect()
}

/// Typed form of [`performance_report`].
pub fn position_performance(records: &[EmployeeRecord]) -> Vec<PositionPerformance> {
    let mut rows: Vec<PositionPerformance> = group_by_position(records)
        .into_iter()
        .filter_map(|(position, scores)| {
            mean(&scores).map(|avg| PositionPerformance {
                position,
                performance: round_to(avg, PRECISION),
            })
        })
        .collect();

    // sort_by is stable; ties keep group order
    rows.sort_by(|a, b| b.performance.total_cmp(&a.performance));

    rows
}
