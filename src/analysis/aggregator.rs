//! Record grouping and statistics.
//!
//! Helpers shared by report aggregators.

use crate::models::EmployeeRecord;
use std::collections::HashMap;

/// Group values by a key, keeping groups in first-occurrence order and
/// values in encounter order within each group.
pub fn group_by<K, V>(
    records: &[EmployeeRecord],
    key: impl Fn(&EmployeeRecord) -> K,
    value: impl Fn(&EmployeeRecord) -> V,
) -> Vec<(K, Vec<V>)>
where
    K: Clone + Eq + std::hash::Hash,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, Vec<V>)> = Vec::new();

    for record in records {
        let k = key(record);
        let slot = *index.entry(k.clone()).or_insert_with(|| {
            groups.push((k, Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push(value(record));
    }

    groups
}

/// Performance scores grouped by position.
pub fn group_by_position(records: &[EmployeeRecord]) -> Vec<(String, Vec<f64>)> {
    group_by(records, |r| r.position.clone(), |r| r.performance)
}

/// Arithmetic mean; `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Round to `places` decimal places, halves away from zero.
///
/// Values too large to scale have no fractional digits and are returned as-is.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    let scaled = value * factor;
    if !scaled.is_finite() || value.fract() == 0.0 {
        return value;
    }
    scaled.round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_by_position_keeps_first_occurrence_order() {
        let records = vec![
            EmployeeRecord::sample("QA", 4.3),
            EmployeeRecord::sample("Developer", 4.5),
            EmployeeRecord::sample("QA", 4.1),
            EmployeeRecord::sample("Manager", 3.9),
            EmployeeRecord::sample("Developer", 4.7),
        ];

        let groups = group_by_position(&records);

        assert_eq!(
            groups,
            vec![
                ("QA".to_string(), vec![4.3, 4.1]),
                ("Developer".to_string(), vec![4.5, 4.7]),
                ("Manager".to_string(), vec![3.9]),
            ]
        );
    }

    #[test]
    fn test_group_by_empty() {
        assert!(group_by_position(&[]).is_empty());
    }

    #[test]
    fn test_group_by_custom_key() {
        let mut a = EmployeeRecord::sample("Developer", 4.0);
        a.team = "API".to_string();
        a.completed_tasks = 10;
        let mut b = EmployeeRecord::sample("QA", 4.0);
        b.team = "API".to_string();
        b.completed_tasks = 5;

        let groups = group_by(&[a, b], |r| r.team.clone(), |r| r.completed_tasks);

        assert_eq!(groups, vec![("API".to_string(), vec![10, 5])]);
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[]), None);
        assert_eq!(mean(&[4.0]), Some(4.0));
        assert_eq!(mean(&[3.0, 5.0]), Some(4.0));
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(4.4995, 2), 4.5);
        assert_eq!(round_to(4.199999999999999, 2), 4.2);
        assert_eq!(round_to(4.125, 2), 4.13);
        assert_eq!(round_to(-1.005, 0), -1.0);
        assert_eq!(round_to(2.5, 0), 3.0);
    }

    #[test]
    fn test_round_to_huge_values() {
        assert_eq!(round_to(1e308, 2), 1e308);
        assert_eq!(round_to(1e200, 2), 1e200);
        assert_eq!(round_to(-1e308, 2), -1e308);
        assert_eq!(round_to(f64::MAX, 2), f64::MAX);
        assert!(round_to(f64::INFINITY, 2).is_infinite());
    }
}
