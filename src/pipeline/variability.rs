//! Variability scoring and column ordering.
//!
//! Each feature column is scored by the standard deviation of its data cells
//! (population variance, divisor = count). The historical tool labelled this
//! a "coefficient of variation" but never divided by the mean; the ranking
//! downstream consumers rely on comes from the plain standard deviation, so
//! that exact statistic is kept.

use std::cmp::Ordering;

use crate::pipeline::error::PipelineError;
use crate::pipeline::table::{parse_data_cells, Column, ID_COLUMNS};

/// How a column participates in the final ordering.
///
/// Identifier columns always sort before feature columns, ordered among
/// themselves by their original position; feature columns are ordered by
/// score descending.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnRole {
    Identifier(usize),
    Feature(f64),
}

impl ColumnRole {
    /// Total order over roles: identifiers first (position ascending), then
    /// features (score descending). NaN scores cannot occur; scores come
    /// from finite cell values.
    pub fn cmp_rank(&self, other: &ColumnRole) -> Ordering {
        match (self, other) {
            (ColumnRole::Identifier(a), ColumnRole::Identifier(b)) => a.cmp(b),
            (ColumnRole::Identifier(_), ColumnRole::Feature(_)) => Ordering::Less,
            (ColumnRole::Feature(_), ColumnRole::Identifier(_)) => Ordering::Greater,
            (ColumnRole::Feature(a), ColumnRole::Feature(b)) => {
                b.partial_cmp(a).unwrap_or(Ordering::Equal)
            }
        }
    }
}

/// Standard deviation with population variance (divide by count, not
/// count - 1). An empty slice is a hard error rather than a NaN.
pub fn std_deviation(values: &[f64], column: &str) -> Result<f64, PipelineError> {
    if values.is_empty() {
        return Err(PipelineError::EmptyColumn {
            column: column.to_string(),
        });
    }
    let count = values.len() as f64;
    let mean = values.iter().sum::<f64>() / count;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / count;
    Ok(variance.sqrt())
}

/// Assign a [`ColumnRole`] to every column in the filtered sequence.
pub fn score_columns(columns: &[Column]) -> Result<Vec<ColumnRole>, PipelineError> {
    columns
        .iter()
        .enumerate()
        .map(|(index, column)| {
            if index < ID_COLUMNS {
                Ok(ColumnRole::Identifier(index))
            } else {
                let header = column.first().map(String::as_str).unwrap_or("");
                let data = parse_data_cells(column)?;
                Ok(ColumnRole::Feature(std_deviation(&data, header)?))
            }
        })
        .collect()
}

/// Re-order columns by their roles: identifiers first in position order,
/// then features by standard deviation descending.
///
/// The sort is stable, so equal-scoring features keep the relative order
/// they had after filtering.
pub fn sort_columns(columns: Vec<Column>, roles: &[ColumnRole]) -> Vec<Column> {
    let mut pairs: Vec<(ColumnRole, Column)> =
        roles.iter().copied().zip(columns).collect();
    pairs.sort_by(|(a, _), (b, _)| a.cmp_rank(b));
    pairs.into_iter().map(|(_, column)| column).collect()
}

/// Ranked feature list for reporting: each feature column's header name and
/// score, in the same order [`sort_columns`] emits the feature columns.
///
/// Uses the same stable sort over the same [`ColumnRole`] comparator, so the
/// reported order cannot drift from the written column order.
pub fn rank_features(columns: &[Column], roles: &[ColumnRole]) -> Vec<(String, f64)> {
    let mut pairs: Vec<(ColumnRole, &Column)> =
        roles.iter().copied().zip(columns).collect();
    pairs.sort_by(|(a, _), (b, _)| a.cmp_rank(b));
    pairs
        .into_iter()
        .filter_map(|(role, column)| match role {
            ColumnRole::Feature(std_dev) => {
                Some((column.first().cloned().unwrap_or_default(), std_dev))
            }
            ColumnRole::Identifier(_) => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn col(cells: &[&str]) -> Column {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_std_deviation_known_values() {
        // mean 2, variance 2/3
        let sd = std_deviation(&[1.0, 2.0, 3.0], "b").unwrap();
        assert!((sd - 0.816496580927726).abs() < 1e-12);

        // mean 5, variance (0+16+16)/3 = 32/3
        let sd = std_deviation(&[5.0, 1.0, 9.0], "c").unwrap();
        assert!((sd - (32.0f64 / 3.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_std_deviation_constant_column_is_zero() {
        let sd = std_deviation(&[3.0, 3.0, 3.0], "k").unwrap();
        assert_eq!(sd, 0.0);
    }

    #[test]
    fn test_std_deviation_empty_is_error() {
        let err = std_deviation(&[], "k").unwrap_err();
        assert!(matches!(err, PipelineError::EmptyColumn { .. }));
    }

    #[test]
    fn test_role_ordering() {
        let id0 = ColumnRole::Identifier(0);
        let id1 = ColumnRole::Identifier(1);
        let high = ColumnRole::Feature(4.0);
        let low = ColumnRole::Feature(0.5);

        assert_eq!(id0.cmp_rank(&id1), Ordering::Less);
        assert_eq!(id1.cmp_rank(&high), Ordering::Less);
        assert_eq!(high.cmp_rank(&low), Ordering::Less);
        assert_eq!(low.cmp_rank(&high), Ordering::Greater);
        assert_eq!(high.cmp_rank(&high), Ordering::Equal);
    }

    #[test]
    fn test_score_columns_assigns_roles() {
        let columns = vec![
            col(&["id", "1", "2", "3"]),
            col(&["label", "x", "y", "z"]),
            col(&["b", "1", "2", "3"]),
        ];
        let roles = score_columns(&columns).unwrap();
        assert_eq!(roles[0], ColumnRole::Identifier(0));
        assert_eq!(roles[1], ColumnRole::Identifier(1));
        match roles[2] {
            ColumnRole::Feature(sd) => assert!((sd - 0.816496580927726).abs() < 1e-12),
            other => panic!("expected Feature, got {:?}", other),
        }
    }

    #[test]
    fn test_sort_columns_descending_by_score() {
        let columns = vec![
            col(&["id", "1", "2", "3"]),
            col(&["label", "x", "y", "z"]),
            col(&["b", "1", "2", "3"]),
            col(&["c", "5", "1", "9"]),
        ];
        let roles = score_columns(&columns).unwrap();
        let sorted = sort_columns(columns, &roles);
        let headers: Vec<&str> = sorted.iter().map(|c| c[0].as_str()).collect();
        assert_eq!(headers, vec!["id", "label", "c", "b"]);
    }

    #[test]
    fn test_rank_features_matches_sorted_column_order() {
        let columns = vec![
            col(&["id", "1", "2", "3", "4"]),
            col(&["label", "w", "x", "y", "z"]),
            col(&["low", "1", "1", "1", "2"]),
            col(&["high", "10", "30", "20", "40"]),
            col(&["mid", "1", "2", "3", "4"]),
        ];
        let roles = score_columns(&columns).unwrap();

        let ranking = rank_features(&columns, &roles);
        let sorted = sort_columns(columns, &roles);

        let ranked_names: Vec<&str> = ranking.iter().map(|(name, _)| name.as_str()).collect();
        let sorted_names: Vec<&str> = sorted
            .iter()
            .skip(ID_COLUMNS)
            .map(|c| c[0].as_str())
            .collect();
        assert_eq!(ranked_names, sorted_names);

        for window in ranking.windows(2) {
            assert!(window[0].1 >= window[1].1, "Scores must be non-increasing");
        }
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        // Both features have identical spread; filtered order wins.
        let columns = vec![
            col(&["id", "1", "2"]),
            col(&["label", "x", "y"]),
            col(&["first", "1", "3"]),
            col(&["second", "6", "8"]),
        ];
        let roles = score_columns(&columns).unwrap();
        let sorted = sort_columns(columns, &roles);
        let headers: Vec<&str> = sorted.iter().map(|c| c[0].as_str()).collect();
        assert_eq!(headers, vec!["id", "label", "first", "second"]);
    }
}
