//! Summary statistics over raster values.

use crate::types::RasterStatistics;

/// Compute statistics over `values`, skipping missing (NaN) cells.
///
/// Returns `None` when no value survives the filter.
pub fn compute_statistics(values: &[f64]) -> Option<RasterStatistics> {
    let mut valid: Vec<f64> = values
        .iter()
        .copied()
        .filter(|v| !v.is_nan())
        .collect();

    if valid.is_empty() {
        return None;
    }

    valid.sort_by(|a, b| a.total_cmp(b));

    let count = valid.len();
    let min = valid[0];
    let max = valid[count - 1];
    let mean = valid.iter().sum::<f64>() / count as f64;

    Some(RasterStatistics {
        count,
        min,
        max,
        mean,
        median: valid[count / 2],
        range: max - min,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_count_takes_index_half() {
        // sorted: 1 2 3 4 -> index 2 -> 3
        let stats = compute_statistics(&[4.0, 1.0, 3.0, 2.0]).unwrap();
        assert_eq!(stats.median, 3.0);
        assert_eq!(stats.count, 4);
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 4.0);
        assert_eq!(stats.range, 3.0);
        assert!((stats.mean - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_nan_is_skipped() {
        let stats = compute_statistics(&[f64::NAN, 5.0, f64::NAN, -1.0, 2.0]).unwrap();
        assert_eq!(stats.count, 3);
        assert_eq!(stats.min, -1.0);
        assert_eq!(stats.median, 2.0);
    }

    #[test]
    fn test_all_missing() {
        assert!(compute_statistics(&[f64::NAN, f64::NAN]).is_none());
        assert!(compute_statistics(&[]).is_none());
    }
}
