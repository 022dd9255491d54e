//! Test data generators for creating synthetic global grids.
//!
//! Grids come out in the producer's raw layout: rows run north to south,
//! columns run 0..360° east. Values are `Option<f64>` so gaps can be
//! expressed the same way a JSON `null` arrives.

/// Creates a 2D grid with predictable, unique values.
///
/// Each cell value is calculated as: `row * 10000 + col`
///
/// # Example
///
/// ```
/// use test_utils::create_indexed_rows;
///
/// let grid = create_indexed_rows(3, 4);
/// assert_eq!(grid.len(), 3);
/// assert_eq!(grid[0][3], Some(3.0));
/// assert_eq!(grid[2][1], Some(20001.0));
/// ```
pub fn create_indexed_rows(rows: usize, cols: usize) -> Vec<Vec<Option<f64>>> {
    (0..rows)
        .map(|row| (0..cols).map(|col| Some(indexed_value(row, col))).collect())
        .collect()
}

/// Same values as [`create_indexed_rows`], flattened row-major.
pub fn create_indexed_flat(rows: usize, cols: usize) -> Vec<Option<f64>> {
    create_indexed_rows(rows, cols).into_iter().flatten().collect()
}

/// The value [`create_indexed_rows`] places at `(row, col)`.
pub fn indexed_value(row: usize, col: usize) -> f64 {
    (row * 10000 + col) as f64
}

/// Creates a grid filled with a constant value.
pub fn create_constant_rows(rows: usize, cols: usize, value: f64) -> Vec<Vec<Option<f64>>> {
    vec![vec![Some(value); cols]; rows]
}

/// Creates a 2m-temperature-like field in Kelvin.
///
/// Warm at the equator, cold at the poles, with a small zonal wave so
/// that columns are distinguishable.
pub fn create_temperature_rows(rows: usize, cols: usize) -> Vec<Vec<Option<f64>>> {
    (0..rows)
        .map(|row| {
            let lat = 90.0 - row as f64 * 180.0 / rows.max(1) as f64;
            (0..cols)
                .map(|col| {
                    let lon = col as f64 * 360.0 / cols.max(1) as f64;
                    Some(300.0 - 0.5 * lat.abs() + 2.0 * lon.to_radians().sin())
                })
                .collect()
        })
        .collect()
}

/// Creates an indexed grid with `None` at the given `(row, col)` positions.
pub fn create_rows_with_gaps(
    rows: usize,
    cols: usize,
    gaps: &[(usize, usize)],
) -> Vec<Vec<Option<f64>>> {
    let mut data = create_indexed_rows(rows, cols);
    for &(row, col) in gaps {
        if row < rows && col < cols {
            data[row][col] = None;
        }
    }
    data
}
