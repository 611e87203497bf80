// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Square boolean incidence matrices.

use crate::difference_set::DifferenceSet;
use crate::errors::{DesignError, DesignResult};
use tracing::{debug, instrument};

/// A square boolean matrix stored row-major in one contiguous buffer.
///
/// Row `i` is a line of the design, column `j` a point; `get(i, j)` is true when
/// the point lies on the line.
///
/// # Example
///
/// ```
/// use pds_design::IncidenceMatrix;
///
/// let matrix = IncidenceMatrix::develop(&[0, 1, 3], 7).unwrap();
/// assert_eq!(matrix.size(), 7);
/// assert_eq!(matrix.row_support(2), vec![2, 3, 5]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncidenceMatrix {
    size: usize,
    cells: Vec<bool>,
}

impl IncidenceMatrix {
    /// Creates a matrix from nested rows, validating that it is square.
    ///
    /// # Errors
    ///
    /// Returns an error if any row length differs from the number of rows.
    pub fn new(rows: Vec<Vec<bool>>) -> DesignResult<Self> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);

        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(DesignError::dimension_mismatch(
                    size,
                    row.len(),
                    format!("columns in row {}", i),
                ));
            }
            cells.extend(row);
        }

        Ok(Self { size, cells })
    }

    /// Creates an all-false matrix of the given dimension.
    pub fn zeros(size: usize) -> Self {
        Self {
            size,
            cells: vec![false; size * size],
        }
    }

    /// Develops a base vector cyclically: row `i` is true at `(d + i) mod size` for every `d`.
    ///
    /// Entries outside `[0, size)`, negative ones included, wrap to their Euclidean residue.
    ///
    /// # Errors
    ///
    /// Returns an error if `size` is zero.
    pub fn develop(base: &[i64], size: usize) -> DesignResult<Self> {
        if size == 0 {
            return Err(DesignError::Matrix {
                message: "cannot develop a base vector modulo 0".to_string(),
            });
        }

        let modulus = size as i64;
        let residues: Vec<usize> = base
            .iter()
            .map(|&d| d.rem_euclid(modulus) as usize)
            .collect();

        let mut matrix = Self::zeros(size);
        for (i, row) in matrix.cells.chunks_exact_mut(size).enumerate() {
            for &r in &residues {
                row[(r + i) % size] = true;
            }
        }

        Ok(matrix)
    }

    /// Returns the dimension `L` of the `L × L` matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Gets a single entry.
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    pub fn get(&self, row: usize, col: usize) -> bool {
        assert!(col < self.size, "column {} out of bounds", col);
        self.cells[row * self.size + col]
    }

    /// Gets a full row.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    pub fn row(&self, row: usize) -> &[bool] {
        let start = row * self.size;
        &self.cells[start..start + self.size]
    }

    /// Iterates over the rows in order.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        // chunks_exact panics on a zero chunk size
        self.cells.chunks_exact(self.size.max(1))
    }

    /// Columns at which `row` is true, ascending.
    pub fn row_support(&self, row: usize) -> Vec<usize> {
        self.row(row)
            .iter()
            .enumerate()
            .filter_map(|(j, &cell)| cell.then_some(j))
            .collect()
    }

    /// Rows at which `col` is true, ascending.
    pub fn column_support(&self, col: usize) -> Vec<usize> {
        (0..self.size).filter(|&i| self.get(i, col)).collect()
    }

    /// Number of true entries in `row`.
    pub fn row_weight(&self, row: usize) -> usize {
        self.row(row).iter().filter(|&&cell| cell).count()
    }

    /// Number of true entries in `col`.
    pub fn column_weight(&self, col: usize) -> usize {
        (0..self.size).filter(|&i| self.get(i, col)).count()
    }
}

impl From<IncidenceMatrix> for Vec<Vec<bool>> {
    fn from(matrix: IncidenceMatrix) -> Self {
        matrix.rows().map(<[bool]>::to_vec).collect()
    }
}

/// Builds the incidence matrix of the projective plane of order `order`.
///
/// The difference vector is looked up in the catalog and developed modulo
/// `order * (order + 1) + 1`. Nothing is allocated when the lookup fails.
#[instrument(skip_all, fields(order = order))]
pub fn build_incidence_matrix(order: i64) -> DesignResult<IncidenceMatrix> {
    let set = DifferenceSet::for_order(order)?;
    debug!(
        size = set.modulus(),
        elements = ?set.elements(),
        "Developing difference set"
    );
    IncidenceMatrix::develop(set.elements(), set.modulus())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::difference_set::supported_orders;
    use proptest::prelude::*;

    #[test]
    fn test_dimensions_for_supported_orders() {
        for order in supported_orders() {
            let n = order as usize;
            let matrix = build_incidence_matrix(order as i64).unwrap();
            assert_eq!(matrix.size(), n * (n + 1) + 1, "order {}", order);
            assert_eq!(matrix.rows().count(), matrix.size());
            assert!(matrix.rows().all(|row| row.len() == matrix.size()));
        }
    }

    #[test]
    fn test_row_weight_is_order_plus_one() {
        for order in supported_orders() {
            let matrix = build_incidence_matrix(order as i64).unwrap();
            for i in 0..matrix.size() {
                assert_eq!(matrix.row_weight(i), order as usize + 1);
            }
        }
    }

    #[test]
    fn test_order_3_row_0() {
        let matrix = build_incidence_matrix(3).unwrap();
        assert_eq!(matrix.size(), 13);
        assert_eq!(matrix.row_support(0), vec![0, 1, 3, 9]);
        for j in [2, 4, 5, 6, 7, 8, 10, 11, 12] {
            assert!(!matrix.get(0, j), "column {} should be false", j);
        }
    }

    #[test]
    fn test_order_5_row_2() {
        let matrix = build_incidence_matrix(5).unwrap();
        assert_eq!(matrix.size(), 31);
        assert_eq!(matrix.row_support(2), vec![2, 3, 5, 10, 14, 20]);
    }

    #[test]
    fn test_last_row_wraps() {
        // row 12 of order 3: {12, 13, 15, 21} mod 13
        let matrix = build_incidence_matrix(3).unwrap();
        assert_eq!(matrix.row_support(12), vec![0, 2, 8, 12]);
    }

    #[test]
    fn test_unsupported_order_allocates_nothing() {
        for order in [11, 4, -1, 0] {
            let result = build_incidence_matrix(order);
            assert!(
                matches!(result, Err(DesignError::UnsupportedOrder { .. })),
                "order {} should be rejected",
                order
            );
        }
    }

    #[test]
    fn test_develop_wraps_out_of_range_entries() {
        let wrapped = IncidenceMatrix::develop(&[-13, 14, 16, 22], 13).unwrap();
        let canonical = IncidenceMatrix::develop(&[0, 1, 3, 9], 13).unwrap();
        assert_eq!(wrapped, canonical);
    }

    #[test]
    fn test_develop_rejects_zero_size() {
        assert!(matches!(
            IncidenceMatrix::develop(&[0], 0),
            Err(DesignError::Matrix { .. })
        ));
    }

    #[test]
    fn test_new_rejects_ragged_rows() {
        let rows = vec![vec![true, false], vec![false]];
        assert!(matches!(
            IncidenceMatrix::new(rows),
            Err(DesignError::Matrix { .. })
        ));
    }

    #[test]
    fn test_new_and_into_nested() {
        let rows = vec![
            vec![true, false, true],
            vec![false, true, false],
            vec![true, true, false],
        ];
        let matrix = IncidenceMatrix::new(rows.clone()).unwrap();
        assert_eq!(matrix.size(), 3);
        assert!(matrix.get(2, 1));
        assert_eq!(matrix.column_support(0), vec![0, 2]);
        assert_eq!(matrix.column_weight(1), 2);
        assert_eq!(Vec::<Vec<bool>>::from(matrix), rows);
    }

    #[test]
    fn test_empty_matrix() {
        let matrix = IncidenceMatrix::new(vec![]).unwrap();
        assert_eq!(matrix.size(), 0);
        assert_eq!(matrix.rows().count(), 0);
    }

    proptest! {
        #[test]
        fn row_i_is_shift_of_row_0(order_idx in 0usize..4, shift in 0usize..91) {
            let order = supported_orders()[order_idx];
            let set = DifferenceSet::for_order(order as i64).unwrap();
            let matrix = build_incidence_matrix(order as i64).unwrap();
            let size = matrix.size();
            let i = shift % size;

            let mut expected: Vec<usize> = set
                .elements()
                .iter()
                .map(|&d| (d as usize + i) % size)
                .collect();
            expected.sort_unstable();

            prop_assert_eq!(matrix.row_support(i), expected);
            for j in 0..size {
                prop_assert_eq!(matrix.get(i, j), matrix.get(0, (j + size - i) % size));
            }
        }

        #[test]
        fn develop_is_invariant_under_adding_multiples(
            base in prop::collection::vec(0i64..20, 1..6),
            size in 1usize..30,
            k in -3i64..4,
        ) {
            let shifted: Vec<i64> = base.iter().map(|&d| d + k * size as i64).collect();
            prop_assert_eq!(
                IncidenceMatrix::develop(&base, size).unwrap(),
                IncidenceMatrix::develop(&shifted, size).unwrap()
            );
        }
    }
}
