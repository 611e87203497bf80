// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Checks that a matrix is the incidence structure of a finite projective plane.

use crate::errors::{DesignError, DesignResult};
use crate::matrix::IncidenceMatrix;
use tracing::debug;

/// True when every non-zero residue modulo `modulus` is the difference of exactly
/// one ordered pair of distinct elements.
pub fn is_perfect_difference_set(elements: &[i64], modulus: usize) -> bool {
    if modulus == 0 {
        return false;
    }
    let m = modulus as i64;
    let mut counts = vec![0usize; modulus];

    for (i, a) in elements.iter().enumerate() {
        for (j, b) in elements.iter().enumerate() {
            if i != j {
                counts[(a - b).rem_euclid(m) as usize] += 1;
            }
        }
    }

    counts[0] == 0 && counts[1..].iter().all(|&c| c == 1)
}

/// Recovers `n` from `size = n² + n + 1`, if `size` has that form.
pub fn order_for_size(size: usize) -> Option<u32> {
    // n² < n² + n + 1 < (n + 1)²
    let mut n = (size as f64).sqrt() as usize;
    while n * n > size {
        n -= 1;
    }
    while (n + 1) * (n + 1) <= size {
        n += 1;
    }
    (n >= 2 && n * (n + 1) + 1 == size)
        .then(|| u32::try_from(n).ok())
        .flatten()
}

/// Verifies that `matrix` is the incidence matrix of a projective plane.
///
/// Every row (line) and column (point) must carry `n + 1` incidences and any two
/// distinct lines must meet in exactly one point. Returns the plane's order `n`.
pub fn verify_projective_plane(matrix: &IncidenceMatrix) -> DesignResult<u32> {
    let size = matrix.size();
    let order = order_for_size(size).ok_or_else(|| {
        DesignError::verification(format!(
            "dimension {} is not of the form n² + n + 1 with n ≥ 2",
            size
        ))
    })?;
    let k = order as usize + 1;

    for i in 0..size {
        let weight = matrix.row_weight(i);
        if weight != k {
            return Err(DesignError::verification(format!(
                "row {} has {} incidences, expected {}",
                i, weight, k
            )));
        }
    }

    for j in 0..size {
        let weight = matrix.column_weight(j);
        if weight != k {
            return Err(DesignError::verification(format!(
                "column {} has {} incidences, expected {}",
                j, weight, k
            )));
        }
    }

    let supports: Vec<Vec<usize>> = (0..size).map(|i| matrix.row_support(i)).collect();
    for a in 0..size {
        for b in (a + 1)..size {
            let shared = supports[a]
                .iter()
                .filter(|col| matrix.get(b, **col))
                .count();
            if shared != 1 {
                return Err(DesignError::verification(format!(
                    "rows {} and {} share {} columns, expected 1",
                    a, b, shared
                )));
            }
        }
    }

    debug!(order, size, "Projective plane verified");
    Ok(order)
}
