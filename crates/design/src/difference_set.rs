// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Catalog of known perfect difference sets.
//!
//! A perfect difference set for order `n` is a set `D` of `n + 1` residues modulo
//! `L = n² + n + 1` such that every non-zero residue is a difference `a - b` of
//! exactly one ordered pair from `D`. Generating one requires Singer's construction
//! over `GF(n³)`, which needs a Conway polynomial for `n`. That is expensive and
//! only four small orders are ever needed, so the sets are looked up instead.

use crate::errors::{DesignError, DesignResult};
use crate::verify::is_perfect_difference_set;
use phf::phf_map;

const ORDER_3: &[i64] = &[0, 1, 3, 9];
const ORDER_5: &[i64] = &[0, 1, 3, 8, 12, 18];
const ORDER_7: &[i64] = &[0, 1, 3, 13, 32, 36, 43, 52];
const ORDER_9: &[i64] = &[0, 1, 3, 9, 27, 49, 56, 61, 77, 81];

static CATALOG: phf::Map<u32, &'static [i64]> = phf_map! {
    3u32 => ORDER_3,
    5u32 => ORDER_5,
    7u32 => ORDER_7,
    9u32 => ORDER_9,
};

/// Orders present in the catalog, ascending.
pub fn supported_orders() -> Vec<u32> {
    let mut orders: Vec<u32> = CATALOG.keys().copied().collect();
    orders.sort_unstable();
    orders
}

/// Returns the difference vector for `order`, or [`DesignError::UnsupportedOrder`].
pub fn perfect_difference_vector(order: i64) -> DesignResult<&'static [i64]> {
    u32::try_from(order)
        .ok()
        .and_then(|key| CATALOG.get(&key))
        .copied()
        .ok_or_else(|| DesignError::UnsupportedOrder {
            order,
            supported: supported_orders(),
        })
}

/// Number of points (and lines) of the projective plane of order `n`.
pub fn plane_size(order: u32) -> usize {
    let n = order as usize;
    n * (n + 1) + 1
}

/// A catalog entry: an order together with its perfect difference vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifferenceSet {
    order: u32,
    elements: &'static [i64],
}

impl DifferenceSet {
    /// Looks up the difference set for `order`.
    ///
    /// # Errors
    ///
    /// Returns [`DesignError::UnsupportedOrder`] for anything outside the catalog,
    /// including zero, negative and even values.
    pub fn for_order(order: i64) -> DesignResult<Self> {
        let elements = perfect_difference_vector(order)?;
        // lookup succeeded, so the order fits in u32
        Ok(Self {
            order: order as u32,
            elements,
        })
    }

    /// Every entry of the catalog, ascending by order.
    pub fn all() -> Vec<Self> {
        supported_orders()
            .into_iter()
            .filter_map(|order| Self::for_order(order as i64).ok())
            .collect()
    }

    pub fn order(&self) -> u32 {
        self.order
    }

    pub fn elements(&self) -> &'static [i64] {
        self.elements
    }

    /// The modulus `L = n(n+1) + 1`, which is also the matrix dimension.
    pub fn modulus(&self) -> usize {
        plane_size(self.order)
    }

    /// Checks that every non-zero residue modulo `L` occurs exactly once as a difference.
    pub fn is_perfect(&self) -> bool {
        is_perfect_difference_set(self.elements, self.modulus())
    }
}
