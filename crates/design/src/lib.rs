// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Incidence matrices of projective planes developed from perfect difference sets.
//!
//! For an order `n` with a known perfect difference set `D ⊂ Z_L`, `L = n² + n + 1`,
//! the translates `D + i (mod L)` for `i = 0, ..., L-1` are the lines of a projective
//! plane of order `n` on the points `0, ..., L-1`. This crate looks `D` up in a small
//! catalog, develops it into the `L × L` incidence matrix and reads and writes that
//! matrix as text.
//!
//! ## Mathematical Background
//!
//! Row `i` of the matrix is true at column `j` iff `j ≡ d + i (mod L)` for some `d ∈ D`.
//! Because every non-zero residue is a difference of exactly one pair in `D`, two
//! distinct rows share exactly one column, which is the defining property of a plane.
//!
//! ## Supported orders
//!
//! Only the odd orders 3, 5, 7 and 9 are in the catalog. Anything else is rejected
//! with [`DesignError::UnsupportedOrder`].

pub mod codec;
pub mod deck;
pub mod difference_set;
pub mod errors;
pub mod matrix;
pub mod verify;

// Re-export commonly used types for convenience
pub use codec::{matrix_from_str, matrix_to_string, parse_matrix, write_matrix};
pub use deck::{Card, Deck};
pub use difference_set::{perfect_difference_vector, supported_orders, DifferenceSet};
pub use errors::{DesignError, DesignResult};
pub use matrix::{build_incidence_matrix, IncidenceMatrix};
pub use verify::verify_projective_plane;
