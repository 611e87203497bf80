// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Error types for design construction
//!
//! This module defines the error types raised while looking up difference sets,
//! developing incidence matrices, reading them back from text and verifying them.

use thiserror::Error;

/// Main error type for design operations
#[derive(Error, Debug)]
pub enum DesignError {
    /// The order has no entry in the difference set catalog
    #[error("order {order} is not supported; supported orders: {}", format_orders(.supported))]
    UnsupportedOrder { order: i64, supported: Vec<u32> },

    /// Malformed matrix text
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Matrix shape errors
    #[error("Matrix error: {message}")]
    Matrix { message: String },

    /// The matrix is not the incidence structure of a projective plane
    #[error("Verification failed: {message}")]
    Verification { message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type alias for design operations
pub type DesignResult<T> = Result<T, DesignError>;

fn format_orders(orders: &[u32]) -> String {
    orders
        .iter()
        .map(|o| o.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

// Helper functions for creating errors with context
impl DesignError {
    /// Create a parse error for a 1-based line number
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        DesignError::Parse {
            line,
            message: message.into(),
        }
    }

    /// Create a verification error with a message
    pub fn verification(message: impl Into<String>) -> Self {
        DesignError::Verification {
            message: message.into(),
        }
    }

    /// Create a dimension mismatch error
    pub fn dimension_mismatch(expected: usize, actual: usize, context: impl Into<String>) -> Self {
        DesignError::Matrix {
            message: format!(
                "Dimension mismatch in {}: expected {}, got {}",
                context.into(),
                expected,
                actual
            ),
        }
    }
}
