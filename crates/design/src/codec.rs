// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Text format for incidence matrices.
//!
//! One line per row, entries written as `0`/`1` separated by `", "`, every line
//! terminated by `;`:
//!
//! ```text
//! 1, 1, 0, 1, 0, 0, 0;
//! 0, 1, 1, 0, 1, 0, 0;
//! ```

use crate::errors::{DesignError, DesignResult};
use crate::matrix::IncidenceMatrix;
use std::fmt;
use std::io::{BufRead, Write};

const SEPARATOR: &str = ", ";
const TERMINATOR: char = ';';

impl fmt::Display for IncidenceMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for (j, &cell) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(SEPARATOR)?;
                }
                f.write_str(if cell { "1" } else { "0" })?;
            }
            writeln!(f, "{}", TERMINATOR)?;
        }
        Ok(())
    }
}

/// Writes `matrix` to `writer`, one row per line.
pub fn write_matrix<W: Write>(matrix: &IncidenceMatrix, mut writer: W) -> std::io::Result<()> {
    write!(writer, "{}", matrix)?;
    writer.flush()
}

/// Renders `matrix` to a string in the same format as [`write_matrix`].
pub fn matrix_to_string(matrix: &IncidenceMatrix) -> String {
    matrix.to_string()
}

/// Reads a matrix written by [`write_matrix`]. Blank lines are skipped.
///
/// # Errors
///
/// Returns [`DesignError::Parse`] for a line missing its `;` terminator or holding a
/// token other than `0`/`1`, and [`DesignError::Matrix`] when the grid is not square.
pub fn parse_matrix<R: BufRead>(reader: R) -> DesignResult<IncidenceMatrix> {
    let mut rows = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let body = trimmed.strip_suffix(TERMINATOR).ok_or_else(|| {
            DesignError::parse(line_no, format!("row is not terminated by '{}'", TERMINATOR))
        })?;

        let row = body
            .split(',')
            .map(|token| match token.trim() {
                "1" => Ok(true),
                "0" => Ok(false),
                other => Err(DesignError::parse(
                    line_no,
                    format!("expected 0 or 1, found {:?}", other),
                )),
            })
            .collect::<DesignResult<Vec<bool>>>()?;

        rows.push(row);
    }

    IncidenceMatrix::new(rows)
}

/// Parses a matrix from a string.
pub fn matrix_from_str(text: &str) -> DesignResult<IncidenceMatrix> {
    parse_matrix(text.as_bytes())
}
