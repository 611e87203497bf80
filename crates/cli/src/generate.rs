// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::helpers::create_output;
use crate::helpers::prompt::{pause, prompt_order};
use anyhow::{Context, Result};
use pds_config::PdsConfig;
use pds_design::{build_incidence_matrix, write_matrix, IncidenceMatrix};
use std::path::Path;
use tracing::{info, instrument};

/// The order from the config, or asked for interactively.
pub fn resolve_order(config: &PdsConfig) -> Result<i64> {
    match config.order() {
        Some(order) => Ok(order),
        None => prompt_order(),
    }
}

pub fn write_matrix_file(matrix: &IncidenceMatrix, path: &Path) -> Result<()> {
    let writer = create_output(path)?;
    write_matrix(matrix, writer)
        .with_context(|| format!("Could not write matrix to {}", path.display()))?;
    Ok(())
}

#[instrument(name = "generate", skip_all)]
pub fn execute(config: &PdsConfig) -> Result<()> {
    let order = resolve_order(config)?;
    let matrix = build_incidence_matrix(order)?;
    info!(order, size = matrix.size(), "Built incidence matrix");

    write_matrix_file(&matrix, config.output())?;
    println!(
        "Wrote the {size}x{size} incidence matrix for order {order} to {}",
        config.output().display(),
        size = matrix.size(),
    );

    if config.pause() {
        pause()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pds_design::matrix_from_str;

    #[test]
    fn test_write_matrix_file() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("matrix.csv");
        let matrix = build_incidence_matrix(5)?;

        write_matrix_file(&matrix, &path)?;

        let text = std::fs::read_to_string(&path)?;
        assert_eq!(text.lines().count(), 31);
        assert!(text.lines().all(|line| line.ends_with(';')));
        assert_eq!(matrix_from_str(&text)?, matrix);
        Ok(())
    }
}
