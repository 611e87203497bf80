// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::{Context, Result};
use pds_design::{parse_matrix, verify_projective_plane};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::instrument;

/// Reads a matrix file and returns the order of the plane it describes.
pub fn verify_file(path: &Path) -> Result<u32> {
    let file = File::open(path).with_context(|| format!("Could not open {}", path.display()))?;
    let matrix = parse_matrix(BufReader::new(file))
        .with_context(|| format!("Could not read a matrix from {}", path.display()))?;
    let order = verify_projective_plane(&matrix)?;
    Ok(order)
}

#[instrument(name = "verify", skip_all)]
pub fn execute(path: &Path) -> Result<()> {
    let order = verify_file(path)?;
    println!(
        "✓ {} is the incidence matrix of a projective plane of order {}",
        path.display(),
        order
    );
    Ok(())
}
