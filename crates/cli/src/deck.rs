// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::generate::resolve_order;
use crate::helpers::create_output;
use anyhow::{Context, Result};
use pds_config::PdsConfig;
use pds_design::{build_incidence_matrix, verify_projective_plane, Deck};
use std::io::Write;
use std::path::Path;
use tracing::{info, instrument};

/// Builds the deck for `order`, checking the plane first.
pub fn build_deck(order: i64) -> Result<Deck> {
    let matrix = build_incidence_matrix(order)?;
    verify_projective_plane(&matrix)?;
    Ok(Deck::from_matrix(&matrix))
}

pub fn write_deck_file(deck: &Deck, path: &Path) -> Result<()> {
    let mut writer = create_output(path)?;
    deck.write_json(&mut writer)
        .with_context(|| format!("Could not write deck to {}", path.display()))?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

#[instrument(name = "deck", skip_all)]
pub fn execute(config: &PdsConfig) -> Result<()> {
    let order = resolve_order(config)?;
    let deck = build_deck(order)?;
    info!(
        order,
        cards = deck.cards.len(),
        symbols_per_card = deck.symbols_per_card,
        "Built deck"
    );

    write_deck_file(&deck, config.deck_output())?;
    println!(
        "Wrote {} cards with {} symbols each to {}",
        deck.cards.len(),
        deck.symbols_per_card,
        config.deck_output().display()
    );

    Ok(())
}
