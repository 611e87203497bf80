// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Card decks derived from an incidence matrix.
//!
//! Each column of the matrix becomes a card holding the symbols (row indices)
//! incident to it. For a projective plane of order `n` this yields `n² + n + 1`
//! cards of `n + 1` symbols each, and any two cards share exactly one symbol.

use crate::errors::{DesignError, DesignResult};
use crate::matrix::IncidenceMatrix;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// A card's symbols, kept sorted and free of duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CardRecord", into = "CardRecord")]
pub struct Card {
    symbols: Vec<usize>,
}

#[derive(Serialize, Deserialize)]
struct CardRecord {
    symbols: Vec<usize>,
}

impl Card {
    /// Builds a card from `symbols` given in any order.
    ///
    /// # Errors
    ///
    /// Returns an error if a symbol is listed twice.
    pub fn new(mut symbols: Vec<usize>) -> DesignResult<Self> {
        symbols.sort_unstable();
        if let Some(pair) = symbols.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(DesignError::verification(format!(
                "symbol {} appears twice on one card",
                pair[0]
            )));
        }
        Ok(Self { symbols })
    }

    pub fn symbols(&self) -> &[usize] {
        &self.symbols
    }

    pub fn contains(&self, symbol: usize) -> bool {
        self.symbols.binary_search(&symbol).is_ok()
    }
}

impl TryFrom<CardRecord> for Card {
    type Error = DesignError;

    fn try_from(record: CardRecord) -> DesignResult<Self> {
        Card::new(record.symbols)
    }
}

impl From<Card> for CardRecord {
    fn from(card: Card) -> Self {
        CardRecord {
            symbols: card.symbols,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    pub symbols_per_card: usize,
    pub cards: Vec<Card>,
}

impl Deck {
    pub fn from_matrix(matrix: &IncidenceMatrix) -> Self {
        let cards: Vec<Card> = (0..matrix.size())
            // column support is ascending and distinct
            .map(|col| Card {
                symbols: matrix.column_support(col),
            })
            .collect();
        let symbols_per_card = cards.first().map_or(0, |card| card.symbols.len());

        Self {
            symbols_per_card,
            cards,
        }
    }

    /// Symbols that appear on both card `a` and card `b`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn shared_symbols(&self, a: usize, b: usize) -> Vec<usize> {
        let other = &self.cards[b];
        self.cards[a]
            .symbols
            .iter()
            .copied()
            .filter(|&s| other.contains(s))
            .collect()
    }

    pub fn write_json<W: Write>(&self, writer: W) -> serde_json::Result<()> {
        serde_json::to_writer_pretty(writer, self)
    }
}
