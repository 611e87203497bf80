// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::{bail, Context, Result};
use dialoguer::{theme::ColorfulTheme, Input};
use std::io::{BufRead, IsTerminal, Write};

pub const INVALID_NUMBER: &str = "Invalid number!";

/// Only non-negative odd numbers are accepted. Primality is not checked.
pub fn validate_order(order: &i64) -> Result<(), &'static str> {
    if *order < 0 || order % 2 == 0 {
        Err(INVALID_NUMBER)
    } else {
        Ok(())
    }
}

/// Ask for an order until a non-negative odd number is entered.
///
/// Piped input is read line by line with [`read_order`].
pub fn prompt_order() -> Result<i64> {
    let stdin = std::io::stdin();
    if !stdin.is_terminal() {
        return read_order(stdin.lock(), std::io::stdout());
    }

    let order = Input::<i64>::with_theme(&ColorfulTheme::default())
        .with_prompt("Please give a power of an odd prime number (it will not be verified to be a prime power)")
        .validate_with(validate_order)
        .interact_text()?;

    Ok(order)
}

/// Read lines from `input` until one holds a valid order, writing `Invalid number!`
/// to `out` for every rejected line. Blank lines are skipped.
pub fn read_order<R: BufRead, W: Write>(input: R, mut out: W) -> Result<i64> {
    for line in input.lines() {
        let line = line.context("Could not read the order from stdin")?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match trimmed.parse::<i64>() {
            Ok(order) if validate_order(&order).is_ok() => return Ok(order),
            _ => writeln!(out, "{}", INVALID_NUMBER)?,
        }
    }

    bail!("stdin closed before a valid order was given")
}

/// Block until Enter is pressed. Does nothing when stdin is not a terminal.
pub fn pause() -> Result<()> {
    if !std::io::stdin().is_terminal() {
        return Ok(());
    }

    Input::<String>::new()
        .with_prompt("Press Enter to exit")
        .allow_empty(true)
        .interact_text()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_order() {
        for order in [1, 3, 5, 7, 9, 11, 25] {
            assert!(validate_order(&order).is_ok(), "{} should be accepted", order);
        }
        for order in [-3, -1, 0, 2, 4, 10] {
            assert_eq!(validate_order(&order), Err(INVALID_NUMBER));
        }
    }

    #[test]
    fn test_read_order_skips_rejected_lines() -> Result<()> {
        let mut out = Vec::new();
        let order = read_order(&b"4\n-1\n3\n"[..], &mut out)?;

        assert_eq!(order, 3);
        assert_eq!(String::from_utf8(out)?, "Invalid number!\nInvalid number!\n");
        Ok(())
    }

    #[test]
    fn test_read_order_rejects_non_numbers() -> Result<()> {
        let mut out = Vec::new();
        let order = read_order(&b"\nseven\n  9  \n5\n"[..], &mut out)?;

        assert_eq!(order, 9);
        assert_eq!(String::from_utf8(out)?, "Invalid number!\n");
        Ok(())
    }

    #[test]
    fn test_read_order_fails_on_eof() {
        let mut out = Vec::new();
        let err = read_order(&b"2\n"[..], &mut out).unwrap_err();

        assert!(err.to_string().contains("stdin closed"), "{}", err);
        assert_eq!(out, b"Invalid number!\n");
    }
}
