// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use std::path::PathBuf;

use crate::{deck, generate, orders, verify};
use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use pds_config::{load_config, CliOverrides};
use tracing::{info, instrument, Level};

#[derive(Parser, Debug)]
#[command(name = "pds", version)]
#[command(about = "Write the incidence matrix of a finite projective plane built from a perfect difference set", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Defaults to `generate`
    #[command(subcommand)]
    command: Option<Commands>,

    /// Indicate error levels by adding additional `-v` arguments. Eg. `pds -vvv` will give you
    /// trace level output
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true
    )]
    pub verbose: u8,

    /// Silence all output. This argument cannot be used alongside `-v`
    #[arg(
        short,
        long,
        action = ArgAction::SetTrue,
        conflicts_with = "verbose",
        global = true
    )]
    quiet: bool,
}

impl Cli {
    pub fn log_level(&self) -> Level {
        if self.quiet {
            Level::ERROR
        } else {
            match self.verbose {
                0 => Level::WARN,  //
                1 => Level::INFO,  // -v
                2 => Level::DEBUG, // -vv
                _ => Level::TRACE, // -vvv
            }
        }
    }

    #[instrument(skip_all)]
    pub fn execute(self) -> Result<()> {
        let command = self.command.unwrap_or_default();
        let config = load_config(self.config, command.overrides())?;
        info!("Config loaded from: {:?}", config.config_file());

        match command {
            Commands::Generate { .. } => generate::execute(&config)?,
            Commands::Verify { path } => verify::execute(&path)?,
            Commands::Deck { .. } => deck::execute(&config)?,
            Commands::Orders => orders::execute(),
        }

        Ok(())
    }
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Build the incidence matrix for an order and write it as text
    Generate {
        /// Order of the plane. Prompted for when omitted
        #[arg(long, short = 'n', allow_negative_numbers = true)]
        order: Option<i64>,

        /// Output file [default: matrix.csv]
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Exit without waiting for Enter
        #[arg(long)]
        no_pause: bool,
    },

    /// Check that a matrix file describes a projective plane
    Verify {
        /// Matrix file to read
        path: PathBuf,
    },

    /// Write the card deck (one card per point, any two sharing one symbol) as JSON
    Deck {
        /// Order of the plane. Prompted for when omitted
        #[arg(long, short = 'n', allow_negative_numbers = true)]
        order: Option<i64>,

        /// Output file [default: cards.json]
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// List the supported orders and their difference sets
    Orders,
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Generate {
            order: None,
            output: None,
            no_pause: false,
        }
    }
}

impl Commands {
    /// Config values the command line sets explicitly
    pub fn overrides(&self) -> CliOverrides {
        match self {
            Commands::Generate {
                order,
                output,
                no_pause,
            } => CliOverrides {
                order: *order,
                output: output.clone(),
                pause: no_pause.then_some(false),
                ..Default::default()
            },
            Commands::Deck { order, output } => CliOverrides {
                order: *order,
                deck_output: output.clone(),
                ..Default::default()
            },
            Commands::Verify { .. } | Commands::Orders => CliOverrides::default(),
        }
    }
}
