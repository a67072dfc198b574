use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::models::ItemId;

#[derive(Parser)]
#[command(name = "berry-cart")]
#[command(about = "Berry shop storefront with an in-memory shopping cart")]
#[command(version = "0.1.0")]
pub struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Catalog JSON file, replaces the built-in assortment
    #[arg(short, long)]
    pub catalog: Option<PathBuf>,
}

/// One line typed into the shop shell.
#[derive(Parser, Debug)]
#[command(no_binary_name = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ShellCommand {
    /// Show the catalog
    Catalog,
    /// Add one unit of an item to the cart
    Add {
        /// Catalog item ID
        id: ItemId,
    },
    /// Increase the quantity of a cart line by one
    #[command(alias = "plus")]
    Inc {
        /// Catalog item ID
        id: ItemId,
    },
    /// Decrease the quantity of a cart line by one, removing it at zero
    #[command(alias = "minus")]
    Dec {
        /// Catalog item ID
        id: ItemId,
    },
    /// Remove a line from the cart
    #[command(alias = "rm")]
    Remove {
        /// Catalog item ID
        id: ItemId,
    },
    /// Show the cart and its totals
    Cart,
    /// Place an order for the current cart
    Checkout,
    /// Empty the cart
    Clear,
    /// Leave the shop
    #[command(alias = "exit")]
    Quit,
}

impl ShellLine {
    pub fn parse_line(line: &str) -> Result<ShellCommand, clap::Error> {
        Self::try_parse_from(line.split_whitespace()).map(|parsed| parsed.command)
    }
}
