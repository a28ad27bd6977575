// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the seqlike command-line interface.
//!
//! Every subcommand opens one file as a byte container and runs a single
//! library algorithm over it in place. Indices are byte positions. Nothing is
//! buffered: each byte the algorithm touches is one positional read or write,
//! so the tool is for inspection and small edits, not bulk processing.

pub mod display;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "seqlike",
    about = "Run sequence algorithms in place over a file's bytes",
    version
)]
pub struct Cli {
    /// Print the report as JSON instead of a table
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// How the file is opened.
#[derive(Args, Clone, Copy, Default)]
pub struct StoreArgs {
    /// Reads past the end return the last byte instead of zero
    #[arg(long)]
    pub clamp: bool,

    /// Refuse to grow the file beyond this many bytes
    #[arg(long)]
    pub max_len: Option<usize>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show length, sortedness, checksum and a preview
    Inspect {
        file: String,

        /// Number of leading bytes to show
        #[arg(long, default_value = "16")]
        preview: usize,
    },

    /// Insert bytes before a position (default: append)
    Insert {
        file: String,

        /// Position to insert before; the length appends
        #[arg(long)]
        at: Option<usize>,

        /// Text to insert, as UTF-8
        #[arg(long)]
        text: String,

        #[command(flatten)]
        store: StoreArgs,
    },

    /// Delete the bytes in FIRST..=LAST
    Delete {
        file: String,

        #[arg(long)]
        first: usize,

        #[arg(long)]
        last: usize,
    },

    /// Move the bytes in FIRST..=LAST so they begin at TO
    MoveRange {
        file: String,

        #[arg(long)]
        first: usize,

        #[arg(long)]
        last: usize,

        #[arg(long)]
        to: usize,
    },

    /// Insertion-sort the bytes
    Sort { file: String },

    /// Look up a byte in a sorted file
    Search {
        file: String,

        /// Byte value, decimal or 0x-prefixed hex
        #[arg(value_parser = parse_byte)]
        value: u8,
    },

    /// Insert a byte into a sorted file at its sorted position
    SortedInsert {
        file: String,

        /// Byte value, decimal or 0x-prefixed hex
        #[arg(value_parser = parse_byte)]
        value: u8,

        #[command(flatten)]
        store: StoreArgs,
    },

    /// Reverse the bytes, or only FIRST..=LAST
    Reverse {
        file: String,

        #[arg(long, requires = "last")]
        first: Option<usize>,

        #[arg(long, requires = "first")]
        last: Option<usize>,
    },
}

pub fn parse_byte(s: &str) -> Result<u8, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u8::from_str_radix(hex, 16),
        None => s.parse::<u8>(),
    };
    parsed.map_err(|e| format!("invalid byte '{}': {}", s, e))
}
