//! CLI argument definitions using clap
//!
//! Commands:
//! - fixture-schema convert --record <kind> --from <projection> --to <projection>
//! - fixture-schema check --record <kind> --from <projection>
//! - fixture-schema fields --record <kind>
//! - fixture-schema records

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::model::RecordKind;
use crate::schema::Projection;

/// fixture-schema - football records in wire and document form
#[derive(Parser, Debug)]
#[command(name = "fixture-schema")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Decode a record in one projection and re-encode it in another
    Convert {
        /// Record type of the input
        #[arg(long, value_enum)]
        record: RecordKind,

        /// Projection of the input
        #[arg(long, value_enum)]
        from: Projection,

        /// Projection of the output
        #[arg(long, value_enum)]
        to: Projection,

        /// Input file (stdin when omitted)
        #[arg(long)]
        input: Option<PathBuf>,
    },

    /// Decode a record and report whether it matches its schema
    Check {
        /// Record type of the input
        #[arg(long, value_enum)]
        record: RecordKind,

        /// Projection of the input
        #[arg(long, value_enum)]
        from: Projection,

        /// Input file (stdin when omitted)
        #[arg(long)]
        input: Option<PathBuf>,
    },

    /// Print a record's field table
    Fields {
        /// Record type to describe
        #[arg(long, value_enum)]
        record: RecordKind,
    },

    /// List every record type
    Records,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
