// src/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};
use manga_volumes_shared_kernel::VolumeNumber;

use crate::{
    options::OutputFormat,
    parsers::{parse_manga_id, parse_positive_u32, parse_volume_number},
};

const RANGE_HELP: &str = "Volumes are entered as numbers and inclusive ranges separated by ';' or ',', \
e.g. \"1-10; 15; 20\". Unreadable entries are ignored.";

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "manga_volumes",
    version = crate::VERSION,
    about = "Track which volumes of each manga you own",
    after_help = RANGE_HELP
)]
pub struct Args {
    /// Library file to read and update
    #[arg(
        long,
        short = 'l',
        env = "MANGA_VOLUMES_LIBRARY",
        default_value = "manga_library.json",
        value_hint = ValueHint::FilePath,
        global = true
    )]
    pub library: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Largest number of volumes one range may expand to; larger ranges are ignored
    #[arg(long, env = "MANGA_VOLUMES_MAX_RANGE_SPAN", value_parser = parse_positive_u32, global = true)]
    pub max_range_span: Option<u32>,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Normalize range text without touching the library
    Parse {
        #[arg(allow_hyphen_values = true)]
        text: String,
    },

    /// Render volume numbers as a canonical range string
    Format {
        #[arg(required = true, value_parser = parse_volume_number)]
        numbers: Vec<VolumeNumber>,
    },

    /// List every manga in the library with its owned volumes
    List,

    /// Show the volume shelf of one manga
    Show {
        #[arg(value_parser = parse_manga_id)]
        id: u64,
    },

    /// Print the owned volumes of one manga as editable range text
    Seed {
        #[arg(value_parser = parse_manga_id)]
        id: u64,
    },

    /// Replace the owned volumes of one manga
    Edit {
        #[arg(value_parser = parse_manga_id)]
        id: u64,
        #[arg(allow_hyphen_values = true)]
        text: String,
    },

    /// Add a manga to the library
    Add {
        title: String,

        /// Number of volumes the series has, if known
        #[arg(long, value_parser = parse_positive_u32)]
        total: Option<u32>,

        /// Volumes already owned
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        volumes: String,
    },
}
