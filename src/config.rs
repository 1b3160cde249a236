// src/config.rs
use std::path::PathBuf;

use manga_volumes_domain::ParseOptions;

use crate::{
    args::Args,
    options::{OutputFormat, Verbosity},
};

/// Resolved runtime settings shared by every command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub library: PathBuf,
    pub format: OutputFormat,
    pub parse: ParseOptions,
    pub verbosity: Verbosity,
}

impl From<&Args> for Config {
    fn from(args: &Args) -> Self {
        let parse = args.max_range_span.map(ParseOptions::new).unwrap_or_default();
        Self {
            library: args.library.clone(),
            format: args.format,
            parse,
            verbosity: Verbosity::from_flags(args.verbose, args.quiet),
        }
    }
}
