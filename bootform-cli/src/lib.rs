//! bootform CLI library

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

pub mod commands;

use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

pub use commands::GenerateCommand;

/// Message shown when the positional arguments are wrong
pub const USAGE_MESSAGE: &str = "Please supply an app name & model name";

/// Command-line arguments
#[derive(Debug, Parser)]
#[command(name = "bootform")]
#[command(version)]
#[command(about = "Prints a bootstrap form for the supplied app & model", long_about = None)]
#[command(override_usage = "bootform [OPTIONS] <APP> <MODEL>")]
pub struct Cli {
    /// App label followed by model name
    #[arg(value_name = "ARGS")]
    pub args: Vec<String>,

    /// Generate with React's ref and defaultValue attributes
    #[arg(long)]
    pub react: bool,

    /// Schema file describing apps and models (TOML or JSON)
    #[arg(long, value_name = "PATH")]
    pub schema: Option<PathBuf>,

    /// Configuration file to use instead of the standard locations
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// The `(app, model)` pair
    ///
    /// # Errors
    ///
    /// Returns a usage error unless exactly two positional arguments were
    /// given.
    pub fn model_args(&self) -> Result<(&str, &str), clap::Error> {
        match self.args.as_slice() {
            [app, model] => Ok((app.as_str(), model.as_str())),
            _ => Err(Self::command().error(ErrorKind::WrongNumberOfValues, USAGE_MESSAGE)),
        }
    }
}
