//! bootform CLI tool

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use anyhow::{Context, Result};
use bootform::config::BootformConfig;
use bootform::forms::Flavor;
use bootform::observability;
use bootform_cli_lib::{Cli, GenerateCommand};
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let (app, model) = cli.model_args().unwrap_or_else(|err| err.exit());

    let config = match &cli.config {
        Some(path) => BootformConfig::load_from(path),
        None => BootformConfig::load(),
    }
    .context("Failed to load configuration")?
    .with_schema(cli.schema.clone());

    observability::init(&config.log, cli.verbose);

    let cmd = GenerateCommand::new(app, model, Flavor::from_react_flag(cli.react), config.schema);
    cmd.execute()
}
