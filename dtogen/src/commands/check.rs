use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    config::Config,
    pipeline,
    reports::{CheckReport, Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to dtogen.toml (defaults to ./dtogen.toml)
    #[arg(short, long, default_value = "dtogen.toml")]
    pub config: PathBuf,

    /// Print the normalized model as JSON instead of a summary
    #[arg(long)]
    pub json: bool,
}

impl CheckCommand {
    /// Run the check command
    ///
    /// Fatal normalization or resolution errors propagate and give a
    /// non-zero exit status.
    pub fn run(&self) -> Result<()> {
        let config = Config::open(&self.config).unwrap_or_exit();
        let inputs = pipeline::input_files(&config)?;
        let units = pipeline::load_units(&inputs).unwrap_or_exit();

        let conversion = pipeline::convert(&config, &units)?;
        let files = pipeline::render(&config, &conversion)?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(conversion.result())?);
            return Ok(());
        }

        let (warnings, infos) = pipeline::diagnostic_messages(&conversion);
        let report = CheckReport {
            config_path: self.config.clone(),
            input_count: inputs.len(),
            dto_count: conversion.result().dto_list().len(),
            endpoint_count: conversion.result().endpoints().len(),
            file_count: files.len(),
            warnings,
            infos,
        };
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
