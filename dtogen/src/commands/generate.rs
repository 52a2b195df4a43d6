use std::path::PathBuf;

use clap::Args;
use dtogen_codegen::OutputFile;
use dtogen_core::WriteResult;
use eyre::{Context, Result};

use super::UnwrapOrExit;
use crate::{
    config::Config,
    pipeline,
    reports::{GenerateReport, GenerationResult, PreviewFile, Report, TerminalOutput, WrittenFile},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to dtogen.toml (defaults to ./dtogen.toml)
    #[arg(short, long, default_value = "dtogen.toml")]
    pub config: PathBuf,

    /// Output directory, overriding [output] path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let config = Config::open(&self.config).unwrap_or_exit();
        let inputs = pipeline::input_files(&config)?;
        let units = pipeline::load_units(&inputs).unwrap_or_exit();

        let conversion = pipeline::convert(&config, &units)?;
        let files = pipeline::render(&config, &conversion)?;
        let (warnings, _) = pipeline::diagnostic_messages(&conversion);

        let result = if self.dry_run {
            GenerationResult::Preview(files.into_iter().map(preview).collect())
        } else {
            let output_dir = self.output.clone().unwrap_or_else(|| config.output_dir());
            let written = write_files(files, &output_dir)?;
            GenerationResult::Written {
                output_dir,
                files: written,
            }
        };

        let report = GenerateReport {
            warnings,
            dto_count: conversion.result().dto_list().len(),
            endpoint_count: conversion.result().endpoints().len(),
            result,
        };
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}

fn preview(file: OutputFile) -> PreviewFile {
    PreviewFile {
        path: file.path,
        content: file.content,
    }
}

fn write_files(files: Vec<OutputFile>, output_dir: &std::path::Path) -> Result<Vec<WrittenFile>> {
    files
        .into_iter()
        .map(|file| -> Result<WrittenFile> {
            let path = file.path.clone();
            let result = file
                .into_file(output_dir)
                .write()
                .wrap_err_with(|| format!("failed to write {path}"))?;
            Ok(WrittenFile {
                path,
                changed: result == WriteResult::Written,
            })
        })
        .collect()
}
