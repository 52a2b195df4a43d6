//! Language-agnostic code emission for dtogen.
//!
//! This crate provides the pieces every target-language backend shares:
//!
//! - [`builder`] - Code building blocks (CodeBuilder, CodeFragment, Renderable)
//! - [`resolver`] - The unknown-type resolver contract and ordered chain
//! - [`dependency`] - DTO-to-DTO reference calculation for file splitting
//! - [`output`] - Output writers, file-name strategies and post-processors
//! - [`imports`] - Import collection with deterministic ordering
//! - [`naming`] - Language naming conventions
//! - [`options`] - Emission switches shared by every backend

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

pub mod builder;
pub mod dependency;
mod error;
pub mod imports;
pub mod naming;
pub mod options;
pub mod output;
pub mod resolver;

pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable};
pub use dependency::DtoTypeDependencyCalculator;
pub use error::{Error, Result};
pub use imports::ImportCollector;
pub use naming::NamingConvention;
pub use options::GeneratorOptions;
pub use output::{
    EntityPerClassOutputWriter, FileNameGenerator, ImportGenerator, KebabCaseFileNameGenerator,
    OutputFile, OutputFileProcessor, OutputFilesProcessor, OutputWriter, PrependAutogeneratedNotice,
    PrependText, RenderedEndpoint, RenderedOutput, RenderedType, SingleFileOutputWriter,
};
pub use resolver::{ResolveContext, TypeOwner, TypeRenderer, TypeResolverChain, UnknownTypeResolver};
