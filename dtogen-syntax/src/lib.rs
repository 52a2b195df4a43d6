//! Syntax tree input contract for dtogen.
//!
//! The concrete source-language parser lives outside this workspace. It
//! hands over one [`SourceUnit`] per source file, either built in memory
//! or serialized as JSON and loaded with [`SourceFile::open`].

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod file;
mod marker;
mod tree;

pub use error::{Error, Result};
pub use file::SourceFile;
pub use marker::{ArrayItem, Marker, MarkerArg, MarkerValue};
pub use tree::{
    Constant, Declaration, DeclarationKind, EnumCase, Method, Param, Property, SourceUnit,
    TypeNode, short_name,
};
