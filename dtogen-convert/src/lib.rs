//! Normalization of syntax trees into the dtogen model.
//!
//! The [`Converter`] runs an ordered list of [`Visitor`]s over every
//! source unit and hands back a [`ConverterResult`] together with the
//! non-fatal diagnostics collected along the way.
//!
//! # Example
//!
//! ```ignore
//! use dtogen_convert::Converter;
//!
//! let conversion = Converter::standard().convert(&units)?;
//! for diag in conversion.warnings() {
//!     eprintln!("{diag}");
//! }
//! let result = conversion.into_result();
//! ```
//!
//! Normalization is permissive: unknown class names are kept as-is and
//! only fail later, when the emitter cannot resolve them. The single fatal
//! error raised here is a resource declaration without any output type.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod context;
mod controller_visitor;
mod converter;
mod diagnostic;
pub mod doc_hint;
mod dto_visitor;
mod error;
mod filter;
mod resource_visitor;
mod visitor;

pub use context::ConvertContext;
pub use controller_visitor::{ControllerOptions, ControllerVisitor};
pub use converter::{Conversion, Converter};
pub use diagnostic::{Diagnostic, Severity};
pub use dto_visitor::DtoVisitor;
pub use dtogen_ir::ConverterResult;
pub use error::{Error, Result};
pub use filter::{AcceptAll, DeclarationFilter, MarkerFilter};
pub use resource_visitor::{ResourceOptions, ResourceVisitor};
pub use visitor::Visitor;
