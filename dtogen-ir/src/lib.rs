//! Intermediate representation types for dtogen.
//!
//! This crate provides the language-neutral model shared by the whole
//! conversion pipeline. These types are the single handoff between
//! normalization and code emission.
//!
//! # Architecture
//!
//! ```text
//! syntax tree → dtogen-convert (normalize) → dtogen-ir (DTO + endpoints) → codegen
//! ```
//!
//! The IR types are designed to be:
//! - Target-language agnostic (no TypeScript-specific concerns)
//! - Permissive: any type name may be referenced, resolution happens at emission
//! - Deterministic: insertion order is preserved everywhere

mod dto;
mod endpoint;
mod result;
mod types;

pub use dto::{DtoEnum, DtoList, DtoProperty, DtoType, EnumBacking, EnumMember, LiteralValue};
pub use endpoint::{ApiEndpoint, ApiEndpointList, ApiEndpointParam, HttpMethod, ParamSource};
pub use result::ConverterResult;
pub use types::{ArrayType, Primitive, SingleType, TypeExpr, UnionType};
