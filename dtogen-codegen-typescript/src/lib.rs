//! TypeScript backend for dtogen.
//!
//! Renders a [`ConverterResult`](dtogen_ir::ConverterResult) as TypeScript
//! object types, enums and an axios-based API client.
//!
//! ```ignore
//! use dtogen_codegen::{OutputFilesProcessor, PrependAutogeneratedNotice, SingleFileOutputWriter};
//! use dtogen_codegen_typescript::{ClassNameTypeResolver, TypeScriptGenerator, TypeScriptTypeResolver};
//!
//! let resolver = TypeScriptTypeResolver::new(
//!     TypeResolverChain::new().with(DateTimeTypeResolver).with(ClassNameTypeResolver),
//! );
//! let generator = TypeScriptGenerator::new(
//!     SingleFileOutputWriter::new("generated.ts", TypeScriptImportGenerator),
//!     resolver,
//! )
//! .processors(OutputFilesProcessor::new().with(PrependAutogeneratedNotice::new("//")));
//!
//! let files = generator.generate(conversion.result())?;
//! ```

mod api_client;
mod generator;
mod import_generator;
mod naming;
mod processor;
mod property_name;
mod type_resolver;

pub mod ast;
pub mod resolvers;

pub use dtogen_codegen::{Error, GeneratorOptions, Result};
pub use generator::TypeScriptGenerator;
pub use import_generator::TypeScriptImportGenerator;
pub use naming::TS_NAMING;
pub use processor::{AppendCollectionResponseFileProcessor, COLLECTION_RESPONSE_TYPE};
pub use property_name::{
    CamelCasePropertyNameGenerator, OptionalPropertyNameGenerator, PlainPropertyNameGenerator,
    PropertyNameChain, PropertyNameGenerator,
};
pub use resolvers::{
    ClassNameTypeResolver, CollectionResponseTypeResolver, DateTimeTypeResolver,
    LiteralOverrideTypeResolver,
};
pub use type_resolver::TypeScriptTypeResolver;
