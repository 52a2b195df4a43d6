//! TypeScript syntax builders.
//!
//! Each builder implements [`Renderable`](dtogen_codegen::Renderable) and
//! is turned into text by [`CodeBuilder`](dtogen_codegen::CodeBuilder).

mod chain;
mod consts;
mod enums;
mod imports;
mod types;

pub use chain::MethodChain;
pub use consts::{ArrowConst, Param};
pub use enums::Enum;
pub use imports::Import;
pub use types::{Field, ObjectType, TypeAlias};
