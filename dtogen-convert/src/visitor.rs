//! Visitor trait.

use dtogen_syntax::SourceUnit;

use crate::{ConvertContext, Result};

/// One normalization pass over a source unit.
///
/// The converter runs each visitor over every unit before moving on to
/// the next visitor, so later visitors (endpoint extraction) can look up
/// any DTO declared anywhere in the input.
pub trait Visitor {
    /// The name of this visitor, used in diagnostics and logs.
    fn name(&self) -> &'static str;

    /// Visit one unit, adding DTOs, endpoints or diagnostics to the context.
    ///
    /// # Errors
    ///
    /// Returns an error only for fatal problems. Anything recoverable is
    /// recorded as a diagnostic instead.
    fn visit(&self, unit: &SourceUnit, ctx: &mut ConvertContext) -> Result<()>;
}
