//! Converter orchestrator.

use dtogen_ir::ConverterResult;
use dtogen_syntax::SourceUnit;
use tracing::{debug, info};

use crate::{
    ControllerVisitor, ConvertContext, Diagnostic, DtoVisitor, ResourceVisitor, Result, Severity,
    Visitor,
};

/// Runs visitors over source units in order.
///
/// Each visitor sees every unit before the next visitor starts, so
/// with [`Converter::standard`] all DTOs are known before endpoints are
/// extracted, and controller endpoints precede resource endpoints.
///
/// # Example
///
/// ```ignore
/// let converter = Converter::new()
///     .visitor(DtoVisitor::with_filter(MarkerFilter::new().dto("Dto")))
///     .visitor(ControllerVisitor::new());
///
/// let conversion = converter.convert(&units)?;
/// ```
pub struct Converter {
    visitors: Vec<Box<dyn Visitor>>,
}

impl Converter {
    /// Create a converter with no visitors.
    pub fn new() -> Self {
        Self {
            visitors: Vec::new(),
        }
    }

    /// DTOs, then controller endpoints, then resource endpoints, all unfiltered.
    pub fn standard() -> Self {
        Self::new()
            .visitor(DtoVisitor::new())
            .visitor(ControllerVisitor::new())
            .visitor(ResourceVisitor::new())
    }

    pub fn visitor(mut self, visitor: impl Visitor + 'static) -> Self {
        self.visitors.push(Box::new(visitor));
        self
    }

    /// Normalize all units into one result.
    ///
    /// # Errors
    ///
    /// Returns the first fatal error raised by a visitor. Nothing is
    /// returned in that case, not even the DTOs collected so far.
    pub fn convert<'a>(&self, units: impl IntoIterator<Item = &'a SourceUnit>) -> Result<Conversion> {
        let units: Vec<&SourceUnit> = units.into_iter().collect();
        let mut ctx = ConvertContext::new();

        for visitor in &self.visitors {
            debug!(visitor = visitor.name(), units = units.len(), "running visitor");
            for unit in &units {
                visitor.visit(unit, &mut ctx)?;
            }
        }

        info!(
            dtos = ctx.dto_list.len(),
            endpoints = ctx.endpoints.len(),
            warnings = ctx.warning_count(),
            "normalized source units"
        );

        let (result, diagnostics) = ctx.into_result();
        Ok(Conversion {
            result,
            diagnostics,
        })
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::standard()
    }
}

/// A successful conversion with its non-fatal diagnostics.
#[derive(Debug)]
pub struct Conversion {
    result: ConverterResult,
    diagnostics: Vec<Diagnostic>,
}

impl Conversion {
    pub fn result(&self) -> &ConverterResult {
        &self.result
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Warning))
    }

    pub fn into_result(self) -> ConverterResult {
        self.result
    }
}
