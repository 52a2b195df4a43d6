//! Accumulator passed through the visitors.

use dtogen_ir::{ApiEndpoint, ApiEndpointList, ConverterResult, DtoList, DtoType};
use tracing::debug;

use crate::{Diagnostic, Severity};

/// State built up while normalizing source units.
#[derive(Debug, Default)]
pub struct ConvertContext {
    pub dto_list: DtoList,
    pub endpoints: ApiEndpointList,
    pub diagnostics: Vec<Diagnostic>,
}

impl ConvertContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a DTO. A DTO with the same title is replaced in place.
    pub fn add_dto(&mut self, dto: DtoType) {
        let title = dto.title.clone();
        if self.dto_list.add(dto).is_some() {
            debug!(dto = %title, "replaced earlier declaration with the same title");
        }
    }

    pub fn add_endpoint(&mut self, endpoint: ApiEndpoint) {
        debug!(
            method = %endpoint.method,
            path = %endpoint.path,
            "extracted endpoint"
        );
        self.endpoints.add(endpoint);
    }

    pub fn add_warning(&mut self, visitor: &str, location: &str, message: impl Into<String>) {
        self.diagnostics
            .push(Diagnostic::warning(visitor, message).at(location));
    }

    pub fn add_info(&mut self, visitor: &str, location: &str, message: impl Into<String>) {
        self.diagnostics
            .push(Diagnostic::info(visitor, message).at(location));
    }

    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Warning))
            .count()
    }

    pub fn into_result(self) -> (ConverterResult, Vec<Diagnostic>) {
        (
            ConverterResult::new(self.dto_list, self.endpoints),
            self.diagnostics,
        )
    }
}

#[cfg(test)]
mod tests {
    use dtogen_ir::{DtoProperty, HttpMethod, TypeExpr};

    use super::*;

    #[test]
    fn test_add_dto_replaces_same_title() {
        let mut ctx = ConvertContext::new();
        ctx.add_dto(DtoType::new("User"));
        ctx.add_dto(DtoType::new("User").property(DtoProperty::new("id", TypeExpr::single("int"))));

        assert_eq!(ctx.dto_list.len(), 1);
        assert_eq!(ctx.dto_list.get("User").unwrap().properties.len(), 1);
    }

    #[test]
    fn test_diagnostic_counts() {
        let mut ctx = ConvertContext::new();
        ctx.add_warning("dto", "User::ids", "malformed type hint");
        ctx.add_info("controller", "UserController::show", "parameter ignored");
        ctx.add_endpoint(ApiEndpoint::new("show", "/users", HttpMethod::Get));

        assert!(ctx.has_warnings());
        assert_eq!(ctx.warning_count(), 1);

        let (result, diagnostics) = ctx.into_result();
        assert_eq!(result.endpoints().len(), 1);
        assert_eq!(diagnostics.len(), 2);
    }
}
