//! Membership predicates for DTOs and endpoints.

use dtogen_syntax::Marker;

/// Decides which declarations take part in normalization.
///
/// Both predicates look only at the markers attached to a declaration
/// (a class for DTOs and resources, a method for controller endpoints).
pub trait DeclarationFilter {
    fn is_dto(&self, markers: &[Marker]) -> bool;

    fn is_endpoint(&self, markers: &[Marker]) -> bool;
}

/// Accepts every declaration.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl DeclarationFilter for AcceptAll {
    fn is_dto(&self, _markers: &[Marker]) -> bool {
        true
    }

    fn is_endpoint(&self, _markers: &[Marker]) -> bool {
        true
    }
}

/// Accepts only declarations carrying a named marker.
///
/// A predicate without a marker name accepts everything, so DTO extraction
/// can be opt-in while endpoints are not (or the other way round).
#[derive(Debug, Clone, Default)]
pub struct MarkerFilter {
    dto: Option<String>,
    endpoint: Option<String>,
}

impl MarkerFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dto(mut self, marker: impl Into<String>) -> Self {
        self.dto = Some(marker.into());
        self
    }

    pub fn endpoint(mut self, marker: impl Into<String>) -> Self {
        self.endpoint = Some(marker.into());
        self
    }

    fn accepts(required: Option<&str>, markers: &[Marker]) -> bool {
        match required {
            Some(name) => markers.iter().any(|m| m.is(name)),
            None => true,
        }
    }
}

impl DeclarationFilter for MarkerFilter {
    fn is_dto(&self, markers: &[Marker]) -> bool {
        Self::accepts(self.dto.as_deref(), markers)
    }

    fn is_endpoint(&self, markers: &[Marker]) -> bool {
        Self::accepts(self.endpoint.as_deref(), markers)
    }
}
