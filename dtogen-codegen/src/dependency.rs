//! DTO-to-DTO references, used to emit imports when output is split
//! into one file per type.

use std::collections::HashSet;

use dtogen_ir::{ApiEndpoint, DtoList, DtoType, TypeExpr};

/// Computes which other DTOs a DTO or endpoint refers to.
///
/// Only names present in the [`DtoList`] count. Generic placeholders,
/// primitives and names handled by resolvers are not dependencies.
#[derive(Debug, Clone, Copy)]
pub struct DtoTypeDependencyCalculator<'a> {
    dto_list: &'a DtoList,
}

impl<'a> DtoTypeDependencyCalculator<'a> {
    pub fn new(dto_list: &'a DtoList) -> Self {
        Self { dto_list }
    }

    /// Titles referenced by a DTO's properties, in first-seen order.
    /// The DTO itself is never included.
    pub fn dto_dependencies(&self, dto: &DtoType) -> Vec<String> {
        let mut visited = HashSet::from([dto.title.as_str()]);
        let mut out = Vec::new();
        for property in &dto.properties {
            self.collect(&property.ty, dto.generic_param.as_deref(), &mut visited, &mut out);
        }
        out
    }

    /// Titles referenced by an endpoint's params and output.
    pub fn endpoint_dependencies(&self, endpoint: &ApiEndpoint) -> Vec<String> {
        let mut visited = HashSet::new();
        let mut out = Vec::new();
        let types = endpoint
            .params
            .iter()
            .map(|p| &p.ty)
            .chain(endpoint.output.as_ref());
        for ty in types {
            self.collect(ty, None, &mut visited, &mut out);
        }
        out
    }

    fn collect<'t>(
        &self,
        ty: &'t TypeExpr,
        generic_param: Option<&str>,
        visited: &mut HashSet<&'t str>,
        out: &mut Vec<String>,
    ) {
        for single in ty.singles() {
            let name = single.name.as_str();
            if generic_param == Some(name) || !self.dto_list.has(name) {
                continue;
            }
            if visited.insert(name) {
                out.push(name.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use dtogen_ir::{ApiEndpointParam, DtoProperty, HttpMethod, ParamSource, SingleType};

    use super::*;

    fn list() -> DtoList {
        [
            DtoType::new("A").property(DtoProperty::new("b", TypeExpr::single("B"))),
            DtoType::new("B"),
            DtoType::new("Node")
                .property(DtoProperty::new("parent", TypeExpr::nullable(TypeExpr::single("Node"))))
                .property(DtoProperty::new(
                    "children",
                    TypeExpr::array_of(TypeExpr::union([TypeExpr::single("A"), TypeExpr::single("B")])),
                ))
                .property(DtoProperty::new("again", TypeExpr::single("A"))),
            DtoType::new("Response")
                .generic("T")
                .property(DtoProperty::new("data", TypeExpr::single("T")))
                .property(DtoProperty::new("when", TypeExpr::single("DateTime"))),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_direct_dependencies() {
        let list = list();
        let calc = DtoTypeDependencyCalculator::new(&list);
        assert_eq!(calc.dto_dependencies(list.get("A").unwrap()), vec!["B"]);
        assert!(calc.dto_dependencies(list.get("B").unwrap()).is_empty());
    }

    #[test]
    fn test_self_reference_and_duplicates() {
        let list = list();
        let calc = DtoTypeDependencyCalculator::new(&list);
        assert_eq!(calc.dto_dependencies(list.get("Node").unwrap()), vec!["A", "B"]);
    }

    #[test]
    fn test_placeholders_and_unknown_names_are_skipped() {
        let list = list();
        let calc = DtoTypeDependencyCalculator::new(&list);
        assert!(calc.dto_dependencies(list.get("Response").unwrap()).is_empty());
    }

    #[test]
    fn test_endpoint_dependencies() {
        let list = list();
        let endpoint = ApiEndpoint::new("x", "/x/{id}", HttpMethod::Post)
            .param(ApiEndpointParam::new("id", TypeExpr::single("int"), ParamSource::Path))
            .input(TypeExpr::single("A"))
            .output(Some(
                SingleType::generic("Response", vec![TypeExpr::array_of(TypeExpr::single("B"))]).into(),
            ));
        let calc = DtoTypeDependencyCalculator::new(&list);
        assert_eq!(calc.endpoint_dependencies(&endpoint), vec!["A", "Response", "B"]);
    }
}
