//! TypeScript generator.

use dtogen_codegen::{
    GeneratorOptions, Indent, OutputFile, OutputFilesProcessor, OutputWriter, Renderable,
    RenderedEndpoint, RenderedOutput, RenderedType, ResolveContext, Result, TypeOwner,
    TypeRenderer,
};
use dtogen_ir::{ApiEndpoint, ConverterResult, DtoEnum, DtoList, DtoType};
use tracing::{debug, info};

use crate::api_client::{FunctionNames, endpoint_function, function_name};
use crate::ast::{Enum, Field, ObjectType, TypeAlias};
use crate::{PropertyNameChain, TypeScriptTypeResolver};

/// Renders a [`ConverterResult`] as TypeScript.
///
/// Every DTO and endpoint is rendered before anything is written, so a
/// resolution failure yields an error and no files. The [`GeneratorOptions`]
/// set here reach every resolver in the chain.
pub struct TypeScriptGenerator {
    writer: Box<dyn OutputWriter>,
    resolver: TypeScriptTypeResolver,
    processors: OutputFilesProcessor,
    property_names: PropertyNameChain,
    options: GeneratorOptions,
}

impl TypeScriptGenerator {
    pub fn new(writer: impl OutputWriter + 'static, resolver: TypeScriptTypeResolver) -> Self {
        Self {
            writer: Box::new(writer),
            resolver,
            processors: OutputFilesProcessor::new(),
            property_names: PropertyNameChain::new(),
            options: GeneratorOptions::default(),
        }
    }

    pub fn processors(mut self, processors: OutputFilesProcessor) -> Self {
        self.processors = processors;
        self
    }

    pub fn property_names(mut self, property_names: PropertyNameChain) -> Self {
        self.property_names = property_names;
        self
    }

    pub fn options(mut self, options: GeneratorOptions) -> Self {
        self.options = options;
        self
    }

    /// Render all DTOs and endpoints and lay them out as files.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedType`](crate::Error::UnsupportedType)
    /// for the first type no resolver accepts.
    pub fn generate(&self, result: &ConverterResult) -> Result<Vec<OutputFile>> {
        let dto_list = result.dto_list();
        let mut output = RenderedOutput::default();

        for dto in dto_list.iter() {
            let code = self.render_dto(dto, dto_list)?;
            output.types.push(RenderedType { dto, code });
        }
        let mut names = FunctionNames::default();
        for endpoint in result.endpoints().iter() {
            let code = self.render_endpoint_as(names.next(endpoint), endpoint, dto_list)?;
            output.endpoints.push(RenderedEndpoint { endpoint, code });
        }

        let files = self.processors.process(self.writer.write(&output, dto_list));
        info!(
            types = output.types.len(),
            endpoints = output.endpoints.len(),
            files = files.len(),
            "generated typescript"
        );
        Ok(files)
    }

    /// Render one DTO as an object type, enum or union alias.
    pub fn render_dto(&self, dto: &DtoType, dto_list: &DtoList) -> Result<String> {
        debug!(title = %dto.title, "rendering dto");
        if let Some(enumeration) = &dto.enum_type {
            return Ok(self.render_enum(&dto.title, enumeration));
        }

        let ctx = self.context(TypeOwner::Dto(dto), dto_list);
        let mut object = ObjectType::new(&dto.title);
        if let Some(param) = &dto.generic_param {
            object = object.generic(param);
        }
        for property in &dto.properties {
            let ty = self.resolver.render(&property.ty, &ctx)?;
            object = object.field(Field::new(self.property_names.generate(property), ty));
        }
        Ok(object.render(Indent::TYPESCRIPT))
    }

    fn render_enum(&self, title: &str, enumeration: &DtoEnum) -> String {
        // TS enums hold only numbers and strings, so the rest become a union alias
        if self.options.use_types_instead_of_enums
            || enumeration.has_null_member()
            || enumeration.has_bool_member()
        {
            let values = enumeration.members.iter().map(|m| m.value.to_string());
            return TypeAlias::union(title, values).render(Indent::TYPESCRIPT);
        }

        enumeration
            .members
            .iter()
            .fold(Enum::new(title), |e, m| e.member(&m.name, m.value.to_string()))
            .render(Indent::TYPESCRIPT)
    }

    /// Render one endpoint as an axios client function.
    pub fn render_endpoint(&self, endpoint: &ApiEndpoint, dto_list: &DtoList) -> Result<String> {
        self.render_endpoint_as(function_name(endpoint), endpoint, dto_list)
    }

    fn render_endpoint_as(&self, name: String, endpoint: &ApiEndpoint, dto_list: &DtoList) -> Result<String> {
        debug!(method = %endpoint.method, path = %endpoint.path, %name, "rendering endpoint");
        let ctx = self.context(TypeOwner::Endpoint(endpoint), dto_list);
        let function = endpoint_function(name, endpoint, &self.resolver, &ctx)?;
        Ok(function.render(Indent::TYPESCRIPT))
    }

    fn context<'a>(&self, owner: TypeOwner<'a>, dto_list: &'a DtoList) -> ResolveContext<'a> {
        ResolveContext::new(owner, dto_list).with_options(self.options)
    }
}
