use dtogen_ir::DtoList;
use tracing::debug;

use super::{
    FileNameGenerator, ImportGenerator, OutputFile, OutputWriter, RenderedOutput, join_sections,
};
use crate::DtoTypeDependencyCalculator;

/// Writes each DTO to its own file and all endpoints to one more file.
///
/// Each file starts with imports for the DTOs it references, computed by
/// [`DtoTypeDependencyCalculator`].
pub struct EntityPerClassOutputWriter {
    file_names: Box<dyn FileNameGenerator>,
    imports: Box<dyn ImportGenerator>,
    endpoints_title: String,
}

impl EntityPerClassOutputWriter {
    pub fn new(
        file_names: impl FileNameGenerator + 'static,
        imports: impl ImportGenerator + 'static,
    ) -> Self {
        Self {
            file_names: Box::new(file_names),
            imports: Box::new(imports),
            endpoints_title: "ApiClient".to_string(),
        }
    }

    /// Title passed to the file-name generator for the endpoints file.
    pub fn endpoints_title(mut self, title: impl Into<String>) -> Self {
        self.endpoints_title = title.into();
        self
    }
}

impl OutputWriter for EntityPerClassOutputWriter {
    fn write(&self, output: &RenderedOutput<'_>, dto_list: &DtoList) -> Vec<OutputFile> {
        let calculator = DtoTypeDependencyCalculator::new(dto_list);
        let mut files = Vec::with_capacity(output.types.len() + 1);

        for rendered in &output.types {
            let dependencies = calculator.dto_dependencies(rendered.dto);
            let imports = self
                .imports
                .render(&self.imports.type_imports(&dependencies, self.file_names.as_ref()));
            let path = self.file_names.file_name(&rendered.dto.title);
            debug!(%path, dependencies = dependencies.len(), "writing type file");
            files.push(OutputFile::new(
                path,
                join_sections([imports.as_str(), rendered.code.as_str()]),
            ));
        }

        if !output.endpoints.is_empty() {
            let mut dependencies: Vec<String> = Vec::new();
            for rendered in &output.endpoints {
                for dep in calculator.endpoint_dependencies(rendered.endpoint) {
                    if !dependencies.contains(&dep) {
                        dependencies.push(dep);
                    }
                }
            }
            let imports = self
                .imports
                .render(&self.imports.endpoint_imports(&dependencies, self.file_names.as_ref()));
            let sections = std::iter::once(imports.as_str())
                .chain(output.endpoints.iter().map(|e| e.code.as_str()));
            let path = self.file_names.file_name(&self.endpoints_title);
            debug!(%path, endpoints = output.endpoints.len(), "writing endpoints file");
            files.push(OutputFile::new(path, join_sections(sections)));
        }

        files
    }
}
