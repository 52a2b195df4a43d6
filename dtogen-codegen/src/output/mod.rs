//! Turning rendered declarations into output files.
//!
//! A backend renders every DTO and endpoint to text, then hands the
//! [`RenderedOutput`] to an [`OutputWriter`] which decides the file layout.
//! [`OutputFilesProcessor`] applies text transforms to the result.

mod entity_per_class;
mod file_name;
mod processor;
mod single_file;

use std::path::Path;

use dtogen_ir::{ApiEndpoint, DtoList, DtoType};

pub use entity_per_class::EntityPerClassOutputWriter;
pub use file_name::{FileNameGenerator, KebabCaseFileNameGenerator};
pub use processor::{
    AUTOGENERATED_NOTICE, OutputFileProcessor, OutputFilesProcessor, PrependAutogeneratedNotice,
    PrependText,
};
pub use single_file::SingleFileOutputWriter;

use crate::ImportCollector;

/// A generated file, relative to the output root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    pub path: String,
    pub content: String,
}

impl OutputFile {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Place this file under `root` for writing to disk.
    pub fn into_file(self, root: &Path) -> dtogen_core::File {
        dtogen_core::File::new(root.join(&self.path), self.content)
    }
}

/// Rendered text of one DTO.
#[derive(Debug, Clone)]
pub struct RenderedType<'a> {
    pub dto: &'a DtoType,
    pub code: String,
}

/// Rendered text of one endpoint.
#[derive(Debug, Clone)]
pub struct RenderedEndpoint<'a> {
    pub endpoint: &'a ApiEndpoint,
    pub code: String,
}

/// Everything a backend rendered, in emission order.
#[derive(Debug, Clone, Default)]
pub struct RenderedOutput<'a> {
    pub types: Vec<RenderedType<'a>>,
    pub endpoints: Vec<RenderedEndpoint<'a>>,
}

/// Decides how rendered declarations are laid out across files.
pub trait OutputWriter {
    fn write(&self, output: &RenderedOutput<'_>, dto_list: &DtoList) -> Vec<OutputFile>;
}

/// Language-specific import statements.
pub trait ImportGenerator {
    /// Imports needed by a file holding a DTO that references `dependencies`.
    fn type_imports(&self, dependencies: &[String], file_names: &dyn FileNameGenerator) -> ImportCollector;

    /// Imports needed by a file holding endpoints.
    fn endpoint_imports(
        &self,
        dependencies: &[String],
        file_names: &dyn FileNameGenerator,
    ) -> ImportCollector {
        self.type_imports(dependencies, file_names)
    }

    /// Render an import block. Empty collectors render as an empty string.
    fn render(&self, imports: &ImportCollector) -> String;
}

/// Join sections with one blank line between them. Empty sections are skipped.
pub(crate) fn join_sections<'s>(sections: impl IntoIterator<Item = &'s str>) -> String {
    sections
        .into_iter()
        .filter(|s| !s.is_empty())
        .map(|s| s.trim_end_matches('\n'))
        .collect::<Vec<_>>()
        .join("\n\n")
        + "\n"
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Renders `use {symbols} from {module}` lines.
    pub struct PlainImports;

    impl ImportGenerator for PlainImports {
        fn type_imports(&self, dependencies: &[String], file_names: &dyn FileNameGenerator) -> ImportCollector {
            let mut imports = ImportCollector::new();
            for dep in dependencies {
                imports.add(&file_names.module_path(dep), dep);
            }
            imports
        }

        fn endpoint_imports(&self, dependencies: &[String], file_names: &dyn FileNameGenerator) -> ImportCollector {
            let mut imports = self.type_imports(dependencies, file_names);
            imports.add_default("http", "http");
            imports
        }

        fn render(&self, imports: &ImportCollector) -> String {
            let mut out = String::new();
            for (module, binding) in imports.defaults() {
                out.push_str(&format!("use {binding} from {module}\n"));
            }
            for (module, symbols) in imports.iter() {
                let symbols: Vec<&str> = symbols.iter().map(String::as_str).collect();
                out.push_str(&format!("use {} from {module}\n", symbols.join(", ")));
            }
            out
        }
    }
}
