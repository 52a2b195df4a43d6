use dtogen_ir::DtoList;
use tracing::debug;

use super::{
    FileNameGenerator, ImportGenerator, OutputFile, OutputWriter, RenderedOutput, join_sections,
};

/// Writes every type, then every endpoint, into one file.
pub struct SingleFileOutputWriter {
    path: String,
    imports: Box<dyn ImportGenerator>,
}

impl SingleFileOutputWriter {
    pub fn new(path: impl Into<String>, imports: impl ImportGenerator + 'static) -> Self {
        Self {
            path: path.into(),
            imports: Box::new(imports),
        }
    }
}

/// Everything lives in one file, so there are no sibling modules.
struct NoSiblings;

impl FileNameGenerator for NoSiblings {
    fn file_name(&self, title: &str) -> String {
        title.to_string()
    }

    fn module_path(&self, title: &str) -> String {
        title.to_string()
    }
}

impl OutputWriter for SingleFileOutputWriter {
    fn write(&self, output: &RenderedOutput<'_>, _dto_list: &DtoList) -> Vec<OutputFile> {
        let imports = if output.endpoints.is_empty() {
            String::new()
        } else {
            self.imports
                .render(&self.imports.endpoint_imports(&[], &NoSiblings))
        };

        let sections = std::iter::once(imports.as_str())
            .chain(output.types.iter().map(|t| t.code.as_str()))
            .chain(output.endpoints.iter().map(|e| e.code.as_str()));

        debug!(
            path = %self.path,
            types = output.types.len(),
            endpoints = output.endpoints.len(),
            "writing single output file"
        );
        vec![OutputFile::new(&self.path, join_sections(sections))]
    }
}
