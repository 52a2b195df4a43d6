use dtogen_codegen::{CodeBuilder, FileNameGenerator, ImportCollector, ImportGenerator};

use crate::ast::Import;

/// ES module imports for split output: `import { B } from './b';`.
/// Endpoint files also import the axios default export.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeScriptImportGenerator;

impl ImportGenerator for TypeScriptImportGenerator {
    fn type_imports(&self, dependencies: &[String], file_names: &dyn FileNameGenerator) -> ImportCollector {
        let mut imports = ImportCollector::new();
        for dependency in dependencies {
            imports.add(&file_names.module_path(dependency), dependency);
        }
        imports
    }

    fn endpoint_imports(&self, dependencies: &[String], file_names: &dyn FileNameGenerator) -> ImportCollector {
        let mut imports = ImportCollector::new();
        imports.add_default("axios", "axios");
        imports.merge(&self.type_imports(dependencies, file_names));
        imports
    }

    fn render(&self, imports: &ImportCollector) -> String {
        let mut builder = CodeBuilder::typescript();
        for (module, binding) in imports.defaults() {
            builder.emit(&Import::new(module).default(binding));
        }
        for (module, symbols) in imports.iter() {
            let import = symbols
                .iter()
                .fold(Import::new(module), |import, symbol| import.named(symbol));
            builder.emit(&import);
        }
        builder.build()
    }
}
