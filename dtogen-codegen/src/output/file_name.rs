use dtogen_core::to_kebab_case;

/// Maps a DTO title to the file that holds it.
pub trait FileNameGenerator {
    /// File path relative to the output root, with extension.
    fn file_name(&self, title: &str) -> String;

    /// Relative module specifier used by sibling files to import it.
    fn module_path(&self, title: &str) -> String;
}

/// `UserOutput` becomes `user-output{extension}`.
#[derive(Debug, Clone)]
pub struct KebabCaseFileNameGenerator {
    extension: String,
}

impl KebabCaseFileNameGenerator {
    pub fn new(extension: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
        }
    }
}

impl FileNameGenerator for KebabCaseFileNameGenerator {
    fn file_name(&self, title: &str) -> String {
        format!("{}{}", to_kebab_case(title), self.extension)
    }

    fn module_path(&self, title: &str) -> String {
        format!("./{}", to_kebab_case(title))
    }
}
