use tracing::trace;

use super::OutputFile;

/// Text of the notice placed at the top of every generated file.
pub const AUTOGENERATED_NOTICE: &str = "THE FILE WAS AUTOGENERATED USING DTOGEN. PLEASE DO NOT EDIT IT!";

/// A transform applied to each generated file.
pub trait OutputFileProcessor {
    fn process(&self, file: OutputFile) -> OutputFile;
}

/// Applies processors in order to every file.
#[derive(Default)]
pub struct OutputFilesProcessor {
    processors: Vec<Box<dyn OutputFileProcessor>>,
}

impl OutputFilesProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, processor: impl OutputFileProcessor + 'static) -> Self {
        self.processors.push(Box::new(processor));
        self
    }

    pub fn process(&self, files: Vec<OutputFile>) -> Vec<OutputFile> {
        files
            .into_iter()
            .map(|file| {
                trace!(path = %file.path, processors = self.processors.len(), "post-processing");
                self.processors.iter().fold(file, |file, p| p.process(file))
            })
            .collect()
    }
}

/// Prepends fixed text followed by a blank line.
#[derive(Debug, Clone)]
pub struct PrependText {
    text: String,
}

impl PrependText {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl OutputFileProcessor for PrependText {
    fn process(&self, mut file: OutputFile) -> OutputFile {
        let text = self.text.trim_end_matches('\n');
        if !text.is_empty() {
            file.content = format!("{text}\n\n{}", file.content);
        }
        file
    }
}

/// Prepends [`AUTOGENERATED_NOTICE`] as a line comment.
#[derive(Debug, Clone)]
pub struct PrependAutogeneratedNotice {
    inner: PrependText,
}

impl PrependAutogeneratedNotice {
    /// `comment` is the line-comment token of the target language, e.g. `//`.
    pub fn new(comment: &str) -> Self {
        Self {
            inner: PrependText::new(format!("{comment} {AUTOGENERATED_NOTICE}")),
        }
    }
}

impl OutputFileProcessor for PrependAutogeneratedNotice {
    fn process(&self, file: OutputFile) -> OutputFile {
        self.inner.process(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_processors_run_in_order() {
        let processors = OutputFilesProcessor::new()
            .with(PrependText::new("import axios from 'axios';\n"))
            .with(PrependAutogeneratedNotice::new("//"));
        let files = processors.process(vec![OutputFile::new("a.ts", "export type A = {};\n")]);

        assert_eq!(
            files[0].content,
            "// THE FILE WAS AUTOGENERATED USING DTOGEN. PLEASE DO NOT EDIT IT!\n\nimport axios from 'axios';\n\nexport type A = {};\n"
        );
    }

    #[test]
    fn test_empty_text_is_noop() {
        let file = PrependText::new("").process(OutputFile::new("a.ts", "x\n"));
        assert_eq!(file.content, "x\n");
    }
}
