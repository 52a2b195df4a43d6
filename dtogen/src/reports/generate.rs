//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Line, Output, Report};

/// Report data from code generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Non-fatal normalization warnings.
    pub warnings: Vec<String>,
    pub dto_count: usize,
    pub endpoint_count: usize,
    pub result: GenerationResult,
}

#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written below `output_dir`.
    Written {
        output_dir: PathBuf,
        files: Vec<WrittenFile>,
    },
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
}

#[derive(Debug)]
pub struct WrittenFile {
    pub path: String,
    /// False when the file on disk already had this content.
    pub changed: bool,
}

#[derive(Debug)]
pub struct PreviewFile {
    pub path: String,
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.line(Line::Warning(warning));
        }
        if !self.warnings.is_empty() {
            out.line(Line::Blank);
        }

        match &self.result {
            GenerationResult::Written { output_dir, files } => {
                self.render_written(out, output_dir, files)
            }
            GenerationResult::Preview(files) => self.render_preview(out, files),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, output_dir: &std::path::Path, files: &[WrittenFile]) {
        out.line(Line::Text(&format!(
            "{} DTO{}, {} endpoint{}",
            self.dto_count,
            plural(self.dto_count),
            self.endpoint_count,
            plural(self.endpoint_count)
        )));
        out.line(Line::Blank);
        out.line(Line::Field("Generated", &output_dir.display().to_string()));

        let changed: Vec<&WrittenFile> = files.iter().filter(|f| f.changed).collect();
        for file in &changed {
            out.line(Line::Added(&file.path));
        }
        let unchanged = files.len() - changed.len();
        if unchanged > 0 {
            out.line(Line::Text(&format!(
                "{} file{} unchanged",
                unchanged,
                plural(unchanged)
            )));
        }
    }

    fn render_preview(&self, out: &mut dyn Output, files: &[PreviewFile]) {
        for file in files {
            out.line(Line::Divider(&file.path));
            out.line(Line::Text(&file.content));
        }

        out.line(Line::Divider("Summary"));
        out.line(Line::Text(&format!(
            "{} file{} would be generated",
            files.len(),
            plural(files.len())
        )));
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}
