//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Line, Output, Report};

/// Report data from a dry normalization and resolution pass.
#[derive(Debug)]
pub struct CheckReport {
    pub config_path: PathBuf,
    pub input_count: usize,
    pub dto_count: usize,
    pub endpoint_count: usize,
    /// Number of files generation would produce.
    pub file_count: usize,
    pub warnings: Vec<String>,
    pub infos: Vec<String>,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.line(Line::Warning(warning));
        }
        for info in &self.infos {
            out.line(Line::Info(info));
        }
        if !self.warnings.is_empty() || !self.infos.is_empty() {
            out.line(Line::Blank);
        }

        out.line(Line::Text(&format!("✓ {} is valid", self.config_path.display())));
        out.line(Line::Blank);
        out.line(Line::Item(&format!("{} input file(s)", self.input_count)));
        out.line(Line::Item(&format!("{} DTO(s)", self.dto_count)));
        out.line(Line::Item(&format!("{} endpoint(s)", self.endpoint_count)));
        out.line(Line::Item(&format!("{} output file(s)", self.file_count)));
    }
}
