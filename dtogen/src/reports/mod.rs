//! Report data structures for commands.
//!
//! Commands collect what happened into a report, then render it to an
//! output target.

mod check;
mod generate;
mod output;

pub use check::CheckReport;
pub use generate::{GenerateReport, GenerationResult, PreviewFile, WrittenFile};
pub use output::{Report, TerminalOutput};

#[cfg(test)]
pub(crate) use output::testing::RecordingOutput;
