//! Where reports go.

use std::fmt;

/// One line of report output, tagged with what it means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    Text(&'a str),
    Field(&'a str, &'a str),
    /// A file that was created or changed.
    Added(&'a str),
    Item(&'a str),
    Warning(&'a str),
    Info(&'a str),
    Divider(&'a str),
    Blank,
}

impl fmt::Display for Line<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Line::Text(text) => write!(f, "{text}"),
            Line::Field(key, value) => write!(f, "{key}: {value}"),
            Line::Added(text) => write!(f, "  + {text}"),
            Line::Item(text) => write!(f, "  - {text}"),
            Line::Warning(msg) => write!(f, "warning: {msg}"),
            Line::Info(msg) => write!(f, "info: {msg}"),
            Line::Divider(label) => write!(f, "── {label} ──"),
            Line::Blank => Ok(()),
        }
    }
}

pub trait Output {
    fn line(&mut self, line: Line<'_>);
}

/// A report that can render itself to an output.
pub trait Report {
    fn render(&self, out: &mut dyn Output);
}

/// Stdout, with warnings on stderr.
#[derive(Debug, Default)]
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Output for TerminalOutput {
    fn line(&mut self, line: Line<'_>) {
        match line {
            Line::Warning(_) => eprintln!("{line}"),
            _ => println!("{line}"),
        }
    }
}
