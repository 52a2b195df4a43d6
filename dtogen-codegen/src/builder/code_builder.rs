//! Indentation-aware text buffer.

use super::{CodeFragment, Indent, Renderable};

/// Fluent API for building indented code.
///
/// Supports consuming methods (returning `Self`) for chaining and
/// mutable methods prefixed with `push_` for use inside loops.
///
/// # Example
///
/// ```
/// use dtogen_codegen::builder::CodeBuilder;
///
/// let code = CodeBuilder::typescript()
///     .line("export type User = {")
///     .indent()
///     .line("id: string;")
///     .dedent()
///     .line("};")
///     .build();
///
/// assert_eq!(code, "export type User = {\n  id: string;\n};\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            level: 0,
            indent,
            buffer: String::new(),
        }
    }

    pub fn typescript() -> Self {
        Self::new(Indent::TYPESCRIPT)
    }

    pub fn push_line(&mut self, s: &str) -> &mut Self {
        if !s.is_empty() {
            self.write_indent();
            self.buffer.push_str(s);
        }
        self.buffer.push('\n');
        self
    }

    pub fn push_indent(&mut self) -> &mut Self {
        self.level += 1;
        self
    }

    pub fn push_dedent(&mut self) -> &mut Self {
        self.level = self.level.saturating_sub(1);
        self
    }

    /// Emit a [`Renderable`] node at the current indentation.
    pub fn emit(&mut self, node: &(impl Renderable + ?Sized)) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                if let Some(close) = close {
                    self.push_line(&close);
                }
            }
            CodeFragment::Indent(fragments) => {
                self.push_indent();
                for f in fragments {
                    self.apply_fragment(f);
                }
                self.push_dedent();
            }
        }
    }

    pub fn line(mut self, s: &str) -> Self {
        self.push_line(s);
        self
    }

    pub fn indent(mut self) -> Self {
        self.push_indent();
        self
    }

    pub fn dedent(mut self) -> Self {
        self.push_dedent();
        self
    }

    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        let unit = self.indent.unit();
        for _ in 0..self.level {
            self.buffer.push_str(&unit);
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::typescript()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Alias;

    impl Renderable for Alias {
        fn to_fragments(&self) -> Vec<CodeFragment> {
            vec![
                CodeFragment::line("// Role of a user"),
                CodeFragment::line("export type Role = 'admin' | 'reader';"),
            ]
        }
    }

    #[test]
    fn test_empty_line_has_no_indent() {
        let code = CodeBuilder::typescript().indent().line("").line("x").build();
        assert_eq!(code, "\n  x\n");
    }

    #[test]
    fn test_emit_nested_fragments() {
        let mut builder = CodeBuilder::new(Indent::Spaces(4));
        builder.emit(&CodeFragment::block(
            "export const f = () => {",
            vec![
                CodeFragment::line("return axios"),
                CodeFragment::indent(vec![CodeFragment::line(".get(`/x`);")]),
            ],
            Some("}".into()),
        ));
        assert_eq!(
            builder.build(),
            "export const f = () => {\n    return axios\n        .get(`/x`);\n}\n"
        );
    }

    #[test]
    fn test_render_slice() {
        let code = [Alias, Alias].render(Indent::TYPESCRIPT);
        assert_eq!(code.matches("export type Role").count(), 2);
        assert!(code.starts_with("// Role of a user\n"));
    }
}
