use dtogen_codegen::{CodeFragment, Renderable};

/// An ES module import with single-quoted specifier.
#[derive(Debug, Clone)]
pub struct Import {
    from: String,
    default: Option<String>,
    named: Vec<String>,
}

impl Import {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            default: None,
            named: Vec::new(),
        }
    }

    pub fn default(mut self, name: impl Into<String>) -> Self {
        self.default = Some(name.into());
        self
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let line = match (&self.default, self.named.is_empty()) {
            (Some(def), true) => format!("import {def} from '{}';", self.from),
            (Some(def), false) => format!(
                "import {def}, {{ {} }} from '{}';",
                self.named.join(", "),
                self.from
            ),
            (None, false) => format!("import {{ {} }} from '{}';", self.named.join(", "), self.from),
            (None, true) => format!("import '{}';", self.from),
        };
        vec![CodeFragment::line(line)]
    }
}

#[cfg(test)]
mod tests {
    use dtogen_codegen::Indent;

    use super::*;

    #[test]
    fn test_import_shapes() {
        let render = |import: Import| import.render(Indent::TYPESCRIPT);
        assert_eq!(render(Import::new("axios").default("axios")), "import axios from 'axios';\n");
        assert_eq!(
            render(Import::new("./full-name").named("FullName")),
            "import { FullName } from './full-name';\n"
        );
        assert_eq!(
            render(Import::new("./a").default("a").named("B").named("C")),
            "import a, { B, C } from './a';\n"
        );
        assert_eq!(render(Import::new("./polyfill")), "import './polyfill';\n");
    }
}
