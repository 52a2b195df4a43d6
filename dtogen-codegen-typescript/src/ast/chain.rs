use dtogen_codegen::{CodeFragment, Renderable};

/// A fluent call chain with one call per line:
///
/// ```text
/// return axios
///   .get<User>(`/users`)
///   .then(response => response.data);
/// ```
#[derive(Debug, Clone)]
pub struct MethodChain {
    base: String,
    calls: Vec<String>,
    returned: bool,
}

impl MethodChain {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            calls: Vec::new(),
            returned: false,
        }
    }

    /// Add `.method(args)`.
    pub fn call(mut self, method: impl AsRef<str>, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();
        self.calls.push(format!(".{}({})", method.as_ref(), args.join(", ")));
        self
    }

    /// Prefix the chain with `return`.
    pub fn returned(mut self) -> Self {
        self.returned = true;
        self
    }
}

impl Renderable for MethodChain {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let head = if self.returned {
            format!("return {}", self.base)
        } else {
            self.base.clone()
        };

        let Some((last, init)) = self.calls.split_last() else {
            return vec![CodeFragment::line(format!("{head};"))];
        };

        let mut calls: Vec<CodeFragment> = init.iter().map(CodeFragment::line).collect();
        calls.push(CodeFragment::line(format!("{last};")));
        vec![CodeFragment::line(head), CodeFragment::indent(calls)]
    }
}

#[cfg(test)]
mod tests {
    use dtogen_codegen::Indent;

    use super::*;

    #[test]
    fn test_chain() {
        let code = MethodChain::new("axios")
            .call("get<User[]>", ["`/users`"])
            .call("then", ["response => response.data"])
            .returned()
            .render(Indent::TYPESCRIPT);
        insta::assert_snapshot!(code, @r"
        return axios
          .get<User[]>(`/users`)
          .then(response => response.data);
        ");
    }

    #[test]
    fn test_chain_without_calls() {
        let code = MethodChain::new("value").render(Indent::TYPESCRIPT);
        assert_eq!(code, "value;\n");
    }
}
