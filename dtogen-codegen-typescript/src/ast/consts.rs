use dtogen_codegen::{CodeFragment, Renderable};

/// A parameter of an arrow function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub name: String,
    pub ty: String,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// `export const name = (params): Ret => { body }`
#[derive(Debug, Clone)]
pub struct ArrowConst {
    name: String,
    params: Vec<Param>,
    returns: Option<String>,
    body: Vec<CodeFragment>,
}

impl ArrowConst {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            returns: None,
            body: Vec::new(),
        }
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.returns = Some(ty.into());
        self
    }

    /// Append a renderable node to the body.
    pub fn body(mut self, node: &impl Renderable) -> Self {
        self.body.extend(node.to_fragments());
        self
    }
}

impl Renderable for ArrowConst {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let params = self
            .params
            .iter()
            .map(|p| format!("{}: {}", p.name, p.ty))
            .collect::<Vec<_>>()
            .join(", ");
        let returns = self
            .returns
            .as_ref()
            .map(|ty| format!(": {ty}"))
            .unwrap_or_default();

        vec![CodeFragment::block(
            format!("export const {} = ({params}){returns} => {{", self.name),
            self.body.clone(),
            Some("}".into()),
        )]
    }
}
