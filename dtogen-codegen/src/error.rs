use miette::Diagnostic;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("type {ty} is not supported, referenced from {owner}")]
    #[diagnostic(
        code(dtogen::unsupported_type),
        help("declare {ty} as a DTO or register a resolver for it")
    )]
    UnsupportedType { ty: String, owner: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_type_message() {
        let err = Error::UnsupportedType {
            ty: "B".into(),
            owner: "A".into(),
        };
        assert_eq!(err.to_string(), "type B is not supported, referenced from A");
    }
}
