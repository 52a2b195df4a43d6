use miette::Diagnostic;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("output is required for resource {resource}. Context: {context}")]
    #[diagnostic(
        code(dtogen::missing_output),
        help("declare an output on the operation or on the resource marker")
    )]
    MissingOutput {
        resource: String,
        /// The resource marker, echoed with its arguments.
        context: String,
    },
}
