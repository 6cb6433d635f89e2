use miette::Diagnostic;
use thiserror::Error;

// =============================================================================

// Name Errors

#[derive(Clone, Debug, Diagnostic, Eq, Error, PartialEq)]
pub enum NameError {
    #[diagnostic(
        code(name::invalid),
        help("a name is a single path segment, split nested paths before creating nodes")
    )]
    #[error("name '{name}' can not contain '/'")]
    InvalidName { name: String },
}
