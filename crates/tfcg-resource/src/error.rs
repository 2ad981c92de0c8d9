use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("{0} spec is nil")]
    NilSpec(&'static str),

    #[error("attribute type not defined: {0}")]
    UndefinedAttributeType(String),

    #[error("block type not defined: {0}")]
    UndefinedBlockType(String),

    #[error("element type not defined: {0}")]
    UndefinedElementType(String),

    #[error("object attribute type not defined: {0}")]
    UndefinedObjectAttributeType(String),

    #[error("duplicate {kind} name: {name}")]
    DuplicateName { kind: &'static str, name: String },

    #[error(transparent)]
    Unimplemented(#[from] UnimplementedError),

    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
}

impl GeneratorError {
    /// Whether this error marks a conversion that is deliberately not generated.
    pub fn is_unimplemented(&self) -> bool {
        matches!(self, GeneratorError::Unimplemented(_))
    }
}

/// A node/kind combination whose conversion code is not generated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not implemented: {subject}")]
pub struct UnimplementedError {
    pub subject: String,
}

impl UnimplementedError {
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
        }
    }
}
