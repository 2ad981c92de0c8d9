pub mod config;
pub mod error;
pub mod parse;
pub mod spec;

/// A generated file with path and content.
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    pub path: String,
    pub content: String,
}

/// Trait for code generators that produce files from a parsed specification.
pub trait CodeGenerator {
    type Config;
    type Error: std::error::Error;
    fn generate(
        &self,
        spec: &spec::Specification,
        config: &Self::Config,
    ) -> Result<Vec<GeneratedFile>, Self::Error>;
}
