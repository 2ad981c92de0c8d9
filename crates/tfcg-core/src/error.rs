use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported specification version: {0}")]
    UnsupportedVersion(String),

    #[error("duplicate {kind} name in resource {resource}: {name}")]
    DuplicateName {
        resource: String,
        kind: &'static str,
        name: String,
    },
}
