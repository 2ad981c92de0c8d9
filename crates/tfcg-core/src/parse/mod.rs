use std::collections::HashSet;

use crate::error::ParseError;
use crate::spec::{Attribute, Block, Specification};

/// Parse a specification from JSON.
pub fn from_json(input: &str) -> Result<Specification, ParseError> {
    let spec: Specification = serde_json::from_str(input)?;
    validate(&spec)?;
    Ok(spec)
}

/// Parse a specification from YAML.
pub fn from_yaml(input: &str) -> Result<Specification, ParseError> {
    let spec: Specification = serde_yaml_ng::from_str(input)?;
    validate(&spec)?;
    Ok(spec)
}

fn validate(spec: &Specification) -> Result<(), ParseError> {
    if !spec.version.starts_with("0.") {
        return Err(ParseError::UnsupportedVersion(spec.version.clone()));
    }
    for resource in &spec.resources {
        check_unique(
            &resource.name,
            &resource.schema.attributes,
            &resource.schema.blocks,
        )?;
    }
    log::debug!("parsed specification with {} resources", spec.resources.len());
    Ok(())
}

/// Attribute and block names live in separate namespaces, so each is checked on its own.
fn check_unique(resource: &str, attributes: &[Attribute], blocks: &[Block]) -> Result<(), ParseError> {
    let mut seen = HashSet::new();
    for attribute in attributes {
        if !seen.insert(attribute.name.as_str()) {
            return Err(ParseError::DuplicateName {
                resource: resource.to_string(),
                kind: "attribute",
                name: attribute.name.clone(),
            });
        }
    }

    let mut seen = HashSet::new();
    for block in blocks {
        if !seen.insert(block.name.as_str()) {
            return Err(ParseError::DuplicateName {
                resource: resource.to_string(),
                kind: "block",
                name: block.name.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unknown_version() {
        let err = from_json(r#"{"version": "1.0"}"#).unwrap_err();
        assert!(matches!(err, ParseError::UnsupportedVersion(v) if v == "1.0"));
    }

    #[test]
    fn attribute_and_block_may_share_a_name() {
        let yaml = r#"
version: "0.1"
resources:
  - name: example
    schema:
      attributes:
        - name: thing
          bool:
            computed_optional_required: computed
      blocks:
        - name: thing
          list_nested:
            nested_object: {}
"#;
        let spec = from_yaml(yaml).unwrap();
        assert_eq!(spec.resources[0].schema.attributes.len(), 1);
        assert_eq!(spec.resources[0].schema.blocks.len(), 1);
    }

    #[test]
    fn rejects_duplicate_attribute_names() {
        let json = r#"{
            "version": "0.1",
            "resources": [{
                "name": "example",
                "schema": {
                    "attributes": [
                        {"name": "a", "bool": {}},
                        {"name": "a", "string": {}}
                    ]
                }
            }]
        }"#;
        let err = from_json(json).unwrap_err();
        assert_eq!(
            err.to_string(),
            "duplicate attribute name in resource example: a"
        );
    }
}
