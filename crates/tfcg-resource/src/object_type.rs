use tfcg_core::spec;

use crate::elem_type::ElementType;
use crate::error::GeneratorError;
use crate::imports::{ATTR_IMPORT, Imports, TYPES_IMPORT};

/// A named field of an object attribute or object element type.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectAttributeType {
    pub name: String,
    pub element_type: ElementType,
}

impl ObjectAttributeType {
    pub fn from_spec(spec: &spec::ObjectAttributeType) -> Result<Self, GeneratorError> {
        let element_type = ElementType::from_kind(&spec.kind).unwrap_or_else(|| {
            Err(GeneratorError::UndefinedObjectAttributeType(format!(
                "{spec:?}"
            )))
        })?;
        Ok(Self {
            name: spec.name.clone(),
            element_type,
        })
    }
}

pub fn from_specs(
    specs: &[spec::ObjectAttributeType],
) -> Result<Vec<ObjectAttributeType>, GeneratorError> {
    specs.iter().map(ObjectAttributeType::from_spec).collect()
}

/// Fields ordered by name, independent of declaration order.
pub fn sorted(attribute_types: &[ObjectAttributeType]) -> Vec<&ObjectAttributeType> {
    let mut sorted: Vec<_> = attribute_types.iter().collect();
    sorted.sort_by(|a, b| a.name.cmp(&b.name));
    sorted
}

/// Render the `map[string]attr.Type{...}` literal for a set of object fields.
pub fn attr_types_map(attribute_types: &[ObjectAttributeType]) -> String {
    if attribute_types.is_empty() {
        return "map[string]attr.Type{}".to_string();
    }
    let entries: Vec<String> = sorted(attribute_types)
        .into_iter()
        .map(|t| format!("\"{}\": {},", t.name, t.element_type.type_expr()))
        .collect();
    format!("map[string]attr.Type{{\n{}\n}}", entries.join("\n"))
}

/// `types` and `attr`, plus whatever the field types need.
pub fn imports(attribute_types: &[ObjectAttributeType]) -> Imports {
    attribute_types.iter().fold(
        Imports::new().with_path(TYPES_IMPORT).with_path(ATTR_IMPORT),
        |imports, t| imports.union(t.element_type.imports()),
    )
}
