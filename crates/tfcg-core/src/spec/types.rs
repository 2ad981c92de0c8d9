use serde::{Deserialize, Serialize};

/// A Go import: package path plus optional alias.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Import {
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

impl Import {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            alias: None,
        }
    }
}

/// Whether an attribute is computed, optional, both, or required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComputedOptionalRequired {
    Computed,
    ComputedOptional,
    Optional,
    Required,
}

/// Overrides the framework type used for an attribute or nested object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomType {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub import: Option<Import>,
    #[serde(rename = "type")]
    pub type_: String,
    pub value_type: String,
}

/// A native type that generated values convert to and from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssociatedExternalType {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub import: Option<Import>,
    #[serde(rename = "type")]
    pub type_: String,
}

/// A validator entry. Only `custom` validators produce generated code.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Validator {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<CustomValidator>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomValidator {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub imports: Vec<Import>,
    pub schema_definition: String,
}

/// A plan modifier entry. Only `custom` plan modifiers produce generated code.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlanModifier {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<CustomPlanModifier>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomPlanModifier {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub imports: Vec<Import>,
    pub schema_definition: String,
}

/// A default expressed as arbitrary Go source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomDefault {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub imports: Vec<Import>,
    pub schema_definition: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BoolDefault {
    #[serde(rename = "static", default, skip_serializing_if = "Option::is_none")]
    pub static_value: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<CustomDefault>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Float64Default {
    #[serde(rename = "static", default, skip_serializing_if = "Option::is_none")]
    pub static_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<CustomDefault>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Int64Default {
    #[serde(rename = "static", default, skip_serializing_if = "Option::is_none")]
    pub static_value: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<CustomDefault>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StringDefault {
    #[serde(rename = "static", default, skip_serializing_if = "Option::is_none")]
    pub static_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<CustomDefault>,
}

/// Defaults for kinds that only accept Go source.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CustomOnlyDefault {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<CustomDefault>,
}

/// A primitive element or object attribute type.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PrimitiveType {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_type: Option<CustomType>,
}

/// A list, map, or set element or object attribute type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionType {
    pub element_type: Box<ElementType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_type: Option<CustomType>,
}

/// An object element or object attribute type.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ObjectType {
    #[serde(default)]
    pub attribute_types: Vec<ObjectAttributeType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_type: Option<CustomType>,
}

/// The element type of a list, map, or set. Exactly one member should be set.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ElementType {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bool: Option<PrimitiveType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub float64: Option<PrimitiveType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub int64: Option<PrimitiveType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<PrimitiveType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub string: Option<PrimitiveType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list: Option<CollectionType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map: Option<CollectionType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set: Option<CollectionType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object: Option<ObjectType>,
}

/// A named field of an object type. Exactly one kind member should be set.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ObjectAttributeType {
    pub name: String,
    #[serde(flatten)]
    pub kind: ElementType,
}
