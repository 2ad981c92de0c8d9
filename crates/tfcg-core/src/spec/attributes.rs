use serde::{Deserialize, Serialize};

use super::blocks::Block;
use super::types::{
    AssociatedExternalType, BoolDefault, ComputedOptionalRequired, CustomOnlyDefault, CustomType,
    ElementType, Float64Default, Int64Default, ObjectAttributeType, PlanModifier, StringDefault,
    Validator,
};

/// A named schema attribute. Exactly one kind member should be set.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bool: Option<BoolAttribute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub float64: Option<Float64Attribute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub int64: Option<Int64Attribute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<NumberAttribute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub string: Option<StringAttribute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list: Option<ListAttribute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map: Option<MapAttribute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set: Option<SetAttribute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_nested: Option<ListNestedAttribute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_nested: Option<MapNestedAttribute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set_nested: Option<SetNestedAttribute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub single_nested: Option<SingleNestedAttribute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object: Option<ObjectAttribute>,
}

/// Facets shared by every attribute kind.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CommonAttribute {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub computed_optional_required: Option<ComputedOptionalRequired>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_type: Option<CustomType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecation_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sensitive: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plan_modifiers: Vec<PlanModifier>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub validators: Vec<Validator>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BoolAttribute {
    #[serde(flatten)]
    pub common: CommonAttribute,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<BoolDefault>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Float64Attribute {
    #[serde(flatten)]
    pub common: CommonAttribute,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Float64Default>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Int64Attribute {
    #[serde(flatten)]
    pub common: CommonAttribute,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Int64Default>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NumberAttribute {
    #[serde(flatten)]
    pub common: CommonAttribute,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<CustomOnlyDefault>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StringAttribute {
    #[serde(flatten)]
    pub common: CommonAttribute,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<StringDefault>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ListAttribute {
    #[serde(flatten)]
    pub common: CommonAttribute,
    pub element_type: ElementType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<CustomOnlyDefault>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MapAttribute {
    #[serde(flatten)]
    pub common: CommonAttribute,
    pub element_type: ElementType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<CustomOnlyDefault>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SetAttribute {
    #[serde(flatten)]
    pub common: CommonAttribute,
    pub element_type: ElementType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<CustomOnlyDefault>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ObjectAttribute {
    #[serde(flatten)]
    pub common: CommonAttribute,
    #[serde(default)]
    pub attribute_types: Vec<ObjectAttributeType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub associated_external_type: Option<AssociatedExternalType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<CustomOnlyDefault>,
}

/// The object shared by list, map, and set nested attributes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NestedAttributeObject {
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_type: Option<CustomType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub associated_external_type: Option<AssociatedExternalType>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plan_modifiers: Vec<PlanModifier>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub validators: Vec<Validator>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ListNestedAttribute {
    #[serde(flatten)]
    pub common: CommonAttribute,
    pub nested_object: NestedAttributeObject,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<CustomOnlyDefault>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MapNestedAttribute {
    #[serde(flatten)]
    pub common: CommonAttribute,
    pub nested_object: NestedAttributeObject,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<CustomOnlyDefault>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SetNestedAttribute {
    #[serde(flatten)]
    pub common: CommonAttribute,
    pub nested_object: NestedAttributeObject,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<CustomOnlyDefault>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SingleNestedAttribute {
    #[serde(flatten)]
    pub common: CommonAttribute,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub associated_external_type: Option<AssociatedExternalType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<CustomOnlyDefault>,
}

/// Used by nested blocks, which may mix attributes and blocks.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NestedBlockObject {
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    #[serde(default)]
    pub blocks: Vec<Block>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_type: Option<CustomType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub associated_external_type: Option<AssociatedExternalType>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plan_modifiers: Vec<PlanModifier>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub validators: Vec<Validator>,
}
