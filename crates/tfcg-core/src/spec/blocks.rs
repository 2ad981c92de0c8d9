use serde::{Deserialize, Serialize};

use super::attributes::{Attribute, NestedBlockObject};
use super::types::{AssociatedExternalType, CustomType, PlanModifier, Validator};

/// A named schema block. Exactly one kind member should be set.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Block {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_nested: Option<ListNestedBlock>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set_nested: Option<SetNestedBlock>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub single_nested: Option<SingleNestedBlock>,
}

/// Facets shared by every block kind. Blocks carry no computed/optional/required flags.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CommonBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_type: Option<CustomType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecation_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plan_modifiers: Vec<PlanModifier>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub validators: Vec<Validator>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ListNestedBlock {
    #[serde(flatten)]
    pub common: CommonBlock,
    pub nested_object: NestedBlockObject,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SetNestedBlock {
    #[serde(flatten)]
    pub common: CommonBlock,
    pub nested_object: NestedBlockObject,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SingleNestedBlock {
    #[serde(flatten)]
    pub common: CommonBlock,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    #[serde(default)]
    pub blocks: Vec<Block>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub associated_external_type: Option<AssociatedExternalType>,
}
