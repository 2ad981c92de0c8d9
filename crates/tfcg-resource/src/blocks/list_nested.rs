use tfcg_core::spec;

use crate::conversion::{CollectionKind, ConversionPlan};
use crate::error::GeneratorError;
use crate::facets::NodeFacets;
use crate::identifier::FrameworkIdentifier;
use crate::imports::Imports;
use crate::model::ModelField;
use crate::nested_object::{NestedBlockObject, NestedCollection, NestedObject};
use crate::node::SchemaNode;

#[derive(Debug, Clone, PartialEq)]
pub struct ListNestedBlock {
    pub facets: NodeFacets,
    pub nested_object: NestedBlockObject,
}

impl ListNestedBlock {
    pub fn from_spec(spec: Option<&spec::ListNestedBlock>) -> Result<Self, GeneratorError> {
        let spec = spec.ok_or(GeneratorError::NilSpec("ListNestedBlock"))?;
        Ok(Self {
            facets: NodeFacets::from_block(&spec.common),
            nested_object: NestedBlockObject::from_spec(&spec.nested_object)?,
        })
    }

    fn node(&self) -> NestedCollection<'_, NestedBlockObject> {
        NestedCollection {
            kind: CollectionKind::List,
            node: "Block",
            facets: &self.facets,
            nested_object: &self.nested_object,
            default: None,
        }
    }

    pub fn custom_type_and_value(
        &self,
        name: &FrameworkIdentifier,
    ) -> Result<Vec<String>, GeneratorError> {
        self.nested_object.custom_type_and_value(name)
    }

    /// Not implemented when the nested object has an associated external type.
    pub fn to_from_functions(&self, name: &FrameworkIdentifier) -> Result<Vec<String>, GeneratorError> {
        self.node().to_from_functions(name)
    }
}

impl SchemaNode for ListNestedBlock {
    fn imports(&self) -> Imports {
        self.node().imports()
    }

    fn schema(&self, name: &FrameworkIdentifier) -> Result<String, GeneratorError> {
        self.node().schema(name)
    }

    fn model_field(&self, name: &FrameworkIdentifier) -> ModelField {
        self.node().model_field(name)
    }

    fn attr_type(&self, name: &FrameworkIdentifier) -> String {
        self.node().attr_type(name)
    }

    fn attr_value(&self, _name: &FrameworkIdentifier) -> String {
        self.node().attr_value()
    }

    fn to_conversion(&self, name: &FrameworkIdentifier) -> Result<ConversionPlan, GeneratorError> {
        Err(self.node().unimplemented_conversion(name))
    }

    fn from_conversion(
        &self,
        name: &FrameworkIdentifier,
    ) -> Result<ConversionPlan, GeneratorError> {
        Err(self.node().unimplemented_conversion(name))
    }
}
