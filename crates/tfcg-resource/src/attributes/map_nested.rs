use tfcg_core::spec;

use crate::conversion::{CollectionKind, ConversionPlan};
use crate::error::GeneratorError;
use crate::facets::{DefaultValue, NodeFacets};
use crate::identifier::FrameworkIdentifier;
use crate::imports::Imports;
use crate::model::ModelField;
use crate::nested_object::{NestedAttributeObject, NestedCollection, NestedObject};
use crate::node::SchemaNode;

#[derive(Debug, Clone, PartialEq)]
pub struct MapNestedAttribute {
    pub facets: NodeFacets,
    pub nested_object: NestedAttributeObject,
    pub default: Option<DefaultValue>,
}

impl MapNestedAttribute {
    pub fn from_spec(spec: Option<&spec::MapNestedAttribute>) -> Result<Self, GeneratorError> {
        let spec = spec.ok_or(GeneratorError::NilSpec("MapNestedAttribute"))?;
        Ok(Self {
            facets: NodeFacets::from_attribute(&spec.common),
            nested_object: NestedAttributeObject::from_spec(&spec.nested_object)?,
            default: DefaultValue::from_custom(spec.default.as_ref()),
        })
    }

    fn node(&self) -> NestedCollection<'_, NestedAttributeObject> {
        NestedCollection {
            kind: CollectionKind::Map,
            node: "Attribute",
            facets: &self.facets,
            nested_object: &self.nested_object,
            default: self.default.as_ref(),
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

impl SchemaNode for MapNestedAttribute {
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
