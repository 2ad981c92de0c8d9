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
pub struct SetNestedBlock {
    pub facets: NodeFacets,
    pub nested_object: NestedBlockObject,
}

impl SetNestedBlock {
    pub fn from_spec(spec: Option<&spec::SetNestedBlock>) -> Result<Self, GeneratorError> {
        let spec = spec.ok_or(GeneratorError::NilSpec("SetNestedBlock"))?;
        Ok(Self {
            facets: NodeFacets::from_block(&spec.common),
            nested_object: NestedBlockObject::from_spec(&spec.nested_object)?,
        })
    }

    fn node(&self) -> NestedCollection<'_, NestedBlockObject> {
        NestedCollection {
            kind: CollectionKind::Set,
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

    pub fn to_from_functions(&self, name: &FrameworkIdentifier) -> Result<Vec<String>, GeneratorError> {
        self.node().to_from_functions(name)
    }
}

impl SchemaNode for SetNestedBlock {
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

#[cfg(test)]
mod tests {
    use super::*;

    fn set_nested(json: &str) -> SetNestedBlock {
        let raw: spec::SetNestedBlock = serde_json::from_str(json).unwrap();
        SetNestedBlock::from_spec(Some(&raw)).unwrap()
    }

    #[test]
    fn test_schema_kind_and_hooks() {
        let block = set_nested(
            r#"{
                "validators": [{"custom": {"imports": [{"path": "example.com/sv"}], "schema_definition": "sv.SizeAtMost(2)"}}],
                "nested_object": {}
            }"#,
        );
        let name = FrameworkIdentifier::new("members");
        let schema = block.schema(&name).unwrap();
        assert!(schema.starts_with(
            "\"members\": schema.SetNestedBlock{\nValidators: []validator.Set{\nsv.SizeAtMost(2),\n},\nNestedObject: schema.NestedBlockObject{"
        ));
        assert!(block.imports().contains("example.com/sv"));
        assert_eq!(block.model_field(&name).value_type, "types.Set");
        assert_eq!(block.attr_value(&name), "basetypes.SetValue");
    }

    #[test]
    fn test_to_from_with_external_type() {
        let block = set_nested(
            r#"{"nested_object": {
                "attributes": [{"name": "id", "string": {}}],
                "associated_external_type": {"import": {"path": "example.com/apisdk"}, "type": "*apisdk.Member"}
            }}"#,
        );
        let name = FrameworkIdentifier::new("members");
        let functions = block.to_from_functions(&name).unwrap();
        assert_eq!(functions.len(), 1);
        assert!(functions[0].contains(
            "func (v MembersValue) ToApisdkMember(ctx context.Context) (*apisdk.Member, diag.Diagnostics) {"
        ));
        assert!(functions[0].contains("\t\tId: v.Id.ValueStringPointer(),\n"));
        assert!(block.to_conversion(&name).unwrap_err().is_unimplemented());
    }
}
