use tfcg_core::spec::{self, AssociatedExternalType};

use crate::attributes::Attributes;
use crate::blocks::Blocks;
use crate::conversion::ConversionPlan;
use crate::custom_type;
use crate::error::{GeneratorError, UnimplementedError};
use crate::facets::{NodeFacets, hook_imports};
use crate::fragments::SchemaWriter;
use crate::identifier::FrameworkIdentifier;
use crate::imports::Imports;
use crate::model::ModelField;
use crate::nested_object::ObjectShape;
use crate::node::SchemaNode;

/// `schema.SingleNestedBlock`: a singleton section holding attributes and further blocks.
#[derive(Debug, Clone, PartialEq)]
pub struct SingleNestedBlock {
    pub facets: NodeFacets,
    pub attributes: Attributes,
    pub blocks: Blocks,
    pub associated_external_type: Option<AssociatedExternalType>,
}

impl SingleNestedBlock {
    pub fn from_spec(spec: Option<&spec::SingleNestedBlock>) -> Result<Self, GeneratorError> {
        let spec = spec.ok_or(GeneratorError::NilSpec("SingleNestedBlock"))?;
        Ok(Self {
            facets: NodeFacets::from_block(&spec.common),
            attributes: Attributes::from_specs(&spec.attributes)?,
            blocks: Blocks::from_specs(&spec.blocks)?,
            associated_external_type: spec.associated_external_type.clone(),
        })
    }

    fn shape(&self) -> ObjectShape<'_> {
        ObjectShape {
            attributes: &self.attributes,
            blocks: Some(&self.blocks),
            custom_type: self.facets.custom_type.as_ref(),
            external_type: self.associated_external_type.as_ref(),
        }
    }

    pub fn custom_type_and_value(
        &self,
        name: &FrameworkIdentifier,
    ) -> Result<Vec<String>, GeneratorError> {
        self.shape().custom_type_and_value(name)
    }

    pub fn to_from_functions(&self, name: &FrameworkIdentifier) -> Result<Vec<String>, GeneratorError> {
        self.shape().to_from_functions(name)
    }
}

impl SchemaNode for SingleNestedBlock {
    fn imports(&self) -> Imports {
        self.shape()
            .imports(hook_imports(&self.facets.plan_modifiers, &self.facets.validators))
    }

    fn schema(&self, name: &FrameworkIdentifier) -> Result<String, GeneratorError> {
        let shape = self.shape();
        let custom_type = shape.custom_type_expr(name);
        let mut writer = SchemaWriter::new(name, "SingleNestedBlock");
        writer
            .facets(&self.facets, Some(&custom_type), "Object")
            .fragment(&shape.children_fragments()?);
        Ok(writer.finish())
    }

    fn model_field(&self, name: &FrameworkIdentifier) -> ModelField {
        ModelField::resolve(
            name,
            self.facets.custom_type.as_ref(),
            self.associated_external_type.is_some(),
            &name.value_name(),
        )
    }

    fn attr_type(&self, name: &FrameworkIdentifier) -> String {
        match &self.facets.custom_type {
            Some(custom) => custom.type_.clone(),
            None => custom_type::synthesized_attr_type(name),
        }
    }

    fn attr_value(&self, name: &FrameworkIdentifier) -> String {
        self.shape().value_name(name)
    }

    fn to_conversion(&self, name: &FrameworkIdentifier) -> Result<ConversionPlan, GeneratorError> {
        Err(UnimplementedError::new(format!("conversion of single-nested block {name}")).into())
    }

    fn from_conversion(
        &self,
        name: &FrameworkIdentifier,
    ) -> Result<ConversionPlan, GeneratorError> {
        Err(UnimplementedError::new(format!("conversion of single-nested block {name}")).into())
    }
}
