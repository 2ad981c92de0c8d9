use tfcg_core::spec;

use crate::conversion::{self, CollectionKind, ConversionPlan};
use crate::elem_type::ElementType;
use crate::error::{GeneratorError, UnimplementedError};
use crate::facets::{DefaultValue, NodeFacets, default_imports};
use crate::fragments::SchemaWriter;
use crate::identifier::FrameworkIdentifier;
use crate::imports::Imports;
use crate::model::ModelField;
use crate::node::SchemaNode;

/// Rendering shared by list, map, and set attributes.
struct CollectionNode<'a> {
    kind: CollectionKind,
    facets: &'a NodeFacets,
    element_type: &'a ElementType,
    default: Option<&'a DefaultValue>,
}

impl CollectionNode<'_> {
    fn imports(&self) -> Imports {
        self.facets
            .imports()
            .union(default_imports(self.default))
            .union(self.element_type.imports())
    }

    fn schema(&self, name: &FrameworkIdentifier) -> String {
        let custom_type = self.facets.custom_type.as_ref().map(|c| c.type_.as_str());
        let mut writer = SchemaWriter::new(name, &format!("{}Attribute", self.kind.name()));
        writer
            .facets(self.facets, custom_type, self.kind.name())
            .default(self.default)
            .fragment(&format!("\nElementType: {},", self.element_type.type_expr()));
        writer.finish()
    }

    fn model_field(&self, name: &FrameworkIdentifier) -> ModelField {
        ModelField::resolve(
            name,
            self.facets.custom_type.as_ref(),
            false,
            &format!("types.{}", self.kind.name()),
        )
    }

    fn attr_type(&self) -> String {
        match &self.facets.custom_type {
            Some(custom) => custom.type_.clone(),
            None => format!(
                "basetypes.{}Type{{\nElemType: {},\n}}",
                self.kind.name(),
                self.element_type.type_expr()
            ),
        }
    }

    fn attr_value(&self) -> String {
        match &self.facets.custom_type {
            Some(custom) => custom.value_type.clone(),
            None => format!("basetypes.{}Value", self.kind.name()),
        }
    }

    /// The same element-wise plan serves both directions.
    fn conversion(&self, name: &FrameworkIdentifier) -> Result<ConversionPlan, GeneratorError> {
        if self.facets.custom_type.is_some() {
            return Err(UnimplementedError::new(format!(
                "conversion of {} attribute {name} with a custom type",
                self.kind.name().to_lowercase()
            ))
            .into());
        }
        conversion::collection_plan(self.kind, self.element_type, name)
    }
}

macro_rules! collection_attribute {
    ($name:ident, $kind:ident) => {
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            pub facets: NodeFacets,
            pub element_type: ElementType,
            pub default: Option<DefaultValue>,
        }

        impl $name {
            pub fn from_spec(spec: Option<&spec::$name>) -> Result<Self, GeneratorError> {
                let spec = spec.ok_or(GeneratorError::NilSpec(stringify!($name)))?;
                Ok(Self {
                    facets: NodeFacets::from_attribute(&spec.common),
                    element_type: ElementType::from_spec(&spec.element_type)?,
                    default: DefaultValue::from_custom(spec.default.as_ref()),
                })
            }

            fn node(&self) -> CollectionNode<'_> {
                CollectionNode {
                    kind: CollectionKind::$kind,
                    facets: &self.facets,
                    element_type: &self.element_type,
                    default: self.default.as_ref(),
                }
            }
        }

        impl SchemaNode for $name {
            fn imports(&self) -> Imports {
                self.node().imports()
            }

            fn schema(&self, name: &FrameworkIdentifier) -> Result<String, GeneratorError> {
                Ok(self.node().schema(name))
            }

            fn model_field(&self, name: &FrameworkIdentifier) -> ModelField {
                self.node().model_field(name)
            }

            fn attr_type(&self, _name: &FrameworkIdentifier) -> String {
                self.node().attr_type()
            }

            fn attr_value(&self, _name: &FrameworkIdentifier) -> String {
                self.node().attr_value()
            }

            fn to_conversion(
                &self,
                name: &FrameworkIdentifier,
            ) -> Result<ConversionPlan, GeneratorError> {
                self.node().conversion(name)
            }

            fn from_conversion(
                &self,
                name: &FrameworkIdentifier,
            ) -> Result<ConversionPlan, GeneratorError> {
                self.node().conversion(name)
            }
        }
    };
}

collection_attribute!(ListAttribute, List);
collection_attribute!(MapAttribute, Map);
collection_attribute!(SetAttribute, Set);
