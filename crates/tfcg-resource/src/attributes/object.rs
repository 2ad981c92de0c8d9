use tfcg_core::spec::{self, AssociatedExternalType};

use crate::conversion::{self, ConversionPlan, Direction};
use crate::custom_type::{self, ValueField};
use crate::error::{GeneratorError, UnimplementedError};
use crate::facets::{DefaultValue, NodeFacets, custom_type_imports, default_imports, hook_imports};
use crate::fragments::SchemaWriter;
use crate::identifier::FrameworkIdentifier;
use crate::imports::{ATTR_IMPORT, Imports, custom_type_value_imports, external_type_imports};
use crate::model::ModelField;
use crate::node::SchemaNode;
use crate::object_type::{self, ObjectAttributeType};

/// `schema.ObjectAttribute`: a fixed set of typed fields that are not full schema nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectAttribute {
    pub facets: NodeFacets,
    pub attribute_types: Vec<ObjectAttributeType>,
    pub associated_external_type: Option<AssociatedExternalType>,
    pub default: Option<DefaultValue>,
}

impl ObjectAttribute {
    pub fn from_spec(spec: Option<&spec::ObjectAttribute>) -> Result<Self, GeneratorError> {
        let spec = spec.ok_or(GeneratorError::NilSpec("ObjectAttribute"))?;
        Ok(Self {
            facets: NodeFacets::from_attribute(&spec.common),
            attribute_types: object_type::from_specs(&spec.attribute_types)?,
            associated_external_type: spec.associated_external_type.clone(),
            default: DefaultValue::from_custom(spec.default.as_ref()),
        })
    }

    /// A `<Name>Type`/`<Name>Value` pair is generated only for an object with an associated
    /// external type and no explicit custom type.
    fn generates_custom_type(&self) -> bool {
        self.associated_external_type.is_some() && self.facets.custom_type.is_none()
    }

    fn custom_type_expr(&self, name: &FrameworkIdentifier) -> Option<String> {
        match &self.facets.custom_type {
            Some(custom) => Some(custom.type_.clone()),
            None if self.generates_custom_type() => Some(custom_type::synthesized_custom_type(name)),
            None => None,
        }
    }

    fn value_fields(&self) -> Vec<ValueField> {
        object_type::sorted(&self.attribute_types)
            .into_iter()
            .map(|t| ValueField {
                name: FrameworkIdentifier::new(t.name.as_str()),
                attr_type: t.element_type.type_expr(),
                value_type: t.element_type.value_type(),
            })
            .collect()
    }

    pub fn custom_type_and_value(
        &self,
        name: &FrameworkIdentifier,
    ) -> Result<Vec<String>, GeneratorError> {
        if !self.generates_custom_type() {
            return Ok(Vec::new());
        }
        Ok(vec![custom_type::render_custom_type_and_value(
            name,
            &self.value_fields(),
        )?])
    }

    pub fn to_from_functions(&self, name: &FrameworkIdentifier) -> Result<Vec<String>, GeneratorError> {
        let Some(external) = &self.associated_external_type else {
            return Ok(Vec::new());
        };
        let value_name = self.attr_value(name);
        if !custom_type::is_local_type(&value_name) {
            log::warn!("skipping to/from functions of {name}: {value_name} is not a local type");
            return Ok(Vec::new());
        }
        let target = conversion::ExternalTypeNames::new(external).variable;
        let mut to_fields = Vec::new();
        let mut from_fields = Vec::new();
        for t in object_type::sorted(&self.attribute_types) {
            let field = FrameworkIdentifier::new(t.name.as_str());
            let plans = conversion::element_plan(&t.element_type, Direction::To, &field).and_then(
                |to| Ok((to, conversion::element_plan(&t.element_type, Direction::From, &field)?)),
            );
            match plans {
                Ok((to, from)) => {
                    to_fields.push(to.render_to(&field, &target));
                    from_fields.push(from.render_from(&field));
                }
                Err(err) if err.is_unimplemented() => {
                    log::warn!("skipping conversion of {name}.{field}: {err}");
                }
                Err(err) => return Err(err),
            }
        }
        Ok(vec![custom_type::render_to_from(
            name,
            &value_name,
            external,
            &to_fields,
            &from_fields,
        )?])
    }

    fn conversion(
        &self,
        name: &FrameworkIdentifier,
        direction: Direction,
    ) -> Result<ConversionPlan, GeneratorError> {
        if let Some(external) = &self.associated_external_type {
            let value_name = self.attr_value(name);
            if !custom_type::is_local_type(&value_name) {
                return Err(UnimplementedError::new(format!(
                    "conversion of object attribute {name} with non-local value type {value_name}"
                ))
                .into());
            }
            return Ok(conversion::external_type_plan(external, &value_name));
        }
        if self.facets.custom_type.is_some() {
            return Err(UnimplementedError::new(format!(
                "conversion of object attribute {name} with a custom type"
            ))
            .into());
        }
        conversion::object_fields_plan(&self.attribute_types, direction, name)
    }
}

impl SchemaNode for ObjectAttribute {
    fn imports(&self) -> Imports {
        let custom = match &self.facets.custom_type {
            Some(custom) => custom_type_imports(Some(custom)),
            None if self.generates_custom_type() => custom_type_value_imports(),
            None => custom_type_imports(None),
        };
        external_type_imports(self.associated_external_type.as_ref())
            .union(custom)
            .with_path(ATTR_IMPORT)
            .union(hook_imports(&self.facets.plan_modifiers, &self.facets.validators))
            .union(default_imports(self.default.as_ref()))
            .union(object_type::imports(&self.attribute_types))
    }

    fn schema(&self, name: &FrameworkIdentifier) -> Result<String, GeneratorError> {
        let custom_type = self.custom_type_expr(name);
        let mut writer = SchemaWriter::new(name, "ObjectAttribute");
        writer
            .facets(&self.facets, custom_type.as_deref(), "Object")
            .default(self.default.as_ref())
            .fragment(&format!(
                "\nAttributeTypes: {},",
                object_type::attr_types_map(&self.attribute_types)
            ));
        Ok(writer.finish())
    }

    fn model_field(&self, name: &FrameworkIdentifier) -> ModelField {
        ModelField::resolve(
            name,
            self.facets.custom_type.as_ref(),
            self.associated_external_type.is_some(),
            "types.Object",
        )
    }

    fn attr_type(&self, name: &FrameworkIdentifier) -> String {
        match &self.facets.custom_type {
            Some(custom) => custom.type_.clone(),
            None if self.generates_custom_type() => custom_type::synthesized_attr_type(name),
            None => format!(
                "basetypes.ObjectType{{\nAttrTypes: {},\n}}",
                object_type::attr_types_map(&self.attribute_types)
            ),
        }
    }

    fn attr_value(&self, name: &FrameworkIdentifier) -> String {
        match &self.facets.custom_type {
            Some(custom) => custom.value_type.clone(),
            None if self.generates_custom_type() => name.value_name(),
            None => "basetypes.ObjectValue".to_string(),
        }
    }

    fn to_conversion(&self, name: &FrameworkIdentifier) -> Result<ConversionPlan, GeneratorError> {
        self.conversion(name, Direction::To)
    }

    fn from_conversion(
        &self,
        name: &FrameworkIdentifier,
    ) -> Result<ConversionPlan, GeneratorError> {
        self.conversion(name, Direction::From)
    }
}
