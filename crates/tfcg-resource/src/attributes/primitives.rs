use tfcg_core::spec;

use crate::conversion::ConversionPlan;
use crate::error::GeneratorError;
use crate::facets::{DefaultValue, NodeFacets};
use crate::identifier::FrameworkIdentifier;
use crate::imports::Imports;
use crate::model::ModelField;
use crate::node::SchemaNode;
use crate::primitive::{PrimitiveKind, PrimitiveNode};

macro_rules! primitive_attribute {
    ($(#[$meta:meta])* $name:ident, $kind:ident, $default:path) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            pub facets: NodeFacets,
            pub default: Option<DefaultValue>,
        }

        impl $name {
            pub fn from_spec(spec: Option<&spec::$name>) -> Result<Self, GeneratorError> {
                let spec = spec.ok_or(GeneratorError::NilSpec(stringify!($name)))?;
                Ok(Self {
                    facets: NodeFacets::from_attribute(&spec.common),
                    default: $default(spec.default.as_ref()),
                })
            }

            fn node(&self) -> PrimitiveNode<'_> {
                PrimitiveNode {
                    kind: PrimitiveKind::$kind,
                    facets: &self.facets,
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
                self.node().to_conversion(name)
            }

            fn from_conversion(
                &self,
                name: &FrameworkIdentifier,
            ) -> Result<ConversionPlan, GeneratorError> {
                self.node().from_conversion(name)
            }
        }
    };
}

primitive_attribute!(
    /// `schema.BoolAttribute`, with an optional static or custom default.
    BoolAttribute,
    Bool,
    DefaultValue::from_bool
);
primitive_attribute!(Float64Attribute, Float64, DefaultValue::from_float64);
primitive_attribute!(Int64Attribute, Int64, DefaultValue::from_int64);
primitive_attribute!(
    /// `schema.NumberAttribute`. Numbers only take custom defaults.
    NumberAttribute,
    Number,
    DefaultValue::from_custom
);
primitive_attribute!(StringAttribute, String, DefaultValue::from_string);

#[cfg(test)]
mod tests {
    use tfcg_core::spec::ComputedOptionalRequired;

    use super::*;
    use crate::imports::{INT64_DEFAULT_IMPORT, TYPES_IMPORT, VALIDATOR_IMPORT};

    fn bool_spec(json: &str) -> spec::BoolAttribute {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_nil_spec() {
        let err = BoolAttribute::from_spec(None).unwrap_err();
        assert_eq!(err.to_string(), "BoolAttribute spec is nil");
        let err = NumberAttribute::from_spec(None).unwrap_err();
        assert_eq!(err.to_string(), "NumberAttribute spec is nil");
    }

    #[test]
    fn test_bool_computed() {
        let attribute =
            BoolAttribute::from_spec(Some(&bool_spec(r#"{"computed_optional_required": "computed"}"#)))
                .unwrap();
        let name = FrameworkIdentifier::new("bool_attribute");
        assert_eq!(
            attribute.schema(&name).unwrap(),
            "\"bool_attribute\": schema.BoolAttribute{\nComputed: true,\n},"
        );
        let paths: Vec<String> = attribute.imports().all().iter().map(|i| i.path.clone()).collect();
        assert_eq!(paths, vec![TYPES_IMPORT]);
        assert_eq!(
            attribute.facets.computed_optional_required,
            Some(ComputedOptionalRequired::Computed)
        );
    }

    #[test]
    fn test_full_field_order() {
        let attribute = BoolAttribute::from_spec(Some(&bool_spec(
            r#"{
                "computed_optional_required": "computed_optional",
                "custom_type": {"type": "my_types.BoolType{}", "value_type": "my_types.BoolValue"},
                "sensitive": true,
                "description": "desc",
                "deprecation_message": "old",
                "plan_modifiers": [{"custom": {"schema_definition": "pm.Use()"}}],
                "validators": [{"custom": {"schema_definition": "v.Check()"}}],
                "default": {"static": true}
            }"#,
        )))
        .unwrap();
        let name = FrameworkIdentifier::new("flag");
        insta::assert_snapshot!(attribute.schema(&name).unwrap(), @r#"
        "flag": schema.BoolAttribute{
        CustomType: my_types.BoolType{},
        Computed: true,
        Optional: true,
        Sensitive: true,
        Description: "desc",
        MarkdownDescription: "desc",
        DeprecationMessage: "old",
        PlanModifiers: []planmodifier.Bool{
        pm.Use(),
        },
        Validators: []validator.Bool{
        v.Check(),
        },
        Default: booldefault.StaticBool(true),
        },
        "#);
    }

    #[test]
    fn test_custom_type_without_import_has_no_imports() {
        let attribute = BoolAttribute::from_spec(Some(&bool_spec(
            r#"{"custom_type": {"type": "my_types.BoolType{}", "value_type": "my_types.BoolValue"}}"#,
        )))
        .unwrap();
        assert!(attribute.imports().is_empty());
        let name = FrameworkIdentifier::new("flag");
        assert_eq!(attribute.model_field(&name).value_type, "my_types.BoolValue");
        assert!(attribute.to_conversion(&name).unwrap_err().is_unimplemented());
    }

    #[test]
    fn test_int64_default_and_validator_imports() {
        let raw: spec::Int64Attribute = serde_json::from_str(
            r#"{
                "computed_optional_required": "optional",
                "validators": [{"custom": {"imports": [{"path": "example.com/v"}], "schema_definition": "v.AtLeast(1)"}}],
                "default": {"static": 3}
            }"#,
        )
        .unwrap();
        let attribute = Int64Attribute::from_spec(Some(&raw)).unwrap();
        let paths: Vec<String> = attribute.imports().all().iter().map(|i| i.path.clone()).collect();
        assert_eq!(
            paths,
            vec![TYPES_IMPORT, VALIDATOR_IMPORT, "example.com/v", INT64_DEFAULT_IMPORT]
        );
        let schema = attribute.schema(&FrameworkIdentifier::new("count")).unwrap();
        assert!(schema.ends_with("\nDefault: int64default.StaticInt64(3),\n},"));
    }

    #[test]
    fn test_number_conversion_plans() {
        let attribute = NumberAttribute::from_spec(Some(&spec::NumberAttribute::default())).unwrap();
        let name = FrameworkIdentifier::new("amount");
        assert_eq!(
            attribute.to_conversion(&name).unwrap(),
            ConversionPlan::Default("ValueBigFloat".to_string())
        );
        assert_eq!(
            attribute.from_conversion(&name).unwrap(),
            ConversionPlan::Default("NumberValue".to_string())
        );
        assert_eq!(attribute.model_field(&name).value_type, "types.Number");
        assert_eq!(attribute.attr_type(&name), "basetypes.NumberType{}");
    }

    #[test]
    fn test_idempotent_rendering() {
        let raw: spec::StringAttribute = serde_json::from_str(
            r#"{"computed_optional_required": "required", "description": "a name"}"#,
        )
        .unwrap();
        let attribute = StringAttribute::from_spec(Some(&raw)).unwrap();
        let name = FrameworkIdentifier::new("name");
        assert_eq!(attribute.schema(&name).unwrap(), attribute.schema(&name).unwrap());
        assert_eq!(attribute.imports(), attribute.imports());
        assert_eq!(attribute.model_field(&name), attribute.model_field(&name));
    }
}
