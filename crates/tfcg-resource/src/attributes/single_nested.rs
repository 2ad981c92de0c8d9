use tfcg_core::spec::{self, AssociatedExternalType};

use crate::attributes::Attributes;
use crate::conversion::ConversionPlan;
use crate::custom_type;
use crate::error::{GeneratorError, UnimplementedError};
use crate::facets::{DefaultValue, NodeFacets, default_imports, hook_imports};
use crate::fragments::SchemaWriter;
use crate::identifier::FrameworkIdentifier;
use crate::imports::Imports;
use crate::model::ModelField;
use crate::nested_object::ObjectShape;
use crate::node::SchemaNode;

/// `schema.SingleNestedAttribute`: an object whose fields are full attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct SingleNestedAttribute {
    pub facets: NodeFacets,
    pub attributes: Attributes,
    pub associated_external_type: Option<AssociatedExternalType>,
    pub default: Option<DefaultValue>,
}

impl SingleNestedAttribute {
    pub fn from_spec(spec: Option<&spec::SingleNestedAttribute>) -> Result<Self, GeneratorError> {
        let spec = spec.ok_or(GeneratorError::NilSpec("SingleNestedAttribute"))?;
        Ok(Self {
            facets: NodeFacets::from_attribute(&spec.common),
            attributes: Attributes::from_specs(&spec.attributes)?,
            associated_external_type: spec.associated_external_type.clone(),
            default: DefaultValue::from_custom(spec.default.as_ref()),
        })
    }

    fn shape(&self) -> ObjectShape<'_> {
        ObjectShape {
            attributes: &self.attributes,
            blocks: None,
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

    fn unimplemented_conversion(name: &FrameworkIdentifier) -> GeneratorError {
        UnimplementedError::new(format!("conversion of single-nested attribute {name}")).into()
    }
}

impl SchemaNode for SingleNestedAttribute {
    fn imports(&self) -> Imports {
        let hooks = hook_imports(&self.facets.plan_modifiers, &self.facets.validators)
            .union(default_imports(self.default.as_ref()));
        self.shape().imports(hooks)
    }

    fn schema(&self, name: &FrameworkIdentifier) -> Result<String, GeneratorError> {
        let shape = self.shape();
        let custom_type = shape.custom_type_expr(name);
        let mut writer = SchemaWriter::new(name, "SingleNestedAttribute");
        writer
            .facets(&self.facets, Some(&custom_type), "Object")
            .default(self.default.as_ref())
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
        Err(Self::unimplemented_conversion(name))
    }

    fn from_conversion(
        &self,
        name: &FrameworkIdentifier,
    ) -> Result<ConversionPlan, GeneratorError> {
        Err(Self::unimplemented_conversion(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imports::{ATTR_IMPORT, BASETYPES_IMPORT};

    fn single_nested(json: &str) -> SingleNestedAttribute {
        let raw: spec::SingleNestedAttribute = serde_json::from_str(json).unwrap();
        SingleNestedAttribute::from_spec(Some(&raw)).unwrap()
    }

    const WITH_EXTERNAL_TYPE: &str = r#"{
        "computed_optional_required": "optional",
        "attributes": [
            {"name": "name", "string": {"computed_optional_required": "required"}},
            {"name": "count", "int64": {"computed_optional_required": "optional"}}
        ],
        "associated_external_type": {"import": {"path": "example.com/apisdk"}, "type": "*apisdk.Thing"}
    }"#;

    #[test]
    fn test_external_type_synthesizes_custom_type() {
        let attribute = single_nested(WITH_EXTERNAL_TYPE);
        let name = FrameworkIdentifier::new("thing");
        insta::assert_snapshot!(attribute.schema(&name).unwrap(), @r#"
        "thing": schema.SingleNestedAttribute{
        CustomType: ThingType{
        ObjectType: types.ObjectType{
        AttrTypes: ThingValue{}.AttributeTypes(ctx),
        },
        },
        Optional: true,
        Attributes: map[string]schema.Attribute{
        "count": schema.Int64Attribute{
        Optional: true,
        },
        "name": schema.StringAttribute{
        Required: true,
        },
        },
        },
        "#);
        assert_eq!(attribute.model_field(&name).value_type, "ThingValue");

        let paths: Vec<String> = attribute.imports().all().iter().map(|i| i.path.clone()).collect();
        assert_eq!(paths[0], BASETYPES_IMPORT);
        assert!(paths.contains(&"example.com/apisdk".to_string()));
        assert!(paths.contains(&ATTR_IMPORT.to_string()));
    }

    #[test]
    fn test_custom_type_value_wins_in_model() {
        let mut attribute = single_nested(WITH_EXTERNAL_TYPE);
        attribute.facets.custom_type = Some(spec::CustomType {
            import: None,
            type_: "my_types.ThingType{}".to_string(),
            value_type: "my_types.ThingValue".to_string(),
        });
        let name = FrameworkIdentifier::new("thing");
        assert_eq!(attribute.model_field(&name).value_type, "my_types.ThingValue");
        assert!(attribute
            .schema(&name)
            .unwrap()
            .starts_with("\"thing\": schema.SingleNestedAttribute{\nCustomType: my_types.ThingType{},\n"));
    }

    #[test]
    fn test_to_from_functions_render() {
        let attribute = single_nested(WITH_EXTERNAL_TYPE);
        let name = FrameworkIdentifier::new("thing");
        let declarations = attribute.custom_type_and_value(&name).unwrap();
        assert_eq!(declarations.len(), 1);
        assert!(declarations[0].contains("\tCount basetypes.Int64Value `tfsdk:\"count\"`\n"));

        let functions = attribute.to_from_functions(&name).unwrap();
        assert_eq!(functions.len(), 1);
        assert!(functions[0].contains("\t\tCount: v.Count.ValueInt64Pointer(),\n"));
        assert!(functions[0].contains("\t\tName: types.StringPointerValue(apiObject.Name),\n"));
    }

    #[test]
    fn test_object_child_with_collection_field_converts() {
        let attribute = single_nested(
            r#"{
                "attributes": [{"name": "settings", "object": {
                    "computed_optional_required": "optional",
                    "attribute_types": [
                        {"name": "mode", "string": {}},
                        {"name": "tags", "list": {"element_type": {"string": {}}}}
                    ]
                }}],
                "associated_external_type": {"import": {"path": "example.com/apisdk"}, "type": "*apisdk.Thing"}
            }"#,
        );
        let name = FrameworkIdentifier::new("thing");
        let functions = attribute.to_from_functions(&name).unwrap();
        assert_eq!(functions.len(), 1);
        assert!(functions[0].contains(
            "\tif val, ok := v.Settings.Attributes()[\"tags\"].(basetypes.ListValue); ok {\ndiags.Append(val.ElementsAs(ctx, &apisdkThing.Settings.Tags, false)...)\n}"
        ));
        assert!(functions[0].contains(
            "\tif val, ok := v.Settings.Attributes()[\"mode\"].(basetypes.StringValue); ok {\napisdkThing.Settings.Mode = val.ValueStringPointer()\n}"
        ));
        assert!(functions[0].contains(
            "\tsettingsTagsVal, d := types.ListValueFrom(ctx, types.StringType, apiObject.Settings.Tags)\n"
        ));
        assert!(functions[0].contains("\t\tSettings: settingsVal,\n"));
    }

    #[test]
    fn test_foreign_custom_value_type_skips_to_from() {
        let mut attribute = single_nested(WITH_EXTERNAL_TYPE);
        attribute.facets.custom_type = Some(spec::CustomType {
            import: None,
            type_: "my_types.ThingType{}".to_string(),
            value_type: "my_types.ThingValue".to_string(),
        });
        let name = FrameworkIdentifier::new("thing");
        assert!(attribute.to_from_functions(&name).unwrap().is_empty());
    }

    #[test]
    fn test_top_level_conversion_unimplemented() {
        let attribute = single_nested(WITH_EXTERNAL_TYPE);
        let name = FrameworkIdentifier::new("thing");
        assert!(attribute.to_conversion(&name).unwrap_err().is_unimplemented());
        assert!(attribute.from_conversion(&name).unwrap_err().is_unimplemented());
    }

    #[test]
    fn test_nested_single_nested_recurses() {
        let attribute = single_nested(
            r#"{"attributes": [{"name": "inner", "single_nested": {"attributes": [{"name": "flag", "bool": {}}]}}]}"#,
        );
        let name = FrameworkIdentifier::new("outer");
        let declarations = attribute.custom_type_and_value(&name).unwrap();
        assert_eq!(declarations.len(), 2);
        assert!(declarations[0].contains("type OuterValue struct {"));
        assert!(declarations[0].contains("\tInner InnerValue `tfsdk:\"inner\"`\n"));
        assert!(declarations[1].contains("type InnerValue struct {"));
    }
}
