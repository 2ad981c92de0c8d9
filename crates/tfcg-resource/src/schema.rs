use tfcg_core::spec;

use crate::attributes::Attributes;
use crate::blocks::Blocks;
use crate::error::GeneratorError;
use crate::facets::go_quote;
use crate::fragments::children_fragment;
use crate::identifier::FrameworkIdentifier;
use crate::imports::{CONTEXT_IMPORT, Imports, SCHEMA_IMPORT};

/// The top-level schema of one resource.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceSchema {
    pub attributes: Attributes,
    pub blocks: Blocks,
    pub description: Option<String>,
    pub markdown_description: Option<String>,
    pub deprecation_message: Option<String>,
}

impl ResourceSchema {
    pub fn from_spec(spec: &spec::Schema) -> Result<Self, GeneratorError> {
        Ok(Self {
            attributes: Attributes::from_specs(&spec.attributes)?,
            blocks: Blocks::from_specs(&spec.blocks)?,
            description: spec.description.clone(),
            markdown_description: spec.markdown_description.clone(),
            deprecation_message: spec.deprecation_message.clone(),
        })
    }

    /// Imports of every node, then `context` and the resource schema package.
    pub fn imports(&self) -> Imports {
        self.attributes
            .imports()
            .union(self.blocks.imports())
            .with_path(CONTEXT_IMPORT)
            .with_path(SCHEMA_IMPORT)
    }

    /// The `func <Name>ResourceSchema(ctx context.Context) schema.Schema` declaration.
    pub fn schema(&self, name: &FrameworkIdentifier) -> Result<String, GeneratorError> {
        let mut body = children_fragment("Attributes", "Attribute", &self.attributes.schemas()?);
        body.push_str(&children_fragment("Blocks", "Block", &self.blocks.schemas()?));
        if let Some(description) = &self.description {
            body.push_str(&format!("\nDescription: {},", go_quote(description)));
        }
        if let Some(markdown) = &self.markdown_description {
            body.push_str(&format!("\nMarkdownDescription: {},", go_quote(markdown)));
        }
        if let Some(message) = &self.deprecation_message {
            body.push_str(&format!("\nDeprecationMessage: {},", go_quote(message)));
        }
        Ok(format!(
            "func {}ResourceSchema(ctx context.Context) schema.Schema {{\nreturn schema.Schema{{{body}\n}}\n}}",
            name.to_pascal_case()
        ))
    }

    /// The `type <Name>Model struct` declaration: attributes first, then blocks.
    pub fn model(&self, name: &FrameworkIdentifier) -> String {
        let fields: String = self
            .attributes
            .model_fields()
            .into_iter()
            .chain(self.blocks.model_fields())
            .map(|field| format!("\t{}\n", field.to_go()))
            .collect();
        format!("type {}Model struct {{\n{fields}}}", name.to_pascal_case())
    }

    pub fn custom_type_and_value(&self) -> Result<Vec<String>, GeneratorError> {
        let mut declarations = self.attributes.custom_type_and_value()?;
        declarations.extend(self.blocks.custom_type_and_value()?);
        Ok(declarations)
    }

    pub fn to_from_functions(&self) -> Result<Vec<String>, GeneratorError> {
        let mut functions = self.attributes.to_from_functions()?;
        functions.extend(self.blocks.to_from_functions()?);
        Ok(functions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imports::TYPES_IMPORT;

    fn resource_schema(json: &str) -> ResourceSchema {
        let raw: spec::Schema = serde_json::from_str(json).unwrap();
        ResourceSchema::from_spec(&raw).unwrap()
    }

    #[test]
    fn test_empty_schema() {
        let schema = ResourceSchema::default();
        let name = FrameworkIdentifier::new("example");
        assert_eq!(
            schema.schema(&name).unwrap(),
            "func ExampleResourceSchema(ctx context.Context) schema.Schema {\nreturn schema.Schema{\n}\n}"
        );
        assert_eq!(schema.model(&name), "type ExampleModel struct {\n}");
        let imports = schema.imports();
        let paths: Vec<&str> = imports.all().iter().map(|i| i.path.as_str()).collect();
        assert_eq!(paths, vec![CONTEXT_IMPORT, SCHEMA_IMPORT]);
    }

    #[test]
    fn test_schema_function() {
        let schema = resource_schema(
            r#"{
                "attributes": [{"name": "bool_attribute", "bool": {"computed_optional_required": "computed"}}],
                "description": "An example",
                "deprecation_message": "gone soon"
            }"#,
        );
        let name = FrameworkIdentifier::new("example_thing");
        insta::assert_snapshot!(schema.schema(&name).unwrap(), @r#"
        func ExampleThingResourceSchema(ctx context.Context) schema.Schema {
        return schema.Schema{
        Attributes: map[string]schema.Attribute{
        "bool_attribute": schema.BoolAttribute{
        Computed: true,
        },
        },
        Description: "An example",
        DeprecationMessage: "gone soon",
        }
        }
        "#);
        let imports = schema.imports();
        let paths: Vec<&str> = imports.all().iter().map(|i| i.path.as_str()).collect();
        assert_eq!(paths, vec![TYPES_IMPORT, CONTEXT_IMPORT, SCHEMA_IMPORT]);
    }

    #[test]
    fn test_model_attributes_then_blocks() {
        let schema = resource_schema(
            r#"{
                "attributes": [
                    {"name": "name", "string": {"computed_optional_required": "required"}},
                    {"name": "count", "int64": {"computed_optional_required": "optional"}}
                ],
                "blocks": [{"name": "rule", "list_nested": {"nested_object": {}}}]
            }"#,
        );
        assert_eq!(
            schema.model(&FrameworkIdentifier::new("example")),
            "type ExampleModel struct {\n\tCount types.Int64 `tfsdk:\"count\"`\n\tName types.String `tfsdk:\"name\"`\n\tRule types.List `tfsdk:\"rule\"`\n}"
        );
    }

    #[test]
    fn test_declarations_attributes_then_blocks() {
        let schema = resource_schema(
            r#"{
                "attributes": [{"name": "zeta", "single_nested": {}}],
                "blocks": [{"name": "alpha", "single_nested": {}}]
            }"#,
        );
        let declarations = schema.custom_type_and_value().unwrap();
        assert_eq!(declarations.len(), 2);
        assert!(declarations[0].contains("type ZetaValue struct {"));
        assert!(declarations[1].contains("type AlphaValue struct {"));
        assert!(schema.to_from_functions().unwrap().is_empty());
    }
}
