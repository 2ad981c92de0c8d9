use tfcg_core::config::GenerateOptions;
use tfcg_core::spec::Specification;
use tfcg_core::{CodeGenerator, GeneratedFile, parse};
use tfcg_resource::{GeneratorError, ResourceGenerator};

const SCENARIOS: &str = include_str!("fixtures/scenarios.json");

fn generate(options: &GenerateOptions) -> GeneratedFile {
    let spec = parse::from_json(SCENARIOS).unwrap();
    let mut files = ResourceGenerator.generate(&spec, options).unwrap();
    assert_eq!(files.len(), 1);
    files.remove(0)
}

fn import_block(content: &str) -> Vec<&str> {
    let start = content.find("import (\n").unwrap() + "import (\n".len();
    let end = start + content[start..].find("\n)").unwrap();
    content[start..end].lines().map(str::trim).collect()
}

#[test]
fn file_layout() {
    let file = generate(&GenerateOptions::default());
    assert_eq!(file.path, "widget_resource_gen.go");
    assert!(file
        .content
        .starts_with("// Code generated by tfcg. DO NOT EDIT.\n\npackage provider\n\nimport (\n"));
    assert!(file.content.contains(
        "func WidgetResourceSchema(ctx context.Context) schema.Schema {\nreturn schema.Schema{\nAttributes: map[string]schema.Attribute{\n"
    ));
    assert!(file.content.contains("\nDescription: \"Manages a widget.\",\n}\n}"));
}

#[test]
fn generation_is_idempotent() {
    let options = GenerateOptions::default();
    assert_eq!(generate(&options).content, generate(&options).content);
}

#[test]
fn imports_are_sorted_and_deduplicated() {
    let file = generate(&GenerateOptions::default());
    let imports = import_block(&file.content);
    let mut sorted = imports.clone();
    sorted.sort();
    assert_eq!(imports, sorted);

    let mut deduped = imports.clone();
    deduped.dedup();
    assert_eq!(imports, deduped);

    assert!(imports.contains(&"\"example.com/apisdk\""));
    assert!(imports.contains(
        &"\"github.com/hashicorp/terraform-plugin-framework/resource/schema/stringplanmodifier\""
    ));
    assert!(imports.contains(&"\"github.com/hashicorp/terraform-plugin-framework/resource/schema\""));
}

#[test]
fn computed_bool_attribute() {
    let file = generate(&GenerateOptions::default());
    assert!(file
        .content
        .contains("\"bool_attribute\": schema.BoolAttribute{\nComputed: true,\n},"));
    assert!(file
        .content
        .contains("\tBoolAttribute types.Bool `tfsdk:\"bool_attribute\"`\n"));
}

#[test]
fn list_of_list_of_object() {
    let file = generate(&GenerateOptions::default());
    assert!(file.content.contains(
        "\"list_attribute\": schema.ListAttribute{\nComputed: true,\nElementType: types.ListType{\nElemType: types.ObjectType{\nAttrTypes: map[string]attr.Type{\n\"str\": types.StringType,\n},\n},\n},\n},"
    ));
}

#[test]
fn empty_list_nested_block() {
    let file = generate(&GenerateOptions::default());
    assert!(file.content.contains(
        "\"list_nested_block\": schema.ListNestedBlock{\nNestedObject: schema.NestedBlockObject{\nCustomType: ListNestedBlockType{\nObjectType: types.ObjectType{\nAttrTypes: ListNestedBlockValue{}.AttributeTypes(ctx),\n},\n},\n},\n},"
    ));
    assert!(file.content.contains("type ListNestedBlockValue struct {"));
}

#[test]
fn map_nested_conversions_are_skipped() {
    let file = generate(&GenerateOptions::default());
    assert!(file.content.contains("type LabelsValue struct {"));
    assert!(!file.content.contains("func (v LabelsValue) ToApisdkLabel("));
}

#[test]
fn single_nested_with_external_type() {
    let file = generate(&GenerateOptions::default());
    assert!(file.content.contains(
        "\"thing\": schema.SingleNestedAttribute{\nCustomType: ThingType{\nObjectType: types.ObjectType{\nAttrTypes: ThingValue{}.AttributeTypes(ctx),\n},\n},\nOptional: true,\n"
    ));
    assert!(file.content.contains("\tThing ThingValue `tfsdk:\"thing\"`\n"));
    assert!(file.content.contains(
        "func (v ThingValue) ToApisdkThing(ctx context.Context) (*apisdk.Thing, diag.Diagnostics) {"
    ));
    assert!(file.content.contains("\tvar tagsField []*string\n"));
    assert!(file
        .content
        .contains("\ttagsVal, d := types.ListValueFrom(ctx, types.StringType, apiObject.Tags)\n"));
    assert!(file
        .content
        .contains("\t\tName: types.StringPointerValue(apiObject.Name),\n"));
}

#[test]
fn options_disable_sections() {
    let options = GenerateOptions {
        package: "widgets".to_string(),
        model: false,
        to_from: false,
    };
    let file = generate(&options);
    assert!(file.content.contains("\npackage widgets\n"));
    assert!(!file.content.contains("type WidgetModel struct"));
    assert!(!file.content.contains("ToApisdkThing"));
    assert!(file.content.contains("func WidgetResourceSchema("));
    // The schema still refers to the generated nested types.
    assert!(file.content.contains("CustomType: ThingType{"));
    assert!(file.content.contains("type ThingType struct {"));
    assert!(!import_block(&file.content).contains(&"\"example.com/apisdk\""));
}

#[test]
fn every_import_is_referenced() {
    let disabled = GenerateOptions {
        model: false,
        to_from: false,
        ..GenerateOptions::default()
    };
    for options in [GenerateOptions::default(), disabled] {
        let file = generate(&options);
        let body = &file.content[file.content.find("\n)\n").unwrap()..];
        for line in import_block(&file.content) {
            let path = line.trim_matches('"');
            let package = path.rsplit('/').next().unwrap();
            assert!(
                references(body, package),
                "{package} imported but not referenced"
            );
        }
    }
}

fn references(body: &str, package: &str) -> bool {
    body.match_indices(&format!("{package}.")).any(|(at, _)| {
        !body[..at]
            .chars()
            .next_back()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
    })
}

#[test]
fn nested_duplicate_names_abort() {
    let spec: Specification = serde_json::from_str(
        r#"{"version": "0.1", "resources": [{"name": "dup", "schema": {"attributes": [
            {"name": "outer", "single_nested": {"attributes": [{"name": "a", "bool": {}}, {"name": "a", "string": {}}]}}
        ]}}]}"#,
    )
    .unwrap();
    let err = ResourceGenerator
        .generate(&spec, &GenerateOptions::default())
        .unwrap_err();
    assert!(matches!(err, GeneratorError::DuplicateName { .. }));
}

#[test]
fn undefined_attribute_aborts() {
    let spec: Specification = serde_json::from_str(
        r#"{"version": "0.1", "resources": [{"name": "broken", "schema": {"attributes": [{"name": "mystery"}]}}]}"#,
    )
    .unwrap();
    let err = ResourceGenerator
        .generate(&spec, &GenerateOptions::default())
        .unwrap_err();
    assert!(matches!(err, GeneratorError::UndefinedAttributeType(_)));
}

#[test]
fn one_file_per_resource() {
    let spec: Specification = serde_json::from_str(
        r#"{"version": "0.1", "resources": [{"name": "alpha"}, {"name": "beta"}]}"#,
    )
    .unwrap();
    let files = ResourceGenerator
        .generate(&spec, &GenerateOptions::default())
        .unwrap();
    let paths: Vec<&str> = files.iter().map(|f| f.path.as_str()).collect();
    assert_eq!(paths, vec!["alpha_resource_gen.go", "beta_resource_gen.go"]);
    assert!(files[1].content.contains("type BetaModel struct {\n}"));
}
