use std::collections::BTreeMap;

use heck::{ToLowerCamelCase, ToPascalCase};
use tfcg_core::spec::AssociatedExternalType;

use crate::elem_type::ElementType;
use crate::error::{GeneratorError, UnimplementedError};
use crate::identifier::FrameworkIdentifier;
use crate::object_type::ObjectAttributeType;
use crate::primitive::PrimitiveKind;

/// Which way a conversion runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Framework value to native Go value.
    To,
    /// Native Go value to framework value.
    From,
}

/// Collection kinds of the framework type system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionKind {
    List,
    Map,
    Set,
}

impl CollectionKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::List => "List",
            Self::Map => "Map",
            Self::Set => "Set",
        }
    }
}

/// How a single node converts between its framework value and native Go type.
#[derive(Debug, Clone, PartialEq)]
pub enum ConversionPlan {
    /// A single framework function, e.g. `ValueBoolPointer` or `BoolPointerValue`.
    Default(String),
    Collection(CollectionConversion),
    /// Delegate to the `To<Ext>`/`From<Ext>` methods generated on the object's value type.
    AssociatedExternalType {
        external: AssociatedExternalType,
        value_type: String,
    },
    /// Convert an object field by field, keyed by field name.
    ObjectType(BTreeMap<String, ObjectField>),
}

/// A list, map, or set of primitives.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionConversion {
    pub kind: CollectionKind,
    pub element_type: String,
    pub native_type: String,
}

/// One field of an object converted without an associated external type.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectField {
    pub attr_type: String,
    pub value_type: String,
    pub conversion: FieldPlan,
}

/// How a single object field converts.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldPlan {
    /// A framework function on the field's value, e.g. `ValueStringPointer`.
    Primitive(String),
    /// A list, map, or set of primitives converted element-wise.
    Collection(CollectionConversion),
}

/// Plan a collection conversion. Only collections of framework primitives are supported.
pub fn collection_plan(
    kind: CollectionKind,
    element_type: &ElementType,
    subject: &FrameworkIdentifier,
) -> Result<ConversionPlan, GeneratorError> {
    let primitive = primitive_of(element_type)
        .filter(|p| *p != PrimitiveKind::Number)
        .ok_or_else(|| {
            UnimplementedError::new(format!(
                "conversion of {} attribute {subject} with element type {}",
                kind.name().to_lowercase(),
                element_type.type_expr()
            ))
        })?;
    let native_type = match kind {
        CollectionKind::List | CollectionKind::Set => format!("[]{}", primitive.native_type()),
        CollectionKind::Map => format!("map[string]{}", primitive.native_type()),
    };
    Ok(ConversionPlan::Collection(CollectionConversion {
        kind,
        element_type: element_type.type_expr(),
        native_type,
    }))
}

/// Plan the conversion of a single typed field: primitives convert directly, collections
/// of primitives element-wise.
pub fn element_plan(
    element_type: &ElementType,
    direction: Direction,
    subject: &FrameworkIdentifier,
) -> Result<ConversionPlan, GeneratorError> {
    if let Some(primitive) = primitive_of(element_type) {
        let func = match direction {
            Direction::To => primitive.to_func(),
            Direction::From => primitive.from_func(),
        };
        return Ok(ConversionPlan::Default(func.to_string()));
    }
    match element_type {
        ElementType::List {
            element_type,
            custom_type: None,
        } => collection_plan(CollectionKind::List, element_type, subject),
        ElementType::Map {
            element_type,
            custom_type: None,
        } => collection_plan(CollectionKind::Map, element_type, subject),
        ElementType::Set {
            element_type,
            custom_type: None,
        } => collection_plan(CollectionKind::Set, element_type, subject),
        _ => Err(UnimplementedError::new(format!(
            "conversion of {subject} of type {}",
            element_type.type_expr()
        ))
        .into()),
    }
}

/// Plan an object conversion field by field. Primitive fields and collections of primitives
/// are supported; nested objects and custom-typed fields are not.
pub fn object_fields_plan(
    attribute_types: &[ObjectAttributeType],
    direction: Direction,
    subject: &FrameworkIdentifier,
) -> Result<ConversionPlan, GeneratorError> {
    let mut fields = BTreeMap::new();
    for attribute_type in attribute_types {
        let field = FrameworkIdentifier::new(format!("{subject}.{}", attribute_type.name));
        let conversion = match element_plan(&attribute_type.element_type, direction, &field)? {
            ConversionPlan::Default(func) => FieldPlan::Primitive(func),
            ConversionPlan::Collection(collection) => FieldPlan::Collection(collection),
            _ => {
                return Err(UnimplementedError::new(format!(
                    "conversion of object attribute {subject} field {} of type {}",
                    attribute_type.name,
                    attribute_type.element_type.type_expr()
                ))
                .into());
            }
        };
        fields.insert(
            attribute_type.name.clone(),
            ObjectField {
                attr_type: attribute_type.element_type.type_expr(),
                value_type: attribute_type.element_type.value_type(),
                conversion,
            },
        );
    }
    Ok(ConversionPlan::ObjectType(fields))
}

/// The primitive kind of an element type without a custom type.
fn primitive_of(element_type: &ElementType) -> Option<PrimitiveKind> {
    match element_type {
        ElementType::Bool(None) => Some(PrimitiveKind::Bool),
        ElementType::Float64(None) => Some(PrimitiveKind::Float64),
        ElementType::Int64(None) => Some(PrimitiveKind::Int64),
        ElementType::Number(None) => Some(PrimitiveKind::Number),
        ElementType::String(None) => Some(PrimitiveKind::String),
        _ => None,
    }
}

/// Naming helpers for an associated external type such as `*apisdk.Thing`.
pub struct ExternalTypeNames {
    /// `apisdk.Thing`
    pub reference: String,
    /// `ApisdkThing`
    pub pascal: String,
    /// `apisdkThing`
    pub variable: String,
    pub is_pointer: bool,
}

impl ExternalTypeNames {
    pub fn new(external: &AssociatedExternalType) -> Self {
        let is_pointer = external.type_.starts_with('*');
        let reference = external.type_.trim_start_matches('*').to_string();
        let words = reference.replace('.', "_");
        Self {
            pascal: words.to_pascal_case(),
            variable: words.to_lower_camel_case(),
            reference,
            is_pointer,
        }
    }
}

/// Go statements converting one field inside a generated `To`/`From` function.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldConversion {
    /// Struct field name on both the value and the native type.
    pub name: String,
    /// Statements run before the struct literal is built.
    pub preamble: Vec<String>,
    /// Expression assigned to the field in the struct literal, if any.
    pub expr: Option<String>,
    /// Statements run after the struct literal is built.
    pub post: Vec<String>,
}

impl ConversionPlan {
    /// Statements converting `v.<Field>` into a field of the native struct `target`.
    pub fn render_to(&self, field: &FrameworkIdentifier, target: &str) -> FieldConversion {
        let name = field.to_pascal_case();
        let local = field.to_camel_case();
        let mut conversion = FieldConversion {
            name: name.clone(),
            ..Default::default()
        };
        match self {
            Self::Default(func) => {
                conversion.expr = Some(format!("v.{name}.{func}()"));
            }
            Self::Collection(collection) => {
                conversion.preamble = vec![
                    format!("var {local}Field {}", collection.native_type),
                    format!("diags.Append(v.{name}.ElementsAs(ctx, &{local}Field, false)...)"),
                ];
                conversion.expr = Some(format!("{local}Field"));
            }
            Self::AssociatedExternalType { external, .. } => {
                let names = ExternalTypeNames::new(external);
                conversion.preamble = vec![
                    format!("{local}Field, d := v.{name}.To{}(ctx)", names.pascal),
                    "diags.Append(d...)".to_string(),
                ];
                conversion.expr = Some(format!("{local}Field"));
            }
            Self::ObjectType(fields) => {
                conversion.post = fields
                    .iter()
                    .map(|(field_name, object_field)| {
                        let destination = format!("{target}.{name}.{}", field_name.to_pascal_case());
                        let assign = match &object_field.conversion {
                            FieldPlan::Primitive(func) => format!("{destination} = val.{func}()"),
                            FieldPlan::Collection(_) => format!(
                                "diags.Append(val.ElementsAs(ctx, &{destination}, false)...)"
                            ),
                        };
                        format!(
                            "if val, ok := v.{name}.Attributes()[\"{field_name}\"].({}); ok {{\n{assign}\n}}",
                            object_field.value_type
                        )
                    })
                    .collect();
            }
        }
        conversion
    }

    /// Statements building `<Field>` of the value from `apiObject.<Field>`.
    pub fn render_from(&self, field: &FrameworkIdentifier) -> FieldConversion {
        let name = field.to_pascal_case();
        let local = field.to_camel_case();
        let mut conversion = FieldConversion {
            name: name.clone(),
            ..Default::default()
        };
        match self {
            Self::Default(func) => {
                conversion.expr = Some(format!("types.{func}(apiObject.{name})"));
            }
            Self::Collection(collection) => {
                conversion.preamble = vec![
                    format!(
                        "{local}Val, d := types.{}ValueFrom(ctx, {}, apiObject.{name})",
                        collection.kind.name(),
                        collection.element_type
                    ),
                    "diags.Append(d...)".to_string(),
                ];
                conversion.expr = Some(format!("{local}Val"));
            }
            Self::AssociatedExternalType {
                external,
                value_type,
            } => {
                let names = ExternalTypeNames::new(external);
                conversion.preamble = vec![
                    format!(
                        "{local}Val, d := {value_type}{{}}.From{}(ctx, apiObject.{name})",
                        names.pascal
                    ),
                    "diags.Append(d...)".to_string(),
                ];
                conversion.expr = Some(format!("{local}Val"));
            }
            Self::ObjectType(fields) => {
                let attr_types: Vec<ObjectAttributeTypeRef<'_>> = fields
                    .iter()
                    .map(|(field_name, object_field)| ObjectAttributeTypeRef {
                        name: field_name,
                        attr_type: &object_field.attr_type,
                    })
                    .collect();
                let mut values = Vec::new();
                for (field_name, object_field) in fields {
                    let source = format!("apiObject.{name}.{}", field_name.to_pascal_case());
                    match &object_field.conversion {
                        FieldPlan::Primitive(func) => {
                            values.push(format!("\"{field_name}\": types.{func}({source}),"));
                        }
                        FieldPlan::Collection(collection) => {
                            let field_local = format!("{local}{}Val", field_name.to_pascal_case());
                            conversion.preamble.push(format!(
                                "{field_local}, d := types.{}ValueFrom(ctx, {}, {source})",
                                collection.kind.name(),
                                collection.element_type
                            ));
                            conversion.preamble.push("diags.Append(d...)".to_string());
                            values.push(format!("\"{field_name}\": {field_local},"));
                        }
                    }
                }
                conversion.preamble.extend([
                    format!(
                        "{local}Val, d := types.ObjectValue({}, map[string]attr.Value{{\n{}\n}})",
                        attr_types_literal(&attr_types),
                        values.join("\n")
                    ),
                    "diags.Append(d...)".to_string(),
                ]);
                conversion.expr = Some(format!("{local}Val"));
            }
        }
        conversion
    }
}

struct ObjectAttributeTypeRef<'a> {
    name: &'a str,
    attr_type: &'a str,
}

fn attr_types_literal(types: &[ObjectAttributeTypeRef<'_>]) -> String {
    if types.is_empty() {
        return "map[string]attr.Type{}".to_string();
    }
    let entries: Vec<String> = types
        .iter()
        .map(|t| format!("\"{}\": {},", t.name, t.attr_type))
        .collect();
    format!("map[string]attr.Type{{\n{}\n}}", entries.join("\n"))
}

/// Plan for an object attribute that delegates to its associated external type.
pub fn external_type_plan(external: &AssociatedExternalType, value_type: &str) -> ConversionPlan {
    ConversionPlan::AssociatedExternalType {
        external: external.clone(),
        value_type: value_type.to_string(),
    }
}
