use tfcg_core::spec::{self, CustomType};

use crate::error::GeneratorError;
use crate::facets::custom_type_imports;
use crate::imports::{ATTR_IMPORT, Imports, TYPES_IMPORT};
use crate::object_type::{self, ObjectAttributeType};

/// The element type of a list, map, or set, or the type of an object field.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementType {
    Bool(Option<CustomType>),
    Float64(Option<CustomType>),
    Int64(Option<CustomType>),
    Number(Option<CustomType>),
    String(Option<CustomType>),
    List {
        element_type: Box<ElementType>,
        custom_type: Option<CustomType>,
    },
    Map {
        element_type: Box<ElementType>,
        custom_type: Option<CustomType>,
    },
    Set {
        element_type: Box<ElementType>,
        custom_type: Option<CustomType>,
    },
    Object {
        attribute_types: Vec<ObjectAttributeType>,
        custom_type: Option<CustomType>,
    },
}

impl ElementType {
    pub fn from_spec(spec: &spec::ElementType) -> Result<Self, GeneratorError> {
        Self::from_kind(spec)
            .unwrap_or_else(|| Err(GeneratorError::UndefinedElementType(format!("{spec:?}"))))
    }

    /// Resolve whichever kind member is set, or `None` when none is.
    pub(crate) fn from_kind(kind: &spec::ElementType) -> Option<Result<Self, GeneratorError>> {
        let primitive = |p: &spec::PrimitiveType| p.custom_type.clone();
        let collection = |c: &spec::CollectionType| -> Result<_, GeneratorError> {
            Ok((
                Box::new(ElementType::from_spec(&c.element_type)?),
                c.custom_type.clone(),
            ))
        };

        if let Some(p) = &kind.bool {
            return Some(Ok(Self::Bool(primitive(p))));
        }
        if let Some(p) = &kind.float64 {
            return Some(Ok(Self::Float64(primitive(p))));
        }
        if let Some(p) = &kind.int64 {
            return Some(Ok(Self::Int64(primitive(p))));
        }
        if let Some(p) = &kind.number {
            return Some(Ok(Self::Number(primitive(p))));
        }
        if let Some(p) = &kind.string {
            return Some(Ok(Self::String(primitive(p))));
        }
        if let Some(c) = &kind.list {
            return Some(collection(c).map(|(element_type, custom_type)| Self::List {
                element_type,
                custom_type,
            }));
        }
        if let Some(c) = &kind.map {
            return Some(collection(c).map(|(element_type, custom_type)| Self::Map {
                element_type,
                custom_type,
            }));
        }
        if let Some(c) = &kind.set {
            return Some(collection(c).map(|(element_type, custom_type)| Self::Set {
                element_type,
                custom_type,
            }));
        }
        if let Some(o) = &kind.object {
            return Some(
                object_type::from_specs(&o.attribute_types).map(|attribute_types| Self::Object {
                    attribute_types,
                    custom_type: o.custom_type.clone(),
                }),
            );
        }
        None
    }

    pub fn custom_type(&self) -> Option<&CustomType> {
        match self {
            Self::Bool(c) | Self::Float64(c) | Self::Int64(c) | Self::Number(c) | Self::String(c) => {
                c.as_ref()
            }
            Self::List { custom_type, .. }
            | Self::Map { custom_type, .. }
            | Self::Set { custom_type, .. }
            | Self::Object { custom_type, .. } => custom_type.as_ref(),
        }
    }

    /// The framework `attr.Type` expression, e.g. `types.ListType{\nElemType: types.StringType,\n}`.
    pub fn type_expr(&self) -> String {
        if let Some(custom) = self.custom_type() {
            return custom.type_.clone();
        }
        match self {
            Self::Bool(_) => "types.BoolType".to_string(),
            Self::Float64(_) => "types.Float64Type".to_string(),
            Self::Int64(_) => "types.Int64Type".to_string(),
            Self::Number(_) => "types.NumberType".to_string(),
            Self::String(_) => "types.StringType".to_string(),
            Self::List { element_type, .. } => {
                format!("types.ListType{{\nElemType: {},\n}}", element_type.type_expr())
            }
            Self::Map { element_type, .. } => {
                format!("types.MapType{{\nElemType: {},\n}}", element_type.type_expr())
            }
            Self::Set { element_type, .. } => {
                format!("types.SetType{{\nElemType: {},\n}}", element_type.type_expr())
            }
            Self::Object {
                attribute_types, ..
            } => format!(
                "types.ObjectType{{\nAttrTypes: {},\n}}",
                object_type::attr_types_map(attribute_types)
            ),
        }
    }

    /// The `attr.Value` implementation holding a value of this type.
    pub fn value_type(&self) -> String {
        if let Some(custom) = self.custom_type() {
            return custom.value_type.clone();
        }
        match self {
            Self::Bool(_) => "basetypes.BoolValue",
            Self::Float64(_) => "basetypes.Float64Value",
            Self::Int64(_) => "basetypes.Int64Value",
            Self::Number(_) => "basetypes.NumberValue",
            Self::String(_) => "basetypes.StringValue",
            Self::List { .. } => "basetypes.ListValue",
            Self::Map { .. } => "basetypes.MapValue",
            Self::Set { .. } => "basetypes.SetValue",
            Self::Object { .. } => "basetypes.ObjectValue",
        }
        .to_string()
    }

    /// The base `types` import plus everything needed below this level.
    pub fn imports(&self) -> Imports {
        Imports::new()
            .with_path(TYPES_IMPORT)
            .union(self.nested_imports())
    }

    fn nested_imports(&self) -> Imports {
        if let Some(custom) = self.custom_type() {
            return custom_type_imports(Some(custom));
        }
        match self {
            Self::Bool(_) | Self::Float64(_) | Self::Int64(_) | Self::Number(_) | Self::String(_) => {
                Imports::new()
            }
            Self::List { element_type, .. }
            | Self::Map { element_type, .. }
            | Self::Set { element_type, .. } => element_type.nested_imports(),
            Self::Object {
                attribute_types, ..
            } => attribute_types
                .iter()
                .fold(Imports::new().with_path(ATTR_IMPORT), |imports, t| {
                    imports.union(t.element_type.nested_imports())
                }),
        }
    }
}
