mod collection;
mod list_nested;
mod map_nested;
mod object;
mod primitives;
mod set_nested;
mod single_nested;

use std::collections::BTreeMap;

use tfcg_core::spec;

pub use collection::{ListAttribute, MapAttribute, SetAttribute};
pub use list_nested::ListNestedAttribute;
pub use map_nested::MapNestedAttribute;
pub use object::ObjectAttribute;
pub use primitives::{
    BoolAttribute, Float64Attribute, Int64Attribute, NumberAttribute, StringAttribute,
};
pub use set_nested::SetNestedAttribute;
pub use single_nested::SingleNestedAttribute;

use crate::conversion::ConversionPlan;
use crate::error::GeneratorError;
use crate::identifier::FrameworkIdentifier;
use crate::imports::Imports;
use crate::model::ModelField;
use crate::node::SchemaNode;

/// Every attribute kind the framework supports.
#[derive(Debug, Clone, PartialEq)]
pub enum Attribute {
    Bool(BoolAttribute),
    Float64(Float64Attribute),
    Int64(Int64Attribute),
    Number(NumberAttribute),
    String(StringAttribute),
    List(ListAttribute),
    Map(MapAttribute),
    Set(SetAttribute),
    ListNested(ListNestedAttribute),
    MapNested(MapNestedAttribute),
    SetNested(SetNestedAttribute),
    SingleNested(SingleNestedAttribute),
    Object(ObjectAttribute),
}

impl Attribute {
    /// Build the generator for whichever kind member is set.
    pub fn from_spec(spec: &spec::Attribute) -> Result<Self, GeneratorError> {
        if let Some(raw) = &spec.bool {
            return BoolAttribute::from_spec(Some(raw)).map(Self::Bool);
        }
        if let Some(raw) = &spec.float64 {
            return Float64Attribute::from_spec(Some(raw)).map(Self::Float64);
        }
        if let Some(raw) = &spec.int64 {
            return Int64Attribute::from_spec(Some(raw)).map(Self::Int64);
        }
        if let Some(raw) = &spec.number {
            return NumberAttribute::from_spec(Some(raw)).map(Self::Number);
        }
        if let Some(raw) = &spec.string {
            return StringAttribute::from_spec(Some(raw)).map(Self::String);
        }
        if let Some(raw) = &spec.list {
            return ListAttribute::from_spec(Some(raw)).map(Self::List);
        }
        if let Some(raw) = &spec.map {
            return MapAttribute::from_spec(Some(raw)).map(Self::Map);
        }
        if let Some(raw) = &spec.set {
            return SetAttribute::from_spec(Some(raw)).map(Self::Set);
        }
        if let Some(raw) = &spec.list_nested {
            return ListNestedAttribute::from_spec(Some(raw)).map(Self::ListNested);
        }
        if let Some(raw) = &spec.map_nested {
            return MapNestedAttribute::from_spec(Some(raw)).map(Self::MapNested);
        }
        if let Some(raw) = &spec.set_nested {
            return SetNestedAttribute::from_spec(Some(raw)).map(Self::SetNested);
        }
        if let Some(raw) = &spec.single_nested {
            return SingleNestedAttribute::from_spec(Some(raw)).map(Self::SingleNested);
        }
        if let Some(raw) = &spec.object {
            return ObjectAttribute::from_spec(Some(raw)).map(Self::Object);
        }
        Err(GeneratorError::UndefinedAttributeType(format!("{spec:?}")))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Bool(_) => "BoolAttribute",
            Self::Float64(_) => "Float64Attribute",
            Self::Int64(_) => "Int64Attribute",
            Self::Number(_) => "NumberAttribute",
            Self::String(_) => "StringAttribute",
            Self::List(_) => "ListAttribute",
            Self::Map(_) => "MapAttribute",
            Self::Set(_) => "SetAttribute",
            Self::ListNested(_) => "ListNestedAttribute",
            Self::MapNested(_) => "MapNestedAttribute",
            Self::SetNested(_) => "SetNestedAttribute",
            Self::SingleNested(_) => "SingleNestedAttribute",
            Self::Object(_) => "ObjectAttribute",
        }
    }

    fn node(&self) -> &dyn SchemaNode {
        match self {
            Self::Bool(a) => a,
            Self::Float64(a) => a,
            Self::Int64(a) => a,
            Self::Number(a) => a,
            Self::String(a) => a,
            Self::List(a) => a,
            Self::Map(a) => a,
            Self::Set(a) => a,
            Self::ListNested(a) => a,
            Self::MapNested(a) => a,
            Self::SetNested(a) => a,
            Self::SingleNested(a) => a,
            Self::Object(a) => a,
        }
    }

    /// The child attributes of nested kinds.
    pub fn attributes(&self) -> Option<&Attributes> {
        match self {
            Self::ListNested(a) => Some(&a.nested_object.attributes),
            Self::MapNested(a) => Some(&a.nested_object.attributes),
            Self::SetNested(a) => Some(&a.nested_object.attributes),
            Self::SingleNested(a) => Some(&a.attributes),
            _ => None,
        }
    }

    /// Generated `<Name>Type`/`<Name>Value` declarations for this attribute and its children.
    pub fn custom_type_and_value(
        &self,
        name: &FrameworkIdentifier,
    ) -> Result<Vec<String>, GeneratorError> {
        match self {
            Self::ListNested(a) => a.custom_type_and_value(name),
            Self::MapNested(a) => a.custom_type_and_value(name),
            Self::SetNested(a) => a.custom_type_and_value(name),
            Self::SingleNested(a) => a.custom_type_and_value(name),
            Self::Object(a) => a.custom_type_and_value(name),
            _ => Ok(Vec::new()),
        }
    }

    /// Generated `To<Ext>`/`From<Ext>` methods for this attribute and its children.
    pub fn to_from_functions(
        &self,
        name: &FrameworkIdentifier,
    ) -> Result<Vec<String>, GeneratorError> {
        match self {
            Self::ListNested(a) => a.to_from_functions(name),
            Self::MapNested(a) => a.to_from_functions(name),
            Self::SetNested(a) => a.to_from_functions(name),
            Self::SingleNested(a) => a.to_from_functions(name),
            Self::Object(a) => a.to_from_functions(name),
            _ => Ok(Vec::new()),
        }
    }
}

impl SchemaNode for Attribute {
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

    fn attr_value(&self, name: &FrameworkIdentifier) -> String {
        self.node().attr_value(name)
    }

    fn to_conversion(&self, name: &FrameworkIdentifier) -> Result<ConversionPlan, GeneratorError> {
        self.node().to_conversion(name)
    }

    fn from_conversion(
        &self,
        name: &FrameworkIdentifier,
    ) -> Result<ConversionPlan, GeneratorError> {
        self.node().from_conversion(name)
    }
}

/// Attributes keyed by name; iteration is always in name order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes(BTreeMap<FrameworkIdentifier, Attribute>);

impl Attributes {
    /// Build the children of one object. A name may appear only once.
    pub fn from_specs(specs: &[spec::Attribute]) -> Result<Self, GeneratorError> {
        let mut nodes = BTreeMap::new();
        for raw in specs {
            let name = FrameworkIdentifier::new(raw.name.as_str());
            if nodes.contains_key(&name) {
                return Err(GeneratorError::DuplicateName {
                    kind: "attribute",
                    name: raw.name.clone(),
                });
            }
            nodes.insert(name, Attribute::from_spec(raw)?);
        }
        Ok(Self(nodes))
    }

    pub fn get(&self, name: &str) -> Option<&Attribute> {
        self.0.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FrameworkIdentifier, &Attribute)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn imports(&self) -> Imports {
        self.0
            .values()
            .fold(Imports::new(), |imports, attribute| imports.union(attribute.imports()))
    }

    pub fn schemas(&self) -> Result<Vec<String>, GeneratorError> {
        self.0
            .iter()
            .map(|(name, attribute)| {
                log::debug!("rendering {} {name}", attribute.kind());
                attribute.schema(name)
            })
            .collect()
    }

    pub fn model_fields(&self) -> Vec<ModelField> {
        self.0
            .iter()
            .map(|(name, attribute)| attribute.model_field(name))
            .collect()
    }

    pub fn custom_type_and_value(&self) -> Result<Vec<String>, GeneratorError> {
        let mut declarations = Vec::new();
        for (name, attribute) in &self.0 {
            declarations.extend(attribute.custom_type_and_value(name)?);
        }
        Ok(declarations)
    }

    /// Conversion methods of every attribute, skipping those that are not implemented.
    pub fn to_from_functions(&self) -> Result<Vec<String>, GeneratorError> {
        let mut functions = Vec::new();
        for (name, attribute) in &self.0 {
            match attribute.to_from_functions(name) {
                Ok(generated) => functions.extend(generated),
                Err(err) if err.is_unimplemented() => {
                    log::warn!("skipping to/from functions of {name}: {err}");
                }
                Err(err) => return Err(err),
            }
        }
        Ok(functions)
    }
}
