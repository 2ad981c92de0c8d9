mod list_nested;
mod set_nested;
mod single_nested;

use std::collections::BTreeMap;

use tfcg_core::spec;

pub use list_nested::ListNestedBlock;
pub use set_nested::SetNestedBlock;
pub use single_nested::SingleNestedBlock;

use crate::attributes::Attributes;
use crate::conversion::ConversionPlan;
use crate::error::GeneratorError;
use crate::identifier::FrameworkIdentifier;
use crate::imports::Imports;
use crate::model::ModelField;
use crate::node::SchemaNode;

/// Every block kind the framework supports.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    ListNested(ListNestedBlock),
    SetNested(SetNestedBlock),
    SingleNested(SingleNestedBlock),
}

impl Block {
    pub fn from_spec(spec: &spec::Block) -> Result<Self, GeneratorError> {
        if let Some(raw) = &spec.list_nested {
            return ListNestedBlock::from_spec(Some(raw)).map(Self::ListNested);
        }
        if let Some(raw) = &spec.set_nested {
            return SetNestedBlock::from_spec(Some(raw)).map(Self::SetNested);
        }
        if let Some(raw) = &spec.single_nested {
            return SingleNestedBlock::from_spec(Some(raw)).map(Self::SingleNested);
        }
        Err(GeneratorError::UndefinedBlockType(format!("{spec:?}")))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::ListNested(_) => "ListNestedBlock",
            Self::SetNested(_) => "SetNestedBlock",
            Self::SingleNested(_) => "SingleNestedBlock",
        }
    }

    fn node(&self) -> &dyn SchemaNode {
        match self {
            Self::ListNested(b) => b,
            Self::SetNested(b) => b,
            Self::SingleNested(b) => b,
        }
    }

    pub fn attributes(&self) -> &Attributes {
        match self {
            Self::ListNested(b) => &b.nested_object.attributes,
            Self::SetNested(b) => &b.nested_object.attributes,
            Self::SingleNested(b) => &b.attributes,
        }
    }

    pub fn blocks(&self) -> &Blocks {
        match self {
            Self::ListNested(b) => &b.nested_object.blocks,
            Self::SetNested(b) => &b.nested_object.blocks,
            Self::SingleNested(b) => &b.blocks,
        }
    }

    pub fn custom_type_and_value(
        &self,
        name: &FrameworkIdentifier,
    ) -> Result<Vec<String>, GeneratorError> {
        match self {
            Self::ListNested(b) => b.custom_type_and_value(name),
            Self::SetNested(b) => b.custom_type_and_value(name),
            Self::SingleNested(b) => b.custom_type_and_value(name),
        }
    }

    pub fn to_from_functions(
        &self,
        name: &FrameworkIdentifier,
    ) -> Result<Vec<String>, GeneratorError> {
        match self {
            Self::ListNested(b) => b.to_from_functions(name),
            Self::SetNested(b) => b.to_from_functions(name),
            Self::SingleNested(b) => b.to_from_functions(name),
        }
    }
}

impl SchemaNode for Block {
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

/// Blocks keyed by name; iteration is always in name order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Blocks(BTreeMap<FrameworkIdentifier, Block>);

impl Blocks {
    /// Build the children of one object. A name may appear only once.
    pub fn from_specs(specs: &[spec::Block]) -> Result<Self, GeneratorError> {
        let mut nodes = BTreeMap::new();
        for raw in specs {
            let name = FrameworkIdentifier::new(raw.name.as_str());
            if nodes.contains_key(&name) {
                return Err(GeneratorError::DuplicateName {
                    kind: "block",
                    name: raw.name.clone(),
                });
            }
            nodes.insert(name, Block::from_spec(raw)?);
        }
        Ok(Self(nodes))
    }

    pub fn get(&self, name: &str) -> Option<&Block> {
        self.0.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FrameworkIdentifier, &Block)> {
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
            .fold(Imports::new(), |imports, block| imports.union(block.imports()))
    }

    pub fn schemas(&self) -> Result<Vec<String>, GeneratorError> {
        self.0
            .iter()
            .map(|(name, block)| {
                log::debug!("rendering {} {name}", block.kind());
                block.schema(name)
            })
            .collect()
    }

    pub fn model_fields(&self) -> Vec<ModelField> {
        self.0
            .iter()
            .map(|(name, block)| block.model_field(name))
            .collect()
    }

    pub fn custom_type_and_value(&self) -> Result<Vec<String>, GeneratorError> {
        let mut declarations = Vec::new();
        for (name, block) in &self.0 {
            declarations.extend(block.custom_type_and_value(name)?);
        }
        Ok(declarations)
    }

    /// Conversion methods of every block, skipping those that are not implemented.
    pub fn to_from_functions(&self) -> Result<Vec<String>, GeneratorError> {
        let mut functions = Vec::new();
        for (name, block) in &self.0 {
            match block.to_from_functions(name) {
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
