use tfcg_core::spec::CustomType;

use crate::conversion::ConversionPlan;
use crate::error::{GeneratorError, UnimplementedError};
use crate::facets::{DefaultValue, NodeFacets, default_imports};
use crate::fragments::SchemaWriter;
use crate::identifier::FrameworkIdentifier;
use crate::imports::Imports;
use crate::model::ModelField;

/// The scalar kinds of the framework type system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveKind {
    Bool,
    Float64,
    Int64,
    Number,
    String,
}

impl PrimitiveKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Bool => "Bool",
            Self::Float64 => "Float64",
            Self::Int64 => "Int64",
            Self::Number => "Number",
            Self::String => "String",
        }
    }

    /// Framework function converting the value to its native form.
    pub fn to_func(self) -> &'static str {
        match self {
            Self::Bool => "ValueBoolPointer",
            Self::Float64 => "ValueFloat64Pointer",
            Self::Int64 => "ValueInt64Pointer",
            Self::Number => "ValueBigFloat",
            Self::String => "ValueStringPointer",
        }
    }

    /// Framework function building the value from its native form.
    pub fn from_func(self) -> &'static str {
        match self {
            Self::Bool => "BoolPointerValue",
            Self::Float64 => "Float64PointerValue",
            Self::Int64 => "Int64PointerValue",
            Self::Number => "NumberValue",
            Self::String => "StringPointerValue",
        }
    }

    /// The native Go type the conversion functions produce and accept.
    pub fn native_type(self) -> &'static str {
        match self {
            Self::Bool => "*bool",
            Self::Float64 => "*float64",
            Self::Int64 => "*int64",
            Self::Number => "*big.Float",
            Self::String => "*string",
        }
    }

    pub fn model_value_type(self) -> String {
        format!("types.{}", self.name())
    }

    pub fn attr_type(self, custom_type: Option<&CustomType>) -> String {
        match custom_type {
            Some(custom) => custom.type_.clone(),
            None => format!("basetypes.{}Type{{}}", self.name()),
        }
    }

    pub fn attr_value(self, custom_type: Option<&CustomType>) -> String {
        match custom_type {
            Some(custom) => custom.value_type.clone(),
            None => format!("basetypes.{}Value", self.name()),
        }
    }
}

/// Shared rendering for the five primitive attribute generators.
pub(crate) struct PrimitiveNode<'a> {
    pub kind: PrimitiveKind,
    pub facets: &'a NodeFacets,
    pub default: Option<&'a DefaultValue>,
}

impl PrimitiveNode<'_> {
    pub fn imports(&self) -> Imports {
        self.facets.imports().union(default_imports(self.default))
    }

    pub fn schema(&self, name: &FrameworkIdentifier) -> String {
        let custom_type = self.facets.custom_type.as_ref().map(|c| c.type_.as_str());
        let mut writer = SchemaWriter::new(name, &format!("{}Attribute", self.kind.name()));
        writer
            .facets(self.facets, custom_type, self.kind.name())
            .default(self.default);
        writer.finish()
    }

    pub fn model_field(&self, name: &FrameworkIdentifier) -> ModelField {
        ModelField::resolve(
            name,
            self.facets.custom_type.as_ref(),
            false,
            &self.kind.model_value_type(),
        )
    }

    pub fn attr_type(&self) -> String {
        self.kind.attr_type(self.facets.custom_type.as_ref())
    }

    pub fn attr_value(&self) -> String {
        self.kind.attr_value(self.facets.custom_type.as_ref())
    }

    pub fn to_conversion(&self, name: &FrameworkIdentifier) -> Result<ConversionPlan, GeneratorError> {
        self.require_builtin_type(name)?;
        Ok(ConversionPlan::Default(self.kind.to_func().to_string()))
    }

    pub fn from_conversion(
        &self,
        name: &FrameworkIdentifier,
    ) -> Result<ConversionPlan, GeneratorError> {
        self.require_builtin_type(name)?;
        Ok(ConversionPlan::Default(self.kind.from_func().to_string()))
    }

    /// The conversion functions are only known for framework value types.
    fn require_builtin_type(&self, name: &FrameworkIdentifier) -> Result<(), GeneratorError> {
        if self.facets.custom_type.is_some() {
            return Err(UnimplementedError::new(format!(
                "conversion of {} attribute {name} with a custom type",
                self.kind.name().to_lowercase()
            ))
            .into());
        }
        Ok(())
    }
}
