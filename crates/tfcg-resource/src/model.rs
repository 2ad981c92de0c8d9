use tfcg_core::spec::CustomType;

use crate::identifier::FrameworkIdentifier;

/// A field of the generated `<Resource>Model` struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelField {
    pub name: String,
    pub tfsdk_name: String,
    pub value_type: String,
}

impl ModelField {
    pub fn new(name: &FrameworkIdentifier, value_type: impl Into<String>) -> Self {
        Self {
            name: name.to_pascal_case(),
            tfsdk_name: name.as_str().to_string(),
            value_type: value_type.into(),
        }
    }

    /// Resolve the value type: explicit custom type, then the generated `<Name>Value`
    /// when an external type is associated, then the kind default.
    pub fn resolve(
        name: &FrameworkIdentifier,
        custom_type: Option<&CustomType>,
        has_external_type: bool,
        default_value_type: &str,
    ) -> Self {
        let value_type = match custom_type {
            Some(custom) => custom.value_type.clone(),
            None if has_external_type => name.value_name(),
            None => default_value_type.to_string(),
        };
        Self::new(name, value_type)
    }

    /// `Name types.String `tfsdk:"name"``
    pub fn to_go(&self) -> String {
        format!(
            "{} {} `tfsdk:\"{}\"`",
            self.name, self.value_type, self.tfsdk_name
        )
    }
}
