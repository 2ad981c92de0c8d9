use std::borrow::Borrow;
use std::fmt;

use heck::{ToLowerCamelCase, ToPascalCase};

/// A schema attribute or block name as written in the specification (snake_case).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameworkIdentifier(String);

impl FrameworkIdentifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `list_nested_attribute` → `ListNestedAttribute`
    pub fn to_pascal_case(&self) -> String {
        self.0.to_pascal_case()
    }

    /// `list_nested_attribute` → `listNestedAttribute`
    pub fn to_camel_case(&self) -> String {
        self.0.to_lower_camel_case()
    }

    /// Name of the generated `attr.Type` wrapper for a nested object.
    pub fn type_name(&self) -> String {
        format!("{}Type", self.to_pascal_case())
    }

    /// Name of the generated `attr.Value` wrapper for a nested object.
    pub fn value_name(&self) -> String {
        format!("{}Value", self.to_pascal_case())
    }
}

impl From<&str> for FrameworkIdentifier {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl Borrow<str> for FrameworkIdentifier {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FrameworkIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
