use crate::conversion::ConversionPlan;
use crate::error::GeneratorError;
use crate::identifier::FrameworkIdentifier;
use crate::imports::Imports;
use crate::model::ModelField;

/// The contract every attribute and block generator fulfils.
pub trait SchemaNode {
    /// Every import the rendered declaration and its children need.
    fn imports(&self) -> Imports;

    /// The `"name": schema.<Kind>{...},` declaration.
    fn schema(&self, name: &FrameworkIdentifier) -> Result<String, GeneratorError>;

    /// The field holding this node's value in the resource model struct.
    fn model_field(&self, name: &FrameworkIdentifier) -> ModelField;

    /// The `attr.Type` used for this node inside a generated `AttributeTypes` map.
    fn attr_type(&self, name: &FrameworkIdentifier) -> String;

    /// The `attr.Value` type of this node's field inside a generated `<Parent>Value`.
    fn attr_value(&self, name: &FrameworkIdentifier) -> String;

    /// How to convert this node's value into its native Go representation.
    fn to_conversion(&self, name: &FrameworkIdentifier) -> Result<ConversionPlan, GeneratorError>;

    /// How to build this node's value from its native Go representation.
    fn from_conversion(&self, name: &FrameworkIdentifier)
    -> Result<ConversionPlan, GeneratorError>;
}
