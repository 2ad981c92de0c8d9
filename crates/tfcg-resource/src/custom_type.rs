use minijinja::context;
use tfcg_core::spec::AssociatedExternalType;

use crate::conversion::{ExternalTypeNames, FieldConversion};
use crate::error::GeneratorError;
use crate::identifier::FrameworkIdentifier;
use crate::render::{self, CUSTOM_TYPE_VALUE_TEMPLATE, TO_FROM_TEMPLATE};

/// A field of a generated `<Name>Value` struct.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueField {
    pub name: FrameworkIdentifier,
    pub attr_type: String,
    pub value_type: String,
}

impl ValueField {
    fn to_ctx(&self) -> minijinja::Value {
        context! {
            name => self.name.to_pascal_case(),
            camel => self.name.to_camel_case(),
            tfsdk_name => self.name.as_str(),
            attr_type => self.attr_type.clone(),
            value_type => self.value_type.clone(),
        }
    }
}

/// The `<Name>Type{...}` expression used as `CustomType:` when no explicit custom type is set.
pub fn synthesized_custom_type(name: &FrameworkIdentifier) -> String {
    format!(
        "{}{{\nObjectType: types.ObjectType{{\nAttrTypes: {}{{}}.AttributeTypes(ctx),\n}},\n}}",
        name.type_name(),
        name.value_name()
    )
}

/// The `attr.Type` of a generated `<Name>Type` inside its parent's `AttributeTypes`.
pub fn synthesized_attr_type(name: &FrameworkIdentifier) -> String {
    format!(
        "{}{{\nbasetypes.ObjectType{{\nAttrTypes: {}{{}}.AttributeTypes(ctx),\n}},\n}}",
        name.type_name(),
        name.value_name()
    )
}

/// Whether a Go value type is declared in the generated package. Methods can only be
/// added to local types.
pub fn is_local_type(value_type: &str) -> bool {
    !value_type.contains('.')
}

/// Render the `<Name>Type` and `<Name>Value` declarations for an object with the given fields.
pub fn render_custom_type_and_value(
    name: &FrameworkIdentifier,
    fields: &[ValueField],
) -> Result<String, GeneratorError> {
    log::debug!("rendering custom type and value for {name}");
    let fields: Vec<minijinja::Value> = fields.iter().map(ValueField::to_ctx).collect();
    render::render(
        CUSTOM_TYPE_VALUE_TEMPLATE,
        context! {
            type_name => name.type_name(),
            value_name => name.value_name(),
            fields => fields,
        },
    )
}

/// Render the `To<Ext>` and `From<Ext>` methods of `<Name>Value`.
pub fn render_to_from(
    name: &FrameworkIdentifier,
    value_name: &str,
    external: &AssociatedExternalType,
    to_fields: &[FieldConversion],
    from_fields: &[FieldConversion],
) -> Result<String, GeneratorError> {
    log::debug!("rendering to/from functions for {name} ({})", external.type_);
    let names = ExternalTypeNames::new(external);
    let zero = if names.is_pointer {
        "nil".to_string()
    } else {
        format!("{}{{}}", names.reference)
    };
    render::render(
        TO_FROM_TEMPLATE,
        context! {
            value_name => value_name,
            external => context! {
                go_type => external.type_.clone(),
                reference => names.reference,
                pascal => names.pascal,
                variable => names.variable,
                is_pointer => names.is_pointer,
                zero => zero,
            },
            to_fields => to_fields.iter().map(conversion_ctx).collect::<Vec<_>>(),
            from_fields => from_fields.iter().map(conversion_ctx).collect::<Vec<_>>(),
        },
    )
}

fn conversion_ctx(field: &FieldConversion) -> minijinja::Value {
    context! {
        name => field.name.clone(),
        preamble => field.preamble.clone(),
        expr => field.expr.clone(),
        post => field.post.clone(),
    }
}
