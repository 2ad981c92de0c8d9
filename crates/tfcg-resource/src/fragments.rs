use tfcg_core::spec::{ComputedOptionalRequired, CustomPlanModifier, CustomValidator};

use crate::facets::{DefaultValue, NodeFacets, go_quote};
use crate::identifier::FrameworkIdentifier;

/// Builds a `"name": schema.<Kind>{ ... },` declaration one field line at a time.
///
/// Fields are written in the order they are called; callers follow the fixed order
/// custom type, flags, sensitive, description, deprecation message, plan modifiers,
/// validators, default, then the kind-specific fragment.
pub struct SchemaWriter {
    buf: String,
}

impl SchemaWriter {
    pub fn new(name: &FrameworkIdentifier, kind: &str) -> Self {
        Self {
            buf: format!("\"{}\": schema.{kind}{{", name.as_str()),
        }
    }

    /// A nested `\n<field>: schema.<Kind>{` declaration inside another one.
    pub fn nested(field: &str, kind: &str) -> Self {
        Self {
            buf: format!("\n{field}: schema.{kind}{{"),
        }
    }

    /// Write the shared facets: everything up to, but not including, the default.
    pub fn facets(
        &mut self,
        facets: &NodeFacets,
        custom_type: Option<&str>,
        hook_type: &str,
    ) -> &mut Self {
        self.custom_type(custom_type)
            .computed_optional_required(facets.computed_optional_required)
            .sensitive(facets.sensitive)
            .description(facets.description.as_deref())
            .deprecation_message(facets.deprecation_message.as_deref())
            .plan_modifiers(hook_type, &facets.plan_modifiers)
            .validators(hook_type, &facets.validators)
    }

    pub fn custom_type(&mut self, custom_type: Option<&str>) -> &mut Self {
        if let Some(custom_type) = custom_type {
            self.line(&format!("CustomType: {custom_type},"));
        }
        self
    }

    pub fn computed_optional_required(
        &mut self,
        value: Option<ComputedOptionalRequired>,
    ) -> &mut Self {
        match value {
            Some(ComputedOptionalRequired::Computed) => self.line("Computed: true,"),
            Some(ComputedOptionalRequired::ComputedOptional) => {
                self.line("Computed: true,").line("Optional: true,")
            }
            Some(ComputedOptionalRequired::Optional) => self.line("Optional: true,"),
            Some(ComputedOptionalRequired::Required) => self.line("Required: true,"),
            None => self,
        }
    }

    pub fn sensitive(&mut self, sensitive: Option<bool>) -> &mut Self {
        if sensitive == Some(true) {
            self.line("Sensitive: true,");
        }
        self
    }

    pub fn description(&mut self, description: Option<&str>) -> &mut Self {
        if let Some(description) = description {
            let quoted = go_quote(description);
            self.line(&format!("Description: {quoted},"))
                .line(&format!("MarkdownDescription: {quoted},"));
        }
        self
    }

    pub fn deprecation_message(&mut self, message: Option<&str>) -> &mut Self {
        if let Some(message) = message {
            self.line(&format!("DeprecationMessage: {},", go_quote(message)));
        }
        self
    }

    pub fn plan_modifiers(
        &mut self,
        hook_type: &str,
        plan_modifiers: &[CustomPlanModifier],
    ) -> &mut Self {
        let definitions: Vec<&str> = plan_modifiers
            .iter()
            .map(|p| p.schema_definition.as_str())
            .collect();
        self.hook_list("PlanModifiers", "planmodifier", hook_type, &definitions)
    }

    pub fn validators(&mut self, hook_type: &str, validators: &[CustomValidator]) -> &mut Self {
        let definitions: Vec<&str> = validators
            .iter()
            .map(|v| v.schema_definition.as_str())
            .collect();
        self.hook_list("Validators", "validator", hook_type, &definitions)
    }

    pub fn default(&mut self, default: Option<&DefaultValue>) -> &mut Self {
        if let Some(default) = default {
            self.line(&format!("Default: {},", default.schema_expr()));
        }
        self
    }

    /// Append a pre-rendered fragment verbatim; fragments start with their own newline.
    pub fn fragment(&mut self, fragment: &str) -> &mut Self {
        self.buf.push_str(fragment);
        self
    }

    pub fn finish(mut self) -> String {
        self.buf.push_str("\n},");
        self.buf
    }

    fn line(&mut self, line: &str) -> &mut Self {
        self.buf.push('\n');
        self.buf.push_str(line);
        self
    }

    fn hook_list(
        &mut self,
        field: &str,
        package: &str,
        hook_type: &str,
        definitions: &[&str],
    ) -> &mut Self {
        if definitions.is_empty() {
            return self;
        }
        self.line(&format!("{field}: []{package}.{hook_type}{{"));
        for definition in definitions {
            self.line(&format!("{definition},"));
        }
        self.line("},")
    }
}

/// Render `\n<field>: map[string]schema.<Kind>{\n...\n},` from child declarations,
/// or nothing when there are no children.
pub fn children_fragment(field: &str, kind: &str, children: &[String]) -> String {
    if children.is_empty() {
        return String::new();
    }
    format!(
        "\n{field}: map[string]schema.{kind}{{\n{}\n}},",
        children.join("\n")
    )
}
