use tfcg_core::spec::{
    self, ComputedOptionalRequired, CustomDefault, CustomPlanModifier, CustomType,
    CustomValidator,
};

use crate::imports::{
    BOOL_DEFAULT_IMPORT, FLOAT64_DEFAULT_IMPORT, INT64_DEFAULT_IMPORT, Imports,
    PLAN_MODIFIER_IMPORT, STRING_DEFAULT_IMPORT, TYPES_IMPORT, VALIDATOR_IMPORT,
};

/// Facets shared by every attribute and block. Blocks never set the flags or `sensitive`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeFacets {
    pub computed_optional_required: Option<ComputedOptionalRequired>,
    pub custom_type: Option<CustomType>,
    pub deprecation_message: Option<String>,
    pub description: Option<String>,
    pub sensitive: Option<bool>,
    pub plan_modifiers: Vec<CustomPlanModifier>,
    pub validators: Vec<CustomValidator>,
}

impl NodeFacets {
    pub fn from_attribute(common: &spec::CommonAttribute) -> Self {
        Self {
            computed_optional_required: common.computed_optional_required,
            custom_type: common.custom_type.clone(),
            deprecation_message: common.deprecation_message.clone(),
            description: common.description.clone(),
            sensitive: common.sensitive,
            plan_modifiers: custom_plan_modifiers(&common.plan_modifiers),
            validators: custom_validators(&common.validators),
        }
    }

    pub fn from_block(common: &spec::CommonBlock) -> Self {
        Self {
            computed_optional_required: None,
            custom_type: common.custom_type.clone(),
            deprecation_message: common.deprecation_message.clone(),
            description: common.description.clone(),
            sensitive: None,
            plan_modifiers: custom_plan_modifiers(&common.plan_modifiers),
            validators: custom_validators(&common.validators),
        }
    }

    /// Custom type imports followed by plan modifier and validator imports.
    pub fn imports(&self) -> Imports {
        custom_type_imports(self.custom_type.as_ref())
            .union(hook_imports(&self.plan_modifiers, &self.validators))
    }
}

/// Keep only validators that need generated code.
pub fn custom_validators(validators: &[spec::Validator]) -> Vec<CustomValidator> {
    validators.iter().filter_map(|v| v.custom.clone()).collect()
}

/// Keep only plan modifiers that need generated code.
pub fn custom_plan_modifiers(plan_modifiers: &[spec::PlanModifier]) -> Vec<CustomPlanModifier> {
    plan_modifiers
        .iter()
        .filter_map(|p| p.custom.clone())
        .collect()
}

/// An explicit custom type contributes only its own import; otherwise the framework
/// `types` package is used.
pub fn custom_type_imports(custom_type: Option<&CustomType>) -> Imports {
    match custom_type {
        Some(custom) => custom.import.clone().into_iter().collect(),
        None => Imports::new().with_path(TYPES_IMPORT),
    }
}

/// Imports for plan modifiers and validators, each preceded by its framework package.
pub fn hook_imports(
    plan_modifiers: &[CustomPlanModifier],
    validators: &[CustomValidator],
) -> Imports {
    let mut imports = Imports::new();
    if !plan_modifiers.is_empty() {
        imports = imports.with_path(PLAN_MODIFIER_IMPORT);
    }
    for modifier in plan_modifiers {
        imports = imports.union(modifier.imports.iter().cloned().collect());
    }
    if !validators.is_empty() {
        imports = imports.with_path(VALIDATOR_IMPORT);
    }
    for validator in validators {
        imports = imports.union(validator.imports.iter().cloned().collect());
    }
    imports
}

/// A literal default supported by the framework's `<kind>default` packages.
#[derive(Debug, Clone, PartialEq)]
pub enum StaticDefault {
    Bool(bool),
    Float64(f64),
    Int64(i64),
    String(String),
}

/// The resolved default of an attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum DefaultValue {
    Static(StaticDefault),
    Custom(CustomDefault),
}

impl DefaultValue {
    pub fn from_bool(default: Option<&spec::BoolDefault>) -> Option<Self> {
        let default = default?;
        match (default.static_value, &default.custom) {
            (Some(v), _) => Some(Self::Static(StaticDefault::Bool(v))),
            (None, Some(custom)) => Some(Self::Custom(custom.clone())),
            (None, None) => None,
        }
    }

    pub fn from_float64(default: Option<&spec::Float64Default>) -> Option<Self> {
        let default = default?;
        match (default.static_value, &default.custom) {
            (Some(v), _) => Some(Self::Static(StaticDefault::Float64(v))),
            (None, Some(custom)) => Some(Self::Custom(custom.clone())),
            (None, None) => None,
        }
    }

    pub fn from_int64(default: Option<&spec::Int64Default>) -> Option<Self> {
        let default = default?;
        match (default.static_value, &default.custom) {
            (Some(v), _) => Some(Self::Static(StaticDefault::Int64(v))),
            (None, Some(custom)) => Some(Self::Custom(custom.clone())),
            (None, None) => None,
        }
    }

    pub fn from_string(default: Option<&spec::StringDefault>) -> Option<Self> {
        let default = default?;
        match (&default.static_value, &default.custom) {
            (Some(v), _) => Some(Self::Static(StaticDefault::String(v.clone()))),
            (None, Some(custom)) => Some(Self::Custom(custom.clone())),
            (None, None) => None,
        }
    }

    pub fn from_custom(default: Option<&spec::CustomOnlyDefault>) -> Option<Self> {
        default?.custom.clone().map(Self::Custom)
    }

    /// The Go expression assigned to `Default:`.
    pub fn schema_expr(&self) -> String {
        match self {
            Self::Static(StaticDefault::Bool(v)) => format!("booldefault.StaticBool({v})"),
            Self::Static(StaticDefault::Float64(v)) => format!("float64default.StaticFloat64({v})"),
            Self::Static(StaticDefault::Int64(v)) => format!("int64default.StaticInt64({v})"),
            Self::Static(StaticDefault::String(v)) => {
                format!("stringdefault.StaticString({})", go_quote(v))
            }
            Self::Custom(custom) => custom.schema_definition.clone(),
        }
    }

    pub fn imports(&self) -> Imports {
        match self {
            Self::Static(StaticDefault::Bool(_)) => Imports::new().with_path(BOOL_DEFAULT_IMPORT),
            Self::Static(StaticDefault::Float64(_)) => {
                Imports::new().with_path(FLOAT64_DEFAULT_IMPORT)
            }
            Self::Static(StaticDefault::Int64(_)) => Imports::new().with_path(INT64_DEFAULT_IMPORT),
            Self::Static(StaticDefault::String(_)) => {
                Imports::new().with_path(STRING_DEFAULT_IMPORT)
            }
            Self::Custom(custom) => custom.imports.iter().cloned().collect(),
        }
    }
}

/// Imports of an optional default.
pub fn default_imports(default: Option<&DefaultValue>) -> Imports {
    default.map(DefaultValue::imports).unwrap_or_default()
}

/// Quote a string as a Go interpreted string literal.
pub fn go_quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            c if c.is_control() => quoted.push_str(&format!("\\u{:04x}", c as u32)),
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

#[cfg(test)]
mod tests {
    use tfcg_core::spec::Import;

    use super::*;

    #[test]
    fn test_go_quote() {
        assert_eq!(go_quote("plain"), "\"plain\"");
        assert_eq!(go_quote("say \"hi\"\n"), "\"say \\\"hi\\\"\\n\"");
        assert_eq!(go_quote("back\\slash"), "\"back\\\\slash\"");
    }

    #[test]
    fn test_custom_type_imports() {
        assert!(custom_type_imports(None).contains(TYPES_IMPORT));

        let without_import = CustomType {
            import: None,
            type_: "my_type".to_string(),
            value_type: "myValue".to_string(),
        };
        assert!(custom_type_imports(Some(&without_import)).is_empty());

        let with_import = CustomType {
            import: Some(Import::new("example.com/my_types")),
            ..without_import
        };
        let imports = custom_type_imports(Some(&with_import));
        assert_eq!(imports.len(), 1);
        assert!(imports.contains("example.com/my_types"));
    }

    #[test]
    fn test_builtin_validators_filtered() {
        let validators = vec![
            spec::Validator { custom: None },
            spec::Validator {
                custom: Some(CustomValidator {
                    imports: vec![],
                    schema_definition: "my_validator.Validate()".to_string(),
                }),
            },
        ];
        let custom = custom_validators(&validators);
        assert_eq!(custom.len(), 1);
        assert_eq!(custom[0].schema_definition, "my_validator.Validate()");
    }

    #[test]
    fn test_hook_imports_order() {
        let modifiers = vec![CustomPlanModifier {
            imports: vec![Import::new("example.com/pm")],
            schema_definition: "pm.Modify()".to_string(),
        }];
        let validators = vec![CustomValidator {
            imports: vec![Import::new("example.com/v")],
            schema_definition: "v.Validate()".to_string(),
        }];
        let imports = hook_imports(&modifiers, &validators);
        let paths: Vec<&str> = imports.all().iter().map(|i| i.path.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                PLAN_MODIFIER_IMPORT,
                "example.com/pm",
                VALIDATOR_IMPORT,
                "example.com/v"
            ]
        );
    }

    #[test]
    fn test_static_default_wins_over_custom() {
        let default = spec::BoolDefault {
            static_value: Some(false),
            custom: Some(CustomDefault {
                imports: vec![],
                schema_definition: "my_default()".to_string(),
            }),
        };
        let resolved = DefaultValue::from_bool(Some(&default)).unwrap();
        assert_eq!(resolved.schema_expr(), "booldefault.StaticBool(false)");
        assert!(resolved.imports().contains(BOOL_DEFAULT_IMPORT));
    }

    #[test]
    fn test_empty_default_is_absent() {
        assert_eq!(DefaultValue::from_int64(Some(&spec::Int64Default::default())), None);
        assert_eq!(DefaultValue::from_custom(None), None);
    }

    #[test]
    fn test_string_default_is_quoted() {
        let default = spec::StringDefault {
            static_value: Some("a \"b\"".to_string()),
            custom: None,
        };
        assert_eq!(
            DefaultValue::from_string(Some(&default)).unwrap().schema_expr(),
            "stringdefault.StaticString(\"a \\\"b\\\"\")"
        );
    }
}
