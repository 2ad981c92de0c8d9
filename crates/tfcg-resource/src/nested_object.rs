use tfcg_core::spec::{
    self, AssociatedExternalType, CustomPlanModifier, CustomType, CustomValidator,
};

use crate::attributes::Attributes;
use crate::blocks::Blocks;
use crate::conversion::{CollectionKind, ConversionPlan, ExternalTypeNames};
use crate::custom_type::{self, ValueField};
use crate::error::{GeneratorError, UnimplementedError};
use crate::facets::{
    DefaultValue, NodeFacets, custom_plan_modifiers, custom_type_imports, custom_validators,
    default_imports, hook_imports,
};
use crate::fragments::{SchemaWriter, children_fragment};
use crate::identifier::FrameworkIdentifier;
use crate::imports::{ATTR_IMPORT, Imports, custom_type_value_imports, external_type_imports};
use crate::model::ModelField;
use crate::node::SchemaNode;

/// The object inside a list, map, or set nested attribute or block.
pub(crate) trait NestedObject {
    /// `"NestedAttributeObject"` or `"NestedBlockObject"`.
    const KIND: &'static str;

    fn shape(&self) -> ObjectShape<'_>;

    fn plan_modifiers(&self) -> &[CustomPlanModifier];

    fn validators(&self) -> &[CustomValidator];

    fn imports(&self) -> Imports {
        self.shape()
            .imports(hook_imports(self.plan_modifiers(), self.validators()))
    }

    /// The `\nNestedObject: schema.<Kind>{...},` fragment. `CustomType` is always present,
    /// even for an object without attributes or blocks.
    fn schema_fragment(&self, name: &FrameworkIdentifier) -> Result<String, GeneratorError> {
        let shape = self.shape();
        let mut writer = SchemaWriter::nested("NestedObject", Self::KIND);
        writer
            .fragment(&shape.children_fragments()?)
            .custom_type(Some(&shape.custom_type_expr(name)))
            .plan_modifiers("Object", self.plan_modifiers())
            .validators("Object", self.validators());
        Ok(writer.finish())
    }

    fn custom_type_and_value(
        &self,
        name: &FrameworkIdentifier,
    ) -> Result<Vec<String>, GeneratorError> {
        self.shape().custom_type_and_value(name)
    }

    fn to_from_functions(&self, name: &FrameworkIdentifier) -> Result<Vec<String>, GeneratorError> {
        self.shape().to_from_functions(name)
    }
}

/// The object carried by a list, map, or set nested attribute.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NestedAttributeObject {
    pub attributes: Attributes,
    pub custom_type: Option<CustomType>,
    pub associated_external_type: Option<AssociatedExternalType>,
    pub plan_modifiers: Vec<CustomPlanModifier>,
    pub validators: Vec<CustomValidator>,
}

impl NestedAttributeObject {
    pub fn from_spec(spec: &spec::NestedAttributeObject) -> Result<Self, GeneratorError> {
        Ok(Self {
            attributes: Attributes::from_specs(&spec.attributes)?,
            custom_type: spec.custom_type.clone(),
            associated_external_type: spec.associated_external_type.clone(),
            plan_modifiers: custom_plan_modifiers(&spec.plan_modifiers),
            validators: custom_validators(&spec.validators),
        })
    }
}

impl NestedObject for NestedAttributeObject {
    const KIND: &'static str = "NestedAttributeObject";

    fn shape(&self) -> ObjectShape<'_> {
        ObjectShape {
            attributes: &self.attributes,
            blocks: None,
            custom_type: self.custom_type.as_ref(),
            external_type: self.associated_external_type.as_ref(),
        }
    }

    fn plan_modifiers(&self) -> &[CustomPlanModifier] {
        &self.plan_modifiers
    }

    fn validators(&self) -> &[CustomValidator] {
        &self.validators
    }
}

/// The object carried by a list or set nested block.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NestedBlockObject {
    pub attributes: Attributes,
    pub blocks: Blocks,
    pub custom_type: Option<CustomType>,
    pub associated_external_type: Option<AssociatedExternalType>,
    pub plan_modifiers: Vec<CustomPlanModifier>,
    pub validators: Vec<CustomValidator>,
}

impl NestedBlockObject {
    pub fn from_spec(spec: &spec::NestedBlockObject) -> Result<Self, GeneratorError> {
        Ok(Self {
            attributes: Attributes::from_specs(&spec.attributes)?,
            blocks: Blocks::from_specs(&spec.blocks)?,
            custom_type: spec.custom_type.clone(),
            associated_external_type: spec.associated_external_type.clone(),
            plan_modifiers: custom_plan_modifiers(&spec.plan_modifiers),
            validators: custom_validators(&spec.validators),
        })
    }
}

impl NestedObject for NestedBlockObject {
    const KIND: &'static str = "NestedBlockObject";

    fn shape(&self) -> ObjectShape<'_> {
        ObjectShape {
            attributes: &self.attributes,
            blocks: Some(&self.blocks),
            custom_type: self.custom_type.as_ref(),
            external_type: self.associated_external_type.as_ref(),
        }
    }

    fn plan_modifiers(&self) -> &[CustomPlanModifier] {
        &self.plan_modifiers
    }

    fn validators(&self) -> &[CustomValidator] {
        &self.validators
    }
}

/// Rendering shared by list, map, and set nested attributes and blocks.
pub(crate) struct NestedCollection<'a, O: NestedObject> {
    pub kind: CollectionKind,
    /// `"Attribute"` or `"Block"`.
    pub node: &'static str,
    pub facets: &'a NodeFacets,
    pub nested_object: &'a O,
    pub default: Option<&'a DefaultValue>,
}

impl<O: NestedObject> NestedCollection<'_, O> {
    pub fn imports(&self) -> Imports {
        external_type_imports(self.nested_object.shape().external_type)
            .union(self.facets.imports())
            .union(default_imports(self.default))
            .union(self.nested_object.imports())
    }

    pub fn schema(&self, name: &FrameworkIdentifier) -> Result<String, GeneratorError> {
        let custom_type = self.facets.custom_type.as_ref().map(|c| c.type_.as_str());
        let kind = format!("{}Nested{}", self.kind.name(), self.node);
        let mut writer = SchemaWriter::new(name, &kind);
        writer
            .facets(self.facets, custom_type, self.kind.name())
            .default(self.default)
            .fragment(&self.nested_object.schema_fragment(name)?);
        Ok(writer.finish())
    }

    pub fn model_field(&self, name: &FrameworkIdentifier) -> ModelField {
        ModelField::resolve(
            name,
            self.facets.custom_type.as_ref(),
            false,
            &format!("types.{}", self.kind.name()),
        )
    }

    /// `basetypes.<Kind>Type{ElemType: ...}` whose element is the nested object's type.
    pub fn attr_type(&self, name: &FrameworkIdentifier) -> String {
        if let Some(custom) = &self.facets.custom_type {
            return custom.type_.clone();
        }
        let elem_type = match self.nested_object.shape().custom_type {
            Some(custom) => custom.type_.clone(),
            None => format!("{}{{}}.Type(ctx)", name.value_name()),
        };
        format!(
            "basetypes.{}Type{{\nElemType: {elem_type},\n}}",
            self.kind.name()
        )
    }

    pub fn attr_value(&self) -> String {
        match &self.facets.custom_type {
            Some(custom) => custom.value_type.clone(),
            None => format!("basetypes.{}Value", self.kind.name()),
        }
    }

    pub fn unimplemented_conversion(&self, name: &FrameworkIdentifier) -> GeneratorError {
        UnimplementedError::new(format!(
            "conversion of {}-nested {} {name}",
            self.kind.name().to_lowercase(),
            self.node.to_lowercase()
        ))
        .into()
    }

    /// Generated only for sets; list- and map-nested objects with an associated external
    /// type report the conversion as not implemented.
    pub fn to_from_functions(
        &self,
        name: &FrameworkIdentifier,
    ) -> Result<Vec<String>, GeneratorError> {
        match self.kind {
            CollectionKind::Set => self.nested_object.to_from_functions(name),
            CollectionKind::List | CollectionKind::Map => {
                if self.nested_object.shape().external_type.is_some() {
                    return Err(self.unimplemented_conversion(name));
                }
                Ok(Vec::new())
            }
        }
    }
}

/// A borrowed view of any object-shaped node: the nested object of a collection kind,
/// or a single nested attribute or block.
pub(crate) struct ObjectShape<'a> {
    pub attributes: &'a Attributes,
    pub blocks: Option<&'a Blocks>,
    pub custom_type: Option<&'a CustomType>,
    pub external_type: Option<&'a AssociatedExternalType>,
}

impl ObjectShape<'_> {
    /// The explicit custom type, or the generated `<Name>Type`.
    pub fn custom_type_expr(&self, name: &FrameworkIdentifier) -> String {
        match self.custom_type {
            Some(custom) => custom.type_.clone(),
            None => custom_type::synthesized_custom_type(name),
        }
    }

    pub fn value_name(&self, name: &FrameworkIdentifier) -> String {
        match self.custom_type {
            Some(custom) => custom.value_type.clone(),
            None => name.value_name(),
        }
    }

    /// External-type bundle, custom type, `attr`, then `hooks`, then the children.
    pub fn imports(&self, hooks: Imports) -> Imports {
        let custom = match self.custom_type {
            Some(custom) => custom_type_imports(Some(custom)),
            None => custom_type_value_imports(),
        };
        let children = self
            .blocks
            .map(Blocks::imports)
            .unwrap_or_default();
        external_type_imports(self.external_type)
            .union(custom)
            .with_path(ATTR_IMPORT)
            .union(hooks)
            .union(self.attributes.imports())
            .union(children)
    }

    /// `Attributes:` then `Blocks:`, each omitted when empty.
    pub fn children_fragments(&self) -> Result<String, GeneratorError> {
        let mut fragment = children_fragment("Attributes", "Attribute", &self.attributes.schemas()?);
        if let Some(blocks) = self.blocks {
            fragment.push_str(&children_fragment("Blocks", "Block", &blocks.schemas()?));
        }
        Ok(fragment)
    }

    fn children(&self) -> Vec<(&FrameworkIdentifier, &dyn SchemaNode)> {
        let attributes = self
            .attributes
            .iter()
            .map(|(name, attribute)| (name, attribute as &dyn SchemaNode));
        let blocks = self
            .blocks
            .into_iter()
            .flat_map(Blocks::iter)
            .map(|(name, block)| (name, block as &dyn SchemaNode));
        attributes.chain(blocks).collect()
    }

    fn value_fields(&self) -> Vec<ValueField> {
        self.children()
            .into_iter()
            .map(|(name, node)| ValueField {
                name: name.clone(),
                attr_type: node.attr_type(name),
                value_type: node.attr_value(name),
            })
            .collect()
    }

    /// This object's own declarations when no custom type is set, then those of every
    /// nested child: attributes first, then blocks.
    pub fn custom_type_and_value(
        &self,
        name: &FrameworkIdentifier,
    ) -> Result<Vec<String>, GeneratorError> {
        let mut declarations = Vec::new();
        if self.custom_type.is_none() {
            declarations.push(custom_type::render_custom_type_and_value(
                name,
                &self.value_fields(),
            )?);
        }
        declarations.extend(self.attributes.custom_type_and_value()?);
        if let Some(blocks) = self.blocks {
            declarations.extend(blocks.custom_type_and_value()?);
        }
        Ok(declarations)
    }

    /// `To<Ext>`/`From<Ext>` methods for this object and its children, or nothing when no
    /// external type is associated.
    pub fn to_from_functions(
        &self,
        name: &FrameworkIdentifier,
    ) -> Result<Vec<String>, GeneratorError> {
        let Some(external) = self.external_type else {
            return Ok(Vec::new());
        };
        let value_name = self.value_name(name);
        let mut functions = Vec::new();
        if custom_type::is_local_type(&value_name) {
            let target = ExternalTypeNames::new(external).variable;
            let mut to_fields = Vec::new();
            let mut from_fields = Vec::new();
            for (child_name, node) in self.children() {
                if let Some((to, from)) = conversion_plans(child_name, node)? {
                    to_fields.push(to.render_to(child_name, &target));
                    from_fields.push(from.render_from(child_name));
                }
            }
            functions.push(custom_type::render_to_from(
                name,
                &value_name,
                external,
                &to_fields,
                &from_fields,
            )?);
        } else {
            log::warn!("skipping to/from functions of {name}: {value_name} is not a local type");
        }
        functions.extend(self.attributes.to_from_functions()?);
        if let Some(blocks) = self.blocks {
            functions.extend(blocks.to_from_functions()?);
        }
        Ok(functions)
    }
}

/// Both conversion plans of a child, or `None` when its conversion is not generated.
fn conversion_plans(
    name: &FrameworkIdentifier,
    node: &dyn SchemaNode,
) -> Result<Option<(ConversionPlan, ConversionPlan)>, GeneratorError> {
    let plans = node
        .to_conversion(name)
        .and_then(|to| Ok((to, node.from_conversion(name)?)));
    match plans {
        Ok(plans) => Ok(Some(plans)),
        Err(err) if err.is_unimplemented() => {
            log::warn!("skipping conversion of {name}: {err}");
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use tfcg_core::spec::Import;

    use super::*;
    use crate::imports::TYPES_IMPORT;

    fn nested_object(json: &str) -> spec::NestedAttributeObject {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_empty_block_object_renders_custom_type_only() {
        let object = NestedBlockObject::default();
        let name = FrameworkIdentifier::new("list_nested_block");
        assert_eq!(
            object.schema_fragment(&name).unwrap(),
            "\nNestedObject: schema.NestedBlockObject{\nCustomType: ListNestedBlockType{\nObjectType: types.ObjectType{\nAttrTypes: ListNestedBlockValue{}.AttributeTypes(ctx),\n},\n},\n},"
        );
    }

    #[test]
    fn test_attributes_before_custom_type() {
        let raw = nested_object(
            r#"{"attributes": [{"name": "enabled", "bool": {"computed_optional_required": "optional"}}]}"#,
        );
        let object = NestedAttributeObject::from_spec(&raw).unwrap();
        let fragment = object
            .schema_fragment(&FrameworkIdentifier::new("rules"))
            .unwrap();
        assert!(fragment.starts_with(
            "\nNestedObject: schema.NestedAttributeObject{\nAttributes: map[string]schema.Attribute{\n\"enabled\": schema.BoolAttribute{\nOptional: true,\n},\n},\nCustomType: RulesType{"
        ));
    }

    #[test]
    fn test_explicit_custom_type() {
        let raw = nested_object(
            r#"{"custom_type": {"import": {"path": "example.com/my_types"}, "type": "my_types.RuleType{}", "value_type": "my_types.RuleValue"}}"#,
        );
        let object = NestedAttributeObject::from_spec(&raw).unwrap();
        let name = FrameworkIdentifier::new("rules");
        assert_eq!(
            object.schema_fragment(&name).unwrap(),
            "\nNestedObject: schema.NestedAttributeObject{\nCustomType: my_types.RuleType{},\n},"
        );
        assert!(object.custom_type_and_value(&name).unwrap().is_empty());
        let paths: Vec<String> = object.imports().all().iter().map(|i| i.path.clone()).collect();
        assert_eq!(paths, vec!["example.com/my_types", ATTR_IMPORT]);
    }

    #[test]
    fn test_imports_external_bundle_first() {
        let mut object = NestedAttributeObject::default();
        object.associated_external_type = Some(AssociatedExternalType {
            import: Some(Import::new("example.com/apisdk")),
            type_: "*apisdk.Rule".to_string(),
        });
        let imports = object.imports();
        let paths: Vec<&str> = imports.all().iter().map(|i| i.path.as_str()).collect();
        let sdk = paths.iter().position(|p| *p == "example.com/apisdk").unwrap();
        let types = paths.iter().position(|p| *p == TYPES_IMPORT).unwrap();
        assert!(sdk < types);
    }

    #[test]
    fn test_object_level_hooks() {
        let raw = nested_object(
            r#"{"validators": [{"custom": {"imports": [{"path": "example.com/v"}], "schema_definition": "v.Check()"}}]}"#,
        );
        let object = NestedAttributeObject::from_spec(&raw).unwrap();
        let fragment = object
            .schema_fragment(&FrameworkIdentifier::new("rules"))
            .unwrap();
        assert!(fragment.ends_with("\nValidators: []validator.Object{\nv.Check(),\n},\n},"));
        assert!(object.imports().contains("example.com/v"));
    }

    #[test]
    fn test_foreign_value_type_still_recurses() {
        let raw = nested_object(
            r#"{
                "custom_type": {"type": "my_types.RuleType{}", "value_type": "my_types.RuleValue"},
                "associated_external_type": {"type": "*apisdk.Rule"},
                "attributes": [{"name": "target", "single_nested": {
                    "associated_external_type": {"type": "*apisdk.Target"},
                    "attributes": [{"name": "host", "string": {}}]
                }}]
            }"#,
        );
        let object = NestedAttributeObject::from_spec(&raw).unwrap();
        let functions = object
            .to_from_functions(&FrameworkIdentifier::new("rules"))
            .unwrap();
        assert_eq!(functions.len(), 1);
        assert!(functions[0].starts_with("func (v TargetValue) ToApisdkTarget("));
        assert!(!functions[0].contains("my_types.RuleValue"));
    }

    #[test]
    fn test_to_from_without_external_type_is_empty() {
        let object = NestedBlockObject::default();
        let name = FrameworkIdentifier::new("rules");
        assert!(object.to_from_functions(&name).unwrap().is_empty());
    }
}
