use minijinja::context;
use tfcg_core::config::GenerateOptions;
use tfcg_core::spec::{Resource, Specification};
use tfcg_core::{CodeGenerator, GeneratedFile};

use crate::error::GeneratorError;
use crate::identifier::FrameworkIdentifier;
use crate::imports::import_line;
use crate::render::{self, RESOURCE_TEMPLATE};
use crate::schema::ResourceSchema;

/// Generates one `<name>_resource_gen.go` file per resource.
pub struct ResourceGenerator;

impl ResourceGenerator {
    /// Render the Go source of a single resource.
    pub fn generate_resource(
        resource: &Resource,
        options: &GenerateOptions,
    ) -> Result<GeneratedFile, GeneratorError> {
        log::info!("generating resource {}", resource.name);
        let name = FrameworkIdentifier::new(resource.name.as_str());
        let schema = ResourceSchema::from_spec(&resource.schema)?;

        let schema_fn = schema.schema(&name)?;
        let model = options.model.then(|| schema.model(&name));
        let custom_types = schema.custom_type_and_value()?;
        let to_from = if options.to_from {
            schema.to_from_functions()?
        } else {
            Vec::new()
        };

        let body = std::iter::once(&schema_fn)
            .chain(model.iter())
            .chain(&custom_types)
            .chain(&to_from)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("\n");
        let imports: Vec<String> = schema
            .imports()
            .referenced_in(&body)
            .sorted()
            .into_iter()
            .map(import_line)
            .collect();

        let content = render::render(
            RESOURCE_TEMPLATE,
            context! {
                package => options.package.clone(),
                imports => imports,
                schema => schema_fn,
                model => model,
                custom_types => custom_types,
                to_from => to_from,
            },
        )?;

        Ok(GeneratedFile {
            path: format!("{}_resource_gen.go", resource.name),
            content,
        })
    }
}

impl CodeGenerator for ResourceGenerator {
    type Config = GenerateOptions;
    type Error = GeneratorError;

    fn generate(
        &self,
        spec: &Specification,
        config: &GenerateOptions,
    ) -> Result<Vec<GeneratedFile>, GeneratorError> {
        spec.resources
            .iter()
            .map(|resource| Self::generate_resource(resource, config))
            .collect()
    }
}
