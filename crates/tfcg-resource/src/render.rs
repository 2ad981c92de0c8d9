use std::sync::LazyLock;

use minijinja::Environment;

use crate::error::GeneratorError;

pub const CUSTOM_TYPE_VALUE_TEMPLATE: &str = "custom_type_value.go.j2";
pub const TO_FROM_TEMPLATE: &str = "to_from.go.j2";
pub const RESOURCE_TEMPLATE: &str = "resource.go.j2";

/// Build the template environment holding every Go template of this crate.
pub fn environment() -> Result<Environment<'static>, minijinja::Error> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.add_template(
        CUSTOM_TYPE_VALUE_TEMPLATE,
        include_str!("../templates/custom_type_value.go.j2"),
    )?;
    env.add_template(TO_FROM_TEMPLATE, include_str!("../templates/to_from.go.j2"))?;
    env.add_template(RESOURCE_TEMPLATE, include_str!("../templates/resource.go.j2"))?;
    Ok(env)
}

static ENVIRONMENT: LazyLock<Result<Environment<'static>, minijinja::Error>> =
    LazyLock::new(environment);

/// Render one template with the given context. Templates are parsed once per process.
pub fn render(template: &str, ctx: minijinja::Value) -> Result<String, GeneratorError> {
    let env = ENVIRONMENT
        .as_ref()
        .map_err(|err| minijinja::Error::new(err.kind(), err.to_string()))?;
    let tmpl = env.get_template(template)?;
    Ok(tmpl.render(ctx)?)
}
