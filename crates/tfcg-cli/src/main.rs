use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use tfcg_core::config::{self, CONFIG_FILE_NAME, TfcgConfig};
use tfcg_core::parse;
use tfcg_core::spec::Specification;
use tfcg_core::{CodeGenerator, GeneratedFile};
use tfcg_resource::{ResourceGenerator, ResourceSchema, SchemaNode};

#[derive(Parser)]
#[command(
    name = "tfcg",
    about = "Terraform plugin framework resource code generator",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate resource schema code from a specification
    Generate {
        /// Path to the specification file (YAML or JSON)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output directory for generated Go files
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate a specification
    Validate {
        /// Path to the specification file
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Inspect the resources, attributes, and blocks of a specification
    Inspect {
        /// Path to the specification file
        #[arg(short, long)]
        input: PathBuf,

        /// Output format
        #[arg(long, default_value = "yaml")]
        format: InspectFormat,
    },

    /// Initialize a new tfcg configuration
    Init {
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Clone, ValueEnum)]
enum InspectFormat {
    Yaml,
    Json,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { input, output } => cmd_generate(input, output),

        Commands::Validate { input } => cmd_validate(input),

        Commands::Inspect { input, format } => cmd_inspect(input, format),

        Commands::Init { force } => cmd_init(force),

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "tfcg", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Try to load the project config file from the current directory.
fn try_load_config() -> Result<Option<TfcgConfig>> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    config::load_config(&config_path).map_err(|e| anyhow::anyhow!(e))
}

fn load_spec(path: &Path) -> Result<Specification> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("json");
    log::debug!("loading {} as {ext}", path.display());

    let spec = match ext {
        "yaml" | "yml" => parse::from_yaml(&content)?,
        _ => parse::from_json(&content)?,
    };
    Ok(spec)
}

/// Write generated files to disk under the given base directory.
fn write_files(base: &Path, files: &[GeneratedFile]) -> Result<()> {
    for file in files {
        let path = base.join(&file.path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
        fs::write(&path, &file.content)
            .with_context(|| format!("failed to write {}", path.display()))?;
        eprintln!("  wrote {}", path.display());
    }
    Ok(())
}

fn cmd_generate(input: Option<PathBuf>, output: Option<PathBuf>) -> Result<()> {
    let cfg = try_load_config()?.unwrap_or_default();
    let input = input.unwrap_or_else(|| PathBuf::from(&cfg.input));
    let output_dir = output.unwrap_or_else(|| PathBuf::from(&cfg.output));
    let spec = load_spec(&input)?;

    if spec.resources.is_empty() {
        eprintln!("No resources in {}.", input.display());
        return Ok(());
    }

    eprintln!("Generating {} resources → {}", spec.resources.len(), output_dir.display());
    let files = ResourceGenerator
        .generate(&spec, &cfg.generate)
        .with_context(|| format!("failed to generate code from {}", input.display()))?;

    fs::create_dir_all(&output_dir).with_context(|| {
        format!("failed to create output directory {}", output_dir.display())
    })?;
    write_files(&output_dir, &files)?;

    eprintln!("Generated {} files in {}", files.len(), output_dir.display());
    Ok(())
}

fn cmd_validate(input: PathBuf) -> Result<()> {
    let spec = load_spec(&input)?;

    eprintln!("Valid specification {}", spec.version);
    eprintln!("  Resources: {}", spec.resources.len());

    // Also validate that every schema builds into generator nodes
    for resource in &spec.resources {
        let schema = ResourceSchema::from_spec(&resource.schema)
            .with_context(|| format!("invalid schema for resource {}", resource.name))?;
        eprintln!(
            "  {}: {} attributes, {} blocks",
            resource.name,
            schema.attributes.len(),
            schema.blocks.len()
        );
    }

    eprintln!("Validation successful.");
    Ok(())
}

fn cmd_inspect(input: PathBuf, format: InspectFormat) -> Result<()> {
    let spec = load_spec(&input)?;
    let summary = build_inspect_summary(&spec)?;

    match format {
        InspectFormat::Yaml => {
            let yaml = serde_yaml_ng::to_string(&summary)?;
            print!("{}", yaml);
        }
        InspectFormat::Json => {
            let json = serde_json::to_string_pretty(&summary)?;
            println!("{}", json);
        }
    }

    Ok(())
}

fn build_inspect_summary(spec: &Specification) -> Result<serde_json::Value> {
    let mut resources = Vec::new();
    for resource in &spec.resources {
        let schema = ResourceSchema::from_spec(&resource.schema)
            .with_context(|| format!("invalid schema for resource {}", resource.name))?;

        let attributes: Vec<serde_json::Value> = schema
            .attributes
            .iter()
            .map(|(name, attribute)| {
                serde_json::json!({
                    "name": name.as_str(),
                    "kind": attribute.kind(),
                    "value_type": attribute.model_field(name).value_type,
                })
            })
            .collect();

        let blocks: Vec<serde_json::Value> = schema
            .blocks
            .iter()
            .map(|(name, block)| {
                serde_json::json!({
                    "name": name.as_str(),
                    "kind": block.kind(),
                    "value_type": block.model_field(name).value_type,
                })
            })
            .collect();

        resources.push(serde_json::json!({
            "name": resource.name,
            "attributes": attributes,
            "blocks": blocks,
            "imports": schema.imports().sorted().iter().map(|i| &i.path).collect::<Vec<_>>(),
        }));
    }

    Ok(serde_json::json!({
        "version": spec.version,
        "resources": resources,
    }))
}

fn cmd_init(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, config::default_config_content())?;
    eprintln!("Created {}", config_path.display());
    Ok(())
}
