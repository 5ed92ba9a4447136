use std::path::PathBuf;

use clap::{Args, ValueEnum};
use eyre::Result;
use smelt_codegen::GenerationConfig;
use smelt_codegen_swift::{ConcreteClientKind, Generator};
use smelt_decode::{CoralDocument, build_service_model, load_http_client_configuration, load_model_override};
use smelt_model::{ApplicationDescription, HttpClientConfiguration, ServiceModel, overrides};

use super::UnwrapOrExit;

/// Which package set to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GenerationMode {
    /// Only the model package.
    Model,
    /// Only the client package.
    Client,
    /// Both packages.
    All,
}

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the service model document (JSON or YAML)
    #[arg(short, long)]
    pub model: PathBuf,

    /// Base output path (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Base name for generated types and files, e.g. "Widget"
    #[arg(short, long)]
    pub base_name: String,

    /// What to generate
    #[arg(long, value_enum, default_value_t = GenerationMode::All)]
    pub mode: GenerationMode,

    /// Target name of the model package, for cross-package references
    #[arg(long)]
    pub model_target_name: Option<String>,

    /// Target name of the client package
    #[arg(long)]
    pub client_target_name: Option<String>,

    /// Path to a JSON override document
    #[arg(long)]
    pub overrides: Option<PathBuf>,

    /// Path to a JSON HTTP client configuration document
    #[arg(long)]
    pub http_config: Option<PathBuf>,

    /// Human-readable service description for generated documentation
    #[arg(long)]
    pub description: Option<String>,

    /// Generate an API Gateway passthrough client instead of the AWS client
    #[arg(long)]
    pub api_gateway: bool,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let document = CoralDocument::from_file(&self.model).unwrap_or_exit();
        let model = build_service_model(&document, &self.base_name).unwrap_or_exit();
        let model = self.apply_overrides(model);

        let http_config = match &self.http_config {
            Some(path) => load_http_client_configuration(path).unwrap_or_exit(),
            None => HttpClientConfiguration::default(),
        };

        let config = GenerationConfig {
            model_target_name: self.model_target_name.clone(),
            ..Default::default()
        };

        let mut application = ApplicationDescription::new(&self.base_name, &self.output);
        if let Some(description) = &self.description {
            application = application.with_description(description.clone());
        }

        let client_kind = if self.api_gateway {
            ConcreteClientKind::ApiGateway
        } else {
            ConcreteClientKind::Aws
        };
        let mut generator =
            Generator::new(&model, &application, &http_config, &config).with_client_kind(client_kind);
        if let Some(name) = &self.client_target_name {
            generator = generator.with_client_target_name(name.clone());
        }

        if self.dry_run {
            self.run_preview(&generator)
        } else {
            self.run_generation(&generator, &model)
        }
    }

    fn apply_overrides(&self, model: ServiceModel) -> ServiceModel {
        let Some(path) = &self.overrides else {
            return model;
        };
        let model_override = load_model_override(path).unwrap_or_exit();
        overrides::apply(&model, &model_override)
            .map_err(|e| Box::new(smelt_decode::Error::from(e)))
            .unwrap_or_exit()
    }

    fn run_generation(&self, generator: &Generator, model: &ServiceModel) -> Result<()> {
        // Print header
        println!("{}", self.base_name);
        if let Some(description) = &self.description {
            println!("{}", description);
        }
        println!();

        let operations = model.sorted_operation_names();
        println!("Operations ({}):", operations.len());
        for name in operations {
            println!("  {}", name);
        }
        println!();

        if matches!(self.mode, GenerationMode::Model | GenerationMode::All) {
            let summary = generator.generate_model()?;
            println!(
                "Generated model package: {}/{}/",
                self.output.display(),
                generator.model_target_dir()
            );
            for file in &summary.written {
                println!("  + {}", file);
            }
        }

        if matches!(self.mode, GenerationMode::Client | GenerationMode::All) {
            let summary = generator.generate_client()?;
            println!(
                "Generated client package: {}/{}/",
                self.output.display(),
                generator.client_target_dir()
            );
            for file in &summary.written {
                println!("  + {}", file);
            }
        }

        Ok(())
    }

    fn run_preview(&self, generator: &Generator) -> Result<()> {
        let mut files = Vec::new();
        if matches!(self.mode, GenerationMode::Model | GenerationMode::All) {
            files.extend(generator.preview_model()?);
        }
        if matches!(self.mode, GenerationMode::Client | GenerationMode::All) {
            files.extend(generator.preview_client()?);
        }

        for file in &files {
            println!("── {} ──", file.path);
            println!("{}", file.content);
        }

        println!("── Summary ──");
        println!("{} files would be generated", files.len());

        Ok(())
    }
}
