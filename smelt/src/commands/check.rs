use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use smelt_decode::{CoralDocument, build_service_model, load_model_override};
use smelt_model::overrides;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the service model document (JSON or YAML)
    #[arg(short, long)]
    pub model: PathBuf,

    /// Base name used when the model metadata names no service
    #[arg(short, long, default_value = "Service")]
    pub base_name: String,

    /// Path to a JSON override document to validate against the model
    #[arg(long)]
    pub overrides: Option<PathBuf>,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let document = CoralDocument::from_file(&self.model).unwrap_or_exit();
        let mut model = build_service_model(&document, &self.base_name).unwrap_or_exit();

        if let Some(path) = &self.overrides {
            let model_override = load_model_override(path).unwrap_or_exit();
            model = overrides::apply(&model, &model_override)
                .map_err(|e| Box::new(smelt_decode::Error::from(e)))
                .unwrap_or_exit();
        }

        println!("✓ {} is valid\n", self.model.display());

        for (service, description) in &model.service_descriptions {
            println!("  {} (API version {})", service, description.api_version);
            println!("  content type: {}\n", description.content_type);
        }

        let operations = model.sorted_operation_names();
        println!(
            "  {} operation{}:",
            operations.len(),
            if operations.len() == 1 { "" } else { "s" }
        );
        for name in &operations {
            let operation = &model.operation_descriptions[*name];
            match (&operation.http_verb, &operation.http_url) {
                (Some(verb), Some(url)) => println!("    {} ({} {})", name, verb, url),
                _ => println!("    {}", name),
            }
        }
        println!();

        println!("  {} structures", model.structure_descriptions.len());
        println!("  {} fields", model.field_descriptions.len());
        println!("  {} error types", model.error_types.len());

        Ok(())
    }
}
