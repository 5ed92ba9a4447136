//! One emitter per generated file.
//!
//! Model-package emitters walk the unified model directly; client-package
//! files that carry operation bodies are produced through
//! [`smelt_codegen::DelegateDispatch`] and wrapped by [`DelegateClientFile`].

mod client_file;
mod invocations_reporting;
mod model_default_instances;
mod model_errors;
mod model_operations;
mod model_structures;
mod model_types;
mod operations_client_input;
mod operations_client_output;
mod operations_reporting;

pub use client_file::DelegateClientFile;
pub use invocations_reporting::InvocationsReportingFile;
pub use model_default_instances::ModelDefaultInstancesFile;
pub use model_errors::ModelErrorsFile;
pub use model_operations::ModelOperationsFile;
pub use model_structures::ModelStructuresFile;
pub use model_types::ModelTypesFile;
pub use operations_client_input::OperationsClientInputFile;
pub use operations_client_output::OperationsClientOutputFile;
pub use operations_reporting::OperationsReportingFile;

use smelt_codegen::{CodeBuilder, DelegateContext};
use smelt_core::GENERATED_HEADER;

/// Generated marker plus any configured custom header lines.
pub(crate) fn emit_file_preamble(ctx: &DelegateContext<'_>, builder: &mut CodeBuilder) {
    builder.line(GENERATED_HEADER);
    builder.blank();
    if let Some(header) = &ctx.config.custom_file_header {
        for line in header.lines() {
            builder.line(line);
        }
        builder.blank();
    }
}

/// Escape a value for inclusion in a Swift string literal.
pub(crate) fn swift_string_literal(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
