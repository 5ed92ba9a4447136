//! `<Base>OperationsReporting.swift`: per-operation reporting contexts
//! derived from the client's reporting configuration.

use std::path::{Path, PathBuf};

use eyre::Result;
use smelt_codegen::{CodeBuilder, DelegateContext};
use smelt_core::GeneratedFile;

use super::emit_file_preamble;
use crate::delegates::model_import;
use crate::operations::function_name;

pub struct OperationsReportingFile<'a> {
    pub ctx: DelegateContext<'a>,
    pub target_dir: String,
}

impl GeneratedFile for OperationsReportingFile<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.target_dir).join(format!(
            "{}OperationsReporting.swift",
            self.ctx.attributes.base_name
        ))
    }

    fn render(&self) -> Result<String> {
        let ctx = &self.ctx;
        let base_name = &ctx.attributes.base_name;
        let operations_enum = ctx.attributes.operations_enum();
        let operations = ctx.model.sorted_operation_names();
        let mut builder = CodeBuilder::swift();

        emit_file_preamble(ctx, &mut builder);
        builder
            .line("import ClientRuntime")
            .line("import Foundation")
            .line(&format!("import {}", model_import(ctx)))
            .blank();

        builder.doc(&format!(
            "Operation reporting contexts for each {base_name} operation."
        ));
        builder.line(&format!("public struct {base_name}OperationsReporting {{"));
        builder.indent();

        for name in &operations {
            builder.line(&format!(
                "public let {}: StandardOperationReporting<{operations_enum}>",
                function_name(name)
            ));
        }
        builder.blank();

        builder.line(&format!(
            "public init(clientName: String, configuration: HTTPClientReportingConfiguration<{operations_enum}>) {{"
        ));
        builder.indent();
        for name in &operations {
            let function = function_name(name);
            builder
                .line(&format!("self.{function} = StandardOperationReporting("))
                .indent()
                .line("clientName: clientName,")
                .line(&format!("operation: .{function},"))
                .line("configuration: configuration)")
                .dedent();
        }
        builder.dedent();
        builder.line("}");

        builder.dedent();
        builder.line("}");
        builder.finish()
    }
}
