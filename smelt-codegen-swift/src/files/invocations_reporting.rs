//! `<Base>InvocationsReporting.swift`: per-operation invocation reporting
//! handles bound to a client invocation context.

use std::path::{Path, PathBuf};

use eyre::Result;
use smelt_codegen::{CodeBuilder, DelegateContext};
use smelt_core::GeneratedFile;

use super::emit_file_preamble;
use crate::delegates::model_import;
use crate::operations::function_name;

pub struct InvocationsReportingFile<'a> {
    pub ctx: DelegateContext<'a>,
    pub target_dir: String,
}

impl GeneratedFile for InvocationsReportingFile<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.target_dir).join(format!(
            "{}InvocationsReporting.swift",
            self.ctx.attributes.base_name
        ))
    }

    fn render(&self) -> Result<String> {
        let ctx = &self.ctx;
        let base_name = &ctx.attributes.base_name;
        let operations = ctx.model.sorted_operation_names();
        let mut builder = CodeBuilder::swift();

        emit_file_preamble(ctx, &mut builder);
        builder
            .line("import ClientRuntime")
            .line("import Foundation")
            .line(&format!("import {}", model_import(ctx)))
            .blank();

        builder.doc(&format!(
            "Invocation reporting handles for each {base_name} operation."
        ));
        builder.line(&format!(
            "public struct {base_name}InvocationsReporting<InvocationReportingType: HTTPClientCoreInvocationReporting> {{"
        ));
        builder.indent();

        for name in &operations {
            builder.line(&format!(
                "public let {}: StandardHTTPClientInvocationReporting<InvocationReportingType>",
                function_name(name)
            ));
        }
        builder.blank();

        builder.line(&format!(
            "public init(reporting: InvocationReportingType, operationsReporting: {base_name}OperationsReporting) {{"
        ));
        builder.indent();
        for name in &operations {
            let function = function_name(name);
            builder
                .line(&format!(
                    "self.{function} = StandardHTTPClientInvocationReporting("
                ))
                .indent()
                .line("clientInvocationReporting: reporting,")
                .line(&format!(
                    "operationReporting: operationsReporting.{function})"
                ))
                .dedent();
        }
        builder.dedent();
        builder.line("}");

        builder.dedent();
        builder.line("}");
        builder.finish()
    }
}
