//! `<Base>ModelOperations.swift`: the operations enumeration with each
//! operation's wire name and URL template.

use std::path::{Path, PathBuf};

use eyre::Result;
use smelt_codegen::{CodeBuilder, DelegateContext};
use smelt_core::GeneratedFile;

use super::{emit_file_preamble, swift_string_literal};
use crate::operations::function_name;

pub struct ModelOperationsFile<'a> {
    pub ctx: DelegateContext<'a>,
    pub target_dir: String,
}

impl GeneratedFile for ModelOperationsFile<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.target_dir).join(format!(
            "{}ModelOperations.swift",
            self.ctx.attributes.base_name
        ))
    }

    fn render(&self) -> Result<String> {
        let ctx = &self.ctx;
        let operations_enum = ctx.attributes.operations_enum();
        let operations = ctx.model.sorted_operation_names();
        let mut builder = CodeBuilder::swift();

        emit_file_preamble(ctx, &mut builder);
        builder.line("import Foundation");
        builder.blank();

        if operations.is_empty() {
            builder.line("// This model declares no operations.");
            return builder.finish();
        }

        builder.doc(&format!(
            "Operations exposed by the {} service.",
            ctx.attributes.base_name
        ));
        builder.line(&format!(
            "public enum {operations_enum}: String, Hashable, CustomStringConvertible {{"
        ));
        builder.indent();
        for name in &operations {
            builder.line(&format!("case {} = \"{name}\"", function_name(name)));
        }
        builder.blank();

        builder.line("public var description: String {");
        builder.indent();
        builder.line("return rawValue");
        builder.dedent();
        builder.line("}");
        builder.blank();

        builder.doc("The URL template the operation's request is sent to.");
        builder.line("public var operationPath: String {");
        builder.indent();
        builder.line("switch self {");
        for name in &operations {
            let path = self.ctx.model.operation_descriptions[*name]
                .http_url
                .clone()
                .unwrap_or_else(|| "/".to_string());
            builder.line(&format!("case .{}:", function_name(name)));
            builder.indent();
            builder.line(&format!("return \"{}\"", swift_string_literal(&path)));
            builder.dedent();
        }
        builder.line("}");
        builder.dedent();
        builder.line("}");

        builder.dedent();
        builder.line("}");
        builder.finish()
    }
}
