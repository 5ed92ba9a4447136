//! `<Base>OperationsClientOutput.swift`: one HTTP response output wrapper
//! per operation, separating header-bound fields from the decoded body.

use std::path::{Path, PathBuf};

use eyre::Result;
use smelt_codegen::{CodeBuilder, DelegateContext};
use smelt_core::GeneratedFile;

use super::emit_file_preamble;
use crate::delegates::model_import;
use crate::naming::swift_member_name;
use crate::type_mapper::SwiftTypeMapper;

pub struct OperationsClientOutputFile<'a> {
    pub ctx: DelegateContext<'a>,
    pub target_dir: String,
}

impl GeneratedFile for OperationsClientOutputFile<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.target_dir).join(format!(
            "{}OperationsClientOutput.swift",
            self.ctx.attributes.base_name
        ))
    }

    fn render(&self) -> Result<String> {
        let ctx = &self.ctx;
        let mapper = SwiftTypeMapper::new(ctx.model);
        let mut builder = CodeBuilder::swift();

        emit_file_preamble(ctx, &mut builder);
        builder
            .line("import ClientRuntime")
            .line("import Foundation")
            .line(&format!("import {}", model_import(ctx)));

        for name in ctx.model.sorted_operation_names() {
            let operation = &ctx.model.operation_descriptions[name];
            let Some(output) = &operation.output else {
                continue;
            };

            // Header-bound members ride alongside the decoded body; they
            // are always optional since a response may omit them.
            let headers: Vec<(String, String)> = operation
                .output_description
                .header_fields
                .iter()
                .filter_map(|field| {
                    let member = ctx.model.structure_descriptions[output].members.get(field)?;
                    Some((
                        swift_member_name(field),
                        mapper.type_reference(&member.field_name),
                    ))
                })
                .collect();

            builder.blank();
            builder.doc(&format!("HTTP response output for the {name} operation."));
            builder.line(&format!(
                "public struct {name}OperationHTTPResponseOutput: HTTPResponseOutputProtocol {{"
            ));
            builder.indent();
            builder.line(&format!("public let body: {output}"));
            for (member, swift_type) in &headers {
                builder.line(&format!("public let {member}: {swift_type}?"));
            }
            builder.blank();

            if headers.is_empty() {
                builder.line(&format!("public init(body: {output}) {{"));
            } else {
                builder.line(&format!("public init(body: {output},"));
                for (index, (member, swift_type)) in headers.iter().enumerate() {
                    let terminator = if index + 1 == headers.len() { ") {" } else { "," };
                    builder.line(&format!(
                        "            {member}: {swift_type}? = nil{terminator}"
                    ));
                }
            }
            builder.indent();
            builder.line("self.body = body");
            for (member, _) in &headers {
                builder.line(&format!("self.{member} = {member}"));
            }
            builder.dedent();
            builder.line("}");

            builder.dedent();
            builder.line("}");
        }

        builder.finish()
    }
}
