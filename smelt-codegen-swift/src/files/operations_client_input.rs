//! `<Base>OperationsClientInput.swift`: one HTTP request input wrapper per
//! operation, partitioning members into path, query, header, and body per
//! the operation's input description.

use std::path::{Path, PathBuf};

use eyre::Result;
use smelt_codegen::{CodeBuilder, DelegateContext};
use smelt_core::GeneratedFile;
use smelt_model::{DefaultInputLocation, OperationInputDescription};

use super::{emit_file_preamble, swift_string_literal};
use crate::delegates::model_import;

pub struct OperationsClientInputFile<'a> {
    pub ctx: DelegateContext<'a>,
    pub target_dir: String,
}

impl GeneratedFile for OperationsClientInputFile<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.target_dir).join(format!(
            "{}OperationsClientInput.swift",
            self.ctx.attributes.base_name
        ))
    }

    fn render(&self) -> Result<String> {
        let ctx = &self.ctx;
        let mut builder = CodeBuilder::swift();

        emit_file_preamble(ctx, &mut builder);
        builder
            .line("import ClientRuntime")
            .line("import Foundation")
            .line(&format!("import {}", model_import(ctx)));

        for name in ctx.model.sorted_operation_names() {
            let operation = &ctx.model.operation_descriptions[name];
            let Some(input) = &operation.input else {
                continue;
            };

            builder.blank();
            emit_request_input(&mut builder, name, input, &operation.input_description);
        }

        builder.finish()
    }
}

/// The wire destinations an input structure feeds, derived from its
/// binding description.
struct InputPartition {
    path: bool,
    query: bool,
    body: bool,
    additional_headers: bool,
}

impl InputPartition {
    fn of(description: &OperationInputDescription) -> Self {
        let unbound_to_query = description.default_input_location == DefaultInputLocation::Query
            && !description.body_fields.is_empty()
            && description.payload_member.is_none();
        let unbound_to_body = description.default_input_location == DefaultInputLocation::Body
            && !description.body_fields.is_empty();

        Self {
            path: !description.path_fields.is_empty(),
            query: !description.query_fields.is_empty() || unbound_to_query,
            body: description.payload_member.is_some() || unbound_to_body,
            additional_headers: !description.header_fields.is_empty(),
        }
    }
}

fn emit_request_input(
    builder: &mut CodeBuilder,
    operation_name: &str,
    input_type: &str,
    description: &OperationInputDescription,
) {
    let partition = InputPartition::of(description);

    builder.doc(&format!(
        "HTTP request input for the {operation_name} operation."
    ));
    builder.line(&format!(
        "public struct {operation_name}OperationHTTPRequestInput: HTTPRequestInputProtocol {{"
    ));
    builder.indent();
    builder
        .line(&format!("public let queryEncodable: {input_type}?"))
        .line(&format!("public let pathEncodable: {input_type}?"))
        .line(&format!("public let bodyEncodable: {input_type}?"))
        .line(&format!(
            "public let additionalHeadersEncodable: {input_type}?"
        ))
        .line("public let pathTemplate: String?")
        .blank();

    builder.line(&format!("public init(encodable: {input_type}) {{"));
    builder.indent();
    emit_assignment(builder, "queryEncodable", partition.query);
    emit_assignment(builder, "pathEncodable", partition.path);
    emit_assignment(builder, "bodyEncodable", partition.body);
    emit_assignment(builder, "additionalHeadersEncodable", partition.additional_headers);
    match &description.path_template {
        Some(template) => builder.line(&format!(
            "self.pathTemplate = \"{}\"",
            swift_string_literal(template)
        )),
        None => builder.line("self.pathTemplate = nil"),
    };
    builder.dedent();
    builder.line("}");

    builder.dedent();
    builder.line("}");
}

fn emit_assignment(builder: &mut CodeBuilder, member: &str, bound: bool) {
    if bound {
        builder.line(&format!("self.{member} = encodable"));
    } else {
        builder.line(&format!("self.{member} = nil"));
    }
}
