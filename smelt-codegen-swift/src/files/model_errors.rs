//! `<Base>ModelErrors.swift`: the model error enum and its wire decoding.
//!
//! Errors backed by a model structure decode their payload; synthetic
//! errors injected by the override layer have no structure and carry only
//! the wire message.

use std::path::{Path, PathBuf};

use eyre::Result;
use smelt_codegen::{CodeBuilder, DelegateContext};
use smelt_core::{GeneratedFile, to_lower_camel_case};

use super::{emit_file_preamble, swift_string_literal};
use crate::naming::escape_swift_reserved;

pub struct ModelErrorsFile<'a> {
    pub ctx: DelegateContext<'a>,
    pub target_dir: String,
}

impl GeneratedFile for ModelErrorsFile<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.target_dir)
            .join(format!("{}ModelErrors.swift", self.ctx.attributes.base_name))
    }

    fn render(&self) -> Result<String> {
        let ctx = &self.ctx;
        let error_type = ctx.attributes.error_type();
        let mut builder = CodeBuilder::swift();

        emit_file_preamble(ctx, &mut builder);
        builder.line("import Foundation");
        builder.blank();

        // Wire identity constants, one per error type.
        for error in &ctx.model.error_types {
            builder.line(&format!(
                "private let {}Identity = \"{}\"",
                to_lower_camel_case(error),
                swift_string_literal(ctx.model.error_code(error))
            ));
        }
        if !ctx.model.error_types.is_empty() {
            builder.blank();
        }

        builder.doc(&format!(
            "Errors the {} service can return.",
            ctx.attributes.base_name
        ));
        builder.line(&format!("public enum {error_type}: Swift.Error, Decodable {{"));
        builder.indent();

        for error in &ctx.model.error_types {
            let case_name = case_name(error);
            if ctx.model.structure_descriptions.contains_key(error) {
                builder.line(&format!("case {case_name}({error})"));
            } else {
                // No structure to decode a payload from.
                builder.line(&format!("case {case_name}(message: String?)"));
            }
        }
        builder.line("case validationError(reason: String)");
        builder.line("case unrecognizedError(String, String?)");
        builder.blank();

        builder.line("enum CodingKeys: String, CodingKey {");
        builder.indent();
        builder.line("case type = \"__type\"");
        builder.line("case message = \"message\"");
        builder.dedent();
        builder.line("}");
        builder.blank();

        emit_decoder(ctx, &mut builder, &error_type);

        builder.dedent();
        builder.line("}");
        builder.finish()
    }
}

fn case_name(error: &str) -> String {
    escape_swift_reserved(&to_lower_camel_case(error))
}

fn emit_decoder(ctx: &DelegateContext<'_>, builder: &mut CodeBuilder, error_type: &str) {
    builder.line("public init(from decoder: Decoder) throws {");
    builder.indent();
    builder
        .line("let values = try decoder.container(keyedBy: CodingKeys.self)")
        .line("var errorReason = try values.decode(String.self, forKey: .type)")
        .line("let errorMessage = try values.decodeIfPresent(String.self, forKey: .message)")
        .blank()
        .line("// Some wire formats prefix the error type with the namespace.")
        .line("if let index = errorReason.firstIndex(of: \"#\") {")
        .indent()
        .line("errorReason = String(errorReason[errorReason.index(index, offsetBy: 1)...])")
        .dedent()
        .line("}")
        .blank();

    if ctx.model.error_types.is_empty() {
        builder.line(&format!(
            "self = {error_type}.unrecognizedError(errorReason, errorMessage)"
        ));
        builder.dedent();
        builder.line("}");
        return;
    }

    builder.line("switch errorReason {");
    for error in &ctx.model.error_types {
        let case_name = case_name(error);
        builder.line(&format!("case {}Identity:", to_lower_camel_case(error)));
        builder.indent();
        if ctx.model.structure_descriptions.contains_key(error) {
            builder.line(&format!(
                "self = {error_type}.{case_name}(try {error}(from: decoder))"
            ));
        } else {
            builder.line(&format!(
                "self = {error_type}.{case_name}(message: errorMessage)"
            ));
        }
        builder.dedent();
    }
    builder.line("default:");
    builder.indent();
    builder.line(&format!(
        "self = {error_type}.unrecognizedError(errorReason, errorMessage)"
    ));
    builder.dedent();
    builder.line("}");

    builder.dedent();
    builder.line("}");
}
