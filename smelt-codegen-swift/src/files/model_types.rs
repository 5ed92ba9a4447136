//! `<Base>ModelTypes.swift`: field typealiases, enumerations, and the
//! validation extensions derived from advisory constraints.

use std::path::{Path, PathBuf};

use eyre::Result;
use smelt_codegen::{CodeBuilder, DelegateContext};
use smelt_core::GeneratedFile;
use smelt_model::FieldConstraint;

use super::{emit_file_preamble, swift_string_literal};
use crate::naming::enum_case_name;
use crate::type_mapper::SwiftTypeMapper;

pub struct ModelTypesFile<'a> {
    pub ctx: DelegateContext<'a>,
    pub target_dir: String,
}

impl GeneratedFile for ModelTypesFile<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.target_dir)
            .join(format!("{}ModelTypes.swift", self.ctx.attributes.base_name))
    }

    fn render(&self) -> Result<String> {
        let ctx = &self.ctx;
        let mapper = SwiftTypeMapper::new(ctx.model);
        let mut builder = CodeBuilder::swift();

        emit_file_preamble(ctx, &mut builder);
        builder.line("import Foundation");

        for (field_name, constraint) in &ctx.model.field_descriptions {
            builder.blank();

            let overridden = ctx.model.type_mappings.contains_key(field_name);
            if constraint.is_enumeration() && !overridden {
                emit_enumeration(ctx, &mut builder, field_name, constraint);
                continue;
            }

            builder.doc(&format!("Type definition for the {field_name} field."));
            builder.line(&format!(
                "public typealias {field_name} = {}",
                mapper.underlying_type(field_name, constraint)
            ));

            if ctx.config.add_validation_code && constraint.has_validation() && !overridden {
                builder.blank();
                emit_validation_extension(ctx, &mut builder, field_name, constraint);
            }
        }

        builder.finish()
    }
}

fn emit_enumeration(
    ctx: &DelegateContext<'_>,
    builder: &mut CodeBuilder,
    field_name: &str,
    constraint: &FieldConstraint,
) {
    let FieldConstraint::String { values, .. } = constraint else {
        return;
    };
    let upper_camel = ctx.model.upper_camel_enum_types.contains(field_name);

    builder.doc(&format!(
        "Enumeration restricting the values of the {field_name} field."
    ));
    builder.line(&format!(
        "public enum {field_name}: String, Codable, CustomStringConvertible {{"
    ));
    builder.indent();
    for value in values {
        builder.line(&format!(
            "case {} = \"{}\"",
            enum_case_name(value, upper_camel),
            swift_string_literal(value)
        ));
    }
    builder.blank();
    builder.line("public var description: String {");
    builder.indent();
    builder.line("return rawValue");
    builder.dedent();
    builder.line("}");
    builder.dedent();
    builder.line("}");
}

fn emit_validation_extension(
    ctx: &DelegateContext<'_>,
    builder: &mut CodeBuilder,
    field_name: &str,
    constraint: &FieldConstraint,
) {
    let error_type = ctx.attributes.error_type();
    builder.line(&format!("public extension {field_name} {{"));
    builder.indent();
    builder.doc(&format!(
        "Validates this value against the declared constraints of the {field_name} field."
    ));
    builder.line(&format!("func validateAs{field_name}() throws {{"));
    builder.indent();

    match constraint {
        FieldConstraint::String { pattern, length, .. } => {
            if let Some(min) = length.min {
                emit_count_check(builder, &error_type, field_name, "<", min, "shorter than");
            }
            if let Some(max) = length.max {
                emit_count_check(builder, &error_type, field_name, ">", max, "longer than");
            }
            if let Some(pattern) = pattern {
                let literal = swift_string_literal(pattern);
                builder.line(&format!(
                    "guard self.range(of: \"{literal}\", options: .regularExpression) != nil else {{"
                ));
                builder.indent();
                builder.line(&format!(
                    "throw {error_type}.validationError(reason: \"{field_name} does not match the required pattern\")"
                ));
                builder.dedent();
                builder.line("}");
            }
        }
        FieldConstraint::Integer { range } | FieldConstraint::Long { range } => {
            if let Some(min) = range.min {
                emit_bound_check(builder, &error_type, field_name, "<", &min.to_string());
            }
            if let Some(max) = range.max {
                emit_bound_check(builder, &error_type, field_name, ">", &max.to_string());
            }
        }
        FieldConstraint::Double { range } => {
            if let Some(min) = range.min {
                emit_bound_check(builder, &error_type, field_name, "<", &min.to_string());
            }
            if let Some(max) = range.max {
                emit_bound_check(builder, &error_type, field_name, ">", &max.to_string());
            }
        }
        FieldConstraint::List { length, .. } | FieldConstraint::Map { length, .. } => {
            if let Some(min) = length.min {
                emit_count_check(builder, &error_type, field_name, "<", min, "smaller than");
            }
            if let Some(max) = length.max {
                emit_count_check(builder, &error_type, field_name, ">", max, "larger than");
            }
        }
        FieldConstraint::Boolean | FieldConstraint::Timestamp | FieldConstraint::Blob => {}
    }

    builder.dedent();
    builder.line("}");
    builder.dedent();
    builder.line("}");
}

fn emit_count_check(
    builder: &mut CodeBuilder,
    error_type: &str,
    field_name: &str,
    comparison: &str,
    bound: usize,
    reason: &str,
) {
    builder.line(&format!("if self.count {comparison} {bound} {{"));
    builder.indent();
    builder.line(&format!(
        "throw {error_type}.validationError(reason: \"{field_name} is {reason} the allowed size {bound}\")"
    ));
    builder.dedent();
    builder.line("}");
}

fn emit_bound_check(
    builder: &mut CodeBuilder,
    error_type: &str,
    field_name: &str,
    comparison: &str,
    bound: &str,
) {
    builder.line(&format!("if self {comparison} {bound} {{"));
    builder.indent();
    builder.line(&format!(
        "throw {error_type}.validationError(reason: \"{field_name} is outside the allowed range\")"
    ));
    builder.dedent();
    builder.line("}");
}
