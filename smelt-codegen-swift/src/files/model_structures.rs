//! `<Base>ModelStructures.swift`: one Codable struct per model structure,
//! members in decoder-assigned position order.

use std::path::{Path, PathBuf};

use eyre::Result;
use smelt_codegen::{CodeBuilder, DelegateContext};
use smelt_core::GeneratedFile;
use smelt_model::{Member, StructureDescription};

use super::{emit_file_preamble, swift_string_literal};
use crate::naming::swift_member_name;
use crate::type_mapper::SwiftTypeMapper;

pub struct ModelStructuresFile<'a> {
    pub ctx: DelegateContext<'a>,
    pub target_dir: String,
}

impl GeneratedFile for ModelStructuresFile<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.target_dir).join(format!(
            "{}ModelStructures.swift",
            self.ctx.attributes.base_name
        ))
    }

    fn render(&self) -> Result<String> {
        let ctx = &self.ctx;
        let mapper = SwiftTypeMapper::new(ctx.model);
        let mut builder = CodeBuilder::swift();

        emit_file_preamble(ctx, &mut builder);
        builder.line("import Foundation");

        for (name, structure) in &ctx.model.structure_descriptions {
            builder.blank();
            emit_structure(ctx, &mapper, &mut builder, name, structure);
        }

        builder.finish()
    }
}

fn member_type(mapper: &SwiftTypeMapper<'_>, member: &Member) -> String {
    let base = mapper.type_reference(&member.field_name);
    if member.required { base } else { format!("{base}?") }
}

fn emit_structure(
    ctx: &DelegateContext<'_>,
    mapper: &SwiftTypeMapper<'_>,
    builder: &mut CodeBuilder,
    name: &str,
    structure: &StructureDescription,
) {
    match &structure.documentation {
        Some(documentation) => builder.doc(documentation),
        None => builder.doc(&format!("Model structure {name}.")),
    };
    builder.line(&format!("public struct {name}: Codable, Equatable {{"));
    builder.indent();

    let members = structure.ordered_members();

    for (member_name, member) in &members {
        if let Some(documentation) = &member.documentation {
            builder.doc(documentation);
        }
        builder.line(&format!(
            "public var {}: {}",
            swift_member_name(member_name),
            member_type(mapper, member)
        ));
    }

    builder.blank();
    emit_init(mapper, builder, &members);

    if !members.is_empty() {
        builder.blank();
        builder.line("enum CodingKeys: String, CodingKey {");
        builder.indent();
        for (member_name, member) in &members {
            builder.line(&format!(
                "case {} = \"{}\"",
                swift_member_name(member_name),
                swift_string_literal(member.wire_name(member_name))
            ));
        }
        builder.dedent();
        builder.line("}");
    }

    if ctx.config.add_validation_code {
        emit_validate(ctx, builder, &members);
    }

    builder.dedent();
    builder.line("}");
}

fn emit_init(
    mapper: &SwiftTypeMapper<'_>,
    builder: &mut CodeBuilder,
    members: &[(&str, &Member)],
) {
    if members.is_empty() {
        builder.line("public init() {}");
        return;
    }

    for (index, (member_name, member)) in members.iter().enumerate() {
        let prefix = if index == 0 {
            "public init(".to_string()
        } else {
            "            ".to_string()
        };
        let default_suffix = if member.required { "" } else { " = nil" };
        let terminator = if index + 1 == members.len() { ") {" } else { "," };
        builder.line(&format!(
            "{prefix}{}: {}{default_suffix}{terminator}",
            swift_member_name(member_name),
            member_type(mapper, member)
        ));
    }
    builder.indent();
    for (member_name, _) in members {
        let member_name = swift_member_name(member_name);
        builder.line(&format!("self.{member_name} = {member_name}"));
    }
    builder.dedent();
    builder.line("}");
}

fn emit_validate(
    ctx: &DelegateContext<'_>,
    builder: &mut CodeBuilder,
    members: &[(&str, &Member)],
) {
    let validated: Vec<_> = members
        .iter()
        .filter(|(_, member)| {
            !ctx.model.type_mappings.contains_key(&member.field_name)
                && ctx
                    .model
                    .field_descriptions
                    .get(&member.field_name)
                    .is_some_and(|c| c.has_validation() && !c.is_enumeration())
        })
        .collect();
    if validated.is_empty() {
        return;
    }

    builder.blank();
    builder.doc("Validates all members against their declared constraints.");
    builder.line("public func validate() throws {");
    builder.indent();
    for (member_name, member) in validated {
        let optional_marker = if member.required { "" } else { "?" };
        builder.line(&format!(
            "try {}{optional_marker}.validateAs{}()",
            swift_member_name(member_name),
            member.field_name
        ));
    }
    builder.dedent();
    builder.line("}");
}
