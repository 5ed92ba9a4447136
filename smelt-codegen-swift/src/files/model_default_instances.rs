//! `<Base>ModelDefaultInstances.swift`: a `__default` instance per
//! structure, used by the success mocks and by tests of consuming code.

use std::path::{Path, PathBuf};

use eyre::Result;
use smelt_codegen::{CodeBuilder, DelegateContext};
use smelt_core::GeneratedFile;

use super::emit_file_preamble;
use crate::naming::swift_member_name;
use crate::type_mapper::SwiftTypeMapper;

pub struct ModelDefaultInstancesFile<'a> {
    pub ctx: DelegateContext<'a>,
    pub target_dir: String,
}

impl GeneratedFile for ModelDefaultInstancesFile<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.target_dir).join(format!(
            "{}ModelDefaultInstances.swift",
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
            // Required members in position order; optional members fall back
            // to their `nil` initializer defaults.
            let required: Vec<_> = structure
                .ordered_members()
                .into_iter()
                .filter(|(_, member)| member.required)
                .collect();

            builder.blank();
            builder.line(&format!("public extension {name} {{"));
            builder.indent();
            builder.doc(&format!("Default instance of the {name} structure."));
            builder.line(&format!("static let __default: {name} = {{"));
            builder.indent();

            if required.is_empty() {
                builder.line(&format!("let defaultInstance = {name}()"));
            } else {
                builder.line(&format!("let defaultInstance = {name}("));
                builder.indent();
                for (index, (member_name, member)) in required.iter().enumerate() {
                    let terminator = if index + 1 == required.len() { ")" } else { "," };
                    builder.line(&format!(
                        "{}: {}{terminator}",
                        swift_member_name(member_name),
                        mapper.default_value(&member.field_name)
                    ));
                }
                builder.dedent();
            }

            builder.blank();
            builder.line("return defaultInstance");
            builder.dedent();
            builder.line("}()");
            builder.dedent();
            builder.line("}");
        }

        builder.finish()
    }
}
