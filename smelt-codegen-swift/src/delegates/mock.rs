//! Success-mock client emitter.
//!
//! The mock conforms to the generated client protocol. Each operation
//! consults an optional override closure first and otherwise succeeds with
//! the `__default` instance of its output type.

use eyre::Result;
use smelt_codegen::{
    ClientDelegate, ClientFileKind, ClientTypeDeclaration, CodeBuilder, DelegateContext,
    InvocationKind, OperationView, TypeDeclarationKind,
};

use super::{client_file_imports, operation_doc, type_description_lines};
use crate::operations::{
    function_type_alias, input_type, operation_signature, output_type, override_member_name,
};

/// Emits `Mock<Base>Client`.
pub struct MockClientDelegate;

impl ClientDelegate for MockClientDelegate {
    fn client_type(
        &self,
        ctx: &DelegateContext<'_>,
        _file_kind: ClientFileKind,
    ) -> ClientTypeDeclaration {
        let base = &ctx.attributes.base_name;
        ClientTypeDeclaration::new(TypeDeclarationKind::Struct, format!("Mock{base}Client"))
            .conforming_to(format!("{base}ClientProtocol"))
    }

    fn type_description(
        &self,
        ctx: &DelegateContext<'_>,
        _file_kind: ClientFileKind,
    ) -> Vec<String> {
        type_description_lines(
            format!(
                "Mock client for the {} service that succeeds with default instances unless an override is provided.",
                ctx.attributes.base_name
            ),
            ctx,
        )
    }

    fn custom_file_header(
        &self,
        ctx: &DelegateContext<'_>,
        builder: &mut CodeBuilder,
        _file_kind: ClientFileKind,
    ) {
        client_file_imports(ctx, builder);
    }

    fn common_functions(
        &self,
        ctx: &DelegateContext<'_>,
        builder: &mut CodeBuilder,
        _file_kind: ClientFileKind,
    ) {
        let mut overrides = Vec::new();
        for name in ctx.model.sorted_operation_names() {
            for invocation in &ctx.config.invocation_kinds {
                overrides.push((
                    override_member_name(name, *invocation),
                    function_type_alias(name, *invocation),
                ));
            }
        }

        for (member, alias) in &overrides {
            builder.line(&format!("let {member}: {alias}?"));
        }
        builder.blank();

        match overrides.split_first() {
            None => {
                builder.line("public init() {}");
            }
            Some(((first_member, first_alias), rest)) => {
                let terminator = if rest.is_empty() { ") {" } else { "," };
                builder.line(&format!(
                    "public init({first_member}: {first_alias}? = nil{terminator}"
                ));
                for (index, (member, alias)) in rest.iter().enumerate() {
                    let terminator = if index + 1 == rest.len() { ") {" } else { "," };
                    builder.line(&format!("            {member}: {alias}? = nil{terminator}"));
                }
                builder.indent();
                for (member, _) in &overrides {
                    builder.line(&format!("self.{member} = {member}"));
                }
                builder.dedent();
                builder.line("}");
            }
        }
    }

    fn operation_body(
        &self,
        ctx: &DelegateContext<'_>,
        builder: &mut CodeBuilder,
        operation: &OperationView<'_>,
        invocation: InvocationKind,
    ) -> Result<()> {
        let member = override_member_name(operation.name, invocation);
        let has_input = input_type(operation).is_some();
        let output = output_type(operation);

        builder.blank();
        builder.doc(&operation_doc(operation));
        builder.line(&format!(
            "public {} {{",
            operation_signature(ctx, operation, invocation)
        ));
        builder.indent();

        match invocation {
            InvocationKind::Async => {
                let arguments = if has_input { "input" } else { "" };
                builder.line(&format!("if let {member} = {member} {{"));
                builder.indent();
                builder.line(&format!("return try await {member}({arguments})"));
                builder.dedent();
                builder.line("}");
                if let Some(output) = output {
                    builder.line(&format!("return {output}.__default"));
                }
            }
            InvocationKind::Callback => {
                let arguments = if has_input {
                    "input, completion"
                } else {
                    "completion"
                };
                builder.line(&format!("if let {member} = {member} {{"));
                builder.indent();
                builder.line(&format!("return try {member}({arguments})"));
                builder.dedent();
                builder.line("}");
                match output {
                    Some(output) => builder.line(&format!(
                        "completion(.success({output}.__default))"
                    )),
                    None => builder.line("completion(nil)"),
                };
            }
        }

        builder.dedent();
        builder.line("}");
        Ok(())
    }
}
