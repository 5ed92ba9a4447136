//! Protocol-only declaration emitter.

use eyre::Result;
use smelt_codegen::{
    ClientDelegate, ClientFileKind, ClientTypeDeclaration, CodeBuilder, DelegateContext,
    InvocationKind, OperationView, TypeDeclarationKind,
};

use super::{client_file_imports, operation_doc, type_description_lines};
use crate::operations::{function_type, function_type_alias, operation_signature};

/// Emits `<Base>ClientProtocol`: function typealiases plus one requirement
/// per (operation, invocation-kind) pair, no bodies.
pub struct ProtocolDelegate;

impl ClientDelegate for ProtocolDelegate {
    fn client_type(
        &self,
        ctx: &DelegateContext<'_>,
        _file_kind: ClientFileKind,
    ) -> ClientTypeDeclaration {
        ClientTypeDeclaration::new(
            TypeDeclarationKind::Protocol,
            format!("{}ClientProtocol", ctx.attributes.base_name),
        )
    }

    fn type_description(
        &self,
        ctx: &DelegateContext<'_>,
        _file_kind: ClientFileKind,
    ) -> Vec<String> {
        type_description_lines(
            format!("Client protocol for the {} service.", ctx.attributes.base_name),
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
        for name in ctx.model.sorted_operation_names() {
            let operation = OperationView {
                name,
                description: &ctx.model.operation_descriptions[name],
            };
            for invocation in &ctx.config.invocation_kinds {
                builder.line(&format!(
                    "typealias {} = {}",
                    function_type_alias(name, *invocation),
                    function_type(ctx, &operation, *invocation)
                ));
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
        builder.blank();
        builder.doc(&operation_doc(operation));
        builder.line(&operation_signature(ctx, operation, invocation));
        Ok(())
    }
}
