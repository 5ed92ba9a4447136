//! Always-throwing mock client emitter.
//!
//! The throwing double conforms to the generated client protocol and fails
//! every operation with the error it was constructed with.

use eyre::Result;
use smelt_codegen::{
    ClientDelegate, ClientFileKind, ClientTypeDeclaration, CodeBuilder, DelegateContext,
    InvocationKind, OperationView, TypeDeclarationKind,
};

use super::{client_file_imports, operation_doc, type_description_lines};
use crate::operations::{operation_signature, output_type};

/// Emits `Throwing<Base>Client`.
pub struct ThrowingClientDelegate;

impl ClientDelegate for ThrowingClientDelegate {
    fn client_type(
        &self,
        ctx: &DelegateContext<'_>,
        _file_kind: ClientFileKind,
    ) -> ClientTypeDeclaration {
        let base = &ctx.attributes.base_name;
        ClientTypeDeclaration::new(TypeDeclarationKind::Struct, format!("Throwing{base}Client"))
            .conforming_to(format!("{base}ClientProtocol"))
    }

    fn type_description(
        &self,
        ctx: &DelegateContext<'_>,
        _file_kind: ClientFileKind,
    ) -> Vec<String> {
        type_description_lines(
            format!(
                "Mock client for the {} service that fails every operation with the configured error.",
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
        let error_type = ctx.attributes.error_type();
        builder
            .line(&format!("let error: {error_type}"))
            .blank()
            .line(&format!("public init(error: {error_type}) {{"));
        builder.indent();
        builder.line("self.error = error");
        builder.dedent();
        builder.line("}");
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
        builder.line(&format!(
            "public {} {{",
            operation_signature(ctx, operation, invocation)
        ));
        builder.indent();

        match invocation {
            InvocationKind::Async => {
                builder.line("throw error");
            }
            InvocationKind::Callback => match output_type(operation) {
                Some(_) => {
                    builder.line("completion(.failure(error))");
                }
                None => {
                    builder.line("completion(error)");
                }
            },
        }

        builder.dedent();
        builder.line("}");
        Ok(())
    }
}
