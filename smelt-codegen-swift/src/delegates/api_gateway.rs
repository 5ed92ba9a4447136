//! API Gateway passthrough client emitter.
//!
//! Structurally the same client as the concrete AWS variant, but every
//! operation path is prefixed with the configured deployment stage, and the
//! configuration object carries that stage.

use eyre::{Result, bail};
use smelt_codegen::{
    ClientDelegate, ClientFileKind, ClientTypeDeclaration, CodeBuilder, DelegateContext,
    InvocationKind, OperationView, TypeDeclarationKind, WireProtocol,
};

use super::{
    client_file_imports, emit_retry_classification, emit_shutdown, emit_transport_init,
    emit_transport_members, operation_doc, type_description_lines,
};
use crate::operations::{function_name, input_type, operation_signature, output_type};

/// Emits `APIGateway<Base>Client` plus its configuration object and
/// generator.
pub struct ApiGatewayClientDelegate;

impl ApiGatewayClientDelegate {
    fn client_name(ctx: &DelegateContext<'_>) -> String {
        format!("APIGateway{}Client", ctx.attributes.base_name)
    }

    fn configuration_name(ctx: &DelegateContext<'_>) -> String {
        format!("APIGateway{}ClientConfiguration", ctx.attributes.base_name)
    }
}

impl ClientDelegate for ApiGatewayClientDelegate {
    fn file_kinds(&self) -> Vec<ClientFileKind> {
        vec![
            ClientFileKind::Implementation,
            ClientFileKind::Configuration,
            ClientFileKind::Generator,
        ]
    }

    fn client_type(
        &self,
        ctx: &DelegateContext<'_>,
        file_kind: ClientFileKind,
    ) -> ClientTypeDeclaration {
        let base = &ctx.attributes.base_name;
        match file_kind {
            ClientFileKind::Implementation => {
                ClientTypeDeclaration::new(TypeDeclarationKind::Struct, Self::client_name(ctx))
                    .conforming_to(format!("{base}ClientProtocol"))
            }
            ClientFileKind::Configuration => ClientTypeDeclaration::new(
                TypeDeclarationKind::Struct,
                Self::configuration_name(ctx),
            ),
            ClientFileKind::Generator => ClientTypeDeclaration::new(
                TypeDeclarationKind::Struct,
                format!("APIGateway{base}ClientGenerator"),
            ),
        }
    }

    fn type_description(
        &self,
        ctx: &DelegateContext<'_>,
        file_kind: ClientFileKind,
    ) -> Vec<String> {
        let base = &ctx.attributes.base_name;
        let primary = match file_kind {
            ClientFileKind::Implementation => {
                format!("API Gateway passthrough client for the {base} service.")
            }
            ClientFileKind::Configuration => {
                format!("Configuration object for the APIGateway{base}Client type.")
            }
            ClientFileKind::Generator => format!(
                "Generator producing APIGateway{base}Client instances from a shared configuration."
            ),
        };
        type_description_lines(primary, ctx)
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
        file_kind: ClientFileKind,
    ) {
        match file_kind {
            ClientFileKind::Implementation => {
                let error_type = ctx.attributes.error_type();
                let client_name = Self::client_name(ctx);
                let configuration_name = Self::configuration_name(ctx);

                emit_transport_members(ctx, builder);
                builder
                    .line("public let stage: String")
                    .line("public let credentialsProvider: CredentialsProvider")
                    .line("public let retryConfiguration: HTTPClientRetryConfiguration")
                    .line(&format!(
                        "public let retryOnErrorProvider: ({error_type}) -> Bool"
                    ))
                    .blank();

                builder.line(&format!("public init(config: {configuration_name}) {{"));
                builder.indent();
                emit_transport_init(ctx, builder);
                builder
                    .line("self.stage = config.stage")
                    .line("self.credentialsProvider = config.credentialsProvider")
                    .line("self.retryConfiguration = config.retryConfiguration")
                    .line(&format!(
                        "self.retryOnErrorProvider = {client_name}.isErrorRetriable"
                    ));
                builder.dedent();
                builder.line("}");
                builder.blank();

                emit_shutdown(ctx, builder);
                builder.blank();
                emit_retry_classification(ctx, builder);
            }
            ClientFileKind::Configuration => {
                builder
                    .line("public let credentialsProvider: CredentialsProvider")
                    .line("public let endpointHostName: String")
                    .line("public let endpointPort: Int")
                    .line("public let contentType: String")
                    .line("public let stage: String")
                    .line("public let retryConfiguration: HTTPClientRetryConfiguration")
                    .blank();

                builder
                    .line("public init(credentialsProvider: CredentialsProvider,")
                    .line("            endpointHostName: String,")
                    .line("            endpointPort: Int = 443,")
                    .line(&format!(
                        "            contentType: String = \"{}\",",
                        ctx.attributes.content_type
                    ))
                    .line("            stage: String,")
                    .line("            retryConfiguration: HTTPClientRetryConfiguration = .default) {");
                builder.indent();
                builder
                    .line("self.credentialsProvider = credentialsProvider")
                    .line("self.endpointHostName = endpointHostName")
                    .line("self.endpointPort = endpointPort")
                    .line("self.contentType = contentType")
                    .line("self.stage = stage")
                    .line("self.retryConfiguration = retryConfiguration");
                builder.dedent();
                builder.line("}");
            }
            ClientFileKind::Generator => {
                let client_name = Self::client_name(ctx);
                let configuration_name = Self::configuration_name(ctx);

                builder
                    .line(&format!("public let configuration: {configuration_name}"))
                    .blank()
                    .line(&format!("public init(configuration: {configuration_name}) {{"));
                builder.indent();
                builder.line("self.configuration = configuration");
                builder.dedent();
                builder.line("}");
                builder.blank();

                builder
                    .doc("Creates a new client instance from the stored configuration.")
                    .line(&format!("public func makeClient() -> {client_name} {{"));
                builder.indent();
                builder.line(&format!("return {client_name}(config: self.configuration)"));
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
        let Some(http_verb) = operation.description.http_verb.as_deref() else {
            bail!(
                "operation '{}' has no HTTP verb; cannot emit a request without a method",
                operation.name
            );
        };

        let operations_enum = ctx.attributes.operations_enum();
        let function = function_name(operation.name);
        let handle = ctx.http_config.client_handle_for(operation.name);
        let wire_format = match ctx.attributes.wire_protocol {
            WireProtocol::Body => ".body",
            WireProtocol::Query => ".query",
        };
        let has_output = output_type(operation).is_some();
        let execute = if has_output {
            "executeWithOutput"
        } else {
            "executeWithoutOutput"
        };

        builder.blank();
        builder.doc(&operation_doc(operation));
        builder.line(&format!(
            "public {} {{",
            operation_signature(ctx, operation, invocation)
        ));
        builder.indent();

        if input_type(operation).is_some() {
            builder.line(&format!(
                "let requestInput = {}OperationHTTPRequestInput(encodable: input)",
                operation.name
            ));
        } else {
            builder.line("let requestInput = NoHTTPRequestInput()");
        }

        // Stage-prefixed passthrough path.
        builder.line(&format!(
            "let operationPath = \"/\\(stage)\" + {operations_enum}.{function}.operationPath"
        ));

        let invoke_prefix = match invocation {
            InvocationKind::Callback => "try",
            InvocationKind::Async => {
                if has_output {
                    "return try await"
                } else {
                    "try await"
                }
            }
        };

        builder.line(&format!("{invoke_prefix} {handle}.{execute}("));
        builder.indent();
        builder.line("operationPath: operationPath,");
        builder.line(&format!("httpMethod: \"{http_verb}\","));
        builder.line(&format!("wireFormat: {wire_format},"));
        builder.line("input: requestInput,");
        if invocation == InvocationKind::Callback {
            builder.line("completion: completion,");
        }
        builder.line("retryConfiguration: retryConfiguration,");
        builder.line("retryOnError: retryOnErrorProvider)");
        builder.dedent();

        builder.dedent();
        builder.line("}");
        Ok(())
    }
}
