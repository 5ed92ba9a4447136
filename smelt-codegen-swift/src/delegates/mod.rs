//! The client delegate variants.
//!
//! A closed set — protocol-only, concrete AWS, API Gateway passthrough,
//! success mock, always-throwing mock — all satisfying the same
//! [`smelt_codegen::ClientDelegate`] contract. They share signature
//! emission (see [`crate::operations`]) and transport scaffolding; each
//! differs only in how it fills operation bodies.

mod api_gateway;
mod concrete;
mod mock;
mod protocol;
mod throwing;

pub use api_gateway::ApiGatewayClientDelegate;
pub use concrete::ConcreteClientDelegate;
pub use mock::MockClientDelegate;
pub use protocol::ProtocolDelegate;
pub use throwing::ThrowingClientDelegate;

use smelt_codegen::{CodeBuilder, DelegateContext, OperationView};

/// Module name of the model package the client files import.
pub(crate) fn model_import(ctx: &DelegateContext<'_>) -> String {
    ctx.config
        .model_target_name
        .clone()
        .unwrap_or_else(|| format!("{}Model", ctx.attributes.base_name))
}

/// Standard imports at the top of every client-package file.
pub(crate) fn client_file_imports(ctx: &DelegateContext<'_>, builder: &mut CodeBuilder) {
    builder
        .line("import ClientRuntime")
        .line("import Foundation")
        .line(&format!("import {}", model_import(ctx)));
}

/// Primary description line plus the application description, when set.
pub(crate) fn type_description_lines(primary: String, ctx: &DelegateContext<'_>) -> Vec<String> {
    let mut lines = vec![primary];
    if !ctx.application.description.is_empty() {
        lines.push(ctx.application.description.clone());
    }
    lines
}

/// Documentation line for one emitted operation function.
pub(crate) fn operation_doc(operation: &OperationView<'_>) -> String {
    match &operation.description.documentation {
        Some(documentation) => documentation.clone(),
        None => format!("Invokes the {} operation.", operation.name),
    }
}

/// Declare one transport property per configured client handle, the
/// default `httpClient` first.
pub(crate) fn emit_transport_members(ctx: &DelegateContext<'_>, builder: &mut CodeBuilder) {
    for handle in ctx.http_config.all_client_handles() {
        builder.line(&format!("public let {handle}: HTTPOperationsClient"));
    }
}

/// Initialize every transport from the shared configuration object.
pub(crate) fn emit_transport_init(ctx: &DelegateContext<'_>, builder: &mut CodeBuilder) {
    for handle in ctx.http_config.all_client_handles() {
        builder
            .line(&format!("self.{handle} = HTTPOperationsClient("))
            .indent()
            .line("endpointHostName: config.endpointHostName,")
            .line("endpointPort: config.endpointPort,")
            .line("contentType: config.contentType)")
            .dedent();
    }
}

/// Emit the shutdown function closing every transport.
pub(crate) fn emit_shutdown(ctx: &DelegateContext<'_>, builder: &mut CodeBuilder) {
    builder
        .doc("Gracefully shuts down the underlying transports. The client")
        .doc("must not be used for further operations afterwards.")
        .line("public func shutdown() throws {");
    builder.indent();
    for handle in ctx.http_config.all_client_handles() {
        builder.line(&format!("try self.{handle}.shutdown()"));
    }
    builder.dedent();
    builder.line("}");
}

/// Emit the retry classification function derived from the HTTP client
/// configuration: explicit retriable/unretriable lists first, then the
/// default for unclassified errors.
pub(crate) fn emit_retry_classification(ctx: &DelegateContext<'_>, builder: &mut CodeBuilder) {
    let error_type = ctx.attributes.error_type();
    let default = if ctx.http_config.retry_on_unknown_error {
        "true"
    } else {
        "false"
    };

    builder
        .doc("Retry classification for errors returned by the service.")
        .line(&format!(
            "static func isErrorRetriable(_ error: {error_type}) -> Bool {{"
        ));
    builder.indent();

    let retriable = &ctx.http_config.retriable_errors;
    let unretriable = &ctx.http_config.unretriable_errors;
    if retriable.is_empty() && unretriable.is_empty() {
        builder.line(&format!("return {default}"));
    } else {
        builder.line("switch error {");
        for error in retriable {
            builder.line(&format!("case .{}:", smelt_core::to_lower_camel_case(error)));
            builder.indent();
            builder.line("return true");
            builder.dedent();
        }
        for error in unretriable {
            builder.line(&format!("case .{}:", smelt_core::to_lower_camel_case(error)));
            builder.indent();
            builder.line("return false");
            builder.dedent();
        }
        builder.line("default:");
        builder.indent();
        builder.line(&format!("return {default}"));
        builder.dedent();
        builder.line("}");
    }

    builder.dedent();
    builder.line("}");
}
