//! Shared operation signature emission.
//!
//! Every client delegate — protocol, concrete, passthrough, mock, throwing —
//! emits the same function signatures; they differ only in bodies. Keeping
//! signature construction here is what guarantees the generated doubles
//! actually conform to the generated protocol.

use smelt_codegen::{DelegateContext, InvocationKind, OperationView};
use smelt_core::to_lower_camel_case;

/// Generated function name for an operation, e.g. `GetWidget` → `getWidget`.
pub fn function_name(operation_name: &str) -> String {
    to_lower_camel_case(operation_name)
}

/// The input structure type of an operation, if it has one.
pub fn input_type<'a>(operation: &OperationView<'a>) -> Option<&'a str> {
    operation.description.input.as_deref()
}

/// The output structure type of an operation, if it has one. Absence is a
/// legitimate state, not an error: the operation returns nothing.
pub fn output_type<'a>(operation: &OperationView<'a>) -> Option<&'a str> {
    operation.description.output.as_deref()
}

/// Render the signature for one (operation, invocation-kind) pair, without
/// a trailing body brace.
pub fn operation_signature(
    ctx: &DelegateContext<'_>,
    operation: &OperationView<'_>,
    invocation: InvocationKind,
) -> String {
    let name = function_name(operation.name);
    let error_type = ctx.attributes.error_type();
    let input = input_type(operation);
    let output = output_type(operation);

    match invocation {
        InvocationKind::Callback => {
            let completion = match output {
                Some(output) => {
                    format!("completion: @escaping (Result<{output}, {error_type}>) -> Void")
                }
                None => format!("completion: @escaping ({error_type}?) -> Void"),
            };
            match input {
                Some(input) => format!("func {name}(input: {input}, {completion}) throws"),
                None => format!("func {name}({completion}) throws"),
            }
        }
        InvocationKind::Async => {
            let parameters = match input {
                Some(input) => format!("input: {input}"),
                None => String::new(),
            };
            match output {
                Some(output) => format!("func {name}({parameters}) async throws -> {output}"),
                None => format!("func {name}({parameters}) async throws"),
            }
        }
    }
}

/// Typealias name for an operation's function type in the client protocol,
/// e.g. `GetWidgetAsyncType`.
pub fn function_type_alias(operation_name: &str, invocation: InvocationKind) -> String {
    let suffix = match invocation {
        InvocationKind::Callback => "CallbackType",
        InvocationKind::Async => "AsyncType",
    };
    format!("{operation_name}{suffix}")
}

/// Name of the stored override property a mock client declares for one
/// (operation, invocation-kind) pair, e.g. `getWidgetAsyncOverride`.
pub fn override_member_name(operation_name: &str, invocation: InvocationKind) -> String {
    let suffix = match invocation {
        InvocationKind::Callback => "CallbackOverride",
        InvocationKind::Async => "AsyncOverride",
    };
    format!("{}{suffix}", function_name(operation_name))
}

/// Render the function type a protocol typealias points at.
pub fn function_type(
    ctx: &DelegateContext<'_>,
    operation: &OperationView<'_>,
    invocation: InvocationKind,
) -> String {
    let error_type = ctx.attributes.error_type();
    let input = input_type(operation);
    let output = output_type(operation);

    match invocation {
        InvocationKind::Callback => {
            let completion = match output {
                Some(output) => {
                    format!("_ completion: @escaping (Result<{output}, {error_type}>) -> Void")
                }
                None => format!("_ completion: @escaping ({error_type}?) -> Void"),
            };
            match input {
                Some(input) => format!("(_ input: {input}, {completion}) throws -> Void"),
                None => format!("({completion}) throws -> Void"),
            }
        }
        InvocationKind::Async => {
            let parameters = match input {
                Some(input) => format!("_ input: {input}"),
                None => String::new(),
            };
            match output {
                Some(output) => format!("({parameters}) async throws -> {output}"),
                None => format!("({parameters}) async throws -> Void"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use smelt_codegen::{ClientAttributes, GenerationConfig, WireProtocol};
    use smelt_model::{
        ApplicationDescription, HttpClientConfiguration, OperationDescription, ServiceModel,
    };

    use super::*;

    fn attributes() -> ClientAttributes {
        ClientAttributes {
            base_name: "Widget".to_string(),
            content_type: "application/x-amz-json".to_string(),
            api_version: String::new(),
            endpoint_prefix: String::new(),
            signature_version: String::new(),
            wire_protocol: WireProtocol::Body,
        }
    }

    fn with_context<R>(f: impl FnOnce(&DelegateContext<'_>) -> R) -> R {
        let model = ServiceModel::default();
        let application = ApplicationDescription::new("Widget", "/tmp");
        let attributes = attributes();
        let http_config = HttpClientConfiguration::default();
        let config = GenerationConfig::default();
        let ctx = DelegateContext {
            model: &model,
            application: &application,
            attributes: &attributes,
            http_config: &http_config,
            config: &config,
        };
        f(&ctx)
    }

    fn operation(input: Option<&str>, output: Option<&str>) -> OperationDescription {
        OperationDescription {
            input: input.map(String::from),
            output: output.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn test_async_signature_with_input_and_output() {
        let description = operation(Some("GetWidgetRequest"), Some("GetWidgetResponse"));
        let view = OperationView {
            name: "GetWidget",
            description: &description,
        };

        with_context(|ctx| {
            assert_eq!(
                operation_signature(ctx, &view, InvocationKind::Async),
                "func getWidget(input: GetWidgetRequest) async throws -> GetWidgetResponse"
            );
        });
    }

    #[test]
    fn test_callback_signature_without_output() {
        let description = operation(Some("DeleteWidgetRequest"), None);
        let view = OperationView {
            name: "DeleteWidget",
            description: &description,
        };

        with_context(|ctx| {
            assert_eq!(
                operation_signature(ctx, &view, InvocationKind::Callback),
                "func deleteWidget(input: DeleteWidgetRequest, completion: @escaping (WidgetError?) -> Void) throws"
            );
        });
    }

    #[test]
    fn test_signature_without_input() {
        let description = operation(None, Some("ListWidgetsResponse"));
        let view = OperationView {
            name: "ListWidgets",
            description: &description,
        };

        with_context(|ctx| {
            assert_eq!(
                operation_signature(ctx, &view, InvocationKind::Async),
                "func listWidgets() async throws -> ListWidgetsResponse"
            );
            assert_eq!(
                operation_signature(ctx, &view, InvocationKind::Callback),
                "func listWidgets(completion: @escaping (Result<ListWidgetsResponse, WidgetError>) -> Void) throws"
            );
        });
    }

    #[test]
    fn test_function_type_alias_names() {
        assert_eq!(
            function_type_alias("GetWidget", InvocationKind::Callback),
            "GetWidgetCallbackType"
        );
        assert_eq!(
            override_member_name("GetWidget", InvocationKind::Async),
            "getWidgetAsyncOverride"
        );
    }
}
