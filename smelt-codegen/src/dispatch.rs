//! Delegate dispatch: drives one delegate over the model to produce one
//! file's content.
//!
//! Operations are always processed in sorted-name order, and every
//! (delegate, file-kind, invocation-kind, operation) tuple produces exactly
//! one emitted function body. That discipline — not the delegates — is what
//! makes generation deterministic.

use eyre::Result;

use crate::{ClientDelegate, ClientFileKind, CodeBuilder, DelegateContext, OperationView};

/// Drives delegates over an immutable model.
pub struct DelegateDispatch<'a> {
    context: DelegateContext<'a>,
}

impl<'a> DelegateDispatch<'a> {
    pub fn new(context: DelegateContext<'a>) -> Self {
        Self { context }
    }

    pub fn context(&self) -> &DelegateContext<'a> {
        &self.context
    }

    /// Build the content of one client-package file through a delegate.
    pub fn build_file(
        &self,
        delegate: &dyn ClientDelegate,
        file_kind: ClientFileKind,
    ) -> Result<String> {
        let ctx = &self.context;
        let mut builder = CodeBuilder::swift();

        builder.line(smelt_core::GENERATED_HEADER);
        builder.blank();
        if let Some(header) = &ctx.config.custom_file_header {
            for line in header.lines() {
                builder.line(line);
            }
            builder.blank();
        }
        delegate.custom_file_header(ctx, &mut builder, file_kind);
        builder.blank();

        for line in delegate.type_description(ctx, file_kind) {
            builder.doc(&line);
        }
        let declaration = delegate.client_type(ctx, file_kind);
        builder.line(&declaration.open_line());
        builder.indent();

        delegate.common_functions(ctx, &mut builder, file_kind);

        if file_kind.emits_operation_bodies() {
            for name in ctx.model.sorted_operation_names() {
                let operation = OperationView {
                    name,
                    description: &ctx.model.operation_descriptions[name],
                };
                for invocation in &ctx.config.invocation_kinds {
                    delegate.operation_body(ctx, &mut builder, &operation, *invocation)?;
                }
            }
        }

        builder.dedent();
        builder.line("}");
        builder.finish()
    }
}

#[cfg(test)]
mod tests {
    use smelt_model::{
        ApplicationDescription, HttpClientConfiguration, OperationDescription, ServiceModel,
    };

    use super::*;
    use crate::{
        ClientAttributes, ClientTypeDeclaration, GenerationConfig, InvocationKind,
        TypeDeclarationKind,
    };

    struct RecordingDelegate;

    impl ClientDelegate for RecordingDelegate {
        fn client_type(
            &self,
            _ctx: &DelegateContext<'_>,
            _file_kind: ClientFileKind,
        ) -> ClientTypeDeclaration {
            ClientTypeDeclaration::new(TypeDeclarationKind::Struct, "TestClient")
        }

        fn type_description(
            &self,
            _ctx: &DelegateContext<'_>,
            _file_kind: ClientFileKind,
        ) -> Vec<String> {
            vec!["Test client.".to_string()]
        }

        fn custom_file_header(
            &self,
            _ctx: &DelegateContext<'_>,
            builder: &mut CodeBuilder,
            _file_kind: ClientFileKind,
        ) {
            builder.line("import Foundation");
        }

        fn common_functions(
            &self,
            _ctx: &DelegateContext<'_>,
            builder: &mut CodeBuilder,
            _file_kind: ClientFileKind,
        ) {
            builder.line("let marker = true");
        }

        fn operation_body(
            &self,
            _ctx: &DelegateContext<'_>,
            builder: &mut CodeBuilder,
            operation: &OperationView<'_>,
            invocation: InvocationKind,
        ) -> Result<()> {
            builder.line(&format!("// body {} {:?}", operation.name, invocation));
            Ok(())
        }
    }

    fn model_with_operations(names: &[&str]) -> ServiceModel {
        let mut model = ServiceModel::default();
        for name in names {
            model
                .operation_descriptions
                .insert(name.to_string(), OperationDescription::default());
        }
        model
    }

    #[test]
    fn test_bodies_in_sorted_order_once_per_tuple() {
        let model = model_with_operations(&["PutWidget", "GetWidget"]);
        let application = ApplicationDescription::new("Widget", "/tmp");
        let attributes = ClientAttributes::from_model(&model, &application);
        let http_config = HttpClientConfiguration::default();
        let config = GenerationConfig::default();

        let dispatch = DelegateDispatch::new(DelegateContext {
            model: &model,
            application: &application,
            attributes: &attributes,
            http_config: &http_config,
            config: &config,
        });

        let content = dispatch
            .build_file(&RecordingDelegate, ClientFileKind::Implementation)
            .unwrap();

        let bodies: Vec<&str> = content
            .lines()
            .filter(|l| l.trim_start().starts_with("// body"))
            .map(str::trim_start)
            .collect();
        assert_eq!(
            bodies,
            vec![
                "// body GetWidget Callback",
                "// body GetWidget Async",
                "// body PutWidget Callback",
                "// body PutWidget Async",
            ]
        );

        assert!(content.starts_with(smelt_core::GENERATED_HEADER));
        assert!(content.contains("import Foundation"));
        assert!(content.contains("/// Test client."));
        assert!(content.contains("public struct TestClient {"));
        assert!(content.ends_with("}\n"));
    }

    #[test]
    fn test_configuration_file_has_no_bodies() {
        let model = model_with_operations(&["GetWidget"]);
        let application = ApplicationDescription::new("Widget", "/tmp");
        let attributes = ClientAttributes::from_model(&model, &application);
        let http_config = HttpClientConfiguration::default();
        let config = GenerationConfig::default();

        let dispatch = DelegateDispatch::new(DelegateContext {
            model: &model,
            application: &application,
            attributes: &attributes,
            http_config: &http_config,
            config: &config,
        });

        let content = dispatch
            .build_file(&RecordingDelegate, ClientFileKind::Configuration)
            .unwrap();
        assert!(!content.contains("// body"));
        assert!(content.contains("let marker = true"));
    }

    #[test]
    fn test_identical_runs_are_byte_identical() {
        let model = model_with_operations(&["A", "C", "B"]);
        let application = ApplicationDescription::new("Widget", "/tmp");
        let attributes = ClientAttributes::from_model(&model, &application);
        let http_config = HttpClientConfiguration::default();
        let config = GenerationConfig::default();

        let dispatch = DelegateDispatch::new(DelegateContext {
            model: &model,
            application: &application,
            attributes: &attributes,
            http_config: &http_config,
            config: &config,
        });

        let first = dispatch
            .build_file(&RecordingDelegate, ClientFileKind::Implementation)
            .unwrap();
        let second = dispatch
            .build_file(&RecordingDelegate, ClientFileKind::Implementation)
            .unwrap();
        assert_eq!(first, second);
    }
}
