//! The client delegate contract.
//!
//! A delegate is a strategy object responsible for emitting one category of
//! client source file. Every variant (protocol-only, concrete, passthrough,
//! mock, throwing) satisfies the same five-capability contract; they differ
//! only in how they fill operation bodies. Selection happens at dispatch
//! time by configuration, never by runtime type inspection.

use eyre::Result;
use smelt_model::{
    ApplicationDescription, HttpClientConfiguration, OperationDescription, ServiceModel,
};

use crate::{ClientAttributes, CodeBuilder, GenerationConfig};

/// Which client-package file a delegate is currently emitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientFileKind {
    /// The client implementation itself.
    Implementation,
    /// The configuration object clients are constructed from.
    Configuration,
    /// The generator that stamps out clients per invocation context.
    Generator,
}

impl ClientFileKind {
    /// Only the implementation file carries per-operation function bodies;
    /// configuration and generator files are scaffolding derived from the
    /// client attributes.
    pub fn emits_operation_bodies(self) -> bool {
        matches!(self, Self::Implementation)
    }
}

/// Invocation style of an emitted operation function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvocationKind {
    /// Completion-handler style: `func getWidget(input:completion:)`.
    Callback,
    /// async/await style: `func getWidget(input:) async throws`.
    Async,
}

/// Keyword used to open a generated type declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeDeclarationKind {
    Protocol,
    Struct,
}

impl TypeDeclarationKind {
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Protocol => "protocol",
            Self::Struct => "struct",
        }
    }
}

/// The declaration a delegate's emitted type opens with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientTypeDeclaration {
    pub kind: TypeDeclarationKind,
    pub name: String,
    pub conformances: Vec<String>,
}

impl ClientTypeDeclaration {
    pub fn new(kind: TypeDeclarationKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            conformances: Vec::new(),
        }
    }

    pub fn conforming_to(mut self, conformance: impl Into<String>) -> Self {
        self.conformances.push(conformance.into());
        self
    }

    /// Render the opening line, e.g. `public struct MockWidgetClient: WidgetClientProtocol {`.
    pub fn open_line(&self) -> String {
        let conformances = if self.conformances.is_empty() {
            String::new()
        } else {
            format!(": {}", self.conformances.join(", "))
        };
        format!("public {} {}{} {{", self.kind.keyword(), self.name, conformances)
    }
}

/// Everything a delegate may read while emitting. The model is immutable
/// here: overrides have already been applied, and no delegate mutates it.
#[derive(Clone, Copy)]
pub struct DelegateContext<'a> {
    pub model: &'a ServiceModel,
    pub application: &'a ApplicationDescription,
    pub attributes: &'a ClientAttributes,
    pub http_config: &'a HttpClientConfiguration,
    pub config: &'a GenerationConfig,
}

/// One operation as seen by a delegate: the sorted-order name plus its
/// description in the model.
#[derive(Clone, Copy)]
pub struct OperationView<'a> {
    pub name: &'a str,
    pub description: &'a OperationDescription,
}

/// The fixed capability set every client emitter satisfies.
pub trait ClientDelegate {
    /// File kinds this delegate emits. Most delegates only produce the
    /// implementation file; the concrete client also produces its
    /// configuration object and generator.
    fn file_kinds(&self) -> Vec<ClientFileKind> {
        vec![ClientFileKind::Implementation]
    }

    /// The type declaration the emitted file opens with.
    fn client_type(&self, ctx: &DelegateContext<'_>, file_kind: ClientFileKind)
    -> ClientTypeDeclaration;

    /// Documentation comment for the emitted type, one line per string.
    fn type_description(&self, ctx: &DelegateContext<'_>, file_kind: ClientFileKind)
    -> Vec<String>;

    /// Imports and other file-header lines specific to this delegate.
    fn custom_file_header(
        &self,
        ctx: &DelegateContext<'_>,
        builder: &mut CodeBuilder,
        file_kind: ClientFileKind,
    );

    /// Stored properties, initializers, and helpers shared by all of the
    /// emitted type's operations.
    fn common_functions(
        &self,
        ctx: &DelegateContext<'_>,
        builder: &mut CodeBuilder,
        file_kind: ClientFileKind,
    );

    /// Emit exactly one operation function for the given invocation style.
    ///
    /// # Errors
    ///
    /// Fails when the operation lacks something this delegate requires,
    /// e.g. an HTTP verb for a request-emitting delegate. A missing output
    /// structure is not an error — absence of output is a legitimate state.
    fn operation_body(
        &self,
        ctx: &DelegateContext<'_>,
        builder: &mut CodeBuilder,
        operation: &OperationView<'_>,
        invocation: InvocationKind,
    ) -> Result<()>;
}
