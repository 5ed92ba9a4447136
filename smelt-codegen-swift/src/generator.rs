//! The top-level Swift generator.
//!
//! Declares every output file name up front — the explicit contract the
//! external build tooling tracks for incremental builds — and then renders
//! or writes exactly that set.

use eyre::Result;
use smelt_codegen::{
    ClientAttributes, ClientDelegate, ClientFileKind, DelegateContext, GenerateSummary,
    GenerationConfig, PreviewFile,
};
use smelt_core::GeneratedFile;
use smelt_model::{ApplicationDescription, HttpClientConfiguration, ServiceModel};

use crate::delegates::{
    ApiGatewayClientDelegate, ConcreteClientDelegate, MockClientDelegate, ProtocolDelegate,
    ThrowingClientDelegate,
};
use crate::files::{
    DelegateClientFile, InvocationsReportingFile, ModelDefaultInstancesFile, ModelErrorsFile,
    ModelOperationsFile, ModelStructuresFile, ModelTypesFile, OperationsClientInputFile,
    OperationsClientOutputFile, OperationsReportingFile,
};

/// Which concrete client variant a run generates alongside the protocol
/// and the test doubles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConcreteClientKind {
    /// Direct AWS service client.
    #[default]
    Aws,
    /// API Gateway passthrough client.
    ApiGateway,
}

impl ConcreteClientKind {
    /// File/type name prefix of the concrete client.
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Aws => "AWS",
            Self::ApiGateway => "APIGateway",
        }
    }

    fn delegate(self) -> Box<dyn ClientDelegate> {
        match self {
            Self::Aws => Box::new(ConcreteClientDelegate),
            Self::ApiGateway => Box::new(ApiGatewayClientDelegate),
        }
    }
}

/// Swift code generator for one (model, application) pair.
pub struct Generator<'a> {
    model: &'a ServiceModel,
    application: &'a ApplicationDescription,
    http_config: &'a HttpClientConfiguration,
    config: &'a GenerationConfig,
    attributes: ClientAttributes,
    client_kind: ConcreteClientKind,
    client_target_name: Option<String>,
}

impl<'a> Generator<'a> {
    pub fn new(
        model: &'a ServiceModel,
        application: &'a ApplicationDescription,
        http_config: &'a HttpClientConfiguration,
        config: &'a GenerationConfig,
    ) -> Self {
        let attributes = ClientAttributes::from_model(model, application);
        Self {
            model,
            application,
            http_config,
            config,
            attributes,
            client_kind: ConcreteClientKind::default(),
            client_target_name: None,
        }
    }

    pub fn with_client_kind(mut self, kind: ConcreteClientKind) -> Self {
        self.client_kind = kind;
        self
    }

    pub fn with_client_target_name(mut self, name: impl Into<String>) -> Self {
        self.client_target_name = Some(name.into());
        self
    }

    fn context(&self) -> DelegateContext<'_> {
        DelegateContext {
            model: self.model,
            application: self.application,
            attributes: &self.attributes,
            http_config: self.http_config,
            config: self.config,
        }
    }

    /// Directory (and module name) of the model package.
    pub fn model_target_dir(&self) -> String {
        self.config
            .model_target_name
            .clone()
            .unwrap_or_else(|| format!("{}Model", self.application.base_name))
    }

    /// Directory of the client package.
    pub fn client_target_dir(&self) -> String {
        self.client_target_name
            .clone()
            .unwrap_or_else(|| format!("{}Client", self.application.base_name))
    }

    /// Model package file names, declared before generation executes.
    pub fn model_file_names(&self) -> Vec<String> {
        let base = &self.application.base_name;
        vec![
            format!("{base}ModelErrors.swift"),
            format!("{base}ModelStructures.swift"),
            format!("{base}ModelDefaultInstances.swift"),
            format!("{base}ModelOperations.swift"),
            format!("{base}ModelTypes.swift"),
        ]
    }

    /// Client package file names, declared before generation executes.
    pub fn client_file_names(&self) -> Vec<String> {
        let base = &self.application.base_name;
        let prefix = self.client_kind.prefix();
        vec![
            format!("{prefix}{base}Client.swift"),
            format!("{base}ClientProtocol.swift"),
            format!("{base}OperationsClientOutput.swift"),
            format!("{prefix}{base}ClientConfiguration.swift"),
            format!("{prefix}{base}ClientGenerator.swift"),
            format!("{base}InvocationsReporting.swift"),
            format!("{base}OperationsReporting.swift"),
            format!("Mock{base}Client.swift"),
            format!("{base}OperationsClientInput.swift"),
            format!("Throwing{base}Client.swift"),
        ]
    }

    fn model_files(&self) -> Vec<Box<dyn GeneratedFile + '_>> {
        let ctx = self.context();
        let target_dir = self.model_target_dir();
        vec![
            Box::new(ModelErrorsFile {
                ctx,
                target_dir: target_dir.clone(),
            }),
            Box::new(ModelStructuresFile {
                ctx,
                target_dir: target_dir.clone(),
            }),
            Box::new(ModelDefaultInstancesFile {
                ctx,
                target_dir: target_dir.clone(),
            }),
            Box::new(ModelOperationsFile {
                ctx,
                target_dir: target_dir.clone(),
            }),
            Box::new(ModelTypesFile { ctx, target_dir }),
        ]
    }

    fn delegate_file(
        &self,
        file_name: String,
        delegate: Box<dyn ClientDelegate>,
        file_kind: ClientFileKind,
    ) -> Box<dyn GeneratedFile + '_> {
        Box::new(DelegateClientFile {
            ctx: self.context(),
            delegate,
            file_kind,
            file_name,
            target_dir: self.client_target_dir(),
        })
    }

    fn client_files(&self) -> Vec<Box<dyn GeneratedFile + '_>> {
        let ctx = self.context();
        let target_dir = self.client_target_dir();
        let names = self.client_file_names();

        vec![
            self.delegate_file(
                names[0].clone(),
                self.client_kind.delegate(),
                ClientFileKind::Implementation,
            ),
            self.delegate_file(
                names[1].clone(),
                Box::new(ProtocolDelegate),
                ClientFileKind::Implementation,
            ),
            Box::new(OperationsClientOutputFile {
                ctx,
                target_dir: target_dir.clone(),
            }),
            self.delegate_file(
                names[3].clone(),
                self.client_kind.delegate(),
                ClientFileKind::Configuration,
            ),
            self.delegate_file(
                names[4].clone(),
                self.client_kind.delegate(),
                ClientFileKind::Generator,
            ),
            Box::new(InvocationsReportingFile {
                ctx,
                target_dir: target_dir.clone(),
            }),
            Box::new(OperationsReportingFile {
                ctx,
                target_dir: target_dir.clone(),
            }),
            self.delegate_file(
                names[7].clone(),
                Box::new(MockClientDelegate),
                ClientFileKind::Implementation,
            ),
            Box::new(OperationsClientInputFile {
                ctx,
                target_dir,
            }),
            self.delegate_file(
                names[9].clone(),
                Box::new(ThrowingClientDelegate),
                ClientFileKind::Implementation,
            ),
        ]
    }

    /// Render the model package without writing to disk.
    pub fn preview_model(&self) -> Result<Vec<PreviewFile>> {
        preview(self.model_files())
    }

    /// Render the client package without writing to disk.
    pub fn preview_client(&self) -> Result<Vec<PreviewFile>> {
        preview(self.client_files())
    }

    /// Generate the model package under the application's output root.
    pub fn generate_model(&self) -> Result<GenerateSummary> {
        write(self.model_files(), self.application)
    }

    /// Generate the client package under the application's output root.
    pub fn generate_client(&self) -> Result<GenerateSummary> {
        write(self.client_files(), self.application)
    }
}

fn relative_path(file: &dyn GeneratedFile) -> String {
    file.path(std::path::Path::new("")).display().to_string()
}

fn preview(files: Vec<Box<dyn GeneratedFile + '_>>) -> Result<Vec<PreviewFile>> {
    files
        .iter()
        .map(|file| {
            Ok(PreviewFile {
                path: relative_path(file.as_ref()),
                content: file.render()?,
            })
        })
        .collect()
}

fn write(
    files: Vec<Box<dyn GeneratedFile + '_>>,
    application: &ApplicationDescription,
) -> Result<GenerateSummary> {
    let mut summary = GenerateSummary::default();
    for file in &files {
        let relative = relative_path(file.as_ref());
        match file.write(application.base_file_path())? {
            smelt_core::WriteResult::Written => summary.written.push(relative),
            smelt_core::WriteResult::Skipped => summary.skipped.push(relative),
        }
    }
    Ok(summary)
}
