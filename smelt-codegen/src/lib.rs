//! Language-agnostic code generation core for the smelt client generator.
//!
//! This crate provides the pieces every concrete backend builds on:
//!
//! - [`builder`] - the indent-tracked line buffer generated code is written
//!   through
//! - [`ClientDelegate`] - the five-capability contract a client emitter
//!   satisfies
//! - [`DelegateDispatch`] - drives a delegate over the model's operations
//!   in a deterministic order
//! - [`ClientAttributes`] / [`GenerationConfig`] - per-run context threaded
//!   explicitly through every stage

pub mod builder;

mod attributes;
mod config;
mod delegate;
mod dispatch;

pub use attributes::{ClientAttributes, WireProtocol};
pub use builder::{CodeBuilder, Indent};
pub use config::GenerationConfig;
pub use delegate::{
    ClientDelegate, ClientFileKind, ClientTypeDeclaration, DelegateContext, InvocationKind,
    OperationView, TypeDeclarationKind,
};
pub use dispatch::DelegateDispatch;

/// A generated file that has been rendered but not written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    pub path: String,
    pub content: String,
}

/// Summary of one generation run, reported by the CLI.
#[derive(Debug, Clone, Default)]
pub struct GenerateSummary {
    /// Files written this run, relative to the output root.
    pub written: Vec<String>,
    /// Files skipped because they already exist.
    pub skipped: Vec<String>,
}
