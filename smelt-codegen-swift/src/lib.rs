//! Swift client code generator.
//!
//! The fixed backend of the smelt pipeline: given a unified (and already
//! override-patched) [`smelt_model::ServiceModel`], emits the model package
//! and client package source files for a Swift client library.

mod generator;
mod naming;
mod operations;
mod type_mapper;

pub mod delegates;
pub mod files;

pub use generator::{ConcreteClientKind, Generator};
pub use naming::{enum_case_name, escape_swift_reserved, swift_member_name, swift_type_name};
pub use operations::{function_name, operation_signature};
pub use smelt_codegen::{GenerateSummary, PreviewFile};
pub use type_mapper::SwiftTypeMapper;
