//! Unified service model types for the smelt client generator.
//!
//! This crate provides the normalized in-memory representation that every
//! front end produces and every generator consumes. The types serve as the
//! single source of truth for a generation run.
//!
//! # Architecture
//!
//! ```text
//! model document (JSON/YAML) → smelt-decode (front end) → smelt-model (unified types)
//!     → overrides (patched copy) → smelt-codegen / smelt-codegen-swift
//! ```
//!
//! The model types are designed to be:
//! - Format-agnostic (Coral/JSON and OpenAPI front ends produce the same shape)
//! - Deterministic (sorted mappings, stable member positions)
//! - Immutable after the override pass (generators only ever read them)

mod application;
mod constraint;
mod http_config;
mod model;
mod operation;
pub mod overrides;
mod structure;

pub use application::ApplicationDescription;
pub use constraint::{FieldConstraint, LengthRange, NumericRange};
pub use http_config::{AdditionalHttpClient, DEFAULT_HTTP_CLIENT_HANDLE, HttpClientConfiguration};
pub use model::{RawTypeMapping, ServiceDescription, ServiceModel};
pub use operation::{
    DefaultInputLocation, ErrorBinding, OperationDescription, OperationInputDescription,
    OperationOutputDescription,
};
pub use overrides::{ModelOverride, OverrideError};
pub use structure::{Member, StructureDescription};
