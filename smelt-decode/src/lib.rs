//! Service-model document decoding for the smelt client generator.
//!
//! Two front ends produce the same unified [`smelt_model::ServiceModel`]:
//! the Coral/JSON front end implemented here, and an external
//! OpenAPI/Swagger front end that hands over an already-unified model.
//!
//! ```text
//! model.json / model.yaml → CoralDocument → shape decoder → ServiceModel
//! overrides.json          → ModelOverride
//! http-config.json        → HttpClientConfiguration
//! ```
//!
//! Decoding is strict: unrecognized shape types, dangling references, and
//! invalid member locations abort the run. A structurally incomplete model
//! would make later generators emit invalid output silently, so there is
//! no partial-model recovery.

mod coral;
mod document;
mod error;
mod shape;

pub use coral::build_service_model;
pub use document::{
    CoralDocument, HttpBinding, Metadata, RawErrorTrait, RawMember, RawOperation, RawShape,
    ShapeReference, load_http_client_configuration, load_model_override,
};
pub use error::{Error, Result, SourceContext};
pub use shape::{DecodedShape, MemberLocation, StructureAttributes, decode_shape};
