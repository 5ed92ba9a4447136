//! Operation descriptions and their HTTP request/response bindings.

use serde::{Deserialize, Serialize};

/// A named service action: optional input/output structures, an optional
/// HTTP binding, and the errors it can return.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OperationDescription {
    /// Input structure name, absent when the operation takes no body.
    pub input: Option<String>,
    /// Output structure name, absent when the operation returns nothing.
    pub output: Option<String>,
    /// HTTP verb, absent for non-HTTP-bound source formats.
    pub http_verb: Option<String>,
    /// URL template, absent for non-HTTP-bound source formats.
    pub http_url: Option<String>,
    /// Errors in declaration order, paired with their HTTP status.
    pub errors: Vec<ErrorBinding>,
    /// Which input members bind to path/query/header/body.
    pub input_description: OperationInputDescription,
    /// Which output members bind to headers vs the body.
    pub output_description: OperationOutputDescription,
    /// Documentation from the source model.
    pub documentation: Option<String>,
}

/// An error an operation can return, with the HTTP status it maps to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBinding {
    pub type_name: String,
    pub http_status: u16,
}

/// Where an operation's unbound input members are placed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DefaultInputLocation {
    /// Members without an explicit location serialize into the request body.
    #[default]
    Body,
    /// Members without an explicit location serialize into the query string.
    Query,
}

/// Request-side member bindings for one operation.
///
/// Invariant (enforced by the front end): a member bound to path, query, or
/// header never also appears as the raw body payload, and at most one member
/// is the payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OperationInputDescription {
    /// Members interpolated into the URL path.
    pub path_fields: Vec<String>,
    /// Members serialized into the query string.
    pub query_fields: Vec<String>,
    /// Members carried as request headers.
    pub header_fields: Vec<String>,
    /// Members serialized into the request body.
    pub body_fields: Vec<String>,
    /// Placement for members with no explicit location.
    pub default_input_location: DefaultInputLocation,
    /// URL template the path fields interpolate into.
    pub path_template: Option<String>,
    /// The single member carried verbatim as the request body, if any.
    pub payload_member: Option<String>,
}

/// Response-side member bindings for one operation. Only header locations
/// are valid on outputs; everything else decodes from the body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OperationOutputDescription {
    /// Members decoded from the response body.
    pub body_fields: Vec<String>,
    /// Members read from response headers.
    pub header_fields: Vec<String>,
    /// The single member carrying the raw response body, if any.
    pub payload_member: Option<String>,
}
