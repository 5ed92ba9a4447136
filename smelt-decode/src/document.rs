//! Raw document types and loading.
//!
//! These mirror the Coral/JSON shape grammar as written in model documents.
//! `IndexMap` preserves document order for diagnostics; the decoder imposes
//! its own sorted order before anything reaches the unified model.

use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;
use smelt_model::{HttpClientConfiguration, ModelOverride};

use crate::{Error, Result, SourceContext};

/// A parsed Coral/JSON model document: `metadata`, `operations`, `shapes`.
#[derive(Debug, Clone, Deserialize)]
pub struct CoralDocument {
    pub metadata: Metadata,
    #[serde(default)]
    pub operations: IndexMap<String, RawOperation>,
    #[serde(default)]
    pub shapes: IndexMap<String, RawShape>,
}

impl CoralDocument {
    /// Load a model document, selecting JSON or YAML by file extension.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        if is_yaml(path) {
            Self::from_yaml_str(&content, &filename)
        } else {
            Self::from_json_str(&content, &filename)
        }
    }

    pub fn from_json_str(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        serde_json::from_str(content).map_err(|e| ctx.json_parse_error(&e))
    }

    pub fn from_yaml_str(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        serde_yaml::from_str(content).map_err(|e| ctx.yaml_parse_error(&e))
    }
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    )
}

/// Service-wide metadata.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub protocol_name: String,
    #[serde(default)]
    pub endpoint_prefix: String,
    #[serde(default)]
    pub api_version: String,
    #[serde(default)]
    pub signature_version: String,
    #[serde(default)]
    pub service_name: Option<String>,
}

/// One operation as declared in the document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawOperation {
    #[serde(default)]
    pub http: Option<HttpBinding>,
    #[serde(default)]
    pub input: Option<ShapeReference>,
    #[serde(default)]
    pub output: Option<ShapeReference>,
    #[serde(default)]
    pub errors: Vec<ShapeReference>,
    #[serde(default)]
    pub documentation: Option<String>,
}

/// HTTP verb + URL template binding.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpBinding {
    pub method: String,
    pub request_uri: String,
}

/// A reference to a declared shape, optionally carrying the result-wrapper
/// tag some wire protocols impose on outputs.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeReference {
    pub shape: String,
    #[serde(default)]
    pub result_wrapper: Option<String>,
}

/// One shape record: a type tag plus tag-specific optional fields.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawShape {
    #[serde(rename = "type")]
    pub shape_type: String,
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
    #[serde(default)]
    pub pattern: Option<String>,
    #[serde(rename = "enum", default)]
    pub enum_values: Vec<String>,
    #[serde(default)]
    pub members: IndexMap<String, RawMember>,
    #[serde(default)]
    pub required: Vec<String>,
    #[serde(default)]
    pub key: Option<ShapeReference>,
    #[serde(default)]
    pub value: Option<ShapeReference>,
    #[serde(default)]
    pub member: Option<ShapeReference>,
    #[serde(default)]
    pub payload: Option<String>,
    #[serde(default)]
    pub error: Option<RawErrorTrait>,
    #[serde(default)]
    pub exception: bool,
    #[serde(default)]
    pub documentation: Option<String>,
}

/// One structure member as declared in the document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMember {
    pub shape: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub location_name: Option<String>,
    #[serde(default)]
    pub deprecated: bool,
    #[serde(default)]
    pub documentation: Option<String>,
}

/// Error-shape attributes: wire code and HTTP status.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawErrorTrait {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub http_status_code: Option<u16>,
}

/// Load a JSON override document. Absent fields mean "no override for
/// this aspect".
pub fn load_model_override(path: impl AsRef<Path>) -> Result<ModelOverride> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        Box::new(Error::Io {
            path: path.to_path_buf(),
            source: e,
        })
    })?;
    let ctx = SourceContext::new(&content, path.display().to_string());
    serde_json::from_str(&content).map_err(|e| ctx.json_parse_error(&e))
}

/// Load a JSON HTTP client configuration document.
pub fn load_http_client_configuration(path: impl AsRef<Path>) -> Result<HttpClientConfiguration> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        Box::new(Error::Io {
            path: path.to_path_buf(),
            source: e,
        })
    })?;
    let ctx = SourceContext::new(&content, path.display().to_string());
    serde_json::from_str(&content).map_err(|e| ctx.json_parse_error(&e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_document() {
        let doc = CoralDocument::from_json_str(
            r#"{
                "metadata": {"protocolName": "json"},
                "operations": {},
                "shapes": {}
            }"#,
            "model.json",
        )
        .unwrap();

        assert_eq!(doc.metadata.protocol_name, "json");
        assert!(doc.operations.is_empty());
    }

    #[test]
    fn test_parse_yaml_document() {
        let doc = CoralDocument::from_yaml_str(
            r#"
metadata:
  protocolName: query
  endpointPrefix: widget
operations:
  GetWidget:
    http:
      method: GET
      requestUri: /widget
shapes: {}
"#,
            "model.yaml",
        )
        .unwrap();

        assert_eq!(doc.metadata.protocol_name, "query");
        assert_eq!(doc.operations["GetWidget"].http.as_ref().unwrap().method, "GET");
    }

    #[test]
    fn test_parse_error_is_fatal() {
        let err = CoralDocument::from_json_str("{not json", "model.json").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }
}
