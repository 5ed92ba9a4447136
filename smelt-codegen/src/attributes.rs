//! Client attributes: the model-derived wire metadata every client
//! delegate reads.

use smelt_model::{ApplicationDescription, ServiceModel};

/// Wire style the concrete client speaks, chosen by content type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireProtocol {
    /// Inputs serialize into the request body (JSON-family protocols).
    Body,
    /// Inputs serialize into the query string (query/ec2-family protocols).
    Query,
}

/// Computed attributes shared by every client delegate for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientAttributes {
    pub base_name: String,
    pub content_type: String,
    pub api_version: String,
    pub endpoint_prefix: String,
    pub signature_version: String,
    pub wire_protocol: WireProtocol,
}

impl ClientAttributes {
    /// Derive attributes from the model's service description.
    pub fn from_model(model: &ServiceModel, application: &ApplicationDescription) -> Self {
        let service = model.service_descriptions.values().next();
        let content_type = service
            .map(|s| s.content_type.clone())
            .unwrap_or_else(|| "application/json".to_string());
        let wire_protocol = if content_type.contains("query") || content_type.contains("ec2") {
            WireProtocol::Query
        } else {
            WireProtocol::Body
        };

        Self {
            base_name: application.base_name.clone(),
            content_type,
            api_version: service.map(|s| s.api_version.clone()).unwrap_or_default(),
            endpoint_prefix: service
                .map(|s| s.endpoint_prefix.clone())
                .unwrap_or_default(),
            signature_version: service
                .map(|s| s.signature_version.clone())
                .unwrap_or_default(),
            wire_protocol,
        }
    }

    /// Name of the generated model error enum, e.g. `WidgetError`.
    pub fn error_type(&self) -> String {
        format!("{}Error", self.base_name)
    }

    /// Name of the generated operations enum, e.g. `WidgetModelOperations`.
    pub fn operations_enum(&self) -> String {
        format!("{}ModelOperations", self.base_name)
    }
}
