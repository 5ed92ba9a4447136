//! The unified service model.
//!
//! A [`ServiceModel`] is assembled once per generation run by a front end,
//! patched exactly once by the override layer, and then held immutable while
//! the generators walk it. All mappings are `BTreeMap`/`BTreeSet` so that
//! iteration order — and therefore generated output — is identical across
//! runs and platforms.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::{FieldConstraint, OperationDescription, StructureDescription};

/// The normalized representation of a service description.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServiceModel {
    /// Service name → service-level description.
    pub service_descriptions: BTreeMap<String, ServiceDescription>,
    /// Operation name → operation description.
    pub operation_descriptions: BTreeMap<String, OperationDescription>,
    /// Structure name → structure description.
    pub structure_descriptions: BTreeMap<String, StructureDescription>,
    /// Field name → declared constraint.
    pub field_descriptions: BTreeMap<String, FieldConstraint>,
    /// Every error type any operation can return, plus synthetic additions.
    pub error_types: BTreeSet<String>,
    /// Field name → raw-type substitution supplied by the override layer.
    pub type_mappings: BTreeMap<String, RawTypeMapping>,
    /// Error type → wire error code, where the source model declares one.
    pub error_code_mappings: BTreeMap<String, String>,
    /// Types whose generated enum cases use UpperCamelCase naming.
    pub upper_camel_enum_types: BTreeSet<String>,
}

impl ServiceModel {
    /// Operation names in sorted order — the only order generators may use.
    pub fn sorted_operation_names(&self) -> Vec<&str> {
        self.operation_descriptions.keys().map(String::as_str).collect()
    }

    /// Look up the wire error code for an error type, falling back to the
    /// type name itself when the model declares no explicit code.
    pub fn error_code<'a>(&'a self, error_type: &'a str) -> &'a str {
        self.error_code_mappings
            .get(error_type)
            .map(String::as_str)
            .unwrap_or(error_type)
    }

    /// Returns true if the named type is declared as a field (as opposed to
    /// a structure).
    pub fn is_field(&self, name: &str) -> bool {
        self.field_descriptions.contains_key(name)
    }
}

/// Service-level description: the operations a service exposes plus the
/// wire metadata shared by all of them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServiceDescription {
    /// Names of the operations this service exposes.
    pub operations: Vec<String>,
    /// API version string from the source model.
    pub api_version: String,
    /// Endpoint prefix (host component) for the service.
    pub endpoint_prefix: String,
    /// Request signature version.
    pub signature_version: String,
    /// Derived content type, e.g. `application/x-amz-json`.
    pub content_type: String,
}

/// A raw-type substitution for a named field: the replacement underlying
/// representation and the literal default value used when the field is
/// absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTypeMapping {
    /// The substituted type name in the target language.
    pub raw_type_name: String,
    /// Literal default value, emitted verbatim into default instances.
    pub default_value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_operation_names() {
        let mut model = ServiceModel::default();
        for name in ["PutWidget", "DeleteWidget", "GetWidget"] {
            model
                .operation_descriptions
                .insert(name.to_string(), OperationDescription::default());
        }

        assert_eq!(
            model.sorted_operation_names(),
            vec!["DeleteWidget", "GetWidget", "PutWidget"]
        );
    }

    #[test]
    fn test_error_code_fallback() {
        let mut model = ServiceModel::default();
        model
            .error_code_mappings
            .insert("NoSuchWidget".to_string(), "NoSuchWidget.NotFound".to_string());

        assert_eq!(model.error_code("NoSuchWidget"), "NoSuchWidget.NotFound");
        assert_eq!(model.error_code("Throttling"), "Throttling");
    }
}
