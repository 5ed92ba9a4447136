//! The declarative override layer.
//!
//! A [`ModelOverride`] is a patch set applied exactly once, after the front
//! end builds the unified model and before any generator runs. Application
//! is a pure transform producing a new model value: validate first, then
//! apply, so a failing override never leaves a partially patched model.
//!
//! Unknown targets are ignored by default, which keeps override files
//! forward-compatible across model versions. Setting `"strict": true` in
//! the override document turns unknown targets into errors instead.

use std::collections::{BTreeMap, BTreeSet};

use serde::Deserialize;
use thiserror::Error;

use crate::{FieldConstraint, OperationInputDescription, RawTypeMapping, ServiceModel};

/// A declarative patch over the unified model and generation behavior.
///
/// Every field is optional; an absent field leaves the corresponding aspect
/// of the model untouched, so the empty override is the identity transform.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModelOverride {
    /// Fail on overrides that target entities missing from the model.
    pub strict: bool,
    /// Field renames, applied before every other section.
    pub field_renames: BTreeMap<String, String>,
    /// Raw-type substitutions with their literal default values.
    pub raw_types: BTreeMap<String, RawTypeMapping>,
    /// Synthetic error names the wire can emit but the model omits.
    pub additional_errors: BTreeSet<String>,
    /// Types whose enum cases generate as UpperCamelCase.
    pub upper_camel_case_enums: BTreeSet<String>,
    /// Structure → member → alternate wire key.
    pub coding_keys: BTreeMap<String, BTreeMap<String, String>>,
    /// Wholesale replacement of an operation's input binding description.
    pub operation_inputs: BTreeMap<String, OperationInputDescription>,
    /// `Structure.member` → forced requiredness.
    pub required_overrides: BTreeMap<String, bool>,
}

impl ModelOverride {
    /// Returns true if applying this override is the identity transform.
    pub fn is_empty(&self) -> bool {
        self.field_renames.is_empty()
            && self.raw_types.is_empty()
            && self.additional_errors.is_empty()
            && self.upper_camel_case_enums.is_empty()
            && self.coding_keys.is_empty()
            && self.operation_inputs.is_empty()
            && self.required_overrides.is_empty()
    }
}

/// Errors from override validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OverrideError {
    /// Strict mode only: an override names an entity the model lacks.
    #[error("override targets unknown {kind} '{name}'")]
    UnknownTarget { kind: &'static str, name: String },

    /// A required-override key is not of the form `Structure.member`.
    /// This is a malformed document, reported in lenient mode too.
    #[error("invalid required-override key '{key}', expected 'Structure.member'")]
    InvalidRequiredKey { key: String },
}

/// Apply an override to a model, producing a new model value.
///
/// The input model is left untouched. In strict mode every target is
/// validated before anything is applied.
pub fn apply(model: &ServiceModel, overrides: &ModelOverride) -> Result<ServiceModel, OverrideError> {
    validate(model, overrides)?;

    let mut patched = model.clone();

    apply_field_renames(&mut patched, &overrides.field_renames);

    for (field, mapping) in &overrides.raw_types {
        patched.type_mappings.insert(field.clone(), mapping.clone());
    }

    patched.error_types.extend(overrides.additional_errors.iter().cloned());
    patched
        .upper_camel_enum_types
        .extend(overrides.upper_camel_case_enums.iter().cloned());

    for (structure_name, keys) in &overrides.coding_keys {
        let Some(structure) = patched.structure_descriptions.get_mut(structure_name) else {
            continue;
        };
        for (member_name, wire_key) in keys {
            if let Some(member) = structure.members.get_mut(member_name) {
                member.location_name = Some(wire_key.clone());
            }
        }
    }

    for (operation_name, input_description) in &overrides.operation_inputs {
        if let Some(operation) = patched.operation_descriptions.get_mut(operation_name) {
            operation.input_description = input_description.clone();
        }
    }

    for (key, required) in &overrides.required_overrides {
        let (structure_name, member_name) = split_required_key(key)?;
        let Some(structure) = patched.structure_descriptions.get_mut(structure_name) else {
            continue;
        };
        if let Some(member) = structure.members.get_mut(member_name) {
            member.required = *required;
        }
    }

    Ok(patched)
}

fn split_required_key(key: &str) -> Result<(&str, &str), OverrideError> {
    key.split_once('.')
        .filter(|(structure, member)| !structure.is_empty() && !member.is_empty())
        .ok_or_else(|| OverrideError::InvalidRequiredKey { key: key.to_string() })
}

/// Strict-mode target validation. Runs before anything is applied so the
/// transform is total: either every section applies or none does.
fn validate(model: &ServiceModel, overrides: &ModelOverride) -> Result<(), OverrideError> {
    // Key shape is checked in both modes.
    for key in overrides.required_overrides.keys() {
        split_required_key(key)?;
    }

    if !overrides.strict {
        return Ok(());
    }

    // Sections after renames address post-rename names.
    let mut field_names: BTreeSet<&str> =
        model.field_descriptions.keys().map(String::as_str).collect();
    for (old, new) in &overrides.field_renames {
        if !field_names.remove(old.as_str()) {
            return Err(OverrideError::UnknownTarget {
                kind: "field",
                name: old.clone(),
            });
        }
        field_names.insert(new.as_str());
    }

    for field in overrides.raw_types.keys() {
        if !field_names.contains(field.as_str()) {
            return Err(OverrideError::UnknownTarget {
                kind: "field",
                name: field.clone(),
            });
        }
    }

    for name in &overrides.upper_camel_case_enums {
        if !field_names.contains(name.as_str()) {
            return Err(OverrideError::UnknownTarget {
                kind: "enum type",
                name: name.clone(),
            });
        }
    }

    for (structure_name, keys) in &overrides.coding_keys {
        let Some(structure) = model.structure_descriptions.get(structure_name) else {
            return Err(OverrideError::UnknownTarget {
                kind: "structure",
                name: structure_name.clone(),
            });
        };
        for member_name in keys.keys() {
            if !structure.members.contains_key(member_name) {
                return Err(OverrideError::UnknownTarget {
                    kind: "member",
                    name: format!("{structure_name}.{member_name}"),
                });
            }
        }
    }

    for operation_name in overrides.operation_inputs.keys() {
        if !model.operation_descriptions.contains_key(operation_name) {
            return Err(OverrideError::UnknownTarget {
                kind: "operation",
                name: operation_name.clone(),
            });
        }
    }

    for key in overrides.required_overrides.keys() {
        let (structure_name, member_name) = split_required_key(key)?;
        let member = model
            .structure_descriptions
            .get(structure_name)
            .and_then(|s| s.members.get(member_name));
        if member.is_none() {
            return Err(OverrideError::UnknownTarget {
                kind: "member",
                name: key.clone(),
            });
        }
    }

    Ok(())
}

/// Rename fields and rewrite every reference to them: structure members,
/// list elements, map keys/values, raw-type mappings, and the enum-naming
/// set. Structure names are not fields and are never touched here.
fn apply_field_renames(model: &mut ServiceModel, renames: &BTreeMap<String, String>) {
    if renames.is_empty() {
        return;
    }

    let renamed = |name: &str| -> Option<String> { renames.get(name).cloned() };

    let fields = std::mem::take(&mut model.field_descriptions);
    for (name, constraint) in fields {
        let name = renamed(&name).unwrap_or(name);
        let constraint = match constraint {
            FieldConstraint::List { element, length } => FieldConstraint::List {
                element: renamed(&element).unwrap_or(element),
                length,
            },
            FieldConstraint::Map { key, value, length } => FieldConstraint::Map {
                key: renamed(&key).unwrap_or(key),
                value: renamed(&value).unwrap_or(value),
                length,
            },
            other => other,
        };
        model.field_descriptions.insert(name, constraint);
    }

    for structure in model.structure_descriptions.values_mut() {
        for member in structure.members.values_mut() {
            if let Some(new) = renamed(&member.field_name) {
                member.field_name = new;
            }
        }
    }

    let mappings = std::mem::take(&mut model.type_mappings);
    for (name, mapping) in mappings {
        let name = renamed(&name).unwrap_or(name);
        model.type_mappings.insert(name, mapping);
    }

    let enums = std::mem::take(&mut model.upper_camel_enum_types);
    for name in enums {
        let name = renamed(&name).unwrap_or(name);
        model.upper_camel_enum_types.insert(name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LengthRange, Member, NumericRange, StructureDescription};

    fn sample_model() -> ServiceModel {
        let mut model = ServiceModel::default();
        model.field_descriptions.insert(
            "WidgetId".to_string(),
            FieldConstraint::String {
                pattern: None,
                length: LengthRange { min: Some(1), max: Some(128) },
                values: vec![],
            },
        );
        model.field_descriptions.insert(
            "WidgetCount".to_string(),
            FieldConstraint::Integer { range: NumericRange::default() },
        );
        model.field_descriptions.insert(
            "WidgetIdList".to_string(),
            FieldConstraint::List {
                element: "WidgetId".to_string(),
                length: LengthRange::default(),
            },
        );

        let mut structure = StructureDescription::default();
        structure.members.insert(
            "id".to_string(),
            Member {
                field_name: "WidgetId".to_string(),
                position: 0,
                required: false,
                location_name: None,
                documentation: None,
            },
        );
        model
            .structure_descriptions
            .insert("GetWidgetRequest".to_string(), structure);

        model
            .operation_descriptions
            .insert("GetWidget".to_string(), Default::default());

        model
    }

    #[test]
    fn test_empty_override_is_identity() {
        let model = sample_model();
        let overrides = ModelOverride::default();
        assert!(overrides.is_empty());

        let patched = apply(&model, &overrides).unwrap();
        assert_eq!(patched, model);
    }

    #[test]
    fn test_field_rename_rewrites_references() {
        let model = sample_model();
        let mut overrides = ModelOverride::default();
        overrides
            .field_renames
            .insert("WidgetId".to_string(), "WidgetIdentifier".to_string());

        let patched = apply(&model, &overrides).unwrap();

        assert!(!patched.field_descriptions.contains_key("WidgetId"));
        assert!(patched.field_descriptions.contains_key("WidgetIdentifier"));

        let member = &patched.structure_descriptions["GetWidgetRequest"].members["id"];
        assert_eq!(member.field_name, "WidgetIdentifier");

        match &patched.field_descriptions["WidgetIdList"] {
            FieldConstraint::List { element, .. } => assert_eq!(element, "WidgetIdentifier"),
            other => panic!("expected list constraint, got {other:?}"),
        }
    }

    #[test]
    fn test_additional_errors_have_no_code_mapping() {
        let model = sample_model();
        let mut overrides = ModelOverride::default();
        overrides.additional_errors.insert("ThrottlingException".to_string());

        let patched = apply(&model, &overrides).unwrap();

        assert!(patched.error_types.contains("ThrottlingException"));
        assert!(!patched.error_code_mappings.contains_key("ThrottlingException"));
    }

    #[test]
    fn test_lenient_unknown_targets_are_ignored() {
        let model = sample_model();
        let mut overrides = ModelOverride::default();
        overrides
            .coding_keys
            .insert("NoSuchStructure".to_string(), BTreeMap::new());
        overrides
            .operation_inputs
            .insert("NoSuchOperation".to_string(), Default::default());
        overrides
            .required_overrides
            .insert("NoSuchStructure.member".to_string(), true);

        let patched = apply(&model, &overrides).unwrap();
        assert_eq!(patched, model);
    }

    #[test]
    fn test_strict_unknown_target_fails() {
        let model = sample_model();
        let mut overrides = ModelOverride {
            strict: true,
            ..Default::default()
        };
        overrides.raw_types.insert(
            "NoSuchField".to_string(),
            RawTypeMapping {
                raw_type_name: "String".to_string(),
                default_value: "\"\"".to_string(),
            },
        );

        let err = apply(&model, &overrides).unwrap_err();
        assert_eq!(
            err,
            OverrideError::UnknownTarget {
                kind: "field",
                name: "NoSuchField".to_string()
            }
        );
    }

    #[test]
    fn test_strict_accepts_rename_target_names() {
        let model = sample_model();
        let mut overrides = ModelOverride {
            strict: true,
            ..Default::default()
        };
        overrides
            .field_renames
            .insert("WidgetId".to_string(), "WidgetIdentifier".to_string());
        // Addresses the post-rename name.
        overrides.raw_types.insert(
            "WidgetIdentifier".to_string(),
            RawTypeMapping {
                raw_type_name: "String".to_string(),
                default_value: "\"widget-0\"".to_string(),
            },
        );

        let patched = apply(&model, &overrides).unwrap();
        assert!(patched.type_mappings.contains_key("WidgetIdentifier"));
    }

    #[test]
    fn test_malformed_required_key_fails_in_lenient_mode() {
        let model = sample_model();
        let mut overrides = ModelOverride::default();
        overrides.required_overrides.insert("no-dot".to_string(), true);

        let err = apply(&model, &overrides).unwrap_err();
        assert_eq!(
            err,
            OverrideError::InvalidRequiredKey { key: "no-dot".to_string() }
        );
    }

    #[test]
    fn test_required_and_coding_key_overrides() {
        let model = sample_model();
        let mut overrides = ModelOverride::default();
        overrides
            .required_overrides
            .insert("GetWidgetRequest.id".to_string(), true);
        let mut keys = BTreeMap::new();
        keys.insert("id".to_string(), "Id".to_string());
        overrides.coding_keys.insert("GetWidgetRequest".to_string(), keys);

        let patched = apply(&model, &overrides).unwrap();
        let member = &patched.structure_descriptions["GetWidgetRequest"].members["id"];
        assert!(member.required);
        assert_eq!(member.location_name.as_deref(), Some("Id"));

        // Applying the same override again changes nothing further.
        let again = apply(&patched, &overrides).unwrap();
        assert_eq!(again, patched);
    }
}
