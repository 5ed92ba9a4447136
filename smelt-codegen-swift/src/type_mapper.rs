//! Mapping from field constraints to Swift types and literal defaults.

use smelt_model::{FieldConstraint, ServiceModel};

use crate::naming::{enum_case_name, swift_type_name};

/// Resolves model type references to Swift type names and default values.
pub struct SwiftTypeMapper<'a> {
    model: &'a ServiceModel,
}

impl<'a> SwiftTypeMapper<'a> {
    pub fn new(model: &'a ServiceModel) -> Self {
        Self { model }
    }

    /// The Swift type name a member reference resolves to: structures keep
    /// their name, fields use their declared (typealias or enum) name.
    pub fn type_reference(&self, name: &str) -> String {
        if self.model.structure_descriptions.contains_key(name) {
            name.to_string()
        } else {
            swift_type_name(name)
        }
    }

    /// The underlying Swift type a field's typealias points at, honoring
    /// raw-type overrides.
    pub fn underlying_type(&self, field_name: &str, constraint: &FieldConstraint) -> String {
        if let Some(mapping) = self.model.type_mappings.get(field_name) {
            return mapping.raw_type_name.clone();
        }

        match constraint {
            FieldConstraint::String { .. } => "String".to_string(),
            FieldConstraint::Integer { .. } => "Int".to_string(),
            FieldConstraint::Long { .. } => "Int64".to_string(),
            FieldConstraint::Double { .. } => "Double".to_string(),
            FieldConstraint::Boolean => "Bool".to_string(),
            FieldConstraint::Timestamp => "Date".to_string(),
            FieldConstraint::Blob => "Data".to_string(),
            FieldConstraint::List { element, .. } => {
                format!("[{}]", self.type_reference(element))
            }
            FieldConstraint::Map { key, value, .. } => {
                format!(
                    "[{}: {}]",
                    self.type_reference(key),
                    self.type_reference(value)
                )
            }
        }
    }

    /// Literal default value for a type reference, used when composing
    /// default instances. Raw-type overrides supply their own literal.
    pub fn default_value(&self, name: &str) -> String {
        if let Some(mapping) = self.model.type_mappings.get(name) {
            return mapping.default_value.clone();
        }

        if self.model.structure_descriptions.contains_key(name) {
            return format!("{name}.__default");
        }

        match self.model.field_descriptions.get(name) {
            Some(FieldConstraint::String { values, .. }) if !values.is_empty() => {
                let upper = self.model.upper_camel_enum_types.contains(name);
                format!(".{}", enum_case_name(&values[0], upper))
            }
            Some(FieldConstraint::String { .. }) => "\"\"".to_string(),
            Some(FieldConstraint::Integer { .. }) | Some(FieldConstraint::Long { .. }) => {
                "0".to_string()
            }
            Some(FieldConstraint::Double { .. }) => "0.0".to_string(),
            Some(FieldConstraint::Boolean) => "false".to_string(),
            Some(FieldConstraint::Timestamp) => "Date(timeIntervalSince1970: 0)".to_string(),
            Some(FieldConstraint::Blob) => "Data()".to_string(),
            Some(FieldConstraint::List { .. }) => "[]".to_string(),
            Some(FieldConstraint::Map { .. }) => "[:]".to_string(),
            None => ".init()".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use smelt_model::{LengthRange, RawTypeMapping, StructureDescription};

    use super::*;

    fn sample_model() -> ServiceModel {
        let mut model = ServiceModel::default();
        model.field_descriptions.insert(
            "WidgetId".to_string(),
            FieldConstraint::String {
                pattern: None,
                length: LengthRange::default(),
                values: vec![],
            },
        );
        model.field_descriptions.insert(
            "WidgetStatus".to_string(),
            FieldConstraint::String {
                pattern: None,
                length: LengthRange::default(),
                values: vec!["ACTIVE".to_string(), "DELETED".to_string()],
            },
        );
        model.field_descriptions.insert(
            "WidgetIdList".to_string(),
            FieldConstraint::List {
                element: "WidgetId".to_string(),
                length: LengthRange::default(),
            },
        );
        model
            .structure_descriptions
            .insert("Widget".to_string(), StructureDescription::default());
        model
    }

    #[test]
    fn test_type_reference() {
        let model = sample_model();
        let mapper = SwiftTypeMapper::new(&model);

        assert_eq!(mapper.type_reference("Widget"), "Widget");
        assert_eq!(mapper.type_reference("WidgetId"), "WidgetId");
    }

    #[test]
    fn test_underlying_types() {
        let model = sample_model();
        let mapper = SwiftTypeMapper::new(&model);

        let list = &model.field_descriptions["WidgetIdList"];
        assert_eq!(mapper.underlying_type("WidgetIdList", list), "[WidgetId]");

        assert_eq!(
            mapper.underlying_type("Anything", &FieldConstraint::Timestamp),
            "Date"
        );
    }

    #[test]
    fn test_raw_type_override_wins() {
        let mut model = sample_model();
        model.type_mappings.insert(
            "WidgetId".to_string(),
            RawTypeMapping {
                raw_type_name: "Int".to_string(),
                default_value: "12".to_string(),
            },
        );
        let mapper = SwiftTypeMapper::new(&model);

        let constraint = &model.field_descriptions["WidgetId"].clone();
        assert_eq!(mapper.underlying_type("WidgetId", constraint), "Int");
        assert_eq!(mapper.default_value("WidgetId"), "12");
    }

    #[test]
    fn test_default_values() {
        let model = sample_model();
        let mapper = SwiftTypeMapper::new(&model);

        assert_eq!(mapper.default_value("WidgetId"), "\"\"");
        assert_eq!(mapper.default_value("WidgetStatus"), ".active");
        assert_eq!(mapper.default_value("WidgetIdList"), "[]");
        assert_eq!(mapper.default_value("Widget"), "Widget.__default");
    }
}
