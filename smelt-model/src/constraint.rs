//! Field constraints: the tagged variants a shape decoder produces for
//! non-structure shapes.
//!
//! Constraints are advisory metadata. Generators consume them to embed
//! validation code and pick underlying representations; they never alter
//! how documents are parsed.

/// The declared constraint of a single field type.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldConstraint {
    String {
        pattern: Option<String>,
        length: LengthRange,
        /// Enumerated values; non-empty means the field generates an enum.
        values: Vec<String>,
    },
    Integer {
        range: NumericRange<i64>,
    },
    Long {
        range: NumericRange<i64>,
    },
    Double {
        range: NumericRange<f64>,
    },
    Boolean,
    Timestamp,
    Blob,
    List {
        element: String,
        length: LengthRange,
    },
    Map {
        key: String,
        value: String,
        length: LengthRange,
    },
}

impl FieldConstraint {
    /// Returns true if this constraint generates an enumeration.
    pub fn is_enumeration(&self) -> bool {
        matches!(self, FieldConstraint::String { values, .. } if !values.is_empty())
    }

    /// Returns true if the constraint carries anything worth validating.
    pub fn has_validation(&self) -> bool {
        match self {
            FieldConstraint::String { pattern, length, values } => {
                pattern.is_some() || !length.is_unbounded() || !values.is_empty()
            }
            FieldConstraint::Integer { range } | FieldConstraint::Long { range } => {
                !range.is_unbounded()
            }
            FieldConstraint::Double { range } => !range.is_unbounded(),
            FieldConstraint::List { length, .. } | FieldConstraint::Map { length, .. } => {
                !length.is_unbounded()
            }
            FieldConstraint::Boolean | FieldConstraint::Timestamp | FieldConstraint::Blob => false,
        }
    }
}

/// Inclusive length bounds for strings, lists, and maps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LengthRange {
    pub min: Option<usize>,
    pub max: Option<usize>,
}

impl LengthRange {
    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

/// Inclusive numeric bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NumericRange<T> {
    pub min: Option<T>,
    pub max: Option<T>,
}

impl<T> NumericRange<T> {
    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}
