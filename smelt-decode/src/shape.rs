//! The shape decoder.
//!
//! A pure function from one raw shape record to either a field constraint
//! or a structure's decoded attributes. No side effects; every failure is
//! fatal because downstream stages assume all shapes decode to a known
//! variant.

use std::collections::BTreeMap;

use smelt_model::{FieldConstraint, LengthRange, Member, NumericRange};

use crate::{Error, RawShape, Result};

/// The decoded form of one shape.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedShape {
    Field(FieldConstraint),
    Structure(StructureAttributes),
}

/// Decoded attributes of a structure shape.
///
/// Member request/response locations are recorded separately from the
/// members themselves: a member can be both a structure field and a
/// request-binding target.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StructureAttributes {
    pub members: BTreeMap<String, Member>,
    pub member_locations: BTreeMap<String, MemberLocation>,
    pub payload: Option<String>,
    pub error_code: Option<String>,
    pub http_status: Option<u16>,
    pub is_exception: bool,
    pub documentation: Option<String>,
}

/// Where a member binds in an HTTP request or response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberLocation {
    Uri,
    Query,
    Header,
    Headers,
}

impl MemberLocation {
    fn parse(location: &str) -> Option<Self> {
        match location {
            "uri" => Some(Self::Uri),
            "query" | "querystring" => Some(Self::Query),
            "header" => Some(Self::Header),
            "headers" => Some(Self::Headers),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Uri => "uri",
            Self::Query => "query",
            Self::Header => "header",
            Self::Headers => "headers",
        }
    }
}

/// Decode one raw shape record.
///
/// An unrecognized type discriminator is a fatal decode error — there is
/// no recovery, since generation cannot proceed with an unknown variant.
pub fn decode_shape(name: &str, shape: &RawShape) -> Result<DecodedShape> {
    let constraint = match shape.shape_type.as_str() {
        "string" => FieldConstraint::String {
            pattern: shape.pattern.clone(),
            length: length_range(shape),
            values: shape.enum_values.clone(),
        },
        "integer" => FieldConstraint::Integer {
            range: numeric_range(shape),
        },
        "long" => FieldConstraint::Long {
            range: numeric_range(shape),
        },
        "double" | "float" => FieldConstraint::Double {
            range: NumericRange {
                min: shape.min,
                max: shape.max,
            },
        },
        "boolean" => FieldConstraint::Boolean,
        "timestamp" => FieldConstraint::Timestamp,
        "blob" => FieldConstraint::Blob,
        "list" => FieldConstraint::List {
            element: shape
                .member
                .as_ref()
                .map(|m| m.shape.clone())
                .unwrap_or_default(),
            length: length_range(shape),
        },
        "map" => FieldConstraint::Map {
            key: shape.key.as_ref().map(|k| k.shape.clone()).unwrap_or_default(),
            value: shape
                .value
                .as_ref()
                .map(|v| v.shape.clone())
                .unwrap_or_default(),
            length: length_range(shape),
        },
        "structure" => return decode_structure(name, shape).map(DecodedShape::Structure),
        other => {
            return Err(Box::new(Error::UnknownShapeType {
                shape: name.to_string(),
                type_name: other.to_string(),
            }));
        }
    };

    Ok(DecodedShape::Field(constraint))
}

fn decode_structure(name: &str, shape: &RawShape) -> Result<StructureAttributes> {
    let mut attributes = StructureAttributes {
        payload: shape.payload.clone(),
        error_code: shape.error.as_ref().and_then(|e| e.code.clone()),
        http_status: shape.error.as_ref().and_then(|e| e.http_status_code),
        is_exception: shape.exception,
        documentation: shape.documentation.clone(),
        ..Default::default()
    };

    // Deterministic member order: sort by key, skip deprecated members
    // entirely (they consume no ordinal position), then assign contiguous
    // positions over the filtered set.
    let mut member_names: Vec<&String> = shape
        .members
        .iter()
        .filter(|(_, member)| !member.deprecated)
        .map(|(member_name, _)| member_name)
        .collect();
    member_names.sort();

    for (position, member_name) in member_names.into_iter().enumerate() {
        let raw = &shape.members[member_name];

        if let Some(location) = &raw.location {
            let parsed = MemberLocation::parse(location).ok_or_else(|| {
                Box::new(Error::UnknownMemberLocation {
                    shape: name.to_string(),
                    member: member_name.clone(),
                    location: location.clone(),
                })
            })?;
            attributes.member_locations.insert(member_name.clone(), parsed);
        }

        attributes.members.insert(
            member_name.clone(),
            Member {
                field_name: raw.shape.clone(),
                position,
                required: shape.required.iter().any(|r| r == member_name),
                location_name: raw.location_name.clone(),
                documentation: raw.documentation.clone(),
            },
        );
    }

    Ok(attributes)
}

fn length_range(shape: &RawShape) -> LengthRange {
    LengthRange {
        min: shape.min.map(|v| v as usize),
        max: shape.max.map(|v| v as usize),
    }
}

fn numeric_range(shape: &RawShape) -> NumericRange<i64> {
    NumericRange {
        min: shape.min.map(|v| v as i64),
        max: shape.max.map(|v| v as i64),
    }
}
