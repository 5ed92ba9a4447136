//! Structure descriptions: named record types with ordered members.

use std::collections::BTreeMap;

/// A named record type. Members are keyed by name; their `position` fields
/// give the stable declaration order for generated code.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StructureDescription {
    pub members: BTreeMap<String, Member>,
    pub documentation: Option<String>,
}

impl StructureDescription {
    /// Members ordered by their decoder-assigned ordinal position.
    pub fn ordered_members(&self) -> Vec<(&str, &Member)> {
        let mut members: Vec<_> = self
            .members
            .iter()
            .map(|(name, member)| (name.as_str(), member))
            .collect();
        members.sort_by_key(|(_, member)| member.position);
        members
    }
}

/// One member of a structure.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    /// The field or structure type this member references.
    pub field_name: String,
    /// Ordinal position — unique and contiguous within the structure.
    pub position: usize,
    /// Whether the member must be present on the wire.
    pub required: bool,
    /// Alternate wire key, when it differs from the member name.
    pub location_name: Option<String>,
    /// Documentation from the source model.
    pub documentation: Option<String>,
}

impl Member {
    /// The key this member uses on the wire.
    pub fn wire_name<'a>(&'a self, member_name: &'a str) -> &'a str {
        self.location_name.as_deref().unwrap_or(member_name)
    }
}
