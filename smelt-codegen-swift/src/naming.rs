//! Swift-specific naming conventions.

use smelt_core::{to_lower_camel_case, to_upper_camel_case};

const SWIFT_RESERVED: &[&str] = &[
    "associatedtype", "class", "deinit", "enum", "extension", "fileprivate", "func", "import",
    "init", "inout", "internal", "let", "open", "operator", "private", "protocol", "public",
    "rethrows", "static", "struct", "subscript", "typealias", "var", "break", "case", "continue",
    "default", "defer", "do", "else", "fallthrough", "for", "guard", "if", "in", "repeat",
    "return", "switch", "where", "while", "as", "catch", "false", "is", "nil", "self", "Self",
    "super", "throw", "throws", "true", "try",
];

/// Escape a name that collides with a Swift keyword using backticks.
pub fn escape_swift_reserved(name: &str) -> String {
    if SWIFT_RESERVED.contains(&name) {
        format!("`{name}`")
    } else {
        name.to_string()
    }
}

/// Type name for a declared field or structure (UpperCamelCase).
pub fn swift_type_name(name: &str) -> String {
    to_upper_camel_case(name)
}

/// Member/property name (lowerCamelCase, keyword-escaped).
pub fn swift_member_name(name: &str) -> String {
    escape_swift_reserved(&to_lower_camel_case(name))
}

/// Case name for one enumerated value.
///
/// Defaults to lowerCamelCase; types in the model's enum-naming
/// normalization set use UpperCamelCase instead.
pub fn enum_case_name(value: &str, upper_camel: bool) -> String {
    let case = if upper_camel {
        to_upper_camel_case(value)
    } else {
        to_lower_camel_case(value)
    };
    escape_swift_reserved(&case)
}
