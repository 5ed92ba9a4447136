//! Shared naming helpers for code generation.

/// Convert a name to UpperCamelCase (e.g. "get_widget" -> "GetWidget",
/// "us-west-2" -> "UsWest2"). Names that are already UpperCamelCase pass
/// through unchanged.
pub fn to_upper_camel_case(s: &str) -> String {
    s.split(['_', '-', ' ', '.'])
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

/// Convert a name to lowerCamelCase (e.g. "GetWidget" -> "getWidget",
/// "DBCluster" -> "dbCluster").
pub fn to_lower_camel_case(s: &str) -> String {
    let camel = to_upper_camel_case(s);
    let mut chars = camel.chars().peekable();
    let mut result = String::with_capacity(camel.len());

    // Lowercase the leading run of uppercase letters, leaving the last one
    // of the run capitalized when it starts a new word (DBCluster -> dbCluster).
    while let Some(c) = chars.next() {
        if c.is_uppercase() {
            let next_is_lower = chars.peek().is_some_and(|n| n.is_lowercase());
            if next_is_lower && !result.is_empty() {
                result.push(c);
                break;
            }
            result.extend(c.to_lowercase());
            if !next_is_lower {
                continue;
            }
            break;
        } else {
            result.push(c);
            break;
        }
    }
    result.extend(chars);
    result
}

/// Convert a name to snake_case (e.g. "GetWidget" -> "get_widget").
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() && i > 0 {
            result.push('_');
        }
        result.extend(c.to_lowercase());
    }
    result.replace('-', "_")
}
