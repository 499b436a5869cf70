//! TypeScript identifier rules for property and declaration names.

use typeshape_ir::Literal;

/// Whether `name` can be written as a bare TypeScript property name.
///
/// Reserved words are allowed here: `default: string;` is a valid member.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' || first == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Property name as written in a member signature, quoted when needed.
pub fn property_name(name: &str) -> String {
    if is_identifier(name) {
        name.to_string()
    } else {
        Literal::from(name).to_string()
    }
}

/// Append `<T, U>` to a declaration name when it has type parameters.
pub fn with_type_params(name: &str, params: &[String]) -> String {
    if params.is_empty() {
        name.to_string()
    } else {
        format!("{}<{}>", name, params.join(", "))
    }
}
