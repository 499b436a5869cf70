//! Shared string utilities for declaration naming.

/// Upper-case the first character, leaving the rest untouched
/// (e.g., "address" -> "Address", "userId" -> "UserId").
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Convert a string to PascalCase (e.g., "hello_world" -> "HelloWorld")
pub fn to_pascal_case(s: &str) -> String {
    s.split(['_', '-', ' '])
        .map(capitalize_first)
        .collect()
}
