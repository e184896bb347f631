//! Type-name mapping and comment normalization.

/// Scalars declared in SDL that are native SADL types and pass through as-is.
pub const NATIVE_SCALARS: &[&str] = &["Timestamp", "UUID"];

/// Map a GraphQL named type to its SADL equivalent.
///
/// Built-in GraphQL scalars map to SADL primitives. Every other name is a
/// reference to a type defined elsewhere in the document and is unchanged.
pub fn map_type_name(name: &str) -> &str {
    match name {
        "Int" => "Int32",
        "Float" => "Float64",
        "Boolean" => "Bool",
        "ID" => "String",
        other => other,
    }
}

/// Whether a custom scalar declaration is accepted without output.
pub fn is_native_scalar(name: &str) -> bool {
    NATIVE_SCALARS.contains(&name)
}

/// Fold a description into a single-line SADL comment.
///
/// A missing description becomes an empty comment.
pub fn comment_value(description: Option<&str>) -> String {
    description.map(|d| d.replace('\n', " ")).unwrap_or_default()
}
