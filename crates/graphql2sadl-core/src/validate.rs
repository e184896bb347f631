//! Structural validation of a translated SADL schema.
//!
//! Translation performs only local name substitution, so references to types
//! that were skipped (interfaces, input objects) or never declared surface
//! here. Validation stops at the first problem.

use std::collections::HashSet;

use thiserror::Error;

use crate::model::{Schema, TypeDef, TypeSpec};

/// SADL base types that need no declaration.
pub const BUILTIN_TYPES: &[&str] = &[
    "Bool",
    "Int8",
    "Int16",
    "Int32",
    "Int64",
    "Float32",
    "Float64",
    "Decimal",
    "Bytes",
    "String",
    "Timestamp",
    "UnitValue",
    "Quantity",
    "UUID",
    "Array",
    "Map",
    "Struct",
    "Enum",
    "Union",
    "Any",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("duplicate type name: {name}")]
    DuplicateType { name: String },

    #[error("unknown type {reference} referenced by {context}")]
    UnknownType { context: String, reference: String },

    #[error("duplicate field {field} in struct {type_name}")]
    DuplicateField { type_name: String, field: String },

    #[error("duplicate symbol {symbol} in enum {type_name}")]
    DuplicateSymbol { type_name: String, symbol: String },

    #[error("field {type_name}.{field} has type {field_type} but items {items:?}")]
    ItemsMismatch {
        type_name: String,
        field: String,
        field_type: String,
        items: Option<String>,
    },
}

pub fn is_builtin_type(name: &str) -> bool {
    BUILTIN_TYPES.contains(&name)
}

/// Validate a schema: unique type names, resolvable references, unique
/// members, and `items` present exactly on array fields.
pub fn validate(schema: &Schema) -> Result<(), ValidationError> {
    let mut declared: HashSet<&str> = HashSet::with_capacity(schema.types.len());
    for td in &schema.types {
        if !declared.insert(td.name.as_str()) {
            return Err(ValidationError::DuplicateType {
                name: td.name.clone(),
            });
        }
    }

    for td in &schema.types {
        validate_type(td, &declared)?;
    }
    Ok(())
}

fn validate_type(td: &TypeDef, declared: &HashSet<&str>) -> Result<(), ValidationError> {
    let resolve = |context: String, reference: &str| {
        if is_builtin_type(reference) || declared.contains(reference) {
            Ok(())
        } else {
            Err(ValidationError::UnknownType {
                context,
                reference: reference.to_string(),
            })
        }
    };

    match &td.spec {
        TypeSpec::Struct { fields } => {
            let mut seen = HashSet::with_capacity(fields.len());
            for field in fields {
                if !seen.insert(field.name.as_str()) {
                    return Err(ValidationError::DuplicateField {
                        type_name: td.name.clone(),
                        field: field.name.clone(),
                    });
                }
                if field.is_array() != field.items.is_some() {
                    return Err(ValidationError::ItemsMismatch {
                        type_name: td.name.clone(),
                        field: field.name.clone(),
                        field_type: field.field_type.clone(),
                        items: field.items.clone(),
                    });
                }
                let context = format!("field {}.{}", td.name, field.name);
                match &field.items {
                    Some(items) => resolve(context, items.as_str())?,
                    None => resolve(context, field.field_type.as_str())?,
                }
            }
        }
        TypeSpec::Enum { elements } => {
            let mut seen = HashSet::with_capacity(elements.len());
            for element in elements {
                if !seen.insert(element.symbol.as_str()) {
                    return Err(ValidationError::DuplicateSymbol {
                        type_name: td.name.clone(),
                        symbol: element.symbol.clone(),
                    });
                }
            }
        }
        TypeSpec::Union { variants } => {
            for variant in variants {
                resolve(format!("union {}", td.name), variant.as_str())?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EnumElement, FieldDef, ARRAY_TYPE};
    use pretty_assertions::assert_eq;

    fn structure(name: &str, fields: Vec<FieldDef>) -> TypeDef {
        TypeDef {
            name: name.to_string(),
            comment: String::new(),
            spec: TypeSpec::Struct { fields },
        }
    }

    fn schema(types: Vec<TypeDef>) -> Schema {
        Schema {
            name: "test".to_string(),
            types,
        }
    }

    #[test]
    fn test_valid_schema_passes() {
        let s = schema(vec![
            structure(
                "User",
                vec![
                    FieldDef::value("id", "", "String", true),
                    FieldDef::value("created", "", "Timestamp", false),
                    FieldDef::array("friends", "", "User", false),
                ],
            ),
            TypeDef {
                name: "Actor".to_string(),
                comment: String::new(),
                spec: TypeSpec::Union {
                    variants: vec!["User".to_string()],
                },
            },
        ]);
        assert_eq!(validate(&s), Ok(()));
    }

    #[test]
    fn test_duplicate_type_names_rejected() {
        let s = schema(vec![structure("A", vec![]), structure("A", vec![])]);
        assert_eq!(
            validate(&s),
            Err(ValidationError::DuplicateType {
                name: "A".to_string()
            })
        );
    }

    #[test]
    fn test_unknown_field_type_rejected() {
        let s = schema(vec![structure(
            "User",
            vec![FieldDef::value("node", "", "Node", false)],
        )]);
        assert_eq!(
            validate(&s),
            Err(ValidationError::UnknownType {
                context: "field User.node".to_string(),
                reference: "Node".to_string(),
            })
        );
    }

    #[test]
    fn test_unknown_items_type_rejected() {
        let s = schema(vec![structure(
            "User",
            vec![FieldDef::array("tags", "", "Tag", false)],
        )]);
        assert!(matches!(
            validate(&s),
            Err(ValidationError::UnknownType { reference, .. }) if reference == "Tag"
        ));
    }

    #[test]
    fn test_unknown_union_variant_rejected() {
        let s = schema(vec![TypeDef {
            name: "Pet".to_string(),
            comment: String::new(),
            spec: TypeSpec::Union {
                variants: vec!["Cat".to_string()],
            },
        }]);
        assert!(matches!(
            validate(&s),
            Err(ValidationError::UnknownType { context, .. }) if context == "union Pet"
        ));
    }

    #[test]
    fn test_duplicate_field_rejected() {
        let s = schema(vec![structure(
            "User",
            vec![
                FieldDef::value("id", "", "String", true),
                FieldDef::value("id", "", "Int32", false),
            ],
        )]);
        assert!(matches!(
            validate(&s),
            Err(ValidationError::DuplicateField { .. })
        ));
    }

    #[test]
    fn test_duplicate_enum_symbol_rejected() {
        let element = EnumElement {
            symbol: "RED".to_string(),
            comment: String::new(),
        };
        let s = schema(vec![TypeDef {
            name: "Color".to_string(),
            comment: String::new(),
            spec: TypeSpec::Enum {
                elements: vec![element.clone(), element],
            },
        }]);
        assert!(matches!(
            validate(&s),
            Err(ValidationError::DuplicateSymbol { .. })
        ));
    }

    #[test]
    fn test_items_without_array_rejected() {
        let mut field = FieldDef::value("id", "", "String", false);
        field.items = Some("String".to_string());
        let s = schema(vec![structure("User", vec![field])]);
        assert!(matches!(
            validate(&s),
            Err(ValidationError::ItemsMismatch { .. })
        ));
    }

    #[test]
    fn test_array_without_items_rejected() {
        let field = FieldDef::value("ids", "", ARRAY_TYPE, false);
        let s = schema(vec![structure("User", vec![field])]);
        assert!(matches!(
            validate(&s),
            Err(ValidationError::ItemsMismatch { .. })
        ));
    }
}
