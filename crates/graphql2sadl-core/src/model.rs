//! SADL schema model produced by translation.
//!
//! Serializes to the SADL JSON model: each type definition carries a `type`
//! tag (`Struct`, `Enum`, `Union`) alongside its kind-specific payload.

use serde::{Deserialize, Serialize};

/// Type tag for fields that hold a sequence; the element type is in `items`.
pub const ARRAY_TYPE: &str = "Array";

/// A named, ordered collection of SADL type definitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    pub name: String,
    /// Type definitions in translation order.
    pub types: Vec<TypeDef>,
}

impl Schema {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            types: Vec::new(),
        }
    }

    /// Look up a type definition by name.
    pub fn find_type(&self, name: &str) -> Option<&TypeDef> {
        self.types.iter().find(|td| td.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDef {
    pub name: String,
    /// Single-line comment; empty when the source had no description.
    pub comment: String,
    #[serde(flatten)]
    pub spec: TypeSpec,
}

impl TypeDef {
    /// The SADL base type of this definition.
    pub fn kind_name(&self) -> &'static str {
        match self.spec {
            TypeSpec::Struct { .. } => "Struct",
            TypeSpec::Enum { .. } => "Enum",
            TypeSpec::Union { .. } => "Union",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TypeSpec {
    Struct { fields: Vec<FieldDef> },
    Enum { elements: Vec<EnumElement> },
    Union { variants: Vec<String> },
}

/// A struct field. `items` is set exactly when `field_type` is [`ARRAY_TYPE`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDef {
    pub name: String,
    pub comment: String,
    #[serde(rename = "type")]
    pub field_type: String,
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<String>,
}

impl FieldDef {
    /// A field holding a single value of `field_type`.
    pub fn value(
        name: impl Into<String>,
        comment: impl Into<String>,
        field_type: impl Into<String>,
        required: bool,
    ) -> Self {
        Self {
            name: name.into(),
            comment: comment.into(),
            field_type: field_type.into(),
            required,
            items: None,
        }
    }

    /// A field holding an array of `items`.
    pub fn array(
        name: impl Into<String>,
        comment: impl Into<String>,
        items: impl Into<String>,
        required: bool,
    ) -> Self {
        Self {
            name: name.into(),
            comment: comment.into(),
            field_type: ARRAY_TYPE.to_string(),
            required,
            items: Some(items.into()),
        }
    }

    pub fn is_array(&self) -> bool {
        self.field_type == ARRAY_TYPE
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumElement {
    pub symbol: String,
    pub comment: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_struct_serializes_to_sadl_json() {
        let td = TypeDef {
            name: "User".to_string(),
            comment: "A user".to_string(),
            spec: TypeSpec::Struct {
                fields: vec![
                    FieldDef::value("id", "", "String", true),
                    FieldDef::array("tags", "labels", "String", false),
                ],
            },
        };

        let value = serde_json::to_value(&td).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "User",
                "comment": "A user",
                "type": "Struct",
                "fields": [
                    { "name": "id", "comment": "", "type": "String", "required": true },
                    { "name": "tags", "comment": "labels", "type": "Array", "required": false, "items": "String" }
                ]
            })
        );
    }

    #[test]
    fn test_union_deserializes_from_sadl_json() {
        let value = json!({
            "name": "Pet",
            "comment": "",
            "type": "Union",
            "variants": ["Cat", "Dog"]
        });

        let td: TypeDef = serde_json::from_value(value).unwrap();
        assert_eq!(td.kind_name(), "Union");
        assert_eq!(
            td.spec,
            TypeSpec::Union {
                variants: vec!["Cat".to_string(), "Dog".to_string()]
            }
        );
    }

    #[test]
    fn test_array_constructor_sets_items() {
        let field = FieldDef::array("ids", "", "Int32", false);
        assert!(field.is_array());
        assert_eq!(field.items.as_deref(), Some("Int32"));

        let field = FieldDef::value("id", "", "Int32", false);
        assert!(!field.is_array());
        assert_eq!(field.items, None);
    }
}
