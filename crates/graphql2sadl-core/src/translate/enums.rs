//! Enum types → SADL enums.

use crate::ast::EnumDefinition;
use crate::model::{EnumElement, TypeDef, TypeSpec};

use super::names::comment_value;

/// Translate one enum definition, keeping value order.
pub fn translate_enum(def: &EnumDefinition) -> TypeDef {
    let elements = def
        .values
        .iter()
        .map(|value| EnumElement {
            symbol: value.name.clone(),
            comment: comment_value(value.description.as_deref()),
        })
        .collect();

    TypeDef {
        name: def.name.clone(),
        comment: comment_value(def.description.as_deref()),
        spec: TypeSpec::Enum { elements },
    }
}
