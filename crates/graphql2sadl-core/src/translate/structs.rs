//! Object types → SADL structs.
//!
//! Only the outermost non-null modifier is meaningful: it makes the field
//! required. Lists become `Array` fields whose `items` is the mapped element
//! type; non-null on the element is dropped. Anything deeper (lists of lists,
//! doubled non-null) has no SADL shape and is rejected.

use crate::ast::{FieldDefinition, ObjectDefinition, TypeRef};
use crate::error::TranslateError;
use crate::model::{FieldDef, TypeDef, TypeSpec};

use super::names::{comment_value, map_type_name};

/// Translate one object definition into a `Struct` type definition.
pub fn translate_object(def: &ObjectDefinition) -> Result<TypeDef, TranslateError> {
    let fields = def
        .fields
        .iter()
        .map(|field| translate_field(&def.name, field))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(TypeDef {
        name: def.name.clone(),
        comment: comment_value(def.description.as_deref()),
        spec: TypeSpec::Struct { fields },
    })
}

fn translate_field(owner: &str, field: &FieldDefinition) -> Result<FieldDef, TranslateError> {
    let (required, ty) = match &field.field_type {
        TypeRef::NonNull(inner) => (true, inner.as_ref()),
        other => (false, other),
    };
    let comment = comment_value(field.description.as_deref());

    let def = match ty {
        TypeRef::Named(name) => {
            FieldDef::value(&field.name, comment, map_type_name(name), required)
        }
        TypeRef::List(element) => {
            let items = element_type_name(element).ok_or_else(|| unsupported(owner, field))?;
            FieldDef::array(&field.name, comment, items, required)
        }
        TypeRef::NonNull(_) => return Err(unsupported(owner, field)),
    };

    tracing::trace!(
        owner,
        field = %field.name,
        source = %field.field_type,
        target = %def.field_type,
        required = def.required,
        "mapped field"
    );
    Ok(def)
}

/// Mapped name of a list element, or `None` if the element is itself a list.
fn element_type_name(element: &TypeRef) -> Option<&str> {
    match element {
        TypeRef::Named(name) => Some(map_type_name(name)),
        TypeRef::NonNull(inner) => match inner.as_ref() {
            TypeRef::Named(name) => Some(map_type_name(name)),
            TypeRef::List(_) | TypeRef::NonNull(_) => None,
        },
        TypeRef::List(_) => None,
    }
}

fn unsupported(owner: &str, field: &FieldDefinition) -> TranslateError {
    TranslateError::UnsupportedTypeShape {
        type_name: owner.to_string(),
        field: field.name.clone(),
        shape: field.field_type.to_string(),
    }
}
