//! Union types → SADL unions.

use crate::ast::UnionDefinition;
use crate::model::{TypeDef, TypeSpec};

use super::names::comment_value;

/// Translate one union definition. Member names are copied verbatim: union
/// members are always object types, never built-in scalars.
pub fn translate_union(def: &UnionDefinition) -> TypeDef {
    TypeDef {
        name: def.name.clone(),
        comment: comment_value(def.description.as_deref()),
        spec: TypeSpec::Union {
            variants: def.types.clone(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_union_members_become_variants_in_order() {
        let def = UnionDefinition {
            name: "Pet".to_string(),
            description: None,
            types: vec!["Cat".to_string(), "Dog".to_string()],
        };

        let td = translate_union(&def);
        assert_eq!(td.name, "Pet");
        assert_eq!(td.comment, "");
        assert_eq!(
            td.spec,
            TypeSpec::Union {
                variants: vec!["Cat".to_string(), "Dog".to_string()]
            }
        );
    }

    #[test]
    fn test_union_members_are_not_primitive_mapped() {
        let def = UnionDefinition {
            name: "Odd".to_string(),
            description: None,
            types: vec!["Int".to_string()],
        };

        let td = translate_union(&def);
        assert_eq!(
            td.spec,
            TypeSpec::Union {
                variants: vec!["Int".to_string()]
            }
        );
    }
}
