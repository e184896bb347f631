//! Schema translation: GraphQL SDL definitions → SADL type definitions.
//!
//! Definitions are visited once, in document order. Objects, enums and unions
//! each produce one type definition; interfaces and input objects are skipped;
//! operation root types named by `schema { ... }` are excluded. The first
//! unsupported construct aborts the whole translation.

pub mod enums;
pub mod names;
pub mod structs;
pub mod unions;

use std::collections::HashSet;

use crate::ast::{Definition, Document, SchemaDefinition};
use crate::config::{RootTypeScan, TranslateOptions};
use crate::error::TranslateError;
use crate::model::Schema;

use self::enums::translate_enum;
use self::names::is_native_scalar;
use self::structs::translate_object;
use self::unions::translate_union;

/// Translate a parsed SDL document into a SADL schema.
pub fn translate(doc: &Document, options: &TranslateOptions) -> Result<Schema, TranslateError> {
    let mut ignore: HashSet<&str> = HashSet::new();
    if options.root_types == RootTypeScan::Upfront {
        for def in &doc.definitions {
            if let Definition::Schema(schema_def) = def {
                collect_root_types(schema_def, &mut ignore);
            }
        }
    }

    let mut schema = Schema::new(options.schema_name.as_str());
    for def in &doc.definitions {
        match def {
            Definition::Object(object) => {
                if ignore.contains(object.name.as_str()) {
                    tracing::debug!(name = %object.name, "excluding operation root type");
                    continue;
                }
                tracing::debug!(name = %object.name, "translating object");
                schema.types.push(translate_object(object)?);
            }
            Definition::Schema(schema_def) => {
                if options.root_types == RootTypeScan::InOrder {
                    collect_root_types(schema_def, &mut ignore);
                }
            }
            Definition::Enum(enum_def) => {
                tracing::debug!(name = %enum_def.name, "translating enum");
                schema.types.push(translate_enum(enum_def));
            }
            Definition::Union(union_def) => {
                tracing::debug!(name = %union_def.name, "translating union");
                schema.types.push(translate_union(union_def));
            }
            Definition::Interface(_) | Definition::InputObject(_) => {
                tracing::debug!(
                    kind = def.kind(),
                    name = def.name().unwrap_or_default(),
                    "skipping definition with no SADL representation"
                );
            }
            Definition::Scalar(scalar) => {
                if !is_native_scalar(&scalar.name) {
                    return Err(TranslateError::UnsupportedDefinition {
                        kind: "custom scalar".to_string(),
                        definition: def.to_string(),
                    });
                }
                tracing::debug!(name = %scalar.name, "accepting native scalar");
            }
            Definition::Other { kind, .. } => {
                return Err(TranslateError::UnsupportedDefinition {
                    kind: kind.clone(),
                    definition: def.to_string(),
                });
            }
        }
    }

    tracing::debug!(
        name = %schema.name,
        types = schema.types.len(),
        "translation complete"
    );
    Ok(schema)
}

fn collect_root_types<'a>(def: &'a SchemaDefinition, ignore: &mut HashSet<&'a str>) {
    for op in &def.operations {
        tracing::debug!(operation = %op.operation, name = %op.type_name, "operation root type");
        ignore.insert(op.type_name.as_str());
    }
}
