//! SDL text → [`crate::ast`], via the `graphql-parser` crate.

use graphql_parser::schema as gql;

use crate::ast::{
    Definition, Document, EnumDefinition, EnumValueDefinition, FieldDefinition,
    InputObjectDefinition, InterfaceDefinition, ObjectDefinition, Operation, OperationType,
    ScalarDefinition, SchemaDefinition, TypeRef, UnionDefinition,
};
use crate::error::TranslateError;

/// Parse GraphQL SDL into a source document.
///
/// Type extensions and directive definitions are kept as
/// [`Definition::Other`] so the translator can reject them by kind.
pub fn parse_document(sdl: &str) -> Result<Document, TranslateError> {
    let doc =
        gql::parse_schema::<String>(sdl).map_err(|e| TranslateError::Parse(e.to_string()))?;
    let definitions = doc.definitions.into_iter().map(convert_definition).collect();
    Ok(Document::new(definitions))
}

fn convert_definition(def: gql::Definition<'_, String>) -> Definition {
    match def {
        gql::Definition::SchemaDefinition(schema_def) => {
            Definition::Schema(convert_schema(schema_def))
        }
        gql::Definition::TypeDefinition(type_def) => convert_type_definition(type_def),
        gql::Definition::TypeExtension(ext) => {
            let kind = match &ext {
                gql::TypeExtension::Scalar(_) => "scalar extension",
                gql::TypeExtension::Object(_) => "object extension",
                gql::TypeExtension::Interface(_) => "interface extension",
                gql::TypeExtension::Union(_) => "union extension",
                gql::TypeExtension::Enum(_) => "enum extension",
                gql::TypeExtension::InputObject(_) => "input object extension",
            };
            other(kind, gql::Definition::TypeExtension(ext))
        }
        def @ gql::Definition::DirectiveDefinition(_) => other("directive", def),
    }
}

fn other(kind: &str, def: gql::Definition<'_, String>) -> Definition {
    let rendered = gql::Document {
        definitions: vec![def],
    }
    .to_string();
    Definition::Other {
        kind: kind.to_string(),
        source: rendered.trim().to_string(),
    }
}

fn convert_schema(def: gql::SchemaDefinition<'_, String>) -> SchemaDefinition {
    let operations = [
        (Operation::Query, def.query),
        (Operation::Mutation, def.mutation),
        (Operation::Subscription, def.subscription),
    ]
    .into_iter()
    .filter_map(|(operation, type_name)| {
        type_name.map(|type_name| OperationType {
            operation,
            type_name,
        })
    })
    .collect();
    SchemaDefinition { operations }
}

fn convert_type_definition(def: gql::TypeDefinition<'_, String>) -> Definition {
    match def {
        gql::TypeDefinition::Scalar(scalar) => {
            Definition::Scalar(ScalarDefinition { name: scalar.name })
        }
        gql::TypeDefinition::Object(object) => Definition::Object(ObjectDefinition {
            name: object.name,
            description: object.description,
            fields: object.fields.into_iter().map(convert_field).collect(),
        }),
        gql::TypeDefinition::Interface(interface) => {
            Definition::Interface(InterfaceDefinition {
                name: interface.name,
                description: interface.description,
                fields: interface.fields.into_iter().map(convert_field).collect(),
            })
        }
        gql::TypeDefinition::Union(union_type) => Definition::Union(UnionDefinition {
            name: union_type.name,
            description: union_type.description,
            types: union_type.types,
        }),
        gql::TypeDefinition::Enum(enum_type) => Definition::Enum(EnumDefinition {
            name: enum_type.name,
            description: enum_type.description,
            values: enum_type
                .values
                .into_iter()
                .map(|value| EnumValueDefinition {
                    name: value.name,
                    description: value.description,
                })
                .collect(),
        }),
        gql::TypeDefinition::InputObject(input) => {
            Definition::InputObject(InputObjectDefinition {
                name: input.name,
                description: input.description,
                fields: input
                    .fields
                    .into_iter()
                    .map(|value| FieldDefinition {
                        name: value.name,
                        description: value.description,
                        field_type: convert_type(value.value_type),
                    })
                    .collect(),
            })
        }
    }
}

fn convert_field(field: gql::Field<'_, String>) -> FieldDefinition {
    FieldDefinition {
        name: field.name,
        description: field.description,
        field_type: convert_type(field.field_type),
    }
}

fn convert_type(ty: gql::Type<'_, String>) -> TypeRef {
    match ty {
        gql::Type::NamedType(name) => TypeRef::Named(name),
        gql::Type::ListType(element) => TypeRef::list(convert_type(*element)),
        gql::Type::NonNullType(inner) => TypeRef::non_null(convert_type(*inner)),
    }
}
