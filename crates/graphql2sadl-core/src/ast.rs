//! Source AST: the subset of GraphQL SDL the translator consumes.
//!
//! Produced by [`crate::parser`] from raw SDL text, or built directly by
//! callers that already hold a parsed schema. Every definition renders back
//! to SDL through `Display`, which is what error messages carry.

use std::fmt;

/// A parsed SDL document: top-level definitions in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub definitions: Vec<Definition>,
}

impl Document {
    pub fn new(definitions: Vec<Definition>) -> Self {
        Self { definitions }
    }
}

/// A top-level SDL definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Definition {
    Object(ObjectDefinition),
    Enum(EnumDefinition),
    Union(UnionDefinition),
    Interface(InterfaceDefinition),
    InputObject(InputObjectDefinition),
    Scalar(ScalarDefinition),
    Schema(SchemaDefinition),
    /// Any definition kind with no dedicated node (type extensions,
    /// directive definitions). `source` is its SDL rendering.
    Other { kind: String, source: String },
}

impl Definition {
    /// Human-readable kind, as used in diagnostics and log events.
    pub fn kind(&self) -> &str {
        match self {
            Definition::Object(_) => "object",
            Definition::Enum(_) => "enum",
            Definition::Union(_) => "union",
            Definition::Interface(_) => "interface",
            Definition::InputObject(_) => "input object",
            Definition::Scalar(_) => "scalar",
            Definition::Schema(_) => "schema",
            Definition::Other { kind, .. } => kind.as_str(),
        }
    }

    /// Name of the defined type, if the definition declares one.
    pub fn name(&self) -> Option<&str> {
        match self {
            Definition::Object(def) => Some(def.name.as_str()),
            Definition::Enum(def) => Some(def.name.as_str()),
            Definition::Union(def) => Some(def.name.as_str()),
            Definition::Interface(def) => Some(def.name.as_str()),
            Definition::InputObject(def) => Some(def.name.as_str()),
            Definition::Scalar(def) => Some(def.name.as_str()),
            Definition::Schema(_) | Definition::Other { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectDefinition {
    pub name: String,
    pub description: Option<String>,
    pub fields: Vec<FieldDefinition>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDefinition {
    pub name: String,
    pub description: Option<String>,
    pub field_type: TypeRef,
}

impl FieldDefinition {
    pub fn new(name: impl Into<String>, field_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            description: None,
            field_type,
        }
    }
}

/// A type reference with list and non-null modifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    Named(String),
    List(Box<TypeRef>),
    NonNull(Box<TypeRef>),
}

impl TypeRef {
    pub fn named(name: impl Into<String>) -> Self {
        TypeRef::Named(name.into())
    }

    pub fn list(element: TypeRef) -> Self {
        TypeRef::List(Box::new(element))
    }

    pub fn non_null(inner: TypeRef) -> Self {
        TypeRef::NonNull(Box::new(inner))
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Named(name) => f.write_str(name),
            TypeRef::List(element) => write!(f, "[{element}]"),
            TypeRef::NonNull(inner) => write!(f, "{inner}!"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDefinition {
    pub name: String,
    pub description: Option<String>,
    pub values: Vec<EnumValueDefinition>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumValueDefinition {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnionDefinition {
    pub name: String,
    pub description: Option<String>,
    /// Member type names, in declaration order.
    pub types: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceDefinition {
    pub name: String,
    pub description: Option<String>,
    pub fields: Vec<FieldDefinition>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputObjectDefinition {
    pub name: String,
    pub description: Option<String>,
    pub fields: Vec<FieldDefinition>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalarDefinition {
    pub name: String,
}

/// The `schema { ... }` declaration naming the operation root types.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaDefinition {
    pub operations: Vec<OperationType>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationType {
    pub operation: Operation,
    pub type_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Query,
    Mutation,
    Subscription,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operation::Query => "query",
            Operation::Mutation => "mutation",
            Operation::Subscription => "subscription",
        })
    }
}

// ---------------------------------------------------------------------------
// SDL rendering
// ---------------------------------------------------------------------------

fn write_description(
    f: &mut fmt::Formatter<'_>,
    description: Option<&str>,
    indent: &str,
) -> fmt::Result {
    match description {
        Some(text) if !text.contains('\n') => {
            writeln!(f, "{indent}\"{}\"", text.replace('"', "\\\""))
        }
        Some(text) => {
            writeln!(f, "{indent}\"\"\"")?;
            for line in text.lines() {
                writeln!(f, "{indent}{line}")?;
            }
            writeln!(f, "{indent}\"\"\"")
        }
        None => Ok(()),
    }
}

fn write_fields(
    f: &mut fmt::Formatter<'_>,
    keyword: &str,
    name: &str,
    description: Option<&str>,
    fields: &[FieldDefinition],
) -> fmt::Result {
    write_description(f, description, "")?;
    writeln!(f, "{keyword} {name} {{")?;
    for field in fields {
        write_description(f, field.description.as_deref(), "  ")?;
        writeln!(f, "  {}: {}", field.name, field.field_type)?;
    }
    write!(f, "}}")
}

impl fmt::Display for Definition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Definition::Object(def) => write_fields(
                f,
                "type",
                &def.name,
                def.description.as_deref(),
                &def.fields,
            ),
            Definition::Interface(def) => write_fields(
                f,
                "interface",
                &def.name,
                def.description.as_deref(),
                &def.fields,
            ),
            Definition::InputObject(def) => write_fields(
                f,
                "input",
                &def.name,
                def.description.as_deref(),
                &def.fields,
            ),
            Definition::Enum(def) => {
                write_description(f, def.description.as_deref(), "")?;
                writeln!(f, "enum {} {{", def.name)?;
                for value in &def.values {
                    write_description(f, value.description.as_deref(), "  ")?;
                    writeln!(f, "  {}", value.name)?;
                }
                write!(f, "}}")
            }
            Definition::Union(def) => {
                write_description(f, def.description.as_deref(), "")?;
                write!(f, "union {} = {}", def.name, def.types.join(" | "))
            }
            Definition::Scalar(def) => write!(f, "scalar {}", def.name),
            Definition::Schema(def) => {
                writeln!(f, "schema {{")?;
                for op in &def.operations {
                    writeln!(f, "  {}: {}", op.operation, op.type_name)?;
                }
                write!(f, "}}")
            }
            Definition::Other { source, .. } => f.write_str(source),
        }
    }
}
