//! SADL source rendering.

use std::fmt;

use crate::model::{FieldDef, Schema, TypeDef, TypeSpec};

const INDENT: &str = "    ";

/// Render a schema as SADL source text.
pub fn decompile(schema: &Schema) -> String {
    schema.to_string()
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "name {}", self.name)?;
        for td in &self.types {
            writeln!(f)?;
            write_type(f, td)?;
        }
        Ok(())
    }
}

fn write_type(f: &mut fmt::Formatter<'_>, td: &TypeDef) -> fmt::Result {
    if !td.comment.is_empty() {
        writeln!(f, "// {}", td.comment)?;
    }
    match &td.spec {
        TypeSpec::Struct { fields } => {
            writeln!(f, "type {} Struct {{", td.name)?;
            for field in fields {
                write_field(f, field)?;
            }
            writeln!(f, "}}")
        }
        TypeSpec::Enum { elements } => {
            writeln!(f, "type {} Enum {{", td.name)?;
            for element in elements {
                write!(f, "{INDENT}{}", element.symbol)?;
                write_trailing_comment(f, &element.comment)?;
            }
            writeln!(f, "}}")
        }
        TypeSpec::Union { variants } => {
            writeln!(f, "type {} Union<{}>", td.name, variants.join(","))
        }
    }
}

fn write_field(f: &mut fmt::Formatter<'_>, field: &FieldDef) -> fmt::Result {
    write!(f, "{INDENT}{} ", field.name)?;
    match &field.items {
        Some(items) => write!(f, "{}<{}>", field.field_type, items)?,
        None => write!(f, "{}", field.field_type)?,
    }
    if field.required {
        write!(f, " (required)")?;
    }
    write_trailing_comment(f, &field.comment)
}

fn write_trailing_comment(f: &mut fmt::Formatter<'_>, comment: &str) -> fmt::Result {
    if comment.is_empty() {
        writeln!(f)
    } else {
        writeln!(f, " // {comment}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EnumElement;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_schema_prints_name_only() {
        assert_eq!(decompile(&Schema::new("empty")), "name empty\n");
    }

    #[test]
    fn test_decompile_all_kinds() {
        let schema = Schema {
            name: "generatedFromGraphQL".to_string(),
            types: vec![
                TypeDef {
                    name: "Person".to_string(),
                    comment: "A person".to_string(),
                    spec: TypeSpec::Struct {
                        fields: vec![
                            FieldDef::value("name", "full name", "String", true),
                            FieldDef::array("friends", "", "Person", false),
                        ],
                    },
                },
                TypeDef {
                    name: "Color".to_string(),
                    comment: String::new(),
                    spec: TypeSpec::Enum {
                        elements: vec![
                            EnumElement {
                                symbol: "RED".to_string(),
                                comment: String::new(),
                            },
                            EnumElement {
                                symbol: "GREEN".to_string(),
                                comment: "grass".to_string(),
                            },
                        ],
                    },
                },
                TypeDef {
                    name: "Pet".to_string(),
                    comment: String::new(),
                    spec: TypeSpec::Union {
                        variants: vec!["Cat".to_string(), "Dog".to_string()],
                    },
                },
            ],
        };

        let expected = "\
name generatedFromGraphQL

// A person
type Person Struct {
    name String (required) // full name
    friends Array<Person>
}

type Color Enum {
    RED
    GREEN // grass
}

type Pet Union<Cat,Dog>
";
        assert_eq!(decompile(&schema), expected);
    }
}
