//! Translate GraphQL SDL schemas into SADL type definitions.
//!
//! The pipeline is parse → translate → validate:
//!
//! ```no_run
//! use graphql2sadl_core::{convert, decompile, TranslateOptions};
//!
//! let sdl = "type User { id: ID! tags: [String] }";
//! let schema = convert(sdl, &TranslateOptions::default())?;
//! println!("{}", decompile(&schema));
//! # Ok::<(), graphql2sadl_core::TranslateError>(())
//! ```
//!
//! [`translate`] alone is pure: it takes an already parsed [`Document`] and
//! performs no validation.

pub mod ast;
pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod printer;
pub mod translate;
pub mod validate;

pub use ast::Document;
pub use config::{RootTypeScan, TranslateOptions};
pub use error::{ErrorCode, TranslateError};
pub use model::{EnumElement, FieldDef, Schema, TypeDef, TypeSpec};
pub use parser::parse_document;
pub use printer::decompile;
pub use translate::translate;
pub use validate::{validate, ValidationError};

/// Parse SDL text, translate it, and validate the result.
pub fn convert(sdl: &str, options: &TranslateOptions) -> Result<Schema, TranslateError> {
    let doc = parse_document(sdl)?;
    let schema = translate(&doc, options)?;
    validate(&schema)?;
    Ok(schema)
}

/// Serialize a schema to the SADL JSON model.
pub fn to_json(schema: &Schema, pretty: bool) -> Result<String, TranslateError> {
    let json = if pretty {
        serde_json::to_string_pretty(schema)?
    } else {
        serde_json::to_string(schema)?
    };
    Ok(json)
}
