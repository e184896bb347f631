//! Configuration for schema translation.

use serde::{Deserialize, Serialize};

/// Name given to the output schema when none is configured.
pub const DEFAULT_SCHEMA_NAME: &str = "generatedFromGraphQL";

/// How operation root types declared in `schema { ... }` are excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RootTypeScan {
    /// Collect every root type name before translating. Exclusion does not
    /// depend on where the schema declaration appears.
    Upfront,
    /// Add root type names to the ignore set as the declaration is reached.
    /// Object types that precede their `schema` declaration are emitted.
    InOrder,
}

/// Options for schema translation.
///
/// Fields are serialized in `kebab-case` (e.g. `schema-name`, `root-types`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TranslateOptions {
    /// Name of the generated SADL schema. Default: `generatedFromGraphQL`.
    pub schema_name: String,
    /// Root type exclusion policy. Default: `Upfront`.
    pub root_types: RootTypeScan,
}

impl Default for TranslateOptions {
    fn default() -> Self {
        Self {
            schema_name: DEFAULT_SCHEMA_NAME.to_string(),
            root_types: RootTypeScan::Upfront,
        }
    }
}
