//! Check descriptors: the declarative vocabulary missions are written in.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Storage operations checkable on a Soroban contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageOp {
    Get,
    Set,
    Has,
    Remove,
}

impl StorageOp {
    pub fn as_str(self) -> &'static str {
        match self {
            StorageOp::Get => "get",
            StorageOp::Set => "set",
            StorageOp::Has => "has",
            StorageOp::Remove => "remove",
        }
    }
}

impl fmt::Display for StorageOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single declarative check against submitted source text.
///
/// Checks are immutable configuration values declared per mission and
/// evaluated independently of each other. The YAML form is tagged by `type`:
///
/// ```yaml
/// - type: has_function
///   name: hello
///   params: ["env", "to"]
///   message: "Function 'hello' not found or missing parameters (env, to)"
/// ```
///
/// `message` overrides the failure text; `description` (where present)
/// replaces the raw pattern in success text. The trailing `Unknown` variant
/// absorbs unrecognized `type` tags so a typo in mission config degrades to a
/// failing verdict instead of a load error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Check {
    /// A literal substring must be present.
    ContainsPattern {
        pattern: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },

    /// A literal substring must be absent.
    NoPattern {
        pattern: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },

    /// A function declaration with the given name must exist; if `params` is
    /// non-empty, each fragment must appear in its parameter list.
    HasFunction {
        name: String,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        params: Vec<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },

    /// The named function must declare the given return type.
    ReturnsType {
        function: String,
        return_type: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },

    /// A `#[...]` attribute starting with the given name must exist.
    HasAttribute {
        attribute: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },

    /// A whole-word occurrence of the type identifier must exist.
    UsesType {
        type_name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },

    /// An `env.storage().<scope>().<op>` call chain must exist, where scope
    /// is any of persistent/temporary/instance.
    StorageOperation {
        operation: StorageOp,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },

    /// A struct declaration with the given name must exist.
    HasStruct {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },

    /// `{`/`}` nesting never goes negative and ends at zero.
    BalancedBraces {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },

    /// A `use <module>` import statement must exist.
    HasImport {
        module: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },

    /// Catch-all for unrecognized check kinds; always fails at evaluation.
    #[serde(untagged)]
    Unknown(serde_yaml::Value),
}

impl Check {
    /// The `type` tag of this check, for diagnostics.
    pub fn kind(&self) -> &str {
        match self {
            Check::ContainsPattern { .. } => "contains_pattern",
            Check::NoPattern { .. } => "no_pattern",
            Check::HasFunction { .. } => "has_function",
            Check::ReturnsType { .. } => "returns_type",
            Check::HasAttribute { .. } => "has_attribute",
            Check::UsesType { .. } => "uses_type",
            Check::StorageOperation { .. } => "storage_operation",
            Check::HasStruct { .. } => "has_struct",
            Check::BalancedBraces { .. } => "balanced_braces",
            Check::HasImport { .. } => "has_import",
            Check::Unknown(value) => value
                .as_mapping()
                .and_then(|m| m.get("type"))
                .and_then(|t| t.as_str())
                .unwrap_or("unknown"),
        }
    }
}
