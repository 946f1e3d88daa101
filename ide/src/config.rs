//! Configuration knobs for completion and the structure view.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default for `StructureConfig.max_label_len`.
pub const DEFAULT_MAX_LABEL_LEN: usize = 50;

/// Julia language versions with their own builtin symbol list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dialect {
    V06,
    V10,
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dialect::V06 => f.write_str("0.6"),
            Dialect::V10 => f.write_str("1.0"),
        }
    }
}

/// Where a builtin symbol list (one name per line) comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BuiltinSource {
    /// The list shipped in `ide/data`.
    #[default]
    Bundled,
    Path(PathBuf),
    Inline(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuiltinSources {
    pub v06: BuiltinSource,
    pub v10: BuiltinSource,
}

impl BuiltinSources {
    pub fn get(&self, dialect: Dialect) -> &BuiltinSource {
        match dialect {
            Dialect::V06 => &self.v06,
            Dialect::V10 => &self.v10,
        }
    }
}

/// Configuration for `CompletionEngine`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompletionConfig {
    pub builtins: BuiltinSources,
    /// Apply the priority sort before returning (hosts that sort themselves turn this off).
    pub sort: bool,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            builtins: BuiltinSources::default(),
            sort: true,
        }
    }
}

/// Configuration for `structure::project_with`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StructureConfig {
    /// Labels longer than this many chars are cut and suffixed with `…`.
    pub max_label_len: usize,
}

impl Default for StructureConfig {
    fn default() -> Self {
        Self {
            max_label_len: DEFAULT_MAX_LABEL_LEN,
        }
    }
}
