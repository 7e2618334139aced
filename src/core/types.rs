//! Shared domain types for vault operations.

use std::fmt;
use std::str::FromStr;

/// Patch semantics: where new content lands relative to the target anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOperation {
    Append,
    Prepend,
    Replace,
}

impl PatchOperation {
    /// Header value for the `Operation` header
    pub fn as_str(&self) -> &'static str {
        match self {
            PatchOperation::Append => "append",
            PatchOperation::Prepend => "prepend",
            PatchOperation::Replace => "replace",
        }
    }

    pub const ALLOWED: [&'static str; 3] = ["append", "prepend", "replace"];
}

impl FromStr for PatchOperation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "append" => Ok(PatchOperation::Append),
            "prepend" => Ok(PatchOperation::Prepend),
            "replace" => Ok(PatchOperation::Replace),
            other => Err(format!(
                "Invalid operation '{}'. Allowed values: {}",
                other,
                PatchOperation::ALLOWED.join(", ")
            )),
        }
    }
}

impl fmt::Display for PatchOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Anchor kind a patch targets inside a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchTargetType {
    Heading,
    Block,
    Frontmatter,
}

impl PatchTargetType {
    /// Header value for the `Target-Type` header
    pub fn as_str(&self) -> &'static str {
        match self {
            PatchTargetType::Heading => "heading",
            PatchTargetType::Block => "block",
            PatchTargetType::Frontmatter => "frontmatter",
        }
    }

    pub const ALLOWED: [&'static str; 3] = ["heading", "block", "frontmatter"];
}

impl FromStr for PatchTargetType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "heading" => Ok(PatchTargetType::Heading),
            "block" => Ok(PatchTargetType::Block),
            "frontmatter" => Ok(PatchTargetType::Frontmatter),
            other => Err(format!(
                "Invalid target_type '{}'. Allowed values: {}",
                other,
                PatchTargetType::ALLOWED.join(", ")
            )),
        }
    }
}

impl fmt::Display for PatchTargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
