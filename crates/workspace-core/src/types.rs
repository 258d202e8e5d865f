//! Core data types for the workspace objects API.
//!
//! The remote service addresses every object by an absolute, slash-separated
//! path. An object is either a notebook or a directory; libraries, files,
//! repos and kinds newer than this crate also show up in listings and are
//! carried through untouched.
//!
//! All wire enums serialize as upper-case strings (`"NOTEBOOK"`, `"PYTHON"`,
//! `"SOURCE"`) and parse case-insensitively through `FromStr`, so the same
//! values can be accepted on a command line.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Enum Types
// ============================================================================

/// Error returned when a wire enum cannot be parsed from a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseEnumError {
    /// Name of the enum being parsed.
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

impl fmt::Display for ParseEnumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} '{}'", self.kind, self.value)
    }
}

impl std::error::Error for ParseEnumError {}

/// Implements `as_str`, `Display` and case-insensitive `FromStr` for a
/// closed, fieldless wire enum.
macro_rules! wire_enum {
    ($ty:ident, $kind:literal, { $($variant:ident => $wire:literal),+ $(,)? }) => {
        impl $ty {
            /// All variants in declaration order.
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            /// The upper-case wire name.
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $($ty::$variant => $wire),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $(
                    if s.eq_ignore_ascii_case($wire) {
                        return Ok($ty::$variant);
                    }
                )+
                Err(ParseEnumError {
                    kind: $kind,
                    value: s.to_string(),
                })
            }
        }
    };
}

/// Declares a wire enum that the service may extend.
///
/// Known names map to their variant; anything else is kept verbatim in
/// `Unknown`, so a response carrying a newer kind still decodes and
/// re-serializes unchanged. `FromStr` stays strict, since it parses user input.
macro_rules! open_wire_enum {
    (
        $(#[$meta:meta])*
        $ty:ident, $kind:literal, { $($variant:ident => $wire:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $ty {
            $($variant,)+
            /// A name this crate does not know about.
            Unknown(String),
        }

        impl $ty {
            /// All known variants in declaration order.
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            /// The wire name.
            #[must_use]
            pub fn as_str(&self) -> &str {
                match self {
                    $($ty::$variant => $wire,)+
                    $ty::Unknown(name) => name,
                }
            }

            /// Map a wire name to a variant, falling back to `Unknown`.
            #[must_use]
            pub fn from_wire(s: &str) -> Self {
                $(
                    if s.eq_ignore_ascii_case($wire) {
                        return $ty::$variant;
                    }
                )+
                $ty::Unknown(s.to_string())
            }

            #[must_use]
            pub fn is_unknown(&self) -> bool {
                matches!(self, $ty::Unknown(_))
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match $ty::from_wire(s) {
                    $ty::Unknown(value) => Err(ParseEnumError { kind: $kind, value }),
                    known => Ok(known),
                }
            }
        }

        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let name = String::deserialize(deserializer)?;
                Ok($ty::from_wire(&name))
            }
        }
    };
}

open_wire_enum!(
    /// Kind of object stored in the workspace.
    ObjectType, "object type", {
        Notebook => "NOTEBOOK",
        Directory => "DIRECTORY",
        Library => "LIBRARY",
        File => "FILE",
        Repo => "REPO",
    }
);

open_wire_enum!(
    /// Notebook language.
    Language, "language", {
        Scala => "SCALA",
        Python => "PYTHON",
        Sql => "SQL",
        R => "R",
    }
);

/// Encoding used when importing or exporting notebook content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ExportFormat {
    /// Plain source code in the notebook's language.
    #[default]
    Source,
    /// Rendered HTML.
    Html,
    /// Jupyter `.ipynb` JSON.
    Jupyter,
    /// Databricks archive.
    Dbc,
}

wire_enum!(ExportFormat, "export format", {
    Source => "SOURCE",
    Html => "HTML",
    Jupyter => "JUPYTER",
    Dbc => "DBC",
});

// ============================================================================
// Object Descriptor
// ============================================================================

/// Metadata for one workspace object, as returned by `get-status` and `list`.
///
/// Only `object_type` and `path` are always present. Directories carry no
/// language, and older deployments omit the timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceObjectStatus {
    /// Notebook, directory, or a pass-through kind.
    pub object_type: ObjectType,

    /// Absolute workspace path.
    pub path: String,

    /// Notebook language, absent for directories.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,

    /// Server-assigned numeric id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_id: Option<i64>,

    /// Creation time in epoch milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,

    /// Last modification time in epoch milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<i64>,
}

impl WorkspaceObjectStatus {
    /// Creates a notebook descriptor with no id or timestamps.
    #[must_use]
    pub fn notebook(path: impl Into<String>, language: Language) -> Self {
        Self {
            object_type: ObjectType::Notebook,
            path: path.into(),
            language: Some(language),
            object_id: None,
            created_at: None,
            modified_at: None,
        }
    }

    /// Creates a directory descriptor with no id or timestamps.
    #[must_use]
    pub fn directory(path: impl Into<String>) -> Self {
        Self {
            object_type: ObjectType::Directory,
            path: path.into(),
            language: None,
            object_id: None,
            created_at: None,
            modified_at: None,
        }
    }

    #[must_use]
    pub fn is_notebook(&self) -> bool {
        self.object_type == ObjectType::Notebook
    }

    #[must_use]
    pub fn is_directory(&self) -> bool {
        self.object_type == ObjectType::Directory
    }

    /// Last path segment, or the full path for the root.
    #[must_use]
    pub fn name(&self) -> &str {
        self.path
            .rsplit('/')
            .find(|segment| !segment.is_empty())
            .unwrap_or(&self.path)
    }

    /// Creation time, if the server reported one.
    #[must_use]
    pub fn created(&self) -> Option<DateTime<Utc>> {
        self.created_at.and_then(DateTime::from_timestamp_millis)
    }

    /// Modification time, if the server reported one.
    #[must_use]
    pub fn modified(&self) -> Option<DateTime<Utc>> {
        self.modified_at.and_then(DateTime::from_timestamp_millis)
    }
}

// ============================================================================
// Request / Response Envelopes
// ============================================================================

/// Body of `POST /workspace/import`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotebookImportRequest {
    /// Base64-encoded notebook content.
    pub content: String,
    pub path: String,
    /// Required for `SOURCE` imports, ignored by the server otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
    pub format: ExportFormat,
    #[serde(default)]
    pub overwrite: bool,
}

/// Body of `POST /workspace/delete`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotebookDeleteRequest {
    pub path: String,
    #[serde(default)]
    pub recursive: bool,
}

/// Single-path envelope shared by `get-status`, `mkdirs` and `list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathRequest {
    pub path: String,
}

impl PathRequest {
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

/// Query of `GET /workspace/export`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRequest {
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<ExportFormat>,
}

/// Response of `GET /workspace/export`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotebookContent {
    /// Base64-encoded content in the requested format.
    pub content: String,
    /// File extension hint sent by newer deployments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_type: Option<String>,
}

/// Response of `GET /workspace/list`.
///
/// The server drops `objects` entirely for an empty directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListResponse {
    #[serde(default)]
    pub objects: Vec<WorkspaceObjectStatus>,
}

// ============================================================================
// Tests
// ============================================================================
