//! Value types for classified files and related-file candidates.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::domain::errors::DomainError;

/// Fixed set of file conventions recognized in an Ember-style project layout.
///
/// The string keys double as stable identifiers on the CLI surface and as the
/// labels shown in the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FileCategory {
    ComponentScript,
    ComponentTemplate,
    ComponentStyle,
    RouteScript,
    ControllerScript,
    ControllerTemplate,
}

impl FileCategory {
    /// Every category, in a stable order. Useful for table-coverage checks.
    pub const ALL: [FileCategory; 6] = [
        FileCategory::ComponentScript,
        FileCategory::ComponentTemplate,
        FileCategory::ComponentStyle,
        FileCategory::RouteScript,
        FileCategory::ControllerScript,
        FileCategory::ControllerTemplate,
    ];

    /// Stable string key for this category.
    pub fn key(self) -> &'static str {
        match self {
            FileCategory::ComponentScript => "component-script",
            FileCategory::ComponentTemplate => "component-template",
            FileCategory::ComponentStyle => "component-style",
            FileCategory::RouteScript => "route-script",
            FileCategory::ControllerScript => "controller-script",
            FileCategory::ControllerTemplate => "controller-template",
        }
    }
}

impl fmt::Display for FileCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for FileCategory {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        FileCategory::ALL
            .into_iter()
            .find(|category| category.key() == value)
            .ok_or_else(|| DomainError::UnknownCategory(value.to_owned()))
    }
}

/// A project-relative path that matched one of the recognized conventions.
///
/// `part` is the logical feature name shared by every file belonging to the
/// same unit; it is derived from the path and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedFile {
    pub category: FileCategory,
    pub path: String,
    pub part: String,
}

/// One selectable navigation target. The path is synthesized from the source
/// file's part and is not checked for existence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelatedCandidate {
    pub category: FileCategory,
    pub path: String,
}
