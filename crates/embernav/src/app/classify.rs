//! Path classification against the fixed naming-convention table.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::model::{ClassifiedFile, FileCategory};

/// Convention data for one category: how a path is detected and how one is
/// built. Centralizing detection, synthesis, and relation in a single table
/// keeps the three views of a category consistent.
pub(crate) struct CategoryRule {
    pub(crate) category: FileCategory,
    /// Anchored detection pattern with exactly one capture group yielding the
    /// part. Synthesis-only categories carry no pattern.
    pub(crate) pattern: Option<&'static str>,
    /// Path template with a `{part}` placeholder, the inverse of `pattern`.
    pub(crate) template: &'static str,
    /// Categories offered as navigation targets, in display order.
    pub(crate) related: &'static [FileCategory],
}

/// Table order is evaluation order for classification; first match wins.
/// The nested template pattern (`app/templates/components/`) must stay ahead
/// of the bare template pattern, which also matches those paths.
pub(crate) const RULES: &[CategoryRule] = &[
    CategoryRule {
        category: FileCategory::ComponentScript,
        pattern: Some(r"^app/components/(.+)\.js$"),
        template: "app/components/{part}.js",
        related: &[FileCategory::ComponentTemplate, FileCategory::ComponentStyle],
    },
    CategoryRule {
        category: FileCategory::RouteScript,
        pattern: Some(r"^app/routes/(.+)\.js$"),
        template: "app/routes/{part}.js",
        related: &[
            FileCategory::ControllerScript,
            FileCategory::ControllerTemplate,
        ],
    },
    CategoryRule {
        category: FileCategory::ControllerScript,
        pattern: Some(r"^app/controllers/(.+)\.js$"),
        template: "app/controllers/{part}.js",
        related: &[FileCategory::ControllerTemplate, FileCategory::RouteScript],
    },
    CategoryRule {
        category: FileCategory::ComponentTemplate,
        pattern: Some(r"^app/templates/components/(.+)\.hbs$"),
        template: "app/templates/components/{part}.hbs",
        related: &[FileCategory::ComponentScript, FileCategory::ComponentStyle],
    },
    CategoryRule {
        category: FileCategory::ControllerTemplate,
        pattern: Some(r"^app/templates/(.+)\.hbs$"),
        template: "app/templates/{part}.hbs",
        related: &[FileCategory::ControllerScript, FileCategory::RouteScript],
    },
    // Style files are reachable only as navigation targets; there is no
    // detection rule for them, so classifying one yields no result.
    CategoryRule {
        category: FileCategory::ComponentStyle,
        pattern: None,
        template: "app/styles/components/{part}.scss",
        related: &[
            FileCategory::ComponentScript,
            FileCategory::ComponentTemplate,
        ],
    },
];

static DETECTORS: Lazy<Vec<(FileCategory, Regex)>> = Lazy::new(|| {
    RULES
        .iter()
        .filter_map(|rule| {
            rule.pattern
                .map(|pattern| (rule.category, Regex::new(pattern).expect("valid rule pattern")))
        })
        .collect()
});

/// Look up the convention data for a category.
pub(crate) fn rule(category: FileCategory) -> Option<&'static CategoryRule> {
    RULES.iter().find(|rule| rule.category == category)
}

/// Classify a project-relative, forward-slash path against the convention
/// table. `None` means the path follows no known convention, an expected
/// outcome for arbitrary files rather than an error.
pub fn classify(path: &str) -> Option<ClassifiedFile> {
    for (category, detector) in DETECTORS.iter() {
        if let Some(captures) = detector.captures(path) {
            let part = captures.get(1)?.as_str().to_owned();
            return Some(ClassifiedFile {
                category: *category,
                path: path.to_owned(),
                part,
            });
        }
    }
    None
}
