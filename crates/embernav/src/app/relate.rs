//! Related-category lookup and path synthesis.

use crate::app::classify::{self, classify};
use crate::domain::model::{FileCategory, RelatedCandidate};

/// Categories considered related to `category`, in display order.
///
/// The table is intentionally asymmetric in places (a route's related set
/// differs from a controller's); it mirrors the project convention rather
/// than a symmetric closure. Categories without a table entry yield an empty
/// sequence.
pub fn related_categories(category: FileCategory) -> &'static [FileCategory] {
    match classify::rule(category) {
        Some(rule) => rule.related,
        None => &[],
    }
}

/// Build the canonical project-relative path for `part` in `category`.
///
/// This is the exact left-inverse of classification: for every detectable
/// category, classifying the synthesized path recovers the same category and
/// part.
pub fn synthesize_path(part: &str, category: FileCategory) -> String {
    classify::rule(category).map_or_else(String::new, |rule| {
        rule.template.replace("{part}", part)
    })
}

/// Expand a path into its related-file candidates.
///
/// Returns an empty list when the path follows no known convention. Every
/// candidate carries the source file's part, so the logical identity is
/// preserved across category boundaries.
pub fn related_files(path: &str) -> Vec<RelatedCandidate> {
    let Some(classified) = classify(path) else {
        return Vec::new();
    };

    related_categories(classified.category)
        .iter()
        .map(|&category| RelatedCandidate {
            category,
            path: synthesize_path(&classified.part, category),
        })
        .collect()
}

/// Render candidates as aligned `<label>  <path>` lines, the plain listing
/// printed by the CLI. Labels are the stable category keys.
pub fn format_listing(candidates: &[RelatedCandidate]) -> String {
    let width = candidates
        .iter()
        .map(|candidate| candidate.category.key().len())
        .max()
        .unwrap_or(0);

    candidates
        .iter()
        .map(|candidate| {
            format!(
                "{:width$}  {}",
                candidate.category.key(),
                candidate.path,
                width = width
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
