//! Related-file navigation for Ember-style projects.
//!
//! The core maps a project-relative path to its logical part and category,
//! then derives the sibling files that belong to the same unit. Everything
//! else (config, picker, editor) hangs off that pure core.

pub mod app;
pub mod domain;
pub mod infra;
pub mod ui;

pub use app::classify::classify;
pub use app::relate::{format_listing, related_categories, related_files, synthesize_path};
pub use domain::model::{ClassifiedFile, FileCategory, RelatedCandidate};

/// Install the global tracing subscriber, writing diagnostics to stderr so
/// stdout stays reserved for command output.
pub fn init() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();
}
