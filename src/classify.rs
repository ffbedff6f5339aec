//! Keyword tag classifier
//!
//! Case-insensitive substring rules over the commit message, plus an
//! extension check over the changed files.

use std::path::Path;

use crate::model::{Tag, TagSet};

/// File extensions counted as source code (lowercase, without the dot)
pub const CODE_EXTENSIONS: &[&str] = &[
    "rs", "py", "js", "jsx", "ts", "tsx", "go", "java", "kt", "kts", "scala", "c", "h", "cc",
    "cpp", "cxx", "hpp", "cs", "swift", "rb", "php", "sh", "bash", "zsh", "lua", "hs", "ml",
    "ex", "exs", "erl", "clj", "dart", "r", "jl", "pl", "sql", "vue", "svelte", "zig",
];

/// Message keywords and the tag each one produces
const MESSAGE_RULES: &[(&str, Tag)] = &[
    ("readme", Tag::Documentation),
    ("fix", Tag::Bugfix),
    ("bug", Tag::Bugfix),
    ("test", Tag::Test),
];

/// Derive tags from a commit message and its changed files
pub fn classify(message: Option<&str>, changed_files: &[String]) -> TagSet {
    let mut tags = TagSet::new();

    if let Some(message) = message {
        let lower = message.to_lowercase();
        for (keyword, tag) in MESSAGE_RULES {
            if lower.contains(keyword) {
                tags.insert(*tag);
            }
        }
    }

    if changed_files.iter().any(|f| is_code_file(f)) {
        tags.insert(Tag::Code);
    }

    tags
}

/// Check whether a path has a recognized source-code extension
pub fn is_code_file(path: &str) -> bool {
    Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            let ext = ext.to_ascii_lowercase();
            CODE_EXTENSIONS.contains(&ext.as_str())
        })
}
