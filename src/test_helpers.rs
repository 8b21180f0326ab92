//! Shared test utilities for the folio-gallery test suite.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let manifest = manifest_with_tags(&["A", "A", "B"]);
//! assert_eq!(manifest.items[2].image.src, "img/3.jpg");
//!
//! let fixture = fixture_manifest();
//! assert_eq!(fixture.filters[0], "all");
//! ```

use std::path::{Path, PathBuf};

use crate::manifest::{Manifest, load_manifest, parse_manifest};

// =========================================================================
// Fixtures
// =========================================================================

pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(name)
}

/// The six-item, three-concept gallery in `fixtures/gallery.json`.
pub fn fixture_manifest() -> Manifest {
    load_manifest(&fixture_path("gallery.json")).unwrap()
}

// =========================================================================
// Synthetic manifests
// =========================================================================

/// Manifest JSON with one item per tag and no explicit filters.
///
/// Item `n` (1-based) gets `src = "img/n.jpg"`, `alt = "Item n"`,
/// `caption = "Caption n"`.
pub fn items_json(tags: &[&str]) -> String {
    let items: Vec<serde_json::Value> = tags
        .iter()
        .enumerate()
        .map(|(i, tag)| {
            serde_json::json!({
                "tag": tag,
                "src": format!("img/{}.jpg", i + 1),
                "alt": format!("Item {}", i + 1),
                "caption": format!("Caption {}", i + 1),
            })
        })
        .collect();
    serde_json::json!({ "items": items }).to_string()
}

/// Parsed [`items_json`]. Filters default to `"all"` plus each distinct tag.
pub fn manifest_with_tags(tags: &[&str]) -> Manifest {
    parse_manifest(&items_json(tags)).unwrap()
}
