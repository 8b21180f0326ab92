//! Gallery manifest loading: the one-time binding step.
//!
//! The host document is described by a `gallery.json` file. Loading it
//! captures every item, filter trigger and concept slider up front, so the
//! viewer's transitions never go back to the document to look anything up.
//!
//! ## Format
//!
//! ```json
//! {
//!   "filters": ["all", "portrait", "street"],
//!   "items": [
//!     { "tag": "portrait", "src": "img/p1.jpg", "alt": "Sara", "caption": "Studio, 2023" },
//!     { "tag": "street", "src": "img/s1.jpg", "alt": "Crossing", "caption": "Shibuya" }
//!   ],
//!   "concepts": [
//!     { "id": "light", "label": "Light", "slides": [ { "src": "img/l1.jpg", "caption": "Dawn" } ] }
//!   ]
//! }
//! ```
//!
//! When `filters` is omitted it defaults to `"all"` followed by each distinct
//! item tag in order of first appearance.
//!
//! ## Validation
//!
//! - Every item tag is non-empty and is not the wildcard `"all"`
//! - Filter values are non-empty and unique
//! - Items, slides and concepts carry no unknown keys
//! - Concept ids are unique and non-empty

use crate::types::{ALL, ImageRef, Item, ItemId};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Item {0} has an empty tag")]
    EmptyTag(ItemId),
    #[error("Item {0} uses the reserved tag \"all\"")]
    ReservedTag(ItemId),
    #[error("Filter value is empty")]
    EmptyFilter,
    #[error("Duplicate filter value: {0}")]
    DuplicateFilter(String),
    #[error("Concept has an empty id")]
    EmptyConceptId,
    #[error("Duplicate concept id: {0}")]
    DuplicateConcept(String),
}

/// The bound document: everything the viewer and sliders operate on.
#[derive(Debug, Clone)]
pub struct Manifest {
    pub items: Vec<Item>,
    pub filters: Vec<String>,
    pub concepts: Vec<Concept>,
}

/// One tab of the concept strip and the slides of its slider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Concept {
    pub id: String,
    pub label: String,
    pub slides: Vec<Slide>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub image: ImageRef,
    pub caption: String,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawManifest {
    items: Vec<RawItem>,
    filters: Option<Vec<String>>,
    #[serde(default)]
    concepts: Vec<RawConcept>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawItem {
    tag: String,
    src: String,
    #[serde(default)]
    alt: String,
    #[serde(default)]
    caption: String,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConcept {
    id: String,
    #[serde(default)]
    label: String,
    #[serde(default)]
    slides: Vec<RawSlide>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSlide {
    src: String,
    #[serde(default)]
    alt: String,
    #[serde(default)]
    caption: String,
}

impl From<RawConcept> for Concept {
    fn from(raw: RawConcept) -> Self {
        Self {
            id: raw.id,
            label: raw.label,
            slides: raw
                .slides
                .into_iter()
                .map(|slide| Slide {
                    image: ImageRef {
                        src: slide.src,
                        alt: slide.alt,
                    },
                    caption: slide.caption,
                })
                .collect(),
        }
    }
}

/// Load and validate a manifest file.
pub fn load_manifest(path: &Path) -> Result<Manifest, ManifestError> {
    let content = fs::read_to_string(path)?;
    parse_manifest(&content)
}

/// Parse and validate manifest JSON.
pub fn parse_manifest(content: &str) -> Result<Manifest, ManifestError> {
    let raw: RawManifest = serde_json::from_str(content)?;

    let items: Vec<Item> = raw
        .items
        .into_iter()
        .enumerate()
        .map(|(index, raw)| Item {
            id: ItemId(index),
            tag: raw.tag,
            image: ImageRef {
                src: raw.src,
                alt: raw.alt,
            },
            caption: raw.caption,
        })
        .collect();

    for item in &items {
        if item.tag.trim().is_empty() {
            return Err(ManifestError::EmptyTag(item.id));
        }
        if item.tag == ALL {
            return Err(ManifestError::ReservedTag(item.id));
        }
    }

    let filters = match raw.filters {
        Some(filters) => {
            let mut seen = HashSet::new();
            for filter in &filters {
                if filter.trim().is_empty() {
                    return Err(ManifestError::EmptyFilter);
                }
                if !seen.insert(filter.as_str()) {
                    return Err(ManifestError::DuplicateFilter(filter.clone()));
                }
            }
            filters
        }
        None => default_filters(&items),
    };

    let mut concept_ids = HashSet::new();
    for concept in &raw.concepts {
        if concept.id.is_empty() {
            return Err(ManifestError::EmptyConceptId);
        }
        if !concept_ids.insert(concept.id.as_str()) {
            return Err(ManifestError::DuplicateConcept(concept.id.clone()));
        }
    }

    Ok(Manifest {
        items,
        filters,
        concepts: raw.concepts.into_iter().map(Concept::from).collect(),
    })
}

/// `"all"` followed by each distinct tag in order of first appearance.
pub fn default_filters(items: &[Item]) -> Vec<String> {
    let mut filters = vec![ALL.to_string()];
    for item in items {
        if !filters.contains(&item.tag) {
            filters.push(item.tag.clone());
        }
    }
    filters
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;

    #[test]
    fn items_get_positional_ids() {
        let manifest = fixture_manifest();
        for (index, item) in manifest.items.iter().enumerate() {
            assert_eq!(item.id, ItemId(index));
        }
    }

    #[test]
    fn explicit_filters_are_kept_in_order() {
        let manifest = fixture_manifest();
        assert_eq!(manifest.filters, ["all", "portrait", "street", "nature"]);
    }

    #[test]
    fn missing_filters_default_to_tags_in_order() {
        let manifest = parse_manifest(&items_json(&["B", "A", "B", "C"])).unwrap();
        assert_eq!(manifest.filters, ["all", "B", "A", "C"]);
    }

    #[test]
    fn empty_tag_is_rejected() {
        let err = parse_manifest(&items_json(&["A", " "])).unwrap_err();
        assert!(matches!(err, ManifestError::EmptyTag(ItemId(1))));
    }

    #[test]
    fn wildcard_tag_is_rejected() {
        let err = parse_manifest(&items_json(&["all"])).unwrap_err();
        assert!(matches!(err, ManifestError::ReservedTag(ItemId(0))));
    }

    #[test]
    fn duplicate_filter_is_rejected() {
        let json = r#"{"filters":["all","A","A"],"items":[{"tag":"A","src":"a.jpg"}]}"#;
        let err = parse_manifest(json).unwrap_err();
        assert!(matches!(err, ManifestError::DuplicateFilter(f) if f == "A"));
    }

    #[test]
    fn empty_filter_is_rejected() {
        let json = r#"{"filters":["all",""],"items":[{"tag":"A","src":"a.jpg"}]}"#;
        let err = parse_manifest(json).unwrap_err();
        assert!(matches!(err, ManifestError::EmptyFilter));
    }

    #[test]
    fn item_fields_bind_to_image_and_caption() {
        let json = r#"{"items":[{"tag":"nature","src":"n.jpg","alt":"Fern","caption":"Moss"}]}"#;
        let item = &parse_manifest(json).unwrap().items[0];
        assert_eq!(item.image.src, "n.jpg");
        assert_eq!(item.image.alt, "Fern");
        assert_eq!(item.caption, "Moss");
    }

    #[test]
    fn misspelled_item_key_is_rejected() {
        let json = r#"{"items":[{"tag":"A","src":"a.jpg","captoin":"typo"}]}"#;
        let err = parse_manifest(json).unwrap_err();
        assert!(matches!(err, ManifestError::Json(_)));
    }

    #[test]
    fn misspelled_slide_key_is_rejected() {
        let json = r#"{"items":[],"concepts":[{"id":"x","slides":[{"src":"s.jpg","capton":"t"}]}]}"#;
        assert!(matches!(parse_manifest(json), Err(ManifestError::Json(_))));
    }

    #[test]
    fn duplicate_concept_is_rejected() {
        let json = r#"{"items":[],"concepts":[{"id":"x"},{"id":"x"}]}"#;
        let err = parse_manifest(json).unwrap_err();
        assert!(matches!(err, ManifestError::DuplicateConcept(id) if id == "x"));
    }

    #[test]
    fn unknown_top_level_key_is_rejected() {
        let err = parse_manifest(r#"{"items":[],"albums":[]}"#).unwrap_err();
        assert!(matches!(err, ManifestError::Json(_)));
    }

    #[test]
    fn concepts_bind_slides() {
        let manifest = fixture_manifest();
        let light = &manifest.concepts[0];
        assert_eq!(light.id, "light");
        assert_eq!(light.slides.len(), 3);
        assert_eq!(light.slides[0].image.src, "img/concepts/light-1.jpg");
    }

    #[test]
    fn load_reports_missing_file() {
        let err = load_manifest(Path::new("/nonexistent/gallery.json")).unwrap_err();
        assert!(matches!(err, ManifestError::Io(_)));
    }
}
