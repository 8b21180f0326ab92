//! Shared types bound from the gallery manifest.
//!
//! Everything here is read-only after binding: the viewer toggles presentation
//! state *about* these values but never creates, edits or removes them.

use std::fmt;

/// The wildcard filter value. Matches every item and is never a real tag.
pub const ALL: &str = "all";

/// Position of an item in the fixed collection (0-based).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId(pub usize);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // 1-based for humans, matching the CLI `click <n>` syntax
        write!(f, "#{}", self.0 + 1)
    }
}

/// Source locator and alt text for one image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    pub src: String,
    pub alt: String,
}

/// One displayed gallery entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    /// Category tag, e.g. `"portrait"`. Never [`ALL`].
    pub tag: String,
    pub image: ImageRef,
    pub caption: String,
}

impl Item {
    /// Whether this item passes `filter`.
    pub fn matches(&self, filter: &str) -> bool {
        filter == ALL || self.tag == filter
    }
}

/// Contents of the lightbox's single shared display slot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Slot {
    pub src: String,
    pub alt: String,
    pub caption: String,
}

impl Slot {
    pub fn from_item(item: &Item) -> Self {
        Self {
            src: item.image.src.clone(),
            alt: item.image.alt.clone(),
            caption: item.caption.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(tag: &str) -> Item {
        Item {
            id: ItemId(0),
            tag: tag.to_string(),
            image: ImageRef {
                src: "a.jpg".to_string(),
                alt: String::new(),
            },
            caption: String::new(),
        }
    }

    #[test]
    fn wildcard_matches_every_tag() {
        assert!(item("street").matches(ALL));
        assert!(item("portrait").matches(ALL));
    }

    #[test]
    fn tag_matches_only_itself() {
        assert!(item("street").matches("street"));
        assert!(!item("street").matches("Street"));
        assert!(!item("street").matches("portrait"));
    }

    #[test]
    fn item_id_displays_one_based() {
        assert_eq!(ItemId(0).to_string(), "#1");
        assert_eq!(ItemId(11).to_string(), "#12");
    }
}
