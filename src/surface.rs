//! Presentation changes and the surfaces that apply them.
//!
//! State transitions never touch a host directly. They return [`Change`]
//! values describing class toggles and slot writes; a [`Surface`] applies
//! them. [`DocumentState`] is the in-memory surface used by the headless
//! driver, the HTML snapshot and the tests.

use crate::manifest::Manifest;
use crate::types::{ALL, ItemId, Slot};

/// One presentation mutation produced by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    /// Toggle the `hidden` classification of an item.
    ItemVisible { item: ItemId, visible: bool },
    /// Staggered reveal delay for a visible item.
    ItemDelay { item: ItemId, delay_ms: u32 },
    /// Toggle `active` on a filter trigger (index into the manifest filters).
    FilterActive { filter: usize, active: bool },
    /// Toggle `open` on the modal container.
    ModalOpen(bool),
    /// Write the modal's image source, alt text and caption.
    Slot(Slot),
    /// Toggle `active` on a concept tab and its slider.
    ConceptActive { concept: usize, active: bool },
    /// Toggle `active` on a slide and its dot.
    SlideActive {
        concept: usize,
        slide: usize,
        active: bool,
    },
}

/// Anything that can apply presentation changes.
pub trait Surface {
    fn apply(&mut self, change: &Change);

    fn apply_all(&mut self, changes: &[Change]) {
        for change in changes {
            self.apply(change);
        }
    }
}

/// Presentation of a single gallery item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemPresentation {
    pub visible: bool,
    pub delay_ms: u32,
}

/// In-memory model of the fixed document's presentation state.
///
/// Initial state mirrors the page as first rendered: every item visible, the
/// `"all"` trigger active, the modal closed with an empty slot, the first
/// concept tab active and every slider on its first slide.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentState {
    pub items: Vec<ItemPresentation>,
    pub filters: Vec<bool>,
    pub modal_open: bool,
    pub slot: Slot,
    pub concepts: Vec<bool>,
    pub slides: Vec<Vec<bool>>,
}

impl DocumentState {
    pub fn new(manifest: &Manifest) -> Self {
        Self {
            items: manifest
                .items
                .iter()
                .map(|_| ItemPresentation {
                    visible: true,
                    delay_ms: 0,
                })
                .collect(),
            filters: manifest.filters.iter().map(|f| f == ALL).collect(),
            modal_open: false,
            slot: Slot::default(),
            concepts: (0..manifest.concepts.len()).map(|i| i == 0).collect(),
            slides: manifest
                .concepts
                .iter()
                .map(|c| (0..c.slides.len()).map(|i| i == 0).collect())
                .collect(),
        }
    }

    /// Ids of the items currently classified visible, in collection order.
    pub fn visible_items(&self) -> Vec<ItemId> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, p)| p.visible)
            .map(|(i, _)| ItemId(i))
            .collect()
    }

    /// Indices of the filter triggers currently marked active.
    pub fn active_filters(&self) -> Vec<usize> {
        self.filters
            .iter()
            .enumerate()
            .filter(|(_, active)| **active)
            .map(|(i, _)| i)
            .collect()
    }
}

impl Surface for DocumentState {
    // Changes addressing elements the document does not have are dropped.
    fn apply(&mut self, change: &Change) {
        match change {
            Change::ItemVisible { item, visible } => {
                if let Some(p) = self.items.get_mut(item.0) {
                    p.visible = *visible;
                }
            }
            Change::ItemDelay { item, delay_ms } => {
                if let Some(p) = self.items.get_mut(item.0) {
                    p.delay_ms = *delay_ms;
                }
            }
            Change::FilterActive { filter, active } => {
                if let Some(f) = self.filters.get_mut(*filter) {
                    *f = *active;
                }
            }
            Change::ModalOpen(open) => self.modal_open = *open,
            Change::Slot(slot) => self.slot = slot.clone(),
            Change::ConceptActive { concept, active } => {
                if let Some(c) = self.concepts.get_mut(*concept) {
                    *c = *active;
                }
            }
            Change::SlideActive {
                concept,
                slide,
                active,
            } => {
                if let Some(s) = self
                    .slides
                    .get_mut(*concept)
                    .and_then(|slides| slides.get_mut(*slide))
                {
                    *s = *active;
                }
            }
        }
    }
}
