//! The gallery viewer: category filter plus lightbox.
//!
//! # State
//!
//! The viewer owns the bound items, the active filter, the derived visible
//! set and the lightbox state. The visible set is recomputed from scratch
//! whenever the filter changes or the lightbox opens; it is never patched
//! incrementally.
//!
//! ```text
//!              open_lightbox(item in visible set)
//!   Closed ──────────────────────────────────────▶ Open { index }
//!     ▲                                              │  ▲
//!     │  close / backdrop click / Escape             │  │ next, previous
//!     └──────────────────────────────────────────────┘  └──┘ (wrapping)
//! ```
//!
//! # Totality
//!
//! Every operation accepts any input. Opening an item that is not visible,
//! navigating while closed and closing while closed are all no-ops that
//! return no changes.

use crate::config::GalleryConfig;
use crate::manifest::Manifest;
use crate::surface::Change;
use crate::types::{ALL, Item, ItemId, Slot};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lightbox {
    #[default]
    Closed,
    /// `index` is a position in the visible set, always in bounds.
    Open { index: usize },
}

#[derive(Debug, Clone)]
pub struct GalleryViewer {
    items: Vec<Item>,
    filters: Vec<String>,
    active_filter: String,
    visible: Vec<ItemId>,
    lightbox: Lightbox,
    stagger_step_ms: u32,
}

impl GalleryViewer {
    /// Bind a viewer to the manifest's items and filter triggers.
    pub fn new(manifest: &Manifest, config: &GalleryConfig) -> Self {
        let mut viewer = Self {
            items: manifest.items.clone(),
            filters: manifest.filters.clone(),
            active_filter: ALL.to_string(),
            visible: Vec::new(),
            lightbox: Lightbox::Closed,
            stagger_step_ms: config.stagger_step_ms,
        };
        viewer.recompute_visible();
        viewer
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.get(id.0)
    }

    pub fn active_filter(&self) -> &str {
        &self.active_filter
    }

    /// Items passing the active filter, in collection order.
    pub fn visible_set(&self) -> &[ItemId] {
        &self.visible
    }

    pub fn lightbox(&self) -> Lightbox {
        self.lightbox
    }

    pub fn is_open(&self) -> bool {
        matches!(self.lightbox, Lightbox::Open { .. })
    }

    pub fn current_index(&self) -> Option<usize> {
        match self.lightbox {
            Lightbox::Open { index } => Some(index),
            Lightbox::Closed => None,
        }
    }

    /// The item shown in the lightbox, if open.
    pub fn current_item(&self) -> Option<&Item> {
        let index = self.current_index()?;
        self.visible.get(index).and_then(|id| self.item(*id))
    }

    fn recompute_visible(&mut self) {
        self.visible = self
            .items
            .iter()
            .filter(|item| item.matches(&self.active_filter))
            .map(|item| item.id)
            .collect();
    }

    /// Select `category` as the only active filter.
    ///
    /// Emits a visibility toggle for every item, a reveal delay for every
    /// visible item (`position × stagger_step_ms`) and an active toggle for
    /// every filter trigger. An unknown category hides everything.
    ///
    /// If the lightbox is open, it stays on the same item when that item is
    /// still visible and closes otherwise, so its index never points outside
    /// the new visible set.
    pub fn set_filter(&mut self, category: &str) -> Vec<Change> {
        self.active_filter = category.to_string();
        let shown = self.current_item().map(|item| item.id);
        self.recompute_visible();
        debug!(
            filter = category,
            visible = self.visible.len(),
            "filter applied"
        );

        let mut changes = Vec::with_capacity(self.items.len() * 2 + self.filters.len());
        for item in &self.items {
            changes.push(Change::ItemVisible {
                item: item.id,
                visible: item.matches(category),
            });
        }
        for (position, id) in self.visible.iter().enumerate() {
            changes.push(Change::ItemDelay {
                item: *id,
                delay_ms: self
                    .stagger_step_ms
                    .saturating_mul(u32::try_from(position).unwrap_or(u32::MAX)),
            });
        }
        for (index, filter) in self.filters.iter().enumerate() {
            changes.push(Change::FilterActive {
                filter: index,
                active: filter == category,
            });
        }

        if let Some(shown) = shown {
            match self.visible.iter().position(|id| *id == shown) {
                Some(index) => self.lightbox = Lightbox::Open { index },
                None => changes.extend(self.close_lightbox()),
            }
        }
        changes
    }

    /// Open the lightbox on `item`.
    ///
    /// No-op unless `item` is in the freshly recomputed visible set.
    pub fn open_lightbox(&mut self, item: ItemId) -> Vec<Change> {
        self.recompute_visible();
        let Some(index) = self.visible.iter().position(|id| *id == item) else {
            debug!(%item, "open ignored: item not visible");
            return Vec::new();
        };
        self.lightbox = Lightbox::Open { index };
        debug!(%item, index, "lightbox opened");
        let mut changes = self.slot_change();
        changes.push(Change::ModalOpen(true));
        changes
    }

    /// Close the lightbox. Closing when already closed does nothing.
    pub fn close_lightbox(&mut self) -> Vec<Change> {
        if !self.is_open() {
            return Vec::new();
        }
        self.lightbox = Lightbox::Closed;
        debug!("lightbox closed");
        vec![Change::ModalOpen(false)]
    }

    /// Advance to the next visible item, wrapping from last to first.
    pub fn show_next(&mut self) -> Vec<Change> {
        self.step(|index, len| (index + 1) % len)
    }

    /// Retreat to the previous visible item, wrapping from first to last.
    pub fn show_previous(&mut self) -> Vec<Change> {
        self.step(|index, len| (index + len - 1) % len)
    }

    fn step(&mut self, advance: impl Fn(usize, usize) -> usize) -> Vec<Change> {
        let Lightbox::Open { index } = self.lightbox else {
            return Vec::new();
        };
        let len = self.visible.len();
        if len == 0 {
            return Vec::new();
        }
        let index = advance(index, len);
        self.lightbox = Lightbox::Open { index };
        debug!(index, len, "lightbox moved");
        self.slot_change()
    }

    fn slot_change(&self) -> Vec<Change> {
        self.current_item()
            .map(|item| Change::Slot(Slot::from_item(item)))
            .into_iter()
            .collect()
    }
}
