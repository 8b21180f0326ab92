//! # Folio Gallery
//!
//! Interactive behavior for a photography portfolio page: a category filter
//! over a fixed set of gallery items, a lightbox that steps through whatever
//! the filter leaves visible, and a strip of concept tabs with sliders.
//!
//! # Architecture: Bind, Handle, Apply
//!
//! ```text
//! 1. Bind     gallery.json  →  Manifest → Page      (one-time capture of the document)
//! 2. Handle   Event         →  Page::handle         (synchronous state transition)
//! 3. Apply    Vec<Change>   →  Surface              (class toggles and slot writes)
//! ```
//!
//! Transitions are pure state changes that *describe* their presentation
//! effects instead of performing them. The same [`page::Page`] drives a real
//! host, the in-memory [`surface::DocumentState`], or the HTML snapshot, and
//! tests exercise the state machine without any document at all.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`manifest`] | Loads and validates `gallery.json`: items, filter triggers, concepts |
//! | [`gallery`] | The filter + lightbox state machine |
//! | [`slider`] | Concept tabs and their circular sliders |
//! | [`page`] | Owns all components and routes each [`event::Event`] to one of them |
//! | [`event`] | Input events and key names |
//! | [`surface`] | [`surface::Change`], the [`surface::Surface`] trait, and the in-memory document |
//! | [`motion`] | Scroll/pointer effects: cursor easing, parallax, nav highlight, tilt, typing |
//! | [`script`] | Event-script parsing and headless replay |
//! | [`render`] | Maud HTML snapshot of the current presentation state |
//! | [`config`] | `folio.toml` loading and validation |
//! | [`output`] | CLI output formatting |
//! | [`types`] | Items, image references and the lightbox slot |
//!
//! # Design Decisions
//!
//! ## The Visible Set Is Recomputed, Never Patched
//!
//! The lightbox index is a position in the visible set, so the set is rebuilt
//! from the active filter whenever the filter changes and whenever the
//! lightbox opens. There is no incremental bookkeeping to fall out of sync
//! with what the page shows.
//!
//! ## Closed Has No Index
//!
//! [`gallery::Lightbox`] is an enum: the index lives inside `Open`, so a
//! closed lightbox cannot carry a stale cursor.
//!
//! ## Total Transitions
//!
//! Nothing in the state machine returns an error. Opening a hidden item,
//! navigating a closed or empty lightbox, and closing twice are no-ops that
//! produce no changes. Errors exist only at the edges: reading files,
//! parsing JSON/TOML and parsing event scripts.

pub mod config;
pub mod event;
pub mod gallery;
pub mod manifest;
pub mod motion;
pub mod output;
pub mod page;
pub mod render;
pub mod script;
pub mod slider;
pub mod surface;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
