//! Event dispatch for the whole page.
//!
//! [`Page`] owns every stateful component. The host hands each event to
//! [`Page::handle`] together with exclusive access to the state, and gets
//! back the presentation changes to apply.

use crate::config::ViewerConfig;
use crate::event::{Event, Key, ModalTarget};
use crate::gallery::GalleryViewer;
use crate::manifest::Manifest;
use crate::slider::ConceptTabs;
use crate::surface::Change;

#[derive(Debug, Clone)]
pub struct Page {
    pub gallery: GalleryViewer,
    pub concepts: ConceptTabs,
}

impl Page {
    pub fn new(manifest: &Manifest, config: &ViewerConfig) -> Self {
        Self {
            gallery: GalleryViewer::new(manifest, &config.gallery),
            concepts: ConceptTabs::new(&manifest.concepts),
        }
    }

    /// Run one event to completion.
    ///
    /// The close button, a backdrop click and Escape all drive the same
    /// close transition. Arrow keys navigate only while the lightbox is open.
    pub fn handle(&mut self, event: &Event) -> Vec<Change> {
        let gallery = &mut self.gallery;
        match event {
            Event::FilterClicked(category) => gallery.set_filter(category),
            Event::ItemClicked(item) => gallery.open_lightbox(*item),
            Event::CloseClicked
            | Event::ModalClicked(ModalTarget::Backdrop)
            | Event::KeyDown(Key::Escape) => gallery.close_lightbox(),
            Event::ModalClicked(ModalTarget::Content) => Vec::new(),
            Event::PrevClicked | Event::KeyDown(Key::ArrowLeft) => gallery.show_previous(),
            Event::NextClicked | Event::KeyDown(Key::ArrowRight) => gallery.show_next(),
            Event::KeyDown(Key::Other(_)) => Vec::new(),
            Event::TabClicked(id) => self.concepts.select(id),
            Event::SlideNext => self.concepts.next_slide(),
            Event::SlidePrevious => self.concepts.previous_slide(),
            Event::DotClicked(index) => self.concepts.go_to_slide(*index),
        }
    }
}
