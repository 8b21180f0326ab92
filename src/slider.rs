//! Concept tabs and their circular sliders.
//!
//! The portfolio shows one concept at a time. Each concept has a slider whose
//! slides and dots share a single `current` cursor; prev/next wrap the same
//! way the lightbox does.

use crate::manifest::Concept;
use crate::surface::Change;
use tracing::debug;

/// Cursor over a fixed number of slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slider {
    len: usize,
    current: usize,
}

impl Slider {
    pub fn new(len: usize) -> Self {
        Self { len, current: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// Returns the new position, or `None` for an empty slider.
    pub fn next(&mut self) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        self.current = (self.current + 1) % self.len;
        Some(self.current)
    }

    pub fn previous(&mut self) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        self.current = (self.current + self.len - 1) % self.len;
        Some(self.current)
    }

    /// Jump to `index` (a dot click). Out of range is ignored.
    pub fn go_to(&mut self, index: usize) -> Option<usize> {
        if index >= self.len {
            return None;
        }
        self.current = index;
        Some(self.current)
    }
}

#[derive(Debug, Clone)]
pub struct ConceptTabs {
    ids: Vec<String>,
    sliders: Vec<Slider>,
    active: Option<usize>,
}

impl ConceptTabs {
    /// The first concept starts active.
    pub fn new(concepts: &[Concept]) -> Self {
        Self {
            ids: concepts.iter().map(|c| c.id.clone()).collect(),
            sliders: concepts.iter().map(|c| Slider::new(c.slides.len())).collect(),
            active: if concepts.is_empty() { None } else { Some(0) },
        }
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active.map(|i| self.ids[i].as_str())
    }

    pub fn slider(&self, concept: usize) -> Option<&Slider> {
        self.sliders.get(concept)
    }

    /// Make `id` the only active concept. An unknown id leaves none active.
    pub fn select(&mut self, id: &str) -> Vec<Change> {
        self.active = self.ids.iter().position(|c| c == id);
        debug!(concept = id, found = self.active.is_some(), "concept selected");
        (0..self.ids.len())
            .map(|concept| Change::ConceptActive {
                concept,
                active: Some(concept) == self.active,
            })
            .collect()
    }

    pub fn next_slide(&mut self) -> Vec<Change> {
        self.move_active(Slider::next)
    }

    pub fn previous_slide(&mut self) -> Vec<Change> {
        self.move_active(Slider::previous)
    }

    pub fn go_to_slide(&mut self, index: usize) -> Vec<Change> {
        self.move_active(|slider| slider.go_to(index))
    }

    fn move_active(&mut self, mv: impl FnOnce(&mut Slider) -> Option<usize>) -> Vec<Change> {
        let Some(concept) = self.active else {
            return Vec::new();
        };
        let slider = &mut self.sliders[concept];
        let Some(current) = mv(slider) else {
            return Vec::new();
        };
        debug!(concept, slide = current, "slide shown");
        (0..slider.len())
            .map(|slide| Change::SlideActive {
                concept,
                slide,
                active: slide == current,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;

    #[test]
    fn slider_wraps_both_ways() {
        let mut s = Slider::new(3);
        assert_eq!(s.previous(), Some(2));
        assert_eq!(s.next(), Some(0));
        assert_eq!(s.next(), Some(1));
        assert_eq!(s.next(), Some(2));
        assert_eq!(s.next(), Some(0));
    }

    #[test]
    fn empty_slider_ignores_navigation() {
        let mut s = Slider::new(0);
        assert_eq!(s.next(), None);
        assert_eq!(s.previous(), None);
        assert_eq!(s.go_to(0), None);
        assert_eq!(s.current(), 0);
    }

    #[test]
    fn go_to_out_of_range_is_ignored() {
        let mut s = Slider::new(2);
        s.go_to(1);
        assert_eq!(s.go_to(2), None);
        assert_eq!(s.current(), 1);
    }

    #[test]
    fn first_concept_starts_active() {
        let tabs = ConceptTabs::new(&fixture_manifest().concepts);
        assert_eq!(tabs.active_id(), Some("light"));
        assert_eq!(ConceptTabs::new(&[]).active(), None);
    }

    #[test]
    fn select_activates_exactly_one() {
        let mut tabs = ConceptTabs::new(&fixture_manifest().concepts);
        let changes = tabs.select("motion");
        assert_eq!(tabs.active_id(), Some("motion"));
        let active: Vec<usize> = changes
            .iter()
            .filter_map(|c| match c {
                Change::ConceptActive {
                    concept,
                    active: true,
                } => Some(*concept),
                _ => None,
            })
            .collect();
        assert_eq!(active, vec![1]);
    }

    #[test]
    fn unknown_concept_deactivates_all() {
        let mut tabs = ConceptTabs::new(&fixture_manifest().concepts);
        let changes = tabs.select("nope");
        assert_eq!(tabs.active(), None);
        assert_eq!(changes.len(), 3);
        assert!(tabs.next_slide().is_empty());
    }

    #[test]
    fn slides_move_on_active_concept_only() {
        let mut tabs = ConceptTabs::new(&fixture_manifest().concepts);
        tabs.next_slide();
        tabs.select("motion");
        let changes = tabs.previous_slide();
        assert_eq!(tabs.slider(0).unwrap().current(), 1);
        assert_eq!(tabs.slider(1).unwrap().current(), 1);
        assert_eq!(
            changes,
            vec![
                Change::SlideActive {
                    concept: 1,
                    slide: 0,
                    active: false
                },
                Change::SlideActive {
                    concept: 1,
                    slide: 1,
                    active: true
                },
            ]
        );
    }

    #[test]
    fn slider_state_survives_tab_switches() {
        let mut tabs = ConceptTabs::new(&fixture_manifest().concepts);
        tabs.go_to_slide(2);
        tabs.select("motion");
        tabs.select("light");
        assert_eq!(tabs.slider(0).unwrap().current(), 2);
    }

    #[test]
    fn empty_concept_ignores_slides() {
        let mut tabs = ConceptTabs::new(&fixture_manifest().concepts);
        tabs.select("archive");
        assert!(tabs.next_slide().is_empty());
        assert!(tabs.go_to_slide(0).is_empty());
    }
}
