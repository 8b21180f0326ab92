//! HTML snapshot of the gallery's presentation state.
//!
//! Renders the bound document as it currently looks: which filter trigger is
//! active, which items are hidden and with what reveal delay, whether the
//! lightbox is open and what its slot shows, and which concept slide is up.
//! Class names match the ones the page stylesheet keys on (`active`,
//! `hidden`, `open`).
//!
//! Uses [maud](https://maud.lambda.xyz/) so every interpolated caption and
//! alt text is escaped.

use crate::manifest::Manifest;
use crate::surface::DocumentState;
use maud::{DOCTYPE, Markup, html};

/// Full standalone document wrapping [`render_gallery`].
pub fn render_document(title: &str, manifest: &Manifest, doc: &DocumentState) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
            }
            body {
                (render_gallery(manifest, doc))
            }
        }
    }
}

pub fn render_gallery(manifest: &Manifest, doc: &DocumentState) -> Markup {
    html! {
        section #gallery .gallery {
            div.filter-bar {
                @for (index, filter) in manifest.filters.iter().enumerate() {
                    @let active = doc.filters.get(index).copied().unwrap_or(false);
                    button.filter-btn.active[active] data-filter=(filter) { (filter) }
                }
            }
            div.gallery-grid {
                @for (item, shown) in manifest.items.iter().zip(&doc.items) {
                    figure.gallery-item.hidden[!shown.visible]
                        data-category=(item.tag)
                        style={ "transition-delay: " (shown.delay_ms) "ms" } {
                        img src=(item.image.src) alt=(item.image.alt) loading="lazy";
                        figcaption { (item.caption) }
                    }
                }
            }
            (render_lightbox(doc))
        }
        @if !manifest.concepts.is_empty() {
            (render_concepts(manifest, doc))
        }
    }
}

fn render_lightbox(doc: &DocumentState) -> Markup {
    html! {
        div #lightbox .lightbox.open[doc.modal_open] {
            button.lightbox-close aria-label="Close" { "×" }
            button.lightbox-prev aria-label="Previous" { "‹" }
            div.lightbox-content {
                @if !doc.slot.src.is_empty() {
                    img #lightbox-img src=(doc.slot.src) alt=(doc.slot.alt);
                }
                p #lightbox-caption { (doc.slot.caption) }
            }
            button.lightbox-next aria-label="Next" { "›" }
        }
    }
}

fn render_concepts(manifest: &Manifest, doc: &DocumentState) -> Markup {
    let is_active = |concept: usize| doc.concepts.get(concept).copied().unwrap_or(false);
    let slide_active = |concept: usize, slide: usize| {
        doc.slides
            .get(concept)
            .and_then(|s| s.get(slide))
            .copied()
            .unwrap_or(false)
    };

    html! {
        section #concepts .concepts {
            div.concept-tabs {
                @for (index, concept) in manifest.concepts.iter().enumerate() {
                    button.tab-btn.active[is_active(index)] data-concept=(concept.id) {
                        (concept.label)
                    }
                }
            }
            @for (index, concept) in manifest.concepts.iter().enumerate() {
                div.concept-slider.active[is_active(index)] id=(concept.id) {
                    @for (slide_index, slide) in concept.slides.iter().enumerate() {
                        div.slide.active[slide_active(index, slide_index)] {
                            img src=(slide.image.src) alt=(slide.image.alt) loading="lazy";
                            p.slide-caption { (slide.caption) }
                        }
                    }
                    @if !concept.slides.is_empty() {
                        div.slider-dots {
                            @for slide_index in 0..concept.slides.len() {
                                button.slider-dot.active[slide_active(index, slide_index)] {}
                            }
                        }
                    }
                }
            }
        }
    }
}
