//! CLI output formatting.
//!
//! Each command has a `format_*` function returning lines (pure, testable) and
//! a `print_*` wrapper that writes them to stdout.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Filters
//!     all (6 items)
//!     portrait (3 items)
//!
//! Items
//! 001 portrait — Window light, 2023
//!     Source: img/gallery/portrait-sara.jpg
//!
//! Concepts
//! 001 Light (3 slides)
//! ```
//!
//! ## Replay
//!
//! ```text
//! L2   filter street → 2 visible
//! L3   click 5 → open 2/2: img/gallery/street-market.jpg
//! L7   key Escape → closed
//! L10  tab motion → concept motion
//! ```

use crate::gallery::Lightbox;
use crate::manifest::Manifest;
use crate::script::Step;
use crate::surface::{Change, DocumentState};
use crate::types::ALL;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

pub fn format_check_output(manifest: &Manifest) -> Vec<String> {
    let mut lines = vec!["Filters".to_string()];
    for filter in &manifest.filters {
        let count = manifest.items.iter().filter(|i| i.matches(filter)).count();
        lines.push(format!("{}{} ({})", indent(1), filter, plural(count, "item")));
    }

    lines.push(String::new());
    lines.push("Items".to_string());
    for item in &manifest.items {
        let header = if item.caption.is_empty() {
            format!("{} {}", format_index(item.id.0 + 1), item.tag)
        } else {
            format!(
                "{} {} — {}",
                format_index(item.id.0 + 1),
                item.tag,
                item.caption
            )
        };
        lines.push(header);
        lines.push(format!("{}Source: {}", indent(1), item.image.src));
        if !manifest.filters.iter().any(|f| f != ALL && *f == item.tag) {
            lines.push(format!("{}Note: no filter trigger for this tag", indent(1)));
        }
    }

    if !manifest.concepts.is_empty() {
        lines.push(String::new());
        lines.push("Concepts".to_string());
        for (index, concept) in manifest.concepts.iter().enumerate() {
            let label = if concept.label.is_empty() {
                &concept.id
            } else {
                &concept.label
            };
            lines.push(format!(
                "{} {} ({})",
                format_index(index + 1),
                label,
                plural(concept.slides.len(), "slide")
            ));
        }
    }
    lines
}

pub fn print_check_output(manifest: &Manifest) {
    for line in format_check_output(manifest) {
        println!("{}", line);
    }
}

/// One trace line per replayed event.
pub fn format_step(step: &Step, doc: &DocumentState) -> String {
    let prefix = format!("{:<4} {}", format!("L{}", step.line), step.event);
    let outcome = if step.changes.is_empty() {
        "no change".to_string()
    } else if step
        .changes
        .iter()
        .any(|c| matches!(c, Change::ConceptActive { .. } | Change::SlideActive { .. }))
    {
        match &step.concept {
            Some(id) => format!("concept {id}"),
            None => "no concept".to_string(),
        }
    } else {
        match step.lightbox {
            Lightbox::Open { index } => format!(
                "open {}/{}: {}",
                index + 1,
                step.visible,
                doc_slot_src(step, doc)
            ),
            Lightbox::Closed if step.changes.contains(&Change::ModalOpen(false)) => {
                "closed".to_string()
            }
            Lightbox::Closed => format!("{} visible", step.visible),
        }
    };
    format!("{prefix} → {outcome}")
}

// The step's own slot write if it has one, otherwise whatever the surface shows.
fn doc_slot_src<'a>(step: &'a Step, doc: &'a DocumentState) -> &'a str {
    step.changes
        .iter()
        .rev()
        .find_map(|c| match c {
            Change::Slot(slot) => Some(slot.src.as_str()),
            _ => None,
        })
        .unwrap_or(doc.slot.src.as_str())
}

pub fn format_replay_output(steps: &[Step], doc: &DocumentState) -> Vec<String> {
    let mut lines: Vec<String> = steps.iter().map(|s| format_step(s, doc)).collect();
    let visible = doc.visible_items().len();
    let state = if doc.modal_open {
        format!("lightbox open on {}", doc.slot.src)
    } else {
        "lightbox closed".to_string()
    };
    lines.push(format!(
        "Replayed {}, {} visible, {}",
        plural(steps.len(), "event"),
        visible,
        state
    ));
    lines
}

pub fn print_replay_output(steps: &[Step], doc: &DocumentState) {
    for line in format_replay_output(steps, doc) {
        println!("{}", line);
    }
}
