//! Event scripts for headless replay.
//!
//! A script is one event per line. Blank lines and `#` comments are skipped.
//!
//! ```text
//! filter street       # click the "street" filter trigger
//! click 5             # click the 5th item (1-based)
//! next | prev         # lightbox arrows
//! close | backdrop    # close button, click on the modal backdrop
//! content             # click inside the modal (ignored)
//! key Escape          # keydown; ArrowLeft / ArrowRight also navigate
//! tab motion          # concept tab
//! slide next | slide prev | slide 2
//! ```

use crate::event::{Event, Key, ModalTarget};
use crate::gallery::Lightbox;
use crate::page::Page;
use crate::surface::{Change, Surface};
use crate::types::ItemId;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
}

/// An event together with the 1-based script line it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptLine {
    pub line: usize,
    pub event: Event,
}

pub fn load_script(path: &Path) -> Result<Vec<ScriptLine>, ScriptError> {
    let content = fs::read_to_string(path)?;
    parse_script(&content)
}

pub fn parse_script(content: &str) -> Result<Vec<ScriptLine>, ScriptError> {
    let mut lines = Vec::new();
    for (index, raw) in content.lines().enumerate() {
        let line = index + 1;
        let text = raw.split('#').next().unwrap_or("").trim();
        if text.is_empty() {
            continue;
        }
        let event = parse_event(text).map_err(|message| ScriptError::Parse { line, message })?;
        lines.push(ScriptLine { line, event });
    }
    Ok(lines)
}

fn parse_event(text: &str) -> Result<Event, String> {
    let mut words = text.split_whitespace();
    let command = words.next().unwrap_or_default();
    let arg = words.next();
    if let Some(extra) = words.next() {
        return Err(format!("unexpected argument '{extra}'"));
    }

    let event = match (command, arg) {
        ("filter", Some(category)) => Event::FilterClicked(category.to_string()),
        ("click", Some(n)) => Event::ItemClicked(ItemId(parse_position(n)?)),
        ("close", None) => Event::CloseClicked,
        ("backdrop", None) => Event::ModalClicked(ModalTarget::Backdrop),
        ("content", None) => Event::ModalClicked(ModalTarget::Content),
        ("prev", None) => Event::PrevClicked,
        ("next", None) => Event::NextClicked,
        ("key", Some(name)) => {
            Event::KeyDown(name.parse::<Key>().unwrap_or_else(|never| match never {}))
        }
        ("tab", Some(id)) => Event::TabClicked(id.to_string()),
        ("slide", Some("next")) => Event::SlideNext,
        ("slide", Some("prev")) => Event::SlidePrevious,
        ("slide", Some(n)) => Event::DotClicked(parse_position(n)?),
        ("filter" | "click" | "key" | "tab" | "slide", None) => {
            return Err(format!("'{command}' needs an argument"));
        }
        ("close" | "backdrop" | "content" | "prev" | "next", Some(arg)) => {
            return Err(format!("'{command}' takes no argument, got '{arg}'"));
        }
        _ => return Err(format!("unknown command '{command}'")),
    };
    Ok(event)
}

/// 1-based position on the page to a 0-based index.
fn parse_position(text: &str) -> Result<usize, String> {
    match text.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(format!("expected a position starting at 1, got '{text}'")),
    }
}

/// Outcome of replaying one script line.
#[derive(Debug, Clone)]
pub struct Step {
    pub line: usize,
    pub event: Event,
    pub changes: Vec<Change>,
    pub visible: usize,
    pub lightbox: Lightbox,
    pub concept: Option<String>,
}

/// Feed every event to `page`, applying its changes to `surface`.
pub fn replay(page: &mut Page, surface: &mut impl Surface, script: &[ScriptLine]) -> Vec<Step> {
    script
        .iter()
        .map(|entry| {
            let changes = page.handle(&entry.event);
            if changes.is_empty() {
                warn!(line = entry.line, event = %entry.event, "event had no effect");
            }
            surface.apply_all(&changes);
            Step {
                line: entry.line,
                event: entry.event.clone(),
                changes,
                visible: page.gallery.visible_set().len(),
                lightbox: page.gallery.lightbox(),
                concept: page.concepts.active_id().map(str::to_string),
            }
        })
        .collect()
}
