//! Input events delivered by the host.

use crate::types::ItemId;
use std::fmt;
use std::str::FromStr;

/// Key presses the page reacts to. Anything else is carried as [`Key::Other`]
/// and ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
    Other(String),
}

impl FromStr for Key {
    type Err = std::convert::Infallible;

    /// Parses DOM `KeyboardEvent.key` names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "Escape" | "Esc" => Key::Escape,
            "ArrowLeft" | "Left" => Key::ArrowLeft,
            "ArrowRight" | "Right" => Key::ArrowRight,
            other => Key::Other(other.to_string()),
        })
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Escape => f.write_str("Escape"),
            Key::ArrowLeft => f.write_str("ArrowLeft"),
            Key::ArrowRight => f.write_str("ArrowRight"),
            Key::Other(name) => f.write_str(name),
        }
    }
}

/// Where a click on the open modal landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalTarget {
    /// The backdrop element itself.
    Backdrop,
    /// The image, caption, or anything else inside the modal.
    Content,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    FilterClicked(String),
    ItemClicked(ItemId),
    CloseClicked,
    PrevClicked,
    NextClicked,
    ModalClicked(ModalTarget),
    KeyDown(Key),
    TabClicked(String),
    SlideNext,
    SlidePrevious,
    /// Slider dot, 0-based.
    DotClicked(usize),
}

impl fmt::Display for Event {
    /// Renders the event in event-script syntax.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::FilterClicked(category) => write!(f, "filter {category}"),
            Event::ItemClicked(id) => write!(f, "click {}", id.0 + 1),
            Event::CloseClicked => f.write_str("close"),
            Event::PrevClicked => f.write_str("prev"),
            Event::NextClicked => f.write_str("next"),
            Event::ModalClicked(ModalTarget::Backdrop) => f.write_str("backdrop"),
            Event::ModalClicked(ModalTarget::Content) => f.write_str("content"),
            Event::KeyDown(key) => write!(f, "key {key}"),
            Event::TabClicked(id) => write!(f, "tab {id}"),
            Event::SlideNext => f.write_str("slide next"),
            Event::SlidePrevious => f.write_str("slide prev"),
            Event::DotClicked(index) => write!(f, "slide {}", index + 1),
        }
    }
}
