//! Scroll and pointer effects.
//!
//! Pure functions of scroll offset, pointer position and element geometry.
//! The host calls them from its own scroll/mousemove/animation-frame hooks
//! and writes the results to styles; nothing here keeps page state except
//! the trailing [`Cursor`].

use crate::config::MotionConfig;

const PROFILE_PARALLAX: f64 = 0.3;
const TEXT_PARALLAX: f64 = 0.15;
const TEXT_FADE_DISTANCE: f64 = 700.0;
const TILT_DAMPING: f64 = 10.0;
const TYPING_START_MS: u32 = 500;

/// A cursor that trails the pointer, covering a fixed fraction of the
/// remaining distance each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cursor {
    pub x: f64,
    pub y: f64,
    target_x: f64,
    target_y: f64,
    easing: f64,
}

impl Cursor {
    pub fn new(config: &MotionConfig) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            target_x: 0.0,
            target_y: 0.0,
            easing: config.cursor_easing,
        }
    }

    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        self.target_x = x;
        self.target_y = y;
    }

    /// Advance one animation frame and return the new position.
    pub fn step(&mut self) -> (f64, f64) {
        self.x += (self.target_x - self.x) * self.easing;
        self.y += (self.target_y - self.y) * self.easing;
        (self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parallax {
    pub profile_offset: f64,
    pub text_offset: f64,
    pub text_opacity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollEffects {
    pub navbar_scrolled: bool,
    pub back_to_top_visible: bool,
    /// `None` once the hero is out of view; the last applied offsets stay.
    pub parallax: Option<Parallax>,
}

pub fn scroll_effects(config: &MotionConfig, scroll_y: f64, viewport_height: f64) -> ScrollEffects {
    let parallax = (scroll_y < viewport_height).then(|| Parallax {
        profile_offset: scroll_y * PROFILE_PARALLAX,
        text_offset: scroll_y * TEXT_PARALLAX,
        text_opacity: 1.0 - scroll_y / TEXT_FADE_DISTANCE,
    });
    ScrollEffects {
        navbar_scrolled: scroll_y > config.navbar_threshold,
        back_to_top_visible: scroll_y > config.back_to_top_threshold,
        parallax,
    }
}

/// Page section used for nav highlighting.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// Id of the section whose nav link should be active.
///
/// A section matches when `scroll_y` is in `(top - offset, top - offset + height]`
/// with `offset = section_offset`. Later sections win when windows overlap.
pub fn active_section<'a>(
    config: &MotionConfig,
    sections: &'a [Section],
    scroll_y: f64,
) -> Option<&'a str> {
    sections
        .iter()
        .rev()
        .find(|s| {
            let top = s.top - config.section_offset;
            scroll_y > top && scroll_y <= top + s.height
        })
        .map(|s| s.id.as_str())
}

/// Rotation (degrees) for a card tilted toward the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    /// Pointer at `(x, y)` relative to a `width × height` card.
    pub fn at(width: f64, height: f64, x: f64, y: f64) -> Self {
        Self {
            rotate_x: (y - height / 2.0) / TILT_DAMPING,
            rotate_y: (width / 2.0 - x) / TILT_DAMPING,
        }
    }

    /// Shadow offset that follows the tilt.
    pub fn shadow_offset(&self) -> (f64, f64) {
        (-self.rotate_y * 2.0, self.rotate_x * 2.0)
    }
}

/// Successive prefixes of `text` for the typing effect, one per character.
pub fn typing_frames(text: &str) -> impl Iterator<Item = &str> {
    text.char_indices()
        .map(move |(i, c)| &text[..i + c.len_utf8()])
}

/// [`typing_frames`] paired with the millisecond offset (from page load) at
/// which each one is shown.
pub fn typing_schedule<'a>(
    config: &MotionConfig,
    text: &'a str,
) -> impl Iterator<Item = (u32, &'a str)> {
    let interval = config.typing_interval_ms;
    typing_frames(text)
        .enumerate()
        .map(move |(i, frame)| {
            let step = u32::try_from(i).unwrap_or(u32::MAX);
            (TYPING_START_MS.saturating_add(interval.saturating_mul(step)), frame)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn cursor_eases_toward_pointer() {
        let mut cursor = Cursor::new(&MotionConfig::default());
        cursor.pointer_moved(100.0, 200.0);
        let (x, y) = cursor.step();
        assert!(close(x, 15.0));
        assert!(close(y, 30.0));
        let (x, _) = cursor.step();
        assert!(close(x, 15.0 + 85.0 * 0.15));
    }

    #[test]
    fn cursor_converges() {
        let mut cursor = Cursor::new(&MotionConfig::default());
        cursor.pointer_moved(50.0, 50.0);
        for _ in 0..200 {
            cursor.step();
        }
        assert!((cursor.x - 50.0).abs() < 1e-6);
    }

    #[test]
    fn thresholds_are_exclusive() {
        let config = MotionConfig::default();
        let at = scroll_effects(&config, 50.0, 800.0);
        assert!(!at.navbar_scrolled);
        let past = scroll_effects(&config, 51.0, 800.0);
        assert!(past.navbar_scrolled);
        assert!(!past.back_to_top_visible);
        assert!(scroll_effects(&config, 501.0, 800.0).back_to_top_visible);
    }

    #[test]
    fn parallax_only_within_viewport() {
        let config = MotionConfig::default();
        let p = scroll_effects(&config, 350.0, 800.0).parallax.unwrap();
        assert!(close(p.profile_offset, 105.0));
        assert!(close(p.text_offset, 52.5));
        assert!(close(p.text_opacity, 0.5));
        assert!(scroll_effects(&config, 800.0, 800.0).parallax.is_none());
    }

    #[test]
    fn active_section_uses_offset_window() {
        let sections = vec![
            Section {
                id: "about".into(),
                top: 0.0,
                height: 600.0,
            },
            Section {
                id: "gallery".into(),
                top: 600.0,
                height: 900.0,
            },
        ];
        let config = MotionConfig::default();
        assert_eq!(active_section(&config, &sections, 100.0), Some("about"));
        // 600 - 150 = 450: gallery's window starts after 450
        assert_eq!(active_section(&config, &sections, 451.0), Some("gallery"));
        assert_eq!(active_section(&config, &sections, 2000.0), None);
    }

    #[test]
    fn tilt_is_flat_at_center() {
        let tilt = Tilt::at(200.0, 100.0, 100.0, 50.0);
        assert!(close(tilt.rotate_x, 0.0));
        assert!(close(tilt.rotate_y, 0.0));
    }

    #[test]
    fn tilt_follows_pointer() {
        let tilt = Tilt::at(200.0, 100.0, 0.0, 100.0);
        assert!(close(tilt.rotate_x, 5.0));
        assert!(close(tilt.rotate_y, 10.0));
        assert_eq!(tilt.shadow_offset(), (-20.0, 10.0));
    }

    #[test]
    fn typing_frames_respect_char_boundaries() {
        let frames: Vec<&str> = typing_frames("📷 Go").collect();
        assert_eq!(frames, vec!["📷", "📷 ", "📷 G", "📷 Go"]);
    }

    #[test]
    fn typing_starts_after_delay_then_ticks() {
        let config = MotionConfig::default();
        let schedule: Vec<(u32, &str)> = typing_schedule(&config, "Hey").collect();
        assert_eq!(schedule, vec![(500, "H"), (600, "He"), (700, "Hey")]);
    }

    #[test]
    fn typing_schedule_saturates_huge_interval() {
        let config = MotionConfig {
            typing_interval_ms: u32::MAX,
            ..MotionConfig::default()
        };
        let schedule: Vec<(u32, &str)> = typing_schedule(&config, "Hi").collect();
        assert_eq!(schedule, vec![(500, "H"), (u32::MAX, "Hi")]);
    }
}
