//! The text-entry abstraction and the auto-resize handler.
//!
//! [`auto_resize`] is written once against [`TextEntry`] and runs both on a
//! real DOM element (in the root crate's wasm module) and on the headless
//! [`TextArea`](crate::TextArea).

use web_time::Instant;

use crate::units::Pixels;

/// Inline height state of an element.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum HeightOverride {
    /// No inline height; the element uses its default sizing
    #[default]
    Auto,
    /// An explicit height forced by a previous resize
    Fixed(Pixels),
}

impl HeightOverride {
    pub fn fixed(self) -> Option<Pixels> {
        match self {
            HeightOverride::Auto => None,
            HeightOverride::Fixed(px) => Some(px),
        }
    }
}

/// Optional bounds applied after measuring.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ResizeLimits {
    /// Grow no taller than this; taller content scrolls inside the element.
    pub max_height: Option<Pixels>,
}

impl ResizeLimits {
    pub const UNBOUNDED: Self = Self { max_height: None };

    pub fn with_max_height(max_height: Pixels) -> Self {
        Self {
            max_height: Some(max_height),
        }
    }

    /// A ceiling that is negative or not finite can't be a CSS height;
    /// it is ignored rather than collapsing the field.
    fn apply(&self, measured: Pixels) -> Pixels {
        match self.max_height {
            Some(max) if max.value().is_finite() && max.value() >= 0.0 => measured.min(max),
            _ => measured,
        }
    }
}

/// A multi-line text field whose height can be driven from its content.
pub trait TextEntry {
    /// Drop any forced height so the element falls back to default sizing.
    fn clear_height_override(&mut self);

    /// Height needed to show all content without internal scrolling.
    ///
    /// Like the DOM's `scrollHeight`, this may be inflated by a height
    /// override that is still in place.
    fn content_height(&self) -> Pixels;

    /// Force the displayed height.
    fn set_height(&mut self, height: Pixels);
}

/// Resize `entry` to fit its content.
///
/// Clears the override first; otherwise a box that grew for five lines
/// would keep reporting five lines worth of content height after the text
/// shrinks. Returns the height that was applied.
pub fn auto_resize<E: TextEntry + ?Sized>(entry: &mut E, limits: ResizeLimits) -> Pixels {
    let start = Instant::now();

    entry.clear_height_override();
    let measured = entry.content_height();
    let height = limits.apply(measured);
    entry.set_height(height);

    log::trace!(
        "auto_resize: measured {} applied {} in {:?}",
        measured,
        height,
        start.elapsed()
    );

    height
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records calls so the step order can be checked.
    #[derive(Default)]
    struct Recorder {
        calls: Vec<&'static str>,
        content: f32,
        height: HeightOverride,
    }

    impl TextEntry for Recorder {
        fn clear_height_override(&mut self) {
            self.calls.push("clear");
            self.height = HeightOverride::Auto;
        }

        fn content_height(&self) -> Pixels {
            // Mimic scrollHeight: never less than a forced height.
            let forced = self.height.fixed().unwrap_or(Pixels::ZERO);
            Pixels(self.content).max(forced)
        }

        fn set_height(&mut self, height: Pixels) {
            self.calls.push("set");
            self.height = HeightOverride::Fixed(height);
        }
    }

    #[test]
    fn test_steps_run_in_order() {
        let mut r = Recorder {
            content: 40.0,
            ..Default::default()
        };
        auto_resize(&mut r, ResizeLimits::UNBOUNDED);
        assert_eq!(r.calls, vec!["clear", "set"]);
        assert_eq!(r.height, HeightOverride::Fixed(Pixels(40.0)));
    }

    #[test]
    fn test_stale_override_does_not_stick() {
        let mut r = Recorder {
            content: 20.0,
            height: HeightOverride::Fixed(Pixels(100.0)),
            ..Default::default()
        };
        let applied = auto_resize(&mut r, ResizeLimits::UNBOUNDED);
        assert_eq!(applied, Pixels(20.0));
    }

    #[test]
    fn test_max_height_caps_growth() {
        let mut r = Recorder {
            content: 300.0,
            ..Default::default()
        };
        let applied = auto_resize(&mut r, ResizeLimits::with_max_height(Pixels(120.0)));
        assert_eq!(applied, Pixels(120.0));

        r.content = 50.0;
        let applied = auto_resize(&mut r, ResizeLimits::with_max_height(Pixels(120.0)));
        assert_eq!(applied, Pixels(50.0));
    }

    #[test]
    fn test_unusable_max_height_is_ignored() {
        let mut r = Recorder {
            content: 90.0,
            ..Default::default()
        };
        for bad in [-40.0, f32::INFINITY, f32::NAN] {
            let applied = auto_resize(&mut r, ResizeLimits::with_max_height(Pixels(bad)));
            assert_eq!(applied, Pixels(90.0));
        }
    }

    #[test]
    fn test_works_through_trait_object() {
        let mut r = Recorder {
            content: 12.0,
            ..Default::default()
        };
        let entry: &mut dyn TextEntry = &mut r;
        assert_eq!(auto_resize(entry, ResizeLimits::default()), Pixels(12.0));
    }
}
