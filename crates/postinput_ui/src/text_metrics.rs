//! Text measurement utilities.
//!
//! Approximate font metrics for the headless text area. A browser measures
//! real glyphs; these estimates only need to be consistent so that line
//! counts, and therefore heights, behave like the real thing.

use crate::units::Pixels;

/// Metrics for a specific font/size combination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextMetrics {
    /// Font size in pixels
    pub size: f32,
    /// Average character width as a ratio of font size
    pub char_width_ratio: f32,
    /// Line height as a ratio of font size
    pub line_height_ratio: f32,
}

impl TextMetrics {
    /// Monospace metrics at 16px, the browser default textarea font size.
    pub const MONO: TextMetrics = TextMetrics {
        size: 16.0,
        char_width_ratio: 0.6,
        line_height_ratio: 1.2,
    };

    /// Create metrics for a specific font size.
    pub fn new(size: f32) -> Self {
        Self {
            size,
            char_width_ratio: Self::MONO.char_width_ratio,
            line_height_ratio: Self::MONO.line_height_ratio,
        }
    }

    /// Create metrics with custom ratios.
    pub fn custom(size: f32, char_width_ratio: f32, line_height_ratio: f32) -> Self {
        Self {
            size,
            char_width_ratio,
            line_height_ratio,
        }
    }

    pub fn char_width(&self) -> f32 {
        self.size * self.char_width_ratio
    }

    pub fn line_height(&self) -> Pixels {
        Pixels(self.size * self.line_height_ratio)
    }

    /// How many characters fit on one visual line of `max_width`.
    /// Always at least one, so a too-narrow box still makes progress.
    pub fn chars_per_line(&self, max_width: f32) -> usize {
        let cw = self.char_width();
        if cw <= 0.0 || max_width <= 0.0 {
            return 1;
        }
        ((max_width / cw).floor() as usize).max(1)
    }

    /// Count visual lines after soft-wrapping `text` at `max_width`.
    ///
    /// Hard line breaks always start a new line, and a trailing newline
    /// opens an empty last line the way a textarea shows one. Empty text is
    /// one line.
    pub fn wrapped_line_count(&self, text: &str, max_width: f32) -> usize {
        let per_line = self.chars_per_line(max_width);

        // split('\n') rather than lines(): "a\n" is two visual rows.
        text.split('\n')
            .map(|line| {
                let chars = line.trim_end_matches('\r').chars().count();
                chars.div_ceil(per_line).max(1)
            })
            .sum()
    }
}

impl Default for TextMetrics {
    fn default() -> Self {
        Self::MONO
    }
}
