//! Headless multi-line text area.
//!
//! Behaves like a browser `<textarea>` for the purposes of height: content
//! soft-wraps at the box width, the box has a default height of `rows`
//! lines, an inline height overrides that, and the reported scroll height is
//! never smaller than the box itself. That last rule is what makes the
//! clear-before-measure step of [`auto_resize`](crate::auto_resize) matter.

use crate::entry::{HeightOverride, TextEntry};
use crate::text_metrics::TextMetrics;
use crate::units::Pixels;

/// Default textarea width in pixels.
pub const DEFAULT_WIDTH: f32 = 320.0;

/// Default vertical padding (top + bottom).
pub const DEFAULT_PADDING: Pixels = Pixels(8.0);

#[derive(Debug, Clone)]
pub struct TextArea {
    value: String,
    placeholder: String,
    /// Width available to text, padding already excluded
    width: f32,
    /// Top + bottom padding
    padding: Pixels,
    /// Visible rows when no height is forced
    rows: usize,
    metrics: TextMetrics,
    height: HeightOverride,
}

impl Default for TextArea {
    fn default() -> Self {
        Self {
            value: String::new(),
            placeholder: String::new(),
            width: DEFAULT_WIDTH,
            padding: DEFAULT_PADDING,
            rows: 1,
            metrics: TextMetrics::default(),
            height: HeightOverride::Auto,
        }
    }
}

impl TextArea {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text width
    pub fn width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    /// Set the vertical padding
    pub fn padding(mut self, padding: Pixels) -> Self {
        self.padding = padding.clamp_non_negative();
        self
    }

    /// Set the default number of visible rows (at least one)
    pub fn rows(mut self, rows: usize) -> Self {
        self.rows = rows.max(1);
        self
    }

    /// Set the font metrics
    pub fn metrics(mut self, metrics: TextMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Set the initial text
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn text(&self) -> &str {
        &self.value
    }

    pub fn set_text(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn push_str(&mut self, s: &str) {
        self.value.push_str(s);
    }

    /// Delete up to `count` characters from the end, like repeated backspace.
    pub fn backspace(&mut self, count: usize) {
        for _ in 0..count {
            if self.value.pop().is_none() {
                break;
            }
        }
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.placeholder = placeholder.into();
    }

    pub fn height_override(&self) -> HeightOverride {
        self.height
    }

    /// Number of visual lines the current text occupies.
    pub fn line_count(&self) -> usize {
        self.metrics.wrapped_line_count(&self.value, self.width)
    }

    /// Height of `lines` lines of text plus padding.
    pub fn height_for_lines(&self, lines: usize) -> Pixels {
        let text = Pixels(lines.max(1) as f32 * self.metrics.line_height().value());
        (text + self.padding).ceil()
    }

    /// Extent of the content alone, ignoring the box.
    fn content_extent(&self) -> Pixels {
        self.height_for_lines(self.line_count())
    }

    /// Height the box has without an override.
    fn default_height(&self) -> Pixels {
        self.height_for_lines(self.rows)
    }

    /// Height the box is currently displayed at.
    pub fn displayed_height(&self) -> Pixels {
        self.height.fixed().unwrap_or_else(|| self.default_height())
    }

    /// Whether content is clipped and the box would show a scrollbar.
    pub fn is_scrolling(&self) -> bool {
        self.content_extent() > self.displayed_height()
    }
}

impl TextEntry for TextArea {
    fn clear_height_override(&mut self) {
        self.height = HeightOverride::Auto;
    }

    fn content_height(&self) -> Pixels {
        self.content_extent().max(self.displayed_height())
    }

    fn set_height(&mut self, height: Pixels) {
        self.height = HeightOverride::Fixed(height.clamp_non_negative());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::{auto_resize, ResizeLimits};

    // 5px characters, 20px lines, 10 characters per line, no padding.
    fn area() -> TextArea {
        TextArea::new()
            .metrics(TextMetrics::custom(10.0, 0.5, 2.0))
            .width(50.0)
            .padding(Pixels::ZERO)
    }

    fn resize(a: &mut TextArea) -> Pixels {
        auto_resize(a, ResizeLimits::UNBOUNDED)
    }

    #[test]
    fn test_empty_area_gets_minimum_height() {
        let mut a = area();
        let applied = resize(&mut a);
        assert_eq!(applied, a.height_for_lines(1));
        assert_eq!(a.displayed_height(), Pixels(20.0));
    }

    #[test]
    fn test_padding_counts_toward_height() {
        let mut a = area().padding(Pixels(8.0));
        resize(&mut a);
        assert_eq!(a.displayed_height(), Pixels(28.0));
    }

    #[test]
    fn test_grows_to_five_wrapped_lines() {
        let mut a = area().value("x".repeat(45));
        assert_eq!(a.line_count(), 5);
        resize(&mut a);
        assert_eq!(a.displayed_height(), a.height_for_lines(5));
        assert_ne!(a.displayed_height(), a.height_for_lines(1));
        assert!(!a.is_scrolling());
    }

    #[test]
    fn test_shrinks_after_delete() {
        let mut a = area().value("x".repeat(45));
        resize(&mut a);
        assert_eq!(a.displayed_height(), Pixels(100.0));

        a.backspace(40);
        assert_eq!(a.line_count(), 1);
        resize(&mut a);
        assert_eq!(a.displayed_height(), Pixels(20.0));
    }

    #[test]
    fn test_without_reset_height_would_stick() {
        let mut a = area().value("x".repeat(45));
        resize(&mut a);
        a.backspace(40);
        // Measuring with the override still in place reports the old box.
        assert_eq!(a.content_height(), Pixels(100.0));
    }

    #[test]
    fn test_idempotent() {
        let mut a = area().value("hello\nworld\nagain");
        let once = resize(&mut a);
        let twice = resize(&mut a);
        assert_eq!(once, twice);
        assert_eq!(a.displayed_height(), Pixels(60.0));
    }

    #[test]
    fn test_height_tracks_content_for_many_lengths() {
        let mut a = area();
        for lines in 1..=30 {
            a.set_text(vec!["line"; lines].join("\n"));
            resize(&mut a);
            assert_eq!(a.displayed_height(), a.height_for_lines(lines));
            assert!(!a.is_scrolling());
        }
        // and back down again
        for lines in (1..=30).rev() {
            a.set_text(vec!["line"; lines].join("\n"));
            resize(&mut a);
            assert_eq!(a.displayed_height(), a.height_for_lines(lines));
        }
    }

    #[test]
    fn test_rows_set_minimum() {
        let mut a = area().rows(3).value("one line");
        resize(&mut a);
        assert_eq!(a.displayed_height(), a.height_for_lines(3));
    }

    #[test]
    fn test_max_height_leaves_scrollbar() {
        let mut a = area().value("x".repeat(200));
        auto_resize(&mut a, ResizeLimits::with_max_height(Pixels(80.0)));
        assert_eq!(a.displayed_height(), Pixels(80.0));
        assert!(a.is_scrolling());
    }

    #[test]
    fn test_fractional_line_height_rounds_up() {
        let mut a = TextArea::new()
            .metrics(TextMetrics::new(16.0))
            .padding(Pixels::ZERO);
        resize(&mut a);
        // 19.2px line reported as a whole pixel
        assert_eq!(a.displayed_height(), Pixels(20.0));
    }

    #[test]
    fn test_editing_helpers() {
        let mut a = area();
        a.push_str("abc");
        a.backspace(10);
        assert_eq!(a.text(), "");
        a.set_placeholder("What are you thinking about?");
        assert_eq!(a.placeholder(), "What are you thinking about?");
        a.push_str("x");
        a.clear();
        assert_eq!(a.line_count(), 1);
    }
}
