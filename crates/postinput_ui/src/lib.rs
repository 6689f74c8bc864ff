//! postinput_ui - platform-independent pieces of the auto-growing post field
//!
//! - [`auto_resize`] - clear the forced height, measure, apply
//! - [`TextEntry`] - what an element must offer for that to work
//! - [`TextArea`] - headless textarea with browser-like height rules
//! - [`Pixels`] / [`TextMetrics`] - units and approximate font metrics

pub mod entry;
pub mod text_area;
pub mod text_metrics;
pub mod units;

pub use entry::{auto_resize, HeightOverride, ResizeLimits, TextEntry};
pub use text_area::TextArea;
pub use text_metrics::TextMetrics;
pub use units::Pixels;
