//! Typing session against a headless textarea.
//!
//! Drives the same handler the browser uses, one edit at a time, so the
//! native binary can show how the field grows and shrinks.

use postinput_ui::{auto_resize, Pixels, ResizeLimits, TextArea};

use crate::config::ResizeConfig;
use crate::prompt::placeholder_for;
use crate::submission::{post_payload, SubmitError};

/// One edit of the field, as read from a line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    /// Type a new line of text
    Append(String),
    /// Delete characters from the end
    Backspace(usize),
    /// Empty the field
    Clear,
    /// Submit the post and empty the field
    Submit,
}

impl Edit {
    /// Parse a command line.
    ///
    /// `\clear`, `\back [N]` and `\submit` are commands; anything else,
    /// including `\back` with a count that is not a whole number, is typed
    /// text. A lone backslash is typed as-is.
    pub fn parse(line: &str) -> Self {
        let line = line.trim_end_matches(['\r', '\n']);
        match line.strip_prefix('\\') {
            Some("clear") => Edit::Clear,
            Some("submit") => Edit::Submit,
            Some("back") => Edit::Backspace(1),
            Some(rest) => match rest.strip_prefix("back ") {
                Some(count) => count
                    .trim()
                    .parse()
                    .map(Edit::Backspace)
                    .unwrap_or_else(|_| Edit::Append(line.to_string())),
                None => Edit::Append(line.to_string()),
            },
            None => Edit::Append(line.to_string()),
        }
    }
}

/// State after an edit has been applied and the field resized.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub lines: usize,
    pub height: Pixels,
    /// Present only for [`Edit::Submit`]
    pub submitted: Option<Result<String, SubmitError>>,
}

pub struct Session {
    area: TextArea,
    limits: ResizeLimits,
}

impl Session {
    pub fn new(mut area: TextArea, config: &ResizeConfig) -> Self {
        if let Some(prompt) = placeholder_for(area.placeholder(), &config.placeholder_prompts) {
            area.set_placeholder(prompt);
        }
        let mut session = Self {
            area,
            limits: config.limits(),
        };
        session.resize();
        session
    }

    pub fn area(&self) -> &TextArea {
        &self.area
    }

    fn resize(&mut self) -> Pixels {
        auto_resize(&mut self.area, self.limits)
    }

    /// Apply `edit`, then resize as the input event would.
    pub fn apply(&mut self, edit: Edit) -> Outcome {
        let mut submitted = None;

        match edit {
            Edit::Append(text) => {
                if !self.area.text().is_empty() {
                    self.area.push_str("\n");
                }
                self.area.push_str(&text);
            }
            Edit::Backspace(count) => self.area.backspace(count),
            Edit::Clear => self.area.clear(),
            Edit::Submit => {
                let result = post_payload(self.area.text()).map(str::to_string);
                match &result {
                    Ok(post) => {
                        log::info!("Submitted post ({} chars)", post.chars().count());
                        self.area.clear();
                    }
                    Err(e) => log::warn!("Not submitted: {}", e),
                }
                submitted = Some(result);
            }
        }

        let height = self.resize();
        log::debug!(
            "{} line(s) -> {} (scrolling: {})",
            self.area.line_count(),
            height,
            self.area.is_scrolling()
        );

        Outcome {
            lines: self.area.line_count(),
            height,
            submitted,
        }
    }
}
