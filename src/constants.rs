//! Fixed identifiers shared by the browser glue and the native demo.

/// DOM id of the post textarea, also the submitted form field name.
pub const ELEMENT_ID: &str = "postinput";

/// DOM event that fires on every edit of the textarea.
pub const INPUT_EVENT: &str = "input";

/// Placeholder prompts for an empty submit field.
pub const DEFAULT_SUBMIT_PROMPTS: [&str; 4] = [
    "What are you thinking about?",
    "What would you like to tell the world?",
    "What are you doing right now?",
    "What are you planning for tomorrow?",
];

/// Largest post accepted, in bytes after trimming.
pub const MAX_POST_BYTES: usize = 1024;
