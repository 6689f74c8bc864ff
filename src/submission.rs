//! Server-side view of the submitted post text.

use thiserror::Error;

use crate::constants::MAX_POST_BYTES;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("cowardly refusing to create an empty note")]
    Empty,

    #[error("note is {len} bytes, the limit is {max}")]
    TooLarge { len: usize, max: usize },
}

/// The text of a post as submitted through the `postinput` field.
///
/// Surrounding whitespace is dropped. A post with nothing left, or with
/// more than [`MAX_POST_BYTES`] left, is refused.
pub fn post_payload(raw: &str) -> Result<&str, SubmitError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(SubmitError::Empty);
    }
    if trimmed.len() > MAX_POST_BYTES {
        return Err(SubmitError::TooLarge {
            len: trimmed.len(),
            max: MAX_POST_BYTES,
        });
    }
    Ok(trimmed)
}
