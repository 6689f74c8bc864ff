use thiserror::Error;

/// Failures while binding to the page.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomError {
    #[error("No global window object")]
    NoWindow,

    #[error("Window has no document")]
    NoDocument,

    #[error("No element with id '{0}'")]
    ElementNotFound(String),

    #[error("Element '{0}' is not an HTML element")]
    NotHtmlElement(String),

    #[error("Failed to update style: {0}")]
    Style(String),

    #[error("Failed to register '{event}' listener: {reason}")]
    Listener { event: String, reason: String },
}
