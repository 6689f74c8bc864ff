//! Browser glue.
//!
//! Binds the resize handler to the post textarea: on module start it finds
//! the element, fills in a placeholder prompt, sizes it once and listens for
//! `input` events. `PostInput()` is exported as well so pages that call it
//! from an inline `oninput` attribute keep working.

use std::cell::RefCell;

use postinput_ui::{auto_resize, Pixels, TextEntry};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlElement, HtmlTextAreaElement};

use crate::config::ResizeConfig;
use crate::constants::INPUT_EVENT;
use crate::error::DomError;
use crate::prompt::placeholder_for;

thread_local! {
    /// Config loaded at start; PostInput() reads it on every call.
    static CONFIG: RefCell<Option<ResizeConfig>> = const { RefCell::new(None) };
}

fn current_config() -> ResizeConfig {
    CONFIG.with(|config| config.borrow().clone().unwrap_or_default())
}

impl From<DomError> for JsValue {
    fn from(err: DomError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

fn document() -> Result<Document, DomError> {
    web_sys::window()
        .ok_or(DomError::NoWindow)?
        .document()
        .ok_or(DomError::NoDocument)
}

/// A DOM element driven through its inline `height` style.
pub struct DomTextEntry {
    element: HtmlElement,
}

impl DomTextEntry {
    pub fn new(element: HtmlElement) -> Self {
        Self { element }
    }

    /// Resolve `id` in `document`.
    pub fn find(document: &Document, id: &str) -> Result<Self, DomError> {
        let element = document
            .get_element_by_id(id)
            .ok_or_else(|| DomError::ElementNotFound(id.to_string()))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| DomError::NotHtmlElement(id.to_string()))?;
        Ok(Self::new(element))
    }

    pub fn element(&self) -> &HtmlElement {
        &self.element
    }

    fn try_clear_height(&self) -> Result<(), DomError> {
        self.element
            .style()
            .remove_property("height")
            .map(|_| ())
            .map_err(|e| DomError::Style(format!("{:?}", e)))
    }

    fn try_set_height(&self, height: Pixels) -> Result<(), DomError> {
        self.element
            .style()
            .set_property("height", &height.to_string())
            .map_err(|e| DomError::Style(format!("{:?}", e)))
    }
}

impl TextEntry for DomTextEntry {
    fn clear_height_override(&mut self) {
        if let Err(e) = self.try_clear_height() {
            log::warn!("{}", e);
        }
    }

    fn content_height(&self) -> Pixels {
        Pixels::from(self.element.scroll_height())
    }

    fn set_height(&mut self, height: Pixels) {
        if let Err(e) = self.try_set_height(height) {
            log::warn!("{}", e);
        }
    }
}

/// Resize the post field to fit its content.
///
/// Called for every keystroke. A missing element is thrown back to the
/// caller as a JS error.
#[wasm_bindgen(js_name = PostInput)]
pub fn post_input() -> Result<(), JsValue> {
    let config = current_config();
    let mut entry = DomTextEntry::find(&document()?, &config.element_id)?;
    auto_resize(&mut entry, config.limits());
    Ok(())
}

/// Bind the handler to the configured element.
pub fn install(config: &ResizeConfig) -> Result<(), DomError> {
    let document = document()?;
    let mut entry = DomTextEntry::find(&document, &config.element_id)?;
    let element = entry.element().clone();

    if let Some(textarea) = element.dyn_ref::<HtmlTextAreaElement>() {
        if let Some(prompt) = placeholder_for(&textarea.placeholder(), &config.placeholder_prompts)
        {
            textarea.set_placeholder(prompt);
        }
    }

    let limits = config.limits();

    // Pre-filled content (e.g. after a failed submit) needs sizing before
    // the first keystroke.
    let initial = auto_resize(&mut entry, limits);
    log::debug!("#{} sized to {} on install", config.element_id, initial);

    let on_input = Closure::wrap(Box::new(move |_event: Event| {
        auto_resize(&mut entry, limits);
    }) as Box<dyn FnMut(Event)>);

    element
        .add_event_listener_with_callback(INPUT_EVENT, on_input.as_ref().unchecked_ref())
        .map_err(|e| DomError::Listener {
            event: INPUT_EVENT.to_string(),
            reason: format!("{:?}", e),
        })?;

    // Lives as long as the page.
    on_input.forget();

    log::info!("Auto-resize bound to #{}", config.element_id);
    Ok(())
}

fn install_or_warn(config: &ResizeConfig) {
    if let Err(e) = install(config) {
        log::warn!("Auto-resize not installed: {}", e);
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let config = ResizeConfig::load_from_local_storage().unwrap_or_default();
    if let Err(e) = console_log::init_with_level(config.log_level.to_level()) {
        web_sys::console::warn_1(&format!("Logger already initialized: {}", e).into());
    }

    CONFIG.with(|slot| *slot.borrow_mut() = Some(config.clone()));

    let document = match document() {
        Ok(document) => document,
        Err(e) => {
            log::warn!("Auto-resize not installed: {}", e);
            return;
        }
    };

    // Loaded from <head>: the textarea doesn't exist yet.
    if document.ready_state() == "loading" {
        let on_ready = Closure::once(move |_event: Event| {
            install_or_warn(&config);
        });

        if let Err(e) = document
            .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
        {
            log::warn!("Failed to wait for DOMContentLoaded: {:?}", e);
        }
        on_ready.forget();
    } else {
        install_or_warn(&config);
    }
}
