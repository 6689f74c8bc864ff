//! Placeholder prompts for the submit field.

/// Pick a random prompt, or None if there are none to pick from.
pub fn submit_prompt<S: AsRef<str>>(prompts: &[S]) -> Option<&str> {
    if prompts.is_empty() {
        return None;
    }
    let idx = random_index(prompts.len());
    prompts.get(idx).map(|p| p.as_ref())
}

/// Prompt to show in a field whose placeholder is currently `existing`.
///
/// A placeholder already set by the page is kept, so this only picks one
/// when `existing` is blank.
pub fn placeholder_for<'a, S: AsRef<str>>(
    existing: &str,
    prompts: &'a [S],
) -> Option<&'a str> {
    if !existing.trim().is_empty() {
        return None;
    }
    submit_prompt(prompts)
}

#[cfg(not(target_arch = "wasm32"))]
fn random_index(len: usize) -> usize {
    use rand::Rng;
    rand::thread_rng().gen_range(0..len)
}

#[cfg(target_arch = "wasm32")]
fn random_index(len: usize) -> usize {
    // Math.random() is in [0, 1); min() guards against rounding up to len.
    ((js_sys::Math::random() * len as f64) as usize).min(len - 1)
}
