use crate::error::ClipboardError;

/// Writes `text` to the system clipboard.
#[cfg(target_arch = "wasm32")]
pub async fn copy_text(text: &str) -> Result<(), ClipboardError> {
    let window = web_sys::window().ok_or_else(|| ClipboardError::Unavailable("no window".to_string()))?;
    let promise = window.navigator().clipboard().write_text(text);
    wasm_bindgen_futures::JsFuture::from(promise).await
        .map(|_| ())
        .map_err(|e| ClipboardError::Rejected(format!("{:?}", e)))
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn copy_text(text: &str) -> Result<(), ClipboardError> {
    use dioxus::document::EvalError;

    let script = format!("return await navigator.clipboard.writeText({});", serde_json::to_string(text)?);
    dioxus::document::eval(&script).await
        .map(|_| ())
        .map_err(|e| match e {
            EvalError::Unsupported => ClipboardError::Unavailable(e.to_string()),
            other => ClipboardError::Rejected(other.to_string()),
        })
}

/// Tracks the "Copied!" indicator of a copy button.
///
/// Each successful copy hands out a ticket; only the timer holding the latest
/// ticket may clear the indicator, so a second click restarts the full
/// feedback window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CopyFeedback {
    generation: u32,
    copied: bool,
}

impl CopyFeedback {
    pub fn mark_copied(&mut self) -> u32 {
        self.generation = self.generation.wrapping_add(1);
        self.copied = true;
        self.generation
    }

    /// Clears the indicator if `ticket` is still current. Returns whether it
    /// did.
    pub fn expire(&mut self, ticket: u32) -> bool {
        if self.copied && ticket == self.generation {
            self.copied = false;
            true
        } else {
            false
        }
    }

    pub fn is_copied(&self) -> bool {
        self.copied
    }
}
