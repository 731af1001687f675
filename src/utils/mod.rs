mod clipboard;
mod document;
mod storage;
mod theme_state;
mod timer;

pub use clipboard::{ copy_text, CopyFeedback };
pub use document::{ scroll_to_section, theme_root, ThemeRoot };
#[cfg(target_arch = "wasm32")]
pub use document::DocumentRoot;
#[cfg(not(target_arch = "wasm32"))]
pub use document::WebviewRoot;
pub use storage::{ preference_storage, MemoryStorage, PreferenceStorage };
#[cfg(target_arch = "wasm32")]
pub use storage::BrowserStorage;
pub use theme_state::{ SubscriptionId, Theme, ThemeStore };
pub use timer::sleep;
