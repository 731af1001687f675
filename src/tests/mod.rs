// Shared setup and test doubles
pub mod common;

mod content;
mod page;
mod theme_store;
#[cfg(not(target_arch = "wasm32"))]
mod webview;
