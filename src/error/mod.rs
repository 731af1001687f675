mod clipboard;
mod theme;

pub use clipboard::ClipboardError;
pub use theme::ThemeError;
