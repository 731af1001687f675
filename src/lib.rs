mod views;
mod components;
mod utils;
mod configs;
mod content;
mod error;
#[cfg(test)]
mod tests;

pub use crate::views::*;
pub use crate::components::*;
pub use crate::utils::*;
pub use crate::content::*;
pub use crate::configs::SiteConfig;
pub use crate::error::{ ClipboardError, ThemeError };
