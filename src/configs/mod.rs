mod site;

pub use site::SiteConfig;
#[cfg(test)]
pub(crate) use site::{ DEFAULT_COPY_FEEDBACK_MS, DEFAULT_PAPER_URL, DEFAULT_THEME_KEY };
