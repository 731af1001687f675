pub const DEFAULT_THEME_KEY: &str = "theme";
pub const DEFAULT_COPY_FEEDBACK_MS: u32 = 2000;
pub const DEFAULT_PAPER_URL: &str = "https://arxiv.org/abs/2510.00229";

const THEME_KEY_VAR: &str = "AGENTFLUX_THEME_KEY";
const COPY_FEEDBACK_VAR: &str = "AGENTFLUX_COPY_FEEDBACK_MS";
const PAPER_URL_VAR: &str = "AGENTFLUX_PAPER_URL";

/// Page settings, resolved once at startup and shared through context.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    /// localStorage key holding `"light"` or `"dark"`.
    pub theme_storage_key: String,
    /// How long the copy button shows "Copied!".
    pub copy_feedback_ms: u32,
    pub paper_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            theme_storage_key: DEFAULT_THEME_KEY.to_string(),
            copy_feedback_ms: DEFAULT_COPY_FEEDBACK_MS,
            paper_url: DEFAULT_PAPER_URL.to_string(),
        }
    }
}

impl SiteConfig {
    /// Reads the process environment (native only) and falls back to values
    /// baked in at build time.
    pub fn load() -> Self {
        Self::from_lookup(|name| {
            #[cfg(not(target_arch = "wasm32"))]
            {
                if let Ok(value) = std::env::var(name) {
                    return Some(value);
                }
            }
            baked(name).map(str::to_string)
        })
    }

    /// Builds the config from an arbitrary variable source. Invalid values are
    /// replaced by the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self where F: Fn(&str) -> Option<String> {
        let mut config = Self::default();

        if let Some(key) = lookup(THEME_KEY_VAR) {
            let key = key.trim();
            if key.is_empty() {
                log::warn!("{} is empty, using default key {:?}", THEME_KEY_VAR, DEFAULT_THEME_KEY);
            } else {
                config.theme_storage_key = key.to_string();
            }
        }

        if let Some(raw) = lookup(COPY_FEEDBACK_VAR) {
            match raw.trim().parse::<u32>() {
                Ok(ms) if ms > 0 => {
                    config.copy_feedback_ms = ms;
                }
                _ => {
                    log::warn!(
                        "{}={:?} is not a positive number of milliseconds, using {}",
                        COPY_FEEDBACK_VAR,
                        raw,
                        DEFAULT_COPY_FEEDBACK_MS
                    );
                }
            }
        }

        if let Some(url) = lookup(PAPER_URL_VAR) {
            let url = url.trim();
            if url.starts_with("https://") {
                config.paper_url = url.to_string();
            } else {
                log::warn!("{}={:?} is not an https URL, using {}", PAPER_URL_VAR, url, DEFAULT_PAPER_URL);
            }
        }

        log::info!(
            "Site config: theme key {:?}, copy feedback {}ms",
            config.theme_storage_key,
            config.copy_feedback_ms
        );
        config
    }
}

fn baked(name: &str) -> Option<&'static str> {
    match name {
        THEME_KEY_VAR => option_env!("AGENTFLUX_THEME_KEY"),
        COPY_FEEDBACK_VAR => option_env!("AGENTFLUX_COPY_FEEDBACK_MS"),
        PAPER_URL_VAR => option_env!("AGENTFLUX_PAPER_URL"),
        _ => None,
    }
}
