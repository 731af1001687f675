use std::fmt::{ Display, Formatter };
use std::str::FromStr;
use serde::{ Deserialize, Serialize };
use crate::error::ThemeError;
use super::document::ThemeRoot;
use super::storage::PreferenceStorage;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// The literal persisted to storage.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl Display for Theme {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ThemeError::InvalidValue(other.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(Theme)>;

/// Owns the theme preference for the lifetime of the page.
///
/// Reads never fail. `toggle` always flips the in-memory value; applying it to
/// the document root and persisting it are best effort and only logged when
/// they fail.
pub struct ThemeStore {
    current: Theme,
    key: String,
    storage: Box<dyn PreferenceStorage>,
    root: Box<dyn ThemeRoot>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl ThemeStore {
    /// Restores the persisted preference, or `Theme::Light` when there is none
    /// (or it cannot be read), and applies it to the root.
    pub fn load(
        key: impl Into<String>,
        storage: Box<dyn PreferenceStorage>,
        root: Box<dyn ThemeRoot>
    ) -> Self {
        let key = key.into();
        let current = match storage.read(&key) {
            Ok(Some(value)) =>
                value.parse::<Theme>().unwrap_or_else(|e| {
                    log::warn!("Ignoring stored theme under {:?}: {}", key, e);
                    Theme::default()
                }),
            Ok(None) => Theme::default(),
            Err(e) => {
                log::warn!("Could not read theme preference: {}", e);
                Theme::default()
            }
        };
        log::info!("Theme store initialised with {}", current);

        let store = Self {
            current,
            key,
            storage,
            root,
            subscribers: Vec::new(),
            next_subscription: 0,
        };
        store.apply_root();
        store
    }

    pub fn theme(&self) -> Theme {
        self.current
    }

    /// Flips the theme, then applies, persists and notifies. Returns the new
    /// value.
    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.toggled();
        log::info!("Theme switched to {}", self.current);

        self.apply_root();
        if let Err(e) = self.storage.write(&self.key, self.current.as_str()) {
            log::warn!("Theme preference not persisted: {}", e);
        }

        let theme = self.current;
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(theme);
        }
        theme
    }

    pub fn subscribe<F>(&mut self, subscriber: F) -> SubscriptionId where F: FnMut(Theme) + 'static {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Returns false when `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(existing, _)| *existing != id);
        self.subscribers.len() != before
    }

    pub fn storage_key(&self) -> &str {
        &self.key
    }

    fn apply_root(&self) {
        if let Err(e) = self.root.apply(self.current) {
            log::warn!("Could not apply {} theme to the document: {}", self.current, e);
        }
    }
}
