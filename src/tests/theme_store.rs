use std::cell::RefCell;
use std::rc::Rc;
use crate::error::ThemeError;
use crate::utils::{ MemoryStorage, Theme, ThemeStore };
use super::common::{ self, mocks::* };

const KEY: &str = "theme";

fn store_with(storage: &MemoryStorage) -> (ThemeStore, RecordingRoot) {
    let root = RecordingRoot::default();
    let store = ThemeStore::load(KEY, Box::new(storage.clone()), Box::new(root.clone()));
    (store, root)
}

#[test]
fn test_toggle_twice_is_identity() {
    for start in [Theme::Light, Theme::Dark] {
        assert_eq!(start.toggled().toggled(), start);
    }
}

#[test]
fn test_toggle_flips_to_the_other_theme() {
    for start in [Theme::Light, Theme::Dark] {
        let next = start.toggled();
        assert_ne!(next, start);
        assert!(matches!(next, Theme::Light | Theme::Dark));
    }
}

#[test]
fn test_theme_literals_round_trip() {
    assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
    assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
    assert_eq!(Theme::Dark.to_string(), "dark");
    assert_eq!(
        "Dark".parse::<Theme>(),
        Err(ThemeError::InvalidValue("Dark".to_string()))
    );
}

#[test]
fn test_serde_form_matches_storage_literal() {
    for theme in [Theme::Light, Theme::Dark] {
        let json = serde_json::to_string(&theme).unwrap();
        assert_eq!(json, format!("\"{}\"", theme.as_str()));
        let back: Theme = serde_json::from_str(&json).unwrap();
        assert_eq!(back, theme);
    }
}

#[test]
fn test_empty_storage_defaults_to_light() {
    common::setup();
    let (store, root) = store_with(&MemoryStorage::new());
    assert_eq!(store.theme(), Theme::Light);
    assert_eq!(root.history(), vec![Theme::Light]);
}

#[test]
fn test_invalid_stored_value_defaults_to_light() {
    common::setup();
    let storage = MemoryStorage::with_entry(KEY, "sepia");
    let (store, _) = store_with(&storage);
    assert_eq!(store.theme(), Theme::Light);
}

#[test]
fn test_stored_dark_is_restored() {
    let storage = MemoryStorage::with_entry(KEY, "dark");
    let (store, root) = store_with(&storage);
    assert_eq!(store.theme(), Theme::Dark);
    assert_eq!(root.history(), vec![Theme::Dark]);
}

#[test]
fn test_toggle_applies_and_persists() {
    let storage = MemoryStorage::new();
    let (mut store, root) = store_with(&storage);

    assert_eq!(store.toggle(), Theme::Dark);
    assert_eq!(store.theme(), Theme::Dark);
    assert_eq!(storage.get(KEY).as_deref(), Some("dark"));
    assert_eq!(root.history(), vec![Theme::Light, Theme::Dark]);

    assert_eq!(store.toggle(), Theme::Light);
    assert_eq!(storage.get(KEY).as_deref(), Some("light"));
}

#[test]
fn test_persistence_round_trip() {
    let storage = MemoryStorage::new();
    let (mut store, _) = store_with(&storage);
    let set = store.toggle();

    let (reloaded, _) = store_with(&storage);
    assert_eq!(reloaded.theme(), set);
}

#[test]
fn test_custom_storage_key() {
    let storage = MemoryStorage::new();
    let mut store = ThemeStore::load(
        "agentflux-theme",
        Box::new(storage.clone()),
        Box::new(RecordingRoot::default())
    );
    store.toggle();
    assert_eq!(store.storage_key(), "agentflux-theme");
    assert_eq!(storage.get("agentflux-theme").as_deref(), Some("dark"));
    assert_eq!(storage.get(KEY), None);
}

#[test]
fn test_unavailable_storage_still_toggles() {
    common::setup();
    let mut store = ThemeStore::load(KEY, Box::new(UnavailableStorage), Box::new(RecordingRoot::default()));
    assert_eq!(store.theme(), Theme::Light);
    assert_eq!(store.toggle(), Theme::Dark);
    assert_eq!(store.theme(), Theme::Dark);
}

#[test]
fn test_write_failure_keeps_in_memory_value() {
    common::setup();
    let storage = QuotaExceededStorage { stored: Some("dark".to_string()) };
    let mut store = ThemeStore::load(KEY, Box::new(storage), Box::new(RecordingRoot::default()));
    assert_eq!(store.theme(), Theme::Dark);
    assert_eq!(store.toggle(), Theme::Light);
    assert_eq!(store.theme(), Theme::Light);
}

#[test]
fn test_detached_root_does_not_block_toggle() {
    common::setup();
    let storage = MemoryStorage::new();
    let mut store = ThemeStore::load(KEY, Box::new(storage.clone()), Box::new(DetachedRoot));
    store.toggle();
    assert_eq!(store.theme(), Theme::Dark);
    assert_eq!(storage.get(KEY).as_deref(), Some("dark"));
}

#[test]
fn test_subscribers_are_notified_until_unsubscribed() {
    let (mut store, _) = store_with(&MemoryStorage::new());
    let seen = Rc::new(RefCell::new(Vec::new()));
    let other = Rc::new(RefCell::new(0));

    let id = {
        let seen = seen.clone();
        store.subscribe(move |theme| seen.borrow_mut().push(theme))
    };
    {
        let other = other.clone();
        store.subscribe(move |_| {
            *other.borrow_mut() += 1;
        });
    }

    store.toggle();
    store.toggle();
    assert_eq!(*seen.borrow(), vec![Theme::Dark, Theme::Light]);

    assert!(store.unsubscribe(id));
    assert!(!store.unsubscribe(id));
    store.toggle();
    assert_eq!(seen.borrow().len(), 2);
    assert_eq!(*other.borrow(), 3);
}

#[test]
fn test_reload_scenario() {
    common::setup();
    let device = MemoryStorage::new();

    let (mut store, _) = store_with(&device);
    assert_eq!(store.theme(), Theme::Light);
    store.toggle();
    assert_eq!(store.theme(), Theme::Dark);
    drop(store);

    let (restarted, _) = store_with(&device);
    assert_eq!(restarted.theme(), Theme::Dark);
}
