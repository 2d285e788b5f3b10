//! Shared settings store
//!
//! The shell owns the field settings. The field reads a snapshot at mount
//! and picks up later changes through a [`SettingsWatch`], which raises a
//! dirty flag from the store's subscriber callback and is drained between
//! frames on the field's own loop.

use crate::config::{FieldSettings, SimulationConfig};
use spacing_core::{Store, SubscriptionHandle};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Store key the field settings live under
pub const SETTINGS_KEY: &str = "field";

/// Shared dirty flag raised when settings change
pub type DirtyFlag = Arc<AtomicBool>;

/// Process-wide field settings, cheap to clone and share with the shell
#[derive(Clone)]
pub struct SettingsStore {
    store: Arc<Store<FieldSettings>>,
}

impl SettingsStore {
    pub fn new(initial: FieldSettings) -> Self {
        let store = Store::new();
        store.set(SETTINGS_KEY, initial);
        Self {
            store: Arc::new(store),
        }
    }

    /// Current settings snapshot
    pub fn get(&self) -> FieldSettings {
        self.store.get(SETTINGS_KEY)
    }

    pub fn set(&self, settings: FieldSettings) {
        self.store.set(SETTINGS_KEY, settings);
    }

    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut FieldSettings),
    {
        self.store.update(SETTINGS_KEY, f);
    }

    pub fn set_animation(&self, config: SimulationConfig) {
        self.update(|s| s.background_animation = config);
    }

    pub fn set_reduced_motion(&self, reduced_motion: bool) {
        self.update(|s| s.accessibility_settings.reduced_motion = reduced_motion);
    }

    /// Start watching for changes. The watch unsubscribes when dropped.
    pub fn watch(&self) -> SettingsWatch {
        let dirty: DirtyFlag = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&dirty);
        let handle = self.store.subscribe(SETTINGS_KEY, move |_| {
            flag.store(true, Ordering::Release);
        });

        SettingsWatch {
            store: Arc::clone(&self.store),
            handle,
            dirty,
        }
    }

    pub(crate) fn watcher_count(&self) -> usize {
        self.store.subscriber_count(SETTINGS_KEY)
    }
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::new(FieldSettings::default())
    }
}

/// Change notification for one consumer of a [`SettingsStore`]
pub struct SettingsWatch {
    store: Arc<Store<FieldSettings>>,
    handle: SubscriptionHandle,
    dirty: DirtyFlag,
}

impl SettingsWatch {
    /// Whether a change is waiting to be taken
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::Acquire)
    }

    /// The latest settings if anything changed since the last call.
    /// Several writes in between collapse into one.
    pub fn take_changed(&mut self) -> Option<FieldSettings> {
        if self.dirty.swap(false, Ordering::AcqRel) {
            Some(self.store.get(SETTINGS_KEY))
        } else {
            None
        }
    }
}

impl Drop for SettingsWatch {
    fn drop(&mut self) {
        self.store.unsubscribe(&self.handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Intensity;

    #[test]
    fn test_get_and_set() {
        let settings = SettingsStore::default();
        assert_eq!(settings.get(), FieldSettings::default());

        settings.set_reduced_motion(true);
        assert!(settings.get().reduced_motion());
    }

    #[test]
    fn test_watch_collapses_changes() {
        let settings = SettingsStore::default();
        let mut watch = settings.watch();
        assert_eq!(watch.take_changed(), None);

        settings.set_animation(SimulationConfig::particles(Intensity::Medium));
        settings.set_animation(SimulationConfig::particles(Intensity::High));
        assert!(watch.is_dirty());

        let changed = watch.take_changed().unwrap();
        assert_eq!(changed.background_animation.intensity, Intensity::High);
        assert_eq!(watch.take_changed(), None);
    }

    #[test]
    fn test_shared_between_clones() {
        let shell = SettingsStore::default();
        let field = shell.clone();
        let mut watch = field.watch();

        shell.set_reduced_motion(true);

        assert!(watch.take_changed().unwrap().reduced_motion());
    }

    #[test]
    fn test_drop_unsubscribes() {
        let settings = SettingsStore::default();
        let watch = settings.watch();
        assert_eq!(settings.watcher_count(), 1);

        drop(watch);
        assert_eq!(settings.watcher_count(), 0);
    }
}
