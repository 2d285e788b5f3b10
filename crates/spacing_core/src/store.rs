//! Spacing Store - keyed, subscribable state owned outside the simulation
//!
//! Settings such as the animation configuration and accessibility flags live
//! in a store owned by the host shell. The simulation never reads the store
//! directly; the host subscribes to changes and hands fresh snapshots to the
//! components that need them.
//!
//! # Example
//!
//! ```ignore
//! use spacing_core::store::Store;
//!
//! #[derive(Clone, Default)]
//! struct Theme { dark: bool }
//!
//! let store = Store::<Theme>::new();
//! let handle = store.subscribe("app", |theme| println!("dark = {}", theme.dark));
//!
//! store.update("app", |t| t.dark = true);
//! store.unsubscribe(&handle);
//! ```

use rustc_hash::FxHashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock};

type Subscriber<T> = (u64, Box<dyn Fn(&T) + Send + Sync>);

/// A typed store for a specific state type
pub struct Store<T: Clone + Send + Sync + 'static> {
    /// State instances keyed by string ID
    instances: RwLock<FxHashMap<String, T>>,
    /// Subscribers for each instance
    subscribers: RwLock<FxHashMap<String, Vec<Subscriber<T>>>>,
    /// Factory function for creating default state
    default_factory: Box<dyn Fn() -> T + Send + Sync>,
    next_subscription: AtomicU64,
}

impl<T: Clone + Send + Sync + Default + 'static> Store<T> {
    /// Create a new store with Default as the factory
    pub fn new() -> Self {
        Self::with_factory(T::default)
    }
}

impl<T: Clone + Send + Sync + 'static> Store<T> {
    /// Create a new store with a custom factory function
    pub fn with_factory<F>(factory: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        Self {
            instances: RwLock::new(FxHashMap::default()),
            subscribers: RwLock::new(FxHashMap::default()),
            default_factory: Box::new(factory),
            next_subscription: AtomicU64::new(0),
        }
    }

    /// Get the state for a given key, creating it if it doesn't exist
    pub fn get(&self, key: &str) -> T {
        {
            let instances = self.instances.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(state) = instances.get(key) {
                return state.clone();
            }
        }

        let state = (self.default_factory)();
        self.instances
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), state.clone());
        state
    }

    /// Get the state if it exists, without creating
    pub fn try_get(&self, key: &str) -> Option<T> {
        self.instances
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    /// Set the state for a given key
    pub fn set(&self, key: &str, state: T) {
        {
            let mut instances = self.instances.write().unwrap_or_else(PoisonError::into_inner);
            instances.insert(key.to_string(), state.clone());
        }
        self.notify_subscribers(key, &state);
    }

    /// Update the state using a closure
    pub fn update<F>(&self, key: &str, f: F)
    where
        F: FnOnce(&mut T),
    {
        let state = {
            let mut instances = self.instances.write().unwrap_or_else(PoisonError::into_inner);
            let state = instances
                .entry(key.to_string())
                .or_insert_with(|| (self.default_factory)());
            f(state);
            state.clone()
        };
        self.notify_subscribers(key, &state);
    }

    /// Subscribe to state changes for a specific key
    pub fn subscribe<F>(&self, key: &str, callback: F) -> SubscriptionHandle
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let id = self.next_subscription.fetch_add(1, Ordering::Relaxed);
        let mut subscribers = self.subscribers.write().unwrap_or_else(PoisonError::into_inner);
        subscribers
            .entry(key.to_string())
            .or_default()
            .push((id, Box::new(callback)));

        SubscriptionHandle {
            key: key.to_string(),
            id,
        }
    }

    /// Remove a subscription. Unknown handles are ignored.
    pub fn unsubscribe(&self, handle: &SubscriptionHandle) {
        let mut subscribers = self.subscribers.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(subs) = subscribers.get_mut(&handle.key) {
            subs.retain(|(id, _)| *id != handle.id);
        }
    }

    /// Number of live subscriptions for a key
    pub fn subscriber_count(&self, key: &str) -> usize {
        self.subscribers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .map_or(0, Vec::len)
    }

    /// Notify all subscribers for a key
    fn notify_subscribers(&self, key: &str, state: &T) {
        let subscribers = self.subscribers.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(subs) = subscribers.get(key) {
            tracing::trace!(key, count = subs.len(), "notifying store subscribers");
            for (_, callback) in subs {
                callback(state);
            }
        }
    }
}

impl<T: Clone + Send + Sync + Default + 'static> Default for Store<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle for unsubscribing from store updates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionHandle {
    key: String,
    id: u64,
}

impl SubscriptionHandle {
    /// The store key this subscription watches
    pub fn key(&self) -> &str {
        &self.key
    }
}
