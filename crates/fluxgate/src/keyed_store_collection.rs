//! Nested keyed stores: one independent [`Store`] per key.
//!
//! Each key has its own subscribers, so listening on key A never fires for
//! mutations on key B.

use std::any::type_name;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::Arc;

use crate::dispatcher::Dispatcher;
use crate::error::Result;
use crate::keyed_store::InitialState;
use crate::registry::DispatcherRegistry;
use crate::result::SenderId;
use crate::store::Store;

pub struct KeyedStoreCollection<K, D: Dispatcher> {
    dispatcher: Arc<D>,
    initial: InitialState<D::State>,
    items: HashMap<K, Store<D>>,
}

impl<K, D> KeyedStoreCollection<K, D>
where
    K: Eq + Hash + Debug,
    D: Dispatcher,
{
    pub fn new(dispatcher: Arc<D>) -> Self {
        Self::with_initial(dispatcher, D::State::default)
    }

    /// Lazily created stores start from whatever `initial` returns
    pub fn with_initial<F>(dispatcher: Arc<D>, initial: F) -> Self
    where
        F: Fn() -> D::State + Send + Sync + 'static,
    {
        Self {
            dispatcher,
            initial: Box::new(initial),
            items: HashMap::new(),
        }
    }

    pub fn from_registry(registry: &DispatcherRegistry) -> Result<Self> {
        Ok(Self::new(registry.resolve::<D>()?))
    }

    /// Lookup only, never creates
    pub fn get_store(&self, key: &K) -> Option<&Store<D>> {
        self.items.get(key)
    }

    /// Mutable lookup, e.g. to subscribe to an existing key
    pub fn get_store_mut(&mut self, key: &K) -> Option<&mut Store<D>> {
        self.items.get_mut(key)
    }

    pub fn get_item(&self, key: &K) -> Option<&D::State> {
        self.items.get(key).map(Store::item)
    }

    /// Insert a new store seeded with `state`.
    ///
    /// Returns `false` and leaves the existing store alone when `key` is
    /// already present.
    pub fn add_store(&mut self, key: K, state: D::State) -> bool {
        match self.items.entry(key) {
            Entry::Occupied(entry) => {
                log::debug!(
                    "{} store for {:?} already exists",
                    type_name::<D::State>(),
                    entry.key()
                );
                false
            }
            Entry::Vacant(entry) => {
                log::debug!("Adding {} store for {:?}", type_name::<D::State>(), entry.key());
                entry.insert(Store::with_state(self.dispatcher.clone(), state));
                true
            }
        }
    }

    /// Existing store for `key`, or a new one built from the initial-state factory
    pub fn get_or_create_store(&mut self, key: K) -> &mut Store<D> {
        self.store(key, None)
    }

    /// Existing store for `key`, or a new one seeded with `initial_state`
    pub fn get_or_create_store_with(&mut self, key: K, initial_state: D::State) -> &mut Store<D> {
        self.store(key, Some(initial_state))
    }

    /// Drop the store for `key` together with its subscribers. Nobody is told.
    pub fn remove_store(&mut self, key: &K) -> bool {
        let removed = self.items.remove(key).is_some();
        if removed {
            log::debug!("Removed {} store for {:?}", type_name::<D::State>(), key);
        }
        removed
    }

    /// Dispatch to the store for `key`, creating it first if needed
    pub fn dispatch(&mut self, key: K, action: D::Action) -> Result<&D::State> {
        self.get_or_create_store(key).dispatch(action)
    }

    pub fn dispatch_from(
        &mut self,
        sender: SenderId,
        key: K,
        action: D::Action,
    ) -> Result<&D::State> {
        self.get_or_create_store(key).dispatch_from(sender, action)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.items.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.items.keys()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn store(&mut self, key: K, initial_state: Option<D::State>) -> &mut Store<D> {
        match self.items.entry(key) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                log::debug!("Creating {} store for {:?}", type_name::<D::State>(), entry.key());
                let item = initial_state.unwrap_or_else(|| (self.initial)());
                entry.insert(Store::with_state(self.dispatcher.clone(), item))
            }
        }
    }
}

impl<K, D> Debug for KeyedStoreCollection<K, D>
where
    K: Debug,
    D: Dispatcher,
    D::State: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyedStoreCollection")
            .field("items", &self.items)
            .finish()
    }
}
