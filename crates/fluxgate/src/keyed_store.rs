//! Flat keyed store: one shared dispatcher, one state value per key.
//!
//! All keys share a single notification stream. Use
//! [`KeyedStoreCollection`](crate::KeyedStoreCollection) when each key needs
//! its own subscribers.

use std::any::type_name;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::Arc;

use crate::dispatcher::Dispatcher;
use crate::error::Result;
use crate::registry::DispatcherRegistry;
use crate::result::{ChangeMarker, KeyedStateChanged, SenderId, StateChanged};
use crate::store::reduce_into;
use crate::subscribers::{SubscriptionId, Subscribers};

/// Factory for the state of lazily created entries
pub type InitialState<S> = Box<dyn Fn() -> S + Send + Sync>;

/// Callback invoked after every dispatch on any key of a [`KeyedStore`]
pub type KeyedStateListener<K, S, A> =
    dyn for<'a> FnMut(&KeyedStateChanged<'a, K, S, A>) + Send;

/// State of a single key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyedSlot<S> {
    item: S,
    marker: ChangeMarker,
}

impl<S> KeyedSlot<S> {
    fn new(item: S) -> Self {
        Self {
            item,
            marker: ChangeMarker::initial(),
        }
    }

    pub fn item(&self) -> &S {
        &self.item
    }

    pub fn marker(&self) -> ChangeMarker {
        self.marker
    }
}

pub struct KeyedStore<K, D: Dispatcher> {
    dispatcher: Arc<D>,
    initial: InitialState<D::State>,
    items: HashMap<K, KeyedSlot<D::State>>,
    subscribers: Subscribers<KeyedStateListener<K, D::State, D::Action>>,
}

impl<K, D> KeyedStore<K, D>
where
    K: Eq + Hash + Clone + Debug,
    D: Dispatcher,
{
    /// New entries start from `D::State::default()`
    pub fn new(dispatcher: Arc<D>) -> Self {
        Self::with_initial(dispatcher, D::State::default)
    }

    /// New entries start from whatever `initial` returns
    pub fn with_initial<F>(dispatcher: Arc<D>, initial: F) -> Self
    where
        F: Fn() -> D::State + Send + Sync + 'static,
    {
        Self {
            dispatcher,
            initial: Box::new(initial),
            items: HashMap::new(),
            subscribers: Subscribers::new(),
        }
    }

    pub fn from_registry(registry: &DispatcherRegistry) -> Result<Self> {
        Ok(Self::new(registry.resolve::<D>()?))
    }

    /// Lookup only, never creates
    pub fn get_store(&self, key: &K) -> Option<&KeyedSlot<D::State>> {
        self.items.get(key)
    }

    pub fn get_item(&self, key: &K) -> Option<&D::State> {
        self.items.get(key).map(KeyedSlot::item)
    }

    /// Existing entry for `key`, or a new one built from the initial-state factory
    pub fn get_or_create_store(&mut self, key: K) -> &KeyedSlot<D::State> {
        slot(&mut self.items, &self.initial, key, None)
    }

    /// Existing entry for `key`, or a new one seeded with `initial_state`.
    ///
    /// `initial_state` is dropped when the key already exists.
    pub fn get_or_create_store_with(
        &mut self,
        key: K,
        initial_state: D::State,
    ) -> &KeyedSlot<D::State> {
        slot(&mut self.items, &self.initial, key, Some(initial_state))
    }

    /// Forget the entry for `key`. Subscribers are not told.
    pub fn remove_store(&mut self, key: &K) -> bool {
        let removed = self.items.remove(key).is_some();
        if removed {
            log::debug!("Removed {} store for {:?}", type_name::<D::State>(), key);
        }
        removed
    }

    /// Dispatch to the entry for `key`, creating it first if needed
    pub fn dispatch(&mut self, key: K, action: D::Action) -> Result<&D::State> {
        self.apply(None, key, action)
    }

    pub fn dispatch_from(
        &mut self,
        sender: SenderId,
        key: K,
        action: D::Action,
    ) -> Result<&D::State> {
        self.apply(Some(sender), key, action)
    }

    /// Register a callback for changes on any key
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: for<'a> FnMut(&KeyedStateChanged<'a, K, D::State, D::Action>) + Send + 'static,
    {
        self.subscribers.subscribe(Box::new(listener))
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
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

    fn apply(&mut self, sender: Option<SenderId>, key: K, action: D::Action) -> Result<&D::State> {
        let entry = slot(&mut self.items, &self.initial, key.clone(), None);
        let (marker, applied) = reduce_into(
            self.dispatcher.as_ref(),
            &mut entry.item,
            &mut entry.marker,
            &action,
        )?;

        let change = KeyedStateChanged {
            key: &key,
            change: StateChanged {
                state: &entry.item,
                action: &action,
                sender,
                marker,
                applied,
            },
        };
        for listener in self.subscribers.iter_mut() {
            listener(&change);
        }

        Ok(&entry.item)
    }
}

fn slot<'m, K, S>(
    items: &'m mut HashMap<K, KeyedSlot<S>>,
    initial: &InitialState<S>,
    key: K,
    initial_state: Option<S>,
) -> &'m mut KeyedSlot<S>
where
    K: Eq + Hash + Debug,
{
    match items.entry(key) {
        Entry::Occupied(entry) => entry.into_mut(),
        Entry::Vacant(entry) => {
            log::debug!("Creating {} store for {:?}", type_name::<S>(), entry.key());
            let item = initial_state.unwrap_or_else(|| initial());
            entry.insert(KeyedSlot::new(item))
        }
    }
}

impl<K, D> Debug for KeyedStore<K, D>
where
    K: Debug,
    D: Dispatcher,
    D::State: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyedStore")
            .field("items", &self.items)
            .field("subscribers", &self.subscribers)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FluxGateError;
    use crate::test_support::{
        AppAction, CounterAction, CounterDispatcher, CounterState, LabelDispatcher,
    };
    use pretty_assertions::assert_eq;
    use std::sync::Mutex;

    fn counter_store() -> KeyedStore<&'static str, CounterDispatcher> {
        KeyedStore::new(Arc::new(CounterDispatcher))
    }

    #[test]
    fn test_dispatch_creates_missing_key() {
        let mut store = counter_store();
        assert!(store.get_store(&"a").is_none());

        let item = store.dispatch("a", CounterAction::Increment(5)).unwrap();
        assert_eq!(item.counter, 5);

        assert_eq!(store.get_item(&"a").map(|s| s.counter), Some(5));
        assert!(store.get_store(&"b").is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_get_store_does_not_create() {
        let store = counter_store();
        assert!(store.get_store(&"missing").is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_get_or_create_is_idempotent() {
        let mut store = counter_store();
        store.dispatch("a", CounterAction::Increment(2)).unwrap();

        let first = store.get_or_create_store("a").clone();
        let second = store.get_or_create_store("a").clone();

        assert_eq!(first, second);
        assert_eq!(first.item().counter, 2);
        assert_eq!(first.marker().version(), 1);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_get_or_create_with_seeds_only_new_keys() {
        let mut store = counter_store();
        let seeded = CounterState {
            counter: 40,
            label: "seed".to_string(),
        };

        assert_eq!(store.get_or_create_store_with("a", seeded.clone()).item(), &seeded);

        let ignored = CounterState {
            counter: -1,
            label: "ignored".to_string(),
        };
        assert_eq!(store.get_or_create_store_with("a", ignored).item(), &seeded);
    }

    #[test]
    fn test_remove_then_recreate_is_fresh() {
        let mut store = counter_store();
        store.dispatch("a", CounterAction::Increment(7)).unwrap();

        assert!(store.remove_store(&"a"));
        assert!(!store.remove_store(&"a"));
        assert!(!store.contains_key(&"a"));

        let slot = store.get_or_create_store("a");
        assert_eq!(slot.item(), &CounterState::default());
        assert!(!slot.marker().is_modified());
    }

    #[test]
    fn test_with_initial_factory() {
        let mut store = KeyedStore::with_initial(Arc::new(CounterDispatcher), || CounterState {
            counter: 100,
            label: "factory".to_string(),
        });

        let item = store.dispatch("a", CounterAction::Decrement(1)).unwrap();
        assert_eq!(item.counter, 99);
        assert_eq!(item.label, "factory");
    }

    #[test]
    fn test_keys_share_one_notification_stream() {
        let mut store = counter_store();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        store.subscribe(move |change| {
            sink.lock()
                .unwrap()
                .push((*change.key, change.change.state.counter))
        });

        store.dispatch("a", CounterAction::Increment(1)).unwrap();
        store.dispatch("b", CounterAction::Increment(10)).unwrap();
        store.dispatch("a", CounterAction::Increment(1)).unwrap();

        assert_eq!(*seen.lock().unwrap(), vec![("a", 1), ("b", 10), ("a", 2)]);
    }

    #[test]
    fn test_remove_is_silent() {
        let mut store = counter_store();
        let calls = Arc::new(Mutex::new(0));
        let sink = calls.clone();
        store.subscribe(move |_| *sink.lock().unwrap() += 1);

        store.dispatch("a", CounterAction::Increment(1)).unwrap();
        store.remove_store(&"a");

        assert_eq!(*calls.lock().unwrap(), 1);
    }

    #[test]
    fn test_unrecognized_action_on_keyed_store() {
        let mut store: KeyedStore<u32, LabelDispatcher> =
            KeyedStore::new(Arc::new(LabelDispatcher));
        let err = store
            .dispatch(1, AppAction::Counter(CounterAction::Increment(1)))
            .unwrap_err();

        assert!(matches!(err, FluxGateError::UnrecognizedAction { .. }));
        // The entry exists, but holds the untouched default
        assert_eq!(store.get_item(&1).map(|s| s.text.as_str()), Some(""));
        assert!(!store.get_store(&1).unwrap().marker().is_modified());
    }

    #[test]
    fn test_dispatch_from_passes_sender_and_key() {
        let mut store = counter_store();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        store.subscribe(move |change| {
            sink.lock()
                .unwrap()
                .push((*change.key, change.change.sender))
        });

        let sender = SenderId::new();
        store
            .dispatch_from(sender, "a", CounterAction::Increment(1))
            .unwrap();
        store.dispatch("b", CounterAction::Increment(1)).unwrap();

        assert_eq!(*seen.lock().unwrap(), vec![("a", Some(sender)), ("b", None)]);
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let mut store = counter_store();
        let calls = Arc::new(Mutex::new(0));
        let sink = calls.clone();
        let id = store.subscribe(move |_| *sink.lock().unwrap() += 1);

        store.dispatch("a", CounterAction::Increment(1)).unwrap();
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.dispatch("a", CounterAction::Increment(1)).unwrap();

        assert_eq!(*calls.lock().unwrap(), 1);
        assert_eq!(store.get_item(&"a").map(|s| s.counter), Some(2));
    }

    #[test]
    fn test_from_registry_requires_dispatcher() {
        let mut registry = DispatcherRegistry::new();
        let missing = KeyedStore::<String, CounterDispatcher>::from_registry(&registry);
        assert!(matches!(missing, Err(FluxGateError::MissingDispatcher { .. })));

        registry.register(Arc::new(CounterDispatcher));
        let store = KeyedStore::<String, CounterDispatcher>::from_registry(&registry);
        assert!(store.unwrap().is_empty());
    }
}
