//! Store - owns one live state value and applies actions to it

use std::any::type_name;
use std::sync::Arc;

use crate::dispatcher::Dispatcher;
use crate::error::Result;
use crate::registry::DispatcherRegistry;
use crate::result::{ChangeMarker, SenderId, StateChanged};
use crate::subscribers::{SubscriptionId, Subscribers};

/// Callback invoked after every dispatch on a [`Store`]
pub type StateListener<S, A> = dyn for<'a> FnMut(&StateChanged<'a, S, A>) + Send;

/// Redux-style store holding exactly one state value of one state type.
///
/// - State is only changed through [`Store::dispatch`]
/// - The dispatcher is shared and stateless, the state is owned by the store
/// - Every successful dispatch notifies all subscribers exactly once, in
///   registration order, before `dispatch` returns
///
/// # Example
///
/// ```rust
/// # use std::sync::Arc;
/// # use fluxgate::{DispatchResult, Dispatcher, Result, Store};
/// #[derive(Debug, Default)]
/// struct CounterState {
///     counter: i32,
/// }
///
/// #[derive(Debug)]
/// enum CounterAction {
///     Increment(i32),
/// }
///
/// struct CounterDispatcher;
///
/// impl Dispatcher for CounterDispatcher {
///     type State = CounterState;
///     type Action = CounterAction;
///
///     fn dispatch(
///         &self,
///         state: &CounterState,
///         action: &CounterAction,
///     ) -> Result<DispatchResult<CounterState>> {
///         let CounterAction::Increment(by) = action;
///         Ok(DispatchResult::modified(CounterState {
///             counter: state.counter.wrapping_add(*by),
///         }))
///     }
/// }
///
/// # fn main() -> Result<()> {
/// let mut store = Store::new(Arc::new(CounterDispatcher));
/// store.subscribe(|change| println!("counter is now {}", change.state.counter));
///
/// store.dispatch(CounterAction::Increment(3))?;
/// assert_eq!(store.item().counter, 3);
/// # Ok(())
/// # }
/// ```
pub struct Store<D: Dispatcher> {
    dispatcher: Arc<D>,
    item: D::State,
    marker: ChangeMarker,
    subscribers: Subscribers<StateListener<D::State, D::Action>>,
}

impl<D: Dispatcher> Store<D> {
    /// Create a store starting from the state's default value
    pub fn new(dispatcher: Arc<D>) -> Self {
        Self::with_state(dispatcher, D::State::default())
    }

    /// Create a store seeded with an explicit initial state
    pub fn with_state(dispatcher: Arc<D>, initial_state: D::State) -> Self {
        Self {
            dispatcher,
            item: initial_state,
            marker: ChangeMarker::initial(),
            subscribers: Subscribers::new(),
        }
    }

    /// Create a store using the dispatcher registered for `D::State`
    pub fn from_registry(registry: &DispatcherRegistry) -> Result<Self> {
        Ok(Self::new(registry.resolve::<D>()?))
    }

    /// Same as [`Store::from_registry`] with an explicit initial state
    pub fn from_registry_with_state(
        registry: &DispatcherRegistry,
        initial_state: D::State,
    ) -> Result<Self> {
        Ok(Self::with_state(registry.resolve::<D>()?, initial_state))
    }

    /// Current state
    pub fn item(&self) -> &D::State {
        &self.item
    }

    /// Change version of the current state
    pub fn marker(&self) -> ChangeMarker {
        self.marker
    }

    pub fn dispatcher(&self) -> &Arc<D> {
        &self.dispatcher
    }

    /// Register a callback for state changes
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: for<'a> FnMut(&StateChanged<'a, D::State, D::Action>) + Send + 'static,
    {
        self.subscribers.subscribe(Box::new(listener))
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Apply an action and notify subscribers.
    ///
    /// On error nothing changes: neither the state nor the marker, and no
    /// subscriber is called.
    pub fn dispatch(&mut self, action: D::Action) -> Result<&D::State> {
        self.apply(None, action)
    }

    /// Like [`Store::dispatch`], passing the sender on to subscribers
    pub fn dispatch_from(&mut self, sender: SenderId, action: D::Action) -> Result<&D::State> {
        self.apply(Some(sender), action)
    }

    fn apply(&mut self, sender: Option<SenderId>, action: D::Action) -> Result<&D::State> {
        let (marker, applied) = reduce_into(
            self.dispatcher.as_ref(),
            &mut self.item,
            &mut self.marker,
            &action,
        )?;

        let change = StateChanged {
            state: &self.item,
            action: &action,
            sender,
            marker,
            applied,
        };
        for listener in self.subscribers.iter_mut() {
            listener(&change);
        }

        Ok(&self.item)
    }
}

/// Run the dispatcher and swap the result into `item`.
///
/// Returns the new marker (if the result was marked as modified) and the
/// applied flag. `item` and `marker` are left alone when the dispatcher fails.
pub(crate) fn reduce_into<D: Dispatcher>(
    dispatcher: &D,
    item: &mut D::State,
    marker: &mut ChangeMarker,
    action: &D::Action,
) -> Result<(Option<ChangeMarker>, bool)> {
    let result = dispatcher.dispatch(item, action)?;

    let new_marker = if result.modified {
        *marker = marker.next();
        Some(*marker)
    } else {
        None
    };
    *item = result.state;

    log::trace!(
        "{}: {:?} (applied: {}, version: {})",
        type_name::<D::State>(),
        action,
        result.applied,
        marker.version()
    );

    Ok((new_marker, result.applied))
}

impl<D> std::fmt::Debug for Store<D>
where
    D: Dispatcher,
    D::State: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("item", &self.item)
            .field("marker", &self.marker)
            .field("subscribers", &self.subscribers)
            .finish()
    }
}
