//! # fluxgate
//!
//! A small action-dispatch state container, independent of any UI framework.
//!
//! State is held in a [`Store`] and only changes through actions. Each state
//! type has one [`Dispatcher`], a pure function from (state, action) to the
//! next state, and every dispatch synchronously notifies the store's
//! subscribers.
//!
//! ## Design
//!
//! ```text
//! Action → Store::dispatch → Dispatcher → new State → subscribers
//! ```
//!
//! For many instances of the same state type addressed by a key:
//! - [`KeyedStore`] keeps one state value per key and one shared notification
//!   stream for all keys
//! - [`KeyedStoreCollection`] keeps one full [`Store`] per key, each with its
//!   own subscribers
//!
//! Both create entries lazily on first dispatch and remove them silently.
//!
//! ## Errors
//!
//! Only wiring mistakes are errors ([`FluxGateError`]): an action variant the
//! dispatcher does not handle, or a missing dispatcher registration in the
//! [`DispatcherRegistry`]. Missing or duplicate keys are reported as
//! `Option`/`bool`.
//!
//! ## Concurrency
//!
//! Everything is synchronous and single-writer: mutating methods take
//! `&mut self`. Wrap a store in a `Mutex` if several threads need to dispatch.

pub mod dispatcher;
pub mod error;
pub mod keyed_store;
pub mod keyed_store_collection;
pub mod registry;
pub mod result;
pub mod store;
pub mod subscribers;

#[cfg(test)]
mod test_support;

pub use dispatcher::{unrecognized, Dispatcher};
pub use error::{FluxGateError, Result};
pub use keyed_store::{KeyedSlot, KeyedStateListener, KeyedStore};
pub use keyed_store_collection::KeyedStoreCollection;
pub use registry::DispatcherRegistry;
pub use result::{ChangeMarker, DispatchResult, KeyedStateChanged, SenderId, StateChanged};
pub use store::{StateListener, Store};
pub use subscribers::{SubscriptionId, Subscribers};
