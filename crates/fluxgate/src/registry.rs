//! Dispatcher registry for the composition layer.
//!
//! Holds exactly one shared dispatcher per state type. Stores and keyed maps
//! can be built from it, and fail at construction when a state type was never
//! registered.

use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

use crate::dispatcher::Dispatcher;
use crate::error::{FluxGateError, Result};

#[derive(Default)]
pub struct DispatcherRegistry {
    dispatchers: HashMap<TypeId, Arc<dyn Any + Send + Sync>>,
}

impl DispatcherRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the dispatcher for `D::State`, replacing any earlier one
    pub fn register<D: Dispatcher>(&mut self, dispatcher: Arc<D>) -> &mut Self {
        let state = type_name::<D::State>();
        if self
            .dispatchers
            .insert(TypeId::of::<D::State>(), dispatcher)
            .is_some()
        {
            log::warn!("Replacing dispatcher registered for {}", state);
        } else {
            log::debug!("Registered {} for {}", type_name::<D>(), state);
        }
        self
    }

    /// Look up the dispatcher for `D::State`.
    ///
    /// Also fails when the state type was registered with a different
    /// dispatcher type than `D`.
    pub fn resolve<D: Dispatcher>(&self) -> Result<Arc<D>> {
        let state = type_name::<D::State>();
        self.dispatchers
            .get(&TypeId::of::<D::State>())
            .cloned()
            .and_then(|dispatcher| dispatcher.downcast::<D>().ok())
            .ok_or_else(|| {
                log::error!("No {} registered for {}", type_name::<D>(), state);
                FluxGateError::MissingDispatcher { state }
            })
    }

    pub fn contains<S: 'static>(&self) -> bool {
        self.dispatchers.contains_key(&TypeId::of::<S>())
    }

    pub fn len(&self) -> usize {
        self.dispatchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dispatchers.is_empty()
    }
}

impl std::fmt::Debug for DispatcherRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DispatcherRegistry")
            .field("dispatchers", &self.dispatchers.len())
            .finish()
    }
}
