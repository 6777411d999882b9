//! Dispatch results, change markers and notification payloads.

use uuid::Uuid;

/// Output of a single dispatcher call.
///
/// `modified` is the change marker request: the store advances its
/// [`ChangeMarker`] only when it is set. `applied` distinguishes a mutation
/// that went through from one the dispatcher rejected without it being a
/// wiring error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchResult<S> {
    pub state: S,
    pub modified: bool,
    pub applied: bool,
}

impl<S> DispatchResult<S> {
    /// The action was applied and produced a change
    pub fn modified(state: S) -> Self {
        Self {
            state,
            modified: true,
            applied: true,
        }
    }

    /// The action was applied but had no effective change
    pub fn unchanged(state: S) -> Self {
        Self {
            state,
            modified: false,
            applied: true,
        }
    }

    /// The action was refused, state is handed back as it was
    pub fn rejected(state: S) -> Self {
        Self {
            state,
            modified: false,
            applied: false,
        }
    }
}

/// Per-store change version.
///
/// Starts at 0 for a freshly created store and is bumped once for every
/// dispatch whose result is marked as modified.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChangeMarker {
    version: u64,
}

impl ChangeMarker {
    pub fn initial() -> Self {
        Self::default()
    }

    /// The marker following this one
    pub fn next(self) -> Self {
        Self {
            version: self.version.wrapping_add(1),
        }
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Whether at least one mutation has happened since creation
    pub fn is_modified(&self) -> bool {
        self.version > 0
    }
}

/// Identity of whoever dispatched an action (a component, a session, ...)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SenderId(Uuid);

impl SenderId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for SenderId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SenderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Notification payload handed to subscribers after every dispatch.
#[derive(Debug)]
pub struct StateChanged<'a, S, A> {
    /// The state after the dispatch
    pub state: &'a S,
    /// The action that triggered the dispatch
    pub action: &'a A,
    /// Who sent the action, if the caller said so
    pub sender: Option<SenderId>,
    /// New marker when the dispatch changed something, `None` otherwise
    pub marker: Option<ChangeMarker>,
    /// `false` when the dispatcher rejected the action
    pub applied: bool,
}

/// Notification payload of a flat keyed store: the key plus the change.
#[derive(Debug)]
pub struct KeyedStateChanged<'a, K, S, A> {
    pub key: &'a K,
    pub change: StateChanged<'a, S, A>,
}
