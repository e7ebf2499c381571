//! Host capability seams used by the theme controller.
//!
//! The controller never talks to a concrete environment. It receives a
//! [`ThemeHost`] whose capabilities may each be missing, and every call into a
//! capability may fail with a [`HostError`]. Absence and failure are treated
//! the same way by the controller: fall back to defaults and carry on.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::theme::ThemeClass;

/// Failure reported by a host capability.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("capability unavailable: {0}")]
    Unavailable(&'static str),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("host rejected operation: {0}")]
    Rejected(String),
}

/// Durable string key-value storage.
pub trait PreferenceStore {
    fn get_string(&self, key: &str) -> Result<Option<String>, HostError>;
    fn set_string(&mut self, key: &str, value: &str) -> Result<(), HostError>;
}

/// Payload delivered to a colour-scheme listener.
///
/// `matches` carries the new "prefers dark" value when the notifier knows it.
/// Legacy notifiers only ping, so listeners must re-query on `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemeChange {
    pub matches: Option<bool>,
}

pub type SchemeListener = Rc<dyn Fn(SchemeChange)>;

/// Handle returned by [`ChangeNotifier::add_listener`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// Which registration mechanism a notifier implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifierStyle {
    /// Change events carrying the new value.
    ChangeEvent,
    /// Bare listener callbacks without a payload.
    Legacy,
}

/// Registration interface for colour-scheme change notifications.
pub trait ChangeNotifier {
    fn style(&self) -> NotifierStyle;
    fn add_listener(&self, listener: SchemeListener) -> Result<ListenerId, HostError>;
    /// Removing an unknown id is a no-op.
    fn remove_listener(&self, id: ListenerId);
}

/// Answers "does the host prefer dark presentation".
pub trait ColorSchemeQuery {
    fn prefers_dark(&self) -> Result<bool, HostError>;

    /// Modern change-event registration, if the host has it.
    fn change_events(&self) -> Option<Rc<dyn ChangeNotifier>> {
        None
    }

    /// Legacy listener registration, if the host has it.
    fn legacy_listeners(&self) -> Option<Rc<dyn ChangeNotifier>> {
        None
    }
}

/// The application's root presentation node.
pub trait RootSurface {
    fn apply_class(&mut self, class: ThemeClass) -> Result<(), HostError>;
}

/// Everything the controller may use from its environment.
#[derive(Default)]
pub struct ThemeHost {
    pub storage: Option<Box<dyn PreferenceStore>>,
    pub scheme: Option<Rc<dyn ColorSchemeQuery>>,
    pub surface: Option<Box<dyn RootSurface>>,
}

impl ThemeHost {
    /// A host with no capabilities at all.
    pub fn bare() -> Self {
        Self::default()
    }

    pub fn with_storage(mut self, storage: impl PreferenceStore + 'static) -> Self {
        self.storage = Some(Box::new(storage));
        self
    }

    pub fn with_scheme(mut self, scheme: Rc<dyn ColorSchemeQuery>) -> Self {
        self.scheme = Some(scheme);
        self
    }

    pub fn with_surface(mut self, surface: impl RootSurface + 'static) -> Self {
        self.surface = Some(Box::new(surface));
        self
    }
}

/// Result of probing a [`ThemeHost`] once at initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HostCapabilities {
    pub storage: bool,
    pub scheme_query: bool,
    pub change_events: bool,
    pub legacy_listeners: bool,
    pub surface: bool,
}

impl HostCapabilities {
    pub fn probe(host: &ThemeHost) -> Self {
        let scheme = host.scheme.as_deref();
        Self {
            storage: host.storage.is_some(),
            scheme_query: scheme.is_some(),
            change_events: scheme.is_some_and(|s| s.change_events().is_some()),
            legacy_listeners: scheme.is_some_and(|s| s.legacy_listeners().is_some()),
            surface: host.surface.is_some(),
        }
    }

    /// Whether any change subscription mechanism exists.
    pub fn can_subscribe(&self) -> bool {
        self.change_events || self.legacy_listeners
    }
}

/// In-process preference store. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with one entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.values.borrow_mut().insert(key.to_string(), value.to_string());
        store
    }

    /// Reads a value without going through the trait.
    pub fn peek(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }
}

impl PreferenceStore for MemoryStore {
    fn get_string(&self, key: &str) -> Result<Option<String>, HostError> {
        Ok(self.peek(key))
    }

    fn set_string(&mut self, key: &str, value: &str) -> Result<(), HostError> {
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
