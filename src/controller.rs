//! Theme persistence controller.
//!
//! [`ThemeController`] is the single writer of the theme state. It reads the
//! persisted preference once, follows the host colour scheme while the mode is
//! [`ThemeMode::System`], applies the `dark`/`light` class to the root surface
//! and broadcasts a [`ThemeSnapshot`] to every subscriber after each change.
//!
//! None of the host interactions can fail the controller: missing or failing
//! capabilities fall back to `system` and a light system signal.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::mpsc::{channel, Receiver, Sender};

use crate::host::{
    ChangeNotifier, ColorSchemeQuery, HostCapabilities, ListenerId, NotifierStyle,
    PreferenceStore, RootSurface, SchemeChange, SchemeListener, ThemeHost,
};
use crate::theme::{resolve, ThemeClass, ThemeMode};

/// Storage key of the persisted theme mode.
pub const THEME_KEY: &str = "theme";

/// The `(mode, is_dark)` pair exposed to views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeSnapshot {
    pub mode: ThemeMode,
    pub is_dark: bool,
}

impl ThemeSnapshot {
    pub fn class(&self) -> ThemeClass {
        ThemeClass::from_dark(self.is_dark)
    }
}

/// State shared between the controller and its system-change listener.
struct SharedState {
    mode: ThemeMode,
    is_dark: bool,
    /// Cleared by teardown; listeners must not touch state afterwards.
    active: bool,
    surface: Option<Box<dyn RootSurface>>,
    subscribers: Vec<Sender<ThemeSnapshot>>,
}

impl SharedState {
    fn snapshot(&self) -> ThemeSnapshot {
        ThemeSnapshot {
            mode: self.mode,
            is_dark: self.is_dark,
        }
    }

    fn apply_class(&mut self) {
        let class = ThemeClass::from_dark(self.is_dark);
        if let Some(surface) = self.surface.as_mut() {
            if let Err(err) = surface.apply_class(class) {
                tracing::debug!(class = class.as_str(), error = %err, "root surface rejected theme class");
            }
        }
    }

    fn broadcast(&mut self) {
        let snapshot = self.snapshot();
        self.subscribers.retain(|tx| tx.send(snapshot).is_ok());
    }

    fn commit(&mut self, is_dark: bool) {
        self.is_dark = is_dark;
        self.apply_class();
        self.broadcast();
    }
}

/// Asks the host for its colour scheme; anything but an answer means light.
fn query_prefers_dark(scheme: Option<&dyn ColorSchemeQuery>) -> bool {
    match scheme.map(|query| query.prefers_dark()) {
        Some(Ok(prefers_dark)) => prefers_dark,
        Some(Err(err)) => {
            tracing::debug!(error = %err, "colour scheme query failed, assuming light");
            false
        }
        None => false,
    }
}

fn read_persisted_mode(storage: Option<&dyn PreferenceStore>) -> ThemeMode {
    let Some(storage) = storage else {
        return ThemeMode::System;
    };
    match storage.get_string(THEME_KEY) {
        Ok(raw) => ThemeMode::normalize(raw.as_deref()),
        Err(err) => {
            tracing::debug!(error = %err, "theme preference unreadable, using system");
            ThemeMode::System
        }
    }
}

fn handle_system_change(
    state: &RefCell<SharedState>,
    scheme: Option<&dyn ColorSchemeQuery>,
    change: SchemeChange,
) {
    let Ok(mut state) = state.try_borrow_mut() else {
        tracing::warn!("theme state busy, dropping system colour scheme notification");
        return;
    };
    if !state.active || state.mode != ThemeMode::System {
        return;
    }
    let prefers_dark = change.matches.unwrap_or_else(|| query_prefers_dark(scheme));
    state.commit(prefers_dark);
}

struct Registration {
    notifier: Rc<dyn ChangeNotifier>,
    id: ListenerId,
}

/// Scoped registration of the system-preference listener.
///
/// Released through the same notifier that created it, on [`release`] or on
/// drop, whichever comes first.
///
/// [`release`]: SystemSubscription::release
pub struct SystemSubscription {
    registration: Option<Registration>,
}

impl SystemSubscription {
    /// A subscription that was never established.
    pub fn inert() -> Self {
        Self { registration: None }
    }

    /// Registers through the mechanism the capability probe found, preferring
    /// change events over legacy listeners.
    fn register(
        state: &Rc<RefCell<SharedState>>,
        scheme: &Rc<dyn ColorSchemeQuery>,
        capabilities: &HostCapabilities,
    ) -> Self {
        let notifier = if capabilities.change_events {
            scheme.change_events()
        } else if capabilities.legacy_listeners {
            scheme.legacy_listeners()
        } else {
            None
        };
        let Some(notifier) = notifier else {
            tracing::debug!("host offers no colour scheme notifications");
            return Self::inert();
        };

        let weak_state = Rc::downgrade(state);
        let weak_scheme = Rc::downgrade(scheme);
        let listener: SchemeListener = Rc::new(move |change: SchemeChange| {
            let Some(state) = weak_state.upgrade() else {
                return;
            };
            let scheme = weak_scheme.upgrade();
            handle_system_change(&state, scheme.as_deref(), change);
        });

        match notifier.add_listener(listener) {
            Ok(id) => Self {
                registration: Some(Registration { notifier, id }),
            },
            Err(err) => {
                tracing::debug!(error = %err, "colour scheme listener registration failed");
                Self::inert()
            }
        }
    }

    pub fn is_active(&self) -> bool {
        self.registration.is_some()
    }

    /// Mechanism the listener was registered with, if any.
    pub fn style(&self) -> Option<NotifierStyle> {
        self.registration.as_ref().map(|r| r.notifier.style())
    }

    /// Unregisters the listener. Safe to call any number of times.
    pub fn release(&mut self) {
        if let Some(Registration { notifier, id }) = self.registration.take() {
            notifier.remove_listener(id);
        }
    }
}

impl Drop for SystemSubscription {
    fn drop(&mut self) {
        self.release();
    }
}

/// Owner of the theme mode for the application's lifetime.
pub struct ThemeController {
    state: Rc<RefCell<SharedState>>,
    storage: Option<Box<dyn PreferenceStore>>,
    scheme: Option<Rc<dyn ColorSchemeQuery>>,
    capabilities: HostCapabilities,
    subscription: SystemSubscription,
}

impl std::fmt::Debug for ThemeController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeController")
            .field("snapshot", &self.snapshot())
            .field("capabilities", &self.capabilities)
            .field("subscription", &self.subscription.style())
            .finish_non_exhaustive()
    }
}

impl ThemeController {
    /// Reads the persisted mode, applies the initial class and starts
    /// following the host colour scheme.
    pub fn initialize(host: ThemeHost) -> Self {
        let capabilities = HostCapabilities::probe(&host);
        let ThemeHost {
            storage,
            scheme,
            surface,
        } = host;

        let mode = read_persisted_mode(storage.as_deref());
        let is_dark = resolve(mode, query_prefers_dark(scheme.as_deref()));

        let state = Rc::new(RefCell::new(SharedState {
            mode,
            is_dark,
            active: true,
            surface,
            subscribers: Vec::new(),
        }));
        state.borrow_mut().apply_class();

        let subscription = match scheme.as_ref() {
            Some(scheme) if capabilities.can_subscribe() => {
                SystemSubscription::register(&state, scheme, &capabilities)
            }
            _ => SystemSubscription::inert(),
        };

        tracing::info!(
            mode = %mode,
            is_dark,
            notifier = ?subscription.style(),
            "theme controller initialized"
        );

        Self {
            state,
            storage,
            scheme,
            capabilities,
            subscription,
        }
    }

    /// Current `(mode, is_dark)` pair.
    pub fn snapshot(&self) -> ThemeSnapshot {
        self.state.borrow().snapshot()
    }

    pub fn capabilities(&self) -> HostCapabilities {
        self.capabilities
    }

    pub fn subscription(&self) -> &SystemSubscription {
        &self.subscription
    }

    /// Stores, persists and applies a new mode, then notifies subscribers.
    ///
    /// Persistence failures are logged and otherwise ignored.
    pub fn set_mode(&mut self, mode: ThemeMode) {
        self.persist(mode);
        let system_prefers_dark = query_prefers_dark(self.scheme.as_deref());

        let mut state = self.state.borrow_mut();
        state.mode = mode;
        state.commit(resolve(mode, system_prefers_dark));
        tracing::debug!(mode = %mode, is_dark = state.is_dark, "theme mode changed");
    }

    /// [`set_mode`](Self::set_mode) for an unvalidated mode string.
    pub fn set_mode_raw(&mut self, raw: Option<&str>) {
        self.set_mode(ThemeMode::normalize(raw));
    }

    /// Switches to the explicit opposite of the current effective theme.
    pub fn toggle(&mut self) {
        let next = if self.snapshot().is_dark {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        };
        self.set_mode(next);
    }

    /// Returns a channel that receives a snapshot after every change.
    pub fn subscribe(&self) -> Receiver<ThemeSnapshot> {
        let (tx, rx) = channel();
        self.state.borrow_mut().subscribers.push(tx);
        rx
    }

    /// Stops following the host colour scheme. Idempotent.
    pub fn teardown(&mut self) {
        if let Ok(mut state) = self.state.try_borrow_mut() {
            state.active = false;
        }
        self.subscription.release();
    }

    fn persist(&mut self, mode: ThemeMode) {
        let Some(storage) = self.storage.as_mut() else {
            return;
        };
        if let Err(err) = storage.set_string(THEME_KEY, mode.as_str()) {
            tracing::warn!(mode = %mode, error = %err, "failed to persist theme preference");
        }
    }
}

impl Drop for ThemeController {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{HostError, MemoryStore};
    use std::cell::Cell;
    use crate::notifier::{SchemeSignal, SchemeSupport};

    /// Surface that records every class applied to it.
    #[derive(Clone, Default)]
    struct RecordingSurface {
        classes: Rc<RefCell<Vec<ThemeClass>>>,
    }

    impl RecordingSurface {
        fn last(&self) -> Option<ThemeClass> {
            self.classes.borrow().last().copied()
        }
    }

    impl RootSurface for RecordingSurface {
        fn apply_class(&mut self, class: ThemeClass) -> Result<(), HostError> {
            self.classes.borrow_mut().push(class);
            Ok(())
        }
    }

    /// Store whose every operation fails.
    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn get_string(&self, _key: &str) -> Result<Option<String>, HostError> {
            Err(HostError::Rejected("storage disabled".to_string()))
        }

        fn set_string(&mut self, _key: &str, _value: &str) -> Result<(), HostError> {
            Err(HostError::Rejected("quota exceeded".to_string()))
        }
    }

    /// Surface that rejects every class.
    struct FailingSurface;

    impl RootSurface for FailingSurface {
        fn apply_class(&mut self, _class: ThemeClass) -> Result<(), HostError> {
            Err(HostError::Rejected("surface detached".to_string()))
        }
    }

    /// Notifier that refuses registrations and must never be asked to remove one.
    struct RefusingNotifier;

    impl ChangeNotifier for RefusingNotifier {
        fn style(&self) -> NotifierStyle {
            NotifierStyle::ChangeEvent
        }

        fn add_listener(&self, _listener: SchemeListener) -> Result<ListenerId, HostError> {
            Err(HostError::Rejected("listener limit reached".to_string()))
        }

        fn remove_listener(&self, id: ListenerId) {
            panic!("remove_listener called for {id:?} that was never registered");
        }
    }

    /// Dark scheme whose notifiers are counted and refuse registration.
    #[derive(Default)]
    struct RefusingScheme {
        change_event_lookups: Cell<usize>,
        legacy_lookups: Cell<usize>,
    }

    impl ColorSchemeQuery for RefusingScheme {
        fn prefers_dark(&self) -> Result<bool, HostError> {
            Ok(true)
        }

        fn change_events(&self) -> Option<Rc<dyn ChangeNotifier>> {
            self.change_event_lookups.set(self.change_event_lookups.get() + 1);
            Some(Rc::new(RefusingNotifier))
        }

        fn legacy_listeners(&self) -> Option<Rc<dyn ChangeNotifier>> {
            self.legacy_lookups.set(self.legacy_lookups.get() + 1);
            None
        }
    }

    fn host_with(
        store: impl PreferenceStore + 'static,
        signal: &Rc<SchemeSignal>,
        surface: &RecordingSurface,
    ) -> ThemeHost {
        let scheme: Rc<dyn ColorSchemeQuery> = signal.clone();
        ThemeHost::bare()
            .with_storage(store)
            .with_scheme(scheme)
            .with_surface(surface.clone())
    }

    #[test]
    fn test_initial_state_without_preference_follows_system() {
        let signal = Rc::new(SchemeSignal::with_value(SchemeSupport::modern(), true));
        let surface = RecordingSurface::default();
        let controller = ThemeController::initialize(host_with(MemoryStore::new(), &signal, &surface));

        assert_eq!(
            controller.snapshot(),
            ThemeSnapshot { mode: ThemeMode::System, is_dark: true }
        );
        assert_eq!(surface.last(), Some(ThemeClass::Dark));
    }

    #[test]
    fn test_persisted_light_overrides_dark_system() {
        let signal = Rc::new(SchemeSignal::with_value(SchemeSupport::modern(), true));
        let surface = RecordingSurface::default();
        let store = MemoryStore::with_entry(THEME_KEY, "light");
        let controller = ThemeController::initialize(host_with(store, &signal, &surface));

        assert_eq!(controller.snapshot().mode, ThemeMode::Light);
        assert!(!controller.snapshot().is_dark);
        assert_eq!(surface.last(), Some(ThemeClass::Light));
    }

    #[test]
    fn test_invalid_persisted_value_becomes_system() {
        let signal = Rc::new(SchemeSignal::with_value(SchemeSupport::modern(), false));
        let surface = RecordingSurface::default();
        let store = MemoryStore::with_entry(THEME_KEY, "blue");
        let controller = ThemeController::initialize(host_with(store, &signal, &surface));

        assert_eq!(controller.snapshot().mode, ThemeMode::System);
        assert!(!controller.snapshot().is_dark);
    }

    #[test]
    fn test_bare_host_defaults_to_system_light() {
        let controller = ThemeController::initialize(ThemeHost::bare());
        assert_eq!(
            controller.snapshot(),
            ThemeSnapshot { mode: ThemeMode::System, is_dark: false }
        );
        assert!(!controller.subscription().is_active());
    }

    #[test]
    fn test_set_mode_persists_and_applies() {
        let signal = Rc::new(SchemeSignal::with_value(SchemeSupport::modern(), false));
        let surface = RecordingSurface::default();
        let store = MemoryStore::new();
        let mut controller = ThemeController::initialize(host_with(store.clone(), &signal, &surface));

        controller.set_mode(ThemeMode::Dark);

        assert!(controller.snapshot().is_dark);
        assert_eq!(store.peek(THEME_KEY).as_deref(), Some("dark"));
        assert_eq!(surface.last(), Some(ThemeClass::Dark));
    }

    #[test]
    fn test_set_mode_raw_normalizes() {
        let signal = Rc::new(SchemeSignal::with_value(SchemeSupport::modern(), true));
        let surface = RecordingSurface::default();
        let store = MemoryStore::with_entry(THEME_KEY, "light");
        let mut controller = ThemeController::initialize(host_with(store.clone(), &signal, &surface));

        controller.set_mode_raw(Some("neon"));

        assert_eq!(controller.snapshot(), ThemeSnapshot { mode: ThemeMode::System, is_dark: true });
        assert_eq!(store.peek(THEME_KEY).as_deref(), Some("system"));
    }

    #[test]
    fn test_storage_failure_still_updates_memory() {
        let signal = Rc::new(SchemeSignal::with_value(SchemeSupport::modern(), false));
        let surface = RecordingSurface::default();
        let mut controller = ThemeController::initialize(host_with(BrokenStore, &signal, &surface));
        assert_eq!(controller.snapshot().mode, ThemeMode::System);

        controller.set_mode(ThemeMode::Dark);

        assert_eq!(controller.snapshot().mode, ThemeMode::Dark);
        assert!(controller.snapshot().is_dark);
    }

    #[test]
    fn test_toggle_flips_effective_theme() {
        let signal = Rc::new(SchemeSignal::with_value(SchemeSupport::modern(), true));
        let surface = RecordingSurface::default();
        let mut controller = ThemeController::initialize(host_with(MemoryStore::new(), &signal, &surface));

        controller.toggle();
        assert_eq!(controller.snapshot(), ThemeSnapshot { mode: ThemeMode::Light, is_dark: false });

        controller.toggle();
        assert_eq!(controller.snapshot(), ThemeSnapshot { mode: ThemeMode::Dark, is_dark: true });
    }

    #[test]
    fn test_subscribers_receive_snapshots() {
        let signal = Rc::new(SchemeSignal::with_value(SchemeSupport::modern(), false));
        let surface = RecordingSurface::default();
        let mut controller = ThemeController::initialize(host_with(MemoryStore::new(), &signal, &surface));
        let updates = controller.subscribe();

        controller.set_mode(ThemeMode::Dark);
        signal.observe(Some(true));

        assert_eq!(updates.try_recv().unwrap(), ThemeSnapshot { mode: ThemeMode::Dark, is_dark: true });
        // Explicit mode ignores the system change, so nothing else arrives.
        assert!(updates.try_recv().is_err());
    }

    #[test]
    fn test_dropped_subscriber_is_pruned() {
        let mut controller = ThemeController::initialize(ThemeHost::bare());
        drop(controller.subscribe());
        let live = controller.subscribe();

        controller.set_mode(ThemeMode::Light);
        assert_eq!(controller.state.borrow().subscribers.len(), 1);
        assert!(live.try_recv().is_ok());
    }

    #[test]
    fn test_teardown_is_idempotent() {
        let signal = Rc::new(SchemeSignal::with_value(SchemeSupport::modern(), false));
        let surface = RecordingSurface::default();
        let mut controller = ThemeController::initialize(host_with(MemoryStore::new(), &signal, &surface));
        assert_eq!(signal.listener_count(), 1);

        controller.teardown();
        controller.teardown();
        assert_eq!(signal.listener_count(), 0);

        signal.observe(Some(true));
        assert!(!controller.snapshot().is_dark);
    }

    #[test]
    fn test_surface_failure_is_swallowed() {
        let signal = Rc::new(SchemeSignal::with_value(SchemeSupport::modern(), true));
        let scheme: Rc<dyn ColorSchemeQuery> = signal.clone();
        let mut controller = ThemeController::initialize(
            ThemeHost::bare()
                .with_storage(MemoryStore::new())
                .with_scheme(scheme)
                .with_surface(FailingSurface),
        );
        assert_eq!(controller.snapshot(), ThemeSnapshot { mode: ThemeMode::System, is_dark: true });

        controller.set_mode(ThemeMode::Light);
        assert_eq!(controller.snapshot(), ThemeSnapshot { mode: ThemeMode::Light, is_dark: false });

        controller.set_mode(ThemeMode::System);
        signal.observe(Some(false));
        assert!(!controller.snapshot().is_dark);
    }

    #[test]
    fn test_refused_registration_leaves_inert_subscription() {
        let scheme = Rc::new(RefusingScheme::default());
        let query: Rc<dyn ColorSchemeQuery> = scheme.clone();
        let mut controller = ThemeController::initialize(
            ThemeHost::bare()
                .with_storage(MemoryStore::new())
                .with_scheme(query)
                .with_surface(FailingSurface),
        );

        assert_eq!(controller.snapshot(), ThemeSnapshot { mode: ThemeMode::System, is_dark: true });
        assert!(!controller.subscription().is_active());
        assert_eq!(controller.subscription().style(), None);

        controller.set_mode(ThemeMode::Light);
        assert_eq!(controller.snapshot(), ThemeSnapshot { mode: ThemeMode::Light, is_dark: false });

        controller.teardown();
        controller.teardown();
    }

    #[test]
    fn test_registration_follows_probe_result() {
        let scheme = Rc::new(RefusingScheme::default());
        let query: Rc<dyn ColorSchemeQuery> = scheme.clone();
        let controller = ThemeController::initialize(ThemeHost::bare().with_scheme(query));

        let capabilities = controller.capabilities();
        assert!(capabilities.change_events);
        assert!(!capabilities.legacy_listeners);
        // One lookup each while probing; registration asks only for change events.
        assert_eq!(scheme.change_event_lookups.get(), 2);
        assert_eq!(scheme.legacy_lookups.get(), 1);
    }

    #[test]
    fn test_legacy_only_probe_registers_legacy_listener() {
        let signal = Rc::new(SchemeSignal::with_value(SchemeSupport::legacy_only(), false));
        let surface = RecordingSurface::default();
        let controller = ThemeController::initialize(host_with(MemoryStore::new(), &signal, &surface));

        assert!(!controller.capabilities().change_events);
        assert_eq!(controller.subscription().style(), Some(NotifierStyle::Legacy));
    }
}
