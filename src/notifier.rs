//! In-process colour-scheme signal with two notifier adapters.
//!
//! The GUI feeds [`SchemeSignal::observe`] with whatever the windowing layer
//! reports as the system theme. Interested parties register through one of
//! the two [`ChangeNotifier`] adapters:
//!
//! - [`EventNotifier`] delivers the new value with every change.
//! - [`LegacyNotifier`] only pings; listeners re-query the signal.
//!
//! [`SchemeSupport`] decides which adapters exist, so a host without change
//! events can be modelled.

use std::cell::RefCell;
use std::rc::Rc;

use crate::host::{
    ChangeNotifier, ColorSchemeQuery, HostError, ListenerId, NotifierStyle, SchemeChange,
    SchemeListener,
};

/// Which notification mechanisms the signal exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemeSupport {
    pub change_events: bool,
    pub legacy_listeners: bool,
}

impl Default for SchemeSupport {
    fn default() -> Self {
        Self::modern()
    }
}

impl SchemeSupport {
    pub fn modern() -> Self {
        Self { change_events: true, legacy_listeners: true }
    }

    pub fn legacy_only() -> Self {
        Self { change_events: false, legacy_listeners: true }
    }

    pub fn none() -> Self {
        Self { change_events: false, legacy_listeners: false }
    }
}

#[derive(Default)]
struct SignalInner {
    prefers_dark: Option<bool>,
    next_id: u64,
    event_listeners: Vec<(ListenerId, SchemeListener)>,
    legacy_listeners: Vec<(ListenerId, SchemeListener)>,
}

impl SignalInner {
    fn listeners_mut(&mut self, style: NotifierStyle) -> &mut Vec<(ListenerId, SchemeListener)> {
        match style {
            NotifierStyle::ChangeEvent => &mut self.event_listeners,
            NotifierStyle::Legacy => &mut self.legacy_listeners,
        }
    }

    fn add(&mut self, style: NotifierStyle, listener: SchemeListener) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners_mut(style).push((id, listener));
        id
    }

    fn remove(&mut self, style: NotifierStyle, id: ListenerId) {
        self.listeners_mut(style).retain(|(existing, _)| *existing != id);
    }
}

/// Observable "host prefers dark" value.
pub struct SchemeSignal {
    inner: Rc<RefCell<SignalInner>>,
    support: SchemeSupport,
}

impl SchemeSignal {
    /// Creates a signal whose value is not known yet.
    pub fn new(support: SchemeSupport) -> Self {
        Self {
            inner: Rc::new(RefCell::new(SignalInner::default())),
            support,
        }
    }

    /// Creates a signal with a known starting value.
    pub fn with_value(support: SchemeSupport, prefers_dark: bool) -> Self {
        let signal = Self::new(support);
        signal.inner.borrow_mut().prefers_dark = Some(prefers_dark);
        signal
    }

    /// Last observed value, `None` while the host has not reported one.
    pub fn current(&self) -> Option<bool> {
        self.inner.borrow().prefers_dark
    }

    /// Number of listeners currently registered across both adapters.
    pub fn listener_count(&self) -> usize {
        let inner = self.inner.borrow();
        inner.event_listeners.len() + inner.legacy_listeners.len()
    }

    /// Records the host's current value and notifies listeners on change.
    ///
    /// Returns `true` when the value changed.
    pub fn observe(&self, prefers_dark: Option<bool>) -> bool {
        let (events, legacy) = {
            let mut inner = self.inner.borrow_mut();
            if inner.prefers_dark == prefers_dark {
                return false;
            }
            inner.prefers_dark = prefers_dark;
            let events: Vec<SchemeListener> =
                inner.event_listeners.iter().map(|(_, l)| Rc::clone(l)).collect();
            let legacy: Vec<SchemeListener> =
                inner.legacy_listeners.iter().map(|(_, l)| Rc::clone(l)).collect();
            (events, legacy)
        };

        tracing::debug!(
            ?prefers_dark,
            event_listeners = events.len(),
            legacy_listeners = legacy.len(),
            "system colour scheme changed"
        );

        // Listeners may query the signal, so dispatch outside the borrow.
        for listener in events {
            listener(SchemeChange { matches: prefers_dark });
        }
        for listener in legacy {
            listener(SchemeChange { matches: None });
        }
        true
    }
}

impl ColorSchemeQuery for SchemeSignal {
    fn prefers_dark(&self) -> Result<bool, HostError> {
        self.current()
            .ok_or(HostError::Unavailable("system colour scheme not reported"))
    }

    fn change_events(&self) -> Option<Rc<dyn ChangeNotifier>> {
        if !self.support.change_events {
            return None;
        }
        Some(Rc::new(EventNotifier {
            inner: Rc::clone(&self.inner),
        }))
    }

    fn legacy_listeners(&self) -> Option<Rc<dyn ChangeNotifier>> {
        if !self.support.legacy_listeners {
            return None;
        }
        Some(Rc::new(LegacyNotifier {
            inner: Rc::clone(&self.inner),
        }))
    }
}

/// Change-event adapter over a [`SchemeSignal`].
pub struct EventNotifier {
    inner: Rc<RefCell<SignalInner>>,
}

impl ChangeNotifier for EventNotifier {
    fn style(&self) -> NotifierStyle {
        NotifierStyle::ChangeEvent
    }

    fn add_listener(&self, listener: SchemeListener) -> Result<ListenerId, HostError> {
        Ok(self.inner.borrow_mut().add(NotifierStyle::ChangeEvent, listener))
    }

    fn remove_listener(&self, id: ListenerId) {
        self.inner.borrow_mut().remove(NotifierStyle::ChangeEvent, id);
    }
}

/// Legacy listener adapter over a [`SchemeSignal`].
pub struct LegacyNotifier {
    inner: Rc<RefCell<SignalInner>>,
}

impl ChangeNotifier for LegacyNotifier {
    fn style(&self) -> NotifierStyle {
        NotifierStyle::Legacy
    }

    fn add_listener(&self, listener: SchemeListener) -> Result<ListenerId, HostError> {
        Ok(self.inner.borrow_mut().add(NotifierStyle::Legacy, listener))
    }

    fn remove_listener(&self, id: ListenerId) {
        self.inner.borrow_mut().remove(NotifierStyle::Legacy, id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn recording_listener() -> (SchemeListener, Rc<RefCell<Vec<SchemeChange>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let listener: SchemeListener = Rc::new(move |change| sink.borrow_mut().push(change));
        (listener, seen)
    }

    #[test]
    fn test_unknown_value_is_unavailable() {
        let signal = SchemeSignal::new(SchemeSupport::modern());
        assert!(matches!(signal.prefers_dark(), Err(HostError::Unavailable(_))));
        signal.observe(Some(true));
        assert!(signal.prefers_dark().unwrap());
    }

    #[test]
    fn test_event_listener_receives_value() {
        let signal = SchemeSignal::with_value(SchemeSupport::modern(), false);
        let notifier = signal.change_events().unwrap();
        assert_eq!(notifier.style(), NotifierStyle::ChangeEvent);

        let (listener, seen) = recording_listener();
        notifier.add_listener(listener).unwrap();

        assert!(signal.observe(Some(true)));
        assert_eq!(*seen.borrow(), vec![SchemeChange { matches: Some(true) }]);
    }

    #[test]
    fn test_legacy_listener_only_pings() {
        let signal = SchemeSignal::with_value(SchemeSupport::legacy_only(), false);
        assert!(signal.change_events().is_none());
        let notifier = signal.legacy_listeners().unwrap();

        let (listener, seen) = recording_listener();
        notifier.add_listener(listener).unwrap();

        signal.observe(Some(true));
        assert_eq!(*seen.borrow(), vec![SchemeChange { matches: None }]);
    }

    #[test]
    fn test_unchanged_value_does_not_notify() {
        let signal = SchemeSignal::with_value(SchemeSupport::modern(), true);
        let (listener, seen) = recording_listener();
        signal.change_events().unwrap().add_listener(listener).unwrap();

        assert!(!signal.observe(Some(true)));
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_remove_listener() {
        let signal = SchemeSignal::new(SchemeSupport::modern());
        let notifier = signal.change_events().unwrap();
        let (listener, seen) = recording_listener();
        let id = notifier.add_listener(listener).unwrap();
        assert_eq!(signal.listener_count(), 1);

        notifier.remove_listener(id);
        notifier.remove_listener(id);
        assert_eq!(signal.listener_count(), 0);

        signal.observe(Some(true));
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_listener_may_query_signal_during_dispatch() {
        let signal = Rc::new(SchemeSignal::with_value(SchemeSupport::legacy_only(), false));
        let observed = Rc::new(Cell::new(None));

        let query = Rc::clone(&signal);
        let sink = Rc::clone(&observed);
        signal
            .legacy_listeners()
            .unwrap()
            .add_listener(Rc::new(move |_| sink.set(query.prefers_dark().ok())))
            .unwrap();

        signal.observe(Some(true));
        assert_eq!(observed.get(), Some(true));
    }

    #[test]
    fn test_no_support_exposes_no_notifiers() {
        let signal = SchemeSignal::new(SchemeSupport::none());
        assert!(signal.change_events().is_none());
        assert!(signal.legacy_listeners().is_none());
    }
}
