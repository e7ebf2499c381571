//! Theme and styling state management.
//!
//! Wraps the theme controller together with the receiving end of its
//! snapshot channel, so panels read a plain snapshot and palette each frame.

use std::rc::Rc;
use std::sync::mpsc::Receiver;

use garage::{SchemeSignal, ThemeColors, ThemeController, ThemeMode, ThemeSnapshot};

/// State related to visual theme and styling.
///
/// Responsibilities:
/// - Owning the theme controller for the application's lifetime
/// - Tracking the latest snapshot broadcast by the controller
/// - Providing the palette for the effective theme
pub struct ThemeState {
    controller: ThemeController,
    /// Snapshots broadcast by the controller
    updates: Receiver<ThemeSnapshot>,
    /// Last snapshot seen by the view
    snapshot: ThemeSnapshot,
    /// Palette matching `snapshot`
    colors: ThemeColors,
    /// System colour scheme signal fed from egui every frame
    signal: Rc<SchemeSignal>,
}

impl std::fmt::Debug for ThemeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeState")
            .field("snapshot", &self.snapshot)
            .finish_non_exhaustive()
    }
}

impl ThemeState {
    /// Creates the theme state around an initialized controller.
    pub fn new(controller: ThemeController, signal: Rc<SchemeSignal>) -> Self {
        let updates = controller.subscribe();
        let snapshot = controller.snapshot();
        Self {
            controller,
            updates,
            snapshot,
            colors: ThemeColors::for_class(snapshot.class()),
            signal,
        }
    }

    // ===== Theme Queries =====

    pub fn snapshot(&self) -> ThemeSnapshot {
        self.snapshot
    }

    pub fn mode(&self) -> ThemeMode {
        self.snapshot.mode
    }

    pub fn is_dark(&self) -> bool {
        self.snapshot.is_dark
    }

    /// Palette for the effective theme.
    pub fn colors(&self) -> &ThemeColors {
        &self.colors
    }

    pub fn signal(&self) -> &SchemeSignal {
        &self.signal
    }

    // ===== Theme Mutations =====

    /// Requests a new mode from the controller.
    pub fn set_mode(&mut self, mode: ThemeMode) {
        self.controller.set_mode(mode);
        self.sync();
    }

    /// Flips between explicit light and dark.
    pub fn toggle(&mut self) {
        self.controller.toggle();
        self.sync();
    }

    /// Drains pending snapshots. Returns true if the effective theme changed.
    pub fn sync(&mut self) -> bool {
        let previous = self.snapshot;
        while let Ok(snapshot) = self.updates.try_recv() {
            self.snapshot = snapshot;
        }
        if self.snapshot.is_dark != previous.is_dark {
            self.colors = ThemeColors::for_class(self.snapshot.class());
            return true;
        }
        false
    }

    /// Stops following the system colour scheme.
    pub fn teardown(&mut self) {
        self.controller.teardown();
    }
}
