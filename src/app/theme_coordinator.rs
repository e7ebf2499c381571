//! Theme bootstrap and per-frame system scheme tracking.
//!
//! Wires the theme controller to the egui context: the context is the root
//! surface that receives the theme class, and its reported system theme feeds
//! the colour scheme signal every frame.

use std::rc::Rc;

use garage::{
    ColorSchemeQuery, DashboardConfig, HostError, JsonFileStore, RootSurface, SchemeSignal,
    ThemeClass, ThemeColors, ThemeController, ThemeHost,
};

use crate::app::AppState;
use crate::state::ThemeState;

/// Applies theme classes to an egui context.
pub struct EguiSurface {
    ctx: egui::Context,
}

impl EguiSurface {
    pub fn new(ctx: egui::Context) -> Self {
        Self { ctx }
    }
}

impl RootSurface for EguiSurface {
    fn apply_class(&mut self, class: ThemeClass) -> Result<(), HostError> {
        let theme = egui_theme(class);
        self.ctx
            .set_visuals_of(theme, ThemeColors::for_class(class).visuals(class));
        self.ctx.set_theme(theme);
        self.ctx.request_repaint();
        Ok(())
    }
}

fn egui_theme(class: ThemeClass) -> egui::Theme {
    match class {
        ThemeClass::Dark => egui::Theme::Dark,
        ThemeClass::Light => egui::Theme::Light,
    }
}

/// Coordinates theme initialization and system scheme tracking.
pub struct ThemeCoordinator;

impl ThemeCoordinator {
    /// Builds the theme state during application startup.
    ///
    /// A missing preference file location leaves the controller without
    /// storage; the theme still works but choices are not remembered.
    pub fn bootstrap(ctx: &egui::Context, config: &DashboardConfig) -> ThemeState {
        let signal = Rc::new(SchemeSignal::new(config.scheme_support()));
        signal.observe(Self::system_prefers_dark(ctx));

        let scheme: Rc<dyn ColorSchemeQuery> = signal.clone();
        let mut host = ThemeHost::bare()
            .with_scheme(scheme)
            .with_surface(EguiSurface::new(ctx.clone()));

        match Self::open_store(config) {
            Ok(store) => {
                tracing::debug!(path = %store.path().display(), "using preference file");
                host = host.with_storage(store);
            }
            Err(err) => tracing::warn!(%err, "theme preference will not be persisted"),
        }

        ThemeState::new(ThemeController::initialize(host), signal)
    }

    fn open_store(config: &DashboardConfig) -> Result<JsonFileStore, HostError> {
        match &config.prefs_path {
            Some(path) => Ok(JsonFileStore::at(path)),
            None => JsonFileStore::open_default(),
        }
    }

    /// The system theme as reported by the windowing backend, if known.
    pub fn system_prefers_dark(ctx: &egui::Context) -> Option<bool> {
        ctx.system_theme().map(|theme| theme == egui::Theme::Dark)
    }

    /// Forwards the system theme to the scheme signal and picks up any
    /// resulting theme change.
    ///
    /// Called every frame.
    pub fn track_system_theme(ctx: &egui::Context, state: &mut AppState) {
        if state.theme.signal().observe(Self::system_prefers_dark(ctx)) {
            tracing::debug!("system colour scheme changed");
        }
        if state.theme.sync() {
            ctx.request_repaint();
        }
    }
}
