pub mod theme;
pub mod host;
pub mod notifier;
pub mod file_store;
pub mod controller;
pub mod dashboard;
pub mod format;
pub mod config;

// Export theme resolution
pub use theme::{resolve, resolve_raw, ThemeClass, ThemeColors, ThemeMode, hex_to_color32, with_alpha};

// Export host capability seams
pub use host::{
    ChangeNotifier, ColorSchemeQuery, HostCapabilities, HostError, ListenerId,
    MemoryStore, NotifierStyle, PreferenceStore, RootSurface, SchemeChange,
    SchemeListener, ThemeHost,
};

// Export notifier adapters and the file store
pub use notifier::{EventNotifier, LegacyNotifier, SchemeSignal, SchemeSupport};
pub use file_store::JsonFileStore;

// Export the controller
pub use controller::{SystemSubscription, ThemeController, ThemeSnapshot, THEME_KEY};

// Export dashboard data and configuration
pub use dashboard::{DashboardData, FinanceData, LoadSchedule, LoadingGate, Section};
pub use config::{Command, DashboardConfig};
