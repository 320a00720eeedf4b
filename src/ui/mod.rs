// UI Layer
pub mod components;
pub mod i18n;
pub mod layout;
pub mod theme;

// Re-export layout types for convenience
pub use layout::{
    ActiveTab, LayoutAreas, LayoutManager, LayoutMode, MIN_HEIGHT, MIN_WIDTH,
};

// Re-export i18n / theme
pub use i18n::{I18n, Language};
pub use theme::{Theme, ThemeManager};

// Re-export components
pub use components::{
    CommandItem, Dialog, DialogKind, Footer, ProcessTable, ResourcePanel, SearchBar,
    SettingsDraft, TabBar, WarningScreen,
};
