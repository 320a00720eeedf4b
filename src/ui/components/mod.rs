// UI Components
pub mod dialog;
pub mod footer;
pub mod process_table;
pub mod resources;
pub mod search_bar;
pub mod tab_bar;
pub mod warning;

// Re-export components for convenience
pub use dialog::{Dialog, DialogKind, SettingsDraft};
pub use footer::{CommandItem, Footer};
pub use process_table::ProcessTable;
pub use resources::ResourcePanel;
pub use search_bar::SearchBar;
pub use tab_bar::TabBar;
pub use warning::WarningScreen;
