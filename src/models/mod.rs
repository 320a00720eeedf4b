// Data Models
pub mod process;
pub mod stats;

pub use process::{ProcessInfo, ProcessTabState};
pub use stats::{StatsHistory, SystemStats};
