// System Layer
pub mod monitor;

pub use monitor::Monitor;
