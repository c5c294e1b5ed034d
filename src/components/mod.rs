//! UI Components
//!
//! Reusable Leptos components shared by the resource screens.

pub mod loading;
pub mod modal;
pub mod sidebar;

pub use loading::{ListLoading, RestorePlaceholder};
pub use modal::{alert, confirm, Modal};
pub use sidebar::Sidebar;
