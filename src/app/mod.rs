//! Presentation-side state: the one status item and what drives it.

pub mod controller;
pub mod events;
pub mod panel;

pub use controller::{StatusController, StatusPresenter};
pub use events::Trigger;
pub use panel::PanelRow;

/// Logs a fatal startup error with its full context chain and returns the
/// process exit status to use.
pub fn report_startup_failure(err: &anyhow::Error) -> i32 {
    tracing::error!("{:#}", err);
    1
}
