pub mod architecture;
pub mod error;
pub mod resolver;

pub use architecture::{Architecture, Classification, Indicator};
pub use error::CoreError;
pub use resolver::{resolve, ForegroundProcess, ImageCatalog};

/// What the status item shows for one foreground application.
///
/// A fresh snapshot is produced for every trigger; nothing is carried over
/// between them.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessSnapshot<I> {
    /// Localized application name, `""` if the process has none, or
    /// `"Unknown"` if no process could be identified.
    pub display_name: String,
    /// `None` only when no process could be identified.
    pub architecture: Option<Architecture>,
    pub architecture_label: &'static str,
    pub application_icon: I,
    pub indicator_icon: I,
    pub indicator: Indicator,
    pub indicator_opacity: f64,
}
