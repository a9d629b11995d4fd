//! Turns a (possibly absent) foreground process into a [`ProcessSnapshot`].
//!
//! Resolution is total: every missing piece of information is replaced by a
//! default, so callers on the UI thread never have an error path to handle.

use super::architecture::{Architecture, Indicator, FULL_OPACITY};
use super::ProcessSnapshot;

/// Display name used when no foreground process could be identified.
pub const UNKNOWN_NAME: &str = "Unknown";
/// Architecture label used when no foreground process could be identified.
pub const UNIDENTIFIED_LABEL: &str = "Cannot identify frontmost app";

/// A live handle to the application that currently owns the foreground.
pub trait ForegroundProcess {
    type Image;

    fn localized_name(&self) -> Option<String>;
    fn icon(&self) -> Option<Self::Image>;
    /// Raw executable architecture code, see [`super::architecture::codes`].
    fn executable_architecture(&self) -> i64;
}

/// Source of the images the resolver hands out.
pub trait ImageCatalog {
    type Image: Clone;

    /// Looks up a bundled asset by name.
    fn named(&self, name: &str) -> Option<Self::Image>;

    /// A blank image used whenever an icon is unavailable.
    fn empty(&self) -> Self::Image;

    /// The image for an indicator, or [`ImageCatalog::empty`] if its asset is missing.
    fn indicator_image(&self, indicator: Indicator) -> Self::Image {
        self.named(indicator.asset_name())
            .unwrap_or_else(|| self.empty())
    }
}

/// Builds a snapshot describing `process` at the moment of the call.
pub fn resolve<P, C>(process: Option<&P>, catalog: &C) -> ProcessSnapshot<C::Image>
where
    P: ForegroundProcess<Image = C::Image>,
    C: ImageCatalog,
{
    let Some(process) = process else {
        return unidentified(catalog);
    };

    let architecture = Architecture::from_code(process.executable_architecture());
    let classification = architecture.classification();

    ProcessSnapshot {
        display_name: process.localized_name().unwrap_or_default(),
        architecture: Some(architecture),
        architecture_label: classification.label,
        application_icon: process.icon().unwrap_or_else(|| catalog.empty()),
        indicator_icon: catalog.indicator_image(classification.indicator),
        indicator: classification.indicator,
        indicator_opacity: classification.opacity,
    }
}

fn unidentified<C: ImageCatalog>(catalog: &C) -> ProcessSnapshot<C::Image> {
    let icon = catalog.indicator_image(Indicator::Empty);
    ProcessSnapshot {
        display_name: UNKNOWN_NAME.to_string(),
        architecture: None,
        architecture_label: UNIDENTIFIED_LABEL,
        application_icon: icon.clone(),
        indicator_icon: icon,
        indicator: Indicator::Empty,
        indicator_opacity: FULL_OPACITY,
    }
}
