//! Owns the status item state and feeds it fresh snapshots.

use super::events::Trigger;
use crate::core::{resolve, ForegroundProcess, ImageCatalog, ProcessSnapshot};

/// The widget side of the status item.
///
/// Implemented by the AppKit status item in production and by recording
/// doubles in tests.
pub trait StatusPresenter {
    type Image;

    /// Replaces the status bar image and its opacity.
    fn show_indicator(&mut self, icon: &Self::Image, opacity: f64);

    /// Rebuilds the info panel (application icon, name and architecture).
    fn show_panel(&mut self, snapshot: &ProcessSnapshot<Self::Image>);
}

/// The single owner of the mutable status item.
///
/// Every trigger goes through [`StatusController::handle`], so the resolver
/// stays free of UI state and the widget is only ever written here.
pub struct StatusController<C, V> {
    catalog: C,
    presenter: V,
}

impl<C, V> StatusController<C, V>
where
    C: ImageCatalog,
    V: StatusPresenter<Image = C::Image>,
{
    pub fn new(catalog: C, presenter: V) -> Self {
        Self { catalog, presenter }
    }

    /// Resolves the trigger's process and pushes the result to the widget.
    pub fn handle<P>(&mut self, trigger: Trigger<P>)
    where
        P: ForegroundProcess<Image = C::Image>,
    {
        let snapshot = resolve(trigger.process(), &self.catalog);
        tracing::debug!(
            "{}: {:?} is {} (opacity {})",
            trigger.name(),
            snapshot.display_name,
            snapshot.architecture_label,
            snapshot.indicator_opacity
        );
        self.update(&snapshot, trigger.refreshes_panel());
    }

    /// Applies a snapshot. The indicator is always replaced; the panel only
    /// when `refresh_panel` is set.
    pub fn update(&mut self, snapshot: &ProcessSnapshot<C::Image>, refresh_panel: bool) {
        self.presenter
            .show_indicator(&snapshot.indicator_icon, snapshot.indicator_opacity);
        if refresh_panel {
            self.presenter.show_panel(snapshot);
        }
    }

    pub fn presenter(&self) -> &V {
        &self.presenter
    }
}
