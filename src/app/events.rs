//! Defines the triggers that cause the status item to refresh.

/// The three moments at which the frontmost application is re-read.
///
/// Each variant carries the handle the platform obtained for that trigger,
/// or `None` when no application could be identified.
#[derive(Debug, Clone)]
pub enum Trigger<P> {
    /// The status item was just installed.
    Launched(Option<P>),
    /// The user clicked the status item and its menu is about to appear.
    MenuWillOpen(Option<P>),
    /// Another application came to the foreground.
    ApplicationActivated(Option<P>),
}

impl<P> Trigger<P> {
    pub fn process(&self) -> Option<&P> {
        match self {
            Trigger::Launched(p) | Trigger::MenuWillOpen(p) | Trigger::ApplicationActivated(p) => {
                p.as_ref()
            }
        }
    }

    /// Whether the info panel is rebuilt in addition to the indicator.
    ///
    /// Activations only touch the indicator; the panel is rebuilt the next
    /// time the menu opens.
    pub fn refreshes_panel(&self) -> bool {
        !matches!(self, Trigger::ApplicationActivated(_))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Trigger::Launched(_) => "launched",
            Trigger::MenuWillOpen(_) => "menu_will_open",
            Trigger::ApplicationActivated(_) => "application_activated",
        }
    }
}
