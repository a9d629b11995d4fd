//! The rows of the info panel shown when the status item is clicked.

use crate::core::ProcessSnapshot;

/// One row of the status menu.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelRow<'a, I> {
    /// Read-only text, optionally with an image. Never highlights or acts.
    Label { title: &'a str, icon: Option<&'a I> },
    Separator,
    /// Terminates the application (⌘Q).
    Quit { title: &'a str },
}

impl<I> PanelRow<'_, I> {
    pub fn is_interactive(&self) -> bool {
        matches!(self, PanelRow::Quit { .. })
    }
}

/// Application icon and name, architecture, then Quit.
pub fn rows<'a, I>(snapshot: &'a ProcessSnapshot<I>, quit_title: &'a str) -> Vec<PanelRow<'a, I>> {
    vec![
        PanelRow::Label {
            title: &snapshot.display_name,
            icon: Some(&snapshot.application_icon),
        },
        PanelRow::Label {
            title: snapshot.architecture_label,
            icon: None,
        },
        PanelRow::Separator,
        PanelRow::Quit { title: quit_title },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Architecture, Indicator};

    fn snapshot() -> ProcessSnapshot<&'static str> {
        ProcessSnapshot {
            display_name: "Safari".to_string(),
            architecture: Some(Architecture::Arm64),
            architecture_label: "arm64 • Apple Silicon",
            application_icon: "safari-icon",
            indicator_icon: "processor-icon",
            indicator: Indicator::Filled,
            indicator_opacity: 0.25,
        }
    }

    #[test]
    fn test_info_rows_are_read_only_labels() {
        let snapshot = snapshot();
        let rows = rows(&snapshot, "Quit Silicon Info");

        assert_eq!(
            rows,
            vec![
                PanelRow::Label {
                    title: "Safari",
                    icon: Some(&"safari-icon"),
                },
                PanelRow::Label {
                    title: "arm64 • Apple Silicon",
                    icon: None,
                },
                PanelRow::Separator,
                PanelRow::Quit {
                    title: "Quit Silicon Info",
                },
            ]
        );

        let interactive: Vec<_> = rows.iter().filter(|row| row.is_interactive()).collect();
        assert_eq!(interactive, [&PanelRow::Quit { title: "Quit Silicon Info" }]);
    }
}
