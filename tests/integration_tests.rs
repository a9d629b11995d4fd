//! Integration tests for the Silicon Info status controller.
//!
//! The AppKit types are replaced by test doubles: processes are plain
//! structs, images are tagged enums, and the presenter records every call.

use silicon_info::app::{StatusController, StatusPresenter, Trigger};
use silicon_info::core::architecture::codes;
use silicon_info::core::{ForegroundProcess, ImageCatalog, Indicator, ProcessSnapshot};
use silicon_info::utils::test_helpers::setup_test_logging;

/// Contains the test infrastructure.
mod helpers {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub enum Image {
        Asset(String),
        Blank,
        App(String),
    }

    /// Serves every asset except the ones listed in `missing`.
    #[derive(Default)]
    pub struct FakeCatalog {
        pub missing: Vec<String>,
    }

    impl ImageCatalog for FakeCatalog {
        type Image = Image;

        fn named(&self, name: &str) -> Option<Image> {
            if self.missing.iter().any(|m| m == name) {
                None
            } else {
                Some(Image::Asset(name.to_string()))
            }
        }

        fn empty(&self) -> Image {
            Image::Blank
        }
    }

    #[derive(Debug, Clone)]
    pub struct FakeApp {
        pub name: Option<String>,
        pub icon: Option<Image>,
        pub architecture: i64,
    }

    impl FakeApp {
        pub fn new(name: &str, architecture: i64) -> Self {
            Self {
                name: Some(name.to_string()),
                icon: Some(Image::App(name.to_string())),
                architecture,
            }
        }
    }

    impl ForegroundProcess for FakeApp {
        type Image = Image;

        fn localized_name(&self) -> Option<String> {
            self.name.clone()
        }

        fn icon(&self) -> Option<Image> {
            self.icon.clone()
        }

        fn executable_architecture(&self) -> i64 {
            self.architecture
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    pub enum Call {
        Indicator { icon: Image, opacity: f64 },
        Panel(ProcessSnapshot<Image>),
    }

    /// A presenter that records what the status item would have displayed.
    #[derive(Default)]
    pub struct RecordingPresenter {
        pub calls: Vec<Call>,
    }

    impl StatusPresenter for RecordingPresenter {
        type Image = Image;

        fn show_indicator(&mut self, icon: &Image, opacity: f64) {
            self.calls.push(Call::Indicator {
                icon: icon.clone(),
                opacity,
            });
        }

        fn show_panel(&mut self, snapshot: &ProcessSnapshot<Image>) {
            self.calls.push(Call::Panel(snapshot.clone()));
        }
    }

    /// `TestHarness` wires a controller to the doubles above.
    pub struct TestHarness {
        pub controller: StatusController<FakeCatalog, RecordingPresenter>,
    }

    impl TestHarness {
        pub fn new() -> Self {
            Self::with_catalog(FakeCatalog::default())
        }

        pub fn with_catalog(catalog: FakeCatalog) -> Self {
            setup_test_logging();
            Self {
                controller: StatusController::new(catalog, RecordingPresenter::default()),
            }
        }

        pub fn calls(&self) -> &[Call] {
            &self.controller.presenter().calls
        }

        pub fn panels(&self) -> Vec<&ProcessSnapshot<Image>> {
            self.calls()
                .iter()
                .filter_map(|call| match call {
                    Call::Panel(snapshot) => Some(snapshot),
                    Call::Indicator { .. } => None,
                })
                .collect()
        }

        pub fn last_indicator(&self) -> Option<(&Image, f64)> {
            self.calls().iter().rev().find_map(|call| match call {
                Call::Indicator { icon, opacity } => Some((icon, *opacity)),
                Call::Panel(_) => None,
            })
        }
    }
}

use helpers::{Call, FakeApp, FakeCatalog, Image, TestHarness};

fn asset(name: &str) -> Image {
    Image::Asset(name.to_string())
}

#[test]
fn test_launch_shows_indicator_and_panel() {
    let mut harness = TestHarness::new();
    harness
        .controller
        .handle(Trigger::Launched(Some(FakeApp::new("Safari", codes::ARM64))));

    assert_eq!(harness.calls().len(), 2);
    assert_eq!(
        harness.last_indicator(),
        Some((&asset("processor-icon"), 0.25))
    );

    let panels = harness.panels();
    assert_eq!(panels.len(), 1);
    assert_eq!(panels[0].display_name, "Safari");
    assert_eq!(panels[0].architecture_label, "arm64 • Apple Silicon");
    assert_eq!(panels[0].application_icon, Image::App("Safari".to_string()));
}

#[test]
fn test_activation_updates_only_the_indicator() {
    let mut harness = TestHarness::new();
    harness
        .controller
        .handle(Trigger::ApplicationActivated(Some(FakeApp::new(
            "Steam",
            codes::X86_64,
        ))));

    assert_eq!(
        harness.calls(),
        &[Call::Indicator {
            icon: asset("processor-icon-empty"),
            opacity: 1.0,
        }]
    );
}

#[test]
fn test_switching_between_apps_restores_opacity() {
    let mut harness = TestHarness::new();
    harness
        .controller
        .handle(Trigger::ApplicationActivated(Some(FakeApp::new(
            "Terminal",
            codes::ARM64,
        ))));
    assert_eq!(harness.last_indicator().map(|(_, o)| o), Some(0.25));

    harness
        .controller
        .handle(Trigger::ApplicationActivated(Some(FakeApp::new(
            "Rosetta App",
            codes::X86_64,
        ))));
    assert_eq!(harness.last_indicator().map(|(_, o)| o), Some(1.0));
}

#[test]
fn test_menu_open_without_frontmost_app_shows_sentinel() {
    let mut harness = TestHarness::new();
    harness.controller.handle(Trigger::<FakeApp>::MenuWillOpen(None));

    let panels = harness.panels();
    assert_eq!(panels.len(), 1);
    let panel = panels[0];
    assert_eq!(panel.display_name, "Unknown");
    assert_eq!(panel.architecture_label, "Cannot identify frontmost app");
    assert_eq!(panel.indicator_opacity, 1.0);
    assert_eq!(panel.application_icon, asset("processor-icon-empty"));
    assert_eq!(panel.indicator_icon, asset("processor-icon-empty"));
    assert_eq!(panel.architecture, None);
}

#[test]
fn test_unrecognised_architecture_with_missing_fields() {
    let mut harness = TestHarness::new();
    let odd = FakeApp {
        name: None,
        icon: None,
        architecture: 0x0200_0000,
    };
    harness.controller.handle(Trigger::MenuWillOpen(Some(odd)));

    let panel = harness.panels()[0];
    assert_eq!(panel.display_name, "");
    assert_eq!(panel.architecture_label, "Unknown • Unknown");
    assert_eq!(panel.application_icon, Image::Blank);
    assert_eq!(panel.indicator, Indicator::Empty);
    assert_eq!(panel.indicator_opacity, 1.0);
}

#[test]
fn test_missing_assets_degrade_to_blank_images() {
    let mut harness = TestHarness::with_catalog(FakeCatalog {
        missing: vec!["processor-icon".to_string()],
    });
    harness
        .controller
        .handle(Trigger::Launched(Some(FakeApp::new("Mail", codes::ARM64))));

    assert_eq!(harness.last_indicator(), Some((&Image::Blank, 0.25)));
}

#[test]
fn test_repeated_menu_opens_render_identical_panels() {
    let mut harness = TestHarness::new();
    let app = FakeApp::new("Finder", codes::ARM64);
    harness.controller.handle(Trigger::MenuWillOpen(Some(app.clone())));
    harness.controller.handle(Trigger::MenuWillOpen(Some(app)));

    let panels = harness.panels();
    assert_eq!(panels.len(), 2);
    assert_eq!(panels[0], panels[1]);
}
