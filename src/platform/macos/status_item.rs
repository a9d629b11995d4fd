use cocoa::base::{id, nil, YES};
use objc::rc::StrongPtr;
use objc::{class, msg_send, sel, sel_impl};

use super::images::NativeImage;
use super::menu::{self, PanelLayout};
use super::{adopt, retain};
use crate::app::StatusPresenter;
use crate::config::AppConfig;
use crate::core::{CoreError, ProcessSnapshot};

/// `NSVariableStatusItemLength`
const VARIABLE_LENGTH: f64 = -1.0;

/// The `NSStatusItem` and its menu.
pub struct StatusBarPresenter {
    item: StrongPtr,
    menu: StrongPtr,
    layout: PanelLayout,
}

impl StatusBarPresenter {
    pub fn new(config: &AppConfig) -> Result<Self, CoreError> {
        unsafe {
            let status_bar: id = msg_send![class!(NSStatusBar), systemStatusBar];
            let item: id = msg_send![status_bar, statusItemWithLength: VARIABLE_LENGTH];
            let item = retain(item).ok_or(CoreError::StatusItemUnavailable)?;

            let status_menu: id = msg_send![class!(NSMenu), new];
            let status_menu = adopt(status_menu).ok_or(CoreError::StatusItemUnavailable)?;
            let _: () = msg_send![*item, setMenu: *status_menu];

            Ok(Self {
                item,
                menu: status_menu,
                layout: PanelLayout {
                    app_icon_size: config.app_icon_size,
                    quit_title: config.quit_title.clone(),
                },
            })
        }
    }

    /// The status menu, for installing a delegate.
    pub fn menu(&self) -> id {
        *self.menu
    }
}

impl StatusPresenter for StatusBarPresenter {
    type Image = NativeImage;

    fn show_indicator(&mut self, icon: &NativeImage, opacity: f64) {
        unsafe {
            let button: id = msg_send![*self.item, button];
            if button == nil {
                tracing::warn!("Status item has no button; indicator not updated");
                return;
            }
            let _: () = msg_send![icon.as_id(), setTemplate: YES];
            let _: () = msg_send![button, setImage: icon.as_id()];
            let _: () = msg_send![button, setAlphaValue: opacity];
        }
    }

    fn show_panel(&mut self, snapshot: &ProcessSnapshot<NativeImage>) {
        unsafe { menu::rebuild(*self.menu, snapshot, &self.layout) }
    }
}
