use cocoa::appkit::{NSEventModifierFlags, NSMenu, NSMenuItem};
use cocoa::base::{id, nil, NO};
use objc::runtime::Sel;
use objc::{msg_send, sel, sel_impl};

use super::images::NativeImage;
use super::ns;
use crate::app::panel::{self, PanelRow};
use crate::core::ProcessSnapshot;

/// Sizes and titles of the status menu.
pub struct PanelLayout {
    pub app_icon_size: f64,
    pub quit_title: String,
}

// Helper function to create a menu item with an optional shortcut.
unsafe fn add_item(
    menu: id,
    title: &str,
    action: Option<Sel>,
    key: Option<&str>,
    mask: Option<NSEventModifierFlags>,
) -> id {
    let item = NSMenuItem::alloc(nil).initWithTitle_action_keyEquivalent_(
        ns(title),
        action.unwrap_or_else(|| Sel::from_ptr(std::ptr::null())),
        ns(key.unwrap_or("")),
    );
    if let Some(m) = mask {
        item.setKeyEquivalentModifierMask_(m);
    }
    menu.addItem_(item);
    // The menu retains the item; balance the alloc.
    let _: () = msg_send![item, release];
    item
}

unsafe fn add_separator(menu: id) {
    let sep = NSMenuItem::separatorItem(nil);
    menu.addItem_(sep);
}

/// Replaces the menu contents with the info panel for `snapshot`.
pub(crate) unsafe fn rebuild(menu: id, snapshot: &ProcessSnapshot<NativeImage>, layout: &PanelLayout) {
    let _: () = msg_send![menu, removeAllItems];
    let _: () = msg_send![menu, setAutoenablesItems: NO];

    for row in panel::rows(snapshot, &layout.quit_title) {
        match row {
            PanelRow::Label { title, icon } => {
                let item = add_item(menu, title, None, None, None);
                let _: () = msg_send![item, setEnabled: NO];
                if let Some(icon) = icon.and_then(|icon| icon.resized(layout.app_icon_size)) {
                    let _: () = msg_send![item, setImage: icon.as_id()];
                }
            }
            PanelRow::Separator => add_separator(menu),
            PanelRow::Quit { title } => {
                add_item(
                    menu,
                    title,
                    Some(sel!(terminate:)),
                    Some("q"),
                    Some(NSEventModifierFlags::NSCommandKeyMask),
                );
            }
        }
    }
}
