//! Receives AppKit callbacks and hands them to the installed trigger handler.

use std::cell::RefCell;

use cocoa::base::{id, nil};
use objc::declare::ClassDecl;
use objc::rc::StrongPtr;
use objc::runtime::{Class, Object, Protocol, Sel};
use objc::{class, msg_send, sel, sel_impl};

use super::workspace::{frontmost_application, RunningApplication};
use super::{adopt, ns};
use crate::app::Trigger;
use crate::core::CoreError;

const OBSERVER_CLASS: &str = "SiliconInfoObserver";
const ACTIVATION_NOTIFICATION: &str = "NSWorkspaceDidActivateApplicationNotification";
const APPLICATION_KEY: &str = "NSWorkspaceApplicationKey";

type TriggerHandler = Box<dyn FnMut(Trigger<RunningApplication>)>;

thread_local! {
    static HANDLER: RefCell<Option<TriggerHandler>> = RefCell::new(None);
}

/// Installs the handler that receives every trigger on this thread.
pub fn install_trigger_handler<F>(handler: F)
where
    F: FnMut(Trigger<RunningApplication>) + 'static,
{
    HANDLER.with(|slot| *slot.borrow_mut() = Some(Box::new(handler)));
}

/// Runs the installed handler synchronously.
pub fn dispatch(trigger: Trigger<RunningApplication>) {
    HANDLER.with(|slot| match slot.try_borrow_mut() {
        Ok(mut handler) => match handler.as_mut() {
            Some(handle) => handle(trigger),
            None => tracing::warn!("Dropped {} trigger: no handler installed", trigger.name()),
        },
        Err(_) => tracing::warn!("Dropped re-entrant {} trigger", trigger.name()),
    });
}

extern "C" fn application_did_activate(_this: &Object, _sel: Sel, notification: id) {
    let app = unsafe {
        let user_info: id = msg_send![notification, userInfo];
        if user_info == nil {
            return;
        }
        let app: id = msg_send![user_info, objectForKey: ns(APPLICATION_KEY)];
        if app == nil {
            return;
        }
        RunningApplication::from_unowned(app)
    };
    dispatch(Trigger::ApplicationActivated(app));
}

extern "C" fn menu_will_open(_this: &Object, _sel: Sel, _menu: id) {
    dispatch(Trigger::MenuWillOpen(frontmost_application()));
}

fn observer_class() -> Result<&'static Class, CoreError> {
    if let Some(class) = Class::get(OBSERVER_CLASS) {
        return Ok(class);
    }
    let mut decl = ClassDecl::new(OBSERVER_CLASS, class!(NSObject))
        .ok_or(CoreError::ClassRegistration(OBSERVER_CLASS))?;
    unsafe {
        decl.add_method(
            sel!(applicationDidActivate:),
            application_did_activate as extern "C" fn(&Object, Sel, id),
        );
        decl.add_method(
            sel!(menuWillOpen:),
            menu_will_open as extern "C" fn(&Object, Sel, id),
        );
    }
    if let Some(protocol) = Protocol::get("NSMenuDelegate") {
        decl.add_protocol(protocol);
    }
    Ok(decl.register())
}

/// Subscribed to workspace activations and delegate of the status menu.
/// Unsubscribes on drop.
pub struct Observer(StrongPtr);

impl Observer {
    pub fn register(status_menu: id) -> Result<Self, CoreError> {
        let class = observer_class()?;
        unsafe {
            let observer: id = msg_send![class, new];
            let observer = adopt(observer).ok_or(CoreError::ClassRegistration(OBSERVER_CLASS))?;

            let center = notification_center();
            let _: () = msg_send![center,
                addObserver: *observer
                selector: sel!(applicationDidActivate:)
                name: ns(ACTIVATION_NOTIFICATION)
                object: nil];
            let _: () = msg_send![status_menu, setDelegate: *observer];

            tracing::debug!("Registered workspace activation observer");
            Ok(Self(observer))
        }
    }
}

impl Drop for Observer {
    fn drop(&mut self) {
        unsafe {
            let _: () = msg_send![notification_center(), removeObserver: *self.0];
        }
    }
}

unsafe fn notification_center() -> id {
    let workspace: id = msg_send![class!(NSWorkspace), sharedWorkspace];
    msg_send![workspace, notificationCenter]
}
