//! macOS glue: AppKit objects behind the crate's traits.
//!
//! Everything in here must run on the main thread. AppKit delivers the
//! workspace notification and the menu delegate callback there, and the
//! binary starts the session from the tao event loop.

#![allow(deprecated)] // Keep Cocoa warnings localized
#![allow(unexpected_cfgs)] // Suppress warnings from the `sel!` macro in older `objc` crates

pub mod images;
pub mod menu;
pub mod observer;
pub mod status_item;
pub mod workspace;

use std::ffi::CStr;
use std::os::raw::c_char;

use cocoa::base::{id, nil};
use cocoa::foundation::NSString;
use objc::rc::StrongPtr;
use objc::{msg_send, sel, sel_impl};

use crate::app::{StatusController, Trigger};
use crate::config::AppConfig;
use crate::core::CoreError;

pub use images::{NativeImage, NativeImages};
pub use observer::{dispatch, install_trigger_handler, Observer};
pub use status_item::StatusBarPresenter;
pub use workspace::{frontmost_application, RunningApplication};

/// Keeps the observer registered for as long as the status item lives.
pub struct StatusSession {
    _observer: Observer,
}

/// Creates the status item, wires up the observers and shows the initial
/// snapshot.
pub fn start(config: &AppConfig) -> Result<StatusSession, CoreError> {
    let catalog = NativeImages::new(config)?;
    let presenter = StatusBarPresenter::new(config)?;
    let observer = Observer::register(presenter.menu())?;

    let mut controller = StatusController::new(catalog, presenter);
    install_trigger_handler(move |trigger| controller.handle(trigger));

    dispatch(Trigger::Launched(frontmost_application()));
    tracing::info!("Status item installed.");

    Ok(StatusSession {
        _observer: observer,
    })
}

/// An autoreleased `NSString`.
pub(crate) fn ns(s: &str) -> id {
    unsafe {
        let string = NSString::alloc(nil).init_str(s);
        msg_send![string, autorelease]
    }
}

/// Copies an `NSString` into a Rust `String`. `nil` yields `None`.
pub(crate) unsafe fn rust_string(string: id) -> Option<String> {
    if string == nil {
        return None;
    }
    let utf8: *const c_char = msg_send![string, UTF8String];
    if utf8.is_null() {
        return None;
    }
    Some(CStr::from_ptr(utf8).to_string_lossy().into_owned())
}

/// Retains a `+0` object, or returns `None` for `nil`.
pub(crate) unsafe fn retain(object: id) -> Option<StrongPtr> {
    (object != nil).then(|| StrongPtr::retain(object))
}

/// Takes ownership of a `+1` object, or returns `None` for `nil`.
pub(crate) unsafe fn adopt(object: id) -> Option<StrongPtr> {
    (object != nil).then(|| StrongPtr::new(object))
}
