use cocoa::base::{id, nil, BOOL, NO};
use cocoa::foundation::NSInteger;
use objc::rc::StrongPtr;
use objc::{class, msg_send, sel, sel_impl};

use super::images::NativeImage;
use super::{retain, rust_string};
use crate::core::ForegroundProcess;

/// A retained `NSRunningApplication`.
pub struct RunningApplication(StrongPtr);

impl RunningApplication {
    /// Wraps `object` if it is an `NSRunningApplication`.
    pub(crate) unsafe fn from_unowned(object: id) -> Option<Self> {
        if object == nil {
            return None;
        }
        let is_app: BOOL = msg_send![object, isKindOfClass: class!(NSRunningApplication)];
        if is_app == NO {
            tracing::debug!("Activation payload is not an NSRunningApplication");
            return None;
        }
        retain(object).map(Self)
    }
}

impl ForegroundProcess for RunningApplication {
    type Image = NativeImage;

    fn localized_name(&self) -> Option<String> {
        unsafe {
            let name: id = msg_send![*self.0, localizedName];
            rust_string(name)
        }
    }

    fn icon(&self) -> Option<NativeImage> {
        unsafe {
            let icon: id = msg_send![*self.0, icon];
            NativeImage::from_unowned(icon)
        }
    }

    fn executable_architecture(&self) -> i64 {
        unsafe {
            let architecture: NSInteger = msg_send![*self.0, executableArchitecture];
            architecture as i64
        }
    }
}

/// `NSWorkspace.sharedWorkspace.frontmostApplication`, if any.
pub fn frontmost_application() -> Option<RunningApplication> {
    unsafe {
        let workspace: id = msg_send![class!(NSWorkspace), sharedWorkspace];
        let app: id = msg_send![workspace, frontmostApplication];
        RunningApplication::from_unowned(app)
    }
}
