use std::fmt;
use std::os::raw::c_void;

use cocoa::base::id;
use cocoa::foundation::{NSSize, NSUInteger};
use objc::rc::StrongPtr;
use objc::{class, msg_send, sel, sel_impl};

use super::{adopt, retain};
use crate::assets;
use crate::config::AppConfig;
use crate::core::{CoreError, ImageCatalog};

/// A retained `NSImage`.
#[derive(Clone)]
pub struct NativeImage(StrongPtr);

impl NativeImage {
    pub(crate) unsafe fn from_unowned(image: id) -> Option<Self> {
        retain(image).map(Self)
    }

    pub fn as_id(&self) -> id {
        *self.0
    }

    /// A copy scaled to `points`, leaving the shared original untouched.
    pub fn resized(&self, points: f64) -> Option<NativeImage> {
        unsafe {
            let copy: id = msg_send![*self.0, copy];
            let copy = adopt(copy)?;
            let _: () = msg_send![*copy, setSize: NSSize::new(points, points)];
            Some(Self(copy))
        }
    }
}

impl fmt::Debug for NativeImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NativeImage({:p})", *self.0)
    }
}

/// Builds `NSImage`s from the embedded assets.
pub struct NativeImages {
    indicator_size: f64,
    blank: NativeImage,
}

impl NativeImages {
    pub fn new(config: &AppConfig) -> Result<Self, CoreError> {
        let blank = unsafe {
            let image: id = msg_send![class!(NSImage), alloc];
            let image: id = msg_send![image, initWithSize: NSSize::new(1.0, 1.0)];
            adopt(image).map(NativeImage).ok_or(CoreError::ImageUnavailable("blank"))?
        };
        Ok(Self {
            indicator_size: config.indicator_size,
            blank,
        })
    }
}

impl ImageCatalog for NativeImages {
    type Image = NativeImage;

    fn named(&self, name: &str) -> Option<NativeImage> {
        let Some(bytes) = assets::asset_bytes(name) else {
            tracing::warn!("Icon asset {:?} is not bundled", name);
            return None;
        };
        unsafe {
            let data: id = msg_send![class!(NSData),
                dataWithBytes: bytes.as_ptr() as *const c_void
                length: bytes.len() as NSUInteger];
            let image: id = msg_send![class!(NSImage), alloc];
            let image: id = msg_send![image, initWithData: data];
            let image = adopt(image).map(NativeImage);
            match &image {
                Some(image) => {
                    let size = NSSize::new(self.indicator_size, self.indicator_size);
                    let _: () = msg_send![image.as_id(), setSize: size];
                }
                None => tracing::warn!("Icon asset {:?} could not be decoded", name),
            }
            image
        }
    }

    fn empty(&self) -> NativeImage {
        self.blank.clone()
    }
}
