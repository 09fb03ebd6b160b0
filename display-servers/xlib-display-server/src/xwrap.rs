//! A wrapper around calls to xlib and X related functions.
use std::os::raw::c_int;
use std::ptr;
use thiserror::Error;

use x11_dl::xlib;

mod keyboard;
mod mouse;
mod window;

/// Events delivered through a button grab.
const BUTTONMASK: std::os::raw::c_long =
    xlib::ButtonPressMask | xlib::ButtonReleaseMask | xlib::PointerMotionMask;

const X_CONFIGUREWINDOW: u8 = 12;
const X_GRABBUTTON: u8 = 28;
const X_GRABKEY: u8 = 33;

// Requests against windows that were destroyed in the meantime fail asynchronously. None of these
// are worth stopping for.
#[allow(clippy::missing_const_for_fn)]
pub extern "C" fn on_error_from_xlib(_: *mut xlib::Display, er: *mut xlib::XErrorEvent) -> c_int {
    let err = unsafe { *er };
    let ec = err.error_code;
    let rc = err.request_code;
    let ba = ec == xlib::BadAccess;
    let bm = ec == xlib::BadMatch;

    if ec == xlib::BadWindow
        || ec == xlib::BadDrawable
        || (rc == X_CONFIGUREWINDOW && bm)
        || (rc == X_GRABBUTTON && ba)
        || (rc == X_GRABKEY && ba)
    {
        return 0;
    }
    1
}

#[derive(Debug, Error)]
pub enum XlibError {
    #[error("Unable to load xlib: {0}")]
    LibraryNotLoaded(String),
    #[error("Unable to open the X display")]
    DisplayNotOpened,
    #[error("The X server returned a failed status")]
    FailedStatus,
}

impl From<XlibError> for tinywm_core::TinyError {
    fn from(err: XlibError) -> Self {
        Self::DisplayOpen(err.to_string())
    }
}

/// Contains Xserver information and origins.
pub struct XWrap {
    xlib: xlib::Xlib,
    display: *mut xlib::Display,
    root: xlib::Window,
}

impl XWrap {
    /// Opens the display named by `$DISPLAY` and installs our error handler.
    ///
    /// # Errors
    ///
    /// Will error if xlib cannot be loaded or the display cannot be opened.
    // `XOpenDisplay`: https://tronche.com/gui/x/xlib/display/opening.html
    // `XDefaultRootWindow`: https://tronche.com/gui/x/xlib/display/display-macros.html#DefaultRootWindow
    // `XSetErrorHandler`: https://tronche.com/gui/x/xlib/event-handling/protocol-errors/XSetErrorHandler.html
    pub fn new() -> Result<Self, XlibError> {
        let xlib =
            xlib::Xlib::open().map_err(|err| XlibError::LibraryNotLoaded(err.to_string()))?;
        let display = unsafe { (xlib.XOpenDisplay)(ptr::null()) };
        if display.is_null() {
            return Err(XlibError::DisplayNotOpened);
        }
        let root = unsafe { (xlib.XDefaultRootWindow)(display) };

        let xw = Self {
            xlib,
            display,
            root,
        };
        unsafe { (xw.xlib.XSetErrorHandler)(Some(on_error_from_xlib)) };
        xw.sync();
        tracing::debug!("Connected to X, root window {}", root);
        Ok(xw)
    }

    /// Returns the default root.
    #[must_use]
    pub const fn get_default_root(&self) -> xlib::Window {
        self.root
    }

    /// Returns the next `Xevent` of the xserver, blocking until there is one.
    // `XNextEvent`: https://tronche.com/gui/x/xlib/event-handling/manipulating-event-queue/XNextEvent.html
    #[must_use]
    pub fn get_next_event(&self) -> xlib::XEvent {
        unsafe {
            let mut event: xlib::XEvent = std::mem::zeroed();
            (self.xlib.XNextEvent)(self.display, &mut event);
            event
        }
    }

    /// Removes the motion events at the head of the queue and returns the newest of them.
    /// Stops at the first other event so nothing is reordered around a button release.
    // `XPeekEvent`: https://tronche.com/gui/x/xlib/event-handling/manipulating-event-queue/XPeekEvent.html
    #[must_use]
    pub fn take_queued_motion(&self) -> Option<xlib::XMotionEvent> {
        let mut latest = None;
        while self.queue_len() > 0 {
            let mut event: xlib::XEvent = unsafe { std::mem::zeroed() };
            unsafe { (self.xlib.XPeekEvent)(self.display, &mut event) };
            if event.get_type() != xlib::MotionNotify {
                break;
            }
            latest = Some(xlib::XMotionEvent::from(self.get_next_event()));
        }
        latest
    }

    /// Flush and sync the xserver.
    // `XSync`: https://tronche.com/gui/x/xlib/event-handling/XSync.html
    pub fn sync(&self) {
        unsafe { (self.xlib.XSync)(self.display, xlib::False) };
    }

    /// Flush the xserver.
    // `XFlush`: https://tronche.com/gui/x/xlib/event-handling/XFlush.html
    pub fn flush(&self) {
        unsafe { (self.xlib.XFlush)(self.display) };
    }

    /// Returns how many events are waiting.
    // `XPending`: https://tronche.com/gui/x/xlib/event-handling/XPending.html
    #[must_use]
    pub fn queue_len(&self) -> i32 {
        unsafe { (self.xlib.XPending)(self.display) }
    }
}

impl Drop for XWrap {
    // `XCloseDisplay`: https://tronche.com/gui/x/xlib/display/closing.html
    fn drop(&mut self) {
        unsafe { (self.xlib.XCloseDisplay)(self.display) };
    }
}
