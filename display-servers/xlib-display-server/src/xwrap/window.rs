//! Xlib calls related to a window.
use super::XlibError;
use crate::XWrap;
use tinywm_core::models::{Xyhw, XyhwBuilder};
use x11_dl::xlib;

impl XWrap {
    /// Returns the `WindowAttributes` of a window.
    /// # Errors
    ///
    /// Will error if the window is gone. `XGetWindowAttributes` fails then.
    // `XGetWindowAttributes`: https://tronche.com/gui/x/xlib/window-information/XGetWindowAttributes.html
    pub fn get_window_attrs(
        &self,
        window: xlib::Window,
    ) -> Result<xlib::XWindowAttributes, XlibError> {
        let mut attrs: xlib::XWindowAttributes = unsafe { std::mem::zeroed() };
        let status = unsafe { (self.xlib.XGetWindowAttributes)(self.display, window, &mut attrs) };
        if status == 0 {
            return Err(XlibError::FailedStatus);
        }
        Ok(attrs)
    }

    /// Returns the position and size of a window.
    /// # Errors
    ///
    /// See `get_window_attrs`.
    pub fn get_window_geometry(&self, window: xlib::Window) -> Result<Xyhw, XlibError> {
        let attrs = self.get_window_attrs(window)?;
        Ok(XyhwBuilder {
            x: attrs.x,
            y: attrs.y,
            w: attrs.width,
            h: attrs.height,
            ..XyhwBuilder::default()
        }
        .into())
    }

    /// Moves and resizes a window in one request.
    // `XMoveResizeWindow`: https://tronche.com/gui/x/xlib/window/XMoveResizeWindow.html
    pub fn move_resize_window(&self, window: xlib::Window, x: i32, y: i32, w: u32, h: u32) {
        unsafe {
            (self.xlib.XMoveResizeWindow)(self.display, window, x, y, w, h);
        }
    }

    /// Raises a window to the top of the stack.
    // `XRaiseWindow`: https://tronche.com/gui/x/xlib/window/XRaiseWindow.html
    pub fn move_to_top(&self, window: xlib::Window) {
        unsafe {
            (self.xlib.XRaiseWindow)(self.display, window);
        }
    }
}
