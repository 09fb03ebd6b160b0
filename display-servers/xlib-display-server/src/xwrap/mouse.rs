//! Xlib calls related to a mouse.
use super::BUTTONMASK;
use crate::XWrap;
use x11_dl::xlib;

impl XWrap {
    /// Grabs the button with the modifier on a window, reporting press, release and motion.
    // `XGrabButton`: https://tronche.com/gui/x/xlib/input/XGrabButton.html
    pub fn grab_buttons(&self, window: xlib::Window, button: u32, modifiers: u32) {
        unsafe {
            (self.xlib.XGrabButton)(
                self.display,
                button,
                modifiers,
                window,
                xlib::True,
                BUTTONMASK as u32,
                xlib::GrabModeAsync,
                xlib::GrabModeAsync,
                0,
                0,
            );
        }
    }
}
