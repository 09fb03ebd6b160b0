//! X11 display server for tinywm, built on xlib.
// allow casting types
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

mod event_translate;
mod xwrap;

pub use xwrap::{XWrap, XlibError};

use event_translate::XEvent;
use tinywm_core::models::{Handle, WindowHandle, Xyhw};
use tinywm_core::utils::modmask_lookup::{Button, ModMask, XKeysym};
use tinywm_core::{DisplayAction, DisplayEvent, DisplayServer};

use x11_dl::xlib;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct XlibWindowHandle(pub xlib::Window);
impl Handle for XlibWindowHandle {}

pub struct XlibDisplayServer {
    xw: XWrap,
    root: xlib::Window,
}

impl XlibDisplayServer {
    /// Connects to the X server named by `$DISPLAY`.
    ///
    /// # Errors
    ///
    /// Will error if xlib cannot be loaded or the display cannot be opened.
    pub fn new() -> Result<Self, XlibError> {
        let xw = XWrap::new()?;
        let root = xw.get_default_root();
        Ok(Self { xw, root })
    }
}

impl DisplayServer<XlibWindowHandle> for XlibDisplayServer {
    fn root(&self) -> WindowHandle<XlibWindowHandle> {
        WindowHandle(XlibWindowHandle(self.root))
    }

    fn resolve_key(&self, name: &str) -> Option<XKeysym> {
        let keysym = self.xw.keysym_from_name(name)?;
        // A keysym without a keycode cannot be grabbed on this keyboard.
        (self.xw.keysym_to_keycode(keysym) != 0).then_some(keysym)
    }

    fn grab_key(&mut self, keysym: XKeysym, modmask: &ModMask) {
        self.xw
            .grab_keys(self.root, keysym, u32::from(modmask.bits()));
    }

    fn grab_button(&mut self, button: Button, modmask: &ModMask) {
        self.xw
            .grab_buttons(self.root, button.index(), u32::from(modmask.bits()));
    }

    fn next_event(&mut self) -> Option<DisplayEvent<XlibWindowHandle>> {
        loop {
            let xlib_event = self.xw.get_next_event();
            let event: Option<DisplayEvent<XlibWindowHandle>> = XEvent(xlib_event).into();
            if event.is_some() {
                return event;
            }
        }
    }

    fn next_motion(&mut self) -> Option<(i32, i32)> {
        self.xw
            .take_queued_motion()
            .map(|event| (event.x_root, event.y_root))
    }

    fn query_geometry(&self, handle: WindowHandle<XlibWindowHandle>) -> Option<Xyhw> {
        let WindowHandle(XlibWindowHandle(window)) = handle;
        self.xw.get_window_geometry(window).ok()
    }

    fn execute_action(&mut self, act: DisplayAction<XlibWindowHandle>) {
        match act {
            DisplayAction::MoveToTop(WindowHandle(XlibWindowHandle(window))) => {
                self.xw.move_to_top(window);
            }
            DisplayAction::MoveResizeWindow(WindowHandle(XlibWindowHandle(window)), xyhw) => {
                self.xw.move_resize_window(
                    window,
                    xyhw.x(),
                    xyhw.y(),
                    xyhw.w().unsigned_abs(),
                    xyhw.h().unsigned_abs(),
                );
            }
        }
    }

    fn flush(&self) {
        self.xw.flush();
    }
}
