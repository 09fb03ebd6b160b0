//! Xlib calls related to a keyboard.
use crate::XWrap;
use std::ffi::CString;
use std::os::raw::c_ulong;
use tinywm_core::utils::modmask_lookup::XKeysym;
use x11_dl::xlib;

impl XWrap {
    /// Grabs the keysym with the modifier on a window. Events are reported to us as well as to
    /// the window that would normally get them.
    // `XKeysymToKeycode`: https://tronche.com/gui/x/xlib/utilities/keyboard/XKeysymToKeycode.html
    // `XGrabKey`: https://tronche.com/gui/x/xlib/input/XGrabKey.html
    pub fn grab_keys(&self, window: xlib::Window, keysym: XKeysym, modifiers: u32) {
        let code = self.keysym_to_keycode(keysym);
        unsafe {
            (self.xlib.XGrabKey)(
                self.display,
                i32::from(code),
                modifiers,
                window,
                xlib::True,
                xlib::GrabModeAsync,
                xlib::GrabModeAsync,
            );
        }
    }

    /// Converts a key name such as `F1` to a keysym. `None` for unknown names.
    // `XStringToKeysym`: https://tronche.com/gui/x/xlib/utilities/keyboard/XStringToKeysym.html
    #[must_use]
    pub fn keysym_from_name(&self, name: &str) -> Option<XKeysym> {
        let name = CString::new(name).ok()?;
        let sym = unsafe { (self.xlib.XStringToKeysym)(name.as_ptr()) };
        // NoSymbol
        if sym == 0 {
            return None;
        }
        XKeysym::try_from(sym).ok()
    }

    /// Converts a keysym to a keycode. Zero if no key on this keyboard produces it.
    // `XKeysymToKeycode`: https://tronche.com/gui/x/xlib/utilities/keyboard/XKeysymToKeycode.html
    #[must_use]
    pub fn keysym_to_keycode(&self, keysym: XKeysym) -> u8 {
        unsafe { (self.xlib.XKeysymToKeycode)(self.display, c_ulong::from(keysym)) }
    }
}
