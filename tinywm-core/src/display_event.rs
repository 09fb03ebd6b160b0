use crate::models::{Handle, WindowHandle};
use crate::utils::modmask_lookup::Button;

/// An input event delivered through one of our grabs.
///
/// `window` is the window the grab fired on (the root), `subwindow` the child of the root under
/// the cursor, or `None` when the pointer is over the background. `x_root`/`y_root` are absolute
/// pointer coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayEvent<H: Handle> {
    KeyPress {
        window: WindowHandle<H>,
        subwindow: Option<WindowHandle<H>>,
        x_root: i32,
        y_root: i32,
    },
    ButtonPress {
        window: WindowHandle<H>,
        subwindow: Option<WindowHandle<H>>,
        x_root: i32,
        y_root: i32,
        button: Button,
    },
    ButtonRelease {
        window: WindowHandle<H>,
        subwindow: Option<WindowHandle<H>>,
        x_root: i32,
        y_root: i32,
    },
    Motion {
        window: WindowHandle<H>,
        subwindow: Option<WindowHandle<H>>,
        x_root: i32,
        y_root: i32,
    },
}
