use crate::models::{Handle, WindowHandle, Xyhw};

/// These are responses from the Window manager.
/// The display server should act on these actions.
///
/// Either may target a window that no longer exists; the display server drops those silently.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayAction<H: Handle> {
    /// Raises a given window.
    MoveToTop(WindowHandle<H>),

    /// Places a window at the given position and size.
    MoveResizeWindow(WindowHandle<H>, Xyhw),
}
