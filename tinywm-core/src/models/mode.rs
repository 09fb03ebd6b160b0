use crate::models::{Handle, WindowHandle, Xyhw};

/// Where a drag started: the pointer position and the window geometry at button press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DragAnchor<H: Handle> {
    pub window: WindowHandle<H>,
    pub pointer: (i32, i32),
    pub geometry: Xyhw,
}

impl<H: Handle> DragAnchor<H> {
    /// Pointer offset from the anchor.
    pub const fn offset(&self, x_root: i32, y_root: i32) -> (i32, i32) {
        (
            x_root.saturating_sub(self.pointer.0),
            y_root.saturating_sub(self.pointer.1),
        )
    }
}

/// The drag session. `Normal` is idle; the other variants carry the anchor of the drag in
/// progress, so an anchor can never be read without a drag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Mode<H: Handle> {
    MovingWindow(DragAnchor<H>),
    ResizingWindow(DragAnchor<H>),
    #[default]
    Normal,
}

impl<H: Handle> Mode<H> {
    pub const fn is_dragging(&self) -> bool {
        !matches!(self, Self::Normal)
    }

    pub const fn anchor(&self) -> Option<&DragAnchor<H>> {
        match self {
            Self::MovingWindow(anchor) | Self::ResizingWindow(anchor) => Some(anchor),
            Self::Normal => None,
        }
    }

    /// Geometry the dragged window should have with the pointer at `(x_root, y_root)`.
    /// `None` while idle.
    pub fn target_geometry(&self, x_root: i32, y_root: i32) -> Option<(WindowHandle<H>, Xyhw)> {
        match self {
            Self::MovingWindow(anchor) => {
                let (offset_x, offset_y) = anchor.offset(x_root, y_root);
                Some((anchor.window, anchor.geometry.moved_by(offset_x, offset_y)))
            }
            Self::ResizingWindow(anchor) => {
                let (offset_w, offset_h) = anchor.offset(x_root, y_root);
                Some((anchor.window, anchor.geometry.resized_by(offset_w, offset_h)))
            }
            Self::Normal => None,
        }
    }
}
