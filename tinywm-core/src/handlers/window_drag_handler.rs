use super::{Handle, Mode};
use crate::display_action::DisplayAction;
use crate::state::State;

impl<H: Handle> State<H> {
    /// Moves or resizes the dragged window to follow the pointer. Motion without a drag is
    /// ignored. Returns true if a command was queued.
    pub fn motion_handler(&mut self, x_root: i32, y_root: i32) -> bool {
        match self.mode.target_geometry(x_root, y_root) {
            Some((handle, xyhw)) => {
                self.actions
                    .push_back(DisplayAction::MoveResizeWindow(handle, xyhw));
                true
            }
            None => false,
        }
    }

    /// Ends any drag in progress.
    pub fn button_release_handler(&mut self) -> bool {
        if self.mode.is_dragging() {
            tracing::debug!("Drag finished: {:?}", self.mode);
        }
        self.mode = Mode::Normal;
        false
    }
}
