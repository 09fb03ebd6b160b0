use super::{Handle, WindowHandle};
use crate::display_action::DisplayAction;
use crate::state::State;

impl<H: Handle> State<H> {
    /// Raises the window under the cursor. Does not look at, or touch, a drag in progress.
    /// Returns true if a command was queued.
    pub fn key_combo_handler(&mut self, subwindow: Option<WindowHandle<H>>) -> bool {
        // The grab fired over the root background.
        let Some(handle) = subwindow else {
            return false;
        };
        self.actions.push_back(DisplayAction::MoveToTop(handle));
        true
    }
}
