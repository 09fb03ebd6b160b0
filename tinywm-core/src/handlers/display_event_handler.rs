use super::{Config, DisplayEvent, Handle, Manager};
use crate::display_servers::DisplayServer;

impl<H: Handle, C: Config, SERVER: DisplayServer<H>> Manager<H, C, SERVER> {
    /// Apply a single event to the drag session.
    /// Returns true if commands were queued for the display server.
    pub fn display_event_handler(&mut self, event: DisplayEvent<H>) -> bool {
        match event {
            DisplayEvent::KeyPress { subwindow, .. } => self.state.key_combo_handler(subwindow),

            DisplayEvent::ButtonPress {
                subwindow,
                x_root,
                y_root,
                button,
                ..
            } => self.mouse_combo_handler(button, subwindow, x_root, y_root),

            DisplayEvent::Motion { x_root, y_root, .. } => {
                self.state.motion_handler(x_root, y_root)
            }

            DisplayEvent::ButtonRelease { .. } => self.state.button_release_handler(),
        }
    }
}
