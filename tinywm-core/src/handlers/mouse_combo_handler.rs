use super::{Config, Handle, Manager, Mode, WindowHandle};
use crate::display_servers::DisplayServer;
use crate::models::DragAnchor;
use crate::utils::modmask_lookup::Button;

impl<H: Handle, C: Config, SERVER: DisplayServer<H>> Manager<H, C, SERVER> {
    /// Opens a drag session on the window under the cursor, anchored at the current pointer
    /// position and the window's current geometry.
    ///
    /// Nothing happens over the root background, for buttons that are neither the move nor the
    /// resize button, or when the window is already gone.
    pub fn mouse_combo_handler(
        &mut self,
        button: Button,
        subwindow: Option<WindowHandle<H>>,
        x_root: i32,
        y_root: i32,
    ) -> bool {
        let Some(window) = subwindow else {
            return false;
        };
        let is_move = button == self.state.move_button;
        if !is_move && button != self.state.resize_button {
            return false;
        }
        let Some(geometry) = self.display_server.query_geometry(window) else {
            return false;
        };

        let anchor = DragAnchor {
            window,
            pointer: (x_root, y_root),
            geometry,
        };
        self.state.mode = if is_move {
            Mode::MovingWindow(anchor)
        } else {
            Mode::ResizingWindow(anchor)
        };
        tracing::debug!("Drag started: {:?}", self.state.mode);
        false
    }
}
