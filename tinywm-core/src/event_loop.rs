use crate::config::Config;
use crate::display_servers::DisplayServer;
use crate::errors::Result;
use crate::models::Handle;
use crate::{DisplayEvent, Manager};

impl<H: Handle, C: Config, SERVER: DisplayServer<H>> Manager<H, C, SERVER> {
    /// Registers the grabs, then handles events until the display server stops delivering them.
    /// With a live X connection that never happens.
    ///
    /// # Errors
    ///
    /// Errors only at startup, when the grabs cannot be registered. See `grab_inputs`.
    pub fn start_event_loop(mut self) -> Result<()> {
        self.grab_inputs()?;
        self.display_server.flush();
        self.event_loop();
        Ok(())
    }

    fn event_loop(&mut self) {
        while let Some(event) = self.display_server.next_event() {
            let event = self.coalesce_motion(event);
            tracing::trace!("DisplayEvent: {:?}", event);
            if self.display_event_handler(event) {
                self.execute_actions();
            }
            self.display_server.flush();
        }
        tracing::info!("Display server stopped delivering events");
    }

    /// While dragging, skip ahead to the newest queued pointer position; the ones in between
    /// would be overwritten before anyone sees them.
    fn coalesce_motion(&mut self, event: DisplayEvent<H>) -> DisplayEvent<H> {
        match event {
            DisplayEvent::Motion {
                window,
                subwindow,
                ..
            } if self.config.coalesce_motion() && self.state.mode.is_dragging() => {
                match self.display_server.next_motion() {
                    Some((x_root, y_root)) => DisplayEvent::Motion {
                        window,
                        subwindow,
                        x_root,
                        y_root,
                    },
                    None => event,
                }
            }
            _ => event,
        }
    }

    fn execute_actions(&mut self) {
        while let Some(act) = self.state.actions.pop_front() {
            tracing::trace!("DisplayAction: {:?}", act);
            self.display_server.execute_action(act);
        }
    }
}
