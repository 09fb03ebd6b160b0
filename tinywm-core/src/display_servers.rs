#[cfg(test)]
mod mock_display_server;

use crate::display_action::DisplayAction;
use crate::models::Handle;
use crate::models::WindowHandle;
use crate::models::Xyhw;
use crate::utils::modmask_lookup::{Button, ModMask, XKeysym};
use crate::DisplayEvent;

#[cfg(test)]
pub use self::mock_display_server::{MockDisplayServer, F1_KEYSYM};

/// The connection to the display server. Opening it is the job of the implementor's constructor;
/// everything here works on an already open connection.
pub trait DisplayServer<H: Handle> {
    fn root(&self) -> WindowHandle<H>;

    /// Looks up a key by name. `None` if the name is unknown or the key is not on this keyboard.
    fn resolve_key(&self, name: &str) -> Option<XKeysym>;

    /// Passive grab of `modmask + keysym` on the root window.
    fn grab_key(&mut self, keysym: XKeysym, modmask: &ModMask);

    /// Passive grab of `modmask + button` on the root window, reporting press, release and motion.
    fn grab_button(&mut self, button: Button, modmask: &ModMask);

    /// Blocks until the next input event. `None` once no more events can arrive.
    fn next_event(&mut self) -> Option<DisplayEvent<H>>;

    /// Takes the pointer position of the newest motion event already queued, discarding the
    /// rest. Never blocks.
    fn next_motion(&mut self) -> Option<(i32, i32)> {
        None
    }

    /// Current geometry of a window, `None` if it is gone.
    fn query_geometry(&self, handle: WindowHandle<H>) -> Option<Xyhw>;

    fn execute_action(&mut self, act: DisplayAction<H>);

    fn flush(&self);
}
