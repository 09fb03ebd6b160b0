use super::{Config, Handle, Manager};
use crate::display_servers::DisplayServer;
use crate::errors::{Result, TinyError};
use crate::utils::modmask_lookup;

impl<H: Handle, C: Config, SERVER: DisplayServer<H>> Manager<H, C, SERVER> {
    /// Registers the raise key and the move/resize buttons on the root window. These three are
    /// the only combinations delivered to us; all other input goes to its owner untouched.
    ///
    /// # Errors
    ///
    /// Will error with `TinyError::UnknownKey` if the raise key cannot be resolved to a key on
    /// this keyboard. No grab is registered in that case.
    pub fn grab_inputs(&mut self) -> Result<()> {
        let modmask = modmask_lookup::into_modmask(&self.config.modkey());
        let key = self.config.raise_key();
        let Some(keysym) = self.display_server.resolve_key(&key) else {
            return Err(TinyError::UnknownKey(key));
        };

        self.display_server.grab_key(keysym, &modmask);
        self.display_server
            .grab_button(self.state.move_button, &modmask);
        self.display_server
            .grab_button(self.state.resize_button, &modmask);

        tracing::info!(
            "Grabbed on {:?}: {:?}+{} (raise), {:?} (move), {:?} (resize)",
            self.display_server.root(),
            modmask,
            key,
            self.state.move_button,
            self.state.resize_button
        );
        Ok(())
    }
}
