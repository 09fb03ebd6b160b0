use tinywm_core::utils::modmask_lookup::Button;

/// Compiled in configuration: Alt+F1 raises, Alt+Button1 moves, Alt+Button3 resizes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub modkey: Vec<String>,
    pub raise_key: String,
    pub move_button: Button,
    pub resize_button: Button,
    pub coalesce_motion: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            modkey: vec!["Alt".to_owned()],
            raise_key: "F1".to_owned(),
            move_button: Button::Button1,
            resize_button: Button::Button3,
            coalesce_motion: true,
        }
    }
}

impl tinywm_core::Config for Config {
    fn modkey(&self) -> Vec<String> {
        self.modkey.clone()
    }

    fn raise_key(&self) -> String {
        self.raise_key.clone()
    }

    fn move_button(&self) -> Button {
        self.move_button
    }

    fn resize_button(&self) -> Button {
        self.resize_button
    }

    fn coalesce_motion(&self) -> bool {
        self.coalesce_motion
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinywm_core::utils::modmask_lookup::{into_modmask, ModMask};
    use tinywm_core::Config as _;

    #[test]
    fn default_modifier_is_alt() {
        let config = Config::default();
        assert_eq!(into_modmask(&config.modkey()), ModMask::Alt);
    }

    #[test]
    fn default_buttons_are_left_move_and_right_resize() {
        let config = Config::default();
        assert_eq!(config.move_button(), Button::Button1);
        assert_eq!(config.resize_button(), Button::Button3);
        assert_eq!(config.raise_key(), "F1");
        assert!(config.coalesce_motion());
    }
}
