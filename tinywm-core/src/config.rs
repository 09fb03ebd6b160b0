use crate::utils::modmask_lookup::Button;

/// The input combinations tinywm reacts to. Implemented by the binary with compiled in values.
pub trait Config {
    /// Modifier names (e.g. `"Alt"`, `"Super"`) held for every combination.
    fn modkey(&self) -> Vec<String>;

    /// Name of the key that raises the window under the cursor, e.g. `"F1"`.
    fn raise_key(&self) -> String;

    fn move_button(&self) -> Button;

    fn resize_button(&self) -> Button;

    /// Whether queued motion events are collapsed into the latest one while dragging.
    fn coalesce_motion(&self) -> bool {
        true
    }
}

#[cfg(test)]
#[derive(Clone, Debug)]
pub struct TestConfig {
    pub raise_key: String,
    pub coalesce_motion: bool,
}

#[cfg(test)]
impl Default for TestConfig {
    fn default() -> Self {
        Self {
            raise_key: "F1".to_owned(),
            coalesce_motion: true,
        }
    }
}

#[cfg(test)]
impl Config for TestConfig {
    fn modkey(&self) -> Vec<String> {
        vec!["Alt".to_owned()]
    }

    fn raise_key(&self) -> String {
        self.raise_key.clone()
    }

    fn move_button(&self) -> Button {
        Button::Button1
    }

    fn resize_button(&self) -> Button {
        Button::Button3
    }

    fn coalesce_motion(&self) -> bool {
        self.coalesce_motion
    }
}
