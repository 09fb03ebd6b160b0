//! The working state of the event loop.

use crate::config::Config;
use crate::models::{Handle, Mode};
use crate::utils::modmask_lookup::Button;
use crate::DisplayAction;
use std::collections::VecDeque;

#[derive(Debug)]
pub struct State<H: Handle> {
    /// The drag session. There is only ever one, a pointer can only be in one gesture.
    pub mode: Mode<H>,
    /// Commands waiting to be sent to the display server.
    pub actions: VecDeque<DisplayAction<H>>,
    pub move_button: Button,
    pub resize_button: Button,
}

impl<H: Handle> State<H> {
    pub(crate) fn new(config: &impl Config) -> Self {
        Self {
            mode: Mode::default(),
            actions: VecDeque::new(),
            move_button: config.move_button(),
            resize_button: config.resize_button(),
        }
    }
}
