pub mod display_event_handler;
mod grab_handler;
mod key_combo_handler;
mod mouse_combo_handler;
mod window_drag_handler;

use super::config::Config;
use super::models::{Handle, Manager, Mode, WindowHandle};
use super::DisplayEvent;
