//! Backend agnostic core of tinywm: input grabs, the drag state machine and the event loop.
// We deny clippy pedantic lints, primarily to keep code as correct as possible.
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
pub mod config;
mod display_action;
mod display_event;
pub mod display_servers;
pub mod errors;
mod event_loop;
mod handlers;
pub mod models;
pub mod state;
pub mod utils;

pub use config::Config;
pub use display_action::DisplayAction;
pub use display_event::DisplayEvent;
pub use display_servers::DisplayServer;
pub use errors::{Result, TinyError};
pub use models::Manager;
pub use models::Mode;
pub use state::State;
