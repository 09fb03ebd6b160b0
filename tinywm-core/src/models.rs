//! Objects (such as window handles and drag anchors) used by tinywm.
mod manager;
mod mode;
mod window;
mod xyhw;

pub use manager::Manager;
pub use mode::{DragAnchor, Mode};
pub use window::Handle;
pub use window::MockHandle;
pub use window::WindowHandle;
pub use xyhw::{Xyhw, XyhwBuilder, MIN_SIZE};
