//! Window Information
#![allow(clippy::module_name_repetitions)]

use std::fmt::Debug;

/// A trait which backend specific window handles need to implement
pub trait Handle: Debug + Clone + Copy + PartialEq + Eq + Default + 'static {}

/// A Backend-agnostic handle to a window used to identify it.
///
/// A handle is only an identifier. It owns nothing and the window behind it may be gone by the
/// time it is used; only the display server can tell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowHandle<H>(pub H)
where
    H: Handle;

/// Handle for testing purposes
pub type MockHandle = i32;
impl Handle for MockHandle {}
