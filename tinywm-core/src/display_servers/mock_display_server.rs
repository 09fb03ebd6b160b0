use super::DisplayServer;
use crate::display_action::DisplayAction;
use crate::models::{Handle, WindowHandle, Xyhw};
use crate::utils::modmask_lookup::{Button, ModMask, XKeysym};
use crate::DisplayEvent;
use std::collections::VecDeque;

pub const F1_KEYSYM: XKeysym = 0xffbe;

/// A scripted display server. Events are handed out in order, commands are recorded.
#[derive(Clone, Debug)]
pub struct MockDisplayServer<H: Handle> {
    pub root: WindowHandle<H>,
    pub events: VecDeque<DisplayEvent<H>>,
    pub keysyms: Vec<(String, XKeysym)>,
    pub key_grabs: Vec<(XKeysym, ModMask)>,
    pub button_grabs: Vec<(Button, ModMask)>,
    pub geometries: Vec<(WindowHandle<H>, Xyhw)>,
    pub actions: Vec<DisplayAction<H>>,
}

impl<H: Handle> MockDisplayServer<H> {
    pub fn new() -> Self {
        Self {
            root: WindowHandle(H::default()),
            events: VecDeque::new(),
            keysyms: vec![("F1".to_owned(), F1_KEYSYM)],
            key_grabs: vec![],
            button_grabs: vec![],
            geometries: vec![],
            actions: vec![],
        }
    }

    pub fn with_events(mut self, events: impl IntoIterator<Item = DisplayEvent<H>>) -> Self {
        self.events.extend(events);
        self
    }

    pub fn with_window(mut self, handle: WindowHandle<H>, xyhw: Xyhw) -> Self {
        self.geometries.push((handle, xyhw));
        self
    }

    /// The window is gone: geometry queries fail from now on.
    pub fn destroy_window(&mut self, handle: WindowHandle<H>) {
        self.geometries.retain(|(h, _)| *h != handle);
    }
}

impl<H: Handle> DisplayServer<H> for MockDisplayServer<H> {
    fn root(&self) -> WindowHandle<H> {
        self.root
    }

    fn resolve_key(&self, name: &str) -> Option<XKeysym> {
        self.keysyms
            .iter()
            .find(|(known, _)| known == name)
            .map(|(_, keysym)| *keysym)
    }

    fn grab_key(&mut self, keysym: XKeysym, modmask: &ModMask) {
        self.key_grabs.push((keysym, *modmask));
    }

    fn grab_button(&mut self, button: Button, modmask: &ModMask) {
        self.button_grabs.push((button, *modmask));
    }

    fn next_event(&mut self) -> Option<DisplayEvent<H>> {
        self.events.pop_front()
    }

    fn next_motion(&mut self) -> Option<(i32, i32)> {
        let mut latest = None;
        while let Some(DisplayEvent::Motion { x_root, y_root, .. }) = self.events.front() {
            latest = Some((*x_root, *y_root));
            self.events.pop_front();
        }
        latest
    }

    fn query_geometry(&self, handle: WindowHandle<H>) -> Option<Xyhw> {
        self.geometries
            .iter()
            .find(|(h, _)| *h == handle)
            .map(|(_, xyhw)| *xyhw)
    }

    fn execute_action(&mut self, act: DisplayAction<H>) {
        self.actions.push(act);
    }

    fn flush(&self) {}
}
