use crate::XlibWindowHandle;

use tinywm_core::models::WindowHandle;
use tinywm_core::utils::modmask_lookup::Button;
use tinywm_core::DisplayEvent;
use x11_dl::xlib;

pub struct XEvent(pub xlib::XEvent);

impl From<XEvent> for Option<DisplayEvent<XlibWindowHandle>> {
    fn from(x_event: XEvent) -> Self {
        let raw_event = x_event.0;

        match raw_event.get_type() {
            // Raise key pressed.
            xlib::KeyPress => Some(from_key_press(raw_event)),
            // Mouse button pressed.
            xlib::ButtonPress => from_button_press(raw_event),
            // Mouse button released.
            xlib::ButtonRelease => Some(from_button_release(raw_event)),
            // Mouse motion notify.
            xlib::MotionNotify => Some(from_motion_notify(raw_event)),
            _other => None,
        }
    }
}

fn handle(window: xlib::Window) -> WindowHandle<XlibWindowHandle> {
    WindowHandle(XlibWindowHandle(window))
}

// The grabs are on the root, so the child under the cursor is reported as the subwindow. `None`
// (0) means the pointer is over the root itself.
fn subwindow_handle(subwindow: xlib::Window) -> Option<WindowHandle<XlibWindowHandle>> {
    (subwindow != 0).then(|| handle(subwindow))
}

fn from_key_press(raw_event: xlib::XEvent) -> DisplayEvent<XlibWindowHandle> {
    let event = xlib::XKeyEvent::from(raw_event);
    DisplayEvent::KeyPress {
        window: handle(event.window),
        subwindow: subwindow_handle(event.subwindow),
        x_root: event.x_root,
        y_root: event.y_root,
    }
}

fn from_button_press(raw_event: xlib::XEvent) -> Option<DisplayEvent<XlibWindowHandle>> {
    let event = xlib::XButtonPressedEvent::from(raw_event);
    let button = Button::from_index(event.button)?;
    Some(DisplayEvent::ButtonPress {
        window: handle(event.window),
        subwindow: subwindow_handle(event.subwindow),
        x_root: event.x_root,
        y_root: event.y_root,
        button,
    })
}

fn from_button_release(raw_event: xlib::XEvent) -> DisplayEvent<XlibWindowHandle> {
    let event = xlib::XButtonReleasedEvent::from(raw_event);
    DisplayEvent::ButtonRelease {
        window: handle(event.window),
        subwindow: subwindow_handle(event.subwindow),
        x_root: event.x_root,
        y_root: event.y_root,
    }
}

fn from_motion_notify(raw_event: xlib::XEvent) -> DisplayEvent<XlibWindowHandle> {
    let event = xlib::XMotionEvent::from(raw_event);
    DisplayEvent::Motion {
        window: handle(event.window),
        subwindow: subwindow_handle(event.subwindow),
        x_root: event.x_root,
        y_root: event.y_root,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn button_event(type_: i32, button: u32, subwindow: xlib::Window) -> xlib::XEvent {
        let mut event: xlib::XButtonEvent = unsafe { std::mem::zeroed() };
        event.type_ = type_;
        event.window = 1;
        event.subwindow = subwindow;
        event.x_root = 130;
        event.y_root = 90;
        event.button = button;
        event.into()
    }

    #[test]
    fn button_press_over_a_window_keeps_the_subwindow() {
        let event: Option<DisplayEvent<XlibWindowHandle>> =
            XEvent(button_event(xlib::ButtonPress, 3, 42)).into();
        assert_eq!(
            event,
            Some(DisplayEvent::ButtonPress {
                window: handle(1),
                subwindow: Some(handle(42)),
                x_root: 130,
                y_root: 90,
                button: Button::Button3,
            })
        );
    }

    #[test]
    fn subwindow_zero_means_the_background() {
        let event: Option<DisplayEvent<XlibWindowHandle>> =
            XEvent(button_event(xlib::ButtonRelease, 1, 0)).into();
        assert!(matches!(
            event,
            Some(DisplayEvent::ButtonRelease {
                subwindow: None,
                ..
            })
        ));
    }

    #[test]
    fn unknown_buttons_are_dropped() {
        let event: Option<DisplayEvent<XlibWindowHandle>> =
            XEvent(button_event(xlib::ButtonPress, 9, 42)).into();
        assert_eq!(event, None);
    }

    #[test]
    fn motion_carries_root_coordinates() {
        let mut motion: xlib::XMotionEvent = unsafe { std::mem::zeroed() };
        motion.type_ = xlib::MotionNotify;
        motion.window = 1;
        motion.subwindow = 42;
        motion.x_root = -5;
        motion.y_root = 2000;
        let event: Option<DisplayEvent<XlibWindowHandle>> = XEvent(motion.into()).into();
        assert_eq!(
            event,
            Some(DisplayEvent::Motion {
                window: handle(1),
                subwindow: Some(handle(42)),
                x_root: -5,
                y_root: 2000,
            })
        );
    }

    #[test]
    fn other_events_are_ignored() {
        let mut map: xlib::XMapRequestEvent = unsafe { std::mem::zeroed() };
        map.type_ = xlib::MapRequest;
        let event: Option<DisplayEvent<XlibWindowHandle>> = XEvent(map.into()).into();
        assert_eq!(event, None);
    }
}
