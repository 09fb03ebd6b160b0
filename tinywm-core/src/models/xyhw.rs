//! Window geometry.
#![allow(clippy::module_name_repetitions)]
use std::cmp;

/// Smallest width or height a window may be given. Zero is a protocol error and a negative size
/// wraps around to a huge unsigned one.
pub const MIN_SIZE: i32 = 1;

const MAX_SIZE: i32 = 999_999_999;

/// Window placement and size. x,y from top left; width and height never drop below `MIN_SIZE`.
#[derive(Clone, Debug, PartialEq, Eq, Copy)]
pub struct Xyhw {
    x: i32,
    y: i32,
    h: i32,
    w: i32,
    maxw: i32,
    maxh: i32,
}

/// Modifiable struct that can be used to generate an Xyhw struct.
#[derive(Clone, Debug, PartialEq, Eq, Copy)]
pub struct XyhwBuilder {
    pub x: i32,
    pub y: i32,
    pub h: i32,
    pub w: i32,
    pub maxw: i32,
    pub maxh: i32,
}

impl Default for XyhwBuilder {
    fn default() -> Self {
        Self {
            x: 0,
            y: 0,
            w: MIN_SIZE,
            h: MIN_SIZE,
            maxw: MAX_SIZE,
            maxh: MAX_SIZE,
        }
    }
}

impl Default for Xyhw {
    fn default() -> Self {
        XyhwBuilder::default().into()
    }
}

impl From<XyhwBuilder> for Xyhw {
    fn from(xywh: XyhwBuilder) -> Self {
        let mut b = Self {
            x: xywh.x,
            y: xywh.y,
            w: xywh.w,
            h: xywh.h,
            maxw: xywh.maxw,
            maxh: xywh.maxh,
        };
        b.update_limits();
        b
    }
}

impl Xyhw {
    #[must_use]
    pub const fn x(&self) -> i32 {
        self.x
    }
    #[must_use]
    pub const fn y(&self) -> i32 {
        self.y
    }
    #[must_use]
    pub const fn h(&self) -> i32 {
        self.h
    }
    #[must_use]
    pub const fn w(&self) -> i32 {
        self.w
    }

    pub fn set_x(&mut self, value: i32) {
        self.x = value;
    }
    pub fn set_y(&mut self, value: i32) {
        self.y = value;
    }
    pub fn set_h(&mut self, value: i32) {
        self.h = value;
        self.update_limits();
    }
    pub fn set_w(&mut self, value: i32) {
        self.w = value;
        self.update_limits();
    }

    fn update_limits(&mut self) {
        self.w = cmp::max(MIN_SIZE, cmp::min(self.w, self.maxw));
        self.h = cmp::max(MIN_SIZE, cmp::min(self.h, self.maxh));
    }

    /// The same window shifted by `(offset_x, offset_y)`. Size is untouched.
    #[must_use]
    pub fn moved_by(&self, offset_x: i32, offset_y: i32) -> Self {
        let mut moved = *self;
        moved.set_x(self.x.saturating_add(offset_x));
        moved.set_y(self.y.saturating_add(offset_y));
        moved
    }

    /// The same window grown by `(offset_w, offset_h)`, anchored at its top left corner.
    #[must_use]
    pub fn resized_by(&self, offset_w: i32, offset_h: i32) -> Self {
        let mut resized = *self;
        resized.set_w(self.w.saturating_add(offset_w));
        resized.set_h(self.h.saturating_add(offset_h));
        resized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchor() -> Xyhw {
        XyhwBuilder {
            x: 10,
            y: 10,
            w: 200,
            h: 150,
            ..XyhwBuilder::default()
        }
        .into()
    }

    #[test]
    fn building_with_a_zero_or_negative_size_is_floored() {
        let xyhw: Xyhw = XyhwBuilder {
            w: 0,
            h: -40,
            ..XyhwBuilder::default()
        }
        .into();
        assert_eq!((xyhw.w(), xyhw.h()), (MIN_SIZE, MIN_SIZE));
    }

    #[test]
    fn moving_keeps_the_size() {
        let moved = anchor().moved_by(30, -10);
        assert_eq!((moved.x(), moved.y(), moved.w(), moved.h()), (40, 0, 200, 150));
    }

    #[test]
    fn resizing_keeps_the_position() {
        let resized = anchor().resized_by(-50, -50);
        assert_eq!(
            (resized.x(), resized.y(), resized.w(), resized.h()),
            (10, 10, 150, 100)
        );
    }

    #[test]
    fn resizing_never_goes_below_one_pixel() {
        for offset in [-199, -200, -201, -10_000, i32::MIN + 1, i32::MIN] {
            let resized = anchor().resized_by(offset, offset);
            assert!(resized.w() >= MIN_SIZE, "width {} for {offset}", resized.w());
            assert!(resized.h() >= MIN_SIZE, "height {} for {offset}", resized.h());
        }
        assert_eq!(anchor().resized_by(-200, -150).w(), 1);
        assert_eq!(anchor().resized_by(-200, -150).h(), 1);
    }

    #[test]
    fn large_offsets_saturate_instead_of_overflowing() {
        let moved = anchor().moved_by(i32::MAX, i32::MIN);
        assert_eq!((moved.x(), moved.y()), (i32::MAX, i32::MIN + 10));
        let resized = anchor().resized_by(i32::MAX, i32::MAX);
        assert_eq!((resized.w(), resized.h()), (MAX_SIZE, MAX_SIZE));
    }
}
