use bitflags::bitflags;

/// A keysym as understood by the display server.
pub type XKeysym = u32;

bitflags! {
    /// Represents the state of modifier keys, laid out like the X core protocol key masks.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct ModMask: u16 {
        /// Used as the zero value
        const Zero = 0;
        const Shift = 1;
        const Lock = 1 << 1;
        const Control = 1 << 2;
        /// Mod1
        const Alt = 1 << 3;
        /// Mod2
        const NumLock = 1 << 4;
        const Mod3 = 1 << 5;
        /// Mod4
        const Super = 1 << 6;
        const Mod5 = 1 << 7;
        /// Matches any combination of modifiers.
        const Any = 1 << 15;
    }
}

/// A pointer button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Button {
    /// Main button (left click for right-handed)
    Button1,
    /// Middle button (pressing the scroll wheel)
    Button2,
    /// Secondary button (right click for right-handed)
    Button3,
    /// Scroll wheel up
    Button4,
    /// Scroll wheel down
    Button5,
}

impl Button {
    /// The protocol level button number.
    pub const fn index(self) -> u32 {
        match self {
            Self::Button1 => 1,
            Self::Button2 => 2,
            Self::Button3 => 3,
            Self::Button4 => 4,
            Self::Button5 => 5,
        }
    }

    pub const fn from_index(index: u32) -> Option<Self> {
        match index {
            1 => Some(Self::Button1),
            2 => Some(Self::Button2),
            3 => Some(Self::Button3),
            4 => Some(Self::Button4),
            5 => Some(Self::Button5),
            _ => None,
        }
    }
}

#[must_use]
pub fn into_modmask(keys: &[String]) -> ModMask {
    let mut mask = ModMask::Zero;
    for s in keys {
        mask |= into_mod(s);
    }
    if mask.contains(ModMask::Any) {
        return ModMask::Any;
    }
    // clean the mask
    mask.intersection(
        ModMask::Shift
            | ModMask::Control
            | ModMask::Alt
            | ModMask::Mod3
            | ModMask::Super
            | ModMask::Mod5,
    )
}

#[must_use]
pub fn into_mod(key: &str) -> ModMask {
    match key {
        "None" => ModMask::Any,
        "Shift" => ModMask::Shift,
        "Control" => ModMask::Control,
        "Mod1" | "Alt" => ModMask::Alt,
        // NOTE: we are ignoring the state of Numlock
        // this is left here as a reminder
        // "Mod2" | "NumLock" => ModMask::NumLock,
        "Mod3" => ModMask::Mod3,
        "Mod4" | "Super" => ModMask::Super,
        "Mod5" => ModMask::Mod5,
        _ => ModMask::Zero,
    }
}
