//! Keymap of the NEC IR remote used to drive the menu

use crate::event::Event;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RemoteKey {
    Ok,

    Up,
    Down,
    Left,
    Right,

    Home,
    Back,
    Menu,

    Unknown,
}

/// `data` is a received NEC frame: '0xAAAADDNN' (address, data, inverse data)
pub fn translate(data: u32) -> RemoteKey {
    match data >> 8 {
        0x807F88 => RemoteKey::Home,
        0x807F98 => RemoteKey::Back,
        0x807F32 => RemoteKey::Menu,

        0x807FC8 => RemoteKey::Ok,

        0x807F68 => RemoteKey::Up,
        0x807F58 => RemoteKey::Down,
        0x807F8A => RemoteKey::Left,
        0x807F0A => RemoteKey::Right,

        _ => RemoteKey::Unknown,
    }
}

impl RemoteKey {
    /// The menu event of the key, `None` for keys the menu does not use.
    pub fn event(self) -> Option<Event> {
        match self {
            RemoteKey::Ok => Some(Event::Enter),
            RemoteKey::Up => Some(Event::Up),
            RemoteKey::Down => Some(Event::Down),
            RemoteKey::Left | RemoteKey::Back => Some(Event::Left),
            RemoteKey::Right => Some(Event::Right),
            RemoteKey::Home | RemoteKey::Menu | RemoteKey::Unknown => None,
        }
    }
}
