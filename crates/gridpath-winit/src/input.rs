//! Translates winit input events into gridpath [`Msg`] values.

use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{Key as WKey, NamedKey};

use gridpath_core::{Key, Msg};

pub(crate) fn translate_keyboard(event: &KeyEvent) -> Option<Msg> {
    // Only key-down (pressed) events.
    if event.state != ElementState::Pressed || event.repeat {
        return None;
    }

    let key = match &event.logical_key {
        WKey::Named(NamedKey::Escape) => Key::Escape,
        WKey::Named(NamedKey::Enter) => Key::Enter,
        WKey::Named(NamedKey::Space) => Key::Space,
        WKey::Character(s) => {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Key::Char(c),
                _ => return None,
            }
        }
        _ => return None,
    };

    Some(Msg::KeyDown(key))
}
