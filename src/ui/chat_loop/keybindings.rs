use std::sync::Arc;

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use tui_textarea::Input as TAInput;

use super::ChatScreen;

const MOUSE_SCROLL_LINES: u16 = 3;

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Continue,
    Submit,
    Quit,
}

pub fn handle_key(screen: &mut ChatScreen, key: KeyEvent) -> KeyAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let page = screen.viewport.height.max(1);
    let max_offset = screen.viewport.max_offset;
    let log = Arc::clone(screen.log());

    match key.code {
        KeyCode::Char('c') if ctrl => KeyAction::Quit,
        KeyCode::Esc => KeyAction::Quit,
        KeyCode::Enter => KeyAction::Submit,
        KeyCode::Up => {
            log.scroll_up(1, max_offset);
            KeyAction::Continue
        }
        KeyCode::Down => {
            log.scroll_down(1, max_offset);
            KeyAction::Continue
        }
        KeyCode::PageUp => {
            log.scroll_up(page, max_offset);
            KeyAction::Continue
        }
        KeyCode::PageDown => {
            log.scroll_down(page, max_offset);
            KeyAction::Continue
        }
        KeyCode::Home if ctrl => {
            log.scroll_to_top();
            KeyAction::Continue
        }
        KeyCode::End if ctrl => {
            log.pin_to_bottom();
            KeyAction::Continue
        }
        // Newline-producing chords would break the single-line box.
        KeyCode::Char('j') | KeyCode::Char('m') if ctrl => KeyAction::Continue,
        _ => {
            screen.input_mut().input(TAInput::from(key));
            KeyAction::Continue
        }
    }
}

pub fn handle_mouse(screen: &mut ChatScreen, mouse: MouseEvent) {
    let max_offset = screen.viewport.max_offset;
    match mouse.kind {
        MouseEventKind::ScrollUp => screen.log().scroll_up(MOUSE_SCROLL_LINES, max_offset),
        MouseEventKind::ScrollDown => screen.log().scroll_down(MOUSE_SCROLL_LINES, max_offset),
        _ => {}
    }
}
