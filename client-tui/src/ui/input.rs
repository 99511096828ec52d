use crate::state::{ClientAction, ClientState, CursorDirection};
use crate::ui::layout::AppLayout;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

pub fn action_for_key(key: KeyEvent) -> Option<ClientAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(ClientAction::Quit),
            _ => None,
        };
    }

    let action = match key.code {
        KeyCode::Char(c @ '1'..='9') => {
            ClientAction::Play(c.to_digit(10).map_or(0, |d| d as usize - 1))
        }
        KeyCode::Up | KeyCode::Char('k') => ClientAction::MoveCursor(CursorDirection::Up),
        KeyCode::Down | KeyCode::Char('j') => ClientAction::MoveCursor(CursorDirection::Down),
        KeyCode::Left | KeyCode::Char('h') => ClientAction::MoveCursor(CursorDirection::Left),
        KeyCode::Right | KeyCode::Char('l') => ClientAction::MoveCursor(CursorDirection::Right),
        KeyCode::Enter | KeyCode::Char(' ') => ClientAction::PlayAtCursor,
        KeyCode::PageUp | KeyCode::Char('[') => ClientAction::StepBack,
        KeyCode::PageDown | KeyCode::Char(']') => ClientAction::StepForward,
        KeyCode::Home => ClientAction::JumpToStart,
        KeyCode::End => ClientAction::JumpToLatest,
        KeyCode::Char('o') => ClientAction::ToggleOrder,
        KeyCode::Char('t') => ClientAction::ToggleTheme,
        KeyCode::Char('n') => ClientAction::NewGame,
        KeyCode::Char('q') | KeyCode::Esc => ClientAction::Quit,
        _ => return None,
    };
    Some(action)
}

/// Only left-button presses act; the target comes from the frame's layout.
pub fn action_for_mouse(
    mouse: MouseEvent,
    layout: &AppLayout,
    state: &ClientState,
) -> Option<ClientAction> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            layout.action_at(state, mouse.column, mouse.row)
        }
        _ => None,
    }
}
