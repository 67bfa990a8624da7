use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::game::Direction;

/// What a terminal event asks the game to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Step the cursor one cell
    MoveCursor(Direction),
    /// Pointer moved to a screen position
    PointAt { column: u16, row: u16 },
    /// Pointer pressed at a screen position: move the cursor there and bet
    PlaceAt { column: u16, row: u16 },
    /// Bet on the cell under the cursor
    PlaceAtCursor,
    ToggleMode,
    /// Terminal size changed
    Resize { width: u16, height: u16 },
    Quit,
    None,
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_event(&self, event: &Event) -> InputAction {
        match event {
            // Only process key press events, not release
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(*key),
            Event::Mouse(mouse) => self.handle_mouse_event(*mouse),
            Event::Resize(width, height) => InputAction::Resize {
                width: *width,
                height: *height,
            },
            _ => InputAction::None,
        }
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> InputAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return InputAction::Quit;
        }

        match key.code {
            // Cursor - Arrow keys
            KeyCode::Up => InputAction::MoveCursor(Direction::Up),
            KeyCode::Down => InputAction::MoveCursor(Direction::Down),
            KeyCode::Left => InputAction::MoveCursor(Direction::Left),
            KeyCode::Right => InputAction::MoveCursor(Direction::Right),

            // Cursor - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => InputAction::MoveCursor(Direction::Up),
            KeyCode::Char('s') | KeyCode::Char('S') => InputAction::MoveCursor(Direction::Down),
            KeyCode::Char('a') | KeyCode::Char('A') => InputAction::MoveCursor(Direction::Left),
            KeyCode::Char('d') | KeyCode::Char('D') => InputAction::MoveCursor(Direction::Right),

            // Controls
            KeyCode::Char(' ') | KeyCode::Enter => InputAction::PlaceAtCursor,
            KeyCode::Char('m') | KeyCode::Char('M') => InputAction::ToggleMode,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => InputAction::Quit,

            _ => InputAction::None,
        }
    }

    pub fn handle_mouse_event(&self, mouse: MouseEvent) -> InputAction {
        let (column, row) = (mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => InputAction::PlaceAt { column, row },
            MouseEventKind::Moved | MouseEventKind::Drag(_) => InputAction::PointAt { column, row },
            _ => InputAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
