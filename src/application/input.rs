use std::{io, time::Duration};

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
};

/// Something the user asked the application to do.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    ToggleShading,
}

/// Map a key press to a command.
pub fn command_for_key(key: &KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Command::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Command::Quit)
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            Some(Command::ToggleShading)
        }
        _ => None,
    }
}

/// Read pending terminal events without blocking until one maps to a
/// command. Returns None once no events are pending.
///
/// Resize events are skipped. The application polls the terminal size
/// every frame instead.
pub fn next_command() -> io::Result<Option<Command>> {
    while event::poll(Duration::ZERO)? {
        if let Event::Key(key) = event::read()? {
            if let Some(command) = command_for_key(&key) {
                return Ok(Some(command));
            }
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEventState;

    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn q_quits_in_either_case() {
        for ch in ['q', 'Q'] {
            let key = press(KeyCode::Char(ch), KeyModifiers::NONE);
            assert_eq!(command_for_key(&key), Some(Command::Quit));
        }
    }

    #[test]
    fn ctrl_c_quits() {
        let key = press(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(command_for_key(&key), Some(Command::Quit));

        let plain_c = press(KeyCode::Char('c'), KeyModifiers::NONE);
        assert_eq!(command_for_key(&plain_c), None);
    }

    #[test]
    fn r_toggles_shading() {
        for ch in ['r', 'R'] {
            let key = press(KeyCode::Char(ch), KeyModifiers::SHIFT);
            assert_eq!(command_for_key(&key), Some(Command::ToggleShading));
        }
    }

    #[test]
    fn releases_and_other_keys_are_ignored() {
        let release = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(command_for_key(&release), None);
        assert_eq!(
            command_for_key(&press(KeyCode::Esc, KeyModifiers::NONE)),
            None
        );
        assert_eq!(
            command_for_key(&press(KeyCode::Char('x'), KeyModifiers::NONE)),
            None
        );
    }
}
