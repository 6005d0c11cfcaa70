use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Everything the user can ask the board to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    NextLocation,
    PrevLocation,
    SelectLocation(usize),
    NextReminder,
    RecitationUp,
    RecitationDown,
    OpenPlayer,
    ClosePlayer,
    ToggleHelp,
    Quit,
}

/// Which key table applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Board,
    Help,
    Player,
}

const BOARD_KEYS: &[(KeyCode, Action)] = &[
    (KeyCode::Tab, Action::NextLocation),
    (KeyCode::Char('l'), Action::NextLocation),
    (KeyCode::Right, Action::NextLocation),
    (KeyCode::BackTab, Action::PrevLocation),
    (KeyCode::Char('h'), Action::PrevLocation),
    (KeyCode::Left, Action::PrevLocation),
    (KeyCode::Char('n'), Action::NextReminder),
    (KeyCode::Up, Action::RecitationUp),
    (KeyCode::Char('k'), Action::RecitationUp),
    (KeyCode::Down, Action::RecitationDown),
    (KeyCode::Char('j'), Action::RecitationDown),
    (KeyCode::Enter, Action::OpenPlayer),
    (KeyCode::Char('p'), Action::OpenPlayer),
    (KeyCode::Char('?'), Action::ToggleHelp),
    (KeyCode::Char('q'), Action::Quit),
    (KeyCode::Esc, Action::Quit),
];

const HELP_KEYS: &[(KeyCode, Action)] = &[
    (KeyCode::Char('?'), Action::ToggleHelp),
    (KeyCode::Esc, Action::ToggleHelp),
    (KeyCode::Char('q'), Action::Quit),
];

const PLAYER_KEYS: &[(KeyCode, Action)] = &[
    (KeyCode::Esc, Action::ClosePlayer),
    (KeyCode::Char('x'), Action::ClosePlayer),
    (KeyCode::Char('q'), Action::ClosePlayer),
];

fn table(mode: Mode) -> &'static [(KeyCode, Action)] {
    match mode {
        Mode::Board => BOARD_KEYS,
        Mode::Help => HELP_KEYS,
        Mode::Player => PLAYER_KEYS,
    }
}

/// Look up the action bound to `key` in `mode`.
pub fn action_for_key(key: KeyEvent, mode: Mode) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    // Digits pick a location directly: 1 = first
    if mode == Mode::Board {
        if let KeyCode::Char(c @ '1'..='9') = key.code {
            return Some(Action::SelectLocation(c as usize - '1' as usize));
        }
    }

    table(mode)
        .iter()
        .find(|(code, _)| *code == key.code)
        .map(|(_, action)| *action)
}

/// Key hints for the help overlay, in display order.
pub const HELP: &[(&str, &str)] = &[
    ("[Tab] / [l]", "Next location"),
    ("[S-Tab] / [h]", "Previous location"),
    ("[1-9]", "Jump to location"),
    ("[n]", "Next reminder"),
    ("[↑ ↓]", "Select recitation"),
    ("[Enter] / [p]", "Open player"),
    ("[Esc] / [x]", "Close player"),
    ("[?]", "Toggle help"),
    ("[q] / [Esc]", "Quit"),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_board_keys() {
        assert_eq!(
            action_for_key(key(KeyCode::Tab), Mode::Board),
            Some(Action::NextLocation)
        );
        assert_eq!(
            action_for_key(key(KeyCode::BackTab), Mode::Board),
            Some(Action::PrevLocation)
        );
        assert_eq!(
            action_for_key(key(KeyCode::Char('n')), Mode::Board),
            Some(Action::NextReminder)
        );
        assert_eq!(
            action_for_key(key(KeyCode::Enter), Mode::Board),
            Some(Action::OpenPlayer)
        );
        assert_eq!(action_for_key(key(KeyCode::Char('z')), Mode::Board), None);
    }

    #[test]
    fn test_digits_select_location() {
        assert_eq!(
            action_for_key(key(KeyCode::Char('1')), Mode::Board),
            Some(Action::SelectLocation(0))
        );
        assert_eq!(
            action_for_key(key(KeyCode::Char('9')), Mode::Board),
            Some(Action::SelectLocation(8))
        );
        assert_eq!(action_for_key(key(KeyCode::Char('0')), Mode::Board), None);
        assert_eq!(action_for_key(key(KeyCode::Char('2')), Mode::Player), None);
    }

    #[test]
    fn test_escape_depends_on_mode() {
        assert_eq!(
            action_for_key(key(KeyCode::Esc), Mode::Board),
            Some(Action::Quit)
        );
        assert_eq!(
            action_for_key(key(KeyCode::Esc), Mode::Player),
            Some(Action::ClosePlayer)
        );
        assert_eq!(
            action_for_key(key(KeyCode::Esc), Mode::Help),
            Some(Action::ToggleHelp)
        );
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        for mode in [Mode::Board, Mode::Help, Mode::Player] {
            assert_eq!(action_for_key(ctrl_c, mode), Some(Action::Quit));
        }
    }
}
