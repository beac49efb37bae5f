//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Which page is on screen (needed for context-aware event mapping)
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum PageKind {
    #[default]
    Grid,
    Detail,
}

/// Input mode
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Typing into the search box
    Search,
}

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    // Search box
    StartSearch,
    StopSearch,
    SearchChar(char),
    SearchBackspace,

    // Region selector
    CycleRegion,
    ClearRegion,

    // Grid
    /// Move the grid cursor by this many cards
    MoveSelection(isize),
    OpenSelected,
    Reload,

    // Detail
    PrevBorder,
    NextBorder,
    OpenBorder,
    Back,

    ToggleTheme,

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Convert a key event to a UiEvent based on current UI context.
/// `columns` is the number of cards per grid row as last laid out.
pub fn key_to_ui_event(
    key: KeyEvent,
    page: PageKind,
    input_mode: InputMode,
    show_help: bool,
    columns: usize,
) -> Option<UiEvent> {
    use crossterm::event::KeyEventKind;

    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(UiEvent::Quit);
    }

    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    match page {
        PageKind::Grid => handle_grid_keys(key, input_mode, columns),
        PageKind::Detail => handle_detail_keys(key),
    }
}

/// Handle keys on the grid page
fn handle_grid_keys(key: KeyEvent, input_mode: InputMode, columns: usize) -> Option<UiEvent> {
    let row = columns.max(1) as isize;
    match input_mode {
        InputMode::Normal => match key.code {
            KeyCode::Char('q') => Some(UiEvent::Quit),
            KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
            KeyCode::Char('/') => Some(UiEvent::StartSearch),
            KeyCode::Char('r') => Some(UiEvent::CycleRegion),
            KeyCode::Char('c') => Some(UiEvent::ClearRegion),
            KeyCode::Char('t') => Some(UiEvent::ToggleTheme),
            KeyCode::F(5) => Some(UiEvent::Reload),
            KeyCode::Left | KeyCode::Char('h') => Some(UiEvent::MoveSelection(-1)),
            KeyCode::Right | KeyCode::Char('l') => Some(UiEvent::MoveSelection(1)),
            KeyCode::Up | KeyCode::Char('k') => Some(UiEvent::MoveSelection(-row)),
            KeyCode::Down | KeyCode::Char('j') => Some(UiEvent::MoveSelection(row)),
            KeyCode::Enter => Some(UiEvent::OpenSelected),
            _ => None,
        },
        InputMode::Search => match key.code {
            KeyCode::Esc | KeyCode::Enter => Some(UiEvent::StopSearch),
            KeyCode::Backspace => Some(UiEvent::SearchBackspace),
            KeyCode::Char(c) => Some(UiEvent::SearchChar(c)),
            _ => None,
        },
    }
}

/// Handle keys on the detail page
fn handle_detail_keys(key: KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Char('q') => Some(UiEvent::Quit),
        KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
        KeyCode::Char('t') => Some(UiEvent::ToggleTheme),
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => Some(UiEvent::Back),
        KeyCode::Left | KeyCode::Char('h') => Some(UiEvent::PrevBorder),
        KeyCode::Right | KeyCode::Char('l') => Some(UiEvent::NextBorder),
        KeyCode::Enter => Some(UiEvent::OpenBorder),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_vertical_moves_span_a_row() {
        let down = key_to_ui_event(press(KeyCode::Down), PageKind::Grid, InputMode::Normal, false, 4);
        assert_eq!(down, Some(UiEvent::MoveSelection(4)));
        let up = key_to_ui_event(press(KeyCode::Char('k')), PageKind::Grid, InputMode::Normal, false, 0);
        assert_eq!(up, Some(UiEvent::MoveSelection(-1)));
    }

    #[test]
    fn test_search_mode_captures_letters() {
        let q = key_to_ui_event(press(KeyCode::Char('q')), PageKind::Grid, InputMode::Search, false, 4);
        assert_eq!(q, Some(UiEvent::SearchChar('q')));
    }

    #[test]
    fn test_detail_back_and_help_dismissal() {
        let back = key_to_ui_event(press(KeyCode::Esc), PageKind::Detail, InputMode::Normal, false, 4);
        assert_eq!(back, Some(UiEvent::Back));
        let any = key_to_ui_event(press(KeyCode::Char('x')), PageKind::Detail, InputMode::Normal, true, 4);
        assert_eq!(any, Some(UiEvent::CloseHelp));
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(
            key_to_ui_event(key, PageKind::Grid, InputMode::Search, false, 4),
            Some(UiEvent::Quit)
        );
    }
}
