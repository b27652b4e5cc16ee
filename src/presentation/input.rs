use crate::application::App;
use crate::domain::NavDirection;
use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

pub struct InputHandler;

impl InputHandler {
    /// Routes a key press to the editor or the grid-level handler.
    ///
    /// Grid-level keys (navigation, Enter-to-edit) are active only while no
    /// cell is being edited.
    pub fn handle_key_event(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        if app.is_editing() {
            Self::handle_editing_mode(app, key);
        } else {
            Self::handle_normal_mode(app, key, modifiers);
        }
    }

    fn handle_normal_mode(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        app.status_message = None;

        if let Some(direction) = Self::nav_direction(key) {
            let is_multi_focus = modifiers.contains(KeyModifiers::SHIFT);
            app.navigate(is_multi_focus, direction);
            return;
        }

        if key == KeyCode::Enter {
            app.start_editing();
        }
    }

    fn handle_editing_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Esc => {
                app.end_editing();
            }
            // Up/Down leave the editor entirely: focus moves to another
            // cell's model, not the caret within the field.
            KeyCode::Up => {
                app.end_editing_and_navigate(NavDirection::Up);
            }
            KeyCode::Down => {
                app.end_editing_and_navigate(NavDirection::Down);
            }
            KeyCode::Backspace => {
                app.delete_backward();
            }
            KeyCode::Delete => {
                app.delete_forward();
            }
            KeyCode::Left => {
                app.cursor_left();
            }
            KeyCode::Right => {
                app.cursor_right();
            }
            KeyCode::Home => {
                app.cursor_home();
            }
            KeyCode::End => {
                app.cursor_end();
            }
            KeyCode::Char(c) => {
                app.insert_char(c);
            }
            _ => {}
        }
    }

    /// Handles a mouse event against the last rendered layout.
    ///
    /// A left press on a data cell focuses it (Shift requests multi-focus,
    /// which the focus model drops). A click never opens the editor; a click
    /// on the cell already under edit is left to the editor.
    pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
        if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
            return;
        }

        let Some(layout) = app.layout else {
            return;
        };
        let Some(cell) = layout.hit_test(
            mouse.column,
            mouse.row,
            app.config.row_count,
            app.config.column_count,
        ) else {
            return;
        };

        if app.editing == Some(cell) {
            return;
        }

        let is_multi_focus = mouse.modifiers.contains(KeyModifiers::SHIFT);
        app.focus_cell(cell, is_multi_focus);
    }

    fn nav_direction(key: KeyCode) -> Option<NavDirection> {
        match key {
            KeyCode::Up => Some(NavDirection::Up),
            KeyCode::Down => Some(NavDirection::Down),
            KeyCode::Left => Some(NavDirection::Left),
            KeyCode::Right => Some(NavDirection::Right),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{App, GridConfig, GridLayout};
    use crate::domain::{is_cell_focused, Coordinate};
    use crate::infrastructure::MemoryStore;

    fn test_app() -> App {
        let config = GridConfig {
            row_count: 5,
            column_count: 5,
            width: 80,
        };
        let mut app = App::new(config, Box::new(MemoryStore::new()));
        app.update_layout(GridLayout {
            data_x: 6,
            data_y: 3,
            cell_width: 7,
            spacing: 1,
            data_width: 39,
            data_height: 5,
        });
        app
    }

    fn left_click(column: u16, row: u16, modifiers: KeyModifiers) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers,
        }
    }

    #[test]
    fn test_arrows_do_nothing_before_first_click() {
        let mut app = test_app();
        InputHandler::handle_key_event(&mut app, KeyCode::Down, KeyModifiers::NONE);
        assert!(app.focus.regions.is_none());
    }

    #[test]
    fn test_enter_does_nothing_before_first_click() {
        let mut app = test_app();
        InputHandler::handle_key_event(&mut app, KeyCode::Enter, KeyModifiers::NONE);
        assert!(app.editing.is_none());
    }

    #[test]
    fn test_click_focuses_but_does_not_edit() {
        let mut app = test_app();
        InputHandler::handle_mouse_event(&mut app, left_click(6, 3, KeyModifiers::NONE));

        assert!(is_cell_focused(&app.focus, Coordinate::new(0, 0)));
        assert!(app.editing.is_none());
    }

    #[test]
    fn test_click_outside_data_cells_changes_nothing() {
        let mut app = test_app();
        InputHandler::handle_mouse_event(&mut app, left_click(0, 0, KeyModifiers::NONE));
        assert!(app.focus.regions.is_none());
    }

    #[test]
    fn test_enter_opens_editor_on_focused_cell() {
        let mut app = test_app();
        InputHandler::handle_mouse_event(&mut app, left_click(14, 4, KeyModifiers::NONE));
        InputHandler::handle_key_event(&mut app, KeyCode::Enter, KeyModifiers::NONE);

        assert_eq!(app.editing, Some(Coordinate::new(1, 1)));
    }

    #[test]
    fn test_typing_writes_value_through() {
        let mut app = test_app();
        app.focus_cell(Coordinate::new(1, 1), false);
        InputHandler::handle_key_event(&mut app, KeyCode::Enter, KeyModifiers::NONE);
        for c in "12.5".chars() {
            InputHandler::handle_key_event(&mut app, KeyCode::Char(c), KeyModifiers::NONE);
        }

        assert_eq!(app.grid.get(Coordinate::new(1, 1)), Some(12.5));
    }

    #[test]
    fn test_typing_non_ascii_does_not_panic() {
        let mut app = test_app();
        app.focus_cell(Coordinate::new(0, 0), false);
        InputHandler::handle_key_event(&mut app, KeyCode::Enter, KeyModifiers::NONE);

        InputHandler::handle_key_event(&mut app, KeyCode::Char('é'), KeyModifiers::NONE);
        InputHandler::handle_key_event(&mut app, KeyCode::Char('1'), KeyModifiers::NONE);
        InputHandler::handle_key_event(&mut app, KeyCode::Backspace, KeyModifiers::NONE);
        InputHandler::handle_key_event(&mut app, KeyCode::Backspace, KeyModifiers::NONE);

        assert!(app.input.is_empty());
        assert_eq!(app.grid.get(Coordinate::new(0, 0)), None);
    }

    #[test]
    fn test_enter_closes_editor() {
        let mut app = test_app();
        app.focus_cell(Coordinate::new(0, 0), false);
        InputHandler::handle_key_event(&mut app, KeyCode::Enter, KeyModifiers::NONE);
        assert!(app.is_editing());

        InputHandler::handle_key_event(&mut app, KeyCode::Enter, KeyModifiers::NONE);
        assert!(!app.is_editing());
    }

    #[test]
    fn test_esc_closes_editor() {
        let mut app = test_app();
        app.focus_cell(Coordinate::new(0, 0), false);
        InputHandler::handle_key_event(&mut app, KeyCode::Enter, KeyModifiers::NONE);

        InputHandler::handle_key_event(&mut app, KeyCode::Esc, KeyModifiers::NONE);
        assert!(!app.is_editing());
    }

    #[test]
    fn test_arrow_up_while_editing_navigates_away() {
        let mut app = test_app();
        app.focus_cell(Coordinate::new(2, 2), false);
        InputHandler::handle_key_event(&mut app, KeyCode::Enter, KeyModifiers::NONE);

        InputHandler::handle_key_event(&mut app, KeyCode::Up, KeyModifiers::NONE);

        assert!(!app.is_editing());
        assert!(is_cell_focused(&app.focus, Coordinate::new(1, 2)));
    }

    #[test]
    fn test_left_right_while_editing_move_caret_not_focus() {
        let mut app = test_app();
        app.focus_cell(Coordinate::new(2, 2), false);
        InputHandler::handle_key_event(&mut app, KeyCode::Enter, KeyModifiers::NONE);
        InputHandler::handle_key_event(&mut app, KeyCode::Char('1'), KeyModifiers::NONE);
        InputHandler::handle_key_event(&mut app, KeyCode::Left, KeyModifiers::NONE);

        assert!(app.is_editing());
        assert_eq!(app.cursor_position, 0);
        assert!(is_cell_focused(&app.focus, Coordinate::new(2, 2)));
    }

    #[test]
    fn test_shift_arrow_against_existing_focus_is_dropped() {
        let mut app = test_app();
        app.focus_cell(Coordinate::new(1, 1), false);
        InputHandler::handle_key_event(&mut app, KeyCode::Down, KeyModifiers::SHIFT);

        assert!(is_cell_focused(&app.focus, Coordinate::new(1, 1)));
    }

    #[test]
    fn test_click_on_other_cell_while_editing_refocuses() {
        let mut app = test_app();
        app.focus_cell(Coordinate::new(0, 0), false);
        InputHandler::handle_key_event(&mut app, KeyCode::Enter, KeyModifiers::NONE);

        InputHandler::handle_mouse_event(&mut app, left_click(14, 4, KeyModifiers::NONE));

        assert!(!app.is_editing());
        assert!(is_cell_focused(&app.focus, Coordinate::new(1, 1)));
    }

    #[test]
    fn test_click_on_edited_cell_is_left_to_editor() {
        let mut app = test_app();
        app.focus_cell(Coordinate::new(0, 0), false);
        InputHandler::handle_key_event(&mut app, KeyCode::Enter, KeyModifiers::NONE);

        InputHandler::handle_mouse_event(&mut app, left_click(6, 3, KeyModifiers::NONE));

        assert_eq!(app.editing, Some(Coordinate::new(0, 0)));
    }

    #[test]
    fn test_mouse_move_and_release_are_ignored() {
        let mut app = test_app();
        let moved = MouseEvent {
            kind: MouseEventKind::Moved,
            column: 6,
            row: 3,
            modifiers: KeyModifiers::NONE,
        };
        InputHandler::handle_mouse_event(&mut app, moved);
        assert!(app.focus.regions.is_none());
    }
}
