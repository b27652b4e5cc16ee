//! Application state management for the grid editor.
//!
//! The [`App`] owns the three pieces of widget state (grid data, focus
//! state, cell-being-edited) plus the injected store, and wires user
//! gestures into focus-model calls and grid mutations. Cell widgets hold no
//! state of their own; rendering reads everything from here.

use crate::domain::{
    format_cell_edit, navigate, parse_cell_input, primary_cell, set_focus, Coordinate, FocusState,
    Grid, NavDirection,
};
use crate::infrastructure::{GridRepository, KeyValueStore};

/// External configuration surface of the grid widget.
#[derive(Debug, Clone, Copy)]
pub struct GridConfig {
    /// Number of data rows.
    pub row_count: usize,
    /// Number of data columns.
    pub column_count: usize,
    /// Total rendered width in terminal columns, split evenly across the
    /// row-label column and the data columns.
    pub width: u16,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            row_count: 10,
            column_count: 10,
            width: 80,
        }
    }
}

/// Where the data cells landed on screen in the last render.
///
/// Recorded by the renderer and consumed by mouse hit-testing. Rows are one
/// terminal row tall; data columns are `cell_width` wide with `spacing`
/// blank columns between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    /// Screen x of the first data cell (after the row-label column).
    pub data_x: u16,
    /// Screen y of the first data row (below the column-label header).
    pub data_y: u16,
    pub cell_width: u16,
    pub spacing: u16,
    /// Rendered width of the data region. In a terminal too small for the
    /// whole table, columns past this are clipped and must not be hit.
    pub data_width: u16,
    /// Rendered height of the data region, in rows; rows past it are
    /// clipped and must not be hit.
    pub data_height: u16,
}

impl GridLayout {
    /// Maps a screen position to the data cell under it, if any.
    ///
    /// Positions over labels, borders, spacing gaps, clipped cells, or
    /// outside the grid resolve to `None`.
    pub fn hit_test(
        &self,
        x: u16,
        y: u16,
        row_count: usize,
        column_count: usize,
    ) -> Option<Coordinate> {
        if x < self.data_x || y < self.data_y || self.cell_width == 0 {
            return None;
        }

        let row_offset = y - self.data_y;
        if row_offset >= self.data_height {
            return None;
        }
        let row = row_offset as usize;
        if row >= row_count {
            return None;
        }

        let offset = x - self.data_x;
        if offset >= self.data_width {
            return None;
        }
        let stride = self.cell_width + self.spacing;
        let column = (offset / stride) as usize;
        if offset % stride >= self.cell_width || column >= column_count {
            return None;
        }

        Some(Coordinate::new(row, column))
    }
}

/// Main application state: the grid widget plus its editing session.
pub struct App {
    /// Widget configuration, fixed for the lifetime of the app.
    pub config: GridConfig,
    /// The grid data, loaded once at construction.
    pub grid: Grid,
    /// Current focus state.
    pub focus: FocusState,
    /// The cell under text edit, if any. The top-level keyboard handler is
    /// active only while this is `None`.
    pub editing: Option<Coordinate>,
    /// Editor input buffer.
    pub input: String,
    /// Cursor position within the input buffer, in characters (not bytes).
    pub cursor_position: usize,
    /// Temporary status message (save failures land here).
    pub status_message: Option<String>,
    /// Cell layout from the last render, for mouse hit-testing.
    pub layout: Option<GridLayout>,
    store: Box<dyn KeyValueStore>,
}

impl App {
    /// Builds the app, loading the grid from the store (or starting from an
    /// all-absent grid when nothing usable is stored).
    pub fn new(config: GridConfig, store: Box<dyn KeyValueStore>) -> Self {
        let grid = GridRepository::load(store.as_ref(), config.row_count, config.column_count);
        Self {
            config,
            grid,
            focus: FocusState::new(config.row_count, config.column_count),
            editing: None,
            input: String::new(),
            cursor_position: 0,
            status_message: None,
            layout: None,
            store,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Read access to the backing store, mainly for tests.
    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    /// Records where the renderer placed the data cells.
    pub fn update_layout(&mut self, layout: GridLayout) {
        self.layout = Some(layout);
    }

    /// Focuses `cell`, closing any open editor first.
    ///
    /// A multi-focus request against existing focus is dropped by the focus
    /// model; the prior focus is kept in that case.
    pub fn focus_cell(&mut self, cell: Coordinate, is_multi_focus: bool) {
        if self.is_editing() {
            self.end_editing();
        }
        if let Some(next) = set_focus(&self.focus, cell, is_multi_focus) {
            self.focus = next;
        }
    }

    /// Moves the primary focus one step in `direction`.
    ///
    /// A no-op when nothing is focused yet, or when the focus model drops a
    /// multi-focus extension.
    pub fn navigate(&mut self, is_multi_focus: bool, direction: NavDirection) {
        if let Some(next) = navigate(&self.focus, is_multi_focus, direction) {
            self.focus = next;
        }
    }

    /// Opens the editor on the primary focus cell.
    ///
    /// Seeds the input buffer with the cell's plain textual value and puts
    /// the cursor at the end. A no-op when nothing is focused.
    pub fn start_editing(&mut self) {
        if let Some(cell) = primary_cell(&self.focus) {
            self.editing = Some(cell);
            self.input = format_cell_edit(self.grid.get(cell));
            self.cursor_position = self.input.chars().count();
        }
    }

    /// Closes the editor. Edits were already written through on every
    /// keystroke, so there is nothing to commit or revert.
    pub fn end_editing(&mut self) {
        self.editing = None;
        self.input.clear();
        self.cursor_position = 0;
    }

    /// Closes the editor and moves focus, the analog of blurring the input
    /// field when an arrow key navigates away from the edited cell.
    pub fn end_editing_and_navigate(&mut self, direction: NavDirection) {
        self.end_editing();
        self.navigate(false, direction);
    }

    /// Byte offset of the cursor in the input buffer. `cursor_position`
    /// counts characters, so multibyte input stays aligned with the buffer.
    fn cursor_byte_index(&self) -> usize {
        self.input
            .char_indices()
            .nth(self.cursor_position)
            .map(|(index, _)| index)
            .unwrap_or(self.input.len())
    }

    fn input_char_count(&self) -> usize {
        self.input.chars().count()
    }

    /// Inserts a character into the input buffer and writes the reparsed
    /// value through.
    pub fn insert_char(&mut self, c: char) {
        let at = self.cursor_byte_index();
        self.input.insert(at, c);
        self.cursor_position += 1;
        self.apply_input();
    }

    /// Deletes the character before the cursor and writes through.
    pub fn delete_backward(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
            let at = self.cursor_byte_index();
            self.input.remove(at);
            self.apply_input();
        }
    }

    /// Deletes the character under the cursor and writes through.
    pub fn delete_forward(&mut self) {
        if self.cursor_position < self.input_char_count() {
            let at = self.cursor_byte_index();
            self.input.remove(at);
            self.apply_input();
        }
    }

    pub fn cursor_left(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
        }
    }

    pub fn cursor_right(&mut self) {
        if self.cursor_position < self.input_char_count() {
            self.cursor_position += 1;
        }
    }

    pub fn cursor_home(&mut self) {
        self.cursor_position = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor_position = self.input_char_count();
    }

    /// Parses the whole input buffer and applies it to the edited cell.
    ///
    /// Unparseable or blank input maps to the absent value. Called on every
    /// buffer change, not debounced.
    pub fn apply_input(&mut self) {
        if let Some(cell) = self.editing {
            let value = parse_cell_input(&self.input);
            self.set_cell_value(cell, value);
        }
    }

    /// Sets a cell value through the controlled grid mutation path and
    /// persists immediately.
    pub fn set_cell_value(&mut self, cell: Coordinate, value: Option<f64>) {
        self.grid.set(cell, value);
        self.persist();
    }

    /// Writes the grid to the store. Failures surface in the status bar and
    /// never abort.
    pub fn persist(&mut self) {
        match GridRepository::save(self.store.as_mut(), &self.grid) {
            Ok(()) => {}
            Err(e) => self.status_message = Some(format!("Save failed: {}", e)),
        }
    }
}
