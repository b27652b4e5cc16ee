//! Focus transition and cell value services.
//!
//! The focus model is a set of pure functions over [`FocusState`]: given the
//! current state and a user gesture (click or arrow key), they compute the
//! next state without touching any other part of the application. Cell value
//! parsing and display formatting live here too since they are equally
//! stateless.

use super::models::{Coordinate, FocusRegion, FocusState, NavDirection};

/// Returns true if the grid has any focus at all.
///
/// # Examples
///
/// ```
/// use gridpad::domain::{has_focus, set_focus, Coordinate, FocusState};
///
/// let state = FocusState::new(5, 5);
/// assert!(!has_focus(&state));
///
/// let state = set_focus(&state, Coordinate::new(1, 1), false).unwrap();
/// assert!(has_focus(&state));
/// ```
pub fn has_focus(state: &FocusState) -> bool {
    state.regions.as_ref().is_some_and(|r| !r.is_empty())
}

/// Returns true if more than a single cell is focused: either several
/// regions exist, or the first region spans a rectangle.
pub fn has_multi_focus(state: &FocusState) -> bool {
    has_focus(state)
        && state
            .regions
            .as_ref()
            .is_some_and(|r| r.len() > 1 || r[0].end.is_some())
}

/// The primary focus cell: the start of the first region.
///
/// Returns `None` when nothing is focused. Callers that need a cell to
/// operate on must treat `None` as "no focus, do nothing" rather than
/// assuming a focus exists.
pub fn primary_cell(state: &FocusState) -> Option<Coordinate> {
    state
        .regions
        .as_ref()
        .and_then(|r| r.first())
        .map(|region| region.start)
}

/// Computes the focus state after a cell is targeted (by click or by
/// keyboard navigation landing on it).
///
/// When there is no current focus, or when a plain single-cell focus is
/// requested, all prior regions are replaced with one single-cell region at
/// `target`. A multi-focus extension against an existing focus is the
/// unimplemented branch of the model: the update is dropped and `None` is
/// returned, so callers keep their prior state.
pub fn set_focus(
    state: &FocusState,
    target: Coordinate,
    is_multi_focus: bool,
) -> Option<FocusState> {
    if !has_focus(state) || !is_multi_focus {
        return Some(FocusState {
            regions: Some(vec![FocusRegion::single(target)]),
            row_count: state.row_count,
            column_count: state.column_count,
        });
    }
    None
}

/// Returns true if `cell` is the focused cell.
///
/// Only meaningful under single focus: with no focus, or with a multi-cell
/// focus (whose highlighting is not implemented), this is false for every
/// coordinate.
///
/// # Examples
///
/// ```
/// use gridpad::domain::{is_cell_focused, set_focus, Coordinate, FocusState};
///
/// let state = set_focus(&FocusState::new(3, 3), Coordinate::new(1, 2), false).unwrap();
/// assert!(is_cell_focused(&state, Coordinate::new(1, 2)));
/// assert!(!is_cell_focused(&state, Coordinate::new(2, 1)));
/// ```
pub fn is_cell_focused(state: &FocusState, cell: Coordinate) -> bool {
    if has_focus(state) && !has_multi_focus(state) {
        if let Some(regions) = state.regions.as_ref() {
            return regions[0].start == cell;
        }
    }
    false
}

/// Computes the focus state after an arrow-key navigation.
///
/// Moves the primary cell one step in `direction`, clamped to
/// `[0, row_count)` and `[0, column_count)`, then delegates to [`set_focus`]
/// with the new coordinate. Returns `None` when nothing is focused (there is
/// no origin to navigate from) or when the delegated `set_focus` drops a
/// multi-focus extension.
pub fn navigate(
    state: &FocusState,
    is_multi_focus: bool,
    direction: NavDirection,
) -> Option<FocusState> {
    let mut cell = primary_cell(state)?;

    match direction {
        NavDirection::Up => cell.row = cell.row.saturating_sub(1),
        NavDirection::Down => cell.row = (cell.row + 1).min(state.row_count.saturating_sub(1)),
        NavDirection::Left => cell.column = cell.column.saturating_sub(1),
        NavDirection::Right => {
            cell.column = (cell.column + 1).min(state.column_count.saturating_sub(1))
        }
    }

    set_focus(state, cell, is_multi_focus)
}

/// Parses editor text into a cell value.
///
/// Empty or whitespace-only input is the absent value, as is anything that
/// does not parse as a float. Parsing never fails; bad input just maps to
/// `None`.
///
/// # Examples
///
/// ```
/// use gridpad::domain::parse_cell_input;
///
/// assert_eq!(parse_cell_input("12.5"), Some(12.5));
/// assert_eq!(parse_cell_input("  "), None);
/// assert_eq!(parse_cell_input("abc"), None);
/// ```
pub fn parse_cell_input(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Formats a cell value for display in the grid: a currency prefix and two
/// decimal places for a present value, empty for an absent one.
pub fn format_cell_display(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("${:.2}", v),
        None => String::new(),
    }
}

/// Formats a cell value for seeding the editor input buffer: the plain
/// textual value with no currency prefix, empty for an absent one.
pub fn format_cell_edit(value: Option<f64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => String::new(),
    }
}
