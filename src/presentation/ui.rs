use crate::application::{App, GridLayout};
use crate::domain::{format_cell_display, is_cell_focused, primary_cell, Coordinate, Grid};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

const COLUMN_SPACING: u16 = 1;

pub fn render_ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_grid(f, app, chunks[1]);
    render_status_bar(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let position = match primary_cell(&app.focus) {
        Some(cell) => format!("{}{}", Grid::column_label(cell.column), cell.row),
        None => "none".to_string(),
    };
    let header = Paragraph::new(format!("gridpad | Cell: {}", position))
        .style(Style::default().fg(Color::Cyan));
    f.render_widget(header, area);
}

/// Width of one rendered column: the configured total split evenly across
/// the row-label column and the data columns.
fn cell_width(app: &App) -> u16 {
    (app.config.width / (app.config.column_count as u16 + 1)).max(1)
}

fn render_grid(f: &mut Frame, app: &mut App, area: Rect) {
    let width = cell_width(app);
    let focused = primary_cell(&app.focus);

    let mut headers = vec![Cell::from("")];
    for col in 0..app.config.column_count {
        let header_style = if focused.is_some_and(|c| c.column == col) {
            Style::default().bg(Color::LightBlue).fg(Color::Black)
        } else {
            Style::default().fg(Color::Yellow)
        };
        headers.push(Cell::from(Grid::column_label(col)).style(header_style));
    }
    let header_row = Row::new(headers).height(1);

    let mut rows = vec![header_row];
    for row in 0..app.config.row_count {
        let label_style = if focused.is_some_and(|c| c.row == row) {
            Style::default().bg(Color::LightBlue).fg(Color::Black)
        } else {
            Style::default().fg(Color::Yellow)
        };
        let mut cells = vec![Cell::from(format!("{}", row)).style(label_style)];

        for col in 0..app.config.column_count {
            let coordinate = Coordinate::new(row, col);
            let (content, style) = if app.editing == Some(coordinate) {
                (
                    app.input.clone(),
                    Style::default().bg(Color::Green).fg(Color::Black),
                )
            } else if is_cell_focused(&app.focus, coordinate) {
                (
                    format_cell_display(app.grid.get(coordinate)),
                    Style::default().bg(Color::Blue).fg(Color::White),
                )
            } else {
                (format_cell_display(app.grid.get(coordinate)), Style::default())
            };
            cells.push(Cell::from(content).style(style));
        }

        rows.push(Row::new(cells).height(1));
    }

    let widths = vec![Constraint::Length(width); app.config.column_count + 1];
    let table = Table::new(rows, widths)
        .block(Block::default().borders(Borders::ALL).title("Grid"))
        .column_spacing(COLUMN_SPACING);

    f.render_widget(table, area);

    // Record where the data cells landed for mouse hit-testing. The block
    // border takes one cell on each side, the header row one more line, and
    // the label column plus spacing sits left of the first data cell. The
    // rendered extent bounds hit-testing so clipped cells cannot be hit.
    let data_x = area.x + 1 + width + COLUMN_SPACING;
    let data_y = area.y + 2;
    let right = (area.x + area.width).saturating_sub(1);
    let bottom = (area.y + area.height).saturating_sub(1);
    app.update_layout(GridLayout {
        data_x,
        data_y,
        cell_width: width,
        spacing: COLUMN_SPACING,
        data_width: right.saturating_sub(data_x),
        data_height: bottom.saturating_sub(data_y),
    });
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let (text, style) = match app.editing {
        Some(cell) => (
            format!(
                "Editing {}{}: {} (Enter/Esc to close, Up/Down to move on)",
                Grid::column_label(cell.column),
                cell.row,
                app.input
            ),
            Style::default().fg(Color::Green),
        ),
        None => {
            let text = if let Some(ref status) = app.status_message {
                status.clone()
            } else {
                "Click: focus cell | Arrows: move | Enter: edit | q: quit".to_string()
            };
            (text, Style::default())
        }
    };

    let status = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(style);
    f.render_widget(status, area);
}
