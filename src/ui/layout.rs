use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Splits the frame into header, body and footer.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2])
}

pub fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height.min(area.height)),
            Constraint::Fill(1),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

/// Cells of a grid with `columns` columns and rows of `row_height`.
pub fn grid_cells(area: Rect, count: usize, columns: usize, row_height: u16) -> Vec<Rect> {
    if columns == 0 {
        return Vec::new();
    }
    let rows = count.div_ceil(columns);
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints((0..rows).map(|_| Constraint::Length(row_height)))
        .split(area);

    let mut cells = Vec::with_capacity(count);
    for row_area in row_areas.iter() {
        let columns_split = Layout::default()
            .direction(Direction::Horizontal)
            .constraints((0..columns).map(|_| Constraint::Ratio(1, columns as u32)))
            .split(*row_area);
        cells.extend(columns_split.iter().copied());
    }
    cells.truncate(count);
    cells
}
