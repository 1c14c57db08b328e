use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub const SEARCH_BAR_HEIGHT: u16 = 3;
/// Cards and banners are capped to this width and centred.
pub const CONTENT_MAX_WIDTH: u16 = 72;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Splits the body into the search bar and the content below it, both
/// horizontally centred and at most `CONTENT_MAX_WIDTH` wide.
pub fn body_regions(body: Rect) -> (Rect, Rect) {
    let column = centered_column(body, CONTENT_MAX_WIDTH);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(SEARCH_BAR_HEIGHT),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(column);
    (rows[1], rows[3])
}

pub fn centered_column(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height: area.height,
    }
}
