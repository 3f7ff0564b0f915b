use ratatui::layout::Rect;

/// Splits the screen into header, body and footer bands.
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

/// Splits the body into search form, story table and status line.
pub fn body_regions(body: Rect) -> (Rect, Rect, Rect) {
    let form_height = body.height.min(3);
    let status_height = 1.min(body.height.saturating_sub(form_height));
    let form = Rect {
        height: form_height,
        ..body
    };
    let status = Rect {
        y: body.y + body.height.saturating_sub(status_height),
        height: status_height,
        ..body
    };
    let list = Rect {
        y: body.y + form_height,
        height: body.height.saturating_sub(form_height + status_height),
        ..body
    };
    (form, list, status)
}
