use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use unicode_width::UnicodeWidthChar;

/// Blanks `area` to spaces in `style`, making overlays opaque over whatever
/// the grid drew underneath.
pub fn fill(area: Rect, buf: &mut Buffer, style: Style) {
    for dy in 0..area.height {
        for dx in 0..area.width {
            if let Some(cell) = buf.cell_mut((area.x + dx, area.y + dy)) {
                cell.set_symbol(" ");
                cell.set_style(style);
            }
        }
    }
}

/// Writes `input` starting at `(x, y)`, truncated to `max_cols` display
/// columns. Writes outside the buffer are dropped. A wide character that
/// would straddle the limit is dropped rather than split.
///
/// Returns the number of columns written.
pub fn render_str_clipped(
    x: u16,
    y: u16,
    max_cols: u16,
    buf: &mut Buffer,
    input: &str,
    style: Style,
) -> u16 {
    let max_cols = max_cols as usize;
    let mut out_cols = 0usize;

    for ch in input.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if w == 0 {
            continue;
        }
        if out_cols + w > max_cols {
            break;
        }
        if let Some(cell) = buf.cell_mut((x + out_cols as u16, y)) {
            cell.set_style(style);
            cell.set_symbol(ch.encode_utf8(&mut [0u8; 4]));
        }
        // Blank the continuation cell of a wide character.
        if w == 2
            && let Some(cell) = buf.cell_mut((x + out_cols as u16 + 1, y))
        {
            cell.set_style(style);
            cell.set_symbol(" ");
        }
        out_cols += w;
    }

    out_cols as u16
}

/// Renders a [`Line`] span by span, each span's style patched over `base`,
/// clipped to `max_cols` columns total.
pub fn render_line_clipped(
    x: u16,
    y: u16,
    max_cols: u16,
    buf: &mut Buffer,
    line: &Line<'_>,
    base: Style,
) {
    let mut cursor = 0u16;
    for span in &line.spans {
        if cursor >= max_cols {
            return;
        }
        let style = base.patch(span.style);
        let written = render_str_clipped(
            x + cursor,
            y,
            max_cols - cursor,
            buf,
            span.content.as_ref(),
            style,
        );
        cursor += written;
    }
}
