use crate::render;
use crate::theme::Theme;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::Text;

/// Background tone for a detail row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DetailTone {
    #[default]
    Light,
    Dark,
}

/// Auxiliary content rendered beneath a data row, spanning the width of the
/// first `col_span` grid columns.
///
/// Pure: no internal state, no lifecycle. Visibility is entirely up to the
/// host, which either renders it or doesn't.
#[derive(Clone, Debug)]
pub struct DetailRow<'a> {
    content: Text<'a>,
    col_span: usize,
    tone: DetailTone,
}

impl<'a> DetailRow<'a> {
    pub fn new(content: impl Into<Text<'a>>, col_span: usize) -> Self {
        Self {
            content: content.into(),
            col_span,
            tone: DetailTone::default(),
        }
    }

    pub fn with_tone(mut self, tone: DetailTone) -> Self {
        self.tone = tone;
        self
    }

    pub fn tone(&self) -> DetailTone {
        self.tone
    }

    /// Renders into `area`, which the host carves out beneath the data row.
    ///
    /// `col_widths` are the grid's column widths including any gap columns;
    /// the spanned width is the sum of the first `col_span` of them, clamped
    /// to the area. A zero span, empty area, or empty width list renders
    /// nothing.
    pub fn render(&self, area: Rect, buf: &mut Buffer, col_widths: &[u16], theme: &Theme) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let span_w: u16 = col_widths
            .iter()
            .take(self.col_span)
            .fold(0u16, |acc, w| acc.saturating_add(*w));
        let span_w = span_w.min(area.width);
        if span_w == 0 {
            return;
        }

        let style = match self.tone {
            DetailTone::Light => theme.detail_light,
            DetailTone::Dark => theme.detail_dark,
        };
        let span_area = Rect::new(area.x, area.y, span_w, area.height);
        render::fill(span_area, buf, style);

        for (i, line) in self.content.lines.iter().enumerate() {
            if i as u16 >= area.height {
                break;
            }
            render::render_line_clipped(area.x, area.y + i as u16, span_w, buf, line, style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::text::Line;

    fn row_text(buf: &Buffer, y: u16, w: u16) -> String {
        (0..w)
            .map(|x| buf.cell((x, y)).map(|c| c.symbol()).unwrap_or(" "))
            .collect()
    }

    #[test]
    fn spans_first_n_column_widths() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 20, 1));
        let row = DetailRow::new("details", 2);
        row.render(
            Rect::new(0, 0, 20, 1),
            &mut buf,
            &[4, 4, 4],
            &Theme::default(),
        );
        // Spanned width is 8: content plus background, nothing past x=7.
        assert_eq!(row_text(&buf, 0, 10), "details   ");
        let bg = buf.cell((7, 0)).unwrap().style().bg;
        let outside = buf.cell((8, 0)).unwrap().style().bg;
        assert_ne!(bg, outside);
    }

    #[test]
    fn defaults_to_light_tone() {
        let row = DetailRow::new("x", 1);
        assert_eq!(row.tone(), DetailTone::Light);
    }

    #[test]
    fn dark_tone_uses_dark_background() {
        let theme = Theme::default();
        let mut buf = Buffer::empty(Rect::new(0, 0, 8, 1));
        DetailRow::new("x", 1)
            .with_tone(DetailTone::Dark)
            .render(Rect::new(0, 0, 8, 1), &mut buf, &[8], &theme);
        assert_eq!(buf.cell((0, 0)).unwrap().style().bg, theme.detail_dark.bg);
    }

    #[test]
    fn zero_span_renders_nothing() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 8, 1));
        DetailRow::new("hidden", 0).render(Rect::new(0, 0, 8, 1), &mut buf, &[4, 4], &Theme::default());
        assert_eq!(row_text(&buf, 0, 8), "        ");
    }

    #[test]
    fn empty_area_is_noop() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 8, 1));
        DetailRow::new("x", 1).render(Rect::new(0, 0, 0, 0), &mut buf, &[4], &Theme::default());
        assert_eq!(row_text(&buf, 0, 8), "        ");
    }

    #[test]
    fn multiline_content_fills_row_height() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 2));
        let text = Text::from(vec![Line::from("one"), Line::from("two"), Line::from("three")]);
        DetailRow::new(text, 1).render(Rect::new(0, 0, 10, 2), &mut buf, &[10], &Theme::default());
        assert_eq!(row_text(&buf, 0, 3), "one");
        assert_eq!(row_text(&buf, 1, 3), "two");
        // The third line does not fit and is clipped.
    }

    #[test]
    fn span_clamps_to_area_width() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 6, 1));
        DetailRow::new("abcdefgh", 3).render(
            Rect::new(0, 0, 6, 1),
            &mut buf,
            &[4, 4, 4],
            &Theme::default(),
        );
        assert_eq!(row_text(&buf, 0, 6), "abcdef");
    }
}
