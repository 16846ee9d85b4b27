//! Results overlay: fixed first column, the visible paged column and
//! clickable arrows to page through the rest.

use crate::data::{ResultsArrows, ScreenRect};
use crate::widgets::{ResultsPanelState, LINES_PER_COLUMN};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

const PREVIOUS_ARROW: &str = "◀";
const NEXT_ARROW: &str = "▶";

pub struct ResultsOverlay<'a> {
    panel: &'a ResultsPanelState,
}

impl<'a> ResultsOverlay<'a> {
    pub fn new(panel: &'a ResultsPanelState) -> Self {
        Self { panel }
    }

    /// Centered overlay area inside `bounds`
    pub fn overlay_area(bounds: Rect) -> Rect {
        let width = bounds.width.min(90);
        // Column lines + pager row + borders
        let height = bounds.height.min(LINES_PER_COLUMN as u16 + 3);
        Rect::new(
            bounds.x + (bounds.width - width) / 2,
            bounds.y + (bounds.height - height) / 2,
            width,
            height,
        )
    }

    fn column(lines: &[String]) -> Paragraph<'static> {
        Paragraph::new(
            lines
                .iter()
                .map(|line| Line::from(line.clone()))
                .collect::<Vec<_>>(),
        )
    }

    /// Draw the overlay and return where the arrows ended up
    pub fn render(&self, bounds: Rect, buf: &mut Buffer) -> ResultsArrows {
        let area = Self::overlay_area(bounds);
        Clear.render(area, buf);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .title(" Results ");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return ResultsArrows::default();
        }

        if self.panel.loading {
            Paragraph::new("Loading…").render(inner, buf);
            return ResultsArrows::default();
        }
        if self.panel.is_empty() {
            Paragraph::new("No bonuses gained yet").render(inner, buf);
            return ResultsArrows::default();
        }

        let [columns_area, pager_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);
        let [fixed_area, paged_area] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(columns_area);

        Self::column(self.panel.fixed_column()).render(fixed_area, buf);
        Self::column(self.panel.paged_column()).render(paged_area, buf);

        self.render_pager(paged_area.x, pager_area, buf)
    }

    fn render_pager(&self, x: u16, area: Rect, buf: &mut Buffer) -> ResultsArrows {
        let arrow_style = Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD);
        let label = format!(" {} ", self.panel.page_label());

        let mut spans = vec![
            Span::styled(PREVIOUS_ARROW, arrow_style),
            Span::raw(label.clone()),
            Span::styled(NEXT_ARROW, arrow_style),
        ];
        if self.panel.overflow() > 0 {
            spans.push(Span::styled(
                format!("  (+{} lines not shown)", self.panel.overflow()),
                Style::default().fg(Color::DarkGray),
            ));
        }

        let pager = Rect::new(x, area.y, area.right().saturating_sub(x), area.height);
        Paragraph::new(Line::from(spans)).render(pager, buf);

        let label_width = u16::try_from(label.chars().count()).unwrap_or(0);
        let next_x = x + 1 + label_width;
        ResultsArrows {
            previous: Some(ScreenRect::new(x, area.y, 1, 1)),
            next: (next_x < area.right()).then(|| ScreenRect::new(next_x, area.y, 1, 1)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn populated(count: usize) -> ResultsPanelState {
        let mut panel = ResultsPanelState::new();
        panel.open();
        panel.populate((0..count).map(|i| format!("+{} Cunning", i)).collect());
        panel
    }

    #[test]
    fn test_overlay_area_is_centered() {
        let area = ResultsOverlay::overlay_area(Rect::new(0, 0, 100, 40));
        assert_eq!(area, Rect::new(5, 14, 90, 12));
        let small = ResultsOverlay::overlay_area(Rect::new(0, 0, 40, 8));
        assert_eq!(small, Rect::new(0, 0, 40, 8));
    }

    #[test]
    fn test_arrows_point_at_glyphs() {
        let panel = populated(20);
        let bounds = Rect::new(0, 0, 100, 40);
        let mut buf = Buffer::empty(bounds);

        let arrows = ResultsOverlay::new(&panel).render(bounds, &mut buf);

        let previous = arrows.previous.unwrap();
        let next = arrows.next.unwrap();
        assert_eq!(buf[(previous.x, previous.y)].symbol(), PREVIOUS_ARROW);
        assert_eq!(buf[(next.x, next.y)].symbol(), NEXT_ARROW);
    }

    #[test]
    fn test_loading_has_no_arrows() {
        let mut panel = ResultsPanelState::new();
        panel.open();
        let bounds = Rect::new(0, 0, 100, 40);
        let mut buf = Buffer::empty(bounds);
        assert_eq!(
            ResultsOverlay::new(&panel).render(bounds, &mut buf),
            ResultsArrows::default()
        );
    }
}
